//! Lenient read access to scenario node records

use serde_json::{Map, Value};

/// Read-only view over one node record.
///
/// Scenario nodes are loosely shaped; every accessor returns `None` for a
/// missing or mismatched field instead of failing, so malformed records read
/// as "not applicable" rather than erroring.
#[derive(Debug, Clone, Copy)]
pub struct NodeView<'a> {
    record: &'a Value,
}

impl<'a> NodeView<'a> {
    pub fn new(record: &'a Value) -> Self {
        Self { record }
    }

    /// The `type` discriminant, if present.
    pub fn node_type(&self) -> Option<&'a str> {
        self.record.get("type").and_then(Value::as_str)
    }

    /// Whether this record is a text node, the only kind eligible for choice
    /// labeling.
    pub fn is_text(&self) -> bool {
        self.node_type() == Some("Text")
    }

    /// Outgoing step ids, in order. A missing or non-array `next` reads as
    /// absent.
    pub fn next(&self) -> Option<&'a [Value]> {
        self.record
            .get("next")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
    }

    /// The existing `choices` mapping, if present and object-shaped.
    pub fn choices(&self) -> Option<&'a Map<String, Value>> {
        self.record.get("choices").and_then(Value::as_object)
    }
}
