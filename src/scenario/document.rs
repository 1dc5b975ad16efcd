//! Scenario document: load, save, conversation access

use serde_json::{Map, Value};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading or saving a scenario
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("scenario file not found (looked for {0})")]
    ScenarioNotFound(String),

    #[error("scenario root must be a JSON object")]
    NotAnObject,
}

/// Result type for scenario operations
pub type ScenarioResult<T> = Result<T, ScenarioError>;

/// A scenario document: a JSON object mapping conversation ids to ordered
/// sequences of step nodes.
///
/// The document is held as generic JSON. Entries whose value is not a
/// sequence, and node fields the tooling does not interpret, pass through a
/// load/save cycle untouched apart from re-serialization formatting. Key
/// order is preserved.
#[derive(Debug, Clone)]
pub struct ScenarioDocument {
    root: Map<String, Value>,
}

impl ScenarioDocument {
    /// Build a document from an already-parsed JSON value.
    pub fn from_value(root: Value) -> ScenarioResult<Self> {
        match root {
            Value::Object(root) => Ok(Self { root }),
            _ => Err(ScenarioError::NotAnObject),
        }
    }

    /// Read and parse a scenario file.
    pub fn load(path: &Path) -> ScenarioResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let root: Value = serde_json::from_str(&raw)?;
        Self::from_value(root)
    }

    /// Write the document back with 2-space indentation. Non-ASCII text is
    /// emitted literally, not escaped.
    pub fn save(&self, path: &Path) -> ScenarioResult<()> {
        let rendered = serde_json::to_string_pretty(&self.root)?;
        std::fs::write(path, rendered)?;
        Ok(())
    }

    /// The raw top-level mapping.
    pub fn root(&self) -> &Map<String, Value> {
        &self.root
    }

    /// Conversation entries: only values that are node sequences.
    pub fn conversations(&self) -> impl Iterator<Item = (&str, &Vec<Value>)> {
        self.root
            .iter()
            .filter_map(|(id, value)| value.as_array().map(|nodes| (id.as_str(), nodes)))
    }

    /// Mutable conversation entries, skipping non-sequence values.
    pub fn conversations_mut(&mut self) -> impl Iterator<Item = (&str, &mut Vec<Value>)> {
        self.root
            .iter_mut()
            .filter_map(|(id, value)| value.as_array_mut().map(|nodes| (id.as_str(), nodes)))
    }
}
