//! Choice labeling for branching text nodes
//!
//! Every text node with outgoing edges gets a `choices` mapping assigning a
//! human-readable label to each edge, drawn from a fixed vocabulary keyed by
//! edge count. Recomputing on an already-labeled document produces no change,
//! so callers can persist only when something was actually relabeled.

use crate::scenario::{NodeView, ScenarioDocument};
use serde_json::{Map, Value};
use tracing::debug;

const BASE_LABELS: [&str; 4] = ["Да", "Нет", "Не знаю", "Может быть"];

/// The label vocabulary for a node with `n` outgoing edges.
///
/// Up to four edges use the fixed answers; beyond that, positions 5..=n get
/// synthesized "Вариант {i}" labels.
pub fn choice_labels(n: usize) -> Vec<String> {
    let mut labels: Vec<String> = BASE_LABELS
        .iter()
        .take(n)
        .map(|label| (*label).to_string())
        .collect();
    for i in 5..=n {
        labels.push(format!("Вариант {}", i));
    }
    labels
}

/// Assign choice labels across the whole document, in place.
///
/// For each text node with a non-empty `next` sequence, the expected
/// `choices` mapping is `next[i] -> labels(len(next))[i]`, keyed in `next`
/// order. A node is only touched (and counted) when its existing `choices`
/// differs from the expected mapping. Returns the number of changed nodes.
pub fn relabel(document: &mut ScenarioDocument) -> usize {
    let mut changed = 0;
    for (conversation, nodes) in document.conversations_mut() {
        for node in nodes.iter_mut() {
            let expected = match expected_choices(node) {
                Some(choices) => choices,
                None => continue,
            };
            if NodeView::new(node).choices() == Some(&expected) {
                continue;
            }
            if let Some(record) = node.as_object_mut() {
                debug!(conversation, edges = expected.len(), "relabeled node");
                record.insert("choices".to_string(), Value::Object(expected));
                changed += 1;
            }
        }
    }
    changed
}

/// The choices mapping a node should carry, or `None` when the node is not
/// eligible: not a text node, or `next` missing or empty. Non-string entries
/// in `next` are skipped but still occupy a label position.
fn expected_choices(node: &Value) -> Option<Map<String, Value>> {
    let view = NodeView::new(node);
    if !view.is_text() {
        return None;
    }
    let next = view.next()?;
    if next.is_empty() {
        return None;
    }
    let labels = choice_labels(next.len());
    let mut choices = Map::new();
    for (i, step) in next.iter().enumerate() {
        let Some(step_id) = step.as_str() else {
            continue;
        };
        if i < labels.len() {
            choices.insert(step_id.to_string(), Value::String(labels[i].clone()));
        }
    }
    Some(choices)
}
