//! Scenario reporting

use crate::scenario::{NodeView, ScenarioDocument};
use serde::Serialize;

/// Per-conversation node counts.
#[derive(Debug, Clone, Serialize)]
pub struct ConversationStats {
    pub id: String,
    /// All records in the sequence, whatever their shape.
    pub nodes: usize,
    pub text_nodes: usize,
    /// Text nodes with at least one outgoing edge.
    pub branching_nodes: usize,
    /// Branching text nodes that already carry a `choices` mapping.
    pub labeled_nodes: usize,
}

/// Whole-document summary.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioStats {
    pub conversations: Vec<ConversationStats>,
}

/// Walk every conversation and tally node kinds. Read-only.
pub fn scan(document: &ScenarioDocument) -> ScenarioStats {
    let conversations = document
        .conversations()
        .map(|(id, nodes)| {
            let mut stats = ConversationStats {
                id: id.to_string(),
                nodes: nodes.len(),
                text_nodes: 0,
                branching_nodes: 0,
                labeled_nodes: 0,
            };
            for node in nodes {
                let view = NodeView::new(node);
                if !view.is_text() {
                    continue;
                }
                stats.text_nodes += 1;
                let branching = view.next().map(|next| !next.is_empty()).unwrap_or(false);
                if branching {
                    stats.branching_nodes += 1;
                    if view.choices().is_some() {
                        stats.labeled_nodes += 1;
                    }
                }
            }
            stats
        })
        .collect();
    ScenarioStats { conversations }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tallies_node_kinds_per_conversation() {
        let document = ScenarioDocument::from_value(json!({
            "c1": [
                {"type": "Text", "next": ["a", "b"], "choices": {"a": "Да", "b": "Нет"}},
                {"type": "Text", "next": ["c"]},
                {"type": "Text", "next": []},
                {"type": "Option", "next": ["d"]}
            ],
            "meta": {"version": 1}
        }))
        .unwrap();

        let stats = scan(&document);
        assert_eq!(stats.conversations.len(), 1);

        let c1 = &stats.conversations[0];
        assert_eq!(c1.id, "c1");
        assert_eq!(c1.nodes, 4);
        assert_eq!(c1.text_nodes, 3);
        assert_eq!(c1.branching_nodes, 2);
        assert_eq!(c1.labeled_nodes, 1);
    }

    #[test]
    fn stats_serialize_as_json() {
        let document = ScenarioDocument::from_value(json!({"c1": []})).unwrap();
        let rendered = serde_json::to_value(scan(&document)).unwrap();
        assert_eq!(
            rendered,
            json!({"conversations": [{
                "id": "c1",
                "nodes": 0,
                "text_nodes": 0,
                "branching_nodes": 0,
                "labeled_nodes": 0
            }]})
        );
    }
}
