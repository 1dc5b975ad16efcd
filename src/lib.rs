//! Scenarist: dialogue scenario toolkit
//!
//! Post-processes JSON scenario documents for a dialogue decision tree. A
//! scenario maps each conversation id to an ordered sequence of step nodes;
//! branching text nodes carry a `choices` mapping naming the label shown for
//! each outgoing edge. The labeler derives those labels from a fixed
//! vocabulary keyed by edge count.
//!
//! # Example
//!
//! ```
//! use scenarist::{relabel, ScenarioDocument};
//! use serde_json::json;
//!
//! let mut document = ScenarioDocument::from_value(json!({
//!     "c1": [{"type": "Text", "next": ["a", "b"]}]
//! })).unwrap();
//! assert_eq!(relabel(&mut document), 1);
//! ```

pub mod labeler;
pub mod report;
pub mod scenario;

pub use labeler::{choice_labels, relabel};
pub use report::{ConversationStats, ScenarioStats};
pub use scenario::{
    resolve_scenario_path, NodeView, ScenarioDocument, ScenarioError, ScenarioResult,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
