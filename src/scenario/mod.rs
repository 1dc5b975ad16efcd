//! Scenario document model

mod document;
mod node;
mod paths;

pub use document::{ScenarioDocument, ScenarioError, ScenarioResult};
pub use node::NodeView;
pub use paths::resolve_scenario_path;
