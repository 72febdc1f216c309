//! Diagram synthesis: workflow steps to a Mermaid flowchart.

pub mod edge;
pub mod flowchart;
pub mod label;
pub mod node;

pub use edge::{DiagramEdge, EdgeKind};
pub use flowchart::{DIAGRAM_HEADER, EMPTY_PLACEHOLDER, Flowchart};
pub use label::escape_label;
pub use node::{DiagramNode, NodeShape, StyleClass};

use crate::model::WorkflowStep;

/// Translate a step sequence into flowchart text.
///
/// An empty sequence yields a diagram with a single placeholder node.
pub fn synthesize(steps: &[WorkflowStep]) -> String {
    Flowchart::from(steps).render()
}
