//! Flowchart edges connecting diagram nodes.
//!
//! Sequential steps are joined by a default edge. A decision step labels the
//! edge to its successor "Yes" and adds a dashed "No" edge that skips one step.

use serde::{Deserialize, Serialize};

use crate::diagram::node::NodeId;

/// Kind of an edge, which decides its arrow token.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, strum::AsRefStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EdgeKind {
    /// Plain sequential flow.
    #[default]
    Default,
    /// Branch taken when the decision holds.
    Yes,
    /// Bypass branch taken when the decision fails.
    No,
}

impl EdgeKind {
    pub fn arrow(&self) -> &'static str {
        match self {
            EdgeKind::Default => "-->",
            EdgeKind::Yes => "-->|Yes|",
            EdgeKind::No => "-.->|No|",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DiagramEdge {
    /// ID of the source node.
    pub source: NodeId,
    /// ID of the target node.
    pub target: NodeId,
    pub kind: EdgeKind,
}

impl DiagramEdge {
    pub fn new(
        source: NodeId,
        target: NodeId,
        kind: EdgeKind,
    ) -> Self {
        Self {
            source,
            target,
            kind,
        }
    }

    pub fn render(&self) -> String {
        format!("{} {} {}", self.source, self.kind.arrow(), self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_edges() {
        let edge = DiagramEdge::new("step1".to_string(), "step2".to_string(), EdgeKind::Default);
        assert_eq!(edge.render(), "step1 --> step2");

        let edge = DiagramEdge::new("step4".to_string(), "step5".to_string(), EdgeKind::Yes);
        assert_eq!(edge.render(), "step4 -->|Yes| step5");

        let edge = DiagramEdge::new("step4".to_string(), "step6".to_string(), EdgeKind::No);
        assert_eq!(edge.render(), "step4 -.->|No| step6");
    }
}
