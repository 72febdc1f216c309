//! Flowchart graph built from a step sequence.
//!
//! Steps are loaded into a petgraph [`DiGraph`] before rendering. Nodes and
//! edges are rendered in insertion order, which keeps the output byte-stable.

use petgraph::{
    Direction,
    graph::{DiGraph, NodeIndex},
};
use strum::IntoEnumIterator;

use crate::{
    diagram::{
        edge::{DiagramEdge, EdgeKind},
        node::{DiagramNode, NodeId, StyleClass},
    },
    model::WorkflowStep,
};

/// Header line every diagram starts with.
pub const DIAGRAM_HEADER: &str = "graph TD";
/// Node emitted for an empty step sequence.
pub const EMPTY_PLACEHOLDER: &str = "empty[No workflow steps]";

const INDENT: &str = "    ";

/// Directed graph of diagram nodes.
#[derive(Debug, Clone, Default)]
pub struct Flowchart {
    graph: DiGraph<DiagramNode, DiagramEdge>,
}

impl Flowchart {
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// get node by id
    pub fn get_node(
        &self,
        id: &str,
    ) -> Option<&DiagramNode> {
        self.find(id).map(|idx| &self.graph[idx])
    }

    /// Get all outgoing edges from a node
    pub fn get_outgoing_edges(
        &self,
        id: &str,
    ) -> Vec<DiagramEdge> {
        // petgraph walks outgoing edges newest first
        let mut edges: Vec<DiagramEdge> = self
            .find(id)
            .map(|src_idx| self.graph.edges_directed(src_idx, Direction::Outgoing).map(|edge_ref| edge_ref.weight().clone()).collect())
            .unwrap_or_default();
        edges.reverse();
        edges
    }

    /// Render the flowchart as Mermaid text.
    pub fn render(&self) -> String {
        let mut lines = vec![DIAGRAM_HEADER.to_string()];

        if self.is_empty() {
            lines.push(format!("{INDENT}{EMPTY_PLACEHOLDER}"));
            return lines.join("\n");
        }

        for idx in self.graph.node_indices() {
            lines.push(format!("{INDENT}{}", self.graph[idx].render()));
        }

        for idx in self.graph.edge_indices() {
            lines.push(format!("{INDENT}{}", self.graph[idx].render()));
        }

        for class in StyleClass::iter() {
            lines.push(format!("{INDENT}classDef {} {}", class.as_ref(), class.style()));
        }

        for idx in self.graph.node_indices() {
            let node = &self.graph[idx];
            lines.push(format!("{INDENT}class {} {}", node.id, node.class.as_ref()));
        }

        lines.join("\n")
    }

    fn find(
        &self,
        id: &str,
    ) -> Option<NodeIndex> {
        self.graph.node_indices().find(|idx| self.graph[*idx].id == id)
    }

    fn add_edge(
        &mut self,
        from: NodeIndex,
        to: NodeIndex,
        kind: EdgeKind,
    ) {
        let source: NodeId = self.graph[from].id.clone();
        let target: NodeId = self.graph[to].id.clone();
        self.graph.add_edge(from, to, DiagramEdge::new(source, target, kind));
    }
}

impl From<&[WorkflowStep]> for Flowchart {
    fn from(steps: &[WorkflowStep]) -> Self {
        let mut flowchart = Flowchart::default();

        let indices: Vec<NodeIndex> = steps.iter().map(|step| flowchart.graph.add_node(DiagramNode::from(step))).collect();

        for (i, step) in steps.iter().enumerate() {
            let Some(&next) = indices.get(i + 1) else {
                break;
            };

            if step.step_type.is_branch() {
                flowchart.add_edge(indices[i], next, EdgeKind::Yes);
                if let Some(&skip) = indices.get(i + 2) {
                    flowchart.add_edge(indices[i], skip, EdgeKind::No);
                }
            } else {
                flowchart.add_edge(indices[i], next, EdgeKind::Default);
            }
        }

        flowchart
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{diagram::NodeShape, model::StepType};

    fn steps(types: &[StepType]) -> Vec<WorkflowStep> {
        types.iter().enumerate().map(|(i, t)| WorkflowStep::new(i as u32 + 1, format!("Step {}", i + 1), "", *t)).collect()
    }

    #[test]
    fn test_sequential_edges() {
        let steps = steps(&[StepType::Trigger, StepType::SystemAction, StepType::End]);
        let flowchart = Flowchart::from(steps.as_slice());
        assert_eq!(flowchart.node_count(), 3);
        assert_eq!(flowchart.edge_count(), 2);
        assert_eq!(flowchart.get_outgoing_edges("step1"), vec![DiagramEdge::new("step1".into(), "step2".into(), EdgeKind::Default)]);
        assert!(flowchart.get_outgoing_edges("step3").is_empty());
    }

    #[test]
    fn test_decision_edges() {
        let steps = steps(&[StepType::Trigger, StepType::Decision, StepType::UserInput, StepType::End]);
        let flowchart = Flowchart::from(steps.as_slice());
        let edges = flowchart.get_outgoing_edges("step2");
        assert_eq!(edges.len(), 2);
        assert_eq!(edges[0], DiagramEdge::new("step2".into(), "step3".into(), EdgeKind::Yes));
        assert_eq!(edges[1], DiagramEdge::new("step2".into(), "step4".into(), EdgeKind::No));
        // the skipped step keeps its own default edge
        assert_eq!(flowchart.get_outgoing_edges("step3")[0].kind, EdgeKind::Default);
        assert_eq!(flowchart.edge_count(), 4);
    }

    #[test]
    fn test_decision_before_last_step() {
        let steps = steps(&[StepType::Trigger, StepType::Conditional, StepType::End]);
        let flowchart = Flowchart::from(steps.as_slice());
        let edges = flowchart.get_outgoing_edges("step2");
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].kind, EdgeKind::Yes);
    }

    #[test]
    fn test_decision_as_last_step() {
        let steps = steps(&[StepType::Trigger, StepType::Decision]);
        let flowchart = Flowchart::from(steps.as_slice());
        assert!(flowchart.get_outgoing_edges("step2").is_empty());
        assert_eq!(flowchart.edge_count(), 1);
    }

    #[test]
    fn test_get_node() {
        let mut steps = steps(&[StepType::Trigger, StepType::Decision, StepType::End]);
        steps[1].name = "Stock > 0?".to_string();
        let flowchart = Flowchart::from(steps.as_slice());

        let node = flowchart.get_node("step2").unwrap();
        assert_eq!(node.label, "Stock -> 0?");
        assert_eq!(node.shape, NodeShape::Rhombus);
        assert_eq!(node.class, StyleClass::Decision);
        assert!(flowchart.get_node("step4").is_none());
    }

    #[test]
    fn test_render_empty() {
        let flowchart = Flowchart::default();
        assert_eq!(flowchart.render(), "graph TD\n    empty[No workflow steps]");
    }

    #[test]
    fn test_render_line_order() {
        let steps = steps(&[StepType::Trigger, StepType::End]);
        let rendered = Flowchart::from(steps.as_slice()).render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "graph TD");
        assert_eq!(lines[1], "    step1([Step 1])");
        assert_eq!(lines[2], "    step2([Step 2])");
        assert_eq!(lines[3], "    step1 --> step2");
        assert!(lines[4].starts_with("    classDef startEnd"));
        assert_eq!(lines[lines.len() - 2], "    class step1 startEnd");
        assert_eq!(lines[lines.len() - 1], "    class step2 startEnd");
    }
}
