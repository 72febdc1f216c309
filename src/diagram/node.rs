use serde::{Deserialize, Serialize};

use crate::{
    diagram::label::escape_label,
    model::{StepType, WorkflowStep},
};

/// node id
pub type NodeId = String;

/// Shape a node is drawn with, chosen by its step type.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, strum::AsRefStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum NodeShape {
    #[default]
    Rectangle,
    Stadium,
    Rhombus,
    Cylinder,
    Parallelogram,
    Subroutine,
    Asymmetric,
    Hexagon,
    Circle,
}

impl NodeShape {
    pub fn for_step_type(step_type: StepType) -> Self {
        match step_type {
            StepType::Trigger | StepType::End => NodeShape::Stadium,
            StepType::Decision | StepType::Conditional => NodeShape::Rhombus,
            StepType::DatabaseQuery | StepType::DatabaseWrite | StepType::DataOperation => NodeShape::Cylinder,
            StepType::UserInput => NodeShape::Parallelogram,
            StepType::Integration => NodeShape::Subroutine,
            StepType::Notification => NodeShape::Asymmetric,
            StepType::AiProcess => NodeShape::Hexagon,
            StepType::ErrorHandling => NodeShape::Circle,
            _ => NodeShape::Rectangle,
        }
    }

    /// Opening and closing delimiters of the shape.
    pub fn delimiters(&self) -> (&'static str, &'static str) {
        match self {
            NodeShape::Rectangle => ("[", "]"),
            NodeShape::Stadium => ("([", "])"),
            NodeShape::Rhombus => ("{", "}"),
            NodeShape::Cylinder => ("[(", ")]"),
            NodeShape::Parallelogram => ("[/", "/]"),
            NodeShape::Subroutine => ("[[", "]]"),
            NodeShape::Asymmetric => (">", "]"),
            NodeShape::Hexagon => ("{{", "}}"),
            NodeShape::Circle => ("((", "))"),
        }
    }
}

/// Style class attached to a node.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, strum::AsRefStr, strum::EnumIter)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum StyleClass {
    StartEnd,
    Decision,
    Notification,
    Database,
    System,
    Action,
}

impl StyleClass {
    /// First match wins, tested against the step type name.
    pub fn for_step_type(step_type: StepType) -> Self {
        let name = step_type.as_ref();
        if name.contains("trigger") || name.contains("end") {
            StyleClass::StartEnd
        } else if name.contains("decision") || name.contains("conditional") {
            StyleClass::Decision
        } else if name.contains("notification") {
            StyleClass::Notification
        } else if name.contains("database") {
            StyleClass::Database
        } else if name.contains("system") {
            StyleClass::System
        } else {
            StyleClass::Action
        }
    }

    pub fn style(&self) -> &'static str {
        match self {
            StyleClass::StartEnd => "fill:#d1fae5,stroke:#059669,stroke-width:2px",
            StyleClass::Decision => "fill:#fef3c7,stroke:#d97706,stroke-width:2px",
            StyleClass::Notification => "fill:#dbeafe,stroke:#2563eb,stroke-width:2px",
            StyleClass::Database => "fill:#ede9fe,stroke:#7c3aed,stroke-width:2px",
            StyleClass::System => "fill:#f3f4f6,stroke:#4b5563,stroke-width:2px",
            StyleClass::Action => "fill:#ffffff,stroke:#374151,stroke-width:1px",
        }
    }
}

/// A flowchart node derived from one workflow step.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DiagramNode {
    /// node id
    pub id: NodeId,
    /// escaped label
    pub label: String,
    /// node shape
    pub shape: NodeShape,
    /// style class
    pub class: StyleClass,
}

impl DiagramNode {
    pub fn node_id(step: &WorkflowStep) -> NodeId {
        format!("step{}", step.id)
    }

    pub fn render(&self) -> String {
        let (open, close) = self.shape.delimiters();
        format!("{}{}{}{}", self.id, open, self.label, close)
    }
}

impl From<&WorkflowStep> for DiagramNode {
    fn from(step: &WorkflowStep) -> Self {
        Self {
            id: Self::node_id(step),
            label: escape_label(&step.name),
            shape: NodeShape::for_step_type(step.step_type),
            class: StyleClass::for_step_type(step.step_type),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shapes() {
        assert_eq!(NodeShape::for_step_type(StepType::Trigger), NodeShape::Stadium);
        assert_eq!(NodeShape::for_step_type(StepType::Conditional), NodeShape::Rhombus);
        assert_eq!(NodeShape::for_step_type(StepType::DatabaseQuery), NodeShape::Cylinder);
        assert_eq!(NodeShape::for_step_type(StepType::Review), NodeShape::Rectangle);
    }

    #[test]
    fn test_style_classes() {
        assert_eq!(StyleClass::for_step_type(StepType::End), StyleClass::StartEnd);
        assert_eq!(StyleClass::for_step_type(StepType::Decision), StyleClass::Decision);
        assert_eq!(StyleClass::for_step_type(StepType::Notification), StyleClass::Notification);
        assert_eq!(StyleClass::for_step_type(StepType::DatabaseWrite), StyleClass::Database);
        assert_eq!(StyleClass::for_step_type(StepType::SystemCheck), StyleClass::System);
        assert_eq!(StyleClass::for_step_type(StepType::UserInput), StyleClass::Action);
        assert_eq!(StyleClass::StartEnd.as_ref(), "startEnd");
    }

    #[test]
    fn test_render_node() {
        let step = WorkflowStep::new(3, "Is [it] \"valid\"?", "", StepType::Decision);
        let node = DiagramNode::from(&step);
        assert_eq!(node.render(), "step3{Is it 'valid'?}");
    }
}
