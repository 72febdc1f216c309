use serde::{Deserialize, Serialize};

use crate::{Result, ScenflowError};

/// Kind of a workflow step.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, strum::AsRefStr, strum::EnumString, strum::EnumIter, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum StepType {
    Trigger,
    End,
    UserInput,
    UserAction,
    SystemAction,
    SystemCheck,
    DatabaseQuery,
    DatabaseWrite,
    Decision,
    Conditional,
    Notification,
    Navigation,
    Display,
    Logging,
    Integration,
    Review,
    WorkflowAction,
    AiProcess,
    DataOperation,
    ErrorHandling,
}

impl StepType {
    /// Whether the step splits the flow into a "Yes" and a "No" path.
    pub fn is_branch(&self) -> bool {
        matches!(self, StepType::Decision | StepType::Conditional)
    }
}

/// One step of a generated workflow.
///
/// `id` is the 1-based position of the step in its workflow and the order of
/// a `Vec<WorkflowStep>` is the execution order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowStep {
    pub id: u32,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub step_type: StepType,
}

impl WorkflowStep {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        description: impl Into<String>,
        step_type: StepType,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            step_type,
        }
    }

    /// Parse a step list from its JSON array form.
    pub fn list_from_json(s: &str) -> Result<Vec<Self>> {
        serde_json::from_str::<Vec<WorkflowStep>>(s).map_err(|e| ScenflowError::Convert(format!("invalid workflow steps: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_step_type_names() {
        assert_eq!(StepType::iter().count(), 20);
        assert_eq!(StepType::DatabaseWrite.as_ref(), "database_write");
        assert_eq!(StepType::from_str("ai_process").unwrap(), StepType::AiProcess);
    }

    #[test]
    fn test_step_serializes_type_key() {
        let step = WorkflowStep::new(1, "Start", "Begin the flow", StepType::Trigger);
        let value = serde_json::to_value(&step).unwrap();
        assert_eq!(value["type"], "trigger");
        assert_eq!(value["id"], 1);
    }

    #[test]
    fn test_list_from_json() {
        let steps = WorkflowStep::list_from_json(r#"[{"id":1,"name":"Check","description":"","type":"conditional"}]"#).unwrap();
        assert_eq!(steps.len(), 1);
        assert!(steps[0].step_type.is_branch());

        let err = WorkflowStep::list_from_json(r#"[{"id":1,"name":"Check","description":"","type":"unknown"}]"#).unwrap_err();
        assert!(matches!(err, ScenflowError::Convert(_)));
    }
}
