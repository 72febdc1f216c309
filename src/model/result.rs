use serde::{Deserialize, Serialize};

use crate::{
    Result, ScenflowError,
    model::{DataModel, ScenarioCategory, WorkflowStep},
};

/// Outcome of one pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioResult {
    pub category: ScenarioCategory,
    pub workflow: Vec<WorkflowStep>,
    pub diagram: String,
    pub data_model: DataModel,
    pub summary: String,
    pub metadata: GenerationMetadata,
}

/// Run bookkeeping. `run_id` and `generated_at` differ between runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationMetadata {
    pub run_id: String,
    pub generated_at: String,
    pub step_count: usize,
    pub entity_count: usize,
    pub relationship_count: usize,
}

impl ScenarioResult {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(s: &str) -> Result<Self> {
        serde_json::from_str::<ScenarioResult>(s).map_err(|e| ScenflowError::Convert(format!("invalid scenario result: {}", e)))
    }

    /// Compares everything except the per-run metadata.
    pub fn same_content(
        &self,
        other: &ScenarioResult,
    ) -> bool {
        self.category == other.category
            && self.workflow == other.workflow
            && self.diagram == other.diagram
            && self.data_model == other.data_model
            && self.summary == other.summary
    }
}
