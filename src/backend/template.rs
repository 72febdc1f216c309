use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::{
    BackendConfig, Result,
    backend::ScenarioBackend,
    model::{ScenarioCategory, WorkflowStep},
    workflow,
};

/// Offline backend: keyword classification and fixed step templates.
#[derive(Debug, Clone, Default)]
pub struct TemplateBackend {
    classify_delay: Option<Duration>,
}

impl TemplateBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &BackendConfig) -> Self {
        Self::new().classify_delay(Duration::from_millis(config.classify_delay_ms))
    }

    /// Simulated latency before classification answers. Zero disables it.
    pub fn classify_delay(
        mut self,
        delay: Duration,
    ) -> Self {
        self.classify_delay = if delay.is_zero() { None } else { Some(delay) };
        self
    }
}

#[async_trait]
impl ScenarioBackend for TemplateBackend {
    fn name(&self) -> &str {
        "template"
    }

    async fn classify(
        &self,
        description: &str,
    ) -> Result<ScenarioCategory> {
        if let Some(delay) = self.classify_delay {
            tokio::time::sleep(delay).await;
        }

        let category = workflow::classify(description);
        debug!(category = category.as_ref(), "classified description");
        Ok(category)
    }

    async fn generate_steps(
        &self,
        category: ScenarioCategory,
        description: &str,
    ) -> Result<Vec<WorkflowStep>> {
        Ok(workflow::generate_steps(category, description))
    }
}
