//! Backends answer the first two pipeline stages: classification and step
//! generation. Diagram synthesis and entity inference only see the steps a
//! backend returns, so a backend can be swapped without touching them.

mod template;

use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    BackendConfig, BackendType, Result,
    model::{ScenarioCategory, WorkflowStep},
};

pub use template::TemplateBackend;

#[async_trait]
pub trait ScenarioBackend: Send + Sync {
    /// Returns the name of the backend, used in logs.
    fn name(&self) -> &str;

    /// Classifies a description into a scenario category.
    ///
    /// # Arguments
    ///
    /// * `description` - The free-text scenario description.
    async fn classify(
        &self,
        description: &str,
    ) -> Result<ScenarioCategory>;

    /// Generates the ordered workflow steps for a category.
    ///
    /// # Arguments
    ///
    /// * `category` - The category returned by [`ScenarioBackend::classify`].
    /// * `description` - The original description.
    ///
    /// # Returns
    ///
    /// Returns the steps in execution order with 1-based ids.
    async fn generate_steps(
        &self,
        category: ScenarioCategory,
        description: &str,
    ) -> Result<Vec<WorkflowStep>>;
}

/// Creates the backend selected by the configuration.
pub fn create_backend(config: &BackendConfig) -> Arc<dyn ScenarioBackend> {
    match config.backend_type {
        BackendType::Template => Arc::new(TemplateBackend::from_config(config)),
    }
}
