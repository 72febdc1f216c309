//! Scenario engine - the main entry point for Scenflow.
//!
//! The engine runs the generation pipeline for one description at a time:
//! - Validating the description
//! - Classifying it and generating steps through the backend
//! - Synthesizing the diagram and building the data model concurrently
//! - Assembling the summary and the final result

use std::{sync::Arc, time::Instant};

use tokio::runtime::{Handle, Runtime};
use tracing::{debug, info, warn};

use crate::{
    Config, EngineBuilder, Result, ScenflowError,
    backend::ScenarioBackend,
    diagram, entity,
    model::{GenerationMetadata, ScenarioResult},
    utils,
    workflow::summary_for,
};

/// The scenario engine.
///
/// Engine owns:
/// - A handle to the tokio runtime the diagram and data model tasks run on
/// - The backend answering classification and step generation
/// - The configuration used for validation and excerpts
///
/// Runs share no mutable state, so one engine can serve concurrent callers.
///
/// # Example
///
/// ```rust,ignore
/// let engine = EngineBuilder::new().build()?;
/// let result = engine.generate("Customers browse products and check out with a card")?;
/// println!("{}", result.diagram);
/// ```
pub struct Engine {
    /// Engine configuration.
    config: Config,
    /// Classification and step generation backend.
    backend: Arc<dyn ScenarioBackend>,
    /// Handle tasks are spawned on.
    handle: Handle,
    /// Runtime kept alive by this engine, if any. Shut down on drop when it is the last owner.
    runtime: Option<Arc<Runtime>>,
}

impl Engine {
    /// Creates a new engine with the given configuration.
    ///
    /// Inside a tokio context the current runtime is reused. Otherwise a
    /// runtime with the configured worker threads is created. The backend is
    /// the one selected by `config.backend`.
    pub fn new_with_config(config: Config) -> Result<Self> {
        EngineBuilder::new().config(config).build()
    }

    pub(crate) fn new(
        config: Config,
        backend: Arc<dyn ScenarioBackend>,
        handle: Handle,
        runtime: Option<Arc<Runtime>>,
    ) -> Self {
        Self {
            config,
            backend,
            handle,
            runtime,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Checks that a description may enter the pipeline.
    pub fn validate(
        &self,
        description: &str,
    ) -> Result<()> {
        let length = description.trim().chars().count();
        if length < self.config.min_description_length {
            return Err(ScenflowError::Validation(format!(
                "description must be at least {} characters, got {}",
                self.config.min_description_length, length
            )));
        }
        Ok(())
    }

    /// Runs the pipeline and blocks until the result is ready.
    ///
    /// Must not be called from inside an async context; use [`Engine::run`] there.
    pub fn generate(
        &self,
        description: &str,
    ) -> Result<ScenarioResult> {
        self.handle.block_on(self.run(description))
    }

    /// Runs the pipeline for one description.
    ///
    /// Either the whole result is returned or an error; there are no partial results.
    pub async fn run(
        &self,
        description: &str,
    ) -> Result<ScenarioResult> {
        if let Err(e) = self.validate(description) {
            warn!(error = %e, "rejected description");
            return Err(e);
        }

        let started = Instant::now();
        let run_id = utils::longid();

        let category = self.backend.classify(description).await.map_err(Self::generation_failed)?;
        let steps = self.backend.generate_steps(category, description).await.map_err(Self::generation_failed)?;
        debug!(run_id = %run_id, backend = self.backend.name(), category = category.as_ref(), steps = steps.len(), "generated steps");

        let steps = Arc::new(steps);

        let diagram_task = {
            let steps = steps.clone();
            self.handle.spawn(async move { diagram::synthesize(&steps) })
        };
        let data_model_task = {
            let steps = steps.clone();
            let description = description.to_string();
            let excerpt_length = self.config.description_excerpt_length;
            self.handle.spawn(async move { entity::build_data_model_with_excerpt(&steps, &description, excerpt_length) })
        };

        let (diagram, data_model) = tokio::try_join!(diagram_task, data_model_task)?;

        let workflow = Arc::try_unwrap(steps).unwrap_or_else(|steps| (*steps).clone());

        let metadata = GenerationMetadata {
            run_id,
            generated_at: utils::time::now_rfc3339(),
            step_count: workflow.len(),
            entity_count: data_model.entities.len(),
            relationship_count: data_model.relationships.len(),
        };

        info!(
            run_id = %metadata.run_id,
            category = category.as_ref(),
            steps = metadata.step_count,
            entities = metadata.entity_count,
            relationships = metadata.relationship_count,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "scenario generated"
        );

        Ok(ScenarioResult {
            category,
            workflow,
            diagram,
            data_model,
            summary: summary_for(category).to_string(),
            metadata,
        })
    }

    fn generation_failed(error: ScenflowError) -> ScenflowError {
        match error {
            ScenflowError::Generation(_) => error,
            other => ScenflowError::Generation(other.to_string()),
        }
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        // may run inside async code, must not block
        if let Some(runtime) = self.runtime.take().and_then(|rt| Arc::try_unwrap(rt).ok()) {
            runtime.shutdown_background();
        }
    }
}
