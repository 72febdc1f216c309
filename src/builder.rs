use std::sync::Arc;

use tokio::runtime::{Builder, Handle, Runtime};

use crate::{Config, Engine, Result, backend::ScenarioBackend, backend::create_backend};

pub struct EngineBuilder {
    config: Config,
    backend: Option<Arc<dyn ScenarioBackend>>,
    rt: Option<Arc<Runtime>>,
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self {
            config: Config::default(),
            backend: None,
            rt: None,
        }
    }
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(
        mut self,
        config: Config,
    ) -> Self {
        self.config = config;
        self
    }

    pub fn async_worker_thread_number(
        mut self,
        n: u16,
    ) -> Self {
        self.config.async_worker_thread_number = n;
        self
    }

    pub fn min_description_length(
        mut self,
        n: usize,
    ) -> Self {
        self.config.min_description_length = n;
        self
    }

    /// Replaces the backend selected by the configuration.
    pub fn backend(
        mut self,
        backend: Arc<dyn ScenarioBackend>,
    ) -> Self {
        self.backend = Some(backend);
        self
    }

    pub fn runtime(
        mut self,
        runtime: Arc<Runtime>,
    ) -> Self {
        self.rt = Some(runtime);
        self
    }

    /// Builds the engine.
    ///
    /// Runtime selection: the one passed to [`EngineBuilder::runtime`], else the
    /// runtime of the calling tokio context, else a new multi-thread runtime.
    pub fn build(&self) -> Result<Engine> {
        let (handle, runtime) = match (&self.rt, Handle::try_current()) {
            (Some(rt), _) => (rt.handle().clone(), Some(rt.clone())),
            (None, Ok(handle)) => (handle, None),
            (None, Err(_)) => {
                let rt = Arc::new(Builder::new_multi_thread().worker_threads(self.config.async_worker_thread_number.max(1).into()).enable_all().build()?);
                (rt.handle().clone(), Some(rt))
            }
        };
        let backend = match &self.backend {
            Some(backend) => backend.clone(),
            None => create_backend(&self.config.backend),
        };

        Ok(Engine::new(self.config.clone(), backend, handle, runtime))
    }
}
