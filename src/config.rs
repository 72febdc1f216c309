use std::{fs, path::Path};

use serde::Deserialize;

use crate::{Result, ScenflowError};

/// Minimum trimmed length a description must have to be accepted.
pub const DEFAULT_MIN_DESCRIPTION_LENGTH: usize = 10;
/// Number of characters of the description kept in the data model description.
pub const DEFAULT_DESCRIPTION_EXCERPT_LENGTH: usize = 100;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// backend config
    pub backend: BackendConfig,
    /// minimum trimmed description length, defaults to 10
    pub min_description_length: usize,
    /// characters of the description kept in the data model, defaults to 100
    pub description_excerpt_length: usize,
    /// number of async worker threads, range [1, 32768), defaults to 4
    pub async_worker_thread_number: u16,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// backend type
    pub backend_type: BackendType,
    /// simulated classification latency in milliseconds, 0 disables it
    pub classify_delay_ms: u64,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BackendType {
    #[default]
    Template,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: BackendConfig::default(),
            min_description_length: DEFAULT_MIN_DESCRIPTION_LENGTH,
            description_excerpt_length: DEFAULT_DESCRIPTION_EXCERPT_LENGTH,
            async_worker_thread_number: 4,
        }
    }
}

impl Config {
    pub fn create<T: AsRef<Path>>(path: T) -> Result<Self> {
        let data = fs::read_to_string(path.as_ref()).map_err(|e| ScenflowError::Config(format!("failed to load config file {:?}: {}", path.as_ref(), e)))?;

        Self::load_from_str(data.as_str())
    }

    pub fn load_from_str(toml_str: &str) -> Result<Self> {
        let config = toml::from_str::<Config>(toml_str)?;
        if config.async_worker_thread_number == 0 {
            return Err(ScenflowError::Config("async_worker_thread_number must be at least 1".to_string()));
        }
        Ok(config)
    }
}
