//! Error types for Scenflow.
//!
//! All errors in Scenflow are represented by the `ScenflowError` enum.
//! Fallbacks inside the pipeline (unknown category, unknown entity, empty
//! step list) are never errors; only rejected input and failed runs are.

use std::io::ErrorKind;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for all Scenflow operations.
#[derive(Deserialize, Serialize, Error, Debug, Clone, PartialEq)]
pub enum ScenflowError {
    /// Input rejected before the pipeline starts.
    #[error("invalid input: {0}")]
    Validation(String),

    /// The pipeline failed while running. No partial result exists.
    #[error("generation failed: {0}")]
    Generation(String),

    /// Configuration parsing or loading errors.
    #[error("{0}")]
    Config(String),

    /// Data conversion errors (JSON, TOML).
    #[error("{0}")]
    Convert(String),

    /// Errors reported by a scenario backend.
    #[error("{0}")]
    Backend(String),

    /// I/O operation errors.
    #[error("{0}")]
    IoError(String),
}

impl From<ScenflowError> for String {
    fn from(val: ScenflowError) -> Self {
        val.to_string()
    }
}

impl From<std::io::Error> for ScenflowError {
    fn from(error: std::io::Error) -> Self {
        ScenflowError::IoError(error.to_string())
    }
}

impl From<ScenflowError> for std::io::Error {
    fn from(val: ScenflowError) -> Self {
        #[allow(clippy::io_other_error)]
        std::io::Error::new(ErrorKind::Other, val.to_string())
    }
}

impl From<serde_json::Error> for ScenflowError {
    fn from(error: serde_json::Error) -> Self {
        ScenflowError::Convert(error.to_string())
    }
}

impl From<toml::de::Error> for ScenflowError {
    fn from(error: toml::de::Error) -> Self {
        ScenflowError::Config(error.to_string())
    }
}

impl From<tokio::task::JoinError> for ScenflowError {
    fn from(error: tokio::task::JoinError) -> Self {
        ScenflowError::Generation(error.to_string())
    }
}
