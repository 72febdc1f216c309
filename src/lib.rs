//! # Scenflow
//!
//! Scenflow turns a free-text scenario description into three artifacts:
//! an ordered workflow, a Mermaid flowchart and a data model of the entities
//! the workflow implies.
//!
//! ## Pipeline
//!
//! - **Classify**: keyword lookup maps the description to a scenario category
//! - **Generate steps**: the category selects a fixed step template
//! - **Synthesize diagram**: steps become nodes, edges and style classes
//! - **Infer entities**: step text selects entities, schemas and relationships
//!
//! The first two stages sit behind [`ScenarioBackend`], so the offline
//! template backend can be replaced without touching the other two.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use scenflow::EngineBuilder;
//!
//! let engine = EngineBuilder::new().build()?;
//! let result = engine.generate("Customers browse products, fill a cart and pay by card")?;
//! println!("{}", result.to_json()?);
//! ```

mod builder;
mod config;
mod engine;
mod error;
mod utils;

pub mod backend;
pub mod diagram;
pub mod entity;
pub mod model;
pub mod workflow;

pub use backend::{ScenarioBackend, TemplateBackend};
pub use builder::EngineBuilder;
pub use config::*;
pub use engine::Engine;
pub use error::ScenflowError;
pub use model::*;

/// Result type alias for Scenflow operations.
pub type Result<T> = std::result::Result<T, ScenflowError>;
