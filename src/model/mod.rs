mod category;
mod data_model;
mod result;
mod step;

pub use category::ScenarioCategory;
pub use data_model::{Cardinality, DataModel, DataType, EntityName, EntitySchema, PropertySchema, Relationship};
pub use result::{GenerationMetadata, ScenarioResult};
pub use step::{StepType, WorkflowStep};
