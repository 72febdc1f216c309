//! Entity inference: which data entities a workflow implies, their schemas
//! and the relationships between them.

mod inference;
pub mod relationship;
pub mod schema;

pub use inference::{
    DATA_MODEL_SCHEMA_ID, DATA_MODEL_TITLE, ENTITY_KEYWORDS, build_data_model, build_data_model_with_excerpt, infer_entities, infer_relationships,
};
pub use relationship::{RELATIONSHIP_TABLE, RelationshipRule, find_relationship};
pub use schema::schema_for;
