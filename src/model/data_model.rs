use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Data entity a workflow can imply.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, strum::AsRefStr, strum::EnumString, strum::EnumIter, strum::Display)]
pub enum EntityName {
    User,
    Product,
    Order,
    Cart,
    Payment,
    Ticket,
    Booking,
    Content,
    Notification,
    Session,
    Task,
    Record,
}

/// JSON type of a schema property.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, strum::AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DataType {
    String,
    Integer,
    Number,
    Boolean,
    Array,
    Object,
}

/// Schema of a single entity property.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PropertySchema {
    #[serde(rename = "type")]
    pub data_type: DataType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default, rename = "enum", skip_serializing_if = "Option::is_none")]
    pub allowed: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,
    pub description: String,
}

impl PropertySchema {
    pub fn new(
        data_type: DataType,
        description: impl Into<String>,
    ) -> Self {
        Self {
            data_type,
            format: None,
            allowed: None,
            minimum: None,
            default: None,
            description: description.into(),
        }
    }

    pub fn format(
        mut self,
        format: impl Into<String>,
    ) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn allowed(
        mut self,
        values: &[&str],
    ) -> Self {
        self.allowed = Some(values.iter().map(|v| v.to_string()).collect());
        self
    }

    pub fn minimum(
        mut self,
        minimum: f64,
    ) -> Self {
        self.minimum = Some(minimum);
        self
    }

    pub fn default_value(
        mut self,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.default = Some(value.into());
        self
    }
}

/// Structural schema of an entity.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EntitySchema {
    #[serde(rename = "type")]
    pub schema_type: DataType,
    pub properties: IndexMap<String, PropertySchema>,
    pub required: Vec<String>,
}

/// Cardinality of a relationship between two entities.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, strum::AsRefStr)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Cardinality {
    OneToOne,
    OneToMany,
    ManyToMany,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Relationship {
    pub from: EntityName,
    pub to: EntityName,
    pub cardinality: Cardinality,
    pub description: String,
}

/// Entities and relationships implied by a workflow.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DataModel {
    pub schema_id: String,
    pub title: String,
    pub description: String,
    pub entities: IndexMap<EntityName, EntitySchema>,
    pub relationships: Vec<Relationship>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_schema_skips_empty_fields() {
        let prop = PropertySchema::new(DataType::String, "Email address").format("email");
        let value = serde_json::to_value(&prop).unwrap();
        assert_eq!(value, serde_json::json!({"type": "string", "format": "email", "description": "Email address"}));
    }

    #[test]
    fn test_cardinality_names() {
        assert_eq!(serde_json::to_value(Cardinality::OneToMany).unwrap(), "one-to-many");
        assert_eq!(Cardinality::ManyToMany.as_ref(), "many-to-many");
    }
}
