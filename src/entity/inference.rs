use indexmap::{IndexMap, IndexSet};
use tracing::trace;

use crate::{
    config::DEFAULT_DESCRIPTION_EXCERPT_LENGTH,
    entity::{relationship::find_relationship, schema::schema_for},
    model::{DataModel, EntityName, Relationship, WorkflowStep},
};

pub const DATA_MODEL_SCHEMA_ID: &str = "http://json-schema.org/draft-07/schema#";
pub const DATA_MODEL_TITLE: &str = "Generated Data Model";

/// Ordered entity rules. Every rule with a keyword hit adds its entity.
pub const ENTITY_KEYWORDS: &[(EntityName, &[&str])] = &[
    (
        EntityName::User,
        &["user", "customer", "account", "profile", "password", "credential", "login", "sign in", "sign up", "register", "author", "requester", "guest"],
    ),
    (EntityName::Product, &["product", "item", "catalog", "inventory", "stock"]),
    (EntityName::Order, &["order", "purchase", "checkout"]),
    (EntityName::Cart, &["cart", "basket"]),
    (EntityName::Payment, &["payment", "charge", "billing", "invoice", "refund", "deposit"]),
    (EntityName::Ticket, &["ticket", "support", "complaint", "helpdesk", "help desk"]),
    (EntityName::Booking, &["booking", "reservation", "reserve", "appointment", "slot", "calendar"]),
    (EntityName::Content, &["content", "article", "post", "blog", "draft", "publish", "media"]),
    (EntityName::Notification, &["notification", "notify", "email", "sms", "alert", "reminder", "message"]),
    (EntityName::Session, &["session", "token", "authenticated", "signed in"]),
    (EntityName::Task, &["task", "approval", "approve", "assign", "review", "escalate"]),
    (EntityName::Record, &["record", "data", "import", "export", "report"]),
];

/// Entities mentioned by the steps, in order of first detection.
///
/// Never empty: without any hit the set is `{Record}`.
pub fn infer_entities(steps: &[WorkflowStep]) -> IndexSet<EntityName> {
    let mut entities = IndexSet::new();

    for step in steps {
        let text = format!("{} {}", step.name, step.description).to_lowercase();
        for (entity, keywords) in ENTITY_KEYWORDS {
            if keywords.iter().any(|k| text.contains(k)) {
                entities.insert(*entity);
            }
        }
    }

    if entities.is_empty() {
        entities.insert(EntityName::Record);
    }

    entities
}

/// Relationships between the given entities found in the relationship table.
pub fn infer_relationships(entities: &IndexSet<EntityName>) -> Vec<Relationship> {
    let mut relationships = Vec::new();

    for (i, a) in entities.iter().enumerate() {
        for b in entities.iter().skip(i + 1) {
            if let Some(relationship) = find_relationship(*a, *b) {
                relationships.push(relationship);
            }
        }
    }

    relationships
}

/// Build the data model implied by `steps`.
pub fn build_data_model(
    steps: &[WorkflowStep],
    description: &str,
) -> DataModel {
    build_data_model_with_excerpt(steps, description, DEFAULT_DESCRIPTION_EXCERPT_LENGTH)
}

/// Same as [`build_data_model`] with a custom description excerpt length.
pub fn build_data_model_with_excerpt(
    steps: &[WorkflowStep],
    description: &str,
    excerpt_length: usize,
) -> DataModel {
    let entities = infer_entities(steps);
    let relationships = infer_relationships(&entities);
    trace!(entities = entities.len(), relationships = relationships.len(), "inferred data model");

    let schemas: IndexMap<EntityName, _> = entities.iter().map(|entity| (*entity, schema_for(*entity).clone())).collect();
    let excerpt: String = description.chars().take(excerpt_length).collect();

    DataModel {
        schema_id: DATA_MODEL_SCHEMA_ID.to_string(),
        title: DATA_MODEL_TITLE.to_string(),
        description: format!("Data model for: {}", excerpt),
        entities: schemas,
        relationships,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        model::{ScenarioCategory, StepType},
        workflow::generate_steps,
    };

    fn step(text: &str) -> WorkflowStep {
        WorkflowStep::new(1, text, "", StepType::SystemAction)
    }

    #[test]
    fn test_infer_user_from_password() {
        let entities = infer_entities(&[WorkflowStep::new(1, "Reset", "User enters a new password", StepType::UserInput)]);
        assert!(entities.contains(&EntityName::User));
    }

    #[test]
    fn test_infer_product() {
        let entities = infer_entities(&[step("Show product details")]);
        assert!(entities.contains(&EntityName::Product));
    }

    #[test]
    fn test_infer_fallback_record() {
        let entities = infer_entities(&[step("Do something")]);
        assert_eq!(entities.into_iter().collect::<Vec<_>>(), vec![EntityName::Record]);

        let entities = infer_entities(&[]);
        assert_eq!(entities.into_iter().collect::<Vec<_>>(), vec![EntityName::Record]);
    }

    #[test]
    fn test_infer_multiple_rules_per_step_without_duplicates() {
        let entities = infer_entities(&[step("Email the order receipt"), step("Order shipped email")]);
        assert_eq!(entities.into_iter().collect::<Vec<_>>(), vec![EntityName::Order, EntityName::Notification]);
    }

    #[test]
    fn test_infer_keeps_first_detection_order() {
        let entities = infer_entities(&[step("Open ticket"), step("Customer waits")]);
        assert_eq!(entities.into_iter().collect::<Vec<_>>(), vec![EntityName::Ticket, EntityName::User]);
    }

    #[test]
    fn test_ecommerce_entities_and_relationships() {
        let steps = generate_steps(ScenarioCategory::Ecommerce, "");
        let model = build_data_model(&steps, "shop");

        let names: Vec<EntityName> = model.entities.keys().copied().collect();
        assert_eq!(
            names,
            vec![
                EntityName::User,
                EntityName::Product,
                EntityName::Cart,
                EntityName::Payment,
                EntityName::Order,
                EntityName::Notification
            ]
        );

        let pairs: Vec<(EntityName, EntityName)> = model.relationships.iter().map(|r| (r.from, r.to)).collect();
        assert_eq!(
            pairs,
            vec![
                (EntityName::User, EntityName::Cart),
                (EntityName::User, EntityName::Payment),
                (EntityName::User, EntityName::Order),
                (EntityName::User, EntityName::Notification),
                (EntityName::Cart, EntityName::Product),
                (EntityName::Order, EntityName::Product),
                (EntityName::Cart, EntityName::Order),
                (EntityName::Order, EntityName::Payment),
                (EntityName::Order, EntityName::Notification),
            ]
        );
    }

    #[test]
    fn test_relationships_come_from_table() {
        use crate::entity::relationship::RELATIONSHIP_TABLE;
        use strum::IntoEnumIterator;

        for category in ScenarioCategory::iter() {
            let model = build_data_model(&generate_steps(category, ""), "scenario");
            for rel in &model.relationships {
                assert!(model.entities.contains_key(&rel.from));
                assert!(model.entities.contains_key(&rel.to));
                assert!(RELATIONSHIP_TABLE.iter().any(|r| r.to_relationship() == *rel));
            }
        }
    }

    #[test]
    fn test_description_truncated() {
        let long = "é".repeat(150);
        let model = build_data_model(&[], &long);
        assert_eq!(model.description, format!("Data model for: {}", "é".repeat(100)));
        assert_eq!(model.schema_id, DATA_MODEL_SCHEMA_ID);

        let model = build_data_model_with_excerpt(&[], "abcdef", 3);
        assert_eq!(model.description, "Data model for: abc");
    }

    #[test]
    fn test_empty_steps_yield_record_model() {
        let model = build_data_model(&[], "nothing");
        assert_eq!(model.entities.len(), 1);
        assert!(model.entities.contains_key(&EntityName::Record));
        assert!(model.relationships.is_empty());
    }
}
