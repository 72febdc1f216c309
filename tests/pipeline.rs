//! End-to-end tests for the generation pipeline.

use scenflow::{
    Cardinality, EngineBuilder, EntityName, ScenarioCategory, ScenarioResult, ScenflowError, StepType, WorkflowStep,
    diagram::{self, DIAGRAM_HEADER},
    entity, workflow,
};

const CHECKOUT: &str = "Build an e-commerce checkout flow where users can browse products, add items to cart, and complete purchase with payment";

#[test]
fn test_checkout_end_to_end() {
    let engine = EngineBuilder::new().async_worker_thread_number(2).build().expect("Failed to build engine");
    let result = engine.generate(CHECKOUT).expect("Failed to generate scenario");

    assert_eq!(result.category, ScenarioCategory::Ecommerce);
    assert_eq!(result.workflow.len(), 10);
    assert!(result.diagram.starts_with(DIAGRAM_HEADER));

    let model = &result.data_model;
    assert!(model.entities.contains_key(&EntityName::Product));
    assert!(model.entities.contains_key(&EntityName::Order));
    let order_product = model
        .relationships
        .iter()
        .find(|r| r.from == EntityName::Order && r.to == EntityName::Product)
        .expect("Order and Product should be related");
    assert_eq!(order_product.cardinality, Cardinality::ManyToMany);
    assert!(model.description.starts_with("Data model for: Build an e-commerce"));
}

#[test]
fn test_short_description_rejected() {
    let engine = EngineBuilder::new().async_worker_thread_number(1).build().expect("Failed to build engine");
    let err = engine.generate("short").unwrap_err();
    assert!(matches!(err, ScenflowError::Validation(_)));
}

#[test]
fn test_result_json_shape() {
    let engine = EngineBuilder::new().async_worker_thread_number(1).build().expect("Failed to build engine");
    let result = engine.generate("Customers open a support ticket when an order arrives damaged").unwrap();

    let json = result.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(value["workflow"].is_array());
    assert!(value["workflow"][0]["type"].is_string());
    assert!(value["diagram"].is_string());
    assert_eq!(value["dataModel"]["schemaId"], "http://json-schema.org/draft-07/schema#");
    assert!(value["dataModel"]["entities"]["Order"].is_object());
    assert!(value["summary"].is_string());
    assert!(value["metadata"]["runId"].is_string());

    let parsed = ScenarioResult::from_json(&json).unwrap();
    assert!(parsed.same_content(&result));
    assert_eq!(parsed.metadata, result.metadata);
}

#[test]
fn test_every_category_runs_through_the_pipeline() {
    let descriptions = [
        ("Shoppers buy shoes online", ScenarioCategory::Ecommerce),
        ("Members log in with two factor codes", ScenarioCategory::Auth),
        ("Guests reserve a hotel room", ScenarioCategory::Booking),
        ("A helpdesk for hardware faults", ScenarioCategory::Support),
        ("Writers draft and publish a blog", ScenarioCategory::Content),
        ("New hire onboarding checklist", ScenarioCategory::Workflow),
        ("Nightly analytics aggregation", ScenarioCategory::Data),
        ("Alert on-call engineers about outages", ScenarioCategory::Notification),
        ("A plain scenario without hints", ScenarioCategory::General),
    ];

    let engine = EngineBuilder::new().async_worker_thread_number(2).build().expect("Failed to build engine");
    for (description, expected) in descriptions {
        let result = engine.generate(description).unwrap();
        assert_eq!(result.category, expected, "{}", description);
        assert!((7..=10).contains(&result.workflow.len()));
        assert!(!result.data_model.entities.is_empty());
        for (i, step) in result.workflow.iter().enumerate() {
            assert_eq!(step.id as usize, i + 1);
        }
    }
}

#[test]
fn test_stages_compose_without_engine() {
    let category = workflow::classify(CHECKOUT);
    let steps = workflow::generate_steps(category, CHECKOUT);
    let chart = diagram::synthesize(&steps);
    let model = entity::build_data_model(&steps, CHECKOUT);

    assert_eq!(chart.lines().filter(|l| l.contains("-.->|No|")).count(), 1);
    assert_eq!(model.entities.len(), entity::infer_entities(&steps).len());
}

#[test]
fn test_hand_written_steps() {
    let steps = WorkflowStep::list_from_json(
        r#"[
            {"id": 1, "name": "Receive <payload>", "description": "Webhook delivers data", "type": "trigger"},
            {"id": 2, "name": "Signature ok?", "description": "", "type": "conditional"},
            {"id": 3, "name": "Store event", "description": "", "type": "database_write"},
            {"id": 4, "name": "Done", "description": "", "type": "end"}
        ]"#,
    )
    .unwrap();
    assert_eq!(steps[1].step_type, StepType::Conditional);

    let chart = diagram::synthesize(&steps);
    assert!(chart.contains("step1([Receive <-payload->])"));
    assert!(chart.contains("step2 -->|Yes| step3"));
    assert!(chart.contains("step2 -.->|No| step4"));

    let model = entity::build_data_model(&steps, "webhook");
    assert_eq!(model.entities.keys().copied().collect::<Vec<_>>(), vec![EntityName::Record]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_async_run_reuses_caller_runtime() {
    let engine = EngineBuilder::new().build().expect("Failed to build engine");
    let result = engine.run(CHECKOUT).await.unwrap();

    assert_eq!(result.category, ScenarioCategory::Ecommerce);
    assert!(result.same_content(&engine.run(CHECKOUT).await.unwrap()));
}
