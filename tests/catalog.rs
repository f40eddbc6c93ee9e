//! Tests for variable catalog building.
mod common;
use common::{create_digest_workflow, create_preview, create_simple_workflow};
use liquilint::prelude::*;
use serde_json::json;

#[test]
fn test_payload_entries_from_schema() {
    let workflow = create_simple_workflow();
    let catalog = CatalogBuilder::new(&workflow, "email-1").build();

    assert!(catalog.contains("payload.name"));
    assert!(catalog.contains("payload.address.city"));
    assert!(catalog.contains("payload.orders.total"));
    assert!(!catalog.contains("payload.missing"));

    let name = catalog.payload_property("name").unwrap();
    assert_eq!(name.schema_type, Some(SchemaType::String));
    assert_eq!(name.is_required, Some(true));
    assert_eq!(name.namespace, VariableNamespace::Payload);

    let zip = catalog.payload_property("address.zip").unwrap();
    assert_eq!(zip.is_required, Some(false));
}

#[test]
fn test_payload_namespace_always_recognized() {
    let workflow = WorkflowDefinition {
        name: "empty".to_string(),
        payload_schema: None,
        steps: vec![],
    };
    let catalog = CatalogBuilder::new(&workflow, "email-1").build();
    assert!(catalog.is_empty());
    assert!(catalog.is_recognized_namespace("payload"));
    assert!(!catalog.is_recognized_namespace("subscriber"));
}

#[test]
fn test_subscriber_and_context_entries_from_preview() {
    let workflow = create_simple_workflow();
    let preview = create_preview();
    let catalog = CatalogBuilder::new(&workflow, "email-1")
        .with_preview(&preview)
        .build();

    assert!(catalog.contains("subscriber.firstName"));
    assert!(catalog.contains("subscriber.data.plan"));
    assert!(catalog.contains("context.environment"));
    assert!(catalog.is_recognized_namespace("subscriber"));
    assert!(catalog.is_recognized_namespace("context"));
}

#[test]
fn test_preview_payload_supplements_schema() {
    let mut preview = create_preview();
    preview.payload = Some(json!({ "name": "dup", "extra": 1 }));

    let workflow = create_simple_workflow();
    let catalog = CatalogBuilder::new(&workflow, "email-1")
        .with_preview(&preview)
        .build();

    // Schema-derived entry wins; the preview only adds what the schema lacks.
    let name_entries = catalog
        .entries()
        .iter()
        .filter(|e| e.name == "payload.name")
        .count();
    assert_eq!(name_entries, 1);
    assert!(catalog.contains("payload.extra"));
    // Preview-only payload entries are not schema-governed.
    assert!(catalog.payload_property("extra").is_none());
}

#[test]
fn test_prior_step_outputs() {
    let workflow = create_digest_workflow();

    let email_catalog = CatalogBuilder::new(&workflow, "email-1").build();
    assert!(email_catalog.contains("steps.digest-1.events"));
    assert!(email_catalog.contains("steps.digest-1.eventCount"));

    let entry = email_catalog
        .entries()
        .iter()
        .find(|e| e.name == "steps.digest-1.events")
        .unwrap();
    assert_eq!(entry.namespace, VariableNamespace::Steps);
    assert_eq!(entry.source_step_id.as_deref(), Some("digest-1"));

    // The digest step itself sees no step outputs; nothing precedes it.
    let digest_catalog = CatalogBuilder::new(&workflow, "digest-1").build();
    assert!(!digest_catalog.contains("steps.digest-1.events"));
}

#[test]
fn test_unknown_step_sees_no_prior_outputs() {
    let workflow = create_digest_workflow();
    let catalog = CatalogBuilder::new(&workflow, "nope").build();
    assert!(!catalog.contains("steps.digest-1.events"));
}

#[test]
fn test_translation_keys() {
    let resource = json!({
        "welcome": { "title": "Hello", "body": "Hi there" },
        "farewell": "Bye",
    });
    let keys = flatten_translation_object(&resource);
    let names: Vec<&str> = keys.iter().map(|k| k.name.as_str()).collect();
    assert_eq!(names, vec!["farewell", "welcome.body", "welcome.title"]);

    let workflow = create_simple_workflow();
    let catalog = CatalogBuilder::new(&workflow, "email-1")
        .with_translation_keys(&keys)
        .build();
    assert!(catalog.contains("t.welcome.title"));
    assert!(catalog.is_recognized_namespace("t"));
}

#[test]
fn test_translation_non_object_root_yields_nothing() {
    assert!(flatten_translation_object(&json!("flat")).is_empty());
    assert!(flatten_translation_object(&json!(null)).is_empty());
}

#[test]
fn test_catalog_entry_count_is_stable() {
    let workflow = create_simple_workflow();
    let catalog = CatalogBuilder::new(&workflow, "email-1").build();
    // name, age, nickname, tags, address, address.city, address.zip,
    // orders, orders.id, orders.total
    assert_eq!(catalog.len(), 10);
}
