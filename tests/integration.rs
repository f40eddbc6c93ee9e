//! End-to-end tests: JSON workflow in, verdicts and change reports out.
mod common;
use common::{create_digest_workflow, create_preview};
use liquilint::prelude::*;
use serde_json::json;

#[test]
fn test_workflow_definition_serde_round_trip() {
    let raw = json!({
        "name": "order-updates",
        "payloadSchema": {
            "type": "object",
            "properties": { "orderId": { "type": "string" } },
            "required": ["orderId"],
        },
        "steps": [
            {
                "id": "digest-1",
                "name": "Digest",
                "type": "digest",
                "controls": {},
                "outputs": ["events", "eventCount"],
            },
            {
                "id": "inapp-1",
                "name": "In-App",
                "type": "inApp",
                "controls": { "body": "Order {{payload.orderId}} updated" },
            },
        ],
    });

    let workflow: WorkflowDefinition = serde_json::from_value(raw).unwrap();
    assert_eq!(workflow.name, "order-updates");
    assert_eq!(workflow.steps.len(), 2);
    assert_eq!(workflow.steps[0].kind, StepKind::Digest);
    assert_eq!(workflow.steps[1].kind, StepKind::InApp);
    assert!(workflow.steps[1].outputs.is_empty());

    let reserialized = serde_json::to_value(&workflow).unwrap();
    let reparsed: WorkflowDefinition = serde_json::from_value(reserialized).unwrap();
    assert_eq!(reparsed.steps[0].id, "digest-1");
    assert!(reparsed.has_digest_before("inapp-1"));
}

#[test]
fn test_lint_full_workflow_clean() {
    let workflow = create_digest_workflow();
    let preview = create_preview();

    let verdicts = lint_workflow(&workflow, Some(&preview), true);
    assert_eq!(verdicts.len(), 3);
    assert!(verdicts.iter().all(|v| !v.verdict.has_error()));
}

#[test]
fn test_lint_full_workflow_mixed_errors() {
    let mut workflow = create_digest_workflow();
    workflow.steps[1].controls = json!({
        "subject": "{{payload}} {{subscriber.firstName}}",
        "body": "{{payload.commentCount}} {{payload.ghost}}",
    });
    let preview = create_preview();

    let verdicts = lint_workflow(&workflow, Some(&preview), true);
    let errors: Vec<String> = verdicts
        .iter()
        .filter(|v| v.verdict.has_error())
        .map(|v| v.verdict.error_message())
        .collect();

    assert_eq!(errors.len(), 2);
    assert!(errors.contains(&"Variable 'payload' requires a property".to_string()));
    assert!(errors.contains(&"Variable missing from schema".to_string()));
}

#[test]
fn test_schema_edit_flow_blocks_in_use_changes() {
    let workflow = create_digest_workflow();
    let old_schema = workflow.payload_schema_node().unwrap();

    // Edit the schema through the property-list editor: retype commentCount.
    let mut list = schema_to_property_list(&old_schema);
    let comment_count = list
        .iter_mut()
        .find(|item| item.name == "commentCount")
        .unwrap();
    comment_count.ty = SchemaType::String;
    let new_schema = property_list_to_schema(&list).unwrap();

    let usage = UsageIndex::scan(&workflow);
    let changes = detect_schema_changes(&old_schema, &new_schema, &usage);

    assert_eq!(changes.type_changed.len(), 1);
    assert_eq!(changes.type_changed[0].key, "commentCount");
    assert!(changes.type_changed[0].usage.is_used);
    assert!(changes.any_in_use());

    // The unchanged nested property survives the editor round trip.
    assert!(changes.deleted.is_empty());
    assert!(changes.added.is_empty());
}

#[test]
fn test_catalog_drives_autocomplete_ordering() {
    let workflow = create_digest_workflow();
    let preview = create_preview();
    let catalog = CatalogBuilder::new(&workflow, "email-1")
        .with_preview(&preview)
        .build();

    // Entries are unsorted by contract; presentation sorts by name.
    let mut names: Vec<&str> = catalog.entries().iter().map(|e| e.name.as_str()).collect();
    names.sort_unstable();
    assert!(names.binary_search(&"payload.commentCount").is_ok());
    assert!(names.binary_search(&"steps.digest-1.events").is_ok());
    assert!(names.binary_search(&"subscriber.firstName").is_ok());
}
