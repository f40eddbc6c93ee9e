//! Common test utilities for building workflow definitions and schemas.
use liquilint::prelude::*;
use serde_json::json;

/// A payload schema exercising nesting, arrays, nullability, and required
/// membership.
#[allow(dead_code)]
pub fn sample_payload_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "name": { "type": "string" },
            "age": { "type": "number" },
            "nickname": { "type": ["string", "null"] },
            "tags": { "type": "array", "items": { "type": "string" } },
            "address": {
                "type": "object",
                "properties": {
                    "city": { "type": "string" },
                    "zip": { "type": "string" },
                },
                "required": ["city"],
            },
            "orders": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "id": { "type": "integer" },
                        "total": { "type": "number" },
                    },
                },
            },
        },
        "required": ["name"],
    })
}

/// A single-step workflow referencing two payload variables.
#[allow(dead_code)]
pub fn create_simple_workflow() -> WorkflowDefinition {
    WorkflowDefinition {
        name: "welcome".to_string(),
        payload_schema: Some(sample_payload_schema()),
        steps: vec![StepDefinition {
            id: "email-1".to_string(),
            name: "Welcome Email".to_string(),
            kind: StepKind::Email,
            controls: json!({
                "subject": "Hello {{payload.name}}",
                "body": "You are {{payload.age}} years old and live in {{payload.address.city}}.",
            }),
            outputs: vec![],
        }],
    }
}

/// A digest-then-email workflow; the email step sits inside repeat-block
/// territory and references digest outputs.
#[allow(dead_code)]
pub fn create_digest_workflow() -> WorkflowDefinition {
    WorkflowDefinition {
        name: "comment-digest".to_string(),
        payload_schema: Some(json!({
            "type": "object",
            "properties": {
                "commentCount": { "type": "number" },
                "post": {
                    "type": "object",
                    "properties": { "title": { "type": "string" } },
                },
            },
            "required": ["commentCount"],
        })),
        steps: vec![
            StepDefinition {
                id: "digest-1".to_string(),
                name: "Digest".to_string(),
                kind: StepKind::Digest,
                controls: json!({}),
                outputs: vec!["events".to_string(), "eventCount".to_string()],
            },
            StepDefinition {
                id: "email-1".to_string(),
                name: "Digest Email".to_string(),
                kind: StepKind::Email,
                controls: json!({
                    "subject": "{{steps.digest-1.eventCount}} new comments",
                    "body": "{{current.payload.post.title}} -- {{payload.commentCount}}",
                }),
                outputs: vec![],
            },
        ],
    }
}

/// Preview data with subscriber and context sections.
#[allow(dead_code)]
pub fn create_preview() -> PreviewData {
    serde_json::from_value(json!({
        "subscriber": {
            "subscriberId": "sub-1",
            "firstName": "Ada",
            "data": { "plan": "pro" },
        },
        "context": {
            "environment": "production",
        },
    }))
    .expect("preview fixture is valid")
}
