//! # Liquilint - Workflow Variable Resolution and Validation Engine
//!
//! **Liquilint** is a variable resolution engine for liquid-templated
//! notification workflows. Given a workflow definition (a payload
//! JSON-Schema, a list of steps, and the contextual namespaces `payload`,
//! `subscriber`, `context`, and `steps`), it parses liquid-style template
//! expressions (`{{ namespace.path | filter }}`) found in step content,
//! validates each against the set of variables legally available at that
//! point in the workflow, and classifies schema edits before a destructive
//! save.
//!
//! ## Core Workflow
//!
//! The engine is format-agnostic. It operates on a canonical internal model
//! of a workflow definition. The primary workflow is:
//!
//! 1.  **Load Your Data**: Parse your workflow format (e.g. from JSON) into
//!     your own Rust structs.
//! 2.  **Convert to Liquilint's Model**: Implement the `IntoWorkflow` trait
//!     for your structs to provide a translation layer into
//!     `WorkflowDefinition`.
//! 3.  **Build a Catalog**: Use `CatalogBuilder` to derive the set of legal
//!     variables for the step being edited, from the payload schema, the
//!     live preview data, and prior steps' outputs.
//! 4.  **Validate**: Run `validate_expression` (or `lint_workflow`) on every
//!     liquid token; render the verdicts inline.
//! 5.  **Diff on Save**: When the payload schema is edited, run
//!     `detect_schema_changes` against a `UsageIndex` to flag in-use
//!     properties before committing.
//!
//! ## Quick Start
//!
//! ```rust
//! use liquilint::prelude::*;
//! use serde_json::json;
//!
//! // A workflow with a digest step followed by an email step.
//! let workflow = WorkflowDefinition {
//!     name: "comment-digest".to_string(),
//!     payload_schema: Some(json!({
//!         "type": "object",
//!         "properties": {
//!             "commentCount": { "type": "number" },
//!             "post": {
//!                 "type": "object",
//!                 "properties": { "title": { "type": "string" } },
//!             },
//!         },
//!         "required": ["commentCount"],
//!     })),
//!     steps: vec![
//!         StepDefinition {
//!             id: "digest-1".to_string(),
//!             name: "Digest".to_string(),
//!             kind: StepKind::Digest,
//!             controls: json!({}),
//!             outputs: vec!["events".to_string(), "eventCount".to_string()],
//!         },
//!         StepDefinition {
//!             id: "email-1".to_string(),
//!             name: "Email".to_string(),
//!             kind: StepKind::Email,
//!             controls: json!({
//!                 "subject": "{{payload.commentCount}} new comments on {{payload.post.title}}",
//!             }),
//!             outputs: vec![],
//!         },
//!     ],
//! };
//!
//! // Build the catalog visible from the email step.
//! let catalog = CatalogBuilder::new(&workflow, "email-1").build();
//! assert!(catalog.contains("steps.digest-1.eventCount"));
//!
//! // Validate a token with payload-schema enforcement on.
//! let policy = RepeatBlockAliases {
//!     has_preceding_digest: workflow.has_digest_before("email-1"),
//!     in_repeat_block: true,
//! };
//! let opts = ValidationOptions::new(true, &policy);
//!
//! let expr = parse_liquid_expression("{{payload.post.title | upcase}}").unwrap();
//! let verdict = validate_expression(&expr, &catalog, &opts);
//! assert!(verdict.is_allowed && verdict.is_in_schema);
//!
//! let expr = parse_liquid_expression("{{payload.missing}}").unwrap();
//! let verdict = validate_expression(&expr, &catalog, &opts);
//! assert_eq!(verdict.error_message(), "Variable missing from schema");
//!
//! // Diff a schema edit and cross-reference usage before saving.
//! let old_schema = workflow.payload_schema_node().unwrap();
//! let new_schema = SchemaNode::from_value(&json!({
//!     "type": "object",
//!     "properties": { "commentCount": { "type": "string" } },
//! }));
//! let usage = UsageIndex::scan(&workflow);
//! let changes = detect_schema_changes(&old_schema, &new_schema, &usage);
//! assert_eq!(changes.type_changed.len(), 1);
//! assert!(changes.type_changed[0].usage.is_used);
//! ```

pub mod catalog;
pub mod data;
pub mod diff;
pub mod error;
pub mod expr;
pub mod prelude;
pub mod schema;
pub mod translations;
pub mod validate;
pub mod workflow;
