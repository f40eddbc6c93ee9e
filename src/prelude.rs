//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and functions from the
//! liquilint crate. Import this module to get access to the core
//! functionality without having to import each type individually.
//!
//! # Example
//!
//! ```rust
//! use liquilint::prelude::*;
//!
//! let workflow = WorkflowDefinition {
//!     name: "welcome".to_string(),
//!     payload_schema: Some(serde_json::json!({
//!         "type": "object",
//!         "properties": { "name": { "type": "string" } },
//!     })),
//!     steps: vec![],
//! };
//!
//! let catalog = CatalogBuilder::new(&workflow, "email-1").build();
//! let expr = parse_liquid_expression("{{payload.name}}").unwrap();
//! let verdict = validate_expression(&expr, &catalog, &ValidationOptions::lenient());
//! assert!(verdict.is_allowed);
//! ```

// Expression parsing
pub use crate::expr::{
    LiquidExpression, VariableNamespace, extract_liquid_expressions, parse_liquid_expression,
};

// Schema model and conversions
pub use crate::schema::{
    FlattenedProperty, PropertyListItem, SchemaNode, SchemaType, flatten_schema,
    property_list_to_schema, schema_to_property_list,
};

// Catalog building
pub use crate::catalog::{CatalogBuilder, VariableCatalog, VariableCatalogEntry};

// Validation
pub use crate::validate::{
    AliasPolicy, ExpressionVerdict, NoAliases, RepeatBlockAliases, ValidationIssue,
    ValidationOptions, ValidationVerdict, lint_step, lint_workflow, validate_expression,
};

// Schema diffing
pub use crate::diff::{SchemaChanges, StepReference, UsageIndex, UsageInfo, detect_schema_changes};

// Workflow model
pub use crate::workflow::{IntoWorkflow, StepDefinition, StepKind, WorkflowDefinition};

// Preview data and translations
pub use crate::data::PreviewData;
pub use crate::translations::{TranslationKey, flatten_translation_object};

// Error types
pub use crate::error::{SchemaConversionError, WorkflowConversionError};
