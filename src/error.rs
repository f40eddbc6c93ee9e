use thiserror::Error;

/// Errors that can occur when converting a custom user format into a
/// liquilint `WorkflowDefinition`.
#[derive(Error, Debug, Clone)]
pub enum WorkflowConversionError {
    #[error("Invalid workflow data: {0}")]
    ValidationError(String),

    #[error("Step '{step_id}' is defined more than once")]
    DuplicateStepId { step_id: String },
}

/// Errors that can occur when converting an editor property list back into a
/// payload schema.
#[derive(Error, Debug, Clone)]
pub enum SchemaConversionError {
    #[error("A property at '{parent_path}' has an empty name")]
    EmptyPropertyName { parent_path: String },

    #[error("Property '{name}' is defined more than once under '{parent_path}'")]
    DuplicateProperty { name: String, parent_path: String },
}
