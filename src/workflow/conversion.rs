use super::definition::WorkflowDefinition;
use crate::error::WorkflowConversionError;

/// A trait for custom data models that can be converted into a liquilint
/// `WorkflowDefinition`.
///
/// This is the primary extension point for making liquilint format-agnostic.
/// Editors and backends store workflows in their own shapes; implementing
/// this trait on those structs provides the translation layer the catalog
/// builder and validators operate on.
///
/// # Example
///
/// ```rust
/// use liquilint::prelude::*;
/// use liquilint::error::WorkflowConversionError;
///
/// // 1. Define your custom structs for parsing your format.
/// struct MyStep { id: String, body: String }
/// struct MyWorkflow { name: String, steps: Vec<MyStep> }
///
/// // 2. Implement `IntoWorkflow` for your top-level struct.
/// impl IntoWorkflow for MyWorkflow {
///     fn into_workflow(self) -> Result<WorkflowDefinition, WorkflowConversionError> {
///         let steps = self
///             .steps
///             .into_iter()
///             .map(|step| StepDefinition {
///                 name: step.id.clone(),
///                 id: step.id,
///                 kind: StepKind::Email,
///                 controls: serde_json::json!({ "body": step.body }),
///                 outputs: vec![],
///             })
///             .collect();
///
///         Ok(WorkflowDefinition {
///             name: self.name,
///             payload_schema: None,
///             steps,
///         })
///     }
/// }
/// ```
pub trait IntoWorkflow {
    /// Consumes the object and converts it into a canonical workflow
    /// definition.
    fn into_workflow(self) -> Result<WorkflowDefinition, WorkflowConversionError>;
}
