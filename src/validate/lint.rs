use super::{ValidationOptions, ValidationVerdict, validate_expression};
use crate::catalog::{CatalogBuilder, VariableCatalog};
use crate::data::PreviewData;
use crate::expr::{LiquidExpression, extract_liquid_expressions};
use crate::workflow::{StepDefinition, WorkflowDefinition};

/// One validated expression occurrence inside a step's controls.
#[derive(Debug, Clone)]
pub struct ExpressionVerdict {
    pub step_id: String,
    pub expression: LiquidExpression,
    pub verdict: ValidationVerdict,
}

/// Validates every liquid expression found in one step's control values.
pub fn lint_step(
    step: &StepDefinition,
    catalog: &VariableCatalog,
    opts: &ValidationOptions<'_>,
) -> Vec<ExpressionVerdict> {
    let mut verdicts = Vec::new();
    step.visit_control_strings(&mut |text| {
        for expression in extract_liquid_expressions(text) {
            let verdict = validate_expression(&expression, catalog, opts);
            verdicts.push(ExpressionVerdict {
                step_id: step.id.clone(),
                expression,
                verdict,
            });
        }
    });
    verdicts
}

/// Validates every step of a workflow, building each step's catalog from the
/// same snapshot.
///
/// Alias handling follows the repeat-block rule: `current` is admitted for
/// steps downstream of a digest step. `strict` enables payload-schema
/// enforcement.
pub fn lint_workflow(
    workflow: &WorkflowDefinition,
    preview: Option<&PreviewData>,
    strict: bool,
) -> Vec<ExpressionVerdict> {
    let mut verdicts = Vec::new();
    for step in &workflow.steps {
        let mut builder = CatalogBuilder::new(workflow, &step.id);
        if let Some(preview) = preview {
            builder = builder.with_preview(preview);
        }
        let catalog = builder.build();
        let policy = super::RepeatBlockAliases {
            has_preceding_digest: workflow.has_digest_before(&step.id),
            in_repeat_block: true,
        };
        let opts = ValidationOptions::new(strict, &policy);
        verdicts.extend(lint_step(step, &catalog, &opts));
    }
    verdicts
}
