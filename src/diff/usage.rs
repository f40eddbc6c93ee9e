use crate::expr::extract_liquid_expressions;
use crate::workflow::WorkflowDefinition;
use ahash::{AHashMap, AHashSet};

/// A step that references a given variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReference {
    pub step_id: String,
    pub step_name: String,
}

/// Where (if anywhere) a payload property's variable is referenced.
#[derive(Debug, Clone, Default)]
pub struct UsageInfo {
    pub is_used: bool,
    pub used_in_steps: Vec<StepReference>,
}

/// Maps payload variable keys to the steps whose control values reference
/// them. Built by one pass over the workflow at schema-save time.
#[derive(Debug, Clone, Default)]
pub struct UsageIndex {
    by_key: AHashMap<String, Vec<StepReference>>,
}

impl UsageIndex {
    /// Scans every step's control values for liquid expressions and records
    /// each payload variable key against the referencing step.
    ///
    /// Control values that are not JSON trees of strings, or tokens that do
    /// not parse, are skipped; a broken step never aborts the scan.
    pub fn scan(workflow: &WorkflowDefinition) -> Self {
        let mut by_key: AHashMap<String, Vec<StepReference>> = AHashMap::new();

        for step in &workflow.steps {
            let mut keys_in_step: AHashSet<String> = AHashSet::new();
            step.visit_control_strings(&mut |text| {
                for expression in extract_liquid_expressions(text) {
                    if let Some(key) = expression.variable_key() {
                        if !key.is_empty() {
                            keys_in_step.insert(key.to_string());
                        }
                    }
                }
            });

            for key in keys_in_step {
                by_key.entry(key).or_default().push(StepReference {
                    step_id: step.id.clone(),
                    step_name: step.name.clone(),
                });
            }
        }

        Self { by_key }
    }

    /// The usage annotation for one payload variable key.
    pub fn usage_of(&self, key: &str) -> UsageInfo {
        match self.by_key.get(key) {
            Some(steps) => UsageInfo {
                is_used: true,
                used_in_steps: steps.clone(),
            },
            None => UsageInfo::default(),
        }
    }
}
