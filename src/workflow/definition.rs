use crate::schema::SchemaNode;
use serde::{Deserialize, Serialize};

/// The channel or control-flow kind of a workflow step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StepKind {
    InApp,
    Email,
    Sms,
    Push,
    Chat,
    Digest,
    Delay,
    Custom,
}

impl StepKind {
    /// Digest steps batch trigger events and unlock `current`-aliased
    /// variables in downstream repeat blocks.
    pub fn is_digest(&self) -> bool {
        matches!(self, StepKind::Digest)
    }
}

/// A single step of a notification workflow.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepDefinition {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: StepKind,
    /// The step's editor control values: an arbitrary JSON tree whose string
    /// leaves may contain liquid expressions.
    #[serde(default)]
    pub controls: serde_json::Value,
    /// Output variable names this step exposes to later steps, addressed as
    /// `steps.<id>.<output>`.
    #[serde(default)]
    pub outputs: Vec<String>,
}

impl StepDefinition {
    /// Depth-first visit of every string leaf in this step's control values.
    /// Non-string leaves carry no expressions and are skipped.
    pub fn visit_control_strings(&self, visit: &mut impl FnMut(&str)) {
        visit_strings(&self.controls, visit);
    }
}

fn visit_strings(value: &serde_json::Value, visit: &mut impl FnMut(&str)) {
    match value {
        serde_json::Value::String(text) => visit(text),
        serde_json::Value::Array(items) => {
            for item in items {
                visit_strings(item, visit);
            }
        }
        serde_json::Value::Object(map) => {
            for child in map.values() {
                visit_strings(child, visit);
            }
        }
        _ => {}
    }
}

/// The complete, canonical definition of a workflow, ready for catalog
/// building and validation. This is the target structure for any custom data
/// model conversion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowDefinition {
    pub name: String,
    /// The raw payload JSON-Schema as the editor stores it. Normalized on
    /// demand via [`WorkflowDefinition::payload_schema_node`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload_schema: Option<serde_json::Value>,
    #[serde(default)]
    pub steps: Vec<StepDefinition>,
}

impl WorkflowDefinition {
    pub fn step(&self, step_id: &str) -> Option<&StepDefinition> {
        self.steps.iter().find(|s| s.id == step_id)
    }

    /// Steps strictly preceding `step_id` in workflow order. Empty when the
    /// step is unknown.
    pub fn steps_before(&self, step_id: &str) -> &[StepDefinition] {
        match self.steps.iter().position(|s| s.id == step_id) {
            Some(index) => &self.steps[..index],
            None => &[],
        }
    }

    /// Whether any digest step precedes `step_id`. Drives the repeat-block
    /// alias policy for `current`.
    pub fn has_digest_before(&self, step_id: &str) -> bool {
        self.steps_before(step_id).iter().any(|s| s.kind.is_digest())
    }

    /// The payload schema normalized into the typed model, if one is set.
    pub fn payload_schema_node(&self) -> Option<SchemaNode> {
        self.payload_schema.as_ref().map(SchemaNode::from_value)
    }
}
