use super::{VariableCatalog, VariableCatalogEntry};
use crate::data::PreviewData;
use crate::expr::VariableNamespace;
use crate::schema::flatten_schema;
use crate::translations::TranslationKey;
use crate::workflow::WorkflowDefinition;
use ahash::{AHashMap, AHashSet};
use serde_json::Value;

/// Derives the full set of legal variable names for one step of a workflow.
///
/// Payload entries come from recursively flattening the payload schema.
/// Subscriber and context entries are derived dynamically from the live
/// preview data and need no formal schema. Prior steps contribute their
/// declared outputs as `steps.<id>.<output>`. The `current` alias is never
/// part of the static member list; its validity is context-sensitive and
/// resolved by the caller-supplied [`AliasPolicy`](crate::validate::AliasPolicy)
/// at validation time.
pub struct CatalogBuilder<'a> {
    workflow: &'a WorkflowDefinition,
    step_id: &'a str,
    preview: Option<&'a PreviewData>,
    translation_keys: &'a [TranslationKey],
}

impl<'a> CatalogBuilder<'a> {
    pub fn new(workflow: &'a WorkflowDefinition, step_id: &'a str) -> Self {
        Self {
            workflow,
            step_id,
            preview: None,
            translation_keys: &[],
        }
    }

    pub fn with_preview(mut self, preview: &'a PreviewData) -> Self {
        self.preview = Some(preview);
        self
    }

    pub fn with_translation_keys(mut self, keys: &'a [TranslationKey]) -> Self {
        self.translation_keys = keys;
        self
    }

    pub fn build(self) -> VariableCatalog {
        let mut entries = Vec::new();
        let mut payload_schema_keys = AHashMap::new();
        let mut recognized: AHashSet<String> = AHashSet::new();

        // Payload is always a recognized namespace; whether unknown payload
        // properties are an error is the validator's decision.
        recognized.insert("payload".to_string());

        if let Some(schema) = self.workflow.payload_schema_node() {
            for property in flatten_schema(&schema) {
                payload_schema_keys.insert(property.path.clone(), entries.len());
                entries.push(VariableCatalogEntry {
                    name: format!("payload.{}", property.path),
                    namespace: VariableNamespace::Payload,
                    schema_type: property.ty,
                    is_required: Some(property.is_required),
                    source_step_id: None,
                });
            }
        }

        if let Some(preview) = self.preview {
            if let Some(subscriber) = preview.subscriber() {
                recognized.insert("subscriber".to_string());
                push_json_entries(subscriber, "subscriber", VariableNamespace::Subscriber, &mut entries);
            }
            if let Some(context) = preview.context() {
                recognized.insert("context".to_string());
                push_json_entries(context, "context", VariableNamespace::Context, &mut entries);
            }
            // Preview payload only supplements; schema-derived entries win.
            if let Some(payload) = preview.payload() {
                let mut supplemental = Vec::new();
                push_json_entries(payload, "payload", VariableNamespace::Payload, &mut supplemental);
                for entry in supplemental {
                    let known = payload_schema_keys
                        .contains_key(entry.name.trim_start_matches("payload."));
                    if !known {
                        entries.push(entry);
                    }
                }
            }
        }

        for step in self.workflow.steps_before(self.step_id) {
            for output in &step.outputs {
                entries.push(VariableCatalogEntry {
                    name: format!("steps.{}.{}", step.id, output),
                    namespace: VariableNamespace::Steps,
                    schema_type: None,
                    is_required: None,
                    source_step_id: Some(step.id.clone()),
                });
            }
        }

        if !self.translation_keys.is_empty() {
            recognized.insert("t".to_string());
            for key in self.translation_keys {
                entries.push(VariableCatalogEntry {
                    name: format!("t.{}", key.name),
                    namespace: VariableNamespace::Other("t".to_string()),
                    schema_type: None,
                    is_required: None,
                    source_step_id: None,
                });
            }
        }

        VariableCatalog::new(entries, payload_schema_keys, recognized)
    }
}

/// Flattens a preview JSON value into dotted catalog entries. Intermediate
/// objects get entries of their own; arrays do not introduce index segments.
fn push_json_entries(
    value: &Value,
    prefix: &str,
    namespace: VariableNamespace,
    entries: &mut Vec<VariableCatalogEntry>,
) {
    let Value::Object(map) = value else {
        return;
    };
    for (name, child) in map {
        let path = format!("{prefix}.{name}");
        entries.push(VariableCatalogEntry {
            name: path.clone(),
            namespace: namespace.clone(),
            schema_type: None,
            is_required: None,
            source_step_id: None,
        });
        match child {
            Value::Object(_) => push_json_entries(child, &path, namespace.clone(), entries),
            Value::Array(items) => {
                for item in items {
                    if item.is_object() {
                        push_json_entries(item, &path, namespace.clone(), entries);
                        break;
                    }
                }
            }
            _ => {}
        }
    }
}
