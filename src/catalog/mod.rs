use crate::expr::VariableNamespace;
use crate::schema::SchemaType;
use ahash::{AHashMap, AHashSet};

mod builder;

pub use builder::CatalogBuilder;

/// One legally-referenceable variable at a given point in a workflow.
///
/// Built fresh per render from the current workflow, schema, and preview
/// state; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableCatalogEntry {
    /// Full dotted path including the namespace, e.g. `payload.user.name`.
    pub name: String,
    pub namespace: VariableNamespace,
    /// Set for schema-governed payload variables.
    pub schema_type: Option<SchemaType>,
    /// Set for schema-governed payload variables.
    pub is_required: Option<bool>,
    /// For `steps.*` entries, the step that produces the output.
    pub source_step_id: Option<String>,
}

/// The computed set of variables referenceable from one step, plus the
/// lookup structure the validator consults on every keystroke.
///
/// Entries are unsorted; consumers sort by display name at presentation time.
#[derive(Debug, Clone, Default)]
pub struct VariableCatalog {
    entries: Vec<VariableCatalogEntry>,
    names: AHashSet<String>,
    /// Variable keys (path minus the `payload.` prefix) present in the
    /// payload schema, mapped to their entry index.
    payload_schema_keys: AHashMap<String, usize>,
    /// Namespaces accepted without a per-variable catalog entry.
    recognized_namespaces: AHashSet<String>,
}

impl VariableCatalog {
    pub(crate) fn new(
        entries: Vec<VariableCatalogEntry>,
        payload_schema_keys: AHashMap<String, usize>,
        recognized_namespaces: AHashSet<String>,
    ) -> Self {
        let names = entries.iter().map(|e| e.name.clone()).collect();
        Self {
            entries,
            names,
            payload_schema_keys,
            recognized_namespaces,
        }
    }

    pub fn entries(&self) -> &[VariableCatalogEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Exact lookup by full dotted path.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Looks up a payload property by its variable key (the dotted path with
    /// the `payload.` prefix stripped). Only schema-governed entries match.
    pub fn payload_property(&self, variable_key: &str) -> Option<&VariableCatalogEntry> {
        self.payload_schema_keys
            .get(variable_key)
            .map(|&index| &self.entries[index])
    }

    /// Whether a namespace is accepted even for paths with no catalog entry.
    /// Subscriber and context earn this dynamically from preview data;
    /// `payload` always has it (enforcement is the validator's concern).
    pub fn is_recognized_namespace(&self, namespace: &str) -> bool {
        self.recognized_namespaces.contains(namespace)
    }
}
