use crate::catalog::VariableCatalog;
use crate::expr::{LiquidExpression, VariableNamespace};
use thiserror::Error;

mod lint;
mod policy;

pub use lint::*;
pub use policy::*;

/// The layout's reserved body-slot variable, valid without a property
/// segment.
pub const LAYOUT_CONTENT_VARIABLE: &str = "content";

/// Classification of why a variable reference is rejected.
///
/// These are verdict values, not exceptions; nothing in the engine throws.
/// The `#[error]` texts are surfaced verbatim as inline editor messages.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    #[error("Variable '{0}' requires a property")]
    NamespaceOnly(String),

    #[error("Variable missing from schema")]
    MissingFromSchema,

    #[error("invalid or missing namespace")]
    InvalidOrMissingNamespace,
}

/// The deterministic outcome of validating one expression against a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationVerdict {
    pub is_allowed: bool,
    pub is_payload_variable: bool,
    pub is_in_schema: bool,
    pub issue: Option<ValidationIssue>,
}

impl ValidationVerdict {
    pub fn has_error(&self) -> bool {
        self.issue.is_some()
    }

    /// The inline message, empty when the reference is clean.
    pub fn error_message(&self) -> String {
        self.issue
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default()
    }
}

/// Flags and capabilities that contextualize a validation call.
#[derive(Clone, Copy)]
pub struct ValidationOptions<'a> {
    /// When `true`, payload variables must exist in the payload schema.
    /// When `false`, schema absence is not an error.
    pub payload_schema_enabled: bool,
    /// Decides alias validity (`current` inside repeat blocks); injected by
    /// the caller rather than looked up globally.
    pub alias_policy: &'a dyn AliasPolicy,
}

impl<'a> ValidationOptions<'a> {
    pub fn new(payload_schema_enabled: bool, alias_policy: &'a dyn AliasPolicy) -> Self {
        Self {
            payload_schema_enabled,
            alias_policy,
        }
    }

    /// No schema enforcement, no aliases. The editor's default outside
    /// repeat blocks when schema enforcement is switched off.
    pub fn lenient() -> ValidationOptions<'static> {
        ValidationOptions {
            payload_schema_enabled: false,
            alias_policy: &NoAliases,
        }
    }
}

/// Validates one parsed expression against the catalog.
///
/// Recomputed per call from its full inputs; repeated invocations are
/// independent and idempotent, so the editor may call it on every keystroke.
pub fn validate_expression(
    expr: &LiquidExpression,
    catalog: &VariableCatalog,
    opts: &ValidationOptions<'_>,
) -> ValidationVerdict {
    let name = expr.path.as_str();
    if name.is_empty() {
        return ValidationVerdict {
            is_allowed: true,
            is_payload_variable: false,
            is_in_schema: false,
            issue: None,
        };
    }

    let is_payload_variable = expr.is_payload_variable();
    let variable_key = expr.variable_key();
    let is_in_schema = variable_key
        .map(|key| !key.is_empty() && catalog.payload_property(key).is_some())
        .unwrap_or(false);

    let alias_allowed = opts.alias_policy.is_allowed(&expr.root_namespace);
    let namespace_only =
        expr.is_namespace_only() && name != LAYOUT_CONTENT_VARIABLE && !alias_allowed;

    let is_allowed = if namespace_only {
        false
    } else if expr.is_namespace_only() {
        // Reserved content variable, or a bare alias admitted by the policy.
        true
    } else if is_payload_variable {
        if expr.namespace() == VariableNamespace::Payload || alias_allowed {
            !opts.payload_schema_enabled || is_in_schema
        } else {
            // `current.payload.*` outside a repeat block.
            false
        }
    } else if alias_allowed {
        // Non-payload alias fields (digest event properties) are dynamic.
        true
    } else {
        catalog.contains(name) || catalog.is_recognized_namespace(&expr.root_namespace)
    };

    // Precedence: schema-missing beats the generic not-allowed messages, and
    // the namespace-only message beats the generic one.
    let issue = if is_payload_variable
        && opts.payload_schema_enabled
        && variable_key.is_some_and(|key| !key.is_empty())
        && !is_in_schema
    {
        Some(ValidationIssue::MissingFromSchema)
    } else if !is_allowed && namespace_only {
        Some(ValidationIssue::NamespaceOnly(name.to_string()))
    } else if !is_allowed {
        Some(ValidationIssue::InvalidOrMissingNamespace)
    } else {
        None
    };

    ValidationVerdict {
        is_allowed,
        is_payload_variable,
        is_in_schema,
        issue,
    }
}
