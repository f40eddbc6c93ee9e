use std::fmt;

/// The top-level scope a variable path resolves against.
///
/// `Other` covers everything that is not a built-in namespace: aliases such as
/// `current` (whose validity is context-sensitive and decided by an
/// [`AliasPolicy`](crate::validate::AliasPolicy)), translation keys under `t`,
/// and plain typos. The parser never rejects a namespace; classification is
/// the validator's job.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VariableNamespace {
    Payload,
    Subscriber,
    Context,
    Steps,
    Other(String),
}

impl VariableNamespace {
    /// Classifies the first dot-segment of a variable path.
    pub fn from_segment(segment: &str) -> Self {
        match segment {
            "payload" => VariableNamespace::Payload,
            "subscriber" => VariableNamespace::Subscriber,
            "context" => VariableNamespace::Context,
            "steps" => VariableNamespace::Steps,
            other => VariableNamespace::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            VariableNamespace::Payload => "payload",
            VariableNamespace::Subscriber => "subscriber",
            VariableNamespace::Context => "context",
            VariableNamespace::Steps => "steps",
            VariableNamespace::Other(name) => name,
        }
    }
}

impl fmt::Display for VariableNamespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A structured match for a single liquid template token.
///
/// Derived fresh per parse call; never stored between renders. The invariant
/// is that `root_namespace` equals the first dot-segment of `path`, and
/// `filters` is empty when the token carries no `|` chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiquidExpression {
    /// The normalized token, wrapped in exactly one pair of braces.
    pub full_expression: String,
    /// First dot-segment of `path` (equal to `path` for namespace-only tokens).
    pub root_namespace: String,
    /// The full dotted variable path, namespace included.
    pub path: String,
    /// Trimmed filter names, in order of appearance.
    pub filters: Vec<String>,
}

impl LiquidExpression {
    pub fn namespace(&self) -> VariableNamespace {
        VariableNamespace::from_segment(&self.root_namespace)
    }

    /// A token whose path has no property segment, e.g. `{{payload}}`.
    pub fn is_namespace_only(&self) -> bool {
        !self.path.contains('.')
    }

    /// Whether this path addresses the trigger payload, directly or through
    /// the `current` repeat-block alias.
    pub fn is_payload_variable(&self) -> bool {
        self.variable_key().is_some()
    }

    /// The schema lookup key for payload variables: the path with its
    /// `payload.` or `current.payload.` prefix stripped. Empty for a bare
    /// `{{payload}}`; `None` for non-payload paths.
    pub fn variable_key(&self) -> Option<&str> {
        for prefix in ["current.payload", "payload"] {
            if self.path == prefix {
                return Some("");
            }
            if let Some(rest) = self.path.strip_prefix(prefix) {
                if let Some(key) = rest.strip_prefix('.') {
                    return Some(key);
                }
            }
        }
        None
    }
}

impl fmt::Display for LiquidExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_expression)
    }
}
