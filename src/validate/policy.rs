/// Decides whether an alias namespace is valid in the current editing
/// context.
///
/// Alias validity is context-sensitive rather than global: `current` means
/// something only inside a repeat block downstream of a digest step. Modeling
/// the decision as an injected capability keeps the engine free of editor
/// state.
pub trait AliasPolicy {
    fn is_allowed(&self, alias: &str) -> bool;
}

/// Rejects every alias. The default outside any repeat block.
pub struct NoAliases;

impl AliasPolicy for NoAliases {
    fn is_allowed(&self, _alias: &str) -> bool {
        false
    }
}

/// Admits `current` when the edited step sits downstream of a digest step
/// and the cursor is inside a repeat block.
pub struct RepeatBlockAliases {
    pub has_preceding_digest: bool,
    pub in_repeat_block: bool,
}

impl AliasPolicy for RepeatBlockAliases {
    fn is_allowed(&self, alias: &str) -> bool {
        alias == "current" && self.has_preceding_digest && self.in_repeat_block
    }
}
