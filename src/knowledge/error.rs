//! Knowledge error types.

/// Errors raised while building or querying the knowledge registry.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum KnowledgeError {
    /// An entry failed validation at construction time.
    #[error("Invalid knowledge entry: {reason}")]
    InvalidEntry { reason: String },

    /// Two providers claimed the same topic key.
    #[error("Duplicate knowledge topic: {0}")]
    DuplicateTopic(String),

    /// No provider is registered under the requested topic key.
    #[error("Unknown knowledge topic: {0}")]
    UnknownTopic(String),
}

impl KnowledgeError {
    /// Shorthand for a [`KnowledgeError::InvalidEntry`] with the given reason.
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidEntry {
            reason: reason.into(),
        }
    }
}
