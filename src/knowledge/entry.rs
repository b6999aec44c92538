//! Ranked knowledge entries.

use serde::{Deserialize, Serialize};

use super::error::KnowledgeError;

/// One immutable unit of guidance returned to agents.
///
/// Fields are private so an entry cannot change after construction. Every
/// way of obtaining an entry, including deserialization, goes through
/// [`KnowledgeEntry::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawEntry")]
pub struct KnowledgeEntry {
    rank: u32,
    title: String,
    url: String,
    context: String,
}

/// Unvalidated wire shape of an entry.
#[derive(Deserialize)]
struct RawEntry {
    rank: u32,
    title: String,
    #[serde(default)]
    url: String,
    #[serde(default)]
    context: String,
}

impl TryFrom<RawEntry> for KnowledgeEntry {
    type Error = KnowledgeError;

    fn try_from(raw: RawEntry) -> Result<Self, Self::Error> {
        Self::new(raw.rank, raw.title, raw.url, raw.context)
    }
}

impl KnowledgeEntry {
    /// Create a validated entry.
    ///
    /// # Errors
    ///
    /// Returns [`KnowledgeError::InvalidEntry`] if `rank` is zero or `title`
    /// is empty or only whitespace.
    pub fn new(
        rank: u32,
        title: impl Into<String>,
        url: impl Into<String>,
        context: impl Into<String>,
    ) -> Result<Self, KnowledgeError> {
        let title = title.into();
        if rank == 0 {
            return Err(KnowledgeError::invalid(format!(
                "rank must be positive (entry {title:?})"
            )));
        }
        if title.trim().is_empty() {
            return Err(KnowledgeError::invalid(format!(
                "title must not be empty (rank {rank})"
            )));
        }

        Ok(Self {
            rank,
            title,
            url: url.into(),
            context: context.into(),
        })
    }

    /// Relevance rank, lower is more relevant.
    #[must_use]
    pub fn rank(&self) -> u32 {
        self.rank
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Canonical reference, empty when there is none.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Opaque content payload.
    #[must_use]
    pub fn context(&self) -> &str {
        &self.context
    }
}
