//! Knowledge provider trait and the static provider.

use std::collections::HashSet;

use super::entry::KnowledgeEntry;
use super::error::KnowledgeError;

/// Owner of the knowledge entries for a single topic.
///
/// Implementations must be deterministic: `topic` and `entries` return the
/// same values on every call, with no I/O and no dependence on clock or
/// environment.
pub trait KnowledgeProvider: Send + Sync {
    /// Stable topic key, unique within a registry.
    fn topic(&self) -> &str;

    /// Short human-readable description for topic listings.
    fn description(&self) -> &str {
        ""
    }

    /// Full pre-ranked content, sorted ascending by rank.
    fn entries(&self) -> &[KnowledgeEntry];

    /// Entries relevant to a free-text query.
    ///
    /// Providers with a fixed set ignore the query. Filtering providers may
    /// drop entries but must keep the order of [`KnowledgeProvider::entries`].
    fn search(&self, _query: &str) -> Vec<KnowledgeEntry> {
        self.entries().to_vec()
    }
}

/// Validate a topic key and a set of entries, returning them sorted by rank.
///
/// # Errors
///
/// Returns [`KnowledgeError::InvalidEntry`] if the topic key is blank or
/// padded with whitespace, or two entries share a rank.
pub(crate) fn ranked_entries(
    topic: &str,
    mut entries: Vec<KnowledgeEntry>,
) -> Result<Vec<KnowledgeEntry>, KnowledgeError> {
    if topic.trim().is_empty() {
        return Err(KnowledgeError::invalid("topic key must not be empty"));
    }
    // Tool requests are trimmed before lookup, so a padded key is unreachable.
    if topic.trim() != topic {
        return Err(KnowledgeError::invalid(format!(
            "topic key {topic:?} must not have leading or trailing whitespace"
        )));
    }

    let mut seen = HashSet::with_capacity(entries.len());
    for entry in &entries {
        if !seen.insert(entry.rank()) {
            return Err(KnowledgeError::invalid(format!(
                "duplicate rank {} in topic {topic:?}",
                entry.rank()
            )));
        }
    }

    entries.sort_by_key(KnowledgeEntry::rank);
    Ok(entries)
}

/// Provider whose entries are fixed in code.
#[derive(Debug, Clone)]
pub struct StaticProvider {
    topic: String,
    description: String,
    entries: Vec<KnowledgeEntry>,
}

impl StaticProvider {
    /// Create a provider from a topic key and its entries.
    ///
    /// Entries are sorted ascending by rank.
    ///
    /// # Errors
    ///
    /// Returns [`KnowledgeError::InvalidEntry`] if the topic key is blank or
    /// padded with whitespace, or two entries share a rank.
    pub fn new(
        topic: impl Into<String>,
        entries: Vec<KnowledgeEntry>,
    ) -> Result<Self, KnowledgeError> {
        let topic = topic.into();
        let entries = ranked_entries(&topic, entries)?;
        Ok(Self {
            topic,
            description: String::new(),
            entries,
        })
    }

    /// Set the description (builder pattern).
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl KnowledgeProvider for StaticProvider {
    fn topic(&self) -> &str {
        &self.topic
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn entries(&self) -> &[KnowledgeEntry] {
        &self.entries
    }
}
