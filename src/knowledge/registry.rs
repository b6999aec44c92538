//! Topic-indexed registry of knowledge providers.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};

use super::entry::KnowledgeEntry;
use super::error::KnowledgeError;
use super::provider::KnowledgeProvider;

/// Read-only index from topic key to provider.
///
/// Providers are registered through `&mut self` while the registry is being
/// built. Once it is shared (typically as `Arc<KnowledgeRegistry>`) it can
/// only be read, so lookups need no locking.
#[derive(Default)]
pub struct KnowledgeRegistry {
    providers: BTreeMap<String, Box<dyn KnowledgeProvider>>,
}

impl KnowledgeRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider under its topic key.
    ///
    /// # Errors
    ///
    /// Returns [`KnowledgeError::DuplicateTopic`] if the key is already
    /// taken. The existing provider is kept.
    pub fn register(&mut self, provider: Box<dyn KnowledgeProvider>) -> Result<(), KnowledgeError> {
        match self.providers.entry(provider.topic().to_string()) {
            Entry::Occupied(existing) => {
                tracing::warn!(topic = %existing.key(), "Duplicate knowledge topic");
                Err(KnowledgeError::DuplicateTopic(existing.key().clone()))
            }
            Entry::Vacant(slot) => {
                tracing::debug!(
                    topic = %slot.key(),
                    entries = provider.entries().len(),
                    "Registered knowledge provider"
                );
                slot.insert(provider);
                Ok(())
            }
        }
    }

    /// Entries of the provider registered under `topic`, in provider order.
    ///
    /// # Errors
    ///
    /// Returns [`KnowledgeError::UnknownTopic`] if no provider matches.
    pub fn lookup(&self, topic: &str) -> Result<&[KnowledgeEntry], KnowledgeError> {
        self.get(topic).map(|provider| provider.entries())
    }

    /// Entries for `topic`, narrowed by `query` when the provider supports it.
    ///
    /// Without a query this is [`KnowledgeRegistry::lookup`].
    ///
    /// # Errors
    ///
    /// Returns [`KnowledgeError::UnknownTopic`] if no provider matches.
    pub fn search(
        &self,
        topic: &str,
        query: Option<&str>,
    ) -> Result<Vec<KnowledgeEntry>, KnowledgeError> {
        let provider = self.get(topic)?;
        Ok(match query {
            Some(query) => provider.search(query),
            None => provider.entries().to_vec(),
        })
    }

    /// All registered topic keys.
    #[must_use]
    pub fn topics(&self) -> BTreeSet<String> {
        self.providers.keys().cloned().collect()
    }

    /// The provider registered under `topic`, if any.
    #[must_use]
    pub fn provider(&self, topic: &str) -> Option<&dyn KnowledgeProvider> {
        self.providers.get(topic).map(|provider| &**provider)
    }

    /// Registered providers ordered by topic key.
    pub fn providers(&self) -> impl Iterator<Item = &dyn KnowledgeProvider> {
        self.providers.values().map(|provider| &**provider)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    fn get(&self, topic: &str) -> Result<&dyn KnowledgeProvider, KnowledgeError> {
        self.provider(topic)
            .ok_or_else(|| KnowledgeError::UnknownTopic(topic.to_string()))
    }
}

impl std::fmt::Debug for KnowledgeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KnowledgeRegistry")
            .field("topics", &self.providers.keys().collect::<Vec<_>>())
            .finish()
    }
}
