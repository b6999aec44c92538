//! Process-wide initialization of the knowledge registry.
//!
//! Registration happens here, once, before anything is served. The finished
//! registry is handed out as `Arc<KnowledgeRegistry>` and never mutated again.

use std::path::PathBuf;

use crate::config::{DocumentConfig, KnowledgeConfig};
use crate::knowledge::{
    CdkBestPracticesProvider, DocumentError, KnowledgeError, KnowledgeRegistry,
    MarkdownMetadata, MarkdownProvider,
};

/// Errors that abort startup.
#[derive(thiserror::Error, Debug)]
pub enum BootstrapError {
    /// A provider failed validation or registration.
    #[error(transparent)]
    Knowledge(#[from] KnowledgeError),

    /// A configured document could not be loaded.
    #[error("Failed to load knowledge document {path}: {source}")]
    Document {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Build the registry: built-in providers first, then configured documents
/// in declaration order.
///
/// # Errors
///
/// Returns an error if a document cannot be loaded, a provider is invalid,
/// or two providers share a topic key.
pub async fn build_registry(config: &KnowledgeConfig) -> Result<KnowledgeRegistry, BootstrapError> {
    let mut registry = KnowledgeRegistry::new();

    registry.register(Box::new(CdkBestPracticesProvider::new()?))?;

    for document in &config.documents {
        let provider = load_document(document).await?;
        registry.register(Box::new(provider))?;
    }

    tracing::info!(
        topics = registry.len(),
        "Knowledge registry initialized"
    );
    Ok(registry)
}

async fn load_document(document: &DocumentConfig) -> Result<MarkdownProvider, BootstrapError> {
    let metadata = MarkdownMetadata {
        title: document.title.clone(),
        url: document.url.clone(),
        description: document.description.clone(),
    };

    MarkdownProvider::load(document.topic.as_str(), &document.path, metadata)
        .await
        .map_err(|error| match error {
            DocumentError::Io(source) => BootstrapError::Document {
                path: document.path.clone(),
                source,
            },
            DocumentError::Knowledge(error) => BootstrapError::Knowledge(error),
        })
}
