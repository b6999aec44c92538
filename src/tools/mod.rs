//! Retrieval tool surface invoked by agents.
//!
//! Wraps a finished [`KnowledgeRegistry`] and translates registry failures
//! into caller-visible [`ToolError`]s. An unknown topic is always an error,
//! never an empty result.

mod error;
mod types;

pub use error::*;
pub use types::*;

use std::sync::Arc;

use crate::knowledge::{KnowledgeError, KnowledgeRegistry};

/// Name under which the retrieval tool is advertised.
pub const TOOL_NAME: &str = "get_knowledge";

/// Agent-facing knowledge retrieval tool.
#[derive(Debug, Clone)]
pub struct RetrievalTool {
    registry: Arc<KnowledgeRegistry>,
}

impl RetrievalTool {
    /// Create the tool over a fully built registry.
    #[must_use]
    pub fn new(registry: Arc<KnowledgeRegistry>) -> Self {
        Self { registry }
    }

    /// The underlying registry.
    #[must_use]
    pub fn registry(&self) -> &KnowledgeRegistry {
        &self.registry
    }

    /// Retrieve the entries for a topic, in provider order.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::UnknownTopic`] (listing the valid topics) if no
    /// provider matches, or [`ToolError::InvalidRequest`] for a blank topic.
    pub fn retrieve(&self, request: &RetrieveRequest) -> Result<RetrieveResponse, ToolError> {
        let topic = request.topic.trim();
        if topic.is_empty() {
            return Err(ToolError::InvalidRequest(
                "topic must not be empty".to_string(),
            ));
        }

        let results = self
            .registry
            .search(topic, request.query.as_deref())
            .map_err(|e| self.translate(e))?;

        tracing::debug!(
            topic = %topic,
            query = ?request.query,
            results = results.len(),
            "Retrieved knowledge"
        );

        Ok(RetrieveResponse {
            topic: topic.to_string(),
            results,
        })
    }

    /// List every registered topic, sorted by key.
    #[must_use]
    pub fn list_topics(&self) -> TopicsResponse {
        let topics = self
            .registry
            .providers()
            .map(|provider| TopicSummary {
                topic: provider.topic().to_string(),
                description: provider.description().to_string(),
                entries: provider.entries().len(),
            })
            .collect();
        TopicsResponse { topics }
    }

    /// Tool metadata for agent hosts.
    #[must_use]
    pub fn definition(&self) -> ToolDefinition {
        let topics: Vec<String> = self.registry.topics().into_iter().collect();
        ToolDefinition {
            name: TOOL_NAME.to_string(),
            description: "Retrieve ranked infrastructure-as-code guidance for a topic. \
                          Returns an ordered list of {rank, title, url, context} entries."
                .to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "topic": {
                        "type": "string",
                        "description": "Topic key to retrieve",
                        "enum": topics
                    },
                    "query": {
                        "type": "string",
                        "description": "Optional free-text query to narrow the results"
                    }
                },
                "required": ["topic"]
            }),
        }
    }

    fn translate(&self, error: KnowledgeError) -> ToolError {
        match error {
            KnowledgeError::UnknownTopic(topic) => {
                tracing::info!(topic = %topic, "Knowledge requested for unknown topic");
                ToolError::UnknownTopic {
                    topic,
                    available: self.registry.topics().into_iter().collect(),
                }
            }
            other => ToolError::InvalidRequest(other.to_string()),
        }
    }
}
