//! Request and response types of the retrieval tool.

use serde::{Deserialize, Serialize};

use crate::knowledge::KnowledgeEntry;

/// Arguments of a knowledge retrieval call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetrieveRequest {
    /// Topic key to look up.
    pub topic: String,
    /// Optional free-text query; providers with a fixed set ignore it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

impl RetrieveRequest {
    /// Create a request without a query.
    #[must_use]
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            query: None,
        }
    }

    /// Attach a query (builder pattern).
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }
}

/// Result of a knowledge retrieval call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetrieveResponse {
    /// Topic that was looked up.
    pub topic: String,
    /// Entries in provider order.
    pub results: Vec<KnowledgeEntry>,
}

/// One topic in a discovery listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicSummary {
    pub topic: String,
    pub description: String,
    /// Number of entries the topic holds.
    pub entries: usize,
}

/// Response for topic discovery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicsResponse {
    pub topics: Vec<TopicSummary>,
}

/// Tool metadata an agent host can advertise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    /// JSON schema of [`RetrieveRequest`].
    pub input_schema: serde_json::Value,
}
