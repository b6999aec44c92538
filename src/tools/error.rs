//! Tool surface error types.

use serde::{Deserialize, Serialize};

/// Errors reported to agents by the retrieval tool.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ToolError {
    /// The requested topic is not registered.
    #[error("Unknown topic '{topic}'. Available topics: {}", .available.join(", "))]
    UnknownTopic {
        topic: String,
        available: Vec<String>,
    },

    /// The request itself is malformed.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// Structured error payload returned to agents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Machine-readable error code (`unknown_topic`, `invalid_request`).
    pub error: String,
    /// Human-readable message.
    pub message: String,
    /// Valid topic keys, so the caller can retry.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub available_topics: Vec<String>,
}

impl ToolError {
    /// Machine-readable error code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownTopic { .. } => "unknown_topic",
            Self::InvalidRequest(_) => "invalid_request",
        }
    }

    /// Convert into the payload sent to agents.
    #[must_use]
    pub fn to_body(&self) -> ErrorBody {
        let available_topics = match self {
            Self::UnknownTopic { available, .. } => available.clone(),
            Self::InvalidRequest(_) => Vec::new(),
        };
        ErrorBody {
            error: self.code().to_string(),
            message: self.to_string(),
            available_topics,
        }
    }
}
