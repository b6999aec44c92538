//! HTTP handlers for the knowledge tool API.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use super::error::ApiError;
use crate::tools::{RetrievalTool, RetrieveRequest, RetrieveResponse, ToolDefinition, TopicsResponse};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Retrieval tool over the finished registry.
    pub tool: RetrievalTool,
}

impl AppState {
    #[must_use]
    pub fn new(tool: RetrievalTool) -> Self {
        Self { tool }
    }
}

/// Query parameters for GET /api/knowledge/:topic.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct KnowledgeQuery {
    /// Optional free-text query.
    #[serde(default)]
    pub query: Option<String>,
}

/// GET /api/tools - Tool definitions for agent hosts.
pub async fn get_tools(State(state): State<AppState>) -> Json<Vec<ToolDefinition>> {
    Json(vec![state.tool.definition()])
}

/// GET /api/topics - List registered topics.
pub async fn get_topics(State(state): State<AppState>) -> Json<TopicsResponse> {
    Json(state.tool.list_topics())
}

/// GET /api/knowledge/:topic - Entries for a topic.
pub async fn get_knowledge(
    State(state): State<AppState>,
    Path(topic): Path<String>,
    Query(params): Query<KnowledgeQuery>,
) -> Result<Json<RetrieveResponse>, ApiError> {
    let request = RetrieveRequest {
        topic,
        query: params.query,
    };
    Ok(Json(state.tool.retrieve(&request)?))
}

/// POST /api/tools/get_knowledge - Tool invocation with a JSON body.
pub async fn post_get_knowledge(
    State(state): State<AppState>,
    Json(request): Json<RetrieveRequest>,
) -> Result<Json<RetrieveResponse>, ApiError> {
    Ok(Json(state.tool.retrieve(&request)?))
}
