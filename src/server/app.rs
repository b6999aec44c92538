//! HTTP tool server with axum router and graceful shutdown.

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::error::ServerError;
use super::handlers::{get_knowledge, get_tools, get_topics, post_get_knowledge, AppState};
use crate::config::ServerConfig;
use crate::tools::RetrievalTool;

/// HTTP server exposing the retrieval tool to agents.
pub struct KnowledgeServer {
    /// Server configuration.
    config: ServerConfig,
    /// Application state shared across handlers.
    state: AppState,
    /// Cancelled to shut the server down.
    cancel: CancellationToken,
}

impl KnowledgeServer {
    /// Create a new server with default configuration.
    #[must_use]
    pub fn new(tool: RetrievalTool) -> Self {
        Self {
            config: ServerConfig::default(),
            state: AppState::new(tool),
            cancel: CancellationToken::new(),
        }
    }

    /// Set the server configuration (builder pattern).
    #[must_use]
    pub fn with_config(mut self, config: ServerConfig) -> Self {
        self.config = config;
        self
    }

    /// Use an external cancellation token for shutdown (builder pattern).
    #[must_use]
    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Token that stops the server when cancelled.
    #[must_use]
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Get the configured address as a string.
    #[must_use]
    pub fn address(&self) -> String {
        self.config.address()
    }

    /// Build the axum router with all routes and middleware.
    pub fn build_router(&self) -> Router {
        let router = Router::new()
            .route("/api/tools", get(get_tools))
            .route("/api/tools/get_knowledge", post(post_get_knowledge))
            .route("/api/topics", get(get_topics))
            .route("/api/knowledge/:topic", get(get_knowledge))
            .with_state(self.state.clone())
            .layer(TraceLayer::new_for_http());

        if self.config.cors_permissive {
            router.layer(CorsLayer::permissive())
        } else {
            router
        }
    }

    /// Run the server, binding to the configured address.
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind or serve.
    pub async fn run(self) -> Result<(), ServerError> {
        let addr = self.address();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|source| ServerError::BindError {
                address: addr.clone(),
                source,
            })?;
        self.serve(listener).await
    }

    /// Serve on an already bound listener until cancelled.
    ///
    /// # Errors
    ///
    /// Returns an error if serving fails.
    pub async fn serve(self, listener: TcpListener) -> Result<(), ServerError> {
        let cancel = self.cancel.clone();
        let app = self.build_router();

        match listener.local_addr() {
            Ok(local) => tracing::info!(address = %local, "Starting knowledge tool server"),
            Err(_) => tracing::info!(address = %self.address(), "Starting knowledge tool server"),
        }

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                cancel.cancelled().await;
                tracing::info!("Knowledge tool server shutting down gracefully");
            })
            .await
            .map_err(|e| ServerError::ServerError(e.to_string()))
    }
}
