//! HTTP rendition of the retrieval tool surface.

mod app;
mod error;
mod handlers;

pub use app::KnowledgeServer;
pub use error::{ApiError, ServerError};
pub use handlers::{AppState, KnowledgeQuery};
