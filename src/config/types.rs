//! Configuration types.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default port for the HTTP tool server.
pub const DEFAULT_PORT: u16 = 3000;

/// Default host address for the HTTP tool server.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Top-level configuration loaded from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KnowledgeConfig {
    /// HTTP tool server settings.
    pub server: ServerConfig,
    /// Extra markdown documents served as topics.
    pub documents: Vec<DocumentConfig>,
}

/// Settings for the HTTP tool server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Whether to enable permissive CORS.
    pub cors_permissive: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            cors_permissive: true,
        }
    }
}

impl ServerConfig {
    /// The configured address as `host:port`.
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// A markdown document registered as a knowledge topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentConfig {
    /// Topic key the document is served under.
    pub topic: String,
    /// Path to the markdown file. Relative paths resolve against the
    /// directory of the config file that declared them.
    pub path: PathBuf,
    /// Entry title when the document has no level-2 sections.
    #[serde(default)]
    pub title: Option<String>,
    /// Reference URL copied onto every entry.
    #[serde(default)]
    pub url: String,
    /// Topic description for listings.
    #[serde(default)]
    pub description: String,
}
