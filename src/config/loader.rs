//! Configuration file loader.

use std::path::{Path, PathBuf};

use super::types::KnowledgeConfig;

/// File name searched for in the current directory.
pub const LOCAL_CONFIG_FILE: &str = ".iac-knowledge.toml";

/// Configuration loader that searches multiple locations.
#[derive(Debug)]
pub struct ConfigLoader {
    /// Search paths in order of priority.
    search_paths: Vec<PathBuf>,
}

impl ConfigLoader {
    /// Create a new config loader with default search paths.
    #[must_use]
    pub fn new() -> Self {
        let mut search_paths = Vec::new();

        // 1. Current directory: .iac-knowledge.toml
        search_paths.push(PathBuf::from(LOCAL_CONFIG_FILE));

        // 2. User config directory: ~/.config/iac-knowledge/config.toml
        if let Some(config_dir) = dirs::config_dir() {
            search_paths.push(config_dir.join("iac-knowledge").join("config.toml"));
        }

        Self { search_paths }
    }

    /// Create a config loader with a specific config file path.
    #[must_use]
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            search_paths: vec![path],
        }
    }

    /// Load configuration from the first available file, or return defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be parsed.
    pub fn load(&self) -> Result<KnowledgeConfig, ConfigError> {
        if let Some(path) = self.find_config_file() {
            tracing::debug!(path = %path.display(), "Loading config file");
            return Self::load_from_path(&path);
        }

        tracing::debug!("No config file found, using defaults");
        Ok(KnowledgeConfig::default())
    }

    /// Load configuration from a specific path.
    fn load_from_path(path: &Path) -> Result<KnowledgeConfig, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut config: KnowledgeConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                source: e,
            })?;

        if let Some(base) = path.parent() {
            for document in &mut config.documents {
                if document.path.is_relative() {
                    document.path = base.join(&document.path);
                }
            }
        }

        Ok(config)
    }

    /// Get the search paths for debugging.
    #[must_use]
    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    /// Find the first config file that exists.
    #[must_use]
    pub fn find_config_file(&self) -> Option<PathBuf> {
        self.search_paths.iter().find(|p| p.exists()).cloned()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur during configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_loader_default_paths() {
        let loader = ConfigLoader::new();
        assert!(!loader.search_paths().is_empty());
        assert!(loader.search_paths()[0].ends_with(".iac-knowledge.toml"));
    }

    #[test]
    fn test_config_loader_returns_defaults_when_no_file() {
        let loader = ConfigLoader::with_path(PathBuf::from("/nonexistent/path.toml"));
        let config = loader.load().unwrap();
        assert_eq!(config, KnowledgeConfig::default());
    }

    #[test]
    fn test_parse_toml_config() {
        let toml_str = r#"
            [server]
            host = "0.0.0.0"
            port = 8080

            [[documents]]
            topic = "team-cdk-conventions"
            path = "/srv/docs/cdk.md"
            title = "Team CDK conventions"
            url = "https://wiki.example.com/cdk"
        "#;

        let config: KnowledgeConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert!(config.server.cors_permissive);
        assert_eq!(config.documents.len(), 1);
        assert_eq!(config.documents[0].topic, "team-cdk-conventions");
        assert_eq!(
            config.documents[0].title.as_deref(),
            Some("Team CDK conventions")
        );
    }

    #[test]
    fn test_relative_document_paths_resolved() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        std::fs::write(
            &config_path,
            r#"
            [[documents]]
            topic = "team"
            path = "docs/team.md"

            [[documents]]
            topic = "abs"
            path = "/abs/doc.md"
            "#,
        )
        .unwrap();

        let config = ConfigLoader::with_path(config_path).load().unwrap();
        assert_eq!(config.documents[0].path, dir.path().join("docs/team.md"));
        assert_eq!(config.documents[1].path, PathBuf::from("/abs/doc.md"));
    }

    #[test]
    fn test_parse_error_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("broken.toml");
        std::fs::write(&config_path, "[server\nport = ").unwrap();

        let error = ConfigLoader::with_path(config_path.clone())
            .load()
            .unwrap_err();
        assert!(matches!(error, ConfigError::ParseError { .. }));
        assert!(error.to_string().contains("broken.toml"));
    }
}
