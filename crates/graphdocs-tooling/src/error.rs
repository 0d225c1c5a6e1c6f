//! # Docs Error Types
//!
//! Unified error handling for the documentation generators and their input loaders.

use std::path::PathBuf;

use thiserror::Error;

/// Generator operation result type
pub type DocsResult<T> = Result<T, DocsError>;

#[derive(Debug, Error)]
pub enum DocsError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("failed to parse {path}: {source}")]
    JsonParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("setting '{name}' is defined more than once")]
    DuplicateSetting { name: String },

    #[error("template rendering failed for '{template}': {source}")]
    Render {
        template: &'static str,
        source: askama::Error,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl DocsError {
    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigError(message.into())
    }

    pub(crate) fn render(template: &'static str, source: askama::Error) -> Self {
        Self::Render { template, source }
    }
}
