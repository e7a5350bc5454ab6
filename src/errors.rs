// src/errors.rs

//! Crate-wide error aliases and helpers.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ForeachError {
    #[error("invalid filter: {0}")]
    Parse(String),

    #[error("invalid pattern '{pattern}': {error}")]
    InvalidPattern { pattern: String, error: regex::Error },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("failed to get contexts: {0}")]
    Provider(String),

    #[error("query matched no contexts from kubeconfig")]
    EmptySelection,

    #[error("user refused execution")]
    UserRejected,

    #[error("prompt canceled")]
    Canceled,

    #[error("interrupted; {skipped} context(s) were not started")]
    Interrupted { skipped: usize },

    #[error("{0}")]
    Substitution(String),

    #[error("kubectl exited with {status}")]
    Execution { status: String },

    #[error("{target}: {error}")]
    Task {
        target: String,
        error: Box<ForeachError>,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("{0:#}")]
    Other(#[from] anyhow::Error),
}

impl ForeachError {
    /// Attribute this error to the context whose task produced it.
    pub fn for_target(self, target: &str) -> Self {
        match self {
            already @ ForeachError::Task { .. } => already,
            other => ForeachError::Task {
                target: target.to_string(),
                error: Box::new(other),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, ForeachError>;
