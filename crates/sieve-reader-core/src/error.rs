//! Error types for sieve-reader-core

use thiserror::Error;

/// Result type alias for loading operations
pub type Result<T> = std::result::Result<T, LoadError>;

/// Failure to obtain the article collection
#[derive(Error, Debug)]
pub enum LoadError {
    /// Network or fetch-layer failure
    #[error("Transport error: {message}")]
    Transport { message: String },

    /// Server answered with a non-success status
    #[error("HTTP status {status}")]
    Status { status: u16 },

    /// Body was not a valid article document
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Local file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LoadError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Value out of valid range
    #[error("Value out of range: {0}")]
    OutOfRange(String),

    /// Required field is empty
    #[error("Missing field: {0}")]
    MissingField(String),

    /// Configuration block was not valid JSON
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
