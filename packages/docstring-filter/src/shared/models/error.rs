//! Error types for docstring-filter
//!
//! Text-level operations are total and never fail; errors only arise at the
//! edges (configuration files, parser setup, source decoding).

use thiserror::Error;

use crate::config::ConfigError;

/// Main error type for docstring-filter operations
#[derive(Debug, Error)]
pub enum FilterError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Parser setup or parse failure in an adapter
    #[error("Parse error: {0}")]
    Parse(String),

    /// Source text is not valid UTF-8
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

impl FilterError {
    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        FilterError::Parse(msg.into())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, FilterError>;
