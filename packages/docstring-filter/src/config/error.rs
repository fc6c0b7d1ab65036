//! Configuration error types

use thiserror::Error;

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Range validation error
    #[error("Invalid range for field '{field}': {value} not in {min}..={max}. {hint}")]
    Range {
        field: String,
        value: String,
        min: String,
        max: String,
        hint: String,
    },

    /// Token bounds leave no admissible length
    #[error("Token bounds ({min_tokens}, {max_tokens}) admit no docstring length. min_tokens must be at least 2 below max_tokens")]
    EmptyTokenWindow { min_tokens: usize, max_tokens: usize },

    /// URL replacement that a second cleaning pass would rewrite
    #[error("URL replacement {0:?} is not stable under cleaning. It must not contain markup, entities, line breaks or 'http'")]
    UnstableUrlReplacement(String),

    /// No rule would ever fire
    #[error("Rule set is empty. Enable at least one rule or use a preset")]
    EmptyRuleSet,

    /// Missing version field in YAML
    #[error("Missing 'version' field in configuration file. Add 'version: 1' to the top of your YAML file.")]
    MissingVersion,

    /// Unsupported version
    #[error("Unsupported configuration version {found}. Supported versions: {}", supported.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(", "))]
    UnsupportedVersion { found: u32, supported: Vec<u32> },

    /// Unknown preset name
    #[error("Unknown preset '{0}'. Valid presets: standard, strict, lenient")]
    UnknownPreset(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Configuration result type
pub type ConfigResult<T> = Result<T, ConfigError>;

impl ConfigError {
    /// Create a range error with a hint
    pub fn range_with_hint(
        field: impl Into<String>,
        value: impl ToString,
        min: impl ToString,
        max: impl ToString,
        hint: impl Into<String>,
    ) -> Self {
        Self::Range {
            field: field.into(),
            value: value.to_string(),
            min: min.to_string(),
            max: max.to_string(),
            hint: hint.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_message() {
        let err = ConfigError::range_with_hint(
            "similarity_threshold",
            1.5,
            0.0,
            1.0,
            "Use a fraction of the longer string length",
        );
        assert_eq!(
            err.to_string(),
            "Invalid range for field 'similarity_threshold': 1.5 not in 0..=1. Use a fraction of the longer string length"
        );
    }

    #[test]
    fn test_unsupported_version_lists_supported() {
        let err = ConfigError::UnsupportedVersion {
            found: 3,
            supported: vec![1],
        };
        assert!(err.to_string().contains("Supported versions: 1"));
    }
}
