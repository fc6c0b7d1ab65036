//! Preset configurations
//!
//! Presets provide complete default configurations for common use cases.

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Configuration preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// The nine default rules, 4..=255 tokens, markup stripping on
    Standard,

    /// Corpus hardening: every rule (token-count and punctuation density
    /// included) plus the identifier-restatement check
    Strict,

    /// Keeps questions and all-caps-heavy lines (acronym-dense domains)
    Lenient,
}

impl Preset {
    /// Parse preset from string
    pub fn from_str(s: &str) -> Result<Self, ConfigError> {
        match s.to_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "strict" => Ok(Self::Strict),
            "lenient" => Ok(Self::Lenient),
            _ => Err(ConfigError::UnknownPreset(s.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Strict => "strict",
            Self::Lenient => "lenient",
        }
    }
}

impl Default for Preset {
    fn default() -> Self {
        Self::Standard
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_parsing() {
        assert_eq!(Preset::from_str("standard").unwrap(), Preset::Standard);
        assert_eq!(Preset::from_str("STRICT").unwrap(), Preset::Strict);
        assert_eq!(Preset::from_str("lenient").unwrap(), Preset::Lenient);
        assert!(matches!(
            Preset::from_str("paranoid"),
            Err(ConfigError::UnknownPreset(name)) if name == "paranoid"
        ));
    }

    #[test]
    fn test_preset_display() {
        assert_eq!(Preset::Strict.to_string(), "strict");
        assert_eq!(Preset::default(), Preset::Standard);
    }
}
