//! Filter configuration

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::io::{ConfigExportV1, ConfigOverrides, SUPPORTED_VERSIONS};
use super::{ConfigError, ConfigResult, Preset};
use crate::features::comment::{HtmlTagStripper, MarkupStripper};
use crate::features::noise_detection::{NoiseRule, RuleSet};
use crate::shared::constants::{admissibility, tokens};

/// Complete filter configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Preset this configuration started from
    pub preset: Preset,

    /// Rules evaluated on every line
    pub rules: RuleSet,

    /// Docstrings with this many tokens or fewer are rejected
    pub min_tokens: usize,

    /// Docstrings with this many tokens or more are rejected
    pub max_tokens: usize,

    /// Functions spanning this many lines or fewer are trivial
    pub max_trivial_lines: usize,

    /// Name fragments rejected on top of the built-in blacklist
    pub extra_blacklist: Vec<String>,

    /// Reject pairs whose comment merely restates the identifier
    pub check_identifier_similarity: bool,

    /// Normalized edit distance threshold for the restatement check
    pub similarity_threshold: f64,

    /// Strip markup tags from each line before gating it
    pub strip_markup: bool,

    /// Replacement text for removed URLs
    pub url_replacement: String,
}

impl FilterConfig {
    /// Complete configuration for a preset
    pub fn preset(preset: Preset) -> Self {
        let base = Self {
            preset,
            rules: RuleSet::default(),
            min_tokens: tokens::MIN_TOKENS_EXCLUSIVE,
            max_tokens: tokens::MAX_TOKENS_EXCLUSIVE,
            max_trivial_lines: admissibility::MAX_TRIVIAL_LINES,
            extra_blacklist: Vec::new(),
            check_identifier_similarity: false,
            similarity_threshold: admissibility::IDENTIFIER_SIMILARITY_THRESHOLD,
            strip_markup: true,
            url_replacement: String::new(),
        };

        match preset {
            Preset::Standard => base,
            Preset::Strict => Self {
                rules: RuleSet::all(),
                check_identifier_similarity: true,
                ..base
            },
            Preset::Lenient => Self {
                rules: RuleSet::default()
                    .without(NoiseRule::Question)
                    .without(NoiseRule::ManyUppercaseWord),
                ..base
            },
        }
    }

    /// Adjust the rule set
    pub fn with_rules(mut self, f: impl FnOnce(RuleSet) -> RuleSet) -> Self {
        self.rules = f(self.rules);
        self
    }

    /// Exclusive token bounds for accepted docstrings
    pub fn with_token_bounds(mut self, min_tokens: usize, max_tokens: usize) -> Self {
        self.min_tokens = min_tokens;
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_extra_blacklist<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_blacklist.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn with_identifier_similarity(mut self, enabled: bool) -> Self {
        self.check_identifier_similarity = enabled;
        self
    }

    pub fn with_markup_stripping(mut self, enabled: bool) -> Self {
        self.strip_markup = enabled;
        self
    }

    /// Range and consistency checks
    pub fn validate(&self) -> ConfigResult<()> {
        if self.rules.is_empty() {
            return Err(ConfigError::EmptyRuleSet);
        }
        if self.min_tokens.saturating_add(1) >= self.max_tokens {
            return Err(ConfigError::EmptyTokenWindow {
                min_tokens: self.min_tokens,
                max_tokens: self.max_tokens,
            });
        }
        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(ConfigError::range_with_hint(
                "similarity_threshold",
                self.similarity_threshold,
                0.0,
                1.0,
                "The threshold is a fraction of the longer string length",
            ));
        }
        if !self.url_replacement_is_stable() {
            return Err(ConfigError::UnstableUrlReplacement(
                self.url_replacement.clone(),
            ));
        }
        Ok(())
    }

    /// A second cleaning pass must leave the replacement untouched
    fn url_replacement_is_stable(&self) -> bool {
        let replacement = &self.url_replacement;
        if replacement.contains("http") || replacement.contains('\n') {
            return false;
        }
        !self.strip_markup || HtmlTagStripper::new().strip(replacement) == *replacement
    }

    /// Apply YAML overrides field by field
    pub fn apply_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(rules) = overrides.rules {
            self.rules = rules;
        }
        if let Some(min_tokens) = overrides.min_tokens {
            self.min_tokens = min_tokens;
        }
        if let Some(max_tokens) = overrides.max_tokens {
            self.max_tokens = max_tokens;
        }
        if let Some(lines) = overrides.max_trivial_lines {
            self.max_trivial_lines = lines;
        }
        if let Some(names) = overrides.extra_blacklist {
            self.extra_blacklist = names;
        }
        if let Some(enabled) = overrides.check_identifier_similarity {
            self.check_identifier_similarity = enabled;
        }
        if let Some(threshold) = overrides.similarity_threshold {
            self.similarity_threshold = threshold;
        }
        if let Some(enabled) = overrides.strip_markup {
            self.strip_markup = enabled;
        }
        if let Some(replacement) = overrides.url_replacement {
            self.url_replacement = replacement;
        }
        self
    }

    /// Load from a YAML string (schema v1), validated
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        let export: ConfigExportV1 = serde_yaml::from_str(yaml)?;

        let version = export.version.ok_or(ConfigError::MissingVersion)?;
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(ConfigError::UnsupportedVersion {
                found: version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        let mut config = Self::preset(export.preset);
        if let Some(overrides) = export.overrides {
            config = config.apply_overrides(overrides);
        }
        config.validate()?;
        Ok(config)
    }

    /// Load from a YAML file (schema v1), validated
    pub fn from_yaml_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Export as YAML (schema v1) with every field as an override
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let export = ConfigExportV1 {
            version: Some(SUPPORTED_VERSIONS[0]),
            preset: self.preset,
            overrides: Some(ConfigOverrides::from(self)),
        };
        Ok(serde_yaml::to_string(&export)?)
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self::preset(Preset::Standard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_preset() {
        let config = FilterConfig::default();
        assert_eq!(config.rules, RuleSet::default());
        assert_eq!(config.min_tokens, 3);
        assert_eq!(config.max_tokens, 256);
        assert_eq!(config.max_trivial_lines, 3);
        assert!(!config.check_identifier_similarity);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_strict_preset_enables_everything() {
        let config = FilterConfig::preset(Preset::Strict);
        assert_eq!(config.rules.len(), NoiseRule::ALL.len());
        assert!(config.check_identifier_similarity);
    }

    #[test]
    fn test_lenient_preset() {
        let config = FilterConfig::preset(Preset::Lenient);
        assert!(!config.rules.contains(NoiseRule::Question));
        assert!(!config.rules.contains(NoiseRule::ManyUppercaseWord));
        assert!(config.rules.contains(NoiseRule::Literal));
    }

    #[test]
    fn test_validation_errors() {
        let config = FilterConfig::default().with_rules(|_| RuleSet::empty());
        assert!(matches!(config.validate(), Err(ConfigError::EmptyRuleSet)));

        let config = FilterConfig::default().with_token_bounds(10, 11);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyTokenWindow { .. })
        ));

        let mut config = FilterConfig::default();
        config.similarity_threshold = 1.5;
        assert!(matches!(config.validate(), Err(ConfigError::Range { .. })));
    }

    #[test]
    fn test_token_bounds_near_usize_max() {
        let config = FilterConfig::default().with_token_bounds(usize::MAX, usize::MAX);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyTokenWindow { .. })
        ));

        let config = FilterConfig::default().with_token_bounds(usize::MAX - 2, usize::MAX);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_url_replacement_must_survive_cleaning() {
        for replacement in ["<url>", "&lt;url&gt;", "see http://x", "a\nb"] {
            let config = FilterConfig {
                url_replacement: replacement.to_string(),
                ..FilterConfig::default()
            };
            assert!(
                matches!(config.validate(), Err(ConfigError::UnstableUrlReplacement(_))),
                "{replacement:?} should be rejected"
            );
        }

        let config = FilterConfig {
            url_replacement: "URL".to_string(),
            ..FilterConfig::default()
        };
        assert!(config.validate().is_ok());

        let config = FilterConfig {
            url_replacement: "<url>".to_string(),
            ..FilterConfig::default()
        }
        .with_markup_stripping(false);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_methods() {
        let config = FilterConfig::default()
            .with_extra_blacklist(["Mock", "Stub"])
            .with_identifier_similarity(true)
            .with_markup_stripping(false);
        assert_eq!(config.extra_blacklist, vec!["Mock", "Stub"]);
        assert!(config.check_identifier_similarity);
        assert!(!config.strip_markup);
    }
}
