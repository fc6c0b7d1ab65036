//! Configuration I/O (YAML schema)
//!
//! Defines the schema types. Loading and export live on `FilterConfig`.

use serde::{Deserialize, Serialize};

use super::{FilterConfig, Preset};
use crate::features::noise_detection::RuleSet;

/// Schema versions this crate reads
pub const SUPPORTED_VERSIONS: &[u32] = &[1];

/// YAML Schema v1
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigExportV1 {
    /// Schema version (always 1 for v1)
    pub version: Option<u32>,

    /// Base preset
    #[serde(default)]
    pub preset: Preset,

    /// Fine-grained overrides
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overrides: Option<ConfigOverrides>,
}

/// Configuration overrides
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<RuleSet>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_tokens: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_trivial_lines: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_blacklist: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_identifier_similarity: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub similarity_threshold: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strip_markup: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_replacement: Option<String>,
}

impl From<&FilterConfig> for ConfigOverrides {
    fn from(config: &FilterConfig) -> Self {
        Self {
            rules: Some(config.rules.clone()),
            min_tokens: Some(config.min_tokens),
            max_tokens: Some(config.max_tokens),
            max_trivial_lines: Some(config.max_trivial_lines),
            extra_blacklist: Some(config.extra_blacklist.clone()),
            check_identifier_similarity: Some(config.check_identifier_similarity),
            similarity_threshold: Some(config.similarity_threshold),
            strip_markup: Some(config.strip_markup),
            url_replacement: Some(config.url_replacement.clone()),
        }
    }
}
