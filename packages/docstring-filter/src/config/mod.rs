//! Filter Configuration
//!
//! Two tiers:
//! - Preset: `FilterConfig::preset(Preset::Strict)`
//! - YAML: versioned schema with per-field overrides on top of a preset
//!
//! # Examples
//!
//! ```rust,ignore
//! use docstring_filter::config::{FilterConfig, Preset};
//! use docstring_filter::NoiseRule;
//!
//! let config = FilterConfig::preset(Preset::Standard)
//!     .with_rules(|rules| rules.with(NoiseRule::ManySpecialChar))
//!     .with_extra_blacklist(["Mock"]);
//! config.validate()?;
//!
//! let config = FilterConfig::from_yaml_file("filter.yaml")?;
//! ```

pub mod error;
pub mod filter_config;
pub mod io;
pub mod preset;

// Re-exports
pub use error::{ConfigError, ConfigResult};
pub use filter_config::FilterConfig;
pub use io::{ConfigExportV1, ConfigOverrides, SUPPORTED_VERSIONS};
pub use preset::Preset;
