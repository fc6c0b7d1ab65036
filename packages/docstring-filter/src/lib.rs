/*
 * Docstring Filter - heuristic docstring quality gate
 *
 * Feature-First Architecture:
 * - shared/      : Common models (Span, SyntaxNode, errors) and the tree-sitter adapter
 * - features/    : Vertical slices (identifier → comment → noise_detection → quality_gate
 *                  → cleaning, plus admissibility)
 * - pipeline/    : Batch orchestration over (function, docstring) pairs
 * - config/      : Presets, YAML I/O, validation
 *
 * Every rule is a fixed, deterministic heuristic. Compiled patterns live in
 * process-wide lazy statics and are read-only after first use.
 */

#![allow(clippy::module_inception)] // Module naming intentional
#![allow(clippy::new_without_default)] // Default impl not always needed
#![allow(clippy::trim_split_whitespace)] // Trim then split intentional
#![allow(clippy::should_implement_trait)] // Preset::from_str returns ConfigError

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models and utilities
pub mod shared;

/// Feature modules (tokenizer, strippers, rules, gate, cleaner, admissibility)
pub mod features;

/// Batch pipeline orchestration
pub mod pipeline;

/// Configuration system
pub mod config;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use config::{FilterConfig, Preset};
pub use features::admissibility::{
    check_autogenerated_by_identifier, check_black_node, check_function, check_function_empty,
    check_node_error, Admission, AdmissibilityFilter, RejectReason,
};
pub use features::cleaning::{clean_docstring, CleanOutcome, DocstringCleaner};
pub use features::comment::{
    remove_comment_delimiters, remove_irrelevant_asides, remove_special_character, remove_url,
    HtmlTagStripper, MarkupStripper, PassthroughStripper,
};
pub use features::identifier::split_identifier_into_parts;
pub use features::noise_detection::{count_tokens, NoiseRule, RuleSet};
pub use features::quality_gate::{check_docstring, GateOutcome, QualityGate, RuleHit};
pub use pipeline::{
    DocstringFilterPipeline, FilterStats, FunctionRecord, PipelineOutput, RecordResult,
};
pub use shared::models::{FilterError, Result, Span, SyntaxNode};
pub use shared::ports::FunctionNode;
