//! Noise Detection Battery
//!
//! Independent, pure predicates that each flag one noise pattern in a single
//! line of docstring text.
//!
//! ```text
//! noise_detection/
//! ├── patterns.rs    # Compiled regexes (process-wide, read-only)
//! ├── predicates.rs  # One total function per rule
//! ├── tokenizer.rs   # Punctuation-aware docstring tokenizer
//! └── rule.rs        # NoiseRule (tag + predicate) and the ordered RuleSet
//! ```
//!
//! Nine rules are active by default. `Length` and `ManySpecialChar` are
//! available but off unless a [`RuleSet`] enables them.

mod patterns;
pub mod predicates;
mod rule;
mod tokenizer;

pub use rule::{NoiseRule, RuleSet};
pub use tokenizer::{count_tokens, is_token_separator, split_tokens, tokenize_docstring};
