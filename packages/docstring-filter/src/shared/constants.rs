//! Centralized filter constants
//!
//! All thresholds used by the rule battery and the admissibility filter are
//! defined here so presets and tests share one source of truth.

/// Token bounds for an accepted docstring
pub mod tokens {
    /// A docstring with this many whitespace tokens or fewer is rejected
    pub const MIN_TOKENS_EXCLUSIVE: usize = 3;

    /// A docstring with this many whitespace tokens or more is rejected
    pub const MAX_TOKENS_EXCLUSIVE: usize = 256;
}

/// Cleaning passes
pub mod cleaning {
    /// Cleaning repeats until its output is stable; a docstring that is
    /// still changing after this many passes is rejected
    pub const MAX_PASSES: usize = 4;

    /// Markup stripping repeats until the line is stable, at most this often
    pub const MAX_STRIP_PASSES: usize = 8;
}

/// Per-rule thresholds
pub mod rules {
    /// Minimum share of ASCII letters among non-whitespace characters
    pub const MIN_ALPHABETIC_RATIO: f64 = 0.7;

    /// Maximum share of snake_case / camelCase matches per token
    pub const MAX_SPECIAL_CASE_RATIO: f64 = 0.3;

    /// Repeated-character rule only applies above this many characters
    pub const REPEATED_CHAR_MIN_LENGTH: usize = 30;

    /// Maximum share of the most frequent character
    pub const MAX_REPEATED_CHAR_RATIO: f64 = 0.4;

    /// Uppercase-word rule only applies above this many tokens
    pub const UPPERCASE_MIN_TOKENS: usize = 4;

    /// Maximum share of all-caps words per token
    pub const MAX_UPPERCASE_RATIO: f64 = 0.3;

    /// Longest allowed underscore-delimited fragment
    pub const MAX_WORD_LENGTH: usize = 30;

    /// Special-character rule only applies above this many punctuation marks
    pub const SPECIAL_CHAR_MIN_COUNT: usize = 3;

    /// Maximum punctuation marks per docstring token
    pub const MAX_SPECIAL_CHAR_RATIO: f64 = 0.4;

    /// Date-format tokens lowered before counting uppercase words
    pub const DATE_FORMAT_TOKENS: &[&str] = &["DD", "MM", "YY", "YYYY"];
}

/// Function admissibility
pub mod admissibility {
    /// Node kind emitted by the parser for malformed input
    pub const ERROR_KIND: &str = "ERROR";

    /// Functions spanning this many lines or fewer count as trivial
    pub const MAX_TRIVIAL_LINES: usize = 3;

    /// Names containing any of these substrings are never admitted
    pub const DEFAULT_BLACKLIST: &[&str] = &[
        "test_",
        "Test_",
        "_test",
        "toString",
        "constructor",
        "Constructor",
    ];

    /// Normalized edit distance at or below which a comment restates the identifier
    pub const IDENTIFIER_SIMILARITY_THRESHOLD: f64 = 0.4;
}
