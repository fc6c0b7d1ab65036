//! Noise rules and rule sets
//!
//! Each [`NoiseRule`] pairs a stable diagnostic tag with its predicate. A
//! [`RuleSet`] is the ordered list the quality gate evaluates; order only
//! affects the order of diagnostics, never the verdict.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::predicates;

/// One noise-detection heuristic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoiseRule {
    /// Non-ASCII text or no letters at all
    Literal,
    /// Questions (`?` suffix, interrogative opener)
    Question,
    /// Stubs, TODO/FIXME, `Label:` lines, shouted or bracketed lines
    UnderDevelopment,
    /// Generator tags and IDE boilerplate
    Autogenerated,
    /// Fewer than 70% letters among non-whitespace characters
    LittleSingleChar,
    /// Too many snake_case / camelCase identifiers
    ManySpecialCase,
    /// One character dominating a long line
    ManyRepeatedChar,
    /// Too many all-caps words
    ManyUppercaseWord,
    /// A fragment longer than 30 characters
    ManyLongWord,
    /// Token count outside 4..=255 (off by default)
    Length,
    /// Punctuation-heavy text (off by default)
    ManySpecialChar,
}

impl NoiseRule {
    /// The active battery, in evaluation order
    pub const DEFAULT_ACTIVE: [NoiseRule; 9] = [
        NoiseRule::Literal,
        NoiseRule::Question,
        NoiseRule::UnderDevelopment,
        NoiseRule::Autogenerated,
        NoiseRule::LittleSingleChar,
        NoiseRule::ManySpecialCase,
        NoiseRule::ManyRepeatedChar,
        NoiseRule::ManyUppercaseWord,
        NoiseRule::ManyLongWord,
    ];

    /// Every rule, default-off ones included
    pub const ALL: [NoiseRule; 11] = [
        NoiseRule::Length,
        NoiseRule::Literal,
        NoiseRule::Question,
        NoiseRule::UnderDevelopment,
        NoiseRule::Autogenerated,
        NoiseRule::LittleSingleChar,
        NoiseRule::ManySpecialChar,
        NoiseRule::ManySpecialCase,
        NoiseRule::ManyRepeatedChar,
        NoiseRule::ManyUppercaseWord,
        NoiseRule::ManyLongWord,
    ];

    /// Diagnostic tag
    pub fn tag(&self) -> &'static str {
        match self {
            NoiseRule::Literal => "literal",
            NoiseRule::Question => "question",
            NoiseRule::UnderDevelopment => "under_development",
            NoiseRule::Autogenerated => "autogenerated",
            NoiseRule::LittleSingleChar => "little_single_char",
            NoiseRule::ManySpecialCase => "many_special_case",
            NoiseRule::ManyRepeatedChar => "many_repeated_char",
            NoiseRule::ManyUppercaseWord => "many_uppercase_word",
            NoiseRule::ManyLongWord => "many_long_word",
            NoiseRule::Length => "length",
            NoiseRule::ManySpecialChar => "many_special_char",
        }
    }

    /// Whether `line` is noise under this rule
    pub fn is_noise(&self, line: &str) -> bool {
        match self {
            NoiseRule::Literal => predicates::is_literal(line),
            NoiseRule::Question => predicates::is_question(line),
            NoiseRule::UnderDevelopment => predicates::is_under_development(line),
            NoiseRule::Autogenerated => predicates::is_autogenerated(line),
            NoiseRule::LittleSingleChar => predicates::has_little_single_char(line),
            NoiseRule::ManySpecialCase => predicates::has_many_special_case(line),
            NoiseRule::ManyRepeatedChar => predicates::has_many_repeated_char(line),
            NoiseRule::ManyUppercaseWord => predicates::has_many_uppercase_word(line),
            NoiseRule::ManyLongWord => predicates::has_many_long_word(line),
            NoiseRule::Length => predicates::is_out_of_length_bounds(line),
            NoiseRule::ManySpecialChar => predicates::has_many_special_char(line),
        }
    }

    pub fn is_default_active(&self) -> bool {
        Self::DEFAULT_ACTIVE.contains(self)
    }
}

impl fmt::Display for NoiseRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Ordered, duplicate-free list of rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<NoiseRule>", into = "Vec<NoiseRule>")]
pub struct RuleSet {
    rules: Vec<NoiseRule>,
}

impl RuleSet {
    /// Build from any sequence; later duplicates are dropped
    pub fn from_rules(rules: impl IntoIterator<Item = NoiseRule>) -> Self {
        let mut set = Self { rules: Vec::new() };
        for rule in rules {
            set.push(rule);
        }
        set
    }

    /// All eleven rules
    pub fn all() -> Self {
        Self::from_rules(NoiseRule::ALL)
    }

    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Enable a rule (appended if not present)
    pub fn with(mut self, rule: NoiseRule) -> Self {
        self.push(rule);
        self
    }

    /// Disable a rule
    pub fn without(mut self, rule: NoiseRule) -> Self {
        self.rules.retain(|r| *r != rule);
        self
    }

    fn push(&mut self, rule: NoiseRule) {
        if !self.rules.contains(&rule) {
            self.rules.push(rule);
        }
    }

    pub fn contains(&self, rule: NoiseRule) -> bool {
        self.rules.contains(&rule)
    }

    pub fn iter(&self) -> impl Iterator<Item = NoiseRule> + '_ {
        self.rules.iter().copied()
    }

    pub fn as_slice(&self) -> &[NoiseRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::from_rules(NoiseRule::DEFAULT_ACTIVE)
    }
}

impl From<Vec<NoiseRule>> for RuleSet {
    fn from(rules: Vec<NoiseRule>) -> Self {
        Self::from_rules(rules)
    }
}

impl From<RuleSet> for Vec<NoiseRule> {
    fn from(set: RuleSet) -> Self {
        set.rules
    }
}
