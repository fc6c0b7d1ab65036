//! Compiled patterns shared by the rule predicates

use once_cell::sync::Lazy;
use regex::Regex;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid noise pattern {pattern:?}: {e}"))
}

pub(super) static ASCII_LETTER: Lazy<Regex> = Lazy::new(|| compile(r"[a-zA-Z]"));

pub(super) static INTERROGATIVE_START: Lazy<Regex> =
    Lazy::new(|| compile(r"(?i)^(?:why\b|how\b|what'?s?\b|where\b|is\b|are\b)"));

// Placeholder text left behind by IDE templates and unfinished docs
pub(super) static STUB_DESCRIPTION: Lazy<Regex> = Lazy::new(|| {
    compile(
        r"(?i)^(?:Description of the Method|NOT YET DOCUMENTED|Missing[\s\S]+Description|not in use|Insert the method's description here|No implementation provided|\(non-Javadoc\))",
    )
});

pub(super) static WORK_MARKER_START: Lazy<Regex> =
    Lazy::new(|| compile(r"(?i)^(?:todo|deprecate|copyright|fixme)"));

/// `Note:`, `Returns:`, `Args(foo_bar):`
pub(super) static LABEL_START: Lazy<Regex> =
    Lazy::new(|| compile(r"^[A-Za-z]+(?:\([A-Za-z_]+\))?:"));

pub(super) static SHOUTED_LINE: Lazy<Regex> = Lazy::new(|| compile(r"^[A-Z ]+$"));

pub(super) static ENCLOSED_LINE: Lazy<Regex> =
    Lazy::new(|| compile(r"^(?:\(.+\)|\[.+\]|\{.+\})$"));

pub(super) static GENERATED_TAG: Lazy<Regex> =
    Lazy::new(|| compile(r"(?i)@[a-zA-Z]*generated\b"));

pub(super) static GENERATED_PREAMBLE: Lazy<Regex> = Lazy::new(|| {
    compile(r"(?i)^(?:auto[-\s]generated|This method initializes|This method was generated by)")
});

pub(super) static SNAKE_CASE: Lazy<Regex> = Lazy::new(|| compile(r"\w+_\w+"));

pub(super) static CAMEL_CASE: Lazy<Regex> = Lazy::new(|| {
    compile(r"[A-Z](?:[A-Z0-9]*[a-z][a-z0-9]*[A-Z]|[a-z0-9]*[A-Z][A-Z0-9]*[a-z])[A-Za-z0-9]*")
});

pub(super) static UPPERCASE_WORD: Lazy<Regex> = Lazy::new(|| compile(r"[A-Z][A-Z0-9]+"));

// Runs of non-punctuation, or runs of a single punctuation class
pub(super) static DOCSTRING_TOKEN: Lazy<Regex> = Lazy::new(|| {
    compile(
        r#"[^\s,'"`.():\[\]=*;>{}+\-/\\]+|\\+|\.+|\(\)|\{\}|\[\]|\(+|\)+|:+|\[+|\]+|\{+|\}+|=+|\*+|;+|>+|\++|-+|/+"#,
    )
});
