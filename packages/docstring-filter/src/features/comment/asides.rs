//! Parenthetical aside removal
//!
//! `(e.g. ...)`, `(i.e. ...)`, `(eg ...)` and `(ie ...)` asides carry examples
//! rather than a description of the function, so they are dropped before the
//! text is split into lines. Line breaks inside an aside do not stop the match.

use once_cell::sync::Lazy;
use regex::Regex;

static ASIDE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)\((?:i\.e|e\.g|\beg|\bie).*?\)").expect("valid aside pattern")
});

/// Remove every `(i.e. ...)` / `(e.g. ...)` style aside (shortest match)
pub fn remove_irrelevant_asides(text: &str) -> String {
    ASIDE_PATTERN.replace_all(text, "").into_owned()
}
