//! Comment delimiter stripping
//!
//! Handles C-like (`//`, `/* */`, `/** */`), doc-style (`///`, `//!`, `/*!`)
//! and shell-like (`#`) comments uniformly, plus `====` / `----` banner borders.

use once_cell::sync::Lazy;
use regex::Regex;

/// Trailing close-border run, or leading open-marker run, of the whole comment
static BORDER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\s/*=-]+$|^[\s/*!=#-]+").expect("valid comment border pattern")
});

/// Block-comment continuation stars at the start of a line
static CONTINUATION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\s*]+").expect("valid continuation pattern"));

fn clean_line(line: &str) -> String {
    let line = line.trim().replace("&nbsp;", " ");
    CONTINUATION_PATTERN.replace(&line, "").trim().to_string()
}

/// Strip comment syntax from a raw (line or block) comment.
///
/// Returns the non-empty comment lines in their original order.
pub fn remove_comment_delimiters(comment: &str) -> Vec<String> {
    BORDER_PATTERN
        .replace_all(comment, "")
        .split('\n')
        .map(clean_line)
        .filter(|line| !line.is_empty())
        .collect()
}
