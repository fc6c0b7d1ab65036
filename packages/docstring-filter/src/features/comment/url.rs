//! URL and special-character scrubbing

use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

static URL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"http\S+").expect("valid url pattern"));

static SPECIAL_CHAR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z0-9\\_.,]").expect("valid special character pattern"));

/// Replace every `http...` token (e.g. `https://google.com`) by `replacement`
pub fn remove_url(text: &str, replacement: &str) -> String {
    URL_PATTERN
        .replace_all(text, NoExpand(replacement))
        .into_owned()
}

/// Replace everything except letters, digits, `\`, `_`, `.` and `,` by a space
pub fn remove_special_character(text: &str) -> String {
    SPECIAL_CHAR_PATTERN.replace_all(text, " ").into_owned()
}
