//! Identifier splitter
//!
//! Splits:
//! - `getUserName` → `["get", "user", "name"]`
//! - `get_user_name` → `["get", "user", "name"]`
//! - `HTTPServer` → `["http", "server"]`
//! - `utf8Decode` → `["utf", "8", "decode"]`
//! - `$scope.apply` → `["$", "scope", ".", "apply"]`
//!
//! Case boundaries are zero-width cuts between two characters; underscores
//! and whitespace are consumed as separators.

/// Marks that stick to neither side of an alphanumeric run
const DETACHED_MARKS: [char; 5] = ['@', '$', '.', '\'', '"'];

#[inline]
fn is_detached_mark(ch: char) -> bool {
    DETACHED_MARKS.contains(&ch)
}

#[inline]
fn is_separator(ch: char) -> bool {
    ch == '_' || ch.is_whitespace()
}

/// Whether a cut falls between `prev` and `cur` (`next` follows `cur`)
fn is_boundary(prev: char, cur: char, next: Option<char>) -> bool {
    // camelCase: "...aB..." / "...9B..."
    if (prev.is_ascii_lowercase() || prev.is_ascii_digit()) && cur.is_ascii_uppercase() {
        return true;
    }
    // Acronym followed by a word: "HTTPServer" → "HTTP|Server"
    if (prev.is_ascii_uppercase() || prev.is_ascii_digit())
        && cur.is_ascii_uppercase()
        && next.is_some_and(|n| n.is_ascii_lowercase())
    {
        return true;
    }
    // Digits against letters, both directions
    if (prev.is_ascii_digit() && cur.is_ascii_alphabetic())
        || (prev.is_ascii_alphabetic() && cur.is_ascii_digit())
    {
        return true;
    }
    (is_detached_mark(prev) && cur.is_ascii_alphanumeric())
        || (prev.is_ascii_alphanumeric() && is_detached_mark(cur))
}

fn flush(parts: &mut Vec<String>, current: &mut String) {
    if !current.is_empty() {
        parts.push(current.to_lowercase());
        current.clear();
    }
}

/// Split a single identifier into lowercase parts on snake_case and camelCase.
///
/// Never returns an empty vector: when nothing survives the split (e.g. `"__"`
/// or `""`) the original identifier is returned unchanged as the only part.
pub fn split_identifier_into_parts(identifier: &str) -> Vec<String> {
    let chars: Vec<char> = identifier.chars().collect();
    let mut parts = Vec::new();
    let mut current = String::new();

    for (i, &ch) in chars.iter().enumerate() {
        if is_separator(ch) {
            flush(&mut parts, &mut current);
            continue;
        }
        if i > 0 && is_boundary(chars[i - 1], ch, chars.get(i + 1).copied()) {
            flush(&mut parts, &mut current);
        }
        current.push(ch);
    }
    flush(&mut parts, &mut current);

    if parts.is_empty() {
        return vec![identifier.to_string()];
    }
    parts
}
