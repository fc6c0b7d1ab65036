//! Identifier restatement detection
//!
//! Generated documentation often just spells out the function name
//! (`getUserName` / "Get user name."). Both sides are normalized to
//! lowercase space-separated words and compared by edit distance.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::features::identifier::split_identifier_into_parts;
use crate::shared::constants::admissibility::IDENTIFIER_SIMILARITY_THRESHOLD;

static NON_ALPHANUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z0-9]").expect("valid non-alphanumeric pattern"));

/// Levenshtein distance over chars (two-row Wagner-Fischer)
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();

    let len1 = s1_chars.len();
    let len2 = s2_chars.len();

    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row: Vec<usize> = vec![0; len2 + 1];

    for i in 1..=len1 {
        curr_row[0] = i;

        for j in 1..=len2 {
            let cost = usize::from(s1_chars[i - 1] != s2_chars[j - 1]);
            curr_row[j] = (curr_row[j - 1] + 1)
                .min(prev_row[j] + 1)
                .min(prev_row[j - 1] + cost);
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len2]
}

/// Whether `comment` restates `identifier` within `threshold` (fraction of
/// the longer normalized length)
pub(crate) fn restates_identifier(identifier: &str, comment: &str, threshold: f64) -> bool {
    let name = split_identifier_into_parts(identifier)
        .join(" ")
        .to_lowercase();
    let comment = NON_ALPHANUMERIC.replace_all(comment, " ").to_lowercase();

    let distance = levenshtein_distance(&name, &comment);
    let longest = name.chars().count().max(comment.chars().count());
    (distance as f64) <= (longest as f64) * threshold
}

/// Whether the docstring merely spells out the identifier
pub fn check_autogenerated_by_identifier(identifier: &str, comment: &str) -> bool {
    restates_identifier(identifier, comment, IDENTIFIER_SIMILARITY_THRESHOLD)
}
