//! Rule predicates
//!
//! Every function answers "is this line noise?" and is total over `&str`:
//! empty and whitespace-only input is handled explicitly, never by panicking.

use rustc_hash::FxHashMap;

use super::patterns::*;
use super::tokenizer::{count_tokens, is_token_separator, split_tokens, tokenize_docstring};
use crate::shared::constants::{rules, tokens};

fn compact_chars(line: &str) -> Vec<char> {
    line.chars().filter(|&c| !is_token_separator(c)).collect()
}

/// Non-ASCII text, or text without a single ASCII letter
pub fn is_literal(line: &str) -> bool {
    !line.is_ascii() || !ASCII_LETTER.is_match(line)
}

/// A question rather than a description
pub fn is_question(line: &str) -> bool {
    line.ends_with('?') || INTERROGATIVE_START.is_match(line)
}

/// Stub text, work markers, `Label:` lines, shouted lines, bracketed lines
pub fn is_under_development(line: &str) -> bool {
    STUB_DESCRIPTION.is_match(line)
        || WORK_MARKER_START.is_match(line)
        || LABEL_START.is_match(line)
        || SHOUTED_LINE.is_match(line)
        || ENCLOSED_LINE.is_match(line)
}

/// Generator tags and IDE boilerplate
pub fn is_autogenerated(line: &str) -> bool {
    GENERATED_TAG.is_match(line) || GENERATED_PREAMBLE.is_match(line)
}

/// Too short, or too few letters among the non-whitespace characters
pub fn has_little_single_char(line: &str) -> bool {
    let chars = compact_chars(line);
    if chars.len() <= 1 {
        return true;
    }
    let letters = chars.iter().filter(|c| c.is_ascii_alphabetic()).count();
    (letters as f64) / (chars.len() as f64) < rules::MIN_ALPHABETIC_RATIO
}

/// Too many snake_case / camelCase identifiers per word
pub fn has_many_special_case(line: &str) -> bool {
    let words = count_tokens(line);
    if words == 0 {
        return true;
    }
    let snake = SNAKE_CASE.find_iter(line).count();
    let camel = CAMEL_CASE.find_iter(line).count();
    ((snake + camel) as f64) / (words as f64) > rules::MAX_SPECIAL_CASE_RATIO
}

/// A long line dominated by one character (`=====`, `*****`, `abababab`)
pub fn has_many_repeated_char(line: &str) -> bool {
    let chars = compact_chars(line);
    if chars.len() <= rules::REPEATED_CHAR_MIN_LENGTH {
        return false;
    }

    let mut counts: FxHashMap<char, usize> = FxHashMap::default();
    for &c in &chars {
        *counts.entry(c).or_insert(0) += 1;
    }
    let most_common = counts.values().copied().max().unwrap_or(0);
    (most_common as f64) / (chars.len() as f64) > rules::MAX_REPEATED_CHAR_RATIO
}

/// Too many all-caps words (date formats like `YYYY-MM-DD` excluded)
pub fn has_many_uppercase_word(line: &str) -> bool {
    let mut text = line.to_string();
    for pattern in rules::DATE_FORMAT_TOKENS {
        text = text.replace(pattern, &pattern.to_lowercase());
    }

    let words = count_tokens(&text);
    if words <= rules::UPPERCASE_MIN_TOKENS {
        return false;
    }
    let uppercase = UPPERCASE_WORD.find_iter(&text).count();
    (uppercase as f64) / (words as f64) > rules::MAX_UPPERCASE_RATIO
}

/// A word (or underscore-separated fragment) longer than any real word
pub fn has_many_long_word(line: &str) -> bool {
    let mut words = split_tokens(line).peekable();
    if words.peek().is_none() {
        return true;
    }
    words
        .flat_map(|word| word.split('_'))
        .map(|fragment| fragment.chars().count())
        .max()
        .is_some_and(|longest| longest > rules::MAX_WORD_LENGTH)
}

/// Token count outside `(min, max)`, both bounds exclusive
pub fn is_out_of_token_bounds(text: &str, min_exclusive: usize, max_exclusive: usize) -> bool {
    let count = count_tokens(text);
    count <= min_exclusive || count >= max_exclusive
}

/// Too short or too long to be a useful docstring
pub fn is_out_of_length_bounds(line: &str) -> bool {
    is_out_of_token_bounds(
        line,
        tokens::MIN_TOKENS_EXCLUSIVE,
        tokens::MAX_TOKENS_EXCLUSIVE,
    )
}

const SPECIAL_CHARS: &[char] = &[
    ',', '.', ';', ':', '\\', '/', '{', '}', '[', ']', '\'', '"', '-', '+', '=', '(', ')', '*',
    '<', '>', '~', '%',
];

/// Punctuation-heavy text (code fragments, signatures, tables)
pub fn has_many_special_char(line: &str) -> bool {
    if line.trim_matches(is_token_separator).is_empty() {
        return true;
    }
    let words = tokenize_docstring(line).len();
    if words == 0 {
        return true;
    }
    let count = line.chars().filter(|c| SPECIAL_CHARS.contains(c)).count();
    count > rules::SPECIAL_CHAR_MIN_COUNT
        && (count as f64) / (words as f64) > rules::MAX_SPECIAL_CHAR_RATIO
}
