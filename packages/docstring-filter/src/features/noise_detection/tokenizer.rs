//! Docstring tokenizer
//!
//! Splits text into word runs and punctuation runs:
//! `foo(a.b)` → `["foo", "(", "a", ".", "b", ")"]`.
//! Commas and quotes separate tokens but are not tokens themselves.
//!
//! Plain token counts split on [`is_token_separator`], which also treats the
//! ASCII information separators (U+001C..=U+001F) as whitespace.

use super::patterns::DOCSTRING_TOKEN;

/// Unicode whitespace plus U+001C..=U+001F
pub fn is_token_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Separator-delimited tokens; empty fragments are skipped
pub fn split_tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_token_separator).filter(|t| !t.is_empty())
}

pub fn count_tokens(text: &str) -> usize {
    split_tokens(text).count()
}

/// Tokenize docstring text into words and punctuation runs
pub fn tokenize_docstring(text: &str) -> Vec<&str> {
    DOCSTRING_TOKEN
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|t| !t.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_and_punctuation() {
        assert_eq!(
            tokenize_docstring("foo(a.b) == c"),
            vec!["foo", "(", "a", ".", "b", ")", "==", "c"]
        );
    }

    #[test]
    fn test_empty_parens_and_runs() {
        assert_eq!(tokenize_docstring("call() ..."), vec!["call", "()", "..."]);
        assert_eq!(tokenize_docstring("a::b"), vec!["a", "::", "b"]);
    }

    #[test]
    fn test_information_separators_split_tokens() {
        assert_eq!(count_tokens("alpha\u{1c}beta\u{1f}gamma delta"), 4);
        assert_eq!(
            split_tokens(" one\ttwo\u{1d}\u{1e} ").collect::<Vec<_>>(),
            vec!["one", "two"]
        );
        assert_eq!(count_tokens("\u{1c}\u{1f}"), 0);
        assert_eq!("alpha\u{1c}beta".split_whitespace().count(), 1);
    }

    #[test]
    fn test_commas_and_quotes_dropped() {
        assert_eq!(tokenize_docstring("'x', \"y\""), vec!["x", "y"]);
        assert!(tokenize_docstring("  ").is_empty());
    }
}
