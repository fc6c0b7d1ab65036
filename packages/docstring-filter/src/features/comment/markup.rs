//! Markup-tag stripping
//!
//! The cleaner only needs "visible text of this line". [`MarkupStripper`] is
//! the port; [`HtmlTagStripper`] is a regex-free state machine covering the
//! tags and entities found in Javadoc/JSDoc comments.

/// Maps arbitrary text (possibly containing tags) to its visible text
pub trait MarkupStripper: Send + Sync {
    fn strip(&self, text: &str) -> String;
}

/// Leaves text untouched
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughStripper;

impl MarkupStripper for PassthroughStripper {
    fn strip(&self, text: &str) -> String {
        text.to_string()
    }
}

/// Drops `<tag ...>` sequences and decodes common HTML entities.
///
/// A `<` only opens a tag when followed by a letter, `/`, `!` or `?` and a
/// closing `>` exists; otherwise it is kept as text (`a < b`).
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlTagStripper;

impl HtmlTagStripper {
    pub fn new() -> Self {
        Self
    }
}

impl MarkupStripper for HtmlTagStripper {
    fn strip(&self, text: &str) -> String {
        strip_tags(text)
    }
}

const NAMED_ENTITIES: &[(&str, &str)] = &[
    ("&amp;", "&"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&apos;", "'"),
];

/// Longest numeric entity we try to decode (`&#x10FFFF;`)
const MAX_NUMERIC_ENTITY_LEN: usize = 10;

fn opens_tag(tail: &str) -> bool {
    tail[1..]
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || matches!(c, '/' | '!' | '?'))
}

/// Decode an entity at the start of `tail`; returns (text, bytes consumed)
fn decode_entity(tail: &str) -> Option<(String, usize)> {
    for (entity, decoded) in NAMED_ENTITIES {
        if tail.starts_with(entity) {
            return Some((decoded.to_string(), entity.len()));
        }
    }

    let body = tail.strip_prefix("&#")?;
    let end = body.find(';')?;
    if end == 0 || end > MAX_NUMERIC_ENTITY_LEN {
        return None;
    }
    let digits = &body[..end];
    let code_point = match digits.strip_prefix('x').or_else(|| digits.strip_prefix('X')) {
        Some(hex) => u32::from_str_radix(hex, 16).ok(),
        None => digits.parse::<u32>().ok(),
    };
    code_point
        .and_then(char::from_u32)
        .map(|c| (c.to_string(), end + 3))
}

fn strip_tags(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find(|c: char| c == '<' || c == '&') {
        result.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if tail.starts_with('<') {
            if opens_tag(tail) {
                if let Some(close) = tail.find('>') {
                    rest = &tail[close + 1..];
                    continue;
                }
            }
            result.push('<');
            rest = &tail[1..];
        } else {
            match decode_entity(tail) {
                Some((decoded, consumed)) => {
                    result.push_str(&decoded);
                    rest = &tail[consumed..];
                }
                None => {
                    result.push('&');
                    rest = &tail[1..];
                }
            }
        }
    }

    result.push_str(rest);
    result
}
