//! Docstring cleaner
//!
//! Applies the truncation policy: lines are kept in order until the first
//! noisy one, which discards itself and everything after it. Passes repeat
//! until the output no longer changes.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::FilterConfig;
use crate::features::comment::{
    remove_comment_delimiters, remove_irrelevant_asides, remove_url, HtmlTagStripper,
    MarkupStripper, PassthroughStripper,
};
use crate::features::noise_detection::predicates::is_out_of_token_bounds;
use crate::features::noise_detection::{count_tokens, is_token_separator};
use crate::features::quality_gate::{QualityGate, RuleHit};
use crate::shared::constants::cleaning;

static DEFAULT_CLEANER: Lazy<DocstringCleaner> = Lazy::new(DocstringCleaner::default);

/// Result of cleaning one raw comment
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CleanOutcome {
    /// Accepted docstring, `None` when rejected
    pub docstring: Option<String>,
    /// Hits on the last evaluated line
    pub fired: Vec<RuleHit>,
}

impl CleanOutcome {
    pub fn is_accepted(&self) -> bool {
        self.docstring.is_some()
    }
}

/// Line-by-line docstring cleaner
pub struct DocstringCleaner {
    gate: QualityGate,
    stripper: Box<dyn MarkupStripper>,
    min_tokens: usize,
    max_tokens: usize,
    url_replacement: String,
}

impl DocstringCleaner {
    pub fn new(config: &FilterConfig) -> Self {
        let stripper: Box<dyn MarkupStripper> = if config.strip_markup {
            Box::new(HtmlTagStripper::new())
        } else {
            Box::new(PassthroughStripper)
        };
        Self {
            gate: QualityGate::new(config.rules.clone()),
            stripper,
            min_tokens: config.min_tokens,
            max_tokens: config.max_tokens,
            url_replacement: config.url_replacement.clone(),
        }
    }

    /// Replace the markup stripper
    pub fn with_stripper(mut self, stripper: impl MarkupStripper + 'static) -> Self {
        self.stripper = Box::new(stripper);
        self
    }

    pub fn gate(&self) -> &QualityGate {
        &self.gate
    }

    /// Clean one raw comment.
    ///
    /// Never fails: rejection is a `None` docstring. Cleaning repeats on its
    /// own output until that output is stable, so cleaning an accepted
    /// docstring again returns it unchanged. A docstring that is still
    /// changing after [`cleaning::MAX_PASSES`] passes is rejected.
    ///
    /// `fired` lists the hits of the last line the gate evaluated in the
    /// last pass that truncated, so it is non-empty only when a rule
    /// truncated the text.
    pub fn clean(&self, raw: &str) -> CleanOutcome {
        let mut outcome = self.clean_once(raw);
        for _ in 1..cleaning::MAX_PASSES {
            let current = match outcome.docstring.as_deref() {
                Some(current) => current,
                None => return outcome,
            };
            let next = self.clean_once(current);
            if next.docstring.as_deref() == Some(current) {
                return outcome;
            }
            outcome = CleanOutcome {
                docstring: next.docstring,
                fired: if next.fired.is_empty() {
                    outcome.fired
                } else {
                    next.fired
                },
            };
        }

        if outcome.docstring.is_some() {
            tracing::debug!(
                passes = cleaning::MAX_PASSES,
                "docstring rejected: cleaning did not settle"
            );
        }
        CleanOutcome {
            docstring: None,
            fired: outcome.fired,
        }
    }

    fn clean_once(&self, raw: &str) -> CleanOutcome {
        let lines = remove_comment_delimiters(raw);
        let text = remove_irrelevant_asides(&lines.join("\n"));

        let mut kept: Vec<String> = Vec::new();
        let mut fired = Vec::new();
        for line in text.trim_matches(is_token_separator).split('\n') {
            let visible = self.strip_markup(line);
            let outcome = self.gate.check(&visible);
            fired = outcome.fired;
            if outcome.is_noise {
                tracing::debug!(
                    rules = ?fired.iter().map(|hit| hit.rule.tag()).collect::<Vec<_>>(),
                    line = visible.as_str(),
                    kept = kept.len(),
                    "docstring truncated"
                );
                break;
            }

            let line = remove_url(&visible, &self.url_replacement);
            let line = line.trim_matches(is_token_separator);
            if !line.is_empty() {
                kept.push(line.to_string());
            }
        }

        let docstring = kept.join("\n").trim_matches(is_token_separator).to_string();
        if docstring.is_empty()
            || is_out_of_token_bounds(&docstring, self.min_tokens, self.max_tokens)
        {
            tracing::debug!(
                tokens = count_tokens(&docstring),
                min = self.min_tokens,
                max = self.max_tokens,
                "docstring rejected by length"
            );
            return CleanOutcome {
                docstring: None,
                fired,
            };
        }

        CleanOutcome {
            docstring: Some(docstring),
            fired,
        }
    }

    /// Strip until the line stops changing (`&amp;lt;b&amp;gt;` decodes to
    /// a tag only on the second pass)
    fn strip_markup(&self, line: &str) -> String {
        let mut current = self.stripper.strip(line);
        for _ in 1..cleaning::MAX_STRIP_PASSES {
            let next = self.stripper.strip(&current);
            if next == current {
                break;
            }
            current = next;
        }
        current
    }
}

impl Default for DocstringCleaner {
    fn default() -> Self {
        Self::new(&FilterConfig::default())
    }
}

impl fmt::Debug for DocstringCleaner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocstringCleaner")
            .field("gate", &self.gate)
            .field("min_tokens", &self.min_tokens)
            .field("max_tokens", &self.max_tokens)
            .field("url_replacement", &self.url_replacement)
            .finish_non_exhaustive()
    }
}

/// Clean with the default configuration
pub fn clean_docstring(raw: &str) -> CleanOutcome {
    DEFAULT_CLEANER.clean(raw)
}
