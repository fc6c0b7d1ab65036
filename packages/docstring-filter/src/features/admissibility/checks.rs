//! Function-level checks

use super::domain::{Admission, RejectReason};
use super::similarity::restates_identifier;
use crate::config::FilterConfig;
use crate::shared::constants::admissibility::{DEFAULT_BLACKLIST, ERROR_KIND, MAX_TRIVIAL_LINES};
use crate::shared::ports::{has_descendant_of_kind, FunctionNode};

/// Whether the subtree (node included) contains a parse error
pub fn check_node_error<N: FunctionNode>(node: &N) -> bool {
    has_descendant_of_kind(node, ERROR_KIND)
}

/// Whether a function name is excluded from the corpus.
///
/// Dunder methods, `set`/`get` accessors and any name containing a
/// blacklisted fragment (built-in or `extra`) are excluded.
pub fn check_black_node(name: &str, extra: &[String]) -> bool {
    if name.starts_with("__") && name.ends_with("__") {
        return true;
    }
    if name.starts_with("set") || name.starts_with("get") {
        return true;
    }
    DEFAULT_BLACKLIST.iter().any(|keyword| name.contains(keyword))
        || extra.iter().any(|keyword| name.contains(keyword.as_str()))
}

/// Whether the function body is too short to be worth documenting
pub fn check_function_empty<N: FunctionNode>(node: &N) -> bool {
    node.line_span() <= MAX_TRIVIAL_LINES
}

/// Run every check with the built-in limits.
///
/// Order: parse error, then name, then body size.
pub fn check_function<N: FunctionNode>(node: &N, name: &str, extra: &[String]) -> Admission {
    AdmissibilityFilter {
        extra_blacklist: extra.to_vec(),
        ..AdmissibilityFilter::default()
    }
    .check(node, name)
}

/// Configured function filter
#[derive(Debug, Clone, PartialEq)]
pub struct AdmissibilityFilter {
    pub extra_blacklist: Vec<String>,
    pub max_trivial_lines: usize,
    pub check_identifier_similarity: bool,
    pub similarity_threshold: f64,
}

impl AdmissibilityFilter {
    pub fn new(config: &FilterConfig) -> Self {
        Self {
            extra_blacklist: config.extra_blacklist.clone(),
            max_trivial_lines: config.max_trivial_lines,
            check_identifier_similarity: config.check_identifier_similarity,
            similarity_threshold: config.similarity_threshold,
        }
    }

    /// Check a parsed function node
    pub fn check<N: FunctionNode>(&self, node: &N, name: &str) -> Admission {
        self.admit(name, check_node_error(node), node.line_span())
    }

    /// Check already-extracted facts about a function
    pub fn admit(&self, name: &str, has_error: bool, line_span: usize) -> Admission {
        let verdict = if has_error {
            Admission::Rejected(RejectReason::ErrorNode)
        } else if check_black_node(name, &self.extra_blacklist) {
            Admission::Rejected(RejectReason::Blacklisted)
        } else if line_span <= self.max_trivial_lines {
            Admission::Rejected(RejectReason::TrivialBody)
        } else {
            Admission::Accepted
        };

        if let Admission::Rejected(reason) = verdict {
            tracing::debug!(name, %reason, "function rejected");
        }
        verdict
    }

    /// Whether `docstring` restates `identifier`; always false when the
    /// check is disabled
    pub fn restates_identifier(&self, identifier: &str, docstring: &str) -> bool {
        self.check_identifier_similarity
            && restates_identifier(identifier, docstring, self.similarity_threshold)
    }
}

impl Default for AdmissibilityFilter {
    fn default() -> Self {
        Self::new(&FilterConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::models::{Span, SyntaxNode};

    fn function(start: u32, end: u32) -> SyntaxNode {
        SyntaxNode::new("function_definition", Span::lines(start, end)).with_children(vec![
            SyntaxNode::new("identifier", Span::lines(start, start)),
            SyntaxNode::new("block", Span::lines(start, end)),
        ])
    }

    #[test]
    fn test_dunder_always_rejected() {
        let node = function(1, 20);
        assert!(check_black_node("__init__", &[]));
        assert_eq!(
            check_function(&&node, "__init__", &[]),
            Admission::Rejected(RejectReason::Blacklisted)
        );
    }

    #[test]
    fn test_blacklist_fragments() {
        assert!(check_black_node("getValue", &[]));
        assert!(check_black_node("settings", &[]));
        assert!(check_black_node("test_parse", &[]));
        assert!(check_black_node("parse_test", &[]));
        assert!(check_black_node("toString", &[]));
        assert!(check_black_node("MockServer", &["Mock".to_string()]));
        assert!(!check_black_node("computeTotal", &[]));
        assert!(!check_black_node("_private", &[]));
    }

    #[test]
    fn test_trivial_body() {
        let one_line = function(1, 1);
        let four_lines = function(1, 4);
        let five_lines = function(1, 5);
        assert!(check_function_empty(&&one_line));
        assert!(check_function_empty(&&four_lines));
        assert!(!check_function_empty(&&five_lines));
    }

    #[test]
    fn test_compute_total() {
        assert_eq!(
            check_function(&&function(1, 1), "computeTotal", &[]),
            Admission::Rejected(RejectReason::TrivialBody)
        );
        assert_eq!(
            check_function(&&function(1, 5), "computeTotal", &[]),
            Admission::Accepted
        );
    }

    #[test]
    fn test_error_node_checked_first() {
        let node = SyntaxNode::new("function_definition", Span::lines(1, 1))
            .with_children(vec![SyntaxNode::new("ERROR", Span::lines(1, 1))]);
        assert!(check_node_error(&&node));
        assert_eq!(
            check_function(&&node, "__init__", &[]),
            Admission::Rejected(RejectReason::ErrorNode)
        );
    }

    #[test]
    fn test_configured_filter() {
        let config = FilterConfig::default().with_extra_blacklist(["Legacy"]);
        let filter = AdmissibilityFilter::new(&config);
        assert_eq!(
            filter.admit("LegacyAdapter", false, 10),
            Admission::Rejected(RejectReason::Blacklisted)
        );
        assert!(filter.admit("compute", false, 10).is_accepted());
        assert!(!filter.restates_identifier("getUserName", "Get user name"));

        let strict = AdmissibilityFilter::new(&FilterConfig::preset(crate::Preset::Strict));
        assert!(strict.restates_identifier("getUserName", "Get user name"));
    }
}
