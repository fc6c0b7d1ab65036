//! Function node port
//!
//! The filter never owns a syntax tree. It only needs to walk a node's
//! subtree by kind and read its line span, so any parser can plug in by
//! implementing [`FunctionNode`] for its (cheap, copyable) node handle.

/// Read-only view of a parsed function node.
///
/// Implemented for `tree_sitter::Node` (see `shared::utils::tree_sitter`) and
/// for `&SyntaxNode`.
pub trait FunctionNode: Clone {
    /// Grammar-specific node kind (e.g. `"function_definition"`, `"ERROR"`)
    fn kind(&self) -> &str;

    /// Direct children in source order
    fn children(&self) -> Vec<Self>;

    /// Zero-based first line
    fn start_line(&self) -> usize;

    /// Zero-based last line
    fn end_line(&self) -> usize;

    /// Number of line breaks the node spans (end row minus start row)
    fn line_span(&self) -> usize {
        self.end_line().saturating_sub(self.start_line())
    }
}

/// Collect every node in the subtree (root included) whose kind is in `kinds`.
///
/// Depth-first, source order.
pub fn collect_descendants_of_kind<N: FunctionNode>(node: &N, kinds: &[&str]) -> Vec<N> {
    let mut result = Vec::new();
    let mut stack = vec![node.clone()];
    while let Some(current) = stack.pop() {
        if kinds.contains(&current.kind()) {
            result.push(current.clone());
        }
        for child in current.children().into_iter().rev() {
            stack.push(child);
        }
    }
    result
}

/// Whether any node in the subtree (root included) has the given kind
pub fn has_descendant_of_kind<N: FunctionNode>(node: &N, kind: &str) -> bool {
    let mut stack = vec![node.clone()];
    while let Some(current) = stack.pop() {
        if current.kind() == kind {
            return true;
        }
        stack.extend(current.children());
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::models::{Span, SyntaxNode};

    fn tree() -> SyntaxNode {
        SyntaxNode::new("function_definition", Span::new(1, 0, 6, 0)).with_children(vec![
            SyntaxNode::new("identifier", Span::new(1, 4, 1, 9)),
            SyntaxNode::new("block", Span::new(2, 4, 6, 0)).with_children(vec![
                SyntaxNode::new("ERROR", Span::new(3, 4, 3, 8)),
                SyntaxNode::new("return_statement", Span::new(5, 4, 5, 12)),
                SyntaxNode::new("ERROR", Span::new(6, 0, 6, 0)),
            ]),
        ])
    }

    #[test]
    fn test_collect_descendants_in_source_order() {
        let root = tree();
        let errors = collect_descendants_of_kind(&&root, &["ERROR"]);
        let lines: Vec<usize> = errors.iter().map(|n| n.start_line()).collect();
        assert_eq!(lines, vec![2, 5]);
    }

    #[test]
    fn test_root_is_included() {
        let root = tree();
        assert_eq!(
            collect_descendants_of_kind(&&root, &["function_definition"]).len(),
            1
        );
        assert!(has_descendant_of_kind(&&root, "function_definition"));
    }

    #[test]
    fn test_missing_kind() {
        let root = tree();
        assert!(!has_descendant_of_kind(&&root, "class_definition"));
        assert!(collect_descendants_of_kind(&&root, &["class_definition"]).is_empty());
    }

    #[test]
    fn test_line_span() {
        let root = tree();
        assert_eq!((&root).line_span(), 5);
    }
}
