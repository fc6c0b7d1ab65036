//! Tree-sitter Adapter
//!
//! Implements the [`FunctionNode`] port for `tree_sitter::Node` and provides
//! the few extraction helpers callers need to feed the filter: locating
//! function nodes, reading their declared name, and pulling the raw comment
//! attached to them.

use tree_sitter::{Language, Node, Parser, Tree};

use crate::shared::models::{FilterError, Result, Span};
use crate::shared::ports::{collect_descendants_of_kind, FunctionNode};

impl<'tree> FunctionNode for Node<'tree> {
    fn kind(&self) -> &str {
        Node::kind(self)
    }

    fn children(&self) -> Vec<Self> {
        (0..self.child_count())
            .filter_map(|i| self.child(i))
            .collect()
    }

    fn start_line(&self) -> usize {
        self.start_position().row
    }

    fn end_line(&self) -> usize {
        self.end_position().row
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Parsing
// ═══════════════════════════════════════════════════════════════════════════

/// Parse `source` with the given grammar
pub fn parse_source(language: &Language, source: &str) -> Result<Tree> {
    let mut parser = Parser::new();
    parser
        .set_language(language)
        .map_err(|e| FilterError::parse(format!("Failed to set language: {}", e)))?;

    parser
        .parse(source, None)
        .ok_or_else(|| FilterError::parse("Failed to parse content"))
}

// ═══════════════════════════════════════════════════════════════════════════
// Node Traversal Utilities
// ═══════════════════════════════════════════════════════════════════════════

/// Find a direct child node by kind
#[inline]
pub fn find_child_by_kind<'a>(node: &Node<'a>, kind: &str) -> Option<Node<'a>> {
    (0..node.child_count())
        .filter_map(|i| node.child(i))
        .find(|child| child.kind() == kind)
}

/// All function-like nodes under `root`, in source order
pub fn find_function_nodes<'a>(root: Node<'a>, kinds: &[&str]) -> Vec<Node<'a>> {
    collect_descendants_of_kind(&root, kinds)
}

// ═══════════════════════════════════════════════════════════════════════════
// Text Extraction Utilities
// ═══════════════════════════════════════════════════════════════════════════

/// Extract text content from a node
#[inline]
pub fn extract_node_text<'s>(node: &Node, source: &'s str) -> &'s str {
    &source[node.start_byte()..node.end_byte()]
}

/// Declared name of a definition (the grammar's `name` field)
pub fn declared_name(node: &Node, source: &str) -> Option<String> {
    node.child_by_field_name("name")
        .map(|name| extract_node_text(&name, source).to_string())
}

/// Convert tree-sitter node to Span (1-indexed lines)
#[inline]
pub fn node_to_span(node: &Node) -> Span {
    let start_pos = node.start_position();
    let end_pos = node.end_position();

    Span::new(
        start_pos.row as u32 + 1,
        start_pos.column as u32,
        end_pos.row as u32 + 1,
        end_pos.column as u32,
    )
}

/// Comment immediately preceding a definition (Java/C-like doc comments)
pub fn leading_comment(node: &Node, source: &str) -> Option<String> {
    let prev = node.prev_named_sibling()?;
    match prev.kind() {
        "comment" | "block_comment" | "line_comment" => {
            Some(extract_node_text(&prev, source).to_string())
        }
        _ => None,
    }
}

/// Python docstring: first string literal of a function body, quotes removed
pub fn extract_docstring(function_node: &Node, source: &str) -> Option<String> {
    let block = function_node
        .child_by_field_name("body")
        .or_else(|| find_child_by_kind(function_node, "block"))?;

    let stmt = block.named_child(0)?;
    if stmt.kind() != "expression_statement" {
        return None;
    }
    let string_node = stmt.named_child(0)?;
    if string_node.kind() != "string" {
        return None;
    }

    let raw = extract_node_text(&string_node, source);
    let trimmed = raw
        .trim_start_matches("\"\"\"")
        .trim_end_matches("\"\"\"")
        .trim_start_matches("'''")
        .trim_end_matches("'''")
        .trim_start_matches('"')
        .trim_end_matches('"')
        .trim_start_matches('\'')
        .trim_end_matches('\'');
    Some(trimmed.to_string())
}
