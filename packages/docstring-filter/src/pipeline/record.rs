//! Owned extraction results

use serde::{Deserialize, Serialize};
use tree_sitter::Node;

use crate::features::admissibility::check_node_error;
use crate::shared::models::Span;
use crate::shared::ports::FunctionNode;
use crate::shared::utils::tree_sitter::{
    declared_name, extract_docstring, extract_node_text, leading_comment, node_to_span,
};

/// One function and its raw docstring, detached from any syntax tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionRecord {
    pub identifier: String,
    /// 1-indexed lines
    pub span: Span,
    /// Whether the function's subtree contained a parse error
    pub has_error: bool,
    /// Raw comment text, delimiters included
    pub docstring: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl FunctionRecord {
    pub fn new(identifier: impl Into<String>, span: Span, docstring: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            span,
            has_error: false,
            docstring: docstring.into(),
            code: None,
        }
    }

    pub fn with_error(mut self, has_error: bool) -> Self {
        self.has_error = has_error;
        self
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Build from any parsed function node
    pub fn from_function_node<N: FunctionNode>(
        node: &N,
        identifier: impl Into<String>,
        docstring: impl Into<String>,
    ) -> Self {
        let span = Span::lines(node.start_line() as u32 + 1, node.end_line() as u32 + 1);
        Self::new(identifier, span, docstring).with_error(check_node_error(node))
    }

    /// Extract from a tree-sitter function node.
    ///
    /// The docstring is the body's leading string literal (Python) or else
    /// the comment right before the definition. Returns `None` for anonymous
    /// functions and functions without either.
    pub fn from_node(node: &Node, source: &str) -> Option<Self> {
        let identifier = declared_name(node, source)?;
        let docstring = extract_docstring(node, source).or_else(|| leading_comment(node, source))?;

        let mut record = Self::from_function_node(node, identifier, docstring)
            .with_code(extract_node_text(node, source));
        record.span = node_to_span(node);
        Some(record)
    }

    /// Line breaks spanned by the function
    pub fn line_span(&self) -> usize {
        self.span.line_delta() as usize
    }
}
