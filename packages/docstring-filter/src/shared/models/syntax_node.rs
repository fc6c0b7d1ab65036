//! Owned, parser-neutral syntax node
//!
//! Lets callers hand the admissibility filter a function node that was
//! extracted elsewhere (or built by hand in tests) without keeping a
//! tree-sitter `Tree` alive.

use serde::{Deserialize, Serialize};

use super::Span;
use crate::shared::ports::FunctionNode;

/// Language-neutral syntax node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntaxNode {
    /// Raw grammar kind, kept verbatim
    pub kind: String,
    pub span: Span,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    pub fn new(kind: impl Into<String>, span: Span) -> Self {
        Self {
            kind: kind.into(),
            span,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<SyntaxNode>) -> Self {
        self.children = children;
        self
    }
}

impl<'a> FunctionNode for &'a SyntaxNode {
    fn kind(&self) -> &str {
        &self.kind
    }

    fn children(&self) -> Vec<Self> {
        let node: &'a SyntaxNode = *self;
        node.children.iter().collect()
    }

    // Span lines are 1-indexed; the port speaks zero-based rows.
    fn start_line(&self) -> usize {
        self.span.start_line.saturating_sub(1) as usize
    }

    fn end_line(&self) -> usize {
        self.span.end_line.saturating_sub(1) as usize
    }
}
