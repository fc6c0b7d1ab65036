//! Shared models

mod error;
mod span;
mod syntax_node;

pub use error::{FilterError, Result};
pub use span::Span;
pub use syntax_node::SyntaxNode;
