//! Ports (interfaces) to upstream collaborators

mod function_node;

pub use function_node::{collect_descendants_of_kind, has_descendant_of_kind, FunctionNode};
