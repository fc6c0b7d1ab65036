//! Shared module - Common types and utilities
//!
//! Types shared across all features. Only `utils::tree_sitter` touches an
//! external parser; everything else is plain data.

pub mod constants;
pub mod models;
pub mod ports;
pub mod utils;

// Re-exports for convenience
pub use models::*;
pub use ports::FunctionNode;
