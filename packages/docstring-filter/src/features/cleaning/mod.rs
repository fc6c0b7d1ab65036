//! Docstring cleaning
//!
//! Turns a raw comment into an accepted docstring, or rejects it:
//!
//! ```text
//! raw ─▶ delimiters ─▶ asides ─▶ per line: markup ─▶ gate ─▶ url ─▶ keep
//!                                              │
//!                                              └─ noise: drop the rest
//! ```
//!
//! The kept text must then fall inside the configured token window.

mod cleaner;

pub use cleaner::{clean_docstring, CleanOutcome, DocstringCleaner};
