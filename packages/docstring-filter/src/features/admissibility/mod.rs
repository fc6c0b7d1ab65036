//! Function Admissibility
//!
//! Decides whether a (function, docstring) pair is worth cleaning at all:
//! parse errors, blacklisted names and trivial bodies are rejected before any
//! text rule runs. The identifier-restatement check compares a docstring
//! against the function name it documents.

mod checks;
mod domain;
mod similarity;

pub use checks::{
    check_black_node, check_function, check_function_empty, check_node_error,
    AdmissibilityFilter,
};
pub use domain::{Admission, RejectReason};
pub use similarity::{check_autogenerated_by_identifier, levenshtein_distance};
