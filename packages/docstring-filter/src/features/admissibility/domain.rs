//! Admissibility verdicts

use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a function was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// The subtree contains an `ERROR` node
    ErrorNode,
    /// Dunder, accessor or blacklisted name
    Blacklisted,
    /// The body spans too few lines to be documented meaningfully
    TrivialBody,
}

impl RejectReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            RejectReason::ErrorNode => "error_node",
            RejectReason::Blacklisted => "blacklisted",
            RejectReason::TrivialBody => "trivial_body",
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verdict for one function
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum Admission {
    Accepted,
    Rejected(RejectReason),
}

impl Admission {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Admission::Accepted)
    }

    pub fn reason(&self) -> Option<RejectReason> {
        match self {
            Admission::Accepted => None,
            Admission::Rejected(reason) => Some(*reason),
        }
    }
}
