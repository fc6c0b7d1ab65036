//! Pipeline result types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::features::admissibility::{Admission, RejectReason};
use crate::features::cleaning::CleanOutcome;

/// Verdict for one record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordResult {
    pub identifier: String,
    pub admission: Admission,
    /// `None` when the function was not admissible
    pub cleaned: Option<CleanOutcome>,
    /// The cleaned docstring only restates the identifier
    #[serde(default)]
    pub restates_identifier: bool,
}

impl RecordResult {
    /// The docstring that survived every stage
    pub fn docstring(&self) -> Option<&str> {
        if self.restates_identifier {
            return None;
        }
        self.cleaned
            .as_ref()
            .and_then(|outcome| outcome.docstring.as_deref())
    }

    pub fn is_kept(&self) -> bool {
        self.docstring().is_some()
    }
}

/// Batch counters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterStats {
    pub total: usize,
    pub accepted: usize,

    // Inadmissible functions
    pub error_nodes: usize,
    pub blacklisted: usize,
    pub trivial_bodies: usize,

    /// Admissible functions whose docstring the cleaner rejected
    pub rejected_docstrings: usize,
    /// Accepted docstrings dropped as identifier restatements
    pub restated: usize,

    /// Rule tag → number of docstrings it truncated
    pub truncations: BTreeMap<String, usize>,
}

impl FilterStats {
    pub fn record(&mut self, result: &RecordResult) {
        self.total += 1;

        match result.admission {
            Admission::Rejected(RejectReason::ErrorNode) => self.error_nodes += 1,
            Admission::Rejected(RejectReason::Blacklisted) => self.blacklisted += 1,
            Admission::Rejected(RejectReason::TrivialBody) => self.trivial_bodies += 1,
            Admission::Accepted => {}
        }

        if let Some(outcome) = &result.cleaned {
            for hit in &outcome.fired {
                *self.truncations.entry(hit.rule.tag().to_string()).or_insert(0) += 1;
            }
            if !outcome.is_accepted() {
                self.rejected_docstrings += 1;
            } else if result.restates_identifier {
                self.restated += 1;
            }
        }

        if result.is_kept() {
            self.accepted += 1;
        }
    }

    pub fn inadmissible(&self) -> usize {
        self.error_nodes + self.blacklisted + self.trivial_bodies
    }

    /// Share of records kept, 0.0 for an empty batch
    pub fn acceptance_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.accepted as f64 / self.total as f64
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for FilterStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} kept ({} inadmissible, {} rejected, {} restated)",
            self.accepted,
            self.total,
            self.inadmissible(),
            self.rejected_docstrings,
            self.restated
        )
    }
}

/// Results in input order plus counters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineOutput {
    pub results: Vec<RecordResult>,
    pub stats: FilterStats,
}

impl PipelineOutput {
    /// (identifier, docstring) pairs that survived
    pub fn kept(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.results.iter().filter_map(|result| {
            result
                .docstring()
                .map(|docstring| (result.identifier.as_str(), docstring))
        })
    }
}
