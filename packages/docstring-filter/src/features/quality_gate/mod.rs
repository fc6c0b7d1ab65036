//! Quality Gate
//!
//! Runs a rule set against one line and reports every rule that fired.

mod gate;

pub use gate::{check_docstring, GateOutcome, QualityGate, RuleHit};
