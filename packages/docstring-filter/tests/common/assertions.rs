//! Custom assertions for test verification

use docstring_filter::{CleanOutcome, NoiseRule, PipelineOutput};

/// Assert that the cleaner accepted the docstring with exactly `expected`
pub fn assert_cleaned(outcome: &CleanOutcome, expected: &str) {
    assert_eq!(
        outcome.docstring.as_deref(),
        Some(expected),
        "Expected accepted docstring, fired: {:?}",
        outcome.fired
    );
}

/// Assert that the cleaner rejected the docstring and `rule` fired on the
/// last line
pub fn assert_rejected_by(outcome: &CleanOutcome, rule: NoiseRule) {
    assert!(
        outcome.docstring.is_none(),
        "Expected rejection, got: {:?}",
        outcome.docstring
    );
    assert!(
        outcome.fired.iter().any(|hit| hit.rule == rule),
        "Expected {rule} to fire, got: {:?}",
        outcome.fired
    );
}

/// Identifiers that survived the pipeline, in input order
pub fn kept_identifiers(output: &PipelineOutput) -> Vec<&str> {
    output.kept().map(|(identifier, _)| identifier).collect()
}
