//! Line-level quality gate

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::features::noise_detection::{NoiseRule, RuleSet};

/// A rule that fired on a line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleHit {
    pub rule: NoiseRule,
    pub line: String,
}

impl fmt::Display for RuleHit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}> {}", self.rule.tag(), self.line)
    }
}

/// Verdict for one line
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GateOutcome {
    pub is_noise: bool,
    /// Every rule that fired, in rule-set order
    pub fired: Vec<RuleHit>,
}

impl GateOutcome {
    /// Tags of the fired rules
    pub fn tags(&self) -> Vec<&'static str> {
        self.fired.iter().map(|hit| hit.rule.tag()).collect()
    }

    pub fn fired_rule(&self, rule: NoiseRule) -> bool {
        self.fired.iter().any(|hit| hit.rule == rule)
    }
}

/// Evaluates a [`RuleSet`] against single lines
#[derive(Debug, Clone, Default)]
pub struct QualityGate {
    rules: RuleSet,
}

impl QualityGate {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Check one line.
    ///
    /// An empty line is noise with no hits. Otherwise every rule runs (no
    /// short circuit) so the diagnostics list all of them.
    pub fn check(&self, line: &str) -> GateOutcome {
        if line.is_empty() {
            return GateOutcome {
                is_noise: true,
                fired: Vec::new(),
            };
        }

        let mut outcome = GateOutcome::default();
        for rule in self.rules.iter() {
            if rule.is_noise(line) {
                tracing::trace!(rule = rule.tag(), line, "noise rule fired");
                outcome.is_noise = true;
                outcome.fired.push(RuleHit {
                    rule,
                    line: line.to_string(),
                });
            }
        }
        outcome
    }
}

/// Check one line against the default rule set
pub fn check_docstring(line: &str) -> GateOutcome {
    QualityGate::default().check(line)
}
