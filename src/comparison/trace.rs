//----------------------------------------
// Formula trace
//----------------------------------------
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One labeled intermediate value along with the formula that produced it,
/// numbers substituted in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceStep {
    pub label: String,
    pub expression: String,
    pub value: f64,
}

/// Six decimals for magnitudes in [0.1, 1e6), scientific notation otherwise,
/// so every rendered step keeps at least six significant digits
pub(crate) fn fmt_value(value: f64) -> String {
    let magnitude = value.abs();
    if value == 0.0 || !value.is_finite() || (1e-1..1e6).contains(&magnitude) {
        format!("{value:.6}")
    } else {
        format!("{value:.6e}")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormulaTrace {
    steps: Vec<TraceStep>,
}

impl FormulaTrace {
    pub fn new() -> FormulaTrace {
        FormulaTrace::default()
    }

    pub(crate) fn push(&mut self, label: &str, expression: String, value: f64) {
        self.steps.push(TraceStep {
            label: label.to_string(),
            expression,
            value,
        });
    }

    pub fn steps(&self) -> &[TraceStep] {
        &self.steps
    }

    pub fn labels(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.label.as_str()).collect()
    }

    /// Value of the first step with the given label
    pub fn value(&self, label: &str) -> Option<f64> {
        self.steps
            .iter()
            .find(|s| s.label == label)
            .map(|s| s.value)
    }

    pub fn lines(&self) -> Vec<String> {
        self.steps
            .iter()
            .map(|s| format!("{} = {} = {}", s.label, s.expression, fmt_value(s.value)))
            .collect()
    }
}

impl fmt::Display for FormulaTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines().iter().join("\n"))
    }
}
