//----------------------------------------
// comparison mod types
//----------------------------------------
use crate::comparison::trace::FormulaTrace;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Sufficient statistics of one group; `std_dev` is the sample (n - 1)
/// standard deviation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroupSummary {
    pub mean: f64,
    pub std_dev: f64,
    pub n: usize,
}

impl GroupSummary {
    pub fn new(mean: f64, std_dev: f64, n: usize) -> GroupSummary {
        GroupSummary { mean, std_dev, n }
    }

    pub fn variance(&self) -> f64 {
        self.std_dev * self.std_dev
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub label: String,
    pub summary: GroupSummary,
}

/// Long-format observations: one (group label, outcome) pair per row
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawSample {
    observations: Vec<(String, f64)>,
}

impl RawSample {
    pub fn from_pairs<I, S>(pairs: I) -> RawSample
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        RawSample {
            observations: pairs.into_iter().map(|(l, v)| (l.into(), v)).collect(),
        }
    }

    pub fn push(&mut self, label: impl Into<String>, value: f64) {
        self.observations.push((label.into(), value));
    }

    pub fn observations(&self) -> &[(String, f64)] {
        &self.observations
    }

    /// Values keyed by label, in order of first appearance; NaN (missing)
    /// outcomes are dropped
    pub fn grouped(&self) -> IndexMap<String, Vec<f64>> {
        let mut groups: IndexMap<String, Vec<f64>> = IndexMap::new();
        for (label, value) in &self.observations {
            let values = groups.entry(label.clone()).or_default();
            if !value.is_nan() {
                values.push(*value);
            }
        }
        groups
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ComparisonInput {
    RawSample(RawSample),
    SummaryStats(Vec<GroupSummary>),
}

#[derive(Debug, PartialEq, Eq, Copy, Clone, Serialize, Deserialize)]
pub enum ComparisonTest {
    WelchTTest,
    OneWayAnova,
}

impl ComparisonTest {
    pub fn name(&self) -> &'static str {
        match self {
            ComparisonTest::WelchTTest => "Welch's t-test",
            ComparisonTest::OneWayAnova => "One-way ANOVA",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DegreesOfFreedom {
    Welch(f64),
    Anova { between: usize, within: usize },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub test: ComparisonTest,
    pub groups: Vec<Group>,
    /// t for Welch, F for ANOVA
    pub statistic: f64,
    pub degrees_of_freedom: DegreesOfFreedom,
    pub p_value: f64,
    pub formula_trace: FormulaTrace,
}

impl ComparisonResult {
    pub fn is_significant(&self, alpha: f64) -> bool {
        self.p_value < alpha
    }
}
