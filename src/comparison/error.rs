//----------------------------------------
// comparison errors
//----------------------------------------
use crate::distribution::error::DistributionErr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComparisonErr {
    #[error("invalid {name} for group `{group}`: {value} (expected {expected})")]
    InvalidParameter {
        group: String,
        name: &'static str,
        value: f64,
        expected: &'static str,
    },
    #[error("group `{0}` has zero standard deviation; comparison is undefined")]
    ZeroVariance(String),
    #[error("need at least two groups to compare; got {0}")]
    InsufficientGroups(usize),
    #[error("summary statistics support at most {max} groups; got {got}")]
    TooManyGroups { got: usize, max: usize },
    #[error("welch degrees of freedom are undefined (zero denominator)")]
    DegenerateDegreesOfFreedom,
    #[error("while computing p-value: {0}")]
    Distribution(DistributionErr),
}

impl From<DistributionErr> for ComparisonErr {
    fn from(e: DistributionErr) -> Self {
        ComparisonErr::Distribution(e)
    }
}
