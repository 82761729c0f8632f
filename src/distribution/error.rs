//----------------------------------------
// distribution errors
//----------------------------------------
use crate::util::error::RootFindErr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DistributionErr {
    #[error("arguments to quantile function should be in (0, 1); got {0}")]
    QuantileOutOfBounds(f64),
    #[error("invalid {distribution} parameters: {reason}")]
    InvalidParameters {
        distribution: &'static str,
        reason: String,
    },
    #[error("special function evaluation failed: {0}")]
    SpecialFunction(String),
    #[error("{distribution} series did not converge after {iterations} terms")]
    SeriesDidNotConverge {
        distribution: &'static str,
        iterations: usize,
    },
    #[error("while inverting cdf: {0}")]
    Quantile(RootFindErr),
}

impl From<RootFindErr> for DistributionErr {
    fn from(e: RootFindErr) -> Self {
        DistributionErr::Quantile(e)
    }
}
