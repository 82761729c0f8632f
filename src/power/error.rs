//----------------------------------------
// power errors
//----------------------------------------
use crate::distribution::error::DistributionErr;
use crate::util::error::RootFindErr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PowerErr {
    #[error("invalid {name}: {value} (expected {expected})")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        expected: &'static str,
    },
    #[error("unknown test family: {0}")]
    UnknownTestFamily(String),
    #[error("invalid solver settings: {0}")]
    InvalidSettings(String),
    #[error("sample size search did not converge: {0}")]
    SolverDidNotConverge(RootFindErr),
    #[error("power function could not be evaluated: {0}")]
    PowerEvaluation(DistributionErr),
}

impl From<RootFindErr> for PowerErr {
    fn from(e: RootFindErr) -> Self {
        PowerErr::SolverDidNotConverge(e)
    }
}

impl From<DistributionErr> for PowerErr {
    fn from(e: DistributionErr) -> Self {
        PowerErr::PowerEvaluation(e)
    }
}
