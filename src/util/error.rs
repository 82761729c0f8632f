//----------------------------------------
// root finding errors
//----------------------------------------
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RootFindErr {
    #[error("f(lower_bound) is larger than target; use smaller lower bound")]
    BadLowerBound,
    #[error(
        "could not bracket target {target} after {expansions} expansions (upper bound: {upper_bound})"
    )]
    NoBracket {
        target: f64,
        expansions: usize,
        upper_bound: f64,
    },
    #[error("failed to converge after {iterations} iterations (last x: {x}, tolerance: {tol})")]
    MaxIterations { iterations: usize, x: f64, tol: f64 },
}
