//----------------------------------------
// Root lib
//----------------------------------------
//! The purpose of this library is to provide the computations behind
//! planning and analysing simple experiments: the per-group sample size a
//! test needs to reach a desired power, power curves over a range of sample
//! sizes, and comparisons of group outcomes with Welch's t-test or one-way
//! ANOVA, including the worked formula for reports.

/// This module houses the public API for sample size, power, and group
/// comparison computations
pub mod compute;
/// This module contains error types
pub mod error;
mod comparison;
mod distribution;
mod power;
mod report;
mod settings;
mod test_family;
mod util;
