//----------------------------------------
// power mod
//----------------------------------------
pub mod compute_ss;
pub mod error;
pub mod power_curve;
pub mod power_fcns;
pub mod types;
