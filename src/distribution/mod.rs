//----------------------------------------
// distribution mod
//----------------------------------------
pub mod central;
pub mod error;
pub mod noncentral_beta;
pub mod noncentral_chi2;
pub mod noncentral_t;
pub mod std_normal;
