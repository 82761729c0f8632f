//----------------------------------------
// Crate error type
//----------------------------------------
pub use crate::comparison::error::ComparisonErr;
pub use crate::distribution::error::DistributionErr;
pub use crate::power::error::PowerErr;
pub use crate::settings::SettingsErr;
pub use crate::util::error::RootFindErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NsleuthErr {
    #[error("while solving for sample size: {0}")]
    Power(PowerErr),
    #[error("while comparing groups: {0}")]
    Comparison(ComparisonErr),
    #[error("while loading settings: {0}")]
    Settings(SettingsErr),
}

impl From<PowerErr> for NsleuthErr {
    fn from(e: PowerErr) -> Self {
        NsleuthErr::Power(e)
    }
}

impl From<ComparisonErr> for NsleuthErr {
    fn from(e: ComparisonErr) -> Self {
        NsleuthErr::Comparison(e)
    }
}

impl From<SettingsErr> for NsleuthErr {
    fn from(e: SettingsErr) -> Self {
        NsleuthErr::Settings(e)
    }
}
