use crate::power::power_fcns::power;
use crate::power::types::PowerCurvePoint;
use crate::test_family::TestFamily;
use tracing::warn;

/// Evaluates power at each per-group sample size, in the given order. A
/// failed evaluation leaves that point undefined and the sweep continues.
pub fn power_curve(
    test_family: TestFamily,
    effect_size: f64,
    alpha: f64,
    num_groups: usize,
    sample_sizes: &[usize],
) -> Vec<PowerCurvePoint> {
    sample_sizes
        .iter()
        .map(|&sample_size| {
            let power = match power(test_family, effect_size, alpha, num_groups, sample_size as f64)
            {
                Ok(p) => Some(p),
                Err(e) => {
                    warn!(%test_family, sample_size, error = %e, "power undefined at sample size");
                    None
                }
            };
            PowerCurvePoint { sample_size, power }
        })
        .collect()
}
