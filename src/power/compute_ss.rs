use crate::power::error::PowerErr;
use crate::power::power_fcns::power;
use crate::power::types::{PowerQuery, PowerResult};
use crate::settings::SolverSettings;
use crate::util::root_find::root_find_monotonic;
use tracing::debug;

/// Computes the per-group sample size at which the test reaches the desired
/// power, with default solver settings
pub fn solve_sample_size(query: &PowerQuery) -> Result<PowerResult, PowerErr> {
    solve_sample_size_with(query, &SolverSettings::default())
}

/// Power is monotonically increasing in n, so the required sample size is
/// the root of power(n) = desired_power to the right of the smallest
/// admissible sample size.
pub fn solve_sample_size_with(
    query: &PowerQuery,
    settings: &SolverSettings,
) -> Result<PowerResult, PowerErr> {
    query.validate()?;
    settings
        .validate()
        .map_err(|e| PowerErr::InvalidSettings(e.to_string()))?;
    let PowerQuery {
        test_family,
        effect_size,
        alpha,
        desired_power,
        num_groups,
    } = *query;

    let f_power_by_n = |n: f64| power(test_family, effect_size, alpha, num_groups, n);

    //----------------------------------------
    // Smallest sample size may already suffice
    let lower_bound = settings.min_sample_size;
    let power_at_lower = f_power_by_n(lower_bound)?;
    let required_n_per_group = if power_at_lower >= desired_power {
        debug!(
            %test_family,
            power_at_lower, "minimum sample size already reaches desired power"
        );
        lower_bound
    } else {
        root_find_monotonic(f_power_by_n, lower_bound, desired_power, settings)?
    };

    //----------------------------------------
    // Round up + totals
    let per_group = required_n_per_group.ceil() as u64;
    let total_n = per_group * test_family.group_count(num_groups) as u64;
    debug!(
        %test_family,
        effect_size, alpha, desired_power, required_n_per_group, per_group, total_n,
        "solved sample size"
    );

    Ok(PowerResult {
        test_family,
        required_n_per_group,
        per_group,
        total_n,
    })
}
