use crate::comparison::anova::one_way_anova;
use crate::comparison::error::ComparisonErr;
use crate::comparison::summarize::{normalize, validate_groups};
use crate::comparison::types::{
    ComparisonInput, ComparisonResult, ComparisonTest, DegreesOfFreedom, GroupSummary,
};
use crate::comparison::welch::welch_t_test;
use tracing::debug;

/// Compares group outcomes: Welch's t-test for exactly two groups, one-way
/// ANOVA for three or more
pub fn compare_groups(input: &ComparisonInput) -> Result<ComparisonResult, ComparisonErr> {
    let groups = normalize(input)?;
    validate_groups(&groups)?;
    let summaries: Vec<GroupSummary> = groups.iter().map(|g| g.summary).collect();

    let result = match summaries.as_slice() {
        [g1, g2] => {
            let welch = welch_t_test(g1, g2)?;
            ComparisonResult {
                test: ComparisonTest::WelchTTest,
                groups,
                statistic: welch.t,
                degrees_of_freedom: DegreesOfFreedom::Welch(welch.df),
                p_value: welch.p_value,
                formula_trace: welch.trace,
            }
        }
        _ => {
            let anova = one_way_anova(&summaries)?;
            ComparisonResult {
                test: ComparisonTest::OneWayAnova,
                groups,
                statistic: anova.f,
                degrees_of_freedom: DegreesOfFreedom::Anova {
                    between: anova.df_between,
                    within: anova.df_within,
                },
                p_value: anova.p_value,
                formula_trace: anova.trace,
            }
        }
    };
    debug!(
        test = result.test.name(),
        n_groups = result.groups.len(),
        statistic = result.statistic,
        p_value = result.p_value,
        "compared groups"
    );
    Ok(result)
}
