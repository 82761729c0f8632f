use crate::comparison::error::ComparisonErr;
use crate::comparison::types::{ComparisonInput, Group, GroupSummary, RawSample};
use statrs::statistics::Statistics;

pub const MAX_SUMMARY_GROUPS: usize = 5;

/// Reduces either input form to labeled per-group summaries
pub fn normalize(input: &ComparisonInput) -> Result<Vec<Group>, ComparisonErr> {
    match input {
        ComparisonInput::RawSample(sample) => summarize_raw(sample),
        ComparisonInput::SummaryStats(summaries) => {
            if summaries.len() > MAX_SUMMARY_GROUPS {
                return Err(ComparisonErr::TooManyGroups {
                    got: summaries.len(),
                    max: MAX_SUMMARY_GROUPS,
                });
            }
            Ok(summaries
                .iter()
                .enumerate()
                .map(|(i, &summary)| Group {
                    label: format!("Group {}", i + 1),
                    summary,
                })
                .collect())
        }
    }
}

/// Labels are counted before any group is summarized, so a sample with a
/// single label is reported as too few groups
fn summarize_raw(sample: &RawSample) -> Result<Vec<Group>, ComparisonErr> {
    let grouped = sample.grouped();
    if grouped.len() < 2 {
        return Err(ComparisonErr::InsufficientGroups(grouped.len()));
    }
    grouped
        .into_iter()
        .map(|(label, values)| summarize_values(label, &values))
        .collect()
}

/// Mean and sample standard deviation of one group's outcomes
pub fn summarize_values(label: String, values: &[f64]) -> Result<Group, ComparisonErr> {
    if values.len() < 2 {
        return Err(ComparisonErr::InvalidParameter {
            group: label,
            name: "sample size",
            value: values.len() as f64,
            expected: "at least 2 observations",
        });
    }
    let summary = GroupSummary {
        mean: values.mean(),
        std_dev: values.std_dev(),
        n: values.len(),
    };
    Ok(Group { label, summary })
}

/// Checks group count and each group's statistics. Zero standard deviation
/// gets its own error since both test statistics divide by it.
pub fn validate_groups(groups: &[Group]) -> Result<(), ComparisonErr> {
    if groups.len() < 2 {
        return Err(ComparisonErr::InsufficientGroups(groups.len()));
    }
    for Group { label, summary } in groups {
        if !summary.mean.is_finite() {
            return Err(ComparisonErr::InvalidParameter {
                group: label.clone(),
                name: "mean",
                value: summary.mean,
                expected: "a finite value",
            });
        }
        if summary.std_dev == 0.0 {
            return Err(ComparisonErr::ZeroVariance(label.clone()));
        }
        if !(summary.std_dev > 0.0) || !summary.std_dev.is_finite() {
            return Err(ComparisonErr::InvalidParameter {
                group: label.clone(),
                name: "standard deviation",
                value: summary.std_dev,
                expected: "a finite value > 0",
            });
        }
        if summary.n < 2 {
            return Err(ComparisonErr::InvalidParameter {
                group: label.clone(),
                name: "sample size",
                value: summary.n as f64,
                expected: "at least 2",
            });
        }
    }
    Ok(())
}
