use crate::comparison::compare_groups::compare_groups;
use crate::comparison::error::ComparisonErr;
use crate::comparison::summarize::{normalize, validate_groups};
use crate::comparison::types::{ComparisonInput, ComparisonResult, GroupSummary, RawSample};
use itertools::izip;
use rand::{SeedableRng, distributions::Distribution, rngs};
use serde::{Deserialize, Serialize};
use statrs::distribution::Normal;

#[derive(Debug, PartialEq, Eq, Copy, Clone, Serialize, Deserialize)]
pub enum ExampleData {
    TwoGroups,
    ThreeGroups,
}

pub fn example_summaries(kind: ExampleData) -> Vec<GroupSummary> {
    match kind {
        ExampleData::TwoGroups => vec![
            GroupSummary::new(12.0, 2.0, 15),
            GroupSummary::new(14.5, 2.5, 15),
        ],
        ExampleData::ThreeGroups => vec![
            GroupSummary::new(10.0, 2.0, 12),
            GroupSummary::new(15.0, 3.0, 12),
            GroupSummary::new(20.0, 2.5, 12),
        ],
    }
}

/// Runs the fixed example through the regular comparison pipeline
pub fn compare_example(kind: ExampleData) -> Result<ComparisonResult, ComparisonErr> {
    compare_groups(&ComparisonInput::SummaryStats(example_summaries(kind)))
}

/// Draws n normal observations per summary, labeled "Group 1", "Group 2", ...
/// Each group gets its own stream seeded from `seed`, so results are
/// reproducible.
pub fn simulate_raw_sample(
    summaries: &[GroupSummary],
    seed: u64,
) -> Result<RawSample, ComparisonErr> {
    let groups = normalize(&ComparisonInput::SummaryStats(summaries.to_vec()))?;
    validate_groups(&groups)?;

    let mut sample = RawSample::default();
    for (i, group, summary) in izip!(0_u64.., &groups, summaries) {
        let dist = Normal::new(summary.mean, summary.std_dev).map_err(|_| {
            ComparisonErr::InvalidParameter {
                group: group.label.clone(),
                name: "standard deviation",
                value: summary.std_dev,
                expected: "a finite value > 0",
            }
        })?;
        let rng = rngs::StdRng::seed_from_u64(seed.wrapping_add(i));
        for value in dist.sample_iter(rng).take(summary.n) {
            sample.push(group.label.clone(), value);
        }
    }
    Ok(sample)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::types::ComparisonTest;

    #[test]
    fn examples_follow_dispatch() {
        let two = compare_example(ExampleData::TwoGroups).expect("two group example failed");
        assert_eq!(two.test, ComparisonTest::WelchTTest);
        let three = compare_example(ExampleData::ThreeGroups).expect("three group example failed");
        assert_eq!(three.test, ComparisonTest::OneWayAnova);
    }

    #[test]
    fn example_matches_manual_entry() {
        let manual = compare_groups(&ComparisonInput::SummaryStats(vec![
            GroupSummary::new(10.0, 2.0, 12),
            GroupSummary::new(15.0, 3.0, 12),
            GroupSummary::new(20.0, 2.5, 12),
        ]))
        .unwrap();
        assert_eq!(compare_example(ExampleData::ThreeGroups).unwrap(), manual);
    }

    #[test]
    fn simulated_sample_shape() {
        let summaries = example_summaries(ExampleData::ThreeGroups);
        let sample = simulate_raw_sample(&summaries, 24601).expect("failed to simulate");
        assert_eq!(sample.observations().len(), 36);
        let grouped = sample.grouped();
        let labels: Vec<&String> = grouped.keys().collect();
        assert_eq!(labels, vec!["Group 1", "Group 2", "Group 3"]);
        assert!(grouped.values().all(|v| v.len() == 12));
    }

    #[test]
    fn simulation_is_reproducible() {
        let summaries = example_summaries(ExampleData::TwoGroups);
        let a = simulate_raw_sample(&summaries, 7).unwrap();
        let b = simulate_raw_sample(&summaries, 7).unwrap();
        let c = simulate_raw_sample(&summaries, 8).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn simulated_sample_runs_through_pipeline() {
        let summaries = vec![
            GroupSummary::new(0.0, 1.0, 400),
            GroupSummary::new(3.0, 1.0, 400),
        ];
        let sample = simulate_raw_sample(&summaries, 11).unwrap();
        let res = compare_groups(&ComparisonInput::RawSample(sample)).unwrap();
        assert_eq!(res.test, ComparisonTest::WelchTTest);
        assert!((res.groups[0].summary.mean - 0.0).abs() < 0.25);
        assert!((res.groups[1].summary.mean - 3.0).abs() < 0.25);
        assert!(res.p_value < 1e-10);
    }

    #[test]
    fn simulation_rejects_zero_variance() {
        let summaries = vec![GroupSummary::new(1.0, 1.0, 5), GroupSummary::new(1.0, 0.0, 5)];
        assert_eq!(
            simulate_raw_sample(&summaries, 1),
            Err(ComparisonErr::ZeroVariance(String::from("Group 2")))
        );
    }
}
