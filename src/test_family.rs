use crate::power::error::PowerErr;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Default, Debug, PartialEq, Eq, Hash, Copy, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestFamily {
    #[default]
    IndependentTTest,
    PairedTTest,
    OneWayAnova,
    ProportionTest,
    ChiSquareTest,
}

impl TestFamily {
    pub const ALL: [TestFamily; 5] = [
        TestFamily::IndependentTTest,
        TestFamily::PairedTTest,
        TestFamily::OneWayAnova,
        TestFamily::ProportionTest,
        TestFamily::ChiSquareTest,
    ];

    /// Label shown to users when picking a test
    pub fn label(&self) -> &'static str {
        match self {
            TestFamily::IndependentTTest => "t-test (independent)",
            TestFamily::PairedTTest => "t-test (paired)",
            TestFamily::OneWayAnova => "ANOVA",
            TestFamily::ProportionTest => "Proportion comparison",
            TestFamily::ChiSquareTest => "Chi-square test",
        }
    }

    fn snake_case_name(&self) -> &'static str {
        match self {
            TestFamily::IndependentTTest => "independent_t_test",
            TestFamily::PairedTTest => "paired_t_test",
            TestFamily::OneWayAnova => "one_way_anova",
            TestFamily::ProportionTest => "proportion_test",
            TestFamily::ChiSquareTest => "chi_square_test",
        }
    }

    /// Number of groups the total sample is split across
    pub fn group_count(&self, num_groups: usize) -> usize {
        match self {
            TestFamily::OneWayAnova => num_groups,
            _ => 2,
        }
    }
}

impl fmt::Display for TestFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TestFamily {
    type Err = PowerErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        TestFamily::ALL
            .into_iter()
            .find(|family| {
                family.label().eq_ignore_ascii_case(s) || family.snake_case_name() == s
            })
            .ok_or_else(|| PowerErr::UnknownTestFamily(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_labels_and_names() {
        assert_eq!(
            "t-test (independent)".parse::<TestFamily>().unwrap(),
            TestFamily::IndependentTTest
        );
        assert_eq!("anova".parse::<TestFamily>().unwrap(), TestFamily::OneWayAnova);
        assert_eq!(
            "chi_square_test".parse::<TestFamily>().unwrap(),
            TestFamily::ChiSquareTest
        );
        for family in TestFamily::ALL {
            assert_eq!(family.label().parse::<TestFamily>().unwrap(), family);
        }
    }

    #[test]
    fn unknown_family() {
        if let Err(e) = "z-test".parse::<TestFamily>() {
            assert_eq!(String::from("unknown test family: z-test"), format!("{}", e));
        } else {
            panic!()
        }
    }

    #[test]
    fn group_counts() {
        assert_eq!(TestFamily::OneWayAnova.group_count(4), 4);
        assert_eq!(TestFamily::PairedTTest.group_count(4), 2);
        assert_eq!(TestFamily::ChiSquareTest.group_count(2), 2);
    }
}
