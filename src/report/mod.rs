//----------------------------------------
// Report text
//----------------------------------------
//! Assembles the text blocks the report writer lays out: a title, a short
//! explanation, a one-line summary, and the formula working.
use crate::comparison::types::{ComparisonResult, ComparisonTest, DegreesOfFreedom};
use crate::power::types::{PowerQuery, PowerResult};
use crate::test_family::TestFamily;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub title: String,
    pub explanation: String,
    pub summary: String,
    pub formula: String,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f)?;
        writeln!(f, "{}", self.explanation)?;
        writeln!(f)?;
        writeln!(f, "{}", self.summary)?;
        if !self.formula.is_empty() {
            writeln!(f)?;
            write!(f, "{}", self.formula)?;
        }
        Ok(())
    }
}

fn effect_size_name(test_family: TestFamily) -> &'static str {
    match test_family {
        TestFamily::IndependentTTest | TestFamily::PairedTTest => "Cohen's d",
        TestFamily::OneWayAnova => "Cohen's f",
        TestFamily::ProportionTest => "Cohen's h",
        TestFamily::ChiSquareTest => "Cohen's w",
    }
}

pub fn power_report(query: &PowerQuery, result: &PowerResult) -> Report {
    let groups = query.test_family.group_count(query.num_groups);
    let explanation = format!(
        "Sample size for a {} with {} = {}, alpha = {}, and desired power = {}. \
        The solver finds the smallest sample size per group at which the test \
        rejects a false null hypothesis with the desired probability, then \
        rounds up to a whole participant.",
        query.test_family.label(),
        effect_size_name(query.test_family),
        query.effect_size,
        query.alpha,
        query.desired_power,
    );
    let summary = format!(
        "You need approximately {} participants per group ({} groups, total sample size {}).",
        result.per_group, groups, result.total_n
    );
    let formula = format!(
        "n (unrounded) = {:.4}\nn per group = ceil({:.4}) = {}\ntotal = {} * {} = {}",
        result.required_n_per_group,
        result.required_n_per_group,
        result.per_group,
        result.per_group,
        groups,
        result.total_n
    );
    Report {
        title: String::from("Power Analysis Report"),
        explanation,
        summary,
        formula,
    }
}

pub fn comparison_report(result: &ComparisonResult, alpha: f64) -> Report {
    let labels = result.groups.iter().map(|g| g.label.as_str()).join(", ");
    let explanation = match result.test {
        ComparisonTest::WelchTTest => format!(
            "Welch's t-test compares the means of two groups ({labels}) without \
            assuming equal variances. The p-value is two-sided."
        ),
        ComparisonTest::OneWayAnova => format!(
            "One-way ANOVA tests whether the means of {} groups ({labels}) differ by \
            comparing between-group to within-group variance.",
            result.groups.len()
        ),
    };
    let verdict = if result.is_significant(alpha) {
        format!("significant at alpha = {alpha}")
    } else {
        format!("not significant at alpha = {alpha}")
    };
    let summary = match result.degrees_of_freedom {
        DegreesOfFreedom::Welch(df) => format!(
            "t-statistic: {:.3}, degrees of freedom: {:.1}, p-value: {:.4} ({verdict})",
            result.statistic, df, result.p_value
        ),
        DegreesOfFreedom::Anova { between, within } => format!(
            "F({between}, {within}) = {:.3}, p-value: {:.4} ({verdict})",
            result.statistic, result.p_value
        ),
    };
    Report {
        title: format!("Group Comparison Report: {}", result.test.name()),
        explanation,
        summary,
        formula: result.formula_trace.to_string(),
    }
}
