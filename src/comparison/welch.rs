use crate::comparison::error::ComparisonErr;
use crate::comparison::trace::{FormulaTrace, fmt_value};
use crate::comparison::types::GroupSummary;
use crate::distribution::central::students_t_sf;

#[derive(Debug, Clone, PartialEq)]
pub struct WelchOutcome {
    pub t: f64,
    pub df: f64,
    pub p_value: f64,
    pub trace: FormulaTrace,
}

/// Welch's unequal-variance t-test from summary statistics, two-sided
pub fn welch_t_test(g1: &GroupSummary, g2: &GroupSummary) -> Result<WelchOutcome, ComparisonErr> {
    let mut trace = FormulaTrace::new();
    let n1 = g1.n as f64;
    let n2 = g2.n as f64;

    //----------------------------------------
    // Standard error
    let var_1 = g1.variance() / n1;
    trace.push("var_1", format!("{}^2 / {}", fmt_value(g1.std_dev), g1.n), var_1);
    let var_2 = g2.variance() / n2;
    trace.push("var_2", format!("{}^2 / {}", fmt_value(g2.std_dev), g2.n), var_2);
    let (v1, v2) = (fmt_value(var_1), fmt_value(var_2));
    let se = (var_1 + var_2).sqrt();
    trace.push("SE", format!("sqrt({v1} + {v2})"), se);

    //----------------------------------------
    // Statistic
    let t = (g1.mean - g2.mean) / se;
    let expression = format!(
        "({} - {}) / {}",
        fmt_value(g1.mean),
        fmt_value(g2.mean),
        fmt_value(se)
    );
    trace.push("t", expression, t);

    //----------------------------------------
    // Welch-Satterthwaite degrees of freedom
    let df_denominator = var_1 * var_1 / (n1 - 1.) + var_2 * var_2 / (n2 - 1.);
    if df_denominator == 0.0 || !df_denominator.is_finite() {
        return Err(ComparisonErr::DegenerateDegreesOfFreedom);
    }
    let df = (var_1 + var_2).powi(2) / df_denominator;
    let expression = format!(
        "({v1} + {v2})^2 / ({v1}^2 / {} + {v2}^2 / {})",
        g1.n - 1,
        g2.n - 1
    );
    trace.push("df", expression, df);

    //----------------------------------------
    // Two-sided p-value
    let p_value = (2. * students_t_sf(t.abs(), df)?).clamp(0., 1.);
    let expression = format!("2 * (1 - T_cdf(|{}|, {}))", fmt_value(t), fmt_value(df));
    trace.push("p", expression, p_value);

    Ok(WelchOutcome {
        t,
        df,
        p_value,
        trace,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_scenario() {
        let res = welch_t_test(
            &GroupSummary::new(12.0, 2.0, 15),
            &GroupSummary::new(14.5, 2.5, 15),
        )
        .expect("failed to run welch t-test");
        assert!((res.trace.value("SE").unwrap() - 0.826640).abs() < 1e-6);
        assert!((res.t - -3.024292).abs() < 1e-6);
        assert!((res.df - 26.712826).abs() < 1e-6);
        assert!((res.p_value - 0.0054506).abs() < 1e-6);
        assert_eq!(res.trace.labels(), vec!["var_1", "var_2", "SE", "t", "df", "p"]);
    }

    #[test]
    fn equal_variances_and_sizes() {
        // Same spread and n: df is 2n - 2 and the test matches Student's
        let res = welch_t_test(
            &GroupSummary::new(50.0, 10.0, 30),
            &GroupSummary::new(55.0, 10.0, 30),
        )
        .unwrap();
        assert!((res.df - 58.0).abs() < 1e-9);
        assert!((res.t - -1.936492).abs() < 1e-6);
        assert!((res.p_value - 0.0576848).abs() < 1e-6);
    }

    #[test]
    fn identical_means() {
        let g = GroupSummary::new(3.0, 1.5, 12);
        let res = welch_t_test(&g, &g).unwrap();
        assert_eq!(res.t, 0.0);
        assert!((res.p_value - 1.0).abs() < 1e-12);
    }

    #[test]
    fn degenerate_df() {
        // Unreachable after validation, but n = 1 makes the denominator infinite
        let res = welch_t_test(
            &GroupSummary::new(1.0, 1.0, 1),
            &GroupSummary::new(2.0, 1.0, 1),
        );
        assert_eq!(res, Err(ComparisonErr::DegenerateDegreesOfFreedom));
    }

    fn rendered_value(line: &str) -> f64 {
        line.rsplit(" = ")
            .next()
            .and_then(|v| v.parse().ok())
            .expect("trace line should end in a number")
    }

    #[test]
    fn small_magnitude_trace_rederives_statistic() {
        let res = welch_t_test(
            &GroupSummary::new(1.2e-5, 2e-6, 15),
            &GroupSummary::new(1.45e-5, 2.5e-6, 15),
        )
        .unwrap();
        let lines = res.trace.lines();
        assert_eq!(lines[0], "var_1 = 2.000000e-6^2 / 15 = 2.666667e-13");
        for (line, step) in lines.iter().zip(res.trace.steps()) {
            let value = rendered_value(line);
            assert!(value != 0.0, "{line}");
            assert!((value - step.value).abs() <= 1e-5 * step.value.abs(), "{line}");
        }

        // Substitute the rendered SE and means back into t
        let t_expression = &res.trace.steps()[3].expression;
        let numbers: Vec<f64> = t_expression
            .split(|c: char| c == '(' || c == ')' || c == '/' || c == ' ')
            .filter_map(|v| v.parse().ok())
            .collect();
        assert_eq!(numbers.len(), 3);
        let t = (numbers[0] - numbers[1]) / numbers[2];
        assert!((t - res.t).abs() < 1e-5 * res.t.abs());
        assert!((res.t - -3.024292).abs() < 1e-6);
        assert!((res.df - 26.712826).abs() < 1e-6);
    }
}
