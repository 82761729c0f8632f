use crate::comparison::error::ComparisonErr;
use crate::comparison::trace::{FormulaTrace, fmt_value};
use crate::comparison::types::GroupSummary;
use crate::distribution::central::f_sf;
use itertools::Itertools;

#[derive(Debug, Clone, PartialEq)]
pub struct AnovaOutcome {
    pub f: f64,
    pub df_between: usize,
    pub df_within: usize,
    pub p_value: f64,
    pub trace: FormulaTrace,
}

/// One-way ANOVA from per-group summary statistics
pub fn one_way_anova(groups: &[GroupSummary]) -> Result<AnovaOutcome, ComparisonErr> {
    if groups.len() < 2 {
        return Err(ComparisonErr::InsufficientGroups(groups.len()));
    }
    let mut trace = FormulaTrace::new();
    let k = groups.len();
    let n_total: usize = groups.iter().map(|g| g.n).sum();
    trace.push("N", groups.iter().map(|g| g.n).join(" + "), n_total as f64);

    //----------------------------------------
    // Between groups
    let grand_mean = groups.iter().map(|g| g.n as f64 * g.mean).sum::<f64>() / n_total as f64;
    let weighted = groups
        .iter()
        .map(|g| format!("{} * {}", g.n, fmt_value(g.mean)))
        .join(" + ");
    trace.push("grand_mean", format!("({weighted}) / {n_total}"), grand_mean);
    let ss_between: f64 = groups
        .iter()
        .map(|g| g.n as f64 * (g.mean - grand_mean).powi(2))
        .sum();
    let expression = groups
        .iter()
        .map(|g| format!("{} * ({} - {})^2", g.n, fmt_value(g.mean), fmt_value(grand_mean)))
        .join(" + ");
    trace.push("SSB", expression, ss_between);
    let df_between = k - 1;
    trace.push("df_between", format!("{k} - 1"), df_between as f64);
    let ms_between = ss_between / df_between as f64;
    trace.push("MSB", format!("{} / {df_between}", fmt_value(ss_between)), ms_between);

    //----------------------------------------
    // Within groups
    let ss_within: f64 = groups
        .iter()
        .map(|g| (g.n as f64 - 1.) * g.variance())
        .sum();
    let expression = groups
        .iter()
        .map(|g| format!("{} * {}^2", g.n - 1, fmt_value(g.std_dev)))
        .join(" + ");
    trace.push("SSW", expression, ss_within);
    let df_within = n_total - k;
    trace.push("df_within", format!("{n_total} - {k}"), df_within as f64);
    let ms_within = ss_within / df_within as f64;
    trace.push("MSW", format!("{} / {df_within}", fmt_value(ss_within)), ms_within);

    //----------------------------------------
    // Statistic + p-value
    let f = ms_between / ms_within;
    trace.push("F", format!("{} / {}", fmt_value(ms_between), fmt_value(ms_within)), f);
    let p_value = f_sf(f, df_between as f64, df_within as f64)?.clamp(0., 1.);
    let expression = format!("F_sf({}, {df_between}, {df_within})", fmt_value(f));
    trace.push("p", expression, p_value);

    Ok(AnovaOutcome {
        f,
        df_between,
        df_within,
        p_value,
        trace,
    })
}
