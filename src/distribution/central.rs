//----------------------------------------
// Central t, F, and chi-square distributions
//----------------------------------------
// statrs supplies the cdf/sf; quantiles are found by inverting the cdf with
// the crate's root finder, since the default statrs inverse_cdf stops after
// a fixed 16 bisection steps.
use crate::distribution::error::DistributionErr;
use crate::settings::SolverSettings;
use crate::util::root_find::root_find_monotonic;
use statrs::distribution::{ChiSquared, ContinuousCDF, FisherSnedecor, StudentsT};

fn students_t(df: f64) -> Result<StudentsT, DistributionErr> {
    StudentsT::new(0.0, 1.0, df).map_err(|e| DistributionErr::InvalidParameters {
        distribution: "student's t",
        reason: e.to_string(),
    })
}

fn fisher_snedecor(df1: f64, df2: f64) -> Result<FisherSnedecor, DistributionErr> {
    FisherSnedecor::new(df1, df2).map_err(|e| DistributionErr::InvalidParameters {
        distribution: "F",
        reason: e.to_string(),
    })
}

fn chi_squared(df: f64) -> Result<ChiSquared, DistributionErr> {
    ChiSquared::new(df).map_err(|e| DistributionErr::InvalidParameters {
        distribution: "chi-square",
        reason: e.to_string(),
    })
}

fn check_probability(p: f64) -> Result<(), DistributionErr> {
    if p > 0.0 && p < 1.0 {
        Ok(())
    } else {
        Err(DistributionErr::QuantileOutOfBounds(p))
    }
}

// Inverts a cdf that is 0 (or below p) at the lower bound
fn invert_cdf<D>(dist: &D, p: f64, lower_bound: f64) -> Result<f64, DistributionErr>
where
    D: ContinuousCDF<f64, f64>,
{
    let f = |x: f64| -> Result<f64, DistributionErr> { Ok(dist.cdf(x)) };
    root_find_monotonic(f, lower_bound, p, &SolverSettings::default())
}

pub fn students_t_cdf(t: f64, df: f64) -> Result<f64, DistributionErr> {
    Ok(students_t(df)?.cdf(t))
}

pub fn students_t_sf(t: f64, df: f64) -> Result<f64, DistributionErr> {
    Ok(students_t(df)?.sf(t))
}

pub fn students_t_quantile(p: f64, df: f64) -> Result<f64, DistributionErr> {
    check_probability(p)?;
    let dist = students_t(df)?;
    if p == 0.5 {
        Ok(0.0)
    } else if p < 0.5 {
        // Symmetric about zero
        Ok(-invert_cdf(&dist, 1.0 - p, 0.0)?)
    } else {
        invert_cdf(&dist, p, 0.0)
    }
}

pub fn f_sf(x: f64, df1: f64, df2: f64) -> Result<f64, DistributionErr> {
    Ok(fisher_snedecor(df1, df2)?.sf(x))
}

pub fn f_quantile(p: f64, df1: f64, df2: f64) -> Result<f64, DistributionErr> {
    check_probability(p)?;
    invert_cdf(&fisher_snedecor(df1, df2)?, p, 0.0)
}

pub fn chi_squared_sf(x: f64, df: f64) -> Result<f64, DistributionErr> {
    Ok(chi_squared(df)?.sf(x))
}

pub fn chi_squared_quantile(p: f64, df: f64) -> Result<f64, DistributionErr> {
    check_probability(p)?;
    invert_cdf(&chi_squared(df)?, p, 0.0)
}
