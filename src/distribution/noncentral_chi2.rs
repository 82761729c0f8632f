//----------------------------------------
// Noncentral chi-square distribution
//----------------------------------------
use crate::distribution::central::chi_squared_sf;
use crate::distribution::error::DistributionErr;
use statrs::function::gamma::{checked_gamma_ur, ln_gamma};

const MAX_TERMS: usize = 10_000;
const MIN_WEIGHT: f64 = 1e-16;

fn poisson_weight(j: f64, mean: f64) -> f64 {
    (-mean + j * mean.ln() - ln_gamma(j + 1.0)).exp()
}

fn central_term(x: f64, df: f64, j: f64) -> Result<f64, DistributionErr> {
    checked_gamma_ur((df + 2.0 * j) / 2.0, x / 2.0)
        .map_err(|e| DistributionErr::SpecialFunction(e.to_string()))
}

/// P(X > x) for X ~ noncentral chi-square(df, ncp), summing the Poisson
/// mixture outward from its mode in both directions
pub fn ncx2_sf(x: f64, df: f64, ncp: f64) -> Result<f64, DistributionErr> {
    if !(df > 0.0) || !(ncp >= 0.0) || !ncp.is_finite() || x.is_nan() {
        return Err(DistributionErr::InvalidParameters {
            distribution: "noncentral chi-square",
            reason: format!("x = {x}, df = {df}, ncp = {ncp}"),
        });
    }
    if x <= 0.0 {
        return Ok(1.0);
    }
    if ncp == 0.0 {
        return chi_squared_sf(x, df);
    }

    let mean = ncp / 2.0;
    let mode = mean.floor();
    let mut total = 0.0;

    // Upward from the mode
    let mut j = mode;
    let mut terms = 0;
    loop {
        let w = poisson_weight(j, mean);
        total += w * central_term(x, df, j)?;
        j += 1.0;
        terms += 1;
        if w < MIN_WEIGHT && j > mode + 5.0 {
            break;
        }
        if terms == MAX_TERMS {
            return Err(DistributionErr::SeriesDidNotConverge {
                distribution: "noncentral chi-square",
                iterations: terms,
            });
        }
    }

    // Downward from just below the mode
    let mut j = mode - 1.0;
    while j >= 0.0 {
        let w = poisson_weight(j, mean);
        total += w * central_term(x, df, j)?;
        if w < MIN_WEIGHT {
            break;
        }
        j -= 1.0;
    }

    Ok(total.clamp(0.0, 1.0))
}
