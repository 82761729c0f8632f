use crate::distribution::central::{chi_squared_quantile, f_quantile, students_t_quantile};
use crate::distribution::noncentral_beta::ncf_sf;
use crate::distribution::noncentral_chi2::ncx2_sf;
use crate::distribution::noncentral_t::{nct_cdf, nct_sf};
use crate::distribution::std_normal::{std_normal_cdf, std_normal_quantile, std_normal_sf};
use crate::power::error::PowerErr;
use crate::power::types::validate_parameters;
use crate::test_family::TestFamily;

/// Power of a test with `n` subjects per group (pairs for the paired t-test,
/// observations for chi-square). `n` is continuous so the solver can search
/// over it.
pub fn power(
    test_family: TestFamily,
    effect_size: f64,
    alpha: f64,
    num_groups: usize,
    n: f64,
) -> Result<f64, PowerErr> {
    validate_parameters(test_family, effect_size, alpha, num_groups)?;
    if !(n > 1.0) || !n.is_finite() {
        return Err(PowerErr::InvalidParameter {
            name: "sample size",
            value: n,
            expected: "a finite value > 1",
        });
    }

    let power = match test_family {
        TestFamily::IndependentTTest => {
            // Equal allocation: effective n is n1 * n2 / (n1 + n2) = n / 2
            two_sided_t_power(effect_size * (n / 2.).sqrt(), 2. * n - 2., alpha)?
        }
        TestFamily::PairedTTest => two_sided_t_power(effect_size * n.sqrt(), n - 1., alpha)?,
        TestFamily::OneWayAnova => {
            let k = num_groups as f64;
            let n_total = n * k;
            let df_between = k - 1.;
            let df_within = n_total - k;
            let crit = f_quantile(1. - alpha, df_between, df_within)?;
            ncf_sf(crit, df_between, df_within, effect_size * effect_size * n_total)?
        }
        TestFamily::ProportionTest => {
            let crit = std_normal_quantile(1. - alpha / 2.)?;
            let shift = effect_size * (n / 2.).sqrt();
            std_normal_sf(crit - shift) + std_normal_cdf(-crit - shift)
        }
        TestFamily::ChiSquareTest => {
            // Goodness of fit over two bins
            let df = 1.;
            let crit = chi_squared_quantile(1. - alpha, df)?;
            ncx2_sf(crit, df, n * effect_size * effect_size)?
        }
    };
    Ok(power.clamp(0., 1.))
}

fn two_sided_t_power(ncp: f64, df: f64, alpha: f64) -> Result<f64, PowerErr> {
    let crit = students_t_quantile(1. - alpha / 2., df)?;
    Ok(nct_sf(crit, df, ncp)? + nct_cdf(-crit, df, ncp)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn independent_t_reference() {
        // statsmodels TTestIndPower().power(0.5, 64, 0.05)
        let p = power(TestFamily::IndependentTTest, 0.5, 0.05, 2, 64.).unwrap();
        assert!((p - 0.8014596).abs() < 1e-5);
        let p = power(TestFamily::IndependentTTest, 0.5, 0.05, 2, 10.).unwrap();
        assert!((p - 0.1850957).abs() < 1e-5);
    }

    #[test]
    fn anova_reference() {
        // statsmodels FTestAnovaPower().power(0.25, 60, 0.05, k_groups = 3)
        let p = power(TestFamily::OneWayAnova, 0.25, 0.05, 3, 20.).unwrap();
        assert!((p - 0.3744311).abs() < 1e-5);
    }

    #[test]
    fn power_increases_with_n() {
        for family in TestFamily::ALL {
            let p_small = power(family, 0.3, 0.05, 3, 10.).unwrap();
            let p_large = power(family, 0.3, 0.05, 3, 50.).unwrap();
            assert!(p_large > p_small, "{family:?}: {p_small} vs {p_large}");
        }
    }

    #[test]
    fn paired_more_powerful_than_independent() {
        let paired = power(TestFamily::PairedTTest, 0.5, 0.05, 2, 30.).unwrap();
        let independent = power(TestFamily::IndependentTTest, 0.5, 0.05, 2, 30.).unwrap();
        assert!(paired > independent);
    }

    #[test]
    fn rejects_tiny_sample() {
        assert!(matches!(
            power(TestFamily::PairedTTest, 0.5, 0.05, 2, 1.),
            Err(PowerErr::InvalidParameter {
                name: "sample size",
                ..
            })
        ));
    }

    #[test]
    fn rejects_bad_effect_size() {
        if let Err(e) = power(TestFamily::ProportionTest, -0.2, 0.05, 2, 30.) {
            assert_eq!(
                String::from("invalid effect size: -0.2 (expected a finite value > 0)"),
                format!("{}", e)
            );
        } else {
            panic!()
        }
    }
}
