use crate::distribution::error::DistributionErr;
use statrs::function::erf::{erfc, erfc_inv};
use std::f64::consts::SQRT_2;

pub fn std_normal_cdf(z: f64) -> f64 {
    0.5 * erfc(-z / SQRT_2)
}

/// Upper tail, computed directly so it keeps precision far out in the tail
pub fn std_normal_sf(z: f64) -> f64 {
    0.5 * erfc(z / SQRT_2)
}

pub fn std_normal_quantile(p: f64) -> Result<f64, DistributionErr> {
    if !(p > 0.0 && p < 1.0) {
        return Err(DistributionErr::QuantileOutOfBounds(p));
    }
    Ok(-SQRT_2 * erfc_inv(2.0 * p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_normal_cdf_values() {
        assert!((std_normal_cdf(0.0) - 0.5).abs() < 1e-12);
        assert!((std_normal_cdf(1.959964) - 0.975).abs() < 1e-6);
        assert!((std_normal_sf(1.959964) - 0.025).abs() < 1e-6);
    }

    #[test]
    fn std_normal_quantile_err() {
        if let Err(e) = std_normal_quantile(1.1) {
            assert_eq!(
                String::from("arguments to quantile function should be in (0, 1); got 1.1"),
                format!("{}", e)
            );
        } else {
            panic!()
        }
    }

    #[test]
    fn std_normal_quantile_value() {
        assert!((std_normal_quantile(0.975).unwrap() - 1.96).abs() < 0.0001)
    }

    #[test]
    fn std_normal_quantile_value_2() {
        assert!((std_normal_quantile(0.007384489).unwrap() - -2.437995).abs() < 0.0001)
    }

    #[test]
    fn std_normal_quantile_symmetric() {
        let upper = std_normal_quantile(0.975).unwrap();
        let lower = std_normal_quantile(0.025).unwrap();
        assert!((upper + lower).abs() < 1e-12)
    }
}
