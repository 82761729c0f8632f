//----------------------------------------
// power mod types
//----------------------------------------
use crate::power::error::PowerErr;
use crate::test_family::TestFamily;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerQuery {
    pub test_family: TestFamily,
    /// Cohen's d for t-tests, f for ANOVA, h for proportions, w for chi-square
    pub effect_size: f64,
    pub alpha: f64,
    pub desired_power: f64,
    /// Only read for ANOVA
    pub num_groups: usize,
}

impl PowerQuery {
    pub fn new(
        test_family: TestFamily,
        effect_size: f64,
        alpha: f64,
        desired_power: f64,
        num_groups: usize,
    ) -> PowerQuery {
        PowerQuery {
            test_family,
            effect_size,
            alpha,
            desired_power,
            num_groups,
        }
    }

    pub fn validate(&self) -> Result<(), PowerErr> {
        validate_parameters(
            self.test_family,
            self.effect_size,
            self.alpha,
            self.num_groups,
        )?;
        if !(self.desired_power > 0.0 && self.desired_power < 1.0) {
            return Err(PowerErr::InvalidParameter {
                name: "desired power",
                value: self.desired_power,
                expected: "a value in (0, 1)",
            });
        }
        Ok(())
    }
}

/// Checks the parameters shared by the solver and the forward power model
pub fn validate_parameters(
    test_family: TestFamily,
    effect_size: f64,
    alpha: f64,
    num_groups: usize,
) -> Result<(), PowerErr> {
    if !(effect_size > 0.0) || !effect_size.is_finite() {
        return Err(PowerErr::InvalidParameter {
            name: "effect size",
            value: effect_size,
            expected: "a finite value > 0",
        });
    }
    if !(alpha > 0.0 && alpha < 1.0) {
        return Err(PowerErr::InvalidParameter {
            name: "alpha",
            value: alpha,
            expected: "a value in (0, 1)",
        });
    }
    if test_family == TestFamily::OneWayAnova && num_groups < 2 {
        return Err(PowerErr::InvalidParameter {
            name: "number of groups",
            value: num_groups as f64,
            expected: "at least 2",
        });
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerResult {
    pub test_family: TestFamily,
    /// Continuous solver output before rounding
    pub required_n_per_group: f64,
    pub per_group: u64,
    pub total_n: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerCurvePoint {
    pub sample_size: usize,
    /// None when the power function could not be evaluated at this size
    pub power: Option<f64>,
}
