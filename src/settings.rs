//----------------------------------------
// Solver and sweep settings
//----------------------------------------
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsErr {
    #[error("could not parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Controls the bracketing bisection used for sample sizes and quantiles
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverSettings {
    /// Stop once the bracket is narrower than tol / 2 or |f(x) - target| < tol
    pub tol: f64,
    pub max_iterations: usize,
    /// Number of times the upper bound may be doubled while bracketing
    pub max_expansions: usize,
    /// Smallest per-group sample size the solver will consider
    pub min_sample_size: f64,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            tol: 1e-10,
            max_iterations: 200,
            max_expansions: 40,
            min_sample_size: 2.0,
        }
    }
}

impl SolverSettings {
    pub fn validate(&self) -> Result<(), SettingsErr> {
        if !(self.tol > 0.0) || !self.tol.is_finite() {
            return Err(SettingsErr::Invalid {
                field: "solver.tol",
                reason: format!("must be a positive number; got {}", self.tol),
            });
        }
        if self.max_iterations == 0 {
            return Err(SettingsErr::Invalid {
                field: "solver.max_iterations",
                reason: String::from("must be at least 1"),
            });
        }
        if !(self.min_sample_size >= 2.0) || !self.min_sample_size.is_finite() {
            return Err(SettingsErr::Invalid {
                field: "solver.min_sample_size",
                reason: format!("must be at least 2; got {}", self.min_sample_size),
            });
        }
        Ok(())
    }
}

/// Per-group sample sizes swept when drawing a power curve, `start..end`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepSettings {
    pub start: usize,
    pub end: usize,
}

impl Default for SweepSettings {
    fn default() -> Self {
        Self { start: 10, end: 300 }
    }
}

impl SweepSettings {
    pub fn validate(&self) -> Result<(), SettingsErr> {
        if self.start >= self.end {
            return Err(SettingsErr::Invalid {
                field: "sweep",
                reason: format!("start ({}) must be below end ({})", self.start, self.end),
            });
        }
        Ok(())
    }

    pub fn sample_sizes(&self) -> Vec<usize> {
        (self.start..self.end).collect()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub solver: SolverSettings,
    pub sweep: SweepSettings,
}

impl Settings {
    /// Parses settings from JSON; omitted fields keep their defaults
    pub fn from_json_str(json: &str) -> Result<Settings, SettingsErr> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsErr> {
        self.solver.validate()?;
        self.sweep.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.sweep.sample_sizes().len(), 290);
        assert_eq!(settings.sweep.sample_sizes()[0], 10);
        assert_eq!(settings.sweep.sample_sizes()[289], 299);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let json = r#"{ "solver": { "tol": 1e-6 }, "sweep": { "end": 50 } }"#;
        let settings = Settings::from_json_str(json).expect("failed to parse settings");
        assert_eq!(settings.solver.tol, 1e-6);
        assert_eq!(settings.solver.max_iterations, 200);
        assert_eq!(settings.sweep.start, 10);
        assert_eq!(settings.sweep.end, 50);
    }

    #[test]
    fn empty_sweep_rejected() {
        if let Err(e) = Settings::from_json_str(r#"{ "sweep": { "start": 30, "end": 30 } }"#) {
            assert_eq!(
                String::from("invalid setting `sweep`: start (30) must be below end (30)"),
                format!("{}", e)
            );
        } else {
            panic!()
        }
    }

    #[test]
    fn bad_json_is_parse_error() {
        assert!(matches!(
            Settings::from_json_str("{ not json"),
            Err(SettingsErr::Parse(_))
        ));
    }

    #[test]
    fn nonpositive_tol_rejected() {
        let settings = SolverSettings {
            tol: 0.0,
            ..SolverSettings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsErr::Invalid { field: "solver.tol", .. })
        ));
    }
}
