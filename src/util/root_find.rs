use crate::settings::SolverSettings;
use crate::util::error::RootFindErr;
use tracing::{debug, trace};

/// Given a monotonically increasing function f(x) and lower bound, finds
/// value x' to the right of the lower bound such that f(x') = target.
/// Evaluation errors from f are passed through untouched, so callers can
/// tell a failed evaluation apart from a failed search.
pub fn root_find_monotonic<F, E>(
    f: F,
    lower_bound: f64,
    target: f64,
    settings: &SolverSettings,
) -> Result<f64, E>
where
    F: Fn(f64) -> Result<f64, E>,
    E: From<RootFindErr>,
{
    let tol = settings.tol;
    if f(lower_bound)? >= target {
        return Err(RootFindErr::BadLowerBound.into());
    }

    //----------------------------------------
    // Set window for search
    let mut lower_bound = lower_bound;
    let mut upper_bound = lower_bound;
    let mut expansions = 0;
    while f(upper_bound)? < target {
        if expansions == settings.max_expansions {
            return Err(RootFindErr::NoBracket {
                target,
                expansions,
                upper_bound,
            }
            .into());
        }
        lower_bound = upper_bound;
        upper_bound *= 2.;
        upper_bound += 1.; // In case lower_bound is zero
        expansions += 1;
    }
    debug!(lower_bound, upper_bound, expansions, target, "bracketed root");

    //----------------------------------------
    // Perform search
    let mut x = (lower_bound + upper_bound) / 2.;
    let mut y = f(x)?;
    let mut iterations = 0;
    while (lower_bound - upper_bound).abs() > tol / 2. && (y - target).abs() > tol {
        if iterations == settings.max_iterations {
            return Err(RootFindErr::MaxIterations { iterations, x, tol }.into());
        }
        if y <= target {
            lower_bound = x;
        } else {
            upper_bound = x;
        }
        x = (lower_bound + upper_bound) / 2.;
        y = f(x)?;
        iterations += 1;
        trace!(x, y, iterations, "bisection step");
    }
    Ok(x)
}

#[cfg(test)]
mod tests {

    use super::*;

    fn infallible(x: f64) -> Result<f64, RootFindErr> {
        Ok(x)
    }

    #[test]
    fn basic_linear_root_find() {
        let res = root_find_monotonic(infallible, 0.0, 3., &SolverSettings::default())
            .expect("failed to perform linear root find");
        assert!((res - 3.0).abs() < 0.001);
    }

    #[test]
    fn basic_quadratic_root_find() {
        let f = |x: f64| -> Result<f64, RootFindErr> { Ok(x * x) };
        let res = root_find_monotonic(f, 0.0, 9., &SolverSettings::default())
            .expect("failed to perform quadratic root find");
        assert!((res - 3.0).abs() < 0.001);
    }

    #[test]
    fn nonzero_lower_bound() {
        let f = |x: f64| -> Result<f64, RootFindErr> { Ok(x.ln()) };
        let res = root_find_monotonic(f, 2.0, 4.0, &SolverSettings::default())
            .expect("failed to perform log root find");
        assert!((res - 4.0_f64.exp()).abs() < 0.000001);
    }

    #[test]
    fn bad_lower_bound() {
        let res = root_find_monotonic(infallible, 5.0, 3., &SolverSettings::default());
        assert_eq!(res, Err(RootFindErr::BadLowerBound));
    }

    #[test]
    fn unreachable_target() {
        let f = |x: f64| -> Result<f64, RootFindErr> { Ok(1. - 1. / (1. + x)) };
        let settings = SolverSettings {
            max_expansions: 5,
            ..SolverSettings::default()
        };
        let res = root_find_monotonic(f, 0.0, 2.0, &settings);
        assert!(matches!(
            res,
            Err(RootFindErr::NoBracket { expansions: 5, .. })
        ));
    }

    #[test]
    fn iteration_budget() {
        let settings = SolverSettings {
            max_iterations: 3,
            ..SolverSettings::default()
        };
        let res = root_find_monotonic(infallible, 0.0, 3.3, &settings);
        assert!(matches!(
            res,
            Err(RootFindErr::MaxIterations { iterations: 3, .. })
        ));
    }

    #[test]
    fn evaluation_error_passes_through() {
        #[derive(Debug, PartialEq)]
        enum TestErr {
            Eval,
            Search(RootFindErr),
        }
        impl From<RootFindErr> for TestErr {
            fn from(e: RootFindErr) -> Self {
                TestErr::Search(e)
            }
        }
        let f = |x: f64| if x > 10. { Err(TestErr::Eval) } else { Ok(x) };
        let res = root_find_monotonic(f, 0.0, 50., &SolverSettings::default());
        assert_eq!(res, Err(TestErr::Eval));
    }
}
