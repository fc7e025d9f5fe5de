use stepwise_core::{Action, Criterion, Equation, Observer, Solution, Trace};

use super::{Error, check_sign_change, evaluate, percent_error, validate_bracket};

/// One false-position step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    /// Iteration number, starting at 1.
    pub iter: usize,

    /// Left end of the bracket used by this step.
    pub xl: f64,

    /// Right end of the bracket used by this step.
    pub xr: f64,

    /// Where the secant through the bracket ends crosses zero.
    pub xm: f64,

    /// `f(xm)`.
    pub f_xm: f64,

    /// Percent change between `xm` and the bracket end it replaced.
    pub error: f64,
}

/// Finds a root with the method of false position (regula falsi).
///
/// Each step takes `xm = xr - f(xr)·(xl - xr) / (f(xl) - f(xr))`. When
/// `f(xm)` has the sign of `f(xr)`, `xm` replaces `xr`; otherwise it
/// replaces `xl`. The error is measured against the replaced end.
///
/// # Errors
///
/// Returns an error if the bracket is invalid or has no sign change, if an
/// evaluation fails or is non-finite, or if the iteration cap is reached.
pub fn solve<E, O>(
    equation: &E,
    bracket: [f64; 2],
    criterion: &Criterion,
    mut observer: O,
) -> Result<Solution<f64, Record>, Error>
where
    E: Equation,
    O: Observer<Record, Action>,
{
    let (mut xl, mut xr) = validate_bracket(bracket)?;
    let mut f_xl = evaluate(equation, xl)?;
    let mut f_xr = evaluate(equation, xr)?;
    let mut trace = Trace::new();

    #[allow(clippy::float_cmp)]
    if f_xl == 0.0 {
        return Ok(Solution::converged(xl, 0, trace));
    }
    #[allow(clippy::float_cmp)]
    if f_xr == 0.0 {
        return Ok(Solution::converged(xr, 0, trace));
    }
    check_sign_change(xl, xr, f_xl, f_xr)?;

    let mut error = f64::INFINITY;
    for iter in 1..=criterion.max_iters() {
        let xm = xr - f_xr * (xl - xr) / (f_xl - f_xr);
        let f_xm = evaluate(equation, xm)?;
        let (used_l, used_r) = (xl, xr);

        #[allow(clippy::float_cmp)]
        if f_xm != 0.0 && f_xm.signum() == f_xr.signum() {
            error = percent_error(xr, xm);
            xr = xm;
            f_xr = f_xm;
        } else {
            error = percent_error(xl, xm);
            xl = xm;
            f_xl = f_xm;
        }

        let record = trace.push(Record {
            iter,
            xl: used_l,
            xr: used_r,
            xm,
            f_xm,
            error,
        });
        log::trace!("false position: iteration {iter}, x = {xm}, error = {error}%");

        if let Some(action) = observer.observe(record) {
            match action {
                Action::StopEarly => {
                    log::debug!("false position: stopped by observer at x = {xm}");
                    return Ok(Solution::stopped(xm, iter, trace));
                }
            }
        }

        #[allow(clippy::float_cmp)]
        if f_xm == 0.0 || error <= criterion.tolerance() {
            log::debug!("false position: converged to {xm} after {iter} iterations");
            return Ok(Solution::converged(xm, iter, trace));
        }
    }

    Err(Error::NonConvergence {
        iters: criterion.max_iters(),
        error,
    })
}

/// Runs false position without observation.
///
/// # Errors
///
/// Returns the same errors as [`solve`].
pub fn solve_unobserved<E: Equation>(
    equation: &E,
    bracket: [f64; 2],
    criterion: &Criterion,
) -> Result<Solution<f64, Record>, Error> {
    solve(equation, bracket, criterion, ())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use stepwise_core::FnEquation;

    use crate::root::DEFAULT_MAX_ITERS;

    fn criterion() -> Criterion {
        Criterion::new(1e-6, DEFAULT_MAX_ITERS).unwrap()
    }

    #[test]
    fn finds_fourth_root_of_thirteen() {
        let f = FnEquation::new(|x: f64| x.powi(4) - 13.0);
        let solution = solve_unobserved(&f, [1.5, 2.0], &criterion()).unwrap();

        assert!(solution.is_converged());
        assert_relative_eq!(solution.value, 13.0_f64.powf(0.25), epsilon = 1e-6);
        assert!(solution.iters < DEFAULT_MAX_ITERS);
    }

    #[test]
    fn first_step_is_the_secant_crossing() {
        let f = FnEquation::new(|x: f64| x * x - 2.0);
        let solution = solve_unobserved(&f, [1.0, 2.0], &criterion()).unwrap();

        // Secant through (1, -1) and (2, 2) crosses zero at 4/3.
        let first = solution.trace.as_slice()[0];
        assert_relative_eq!(first.xm, 4.0 / 3.0);
        // f(4/3) < 0 shares the sign of f(xl), so xl is replaced.
        assert_relative_eq!(first.error, 25.0, epsilon = 1e-12);
        assert_relative_eq!(solution.value, 2.0_f64.sqrt(), epsilon = 1e-6);
    }

    #[test]
    fn missing_sign_change_fails() {
        let f = FnEquation::new(|x: f64| x * x + 1.0);
        assert!(matches!(
            solve_unobserved(&f, [0.0, 3.0], &criterion()),
            Err(Error::NoBracket { .. })
        ));
    }

    #[test]
    fn non_finite_bracket_fails() {
        let f = FnEquation::new(|x: f64| x);
        assert!(matches!(
            solve_unobserved(&f, [f64::NEG_INFINITY, 1.0], &criterion()),
            Err(Error::NonFiniteBracket { .. })
        ));
    }
}
