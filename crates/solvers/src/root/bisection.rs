use stepwise_core::{Action, Criterion, Equation, Observer, Solution, Trace};

use super::{Error, check_sign_change, evaluate, percent_error, validate_bracket};

/// One bisection step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    /// Iteration number, starting at 1.
    pub iter: usize,

    /// Left end of the bracket this step split.
    pub xl: f64,

    /// Right end of the bracket this step split.
    pub xr: f64,

    /// Midpoint.
    pub xm: f64,

    /// `f(xm)`.
    pub f_xm: f64,

    /// Percent change between `xm` and the bracket end it replaced.
    pub error: f64,
}

/// Finds a root by repeatedly halving a sign-change bracket.
///
/// The bracket may be given in either order. The half that keeps the sign
/// change survives each step.
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
    let f_xr = evaluate(equation, xr)?;
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
        let xm = 0.5 * (xl + xr);
        let f_xm = evaluate(equation, xm)?;
        let (split_l, split_r) = (xl, xr);

        #[allow(clippy::float_cmp)]
        if f_xl.signum() == f_xm.signum() {
            error = percent_error(xl, xm);
            xl = xm;
            f_xl = f_xm;
        } else {
            error = percent_error(xr, xm);
            xr = xm;
        }

        let record = trace.push(Record {
            iter,
            xl: split_l,
            xr: split_r,
            xm,
            f_xm,
            error,
        });
        log::trace!("bisection: iteration {iter}, x = {xm}, error = {error}%");

        if let Some(action) = observer.observe(record) {
            match action {
                Action::StopEarly => {
                    log::debug!("bisection: stopped by observer at x = {xm}");
                    return Ok(Solution::stopped(xm, iter, trace));
                }
            }
        }

        #[allow(clippy::float_cmp)]
        if f_xm == 0.0 || error <= criterion.tolerance() {
            log::debug!("bisection: converged to {xm} after {iter} iterations");
            return Ok(Solution::converged(xm, iter, trace));
        }
    }

    Err(Error::NonConvergence {
        iters: criterion.max_iters(),
        error,
    })
}

/// Runs bisection without observation.
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
    use stepwise_core::{FnEquation, Status};

    use crate::root::DEFAULT_MAX_ITERS;

    fn criterion(tolerance: f64) -> Criterion {
        Criterion::new(tolerance, DEFAULT_MAX_ITERS).unwrap()
    }

    #[test]
    fn finds_square_root_of_two() {
        let f = FnEquation::new(|x: f64| x * x - 2.0);
        let solution = solve_unobserved(&f, [0.0, 2.0], &criterion(1e-6)).unwrap();

        assert_eq!(solution.status, Status::Converged);
        assert_relative_eq!(solution.value, 2.0_f64.sqrt(), epsilon = 1e-5);
    }

    #[test]
    fn bracket_halves_each_iteration() {
        let f = FnEquation::new(|x: f64| x * x - 2.0);
        let solution = solve_unobserved(&f, [2.0, 0.0], &criterion(1e-6)).unwrap();

        let widths: Vec<f64> = solution.trace.iter().map(|r| r.xr - r.xl).collect();
        for pair in widths.windows(2) {
            assert_relative_eq!(pair[1], pair[0] / 2.0);
        }
        assert_relative_eq!(widths[0], 2.0);
    }

    #[test]
    fn exact_midpoint_root_converges() {
        let f = FnEquation::new(|x: f64| x * x - 1.0);
        let solution = solve_unobserved(&f, [0.0, 2.0], &criterion(1e-12)).unwrap();
        assert_eq!(solution.value, 1.0);
        assert_eq!(solution.iters, 1);
    }

    #[test]
    fn exact_endpoint_root_converges_without_iterating() {
        let f = FnEquation::new(|x: f64| x - 3.0);
        let solution = solve_unobserved(&f, [3.0, 5.0], &criterion(1e-6)).unwrap();
        assert_eq!(solution.value, 3.0);
        assert_eq!(solution.iters, 0);
        assert!(solution.trace.is_empty());
    }

    #[test]
    fn missing_sign_change_fails() {
        let f = FnEquation::new(|x: f64| x * x + 1.0);
        assert!(matches!(
            solve_unobserved(&f, [-1.0, 1.0], &criterion(1e-6)),
            Err(Error::NoBracket { .. })
        ));
    }

    #[test]
    fn cap_is_an_error() {
        let f = FnEquation::new(|x: f64| x * x - 2.0);
        let tight = Criterion::new(1e-15, 5).unwrap();
        assert!(matches!(
            solve_unobserved(&f, [0.0, 2.0], &tight),
            Err(Error::NonConvergence { iters: 5, .. })
        ));
    }

    #[test]
    fn observer_can_stop_early() {
        let f = FnEquation::new(|x: f64| x * x - 2.0);
        let solution = solve(&f, [0.0, 2.0], &criterion(1e-12), |r: &Record| {
            (r.iter == 2).then_some(Action::StopEarly)
        })
        .unwrap();

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.iters, 2);
        assert_relative_eq!(solution.value, 1.5);
    }
}
