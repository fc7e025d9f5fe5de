use stepwise_core::{Action, Criterion, Equation, Observer, Solution, Trace};

use super::{Error, check_seed, evaluate, percent_error};

/// One secant step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    /// Iteration number, starting at 1.
    pub iter: usize,

    pub x_prev: f64,
    pub x_old: f64,
    pub x_new: f64,

    /// Percent change from `x_old` to `x_new`.
    pub error: f64,
}

/// Finds a root with secant steps from two seeds `[x_prev, x_old]`.
///
/// Each step takes
/// `x_new = x_old - f(x_old)·(x_old - x_prev) / (f(x_old) - f(x_prev))`.
///
/// # Errors
///
/// Returns [`Error::ZeroSlope`] when `f(x_old) == f(x_prev)`, an evaluation
/// error if `f` fails or is non-finite, [`Error::NonFiniteSeed`] for a
/// non-finite seed, or [`Error::NonConvergence`] at the cap.
pub fn solve<E, O>(
    equation: &E,
    seeds: [f64; 2],
    criterion: &Criterion,
    mut observer: O,
) -> Result<Solution<f64, Record>, Error>
where
    E: Equation,
    O: Observer<Record, Action>,
{
    let mut x_prev = check_seed(seeds[0])?;
    let mut x_old = check_seed(seeds[1])?;
    let mut f_prev = evaluate(equation, x_prev)?;
    let mut f_old = evaluate(equation, x_old)?;
    let mut trace = Trace::new();

    #[allow(clippy::float_cmp)]
    if f_old == 0.0 {
        return Ok(Solution::converged(x_old, 0, trace));
    }
    #[allow(clippy::float_cmp)]
    if f_prev == 0.0 {
        return Ok(Solution::converged(x_prev, 0, trace));
    }

    let mut error = f64::INFINITY;
    for iter in 1..=criterion.max_iters() {
        #[allow(clippy::float_cmp)]
        if f_old == f_prev {
            return Err(Error::ZeroSlope {
                x0: x_prev,
                x1: x_old,
            });
        }

        let x_new = x_old - f_old * (x_old - x_prev) / (f_old - f_prev);
        let f_new = evaluate(equation, x_new)?;
        error = percent_error(x_old, x_new);

        let record = trace.push(Record {
            iter,
            x_prev,
            x_old,
            x_new,
            error,
        });
        log::trace!("secant: iteration {iter}, x = {x_new}, error = {error}%");

        (x_prev, f_prev) = (x_old, f_old);
        (x_old, f_old) = (x_new, f_new);

        if let Some(action) = observer.observe(record) {
            match action {
                Action::StopEarly => {
                    log::debug!("secant: stopped by observer at x = {x_new}");
                    return Ok(Solution::stopped(x_new, iter, trace));
                }
            }
        }

        #[allow(clippy::float_cmp)]
        if f_new == 0.0 || error <= criterion.tolerance() {
            log::debug!("secant: converged to {x_new} after {iter} iterations");
            return Ok(Solution::converged(x_new, iter, trace));
        }
    }

    Err(Error::NonConvergence {
        iters: criterion.max_iters(),
        error,
    })
}

/// Runs the secant method without observation.
///
/// # Errors
///
/// Returns the same errors as [`solve`].
pub fn solve_unobserved<E: Equation>(
    equation: &E,
    seeds: [f64; 2],
    criterion: &Criterion,
) -> Result<Solution<f64, Record>, Error> {
    solve(equation, seeds, criterion, ())
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
    fn finds_cube_root() {
        let f = FnEquation::new(|x: f64| x.powi(3) - 27.0);
        let solution = solve_unobserved(&f, [2.0, 4.0], &criterion()).unwrap();

        assert!(solution.is_converged());
        assert_relative_eq!(solution.value, 3.0, epsilon = 1e-8);
    }

    #[test]
    fn seeds_shift_each_step() {
        let f = FnEquation::new(|x: f64| x * x - 2.0);
        let solution = solve_unobserved(&f, [1.0, 2.0], &criterion()).unwrap();

        let records = solution.trace.as_slice();
        assert!(records.len() >= 2);
        assert_relative_eq!(records[0].x_new, 4.0 / 3.0);
        assert_relative_eq!(records[1].x_prev, records[0].x_old);
        assert_relative_eq!(records[1].x_old, records[0].x_new);
    }

    #[test]
    fn equal_values_are_a_zero_slope() {
        let f = FnEquation::new(|x: f64| x * x - 2.0);
        assert!(matches!(
            solve_unobserved(&f, [-1.0, 1.0], &criterion()),
            Err(Error::ZeroSlope { .. })
        ));
    }

    #[test]
    fn cap_is_an_error() {
        let f = FnEquation::new(|x: f64| x.powi(3) - 27.0);
        let capped = Criterion::new(1e-12, 2).unwrap();
        assert!(matches!(
            solve_unobserved(&f, [2.0, 4.0], &capped),
            Err(Error::NonConvergence { iters: 2, .. })
        ));
    }
}
