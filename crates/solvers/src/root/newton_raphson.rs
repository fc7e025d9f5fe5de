use stepwise_core::{Action, Criterion, Derivative, Observer, Solution, Trace};

use super::{Error, check_seed, evaluate, percent_error};

/// One Newton-Raphson step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    /// Iteration number, starting at 1.
    pub iter: usize,

    pub x_old: f64,
    pub x_new: f64,

    /// `f(x_old)`.
    pub fx: f64,

    /// `f'(x_old)`.
    pub dfx: f64,

    /// Percent change from `x_old` to `x_new`.
    pub error: f64,
}

/// Finds a root with Newton-Raphson steps `x_new = x - f(x) / f'(x)`.
///
/// The derivative comes from the equation's [`Derivative`] capability.
///
/// # Errors
///
/// Returns [`Error::ZeroDerivative`] when `f'(x)` is zero, an evaluation
/// error if `f` or `f'` fails or is non-finite, [`Error::NonFiniteSeed`]
/// for a non-finite start, or [`Error::NonConvergence`] at the cap.
pub fn solve<E, O>(
    equation: &E,
    x0: f64,
    criterion: &Criterion,
    mut observer: O,
) -> Result<Solution<f64, Record>, Error>
where
    E: Derivative,
    O: Observer<Record, Action>,
{
    let mut x = check_seed(x0)?;
    let mut trace = Trace::new();
    let mut error = f64::INFINITY;

    for iter in 1..=criterion.max_iters() {
        let fx = evaluate(equation, x)?;

        #[allow(clippy::float_cmp)]
        if fx == 0.0 {
            log::debug!("newton-raphson: landed on exact root {x}");
            return Ok(Solution::converged(x, iter - 1, trace));
        }

        let dfx = derivative(equation, x)?;
        #[allow(clippy::float_cmp)]
        if dfx == 0.0 {
            return Err(Error::ZeroDerivative { x });
        }

        let x_new = x - fx / dfx;
        error = percent_error(x, x_new);

        let record = trace.push(Record {
            iter,
            x_old: x,
            x_new,
            fx,
            dfx,
            error,
        });
        log::trace!("newton-raphson: iteration {iter}, x = {x_new}, error = {error}%");
        x = x_new;

        if let Some(action) = observer.observe(record) {
            match action {
                Action::StopEarly => {
                    log::debug!("newton-raphson: stopped by observer at x = {x}");
                    return Ok(Solution::stopped(x, iter, trace));
                }
            }
        }

        if error <= criterion.tolerance() {
            log::debug!("newton-raphson: converged to {x} after {iter} iterations");
            return Ok(Solution::converged(x, iter, trace));
        }
    }

    Err(Error::NonConvergence {
        iters: criterion.max_iters(),
        error,
    })
}

/// Runs Newton-Raphson without observation.
///
/// # Errors
///
/// Returns the same errors as [`solve`].
pub fn solve_unobserved<E: Derivative>(
    equation: &E,
    x0: f64,
    criterion: &Criterion,
) -> Result<Solution<f64, Record>, Error> {
    solve(equation, x0, criterion, ())
}

fn derivative<E: Derivative>(equation: &E, x: f64) -> Result<f64, Error> {
    let value = equation
        .derivative(x)
        .map_err(|err| Error::Equation(Box::new(err)))?;

    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::Evaluation { x, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use stepwise_core::FnEquation;

    use crate::root::DEFAULT_MAX_ITERS;

    fn square_minus_four() -> impl Derivative {
        FnEquation::new(|x: f64| x * x - 4.0).with_derivative(|x| 2.0 * x)
    }

    #[test]
    fn converges_to_two() {
        let criterion = Criterion::new(1e-6, DEFAULT_MAX_ITERS).unwrap();
        let solution = solve_unobserved(&square_minus_four(), 3.0, &criterion).unwrap();

        assert!(solution.is_converged());
        assert_relative_eq!(solution.value, 2.0, epsilon = 1e-12);
        assert!(solution.iters < 10);

        let first = solution.trace.as_slice()[0];
        assert_relative_eq!(first.x_old, 3.0);
        assert_relative_eq!(first.fx, 5.0);
        assert_relative_eq!(first.dfx, 6.0);
        assert_relative_eq!(first.x_new, 13.0 / 6.0);
    }

    #[test]
    fn error_shrinks_quadratically() {
        let criterion = Criterion::new(1e-12, DEFAULT_MAX_ITERS).unwrap();
        let solution = solve_unobserved(&square_minus_four(), 3.0, &criterion).unwrap();

        let errors: Vec<f64> = solution.trace.iter().map(|r| r.error).collect();
        assert!(errors.len() >= 4);

        // e[k+1] / e[k]² settles near 1 / (2·x·100) for f = x² - 4.
        for pair in errors.windows(2).skip(1).take(3) {
            let ratio = pair[1] / (pair[0] * pair[0]);
            assert!((0.001..0.01).contains(&ratio), "ratio {ratio}");
        }
    }

    #[test]
    fn zero_derivative_fails() {
        let criterion = Criterion::new(1e-6, DEFAULT_MAX_ITERS).unwrap();
        let result = solve_unobserved(&square_minus_four(), 0.0, &criterion);
        assert!(matches!(result, Err(Error::ZeroDerivative { x }) if x == 0.0));
    }

    #[test]
    fn exact_seed_root_needs_no_iterations() {
        let criterion = Criterion::new(1e-6, DEFAULT_MAX_ITERS).unwrap();
        let solution = solve_unobserved(&square_minus_four(), -2.0, &criterion).unwrap();
        assert_eq!(solution.value, -2.0);
        assert_eq!(solution.iters, 0);
    }

    #[test]
    fn non_finite_seed_fails() {
        let criterion = Criterion::new(1e-6, DEFAULT_MAX_ITERS).unwrap();
        assert!(matches!(
            solve_unobserved(&square_minus_four(), f64::NAN, &criterion),
            Err(Error::NonFiniteSeed { .. })
        ));
    }
}
