use stepwise_core::{Action, Criterion, Equation, Observer, Solution, Trace};

use super::{Error, check_seed, evaluate, percent_error};

/// Conventional starting value for fixed-point iteration.
pub const DEFAULT_SEED: f64 = 1.0;

/// One fixed-point step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    /// Iteration number, starting at 1.
    pub iter: usize,

    /// New iterate `g(x)`.
    pub x: f64,

    /// Percent change from the previous iterate.
    pub error: f64,
}

/// Finds a fixed point `x = g(x)` by repeated substitution.
///
/// The equation passed here is `g`, not `f`. Convergence requires
/// `|g'(x)| < 1` near the fixed point; otherwise the iterates wander until
/// the cap or an evaluation error stops them.
///
/// # Errors
///
/// Returns an evaluation error if `g` fails or is non-finite,
/// [`Error::NonFiniteSeed`] for a non-finite seed, or
/// [`Error::NonConvergence`] at the cap.
pub fn solve<E, O>(
    g: &E,
    seed: f64,
    criterion: &Criterion,
    mut observer: O,
) -> Result<Solution<f64, Record>, Error>
where
    E: Equation,
    O: Observer<Record, Action>,
{
    let mut x = check_seed(seed)?;
    let mut trace = Trace::new();
    let mut error = f64::INFINITY;

    for iter in 1..=criterion.max_iters() {
        let next = evaluate(g, x)?;
        error = percent_error(x, next);
        x = next;

        let record = trace.push(Record { iter, x, error });
        log::trace!("one-point: iteration {iter}, x = {x}, error = {error}%");

        if let Some(action) = observer.observe(record) {
            match action {
                Action::StopEarly => {
                    log::debug!("one-point: stopped by observer at x = {x}");
                    return Ok(Solution::stopped(x, iter, trace));
                }
            }
        }

        if error <= criterion.tolerance() {
            log::debug!("one-point: converged to {x} after {iter} iterations");
            return Ok(Solution::converged(x, iter, trace));
        }
    }

    Err(Error::NonConvergence {
        iters: criterion.max_iters(),
        error,
    })
}

/// Runs fixed-point iteration without observation.
///
/// # Errors
///
/// Returns the same errors as [`solve`].
pub fn solve_unobserved<E: Equation>(
    g: &E,
    seed: f64,
    criterion: &Criterion,
) -> Result<Solution<f64, Record>, Error> {
    solve(g, seed, criterion, ())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use stepwise_core::FnEquation;

    #[test]
    fn finds_fixed_point_of_cosine() {
        let g = FnEquation::new(f64::cos);
        let criterion = Criterion::new(1e-6, 200).unwrap();

        let solution = solve_unobserved(&g, DEFAULT_SEED, &criterion).unwrap();
        assert!(solution.is_converged());
        assert_relative_eq!(solution.value, solution.value.cos(), epsilon = 1e-7);
        assert_relative_eq!(solution.value, 0.739_085_133, epsilon = 1e-7);
    }

    #[test]
    fn records_each_substitution() {
        let g = FnEquation::new(|x: f64| 0.5 * x + 1.0);
        let criterion = Criterion::new(1e-3, 100).unwrap();

        let solution = solve_unobserved(&g, 0.0, &criterion).unwrap();
        let records = solution.trace.as_slice();
        assert_relative_eq!(records[0].x, 1.0);
        assert_relative_eq!(records[0].error, 100.0);
        assert_relative_eq!(records[1].x, 1.5);
        assert_relative_eq!(solution.value, 2.0, epsilon = 1e-4);
    }

    #[test]
    fn divergent_iteration_is_capped() {
        let g = FnEquation::new(|x: f64| 2.0 * x + 1.0);
        let criterion = Criterion::new(1e-6, 20).unwrap();
        assert!(matches!(
            solve_unobserved(&g, DEFAULT_SEED, &criterion),
            Err(Error::NonConvergence { iters: 20, .. })
        ));
    }
}
