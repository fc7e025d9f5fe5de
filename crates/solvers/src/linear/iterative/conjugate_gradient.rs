use stepwise_core::{Action, Criterion, Matrix, Observer, Solution, Trace, Vector};

use crate::linear::{
    Error, check_system,
    matrix::{check_symmetric, residual},
};

/// Suggested iteration cap for Conjugate Gradient.
pub const DEFAULT_MAX_ITERS: usize = 1000;

/// One Conjugate Gradient iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Iteration number, starting at 1.
    pub iter: usize,

    /// Iterate after the step.
    pub x: Vector,

    /// Euclidean norm of the new residual `b - A·x`.
    pub residual_norm: f64,

    /// Step length along the search direction.
    pub alpha: f64,

    /// Weight of the previous direction in the next one.
    pub beta: f64,
}

/// Solves a symmetric positive-definite system with Conjugate Gradient.
///
/// Starting from `x = 0` with `r = d = b`, each iteration takes
/// `α = rᵗr / dᵗAd`, updates `x += α·d` and `r -= α·A·d`, then sets
/// `d = r + β·d` with `β = r_newᵗr_new / rᵗr`. The solver converges when
/// `‖r‖ < tolerance`, which is also checked before the first iteration.
///
/// # Errors
///
/// Returns [`Error::NotSymmetric`] if `a` is not symmetric,
/// [`Error::NonPositiveCurvature`] when `dᵗAd ≤ 0`,
/// [`Error::Diverged`] if an iterate becomes non-finite,
/// [`Error::NonConvergence`] when the iteration cap is reached, or a shape
/// error for non-square or mismatched input.
pub fn solve<O>(
    a: &Matrix,
    b: &Vector,
    criterion: &Criterion,
    mut observer: O,
) -> Result<Solution<Vector, Record>, Error>
where
    O: Observer<Record, Action>,
{
    let n = check_system(a, b)?;
    check_symmetric(a)?;

    let mut x = Vector::zeros(n);
    let mut r = residual(a, &x, b)?;
    let mut d = r.clone();
    let mut rr = r.dot(&r);
    let mut norm = rr.sqrt();
    let mut trace = Trace::new();

    if norm < criterion.tolerance() {
        log::debug!("conjugate gradient: initial residual {norm} within tolerance");
        return Ok(Solution::converged(x, 0, trace));
    }

    for iter in 1..=criterion.max_iters() {
        let ad = a.dot(&d);
        let curvature = d.dot(&ad);
        if curvature <= 0.0 {
            return Err(Error::NonPositiveCurvature { iter, curvature });
        }

        let alpha = rr / curvature;
        x.scaled_add(alpha, &d);
        r.scaled_add(-alpha, &ad);

        let rr_new = r.dot(&r);
        let beta = rr_new / rr;
        d = &d * beta + &r;
        rr = rr_new;
        norm = rr.sqrt();

        if x.iter().any(|v| !v.is_finite()) || !norm.is_finite() {
            return Err(Error::Diverged { iter });
        }

        let record = trace.push(Record {
            iter,
            x: x.clone(),
            residual_norm: norm,
            alpha,
            beta,
        });
        log::trace!("conjugate gradient: iteration {iter}, residual {norm}");

        if let Some(action) = observer.observe(record) {
            match action {
                Action::StopEarly => {
                    log::debug!("conjugate gradient: stopped by observer after {iter} iterations");
                    return Ok(Solution::stopped(x, iter, trace));
                }
            }
        }

        if norm < criterion.tolerance() {
            log::debug!("conjugate gradient: converged after {iter} iterations");
            return Ok(Solution::converged(x, iter, trace));
        }
    }

    Err(Error::NonConvergence {
        iters: criterion.max_iters(),
        error: norm,
    })
}

/// Runs Conjugate Gradient without observation.
///
/// # Errors
///
/// Returns the same errors as [`solve`].
pub fn solve_unobserved(
    a: &Matrix,
    b: &Vector,
    criterion: &Criterion,
) -> Result<Solution<Vector, Record>, Error> {
    solve(a, b, criterion, ())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use ndarray::{arr1, arr2};

    fn criterion() -> Criterion {
        Criterion::new(1e-10, DEFAULT_MAX_ITERS).unwrap()
    }

    #[test]
    fn solves_small_spd_system() {
        let a = arr2(&[[4.0, 1.0], [1.0, 3.0]]);
        let b = arr1(&[1.0, 2.0]);

        let solution = solve_unobserved(&a, &b, &criterion()).unwrap();
        assert!(solution.is_converged());
        assert!(solution.iters <= 3);
        assert_relative_eq!(solution.value[0], 1.0 / 11.0, epsilon = 1e-10);
        assert_relative_eq!(solution.value[1], 7.0 / 11.0, epsilon = 1e-10);

        let first = &solution.trace.as_slice()[0];
        assert_eq!(first.iter, 1);
        // r = d = b, so α = 5 / (bᵗAb) = 5 / 20.
        assert_relative_eq!(first.alpha, 0.25);
    }

    #[test]
    fn zero_rhs_converges_without_iterating() {
        let a = arr2(&[[4.0, 1.0], [1.0, 3.0]]);
        let b = arr1(&[0.0, 0.0]);

        let solution = solve_unobserved(&a, &b, &criterion()).unwrap();
        assert!(solution.is_converged());
        assert_eq!(solution.iters, 0);
        assert!(solution.trace.is_empty());
    }

    #[test]
    fn requires_symmetry() {
        let a = arr2(&[[4.0, 1.0], [2.0, 3.0]]);
        let b = arr1(&[1.0, 2.0]);
        assert_eq!(
            solve_unobserved(&a, &b, &criterion()).unwrap_err(),
            Error::NotSymmetric { row: 0, col: 1 }
        );
    }

    #[test]
    fn negative_definite_matrix_fails() {
        let a = arr2(&[[-2.0, 0.0], [0.0, -1.0]]);
        let b = arr1(&[1.0, 1.0]);
        assert!(matches!(
            solve_unobserved(&a, &b, &criterion()),
            Err(Error::NonPositiveCurvature { iter: 1, .. })
        ));
    }

    #[test]
    fn observer_sees_shrinking_residuals() {
        let a = arr2(&[
            [4.0, 1.0, 0.0, 0.0],
            [1.0, 4.0, 1.0, 0.0],
            [0.0, 1.0, 4.0, 1.0],
            [0.0, 0.0, 1.0, 4.0],
        ]);
        let b = arr1(&[1.0, 2.0, 3.0, 4.0]);

        let mut norms = Vec::new();
        let solution = solve(&a, &b, &criterion(), |record: &Record| {
            norms.push(record.residual_norm);
            None
        })
        .unwrap();

        assert_eq!(norms.len(), solution.iters);
        assert!(norms.last().is_some_and(|&n| n < 1e-10));
    }
}
