use stepwise_core::{Action, Criterion, Matrix, Observer, Solution, Vector};

use crate::linear::Error;

use super::{
    Record,
    stationary::{Sweep, run},
};

/// Solves `A·x = b` with Gauss-Seidel iteration.
///
/// Like [`jacobi`](super::jacobi), except that each component is computed
/// from the components already updated earlier in the same sweep.
///
/// # Errors
///
/// Returns [`Error::ZeroPivot`] for a zero diagonal entry,
/// [`Error::Diverged`] if an iterate becomes non-finite,
/// [`Error::NonConvergence`] when the iteration cap is reached, or a shape
/// error for non-square or mismatched input.
pub fn solve<O>(
    a: &Matrix,
    b: &Vector,
    criterion: &Criterion,
    observer: O,
) -> Result<Solution<Vector, Record>, Error>
where
    O: Observer<Record, Action>,
{
    run(Sweep::GaussSeidel, a, b, criterion, observer)
}

/// Runs Gauss-Seidel iteration without observation.
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
