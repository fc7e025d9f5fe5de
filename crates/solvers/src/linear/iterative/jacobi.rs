use stepwise_core::{Action, Criterion, Matrix, Observer, Solution, Vector};

use crate::linear::Error;

use super::{
    Record,
    stationary::{Sweep, run},
};

/// Solves `A·x = b` with Jacobi iteration.
///
/// Each sweep computes `x_new[i] = (b[i] - Σ_{j≠i} A[i][j]·x_old[j]) / A[i][i]`
/// from the previous iterate only. The solver converges when every
/// component's relative change is within the criterion's tolerance.
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
    run(Sweep::Jacobi, a, b, criterion, observer)
}

/// Runs Jacobi iteration without observation.
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
    use stepwise_core::Status;

    fn criterion() -> Criterion {
        Criterion::new(1e-10, 200).unwrap()
    }

    #[test]
    fn first_sweep_uses_only_the_zero_guess() {
        let a = arr2(&[[4.0, 1.0], [2.0, 5.0]]);
        let b = arr1(&[8.0, 10.0]);
        let once = Criterion::new(1e-10, 1).unwrap();

        let result = solve_unobserved(&a, &b, &once);
        assert!(matches!(
            result,
            Err(Error::NonConvergence { iters: 1, .. })
        ));

        let mut first = None;
        let _ = solve(&a, &b, &once, |record: &Record| {
            first = Some(record.x.clone());
            None
        });
        assert_eq!(first, Some(arr1(&[2.0, 2.0])));
    }

    #[test]
    fn converges_on_diagonally_dominant_system() {
        let a = arr2(&[[4.0, 1.0], [2.0, 5.0]]);
        let b = arr1(&[6.0, 12.0]);

        let solution = solve_unobserved(&a, &b, &criterion()).unwrap();
        assert_eq!(solution.status, Status::Converged);
        assert_relative_eq!(solution.value[0], 1.0, epsilon = 1e-8);
        assert_relative_eq!(solution.value[1], 2.0, epsilon = 1e-8);
        assert_eq!(solution.trace.len(), solution.iters);
    }

    #[test]
    fn zero_diagonal_is_rejected() {
        let a = arr2(&[[0.0, 1.0], [1.0, 1.0]]);
        let b = arr1(&[1.0, 2.0]);
        assert_eq!(
            solve_unobserved(&a, &b, &criterion()).unwrap_err(),
            Error::ZeroPivot { row: 0 }
        );
    }

    #[test]
    fn divergent_system_hits_the_cap_or_overflows() {
        let a = arr2(&[[1.0, 5.0], [5.0, 1.0]]);
        let b = arr1(&[6.0, 6.0]);
        let result = solve_unobserved(&a, &b, &Criterion::new(1e-10, 50).unwrap());
        assert!(matches!(
            result,
            Err(Error::NonConvergence { .. } | Error::Diverged { .. })
        ));
    }

    #[test]
    fn observer_can_stop_early() {
        let a = arr2(&[[4.0, 1.0], [2.0, 5.0]]);
        let b = arr1(&[6.0, 12.0]);

        let solution = solve(&a, &b, &criterion(), |record: &Record| {
            (record.iter == 3).then_some(Action::StopEarly)
        })
        .unwrap();

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.iters, 3);
        assert_eq!(solution.trace.len(), 3);
    }
}
