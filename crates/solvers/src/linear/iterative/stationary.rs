use stepwise_core::{Action, Criterion, Matrix, Observer, Solution, Trace, Vector};

use crate::linear::{Error, check_system};

use super::{Record, component_errors};

/// How a sweep reads the components it has already updated.
#[derive(Debug, Clone, Copy)]
pub(super) enum Sweep {
    Jacobi,
    GaussSeidel,
}

impl Sweep {
    fn name(self) -> &'static str {
        match self {
            Sweep::Jacobi => "jacobi",
            Sweep::GaussSeidel => "gauss-seidel",
        }
    }

    fn apply(self, a: &Matrix, b: &Vector, x: &Vector) -> Vector {
        let n = x.len();
        let mut next = x.clone();
        for i in 0..n {
            let source = match self {
                Sweep::Jacobi => x,
                Sweep::GaussSeidel => &next,
            };
            let sum: f64 = (0..n)
                .filter(|&j| j != i)
                .map(|j| a[[i, j]] * source[j])
                .sum();
            next[i] = (b[i] - sum) / a[[i, i]];
        }
        next
    }
}

/// Runs Jacobi or Gauss-Seidel sweeps from `x = 0`.
pub(super) fn run<O>(
    sweep: Sweep,
    a: &Matrix,
    b: &Vector,
    criterion: &Criterion,
    mut observer: O,
) -> Result<Solution<Vector, Record>, Error>
where
    O: Observer<Record, Action>,
{
    let n = check_system(a, b)?;

    #[allow(clippy::float_cmp)]
    if let Some(row) = (0..n).find(|&i| a[[i, i]] == 0.0) {
        return Err(Error::ZeroPivot { row });
    }

    let mut x = Vector::zeros(n);
    let mut trace = Trace::new();
    let mut max_error = f64::INFINITY;

    for iter in 1..=criterion.max_iters() {
        let next = sweep.apply(a, b, &x);
        if next.iter().any(|v| !v.is_finite()) {
            return Err(Error::Diverged { iter });
        }

        let errors = component_errors(&x, &next);
        x = next;

        let record = trace.push(Record {
            iter,
            x: x.clone(),
            errors,
        });
        max_error = record.max_error();
        log::trace!("{}: sweep {iter}, max error {max_error}", sweep.name());

        if let Some(action) = observer.observe(record) {
            match action {
                Action::StopEarly => {
                    log::debug!("{}: stopped by observer after {iter} sweeps", sweep.name());
                    return Ok(Solution::stopped(x, iter, trace));
                }
            }
        }

        if max_error <= criterion.tolerance() {
            log::debug!("{}: converged after {iter} sweeps", sweep.name());
            return Ok(Solution::converged(x, iter, trace));
        }
    }

    Err(Error::NonConvergence {
        iters: criterion.max_iters(),
        error: max_error,
    })
}
