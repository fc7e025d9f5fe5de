use stepwise_core::{Matrix, Vector};

use crate::linear::{
    Error, check_system,
    matrix::{pivot_row, swap_rows},
};

use super::{Pivoting, Solution, back_substitute, uniform_shortcut};

/// Augmented-matrix snapshots recorded by the elimination solvers.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Steps {
    /// The initial `[A|b]` followed by one snapshot per pivot column.
    pub snapshots: Vec<Snapshot>,
}

/// The augmented matrix after one step.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Pivot column just processed, or `None` for the initial matrix.
    pub column: Option<usize>,

    /// Rows exchanged before eliminating, if any.
    pub swap: Option<(usize, usize)>,

    /// The augmented matrix `[A|b]` after the step.
    pub augmented: Matrix,
}

impl Steps {
    pub(crate) fn initial(augmented: &Matrix) -> Self {
        Self {
            snapshots: vec![Snapshot {
                column: None,
                swap: None,
                augmented: augmented.clone(),
            }],
        }
    }

    pub(crate) fn record(&mut self, column: usize, swap: Option<(usize, usize)>, m: &Matrix) {
        self.snapshots.push(Snapshot {
            column: Some(column),
            swap,
            augmented: m.clone(),
        });
    }
}

/// Solves `A·x = b` by Gaussian elimination and back substitution.
///
/// # Errors
///
/// With [`Pivoting::Partial`], returns [`Error::SingularMatrix`] when a
/// column has no non-zero pivot candidate. With [`Pivoting::None`], returns
/// [`Error::ZeroPivot`] at the first zero pivot. Shape errors are returned
/// for non-square or mismatched input.
pub fn solve(a: &Matrix, b: &Vector, pivoting: Pivoting) -> Result<Solution<Steps>, Error> {
    let n = check_system(a, b)?;

    if let Some(x) = uniform_shortcut(a, b) {
        log::debug!("gauss: uniform system of size {n}, shortcut applied");
        return Ok(Solution::shortcut(x));
    }

    let mut m = augment(a, b);
    let mut steps = Steps::initial(&m);

    for k in 0..n {
        let swap = select_pivot(&mut m, k, pivoting)?;
        let pivot = m[[k, k]];

        for i in (k + 1)..n {
            let factor = m[[i, k]] / pivot;
            for j in k..=n {
                let delta = factor * m[[k, j]];
                m[[i, j]] -= delta;
            }
        }

        log::trace!("gauss: eliminated column {k}");
        steps.record(k, swap, &m);
    }

    let upper = m.slice(ndarray::s![.., ..n]).to_owned();
    let rhs = m.column(n).to_owned();
    let x = back_substitute(&upper, &rhs);

    log::debug!("gauss: solved system of size {n}");
    Ok(Solution::computed(x, steps))
}

/// Builds the augmented matrix `[A|b]`.
pub(crate) fn augment(a: &Matrix, b: &Vector) -> Matrix {
    let n = a.nrows();
    let mut m = Matrix::zeros((n, n + 1));
    m.slice_mut(ndarray::s![.., ..n]).assign(a);
    m.column_mut(n).assign(b);
    m
}

/// Moves a usable pivot into row `k` and returns the swap made, if any.
pub(crate) fn select_pivot(
    m: &mut Matrix,
    k: usize,
    pivoting: Pivoting,
) -> Result<Option<(usize, usize)>, Error> {
    match pivoting {
        Pivoting::Partial => {
            let p = pivot_row(m, k, k);

            #[allow(clippy::float_cmp)]
            if m[[p, k]] == 0.0 {
                return Err(Error::SingularMatrix);
            }

            if p == k {
                Ok(None)
            } else {
                swap_rows(m, k, p);
                Ok(Some((k, p)))
            }
        }
        Pivoting::None => {
            #[allow(clippy::float_cmp)]
            if m[[k, k]] == 0.0 {
                return Err(Error::ZeroPivot { row: k });
            }
            Ok(None)
        }
    }
}
