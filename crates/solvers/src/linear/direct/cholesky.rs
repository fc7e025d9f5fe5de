use stepwise_core::{Matrix, Vector};

use crate::linear::{
    Error, check_system,
    matrix::{check_symmetric, square_size},
};

use super::{Solution, back_substitute, forward_substitute};

/// Steps recorded by a Cholesky solve.
#[derive(Debug, Clone, PartialEq)]
pub struct Steps {
    /// Lower-triangular factor with `A = L·Lᵗ`.
    pub l: Matrix,

    /// Intermediate solution of `L·y = b`.
    pub y: Vector,
}

/// Factors a symmetric positive-definite matrix as `A = L·Lᵗ`.
///
/// # Errors
///
/// Returns [`Error::NotSymmetric`] if `a` differs from its transpose,
/// [`Error::NonPositiveDefinite`] if a diagonal radicand is not positive,
/// or a shape error if `a` is not square or is empty.
pub fn decompose(a: &Matrix) -> Result<Matrix, Error> {
    let n = square_size(a)?;
    if n == 0 {
        return Err(Error::Empty);
    }
    check_symmetric(a)?;

    let mut l = Matrix::zeros((n, n));
    for i in 0..n {
        for j in 0..=i {
            let sum: f64 = (0..j).map(|k| l[[i, k]] * l[[j, k]]).sum();
            if i == j {
                let radicand = a[[i, i]] - sum;
                if radicand <= 0.0 {
                    return Err(Error::NonPositiveDefinite { row: i, radicand });
                }
                l[[i, i]] = radicand.sqrt();
            } else {
                l[[i, j]] = (a[[i, j]] - sum) / l[[j, j]];
            }
        }
    }

    Ok(l)
}

/// Solves `A·x = b` through `L·y = b` then `Lᵗ·x = y`.
///
/// The uniform-system shortcut is never applied here.
///
/// # Errors
///
/// Returns the errors of [`decompose`], or a shape error if `b` does not
/// match `a`.
pub fn solve(a: &Matrix, b: &Vector) -> Result<Solution<Steps>, Error> {
    let n = check_system(a, b)?;

    let l = decompose(a)?;
    let y = forward_substitute(&l, b);
    let x = back_substitute(&l.t().to_owned(), &y);

    log::debug!("cholesky: solved system of size {n}");
    Ok(Solution::computed(x, Steps { l, y }))
}
