//! Dense matrix operations.
//!
//! Determinants use cofactor expansion up to `3x3` and partial-pivot
//! elimination above that. A determinant is reported as exactly `0.0` when
//! elimination meets a column with no non-zero pivot; no tolerance is
//! applied anywhere.

use stepwise_core::{Matrix, Vector};

use super::Error;

/// Largest size for which determinants use cofactor expansion.
const EXPANSION_LIMIT: usize = 3;

/// Returns the size of a square matrix.
///
/// # Errors
///
/// Returns [`Error::NotSquare`] if `a` is not square.
pub fn square_size(a: &Matrix) -> Result<usize, Error> {
    let (rows, cols) = a.dim();
    if rows == cols {
        Ok(rows)
    } else {
        Err(Error::NotSquare { rows, cols })
    }
}

/// Computes the determinant of a square matrix.
///
/// The determinant of the empty matrix is `1.0`.
///
/// # Errors
///
/// Returns [`Error::NotSquare`] if `a` is not square.
pub fn determinant(a: &Matrix) -> Result<f64, Error> {
    let n = square_size(a)?;
    if n <= EXPANSION_LIMIT {
        Ok(expand(a))
    } else {
        Ok(eliminate(a.clone()))
    }
}

/// Returns `a` with row `row` and column `col` removed.
///
/// # Errors
///
/// Returns an error if `a` is not square, is smaller than `2x2`, or the
/// indices are out of range.
pub fn minor(a: &Matrix, row: usize, col: usize) -> Result<Matrix, Error> {
    let n = square_size(a)?;
    if n < 2 {
        return Err(Error::TooSmall { size: n, min: 2 });
    }
    if row >= n || col >= n {
        return Err(Error::IndexOutOfRange { row, col, size: n });
    }
    Ok(strike(a, row, col))
}

/// Computes the signed cofactor `(-1)^(row+col) · det(minor(a, row, col))`.
///
/// # Errors
///
/// Returns the same errors as [`minor`].
pub fn cofactor(a: &Matrix, row: usize, col: usize) -> Result<f64, Error> {
    let m = minor(a, row, col)?;
    Ok(sign(row + col) * determinant(&m)?)
}

/// Computes the adjugate, the transpose of the cofactor matrix.
///
/// The adjugate of a `1x1` matrix is `[[1]]`.
///
/// # Errors
///
/// Returns an error if `a` is not square or is empty.
pub fn adjugate(a: &Matrix) -> Result<Matrix, Error> {
    let n = square_size(a)?;
    match n {
        0 => Err(Error::Empty),
        1 => Ok(Matrix::ones((1, 1))),
        _ => {
            let mut adj = Matrix::zeros((n, n));
            for i in 0..n {
                for j in 0..n {
                    adj[[j, i]] = sign(i + j) * determinant(&strike(a, i, j))?;
                }
            }
            Ok(adj)
        }
    }
}

/// Computes the inverse as `adjugate(a) / det(a)`.
///
/// # Errors
///
/// Returns [`Error::SingularMatrix`] if the determinant is zero, or a shape
/// error if `a` is not square or is empty.
pub fn inverse(a: &Matrix) -> Result<Matrix, Error> {
    let det = determinant(a)?;
    #[allow(clippy::float_cmp)]
    if det == 0.0 {
        return Err(Error::SingularMatrix);
    }
    Ok(adjugate(a)? / det)
}

/// Returns the transpose of `a`.
#[must_use]
pub fn transpose(a: &Matrix) -> Matrix {
    a.t().to_owned()
}

/// Returns the `n x n` identity matrix.
#[must_use]
pub fn identity(n: usize) -> Matrix {
    Matrix::eye(n)
}

/// Computes the product `a · b`.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] if the inner dimensions differ.
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix, Error> {
    if a.ncols() != b.nrows() {
        return Err(Error::DimensionMismatch {
            expected: a.ncols(),
            actual: b.nrows(),
        });
    }
    Ok(a.dot(b))
}

/// Computes the product `a · x`.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] if `x` does not match the columns of `a`.
pub fn multiply_vector(a: &Matrix, x: &Vector) -> Result<Vector, Error> {
    if a.ncols() != x.len() {
        return Err(Error::DimensionMismatch {
            expected: a.ncols(),
            actual: x.len(),
        });
    }
    Ok(a.dot(x))
}

/// Computes the residual `b - a · x`.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] if the shapes disagree.
pub fn residual(a: &Matrix, x: &Vector, b: &Vector) -> Result<Vector, Error> {
    let ax = multiply_vector(a, x)?;
    if ax.len() != b.len() {
        return Err(Error::DimensionMismatch {
            expected: ax.len(),
            actual: b.len(),
        });
    }
    Ok(b - &ax)
}

/// Returns `true` if `a` is square and exactly equal to its transpose.
#[must_use]
pub fn is_symmetric(a: &Matrix) -> bool {
    check_symmetric(a).is_ok()
}

/// Returns the first asymmetric entry as [`Error::NotSymmetric`].
#[allow(clippy::float_cmp)]
pub(crate) fn check_symmetric(a: &Matrix) -> Result<(), Error> {
    let n = square_size(a)?;
    for row in 0..n {
        for col in (row + 1)..n {
            if a[[row, col]] != a[[col, row]] {
                return Err(Error::NotSymmetric { row, col });
            }
        }
    }
    Ok(())
}

/// Swaps two rows in place.
pub(crate) fn swap_rows(m: &mut Matrix, first: usize, second: usize) {
    if first == second {
        return;
    }
    for col in 0..m.ncols() {
        m.swap([first, col], [second, col]);
    }
}

/// Returns the row at or below `start` with the largest magnitude in `col`.
pub(crate) fn pivot_row(m: &Matrix, start: usize, col: usize) -> usize {
    (start..m.nrows())
        .max_by(|&i, &j| m[[i, col]].abs().total_cmp(&m[[j, col]].abs()))
        .unwrap_or(start)
}

fn sign(k: usize) -> f64 {
    if k % 2 == 0 { 1.0 } else { -1.0 }
}

/// Removes one row and one column without bounds checks on the shape.
fn strike(a: &Matrix, row: usize, col: usize) -> Matrix {
    let n = a.nrows();
    Matrix::from_shape_fn((n - 1, n - 1), |(i, j)| {
        let r = if i < row { i } else { i + 1 };
        let c = if j < col { j } else { j + 1 };
        a[[r, c]]
    })
}

/// Cofactor expansion along the first row.
fn expand(a: &Matrix) -> f64 {
    match a.nrows() {
        0 => 1.0,
        1 => a[[0, 0]],
        2 => a[[0, 0]] * a[[1, 1]] - a[[0, 1]] * a[[1, 0]],
        n => (0..n)
            .map(|col| sign(col) * a[[0, col]] * expand(&strike(a, 0, col)))
            .sum(),
    }
}

/// Determinant by partial-pivot elimination.
fn eliminate(mut m: Matrix) -> f64 {
    let n = m.nrows();
    let mut det = 1.0;

    for k in 0..n {
        let p = pivot_row(&m, k, k);
        let pivot = m[[p, k]];

        #[allow(clippy::float_cmp)]
        if pivot == 0.0 {
            return 0.0;
        }

        if p != k {
            swap_rows(&mut m, k, p);
            det = -det;
        }
        det *= pivot;

        for i in (k + 1)..n {
            let factor = m[[i, k]] / pivot;
            for j in k..n {
                let delta = factor * m[[k, j]];
                m[[i, j]] -= delta;
            }
        }
    }

    det
}
