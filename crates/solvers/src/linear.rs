//! Linear systems `A·x = b` and the matrix operations behind them.
//!
//! # Modules
//!
//! - [`matrix`] — determinant, minor, cofactor, adjugate, inverse and friends
//! - [`direct`] — Cramer, Gauss, Gauss-Jordan, LU, Cholesky and inverse solves
//! - [`iterative`] — Jacobi, Gauss-Seidel and Conjugate Gradient
//!
//! All functions share one [`Error`] type.

mod error;

pub mod direct;
pub mod iterative;
pub mod matrix;

pub use error::Error;

use stepwise_core::{Matrix, Vector};

/// Checks that `a` is square and non-empty and that `b` matches it.
///
/// Returns the system size.
pub(crate) fn check_system(a: &Matrix, b: &Vector) -> Result<usize, Error> {
    let n = matrix::square_size(a)?;
    if n == 0 {
        return Err(Error::Empty);
    }
    if b.len() != n {
        return Err(Error::DimensionMismatch {
            expected: n,
            actual: b.len(),
        });
    }
    Ok(n)
}
