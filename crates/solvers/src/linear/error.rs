use thiserror::Error;

/// Errors that can occur in matrix operations and linear solvers.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("system is empty")]
    Empty,

    #[error("matrix of size {size} is too small, need at least {min}")]
    TooSmall { size: usize, min: usize },

    #[error("entry ({row}, {col}) is out of range for a {size}x{size} matrix")]
    IndexOutOfRange { row: usize, col: usize, size: usize },

    #[error("matrix is singular")]
    SingularMatrix,

    #[error("zero pivot in row {row}")]
    ZeroPivot { row: usize },

    #[error("matrix is not symmetric: a[{row}][{col}] != a[{col}][{row}]")]
    NotSymmetric { row: usize, col: usize },

    #[error("matrix is not positive-definite: radicand {radicand} in row {row}")]
    NonPositiveDefinite { row: usize, radicand: f64 },

    #[error("search direction has non-positive curvature {curvature} at iteration {iter}")]
    NonPositiveCurvature { iter: usize, curvature: f64 },

    #[error("iterate became non-finite at iteration {iter}")]
    Diverged { iter: usize },

    #[error("no convergence after {iters} iterations (error {error})")]
    NonConvergence { iters: usize, error: f64 },
}
