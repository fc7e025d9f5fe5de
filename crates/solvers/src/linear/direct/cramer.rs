use stepwise_core::{Matrix, Vector};

use crate::linear::{Error, check_system, matrix::determinant};

use super::{Solution, uniform_shortcut};

/// Steps recorded by Cramer's rule.
#[derive(Debug, Clone, PartialEq)]
pub struct Steps {
    /// Determinant of the coefficient matrix.
    pub det_a: f64,

    /// One entry per unknown, in order.
    pub columns: Vec<Column>,
}

/// The substituted matrix for one unknown.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Index of the unknown.
    pub index: usize,

    /// `A` with column `index` replaced by `b`.
    pub matrix: Matrix,

    /// Determinant of `matrix`.
    pub det: f64,
}

/// Solves `A·x = b` with Cramer's rule, `x[i] = det(A_i) / det(A)`.
///
/// # Errors
///
/// Returns [`Error::SingularMatrix`] if `det(A)` is zero, or a shape error
/// if the system is not square or `b` does not match.
pub fn solve(a: &Matrix, b: &Vector) -> Result<Solution<Steps>, Error> {
    let n = check_system(a, b)?;

    if let Some(x) = uniform_shortcut(a, b) {
        log::debug!("cramer: uniform system of size {n}, shortcut applied");
        return Ok(Solution::shortcut(x));
    }

    let det_a = determinant(a)?;
    #[allow(clippy::float_cmp)]
    if det_a == 0.0 {
        return Err(Error::SingularMatrix);
    }

    let mut x = Vector::zeros(n);
    let mut columns = Vec::with_capacity(n);
    for index in 0..n {
        let mut substituted = a.clone();
        substituted.column_mut(index).assign(b);
        let det = determinant(&substituted)?;
        x[index] = det / det_a;
        columns.push(Column {
            index,
            matrix: substituted,
            det,
        });
    }

    log::debug!("cramer: solved system of size {n}, det(A) = {det_a}");
    Ok(Solution::computed(x, Steps { det_a, columns }))
}
