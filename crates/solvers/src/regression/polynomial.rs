use stepwise_core::{Matrix, PointSet, Vector};

use crate::linear::matrix;

use super::{Error, check_count};

/// A fitted polynomial `Σ coefficients[k]·xᵏ`.
#[derive(Debug, Clone, PartialEq)]
pub struct Fit {
    pub degree: usize,

    /// Coefficients in ascending powers of `x`.
    pub coefficients: Vector,

    /// Normal matrix `XᵗX`, entry `(i, j)` being `Σ x^(i+j)`.
    pub normal: Matrix,

    /// Right-hand side `Xᵗy`, entry `i` being `Σ xⁱ·y`.
    pub rhs: Vector,
}

impl Fit {
    /// Evaluates the polynomial at `x`.
    #[must_use]
    pub fn predict(&self, x: f64) -> f64 {
        self.coefficients.iter().rev().fold(0.0, |acc, c| acc * x + c)
    }
}

/// Fits a least-squares polynomial of `degree` through `points`.
///
/// The normal equations are solved through the matrix inverse.
///
/// # Errors
///
/// Returns [`Error::TooFewPoints`] with fewer than `degree + 1` points, or
/// [`Error::Singular`] when the normal matrix has no inverse.
pub fn fit(points: &PointSet, degree: usize) -> Result<Fit, Error> {
    check_count(points.len(), degree + 1)?;

    let vandermonde = vandermonde(points, degree);
    let transposed = matrix::transpose(&vandermonde);
    let y = Vector::from(points.ys());

    let normal = matrix::multiply(&transposed, &vandermonde)?;
    let rhs = matrix::multiply_vector(&transposed, &y)?;
    let coefficients = matrix::multiply_vector(&matrix::inverse(&normal)?, &rhs)?;

    log::debug!("polynomial regression: degree {degree} over {} points", points.len());
    Ok(Fit {
        degree,
        coefficients,
        normal,
        rhs,
    })
}

#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn vandermonde(points: &PointSet, degree: usize) -> Matrix {
    Matrix::from_shape_fn((points.len(), degree + 1), |(i, k)| {
        points.as_slice()[i].x.powi(k as i32)
    })
}
