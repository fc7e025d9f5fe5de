use stepwise_core::{Matrix, Vector};

use crate::linear::{
    direct::{back_substitute, forward_substitute, lu},
    matrix,
};

use super::{Error, check_count};

/// A fitted hyperplane `y = b₀ + Σ bᵢ·xᵢ`.
#[derive(Debug, Clone, PartialEq)]
pub struct Fit {
    /// Intercept first, then one coefficient per variable.
    pub coefficients: Vector,

    /// Normal matrix over the intercept and every variable.
    pub normal: Matrix,

    /// Right-hand side `[Σy, Σx₁y, ..., Σxₖy]`.
    pub rhs: Vector,

    /// LU factors of the normal matrix.
    pub factors: lu::Factors,
}

impl Fit {
    /// Number of variables, excluding the intercept.
    #[must_use]
    pub fn variables(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Evaluates the hyperplane at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VariableCount`] if `x` has the wrong length.
    pub fn predict(&self, x: &[f64]) -> Result<f64, Error> {
        let expected = self.variables();
        if x.len() != expected {
            return Err(Error::VariableCount {
                expected,
                actual: x.len(),
            });
        }

        let slopes = self.coefficients.iter().skip(1);
        Ok(self.coefficients[0] + slopes.zip(x).map(|(b, xi)| b * xi).sum::<f64>())
    }
}

/// Fits `y` against the columns of `samples` with an intercept.
///
/// Each row of `samples` is one observation. The normal equations are
/// solved through an LU factorization.
///
/// # Errors
///
/// Returns an error if the row count differs from `y`, any value is not
/// finite, there are fewer than `k + 1` rows for `k` variables, or the
/// normal matrix is singular.
pub fn fit(samples: &Matrix, y: &Vector) -> Result<Fit, Error> {
    let (rows, variables) = samples.dim();
    if rows != y.len() {
        return Err(Error::DimensionMismatch {
            samples: rows,
            responses: y.len(),
        });
    }
    if !samples.iter().chain(y.iter()).all(|v| v.is_finite()) {
        return Err(Error::NonFinite);
    }
    check_count(rows, variables + 1)?;

    let design = Matrix::from_shape_fn((rows, variables + 1), |(i, j)| {
        if j == 0 { 1.0 } else { samples[[i, j - 1]] }
    });
    let transposed = matrix::transpose(&design);
    let normal = matrix::multiply(&transposed, &design)?;
    let rhs = matrix::multiply_vector(&transposed, y)?;

    let factors = lu::decompose(&normal)?;
    let coefficients = back_substitute(&factors.u, &forward_substitute(&factors.l, &rhs));

    log::debug!("multiple regression: {variables} variables over {rows} samples");
    Ok(Fit {
        coefficients,
        normal,
        rhs,
        factors,
    })
}
