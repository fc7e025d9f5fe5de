use thiserror::Error;

/// Convergence criterion shared by every iterative method.
///
/// A criterion always carries an iteration cap, so no loop built on it
/// can run forever. Values are validated on construction and read through
/// accessors.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "CriterionFields")
)]
pub struct Criterion {
    tolerance: f64,
    max_iters: usize,
}

/// Errors that can occur when validating a convergence criterion.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum CriterionError {
    #[error("tolerance must be finite and positive, got {0}")]
    Tolerance(f64),

    #[error("max_iters must be at least 1")]
    MaxIters,
}

impl Criterion {
    /// Creates a new criterion with a validated tolerance and iteration cap.
    ///
    /// # Errors
    ///
    /// Returns an error if `tolerance` is not finite and positive, or if
    /// `max_iters` is zero.
    pub fn new(tolerance: f64, max_iters: usize) -> Result<Self, CriterionError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(CriterionError::Tolerance(tolerance));
        }
        if max_iters == 0 {
            return Err(CriterionError::MaxIters);
        }

        Ok(Self {
            tolerance,
            max_iters,
        })
    }

    /// Returns the convergence tolerance.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the maximum number of iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns a copy of this criterion with a different iteration cap.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_iters` is zero.
    pub fn with_max_iters(self, max_iters: usize) -> Result<Self, CriterionError> {
        Self::new(self.tolerance, max_iters)
    }
}

/// Unvalidated wire form, so deserialized criteria go through [`Criterion::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct CriterionFields {
    tolerance: f64,
    max_iters: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<CriterionFields> for Criterion {
    type Error = CriterionError;

    fn try_from(fields: CriterionFields) -> Result<Self, Self::Error> {
        Self::new(fields.tolerance, fields.max_iters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_values() {
        let criterion = Criterion::new(1e-6, 50).expect("valid criterion");
        assert_eq!(criterion.max_iters(), 50);
        assert!((criterion.tolerance() - 1e-6).abs() < f64::EPSILON);
    }

    #[test]
    fn rejects_bad_tolerance() {
        assert!(matches!(
            Criterion::new(0.0, 10),
            Err(CriterionError::Tolerance(_))
        ));
        assert!(matches!(
            Criterion::new(-1.0, 10),
            Err(CriterionError::Tolerance(_))
        ));
        assert!(matches!(
            Criterion::new(f64::NAN, 10),
            Err(CriterionError::Tolerance(_))
        ));
        assert!(matches!(
            Criterion::new(f64::INFINITY, 10),
            Err(CriterionError::Tolerance(_))
        ));
    }

    #[test]
    fn rejects_zero_iteration_cap() {
        assert_eq!(Criterion::new(1e-3, 0), Err(CriterionError::MaxIters));

        let criterion = Criterion::new(1e-3, 5).expect("valid criterion");
        assert_eq!(criterion.with_max_iters(0), Err(CriterionError::MaxIters));
        assert_eq!(
            criterion.with_max_iters(8).map(|c| c.max_iters()),
            Ok(8)
        );
    }
}
