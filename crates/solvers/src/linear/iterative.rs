//! Iterative solvers for `A·x = b`.
//!
//! Every solver starts from `x = 0` and runs until its [`Criterion`] is met
//! or its iteration cap is reached; the cap is an error, not a result.
//! Observers see each sweep's record and may stop the solver early.
//!
//! # Solvers
//!
//! - [`jacobi`] — each sweep uses only the previous iterate
//! - [`gauss_seidel`] — each sweep uses components updated earlier in the same sweep
//! - [`conjugate_gradient`] — Krylov method for symmetric positive-definite systems
//!
//! [`Criterion`]: stepwise_core::Criterion

mod stationary;

pub mod conjugate_gradient;
pub mod gauss_seidel;
pub mod jacobi;

use stepwise_core::Vector;

/// Suggested iteration cap for Jacobi and Gauss-Seidel.
pub const DEFAULT_MAX_ITERS: usize = 500;

/// One Jacobi or Gauss-Seidel sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Sweep number, starting at 1.
    pub iter: usize,

    /// Iterate after the sweep.
    pub x: Vector,

    /// Relative change of each component.
    ///
    /// A component whose new value is zero reports its absolute change.
    pub errors: Vector,
}

impl Record {
    /// Returns the largest component error.
    #[must_use]
    pub fn max_error(&self) -> f64 {
        self.errors.iter().copied().fold(0.0, f64::max)
    }
}

/// Relative change per component between two iterates.
#[allow(clippy::float_cmp)]
fn component_errors(old: &Vector, new: &Vector) -> Vector {
    ndarray::Zip::from(old).and(new).map_collect(|&o, &n| {
        let delta = (n - o).abs();
        if n == 0.0 { delta } else { delta / n.abs() }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use ndarray::arr1;

    #[test]
    fn errors_are_relative_unless_new_value_is_zero() {
        let errors = component_errors(&arr1(&[1.0, 2.0, 0.5]), &arr1(&[2.0, 0.0, 0.5]));
        assert_relative_eq!(errors[0], 0.5);
        assert_relative_eq!(errors[1], 2.0);
        assert_relative_eq!(errors[2], 0.0);
    }

    #[test]
    fn max_error_picks_largest_component() {
        let record = Record {
            iter: 1,
            x: arr1(&[1.0, 1.0]),
            errors: arr1(&[0.1, 0.3]),
        };
        assert_relative_eq!(record.max_error(), 0.3);
    }
}
