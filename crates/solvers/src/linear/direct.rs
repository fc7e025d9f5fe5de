//! Direct solvers for square systems `A·x = b`.
//!
//! Each solver returns a [`Solution`] carrying `x` and the route taken.
//! Every solver except Cholesky first tries the [`uniform_shortcut`]; when
//! it applies, no computation steps are recorded.
//!
//! # Solvers
//!
//! - [`cramer`] — determinant ratios
//! - [`gauss`] — forward elimination and back substitution
//! - [`gauss_jordan`] — reduction to the identity
//! - [`lu`] — Doolittle factorization
//! - [`cholesky`] — `L·Lᵗ` factorization of symmetric positive-definite systems
//! - [`inverse`] — `x = A⁻¹·b` through the adjugate

pub mod cholesky;
pub mod cramer;
pub mod gauss;
pub mod gauss_jordan;
pub mod inverse;
pub mod lu;


use stepwise_core::{Matrix, Vector};

/// How a direct solver reached its answer.
#[derive(Debug, Clone, PartialEq)]
pub enum Route<S> {
    /// The uniform-system shortcut applied.
    UniformShortcut,

    /// The full method ran and recorded these steps.
    Computed(S),
}

/// The result of a direct solver.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<S> {
    /// Solution vector.
    pub x: Vector,

    /// Route taken, with the method's steps when it was computed.
    pub route: Route<S>,
}

impl<S> Solution<S> {
    pub(crate) fn shortcut(x: Vector) -> Self {
        Self {
            x,
            route: Route::UniformShortcut,
        }
    }

    pub(crate) fn computed(x: Vector, steps: S) -> Self {
        Self {
            x,
            route: Route::Computed(steps),
        }
    }

    /// Returns the recorded steps, or `None` if the shortcut applied.
    #[must_use]
    pub fn steps(&self) -> Option<&S> {
        match &self.route {
            Route::UniformShortcut => None,
            Route::Computed(steps) => Some(steps),
        }
    }

    /// Returns `true` if the uniform-system shortcut produced this solution.
    #[must_use]
    pub fn is_shortcut(&self) -> bool {
        matches!(self.route, Route::UniformShortcut)
    }
}

/// Row-exchange strategy for the elimination solvers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Pivoting {
    /// Swap in the row with the largest pivot magnitude.
    #[default]
    Partial,

    /// Use pivots in place; a zero pivot is an error.
    None,
}

/// Answers a uniform system without computation.
///
/// Applies when every entry of `a` is identical and every entry of `b` is
/// identical. The answer puts `b[0]` in the first unknown and zero in the
/// rest. Returns `None` when the precondition does not hold or either
/// input is empty.
#[must_use]
pub fn uniform_shortcut(a: &Matrix, b: &Vector) -> Option<Vector> {
    let first_a = *a.iter().next()?;
    let first_b = *b.iter().next()?;

    #[allow(clippy::float_cmp)]
    let uniform = a.iter().all(|&v| v == first_a) && b.iter().all(|&v| v == first_b);

    uniform.then(|| {
        let mut x = Vector::zeros(b.len());
        x[0] = first_b;
        x
    })
}

/// Solves `L·y = b` for lower-triangular `L`.
pub(crate) fn forward_substitute(l: &Matrix, b: &Vector) -> Vector {
    let n = b.len();
    let mut y = Vector::zeros(n);
    for i in 0..n {
        let sum: f64 = (0..i).map(|j| l[[i, j]] * y[j]).sum();
        y[i] = (b[i] - sum) / l[[i, i]];
    }
    y
}

/// Solves `U·x = y` for upper-triangular `U`.
pub(crate) fn back_substitute(u: &Matrix, y: &Vector) -> Vector {
    let n = y.len();
    let mut x = Vector::zeros(n);
    for i in (0..n).rev() {
        let sum: f64 = ((i + 1)..n).map(|j| u[[i, j]] * x[j]).sum();
        x[i] = (y[i] - sum) / u[[i, i]];
    }
    x
}
