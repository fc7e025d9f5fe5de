//! Capability traits for cross-solver observers.
//!
//! Every iterative method in `stepwise-solvers` emits its own record type.
//! These traits expose what the records have in common so one observer can
//! watch any of them.
//!
//! # Record traits
//!
//! - [`HasIteration`] — records that carry their iteration number
//! - [`HasError`] — records that carry the convergence measure the method
//!   compares against its tolerance
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use stepwise_core::Observer;
//! use stepwise_observers::traits::{CanStopEarly, HasError, HasIteration};
//!
//! struct GoodEnough {
//!     tolerance: f64,
//!     min_iters: usize,
//! }
//!
//! impl<R: HasIteration + HasError, A: CanStopEarly> Observer<R, A> for GoodEnough {
//!     fn observe(&mut self, record: &R) -> Option<A> {
//!         if record.iteration() >= self.min_iters && record.error() < self.tolerance {
//!             return Some(A::stop_early());
//!         }
//!         None
//!     }
//! }
//! ```

use stepwise_core::Action;
use stepwise_solvers::{
    linear::iterative::{self, conjugate_gradient},
    root::{bisection, false_position, newton_raphson, one_point, secant},
};

/// A record that carries its iteration number.
pub trait HasIteration {
    /// Returns the iteration number, starting at 1.
    fn iteration(&self) -> usize;
}

/// A record that carries a convergence measure.
pub trait HasError {
    /// Returns the value the method compares against its tolerance.
    ///
    /// Root finders report a percent error, Jacobi and Gauss-Seidel the
    /// largest component error, and Conjugate Gradient the residual norm.
    fn error(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl CanStopEarly for Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

macro_rules! root_record {
    ($($module:ident),+) => {
        $(
            impl HasIteration for $module::Record {
                fn iteration(&self) -> usize {
                    self.iter
                }
            }

            impl HasError for $module::Record {
                fn error(&self) -> f64 {
                    self.error
                }
            }
        )+
    };
}

root_record!(bisection, false_position, newton_raphson, one_point, secant);

// --- Jacobi and Gauss-Seidel ---

impl HasIteration for iterative::Record {
    fn iteration(&self) -> usize {
        self.iter
    }
}

impl HasError for iterative::Record {
    fn error(&self) -> f64 {
        self.max_error()
    }
}

// --- Conjugate Gradient ---

impl HasIteration for conjugate_gradient::Record {
    fn iteration(&self) -> usize {
        self.iter
    }
}

impl HasError for conjugate_gradient::Record {
    fn error(&self) -> f64 {
        self.residual_norm
    }
}
