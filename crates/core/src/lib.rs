//! Core traits and types for the Stepwise numerical methods suite.
//!
//! This crate defines the shared vocabulary that the solvers and observers
//! build on:
//!
//! - [`Matrix`] and [`Vector`] — dense `f64` arrays backed by `ndarray`
//! - [`Equation`] and [`Derivative`] — the evaluator seam for functions of `x`
//! - [`Point`] and [`PointSet`] — sampled data for interpolation and regression
//! - [`Criterion`] — tolerance plus a mandatory iteration cap
//! - [`Trace`] and [`Solution`] — the step-by-step record every method returns
//! - [`Observer`] and [`Action`] — monitoring and early stopping
//!
//! # Features
//!
//! - `serde` — derives `Serialize`/`Deserialize` for the plain data types.

mod criterion;
mod equation;
mod observer;
mod point;
mod solution;
mod trace;

pub use criterion::{Criterion, CriterionError};
pub use equation::{Derivative, Equation, FnDerivative, FnEquation};
pub use observer::{Action, Observer};
pub use point::{Point, PointSet, PointSetError};
pub use solution::{Solution, Status};
pub use trace::Trace;

/// A dense, row-major matrix of `f64`.
pub type Matrix = ndarray::Array2<f64>;

/// A dense vector of `f64`.
pub type Vector = ndarray::Array1<f64>;
