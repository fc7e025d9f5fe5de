//! Numerical methods for the Stepwise suite.
//!
//! Every method is a pure function: it takes validated numeric input and
//! returns a result together with the steps that produced it. Nothing is
//! kept between calls.
//!
//! # Families
//!
//! - [`linear`] — matrix operations, direct and iterative linear solvers
//! - [`root`] — graphical scan and bracketing/open root finders
//! - [`interpolation`] — Newton, Lagrange and spline interpolation
//! - [`regression`] — linear, polynomial and multiple least squares
//! - [`differentiation`] — divided-difference derivatives of any order
//! - [`integration`] — composite trapezoidal and Simpson's rules
//!
//! Iterative methods take a [`Criterion`](stepwise_core::Criterion) and an
//! [`Observer`](stepwise_core::Observer); each also has a `*_unobserved`
//! entry point.

pub mod differentiation;
pub mod integration;
pub mod interpolation;
pub mod linear;
pub mod regression;
pub mod root;
