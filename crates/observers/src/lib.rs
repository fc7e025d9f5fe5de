//! Reusable observers for the Stepwise suite.
//!
//! This crate provides [`Observer`] implementations and capability traits
//! that work across every iterative method in `stepwise-solvers`.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasIteration`], [`HasError`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`LogObserver`] — logs each record through the `log` facade
//! - [`IterationBudget`] — stops after a fixed number of iterations
//! - [`GoodEnough`] — stops once the error falls below a looser tolerance
//! - [`ErrorHistory`] — records the error of every iteration
//!
//! [`Observer`]: stepwise_core::Observer
//! [`HasIteration`]: traits::HasIteration
//! [`HasError`]: traits::HasError
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod history;
mod logging;
mod stop;

pub use history::ErrorHistory;
pub use logging::LogObserver;
pub use stop::{GoodEnough, IterationBudget};
