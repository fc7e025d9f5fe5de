//! Logs every iteration of a few solvers.
//!
//! # Usage
//!
//! ```text
//! RUST_LOG=trace cargo run --example trace
//! RUST_LOG=debug cargo run --example trace -- 2.5
//! ```
//!
//! Finds the square root of the given number (default `2`) with bisection
//! and Newton-Raphson, then solves a small linear system with Gauss-Seidel.
//! Each record is logged at `debug` level; solver internals add `trace`
//! lines.

use std::error::Error;

use log::Level;
use ndarray::array;
use stepwise_core::{Criterion, FnEquation};
use stepwise_observers::{ErrorHistory, LogObserver};
use stepwise_solvers::{
    linear::iterative::gauss_seidel,
    root::{self, bisection, newton_raphson},
};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let target: f64 = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => 2.0,
    };

    let f = FnEquation::new(move |x: f64| x * x - target).with_derivative(|x: f64| 2.0 * x);
    let criterion = Criterion::new(1e-8, root::DEFAULT_MAX_ITERS)?;

    let mut logger = LogObserver::new("bisection", Level::Debug);
    let halving = bisection::solve(&f, [0.0, target.max(1.0)], &criterion, &mut logger)?;
    println!(
        "bisection:      x = {:.10} after {} iterations",
        halving.value, halving.iters
    );

    let mut history = ErrorHistory::new();
    let newton = newton_raphson::solve(&f, target.max(1.0), &criterion, &mut history)?;
    println!(
        "newton-raphson: x = {:.10} after {} iterations",
        newton.value, newton.iters
    );
    for (iter, error) in history.entries() {
        println!("  iteration {iter}: error {error:.3e}%");
    }

    let a = array![[10.0, -1.0, 2.0], [-1.0, 11.0, -1.0], [2.0, -1.0, 10.0]];
    let b = array![6.0, 25.0, -11.0];
    let sweeps = Criterion::new(1e-8, 100)?;
    let logger = LogObserver::new("gauss-seidel", Level::Debug);
    let solution = gauss_seidel::solve(&a, &b, &sweeps, logger)?;
    println!(
        "gauss-seidel:   x = {:.6} after {} sweeps",
        solution.value, solution.iters
    );

    Ok(())
}
