use thiserror::Error;

use crate::linear;

/// Errors that can occur during interpolation.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("need at least {min} nodes, got {count}")]
    TooFewNodes { count: usize, min: usize },

    #[error("node index {index} is out of range for {len} points")]
    NodeIndex { index: usize, len: usize },

    #[error("nodes {first} and {second} share x = {x}")]
    DuplicateNode { first: usize, second: usize, x: f64 },

    #[error("x = {x} is outside the knot range [{min}, {max}]")]
    OutOfRange { x: f64, min: f64, max: f64 },

    #[error("spline system could not be solved")]
    System(#[from] linear::Error),
}
