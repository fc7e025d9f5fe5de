use std::error::Error as StdError;

use thiserror::Error;

/// Errors that can occur during numerical integration.
#[derive(Debug, Error)]
pub enum Error {
    #[error("need at least {min} intervals, got {n}")]
    TooFewIntervals { n: usize, min: usize },

    #[error("Simpson's rule needs an even number of intervals, got {n}")]
    OddIntervals { n: usize },

    #[error("limit is not finite: {value}")]
    NonFiniteLimit { value: f64 },

    #[error("equation evaluation failed")]
    Equation(#[source] Box<dyn StdError + Send + Sync>),

    #[error("non-finite value {value} at x = {x}")]
    Evaluation { x: f64, value: f64 },
}
