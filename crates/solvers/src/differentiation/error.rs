use std::error::Error as StdError;

use thiserror::Error;

/// Errors that can occur while estimating a derivative.
#[derive(Debug, Error)]
pub enum Error {
    #[error("derivative order must be at least 1")]
    InvalidOrder,

    #[error("step must be finite and non-zero, got {h}")]
    InvalidStep { h: f64 },

    #[error("point is not finite: {x}")]
    NonFinitePoint { x: f64 },

    #[error("equation evaluation failed")]
    Equation(#[source] Box<dyn StdError + Send + Sync>),

    #[error("non-finite value {value} at x = {x}")]
    Evaluation { x: f64, value: f64 },
}
