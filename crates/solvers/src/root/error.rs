use std::error::Error as StdError;

use thiserror::Error;

/// Errors that can occur while finding a root.
#[derive(Debug, Error)]
pub enum Error {
    #[error("bracket has zero width: left and right are both {value}")]
    ZeroWidthBracket { value: f64 },

    #[error("bracket contains non-finite value: {value}")]
    NonFiniteBracket { value: f64 },

    #[error("no sign change in bracket: f({left})={f_left}, f({right})={f_right}")]
    NoBracket {
        left: f64,
        right: f64,
        f_left: f64,
        f_right: f64,
    },

    #[error("starting value is not finite: {value}")]
    NonFiniteSeed { value: f64 },

    #[error("equation evaluation failed")]
    Equation(#[source] Box<dyn StdError + Send + Sync>),

    #[error("non-finite value {value} at x = {x}")]
    Evaluation { x: f64, value: f64 },

    #[error("derivative is zero at x = {x}")]
    ZeroDerivative { x: f64 },

    #[error("zero slope: f({x0}) equals f({x1})")]
    ZeroSlope { x0: f64, x1: f64 },

    #[error("no convergence after {iters} iterations (error {error}%)")]
    NonConvergence { iters: usize, error: f64 },
}
