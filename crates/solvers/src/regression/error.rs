use thiserror::Error;

use crate::linear;

/// Errors that can occur while fitting a regression.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("need at least {min} points, got {count}")]
    TooFewPoints { count: usize, min: usize },

    #[error("normal equations are singular")]
    Singular,

    #[error("{samples} sample rows but {responses} responses")]
    DimensionMismatch { samples: usize, responses: usize },

    #[error("expected {expected} variables, got {actual}")]
    VariableCount { expected: usize, actual: usize },

    #[error("non-finite value in the data")]
    NonFinite,

    #[error("normal equations could not be solved")]
    System(#[source] linear::Error),
}

impl From<linear::Error> for Error {
    fn from(error: linear::Error) -> Self {
        match error {
            linear::Error::SingularMatrix | linear::Error::ZeroPivot { .. } => Self::Singular,
            other => Self::System(other),
        }
    }
}
