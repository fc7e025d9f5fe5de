//! Least-squares regression.
//!
//! # Methods
//!
//! - [`linear`] — straight line from the closed-form sums
//! - [`polynomial`] — polynomial of a chosen degree through the normal equations
//! - [`multiple`] — hyperplane over several variables with an intercept
//!
//! Every fit keeps the quantities it was built from and offers `predict`.

mod error;

pub mod linear;
pub mod multiple;
pub mod polynomial;

pub use error::Error;

/// Requires at least `min` observations.
pub(crate) fn check_count(count: usize, min: usize) -> Result<(), Error> {
    if count < min {
        return Err(Error::TooFewPoints { count, min });
    }
    Ok(())
}
