//! Root finding for equations `f(x) = 0`.
//!
//! # Methods
//!
//! - [`graphical`] — coarse then fine sampling for the smallest `|f(x)|`
//! - [`bisection`] — halves a sign-change bracket
//! - [`false_position`] — secant line across a sign-change bracket
//! - [`newton_raphson`] — tangent steps using an injected derivative
//! - [`secant`] — secant steps from two seeds
//! - [`one_point`] — fixed-point iteration `x = g(x)`
//!
//! Iterative methods measure progress with [`percent_error`] and stop once
//! it falls within the [`Criterion`](stepwise_core::Criterion) tolerance.
//! Landing exactly on a root (`f(x) == 0`) also counts as converged.
//! Reaching the iteration cap returns [`Error::NonConvergence`].

mod error;

pub mod bisection;
pub mod false_position;
pub mod graphical;
pub mod newton_raphson;
pub mod one_point;
pub mod secant;

pub use error::Error;

use stepwise_core::Equation;

/// Suggested iteration cap for the iterative root finders.
pub const DEFAULT_MAX_ITERS: usize = 50;

/// Relative percent change `|next - previous| / |next| · 100`.
///
/// Falls back to the absolute change times 100 when `next` is zero.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn percent_error(previous: f64, next: f64) -> f64 {
    let delta = (next - previous).abs();
    if next == 0.0 {
        delta * 100.0
    } else {
        delta / next.abs() * 100.0
    }
}

/// Evaluates the equation, rejecting failures and non-finite values.
pub(crate) fn evaluate<E: Equation>(equation: &E, x: f64) -> Result<f64, Error> {
    let value = equation
        .evaluate(x)
        .map_err(|err| Error::Equation(Box::new(err)))?;

    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::Evaluation { x, value })
    }
}

/// Checks that a starting value is finite.
pub(crate) fn check_seed(value: f64) -> Result<f64, Error> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::NonFiniteSeed { value })
    }
}

/// Validates bracket values and returns them in normalized (left < right) order.
pub(crate) fn validate_bracket(bracket: [f64; 2]) -> Result<(f64, f64), Error> {
    let [left, right] = bracket;

    if !left.is_finite() {
        return Err(Error::NonFiniteBracket { value: left });
    }

    if !right.is_finite() {
        return Err(Error::NonFiniteBracket { value: right });
    }

    #[allow(clippy::float_cmp)]
    if left == right {
        return Err(Error::ZeroWidthBracket { value: left });
    }

    if left < right {
        Ok((left, right))
    } else {
        Ok((right, left))
    }
}

/// Requires `f` to change sign across the bracket.
///
/// Callers handle exact zeros at the ends before checking.
#[allow(clippy::float_cmp)]
pub(crate) fn check_sign_change(
    left: f64,
    right: f64,
    f_left: f64,
    f_right: f64,
) -> Result<(), Error> {
    if f_left.signum() != f_right.signum() {
        Ok(())
    } else {
        Err(Error::NoBracket {
            left,
            right,
            f_left,
            f_right,
        })
    }
}
