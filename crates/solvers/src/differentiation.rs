//! Finite-difference derivatives of any order.
//!
//! The `k`-th derivative at `x` is estimated from `k + 1` samples spaced
//! `h` apart, weighted by signed binomial coefficients:
//!
//! - [`Difference::Forward`] samples `x, x + h, ..., x + k·h` and divides by `hᵏ`
//! - [`Difference::Backward`] samples `x, x - h, ..., x - k·h` and divides by `hᵏ`
//! - [`Difference::Central`] samples `x + k·h, x + (k-2)·h, ..., x - k·h`
//!   and divides by `(2h)ᵏ`
//!
//! Every sample is kept in the returned [`Estimate`].

mod error;

pub use error::Error;

use stepwise_core::Equation;

/// Finite-difference scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difference {
    Forward,
    Backward,
    Central,
}

/// One sample of a difference formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Term {
    pub x: f64,
    pub fx: f64,

    /// Signed binomial weight, before dividing by the step.
    pub coefficient: f64,

    /// `coefficient · fx / denominator`, this term's share of the estimate.
    pub contribution: f64,
}

/// A derivative estimate with the samples that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Estimate {
    pub value: f64,
    pub terms: Vec<Term>,
}

/// Estimates the `order`-th derivative with a forward difference.
///
/// # Errors
///
/// See [`differentiate`].
pub fn forward<E: Equation>(equation: &E, x: f64, h: f64, order: usize) -> Result<Estimate, Error> {
    differentiate(equation, Difference::Forward, x, h, order)
}

/// Estimates the `order`-th derivative with a backward difference.
///
/// # Errors
///
/// See [`differentiate`].
pub fn backward<E: Equation>(equation: &E, x: f64, h: f64, order: usize) -> Result<Estimate, Error> {
    differentiate(equation, Difference::Backward, x, h, order)
}

/// Estimates the `order`-th derivative with a central difference.
///
/// # Errors
///
/// See [`differentiate`].
pub fn central<E: Equation>(equation: &E, x: f64, h: f64, order: usize) -> Result<Estimate, Error> {
    differentiate(equation, Difference::Central, x, h, order)
}

/// Estimates the `order`-th derivative of `equation` at `x`.
///
/// # Errors
///
/// Returns an error if `order` is zero, `h` is zero or not finite, `x` is
/// not finite, or an evaluation fails or is not finite.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::float_cmp
)]
pub fn differentiate<E: Equation>(
    equation: &E,
    scheme: Difference,
    x: f64,
    h: f64,
    order: usize,
) -> Result<Estimate, Error> {
    if order == 0 {
        return Err(Error::InvalidOrder);
    }
    if !h.is_finite() || h == 0.0 {
        return Err(Error::InvalidStep { h });
    }
    if !x.is_finite() {
        return Err(Error::NonFinitePoint { x });
    }

    let k = order as f64;
    let denominator = match scheme {
        Difference::Forward | Difference::Backward => h.powi(order as i32),
        Difference::Central => (2.0 * h).powi(order as i32),
    };

    let mut terms = Vec::with_capacity(order + 1);
    for i in 0..=order {
        let step = i as f64;
        let (offset, sign) = match scheme {
            Difference::Forward => (step, parity(order - i)),
            Difference::Backward => (-step, parity(i)),
            Difference::Central => (k - 2.0 * step, parity(i)),
        };

        let xi = x + offset * h;
        let fx = evaluate(equation, xi)?;
        let coefficient = sign * binomial(order, i);
        let contribution = coefficient * fx / denominator;

        log::trace!("{scheme:?} difference term {i}: f({xi}) = {fx}, weight {coefficient}");
        terms.push(Term {
            x: xi,
            fx,
            coefficient,
            contribution,
        });
    }

    let value = terms.iter().map(|t| t.contribution).sum();
    log::debug!("{scheme:?} difference of order {order} at {x}: {value}");
    Ok(Estimate { value, terms })
}

fn parity(n: usize) -> f64 {
    if n % 2 == 0 { 1.0 } else { -1.0 }
}

/// `C(n, k)` computed in floating point.
#[allow(clippy::cast_precision_loss)]
fn binomial(n: usize, k: usize) -> f64 {
    let k = k.min(n - k);
    (0..k).fold(1.0, |acc, m| acc * (n - m) as f64 / (m + 1) as f64)
}

fn evaluate<E: Equation>(equation: &E, x: f64) -> Result<f64, Error> {
    let value = equation
        .evaluate(x)
        .map_err(|err| Error::Equation(Box::new(err)))?;

    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::Evaluation { x, value })
    }
}
