//! Composite Newton-Cotes integration over `[a, b]`.
//!
//! Both rules split the interval into `n` equal widths `h = (b - a) / n`
//! and weight the samples `f(a + i·h)`:
//!
//! - [`trapezoidal`] weights the ends by `1/2` and the interior by `1`
//! - [`simpson`] weights the ends by `1`, odd samples by `4` and even
//!   interior samples by `2`, then scales by `1/3`
//!
//! Swapping the limits flips the sign of the result.

mod error;

pub use error::Error;

use stepwise_core::Equation;

/// One weighted sample of a rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub x: f64,
    pub fx: f64,
    pub weight: f64,
}

/// An integral estimate with the samples that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Estimate {
    pub value: f64,
    pub h: f64,
    pub samples: Vec<Sample>,
}

/// Integrates with the composite trapezoidal rule over `n` intervals.
///
/// # Errors
///
/// Returns an error if `n` is zero, a limit is not finite, or an evaluation
/// fails or is not finite.
pub fn trapezoidal<E: Equation>(equation: &E, a: f64, b: f64, n: usize) -> Result<Estimate, Error> {
    check_limits(a, b)?;
    if n < 1 {
        return Err(Error::TooFewIntervals { n, min: 1 });
    }

    let weight = |i: usize| if i == 0 || i == n { 0.5 } else { 1.0 };
    let estimate = composite(equation, a, b, n, weight, 1.0)?;
    log::debug!("trapezoidal rule over [{a}, {b}] with {n} intervals: {}", estimate.value);
    Ok(estimate)
}

/// Integrates with the composite Simpson's 1/3 rule over `n` intervals.
///
/// # Errors
///
/// Returns an error if `n` is less than two or odd, a limit is not finite,
/// or an evaluation fails or is not finite.
pub fn simpson<E: Equation>(equation: &E, a: f64, b: f64, n: usize) -> Result<Estimate, Error> {
    check_limits(a, b)?;
    if n < 2 {
        return Err(Error::TooFewIntervals { n, min: 2 });
    }
    if n % 2 != 0 {
        return Err(Error::OddIntervals { n });
    }

    let weight = |i: usize| {
        if i == 0 || i == n {
            1.0
        } else if i % 2 == 1 {
            4.0
        } else {
            2.0
        }
    };
    let estimate = composite(equation, a, b, n, weight, 1.0 / 3.0)?;
    log::debug!("simpson's rule over [{a}, {b}] with {n} intervals: {}", estimate.value);
    Ok(estimate)
}

fn check_limits(a: f64, b: f64) -> Result<(), Error> {
    for value in [a, b] {
        if !value.is_finite() {
            return Err(Error::NonFiniteLimit { value });
        }
    }
    Ok(())
}

#[allow(clippy::cast_precision_loss)]
fn composite<E: Equation>(
    equation: &E,
    a: f64,
    b: f64,
    n: usize,
    weight: impl Fn(usize) -> f64,
    scale: f64,
) -> Result<Estimate, Error> {
    let h = (b - a) / n as f64;

    let samples = (0..=n)
        .map(|i| {
            let x = if i == n { b } else { a + i as f64 * h };
            let fx = evaluate(equation, x)?;
            log::trace!("sample {i}: f({x}) = {fx}");
            Ok(Sample {
                x,
                fx,
                weight: weight(i),
            })
        })
        .collect::<Result<Vec<_>, Error>>()?;

    let sum: f64 = samples.iter().map(|s| s.weight * s.fx).sum();
    Ok(Estimate {
        value: scale * h * sum,
        h,
        samples,
    })
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
