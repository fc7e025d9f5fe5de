use std::convert::Infallible;

/// A real-valued function of one variable `x`.
///
/// This is the evaluator seam: expression parsing and evaluation live
/// outside the suite, behind this trait. An implementation returns an error
/// when the expression cannot be evaluated; solvers additionally reject
/// non-finite values.
pub trait Equation {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the function at `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if the evaluation fails.
    fn evaluate(&self, x: f64) -> Result<f64, Self::Error>;
}

/// An [`Equation`] that can also evaluate its first derivative.
pub trait Derivative: Equation {
    /// Evaluates `f'(x)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the evaluation fails.
    fn derivative(&self, x: f64) -> Result<f64, Self::Error>;
}

impl<E: Equation + ?Sized> Equation for &E {
    type Error = E::Error;

    fn evaluate(&self, x: f64) -> Result<f64, Self::Error> {
        (**self).evaluate(x)
    }
}

impl<E: Derivative + ?Sized> Derivative for &E {
    fn derivative(&self, x: f64) -> Result<f64, Self::Error> {
        (**self).derivative(x)
    }
}

/// An [`Equation`] backed by a closure.
///
/// ```
/// use stepwise_core::{Equation, FnEquation};
///
/// let f = FnEquation::new(|x: f64| x * x - 4.0);
/// assert_eq!(f.evaluate(3.0).unwrap(), 5.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnEquation<F> {
    f: F,
}

impl<F> FnEquation<F>
where
    F: Fn(f64) -> f64,
{
    /// Wraps a closure as an equation.
    pub fn new(f: F) -> Self {
        Self { f }
    }

    /// Attaches a closure that evaluates the derivative.
    pub fn with_derivative<D>(self, df: D) -> FnDerivative<F, D>
    where
        D: Fn(f64) -> f64,
    {
        FnDerivative { f: self.f, df }
    }
}

impl<F> Equation for FnEquation<F>
where
    F: Fn(f64) -> f64,
{
    type Error = Infallible;

    fn evaluate(&self, x: f64) -> Result<f64, Self::Error> {
        Ok((self.f)(x))
    }
}

/// A closure-backed equation together with its derivative.
#[derive(Debug, Clone, Copy)]
pub struct FnDerivative<F, D> {
    f: F,
    df: D,
}

impl<F, D> Equation for FnDerivative<F, D>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    type Error = Infallible;

    fn evaluate(&self, x: f64) -> Result<f64, Self::Error> {
        Ok((self.f)(x))
    }
}

impl<F, D> Derivative for FnDerivative<F, D>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    fn derivative(&self, x: f64) -> Result<f64, Self::Error> {
        Ok((self.df)(x))
    }
}
