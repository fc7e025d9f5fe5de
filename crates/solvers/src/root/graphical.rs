//! Graphical root location by sampling.
//!
//! A coarse pass samples `[start, end)` at `step` and keeps the `x` with the
//! smallest `|f(x)|`. A fine pass then samples `[best - 1, best + 1]` at
//! `fine_step` and refines that choice. The result is the best sampled
//! point, not a converged root.

use stepwise_core::Equation;
use thiserror::Error;

use super::{Error, evaluate};

/// Upper bound on samples in one pass.
pub const MAX_SAMPLES_PER_PASS: usize = 1_000_000;

/// Half-width of the fine pass around the coarse best.
const FINE_HALF_WIDTH: f64 = 1.0;

/// Configuration for a graphical scan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    start: f64,
    end: f64,
    step: f64,
    fine_step: f64,
}

/// Errors that can occur when validating a scan config.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("scan range [{start}, {end}) must be finite and non-empty")]
    Range { start: f64, end: f64 },

    #[error("step must be finite and positive, got {0}")]
    Step(f64),

    #[error("scan would exceed the per-pass sample limit")]
    TooManySamples,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(0.0, 10.0, 0.1, 0.01).unwrap()
    }
}

impl Config {
    /// Creates a validated scan config.
    ///
    /// # Errors
    ///
    /// Returns an error if the range is not finite with `start < end`, if a
    /// step is not finite and positive, or if either pass would exceed
    /// [`MAX_SAMPLES_PER_PASS`].
    pub fn new(start: f64, end: f64, step: f64, fine_step: f64) -> Result<Self, ConfigError> {
        if !start.is_finite() || !end.is_finite() || start >= end {
            return Err(ConfigError::Range { start, end });
        }
        for s in [step, fine_step] {
            if !s.is_finite() || s <= 0.0 {
                return Err(ConfigError::Step(s));
            }
        }

        #[allow(clippy::cast_precision_loss)]
        let limit = MAX_SAMPLES_PER_PASS as f64;
        if (end - start) / step > limit || 2.0 * FINE_HALF_WIDTH / fine_step > limit {
            return Err(ConfigError::TooManySamples);
        }

        Ok(Self {
            start,
            end,
            step,
            fine_step,
        })
    }

    #[must_use]
    pub fn start(&self) -> f64 {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> f64 {
        self.end
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    #[must_use]
    pub fn fine_step(&self) -> f64 {
        self.fine_step
    }
}

/// Which pass produced a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    Coarse,
    Fine,
}

/// One sampled point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub pass: Pass,
    pub x: f64,
    pub fx: f64,
}

/// The outcome of a graphical scan.
#[derive(Debug, Clone, PartialEq)]
pub struct Scan {
    /// Sampled `x` with the smallest `|f(x)|`.
    pub x: f64,

    /// `f(x)` at the reported point.
    pub fx: f64,

    /// Every sample from both passes, in order.
    pub samples: Vec<Sample>,
}

impl Scan {
    /// Iterates over the samples from one pass.
    pub fn pass(&self, pass: Pass) -> impl Iterator<Item = &Sample> {
        self.samples.iter().filter(move |s| s.pass == pass)
    }
}

/// Scans for the point where `|f(x)|` is smallest.
///
/// On ties the earlier sample wins.
///
/// # Errors
///
/// Returns an evaluation error if `f` fails or is non-finite at a sample.
pub fn scan<E: Equation>(equation: &E, config: &Config) -> Result<Scan, Error> {
    let mut samples = Vec::new();

    let coarse = sample_pass(
        equation,
        Pass::Coarse,
        config.start,
        |x| x < config.end,
        config.step,
        &mut samples,
    )?;

    let lo = coarse.x - FINE_HALF_WIDTH;
    let hi = coarse.x + FINE_HALF_WIDTH;
    let fine = sample_pass(
        equation,
        Pass::Fine,
        lo,
        |x| x <= hi,
        config.fine_step,
        &mut samples,
    )?;

    log::debug!(
        "graphical: best x = {} with f(x) = {} from {} samples",
        fine.x,
        fine.fx,
        samples.len()
    );

    Ok(Scan {
        x: fine.x,
        fx: fine.fx,
        samples,
    })
}

/// Samples `start + i·step` while `keep(x)` holds, returning the best point.
fn sample_pass<E, K>(
    equation: &E,
    pass: Pass,
    start: f64,
    keep: K,
    step: f64,
    samples: &mut Vec<Sample>,
) -> Result<Sample, Error>
where
    E: Equation,
    K: Fn(f64) -> bool,
{
    let mut best: Option<Sample> = None;

    for i in 0..=MAX_SAMPLES_PER_PASS {
        #[allow(clippy::cast_precision_loss)]
        let x = start + i as f64 * step;
        if !keep(x) {
            break;
        }

        let fx = evaluate(equation, x)?;
        let sample = Sample { pass, x, fx };
        samples.push(sample);

        if best.is_none_or(|b| fx.abs() < b.fx.abs()) {
            best = Some(sample);
        }
    }

    match best {
        Some(sample) => Ok(sample),
        // A validated config always admits the first sample of each pass.
        None => Ok(Sample {
            pass,
            x: start,
            fx: evaluate(equation, start)?,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use stepwise_core::FnEquation;

    #[test]
    fn default_matches_classic_form() {
        let config = Config::default();
        assert_relative_eq!(config.start(), 0.0);
        assert_relative_eq!(config.end(), 10.0);
        assert_relative_eq!(config.step(), 0.1);
        assert_relative_eq!(config.fine_step(), 0.01);
    }

    #[test]
    fn rejects_bad_configs() {
        assert!(matches!(
            Config::new(1.0, 1.0, 0.1, 0.01),
            Err(ConfigError::Range { .. })
        ));
        assert!(matches!(
            Config::new(0.0, f64::INFINITY, 0.1, 0.01),
            Err(ConfigError::Range { .. })
        ));
        assert_eq!(
            Config::new(0.0, 1.0, 0.0, 0.01),
            Err(ConfigError::Step(0.0))
        );
        assert_eq!(
            Config::new(0.0, 1.0, 0.1, -0.5),
            Err(ConfigError::Step(-0.5))
        );
        assert_eq!(
            Config::new(0.0, 1.0, 1e-12, 0.01),
            Err(ConfigError::TooManySamples)
        );
    }

    #[test]
    fn locates_root_of_quadratic() {
        let f = FnEquation::new(|x: f64| x * x - 7.0);
        let result = scan(&f, &Config::default()).unwrap();

        assert_relative_eq!(result.x, 7.0_f64.sqrt(), epsilon = 0.01);
        assert!(result.fx.abs() < 0.05);
    }

    #[test]
    fn records_both_passes() {
        let f = FnEquation::new(|x: f64| x - 2.0);
        let config = Config::new(0.0, 4.0, 0.5, 0.25).unwrap();
        let result = scan(&f, &config).unwrap();

        let coarse: Vec<f64> = result.pass(Pass::Coarse).map(|s| s.x).collect();
        assert_eq!(coarse, vec![0.0, 0.5, 1.0, 1.5, 2.0, 2.5, 3.0, 3.5]);

        let fine: Vec<f64> = result.pass(Pass::Fine).map(|s| s.x).collect();
        assert_eq!(fine, vec![1.0, 1.25, 1.5, 1.75, 2.0, 2.25, 2.5, 2.75, 3.0]);

        assert_eq!(result.x, 2.0);
        assert_eq!(result.fx, 0.0);
    }

    #[test]
    fn evaluation_failure_stops_the_scan() {
        let f = FnEquation::new(|x: f64| (x - 5.0).ln());
        assert!(matches!(
            scan(&f, &Config::default()),
            Err(Error::Evaluation { .. })
        ));
    }
}
