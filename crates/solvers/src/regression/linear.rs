use stepwise_core::PointSet;

use super::{Error, check_count};

/// Running sums over the observations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sums {
    pub n: usize,
    pub sx: f64,
    pub sy: f64,
    pub sxx: f64,
    pub sxy: f64,
}

impl Sums {
    fn new(points: &PointSet) -> Self {
        points.iter().fold(
            Sums {
                n: 0,
                sx: 0.0,
                sy: 0.0,
                sxx: 0.0,
                sxy: 0.0,
            },
            |acc, p| Sums {
                n: acc.n + 1,
                sx: acc.sx + p.x,
                sy: acc.sy + p.y,
                sxx: acc.sxx + p.x * p.x,
                sxy: acc.sxy + p.x * p.y,
            },
        )
    }
}

/// A fitted line `y = slope·x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fit {
    pub slope: f64,
    pub intercept: f64,
    pub sums: Sums,
}

impl Fit {
    /// Evaluates the line at `x`.
    #[must_use]
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Fits a least-squares line through `points`.
///
/// # Errors
///
/// Returns [`Error::TooFewPoints`] with fewer than two points, or
/// [`Error::Singular`] when every point shares the same `x`.
#[allow(clippy::cast_precision_loss, clippy::float_cmp)]
pub fn fit(points: &PointSet) -> Result<Fit, Error> {
    check_count(points.len(), 2)?;

    let sums = Sums::new(points);
    let n = sums.n as f64;
    let denominator = n * sums.sxx - sums.sx * sums.sx;
    if denominator == 0.0 {
        return Err(Error::Singular);
    }

    let slope = (n * sums.sxy - sums.sx * sums.sy) / denominator;
    let intercept = (sums.sy - slope * sums.sx) / n;

    log::debug!("linear regression: y = {slope}x + {intercept} over {} points", sums.n);
    Ok(Fit {
        slope,
        intercept,
        sums,
    })
}
