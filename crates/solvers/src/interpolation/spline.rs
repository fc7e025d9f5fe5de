//! Piecewise polynomial splines.
//!
//! Knots are the input points sorted by ascending `x`. Each segment between
//! neighbouring knots carries its own polynomial, written in global `x`
//! with the highest power first.
//!
//! - [`linear`] joins neighbouring knots with straight lines.
//! - [`quadratic`] matches values at both ends of every segment and first
//!   derivatives at interior knots, and fixes the first segment's leading
//!   coefficient to zero.
//! - [`cubic`] matches values, first and second derivatives, with natural
//!   end conditions `S''(x0) = S''(xn) = 0`.
//!
//! Quadratic and cubic coefficients come from one square linear system,
//! solved with Cramer's rule and kept on the [`Spline`] for inspection.

#[cfg(test)]
mod tests;

use stepwise_core::{Matrix, Point, PointSet, Vector};

use crate::linear::direct::cramer;

use super::{Error, check_nodes};

/// The assembled linear system `matrix · coefficients = rhs`.
#[derive(Debug, Clone, PartialEq)]
pub struct System {
    pub matrix: Matrix,
    pub rhs: Vector,
}

/// A fitted spline.
#[derive(Debug, Clone, PartialEq)]
pub struct Spline {
    degree: usize,
    knots: Vec<f64>,
    coefficients: Vec<Vec<f64>>,
    system: Option<System>,
}

/// One polynomial piece of a spline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment<'a> {
    pub start: f64,
    pub end: f64,

    /// Coefficients in global `x`, highest power first.
    pub coefficients: &'a [f64],
}

impl Segment<'_> {
    /// Evaluates this piece at `x`, without a range check.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        horner(self.coefficients, x)
    }

    /// Evaluates the `order`-th derivative of this piece at `x`.
    #[must_use]
    pub fn derivative(&self, x: f64, order: usize) -> f64 {
        horner(&differentiate(self.coefficients, order), x)
    }
}

impl Spline {
    /// Polynomial degree of every segment.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Knot positions in ascending order.
    #[must_use]
    pub fn knots(&self) -> &[f64] {
        &self.knots
    }

    /// Per-segment coefficients, highest power first.
    #[must_use]
    pub fn coefficients(&self) -> &[Vec<f64>] {
        &self.coefficients
    }

    /// The solved system, or `None` for a linear spline.
    #[must_use]
    pub fn system(&self) -> Option<&System> {
        self.system.as_ref()
    }

    /// Iterates over the segments in order.
    pub fn segments(&self) -> impl Iterator<Item = Segment<'_>> {
        self.knots
            .windows(2)
            .zip(&self.coefficients)
            .map(|(ends, coefficients)| Segment {
                start: ends[0],
                end: ends[1],
                coefficients,
            })
    }

    /// Evaluates the spline at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `x` lies outside the knots.
    pub fn evaluate(&self, x: f64) -> Result<f64, Error> {
        self.derivative(x, 0)
    }

    /// Evaluates the `order`-th derivative at `x`; order `0` is the value.
    ///
    /// At an interior knot the segment to the right is used.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `x` lies outside the knots.
    pub fn derivative(&self, x: f64, order: usize) -> Result<f64, Error> {
        let index = self.segment_index(x)?;
        let coefficients = &self.coefficients[index];
        Ok(horner(&differentiate(coefficients, order), x))
    }

    fn segment_index(&self, x: f64) -> Result<usize, Error> {
        let min = self.knots[0];
        let max = self.knots[self.knots.len() - 1];
        if !(min..=max).contains(&x) {
            return Err(Error::OutOfRange { x, min, max });
        }

        let interior = &self.knots[1..self.knots.len() - 1];
        Ok(interior.iter().take_while(|&&k| k <= x).count())
    }
}

/// Builds a linear spline.
///
/// # Errors
///
/// Returns an error with fewer than two points or when two points share `x`.
pub fn linear(points: &PointSet) -> Result<Spline, Error> {
    let knots = sorted_knots(points)?;

    let coefficients = knots
        .windows(2)
        .map(|pair| {
            let slope = (pair[1].y - pair[0].y) / (pair[1].x - pair[0].x);
            vec![slope, pair[0].y - slope * pair[0].x]
        })
        .collect();

    Ok(Spline {
        degree: 1,
        knots: knots.iter().map(|p| p.x).collect(),
        coefficients,
        system: None,
    })
}

/// Builds a quadratic spline.
///
/// # Errors
///
/// Returns an error with fewer than two points, when two points share `x`,
/// or if the assembled system is singular.
pub fn quadratic(points: &PointSet) -> Result<Spline, Error> {
    let knots = sorted_knots(points)?;
    let segments = knots.len() - 1;
    let mut system = Assembly::new(2, segments);

    for (i, pair) in knots.windows(2).enumerate() {
        for p in pair {
            system.row(&[(i, 0, p.x, 1.0)], p.y);
        }
    }
    for k in 1..segments {
        let x = knots[k].x;
        system.row(&[(k - 1, 1, x, 1.0), (k, 1, x, -1.0)], 0.0);
    }
    system.leading_zero();

    solve(system, &knots)
}

/// Builds a natural cubic spline.
///
/// # Errors
///
/// Returns an error with fewer than two points, when two points share `x`,
/// or if the assembled system is singular.
pub fn cubic(points: &PointSet) -> Result<Spline, Error> {
    let knots = sorted_knots(points)?;
    let segments = knots.len() - 1;
    let mut system = Assembly::new(3, segments);

    for (i, pair) in knots.windows(2).enumerate() {
        for p in pair {
            system.row(&[(i, 0, p.x, 1.0)], p.y);
        }
    }
    for order in 1..=2 {
        for k in 1..segments {
            let x = knots[k].x;
            system.row(&[(k - 1, order, x, 1.0), (k, order, x, -1.0)], 0.0);
        }
    }
    system.row(&[(0, 2, knots[0].x, 1.0)], 0.0);
    system.row(&[(segments - 1, 2, knots[segments].x, 1.0)], 0.0);

    solve(system, &knots)
}

fn sorted_knots(points: &PointSet) -> Result<Vec<Point>, Error> {
    let sorted = points.sorted();
    check_nodes(sorted.as_slice())?;
    Ok(sorted.as_slice().to_vec())
}

/// Row-by-row builder for a spline system.
struct Assembly {
    degree: usize,
    matrix: Matrix,
    rhs: Vector,
    next: usize,
}

impl Assembly {
    fn new(degree: usize, segments: usize) -> Self {
        let size = (degree + 1) * segments;
        Self {
            degree,
            matrix: Matrix::zeros((size, size)),
            rhs: Vector::zeros(size),
            next: 0,
        }
    }

    /// Adds a row from `(segment, derivative order, x, weight)` terms.
    ///
    /// Each term places `weight` times the derivative basis of `segment`
    /// at `x` in that segment's columns.
    fn row(&mut self, terms: &[(usize, usize, f64, f64)], rhs: f64) {
        for &(segment, order, x, weight) in terms {
            let offset = segment * (self.degree + 1);
            for (p, value) in basis(self.degree, order, x).into_iter().enumerate() {
                self.matrix[[self.next, offset + p]] += weight * value;
            }
        }
        self.rhs[self.next] = rhs;
        self.next += 1;
    }

    /// Adds the row fixing the first segment's leading coefficient to zero.
    fn leading_zero(&mut self) {
        self.matrix[[self.next, 0]] = 1.0;
        self.next += 1;
    }
}

fn solve(system: Assembly, knots: &[Point]) -> Result<Spline, Error> {
    let Assembly {
        degree,
        matrix,
        rhs,
        ..
    } = system;

    let solution = cramer::solve(&matrix, &rhs)?;
    let coefficients = solution
        .x
        .to_vec()
        .chunks(degree + 1)
        .map(<[f64]>::to_vec)
        .collect();

    log::debug!("spline: degree {degree} through {} knots", knots.len());
    Ok(Spline {
        degree,
        knots: knots.iter().map(|p| p.x).collect(),
        coefficients,
        system: Some(System { matrix, rhs }),
    })
}

/// Row of `d^order/dx^order [x^degree, ..., x, 1]` at `x`.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
fn basis(degree: usize, order: usize, x: f64) -> Vec<f64> {
    (0..=degree)
        .map(|p| {
            let power = degree - p;
            if power < order {
                0.0
            } else {
                falling(power, order) * x.powi((power - order) as i32)
            }
        })
        .collect()
}

/// Coefficients of the `order`-th derivative, highest power first.
fn differentiate(coefficients: &[f64], order: usize) -> Vec<f64> {
    let degree = coefficients.len().saturating_sub(1);
    if order > degree {
        return Vec::new();
    }
    coefficients[..=degree - order]
        .iter()
        .enumerate()
        .map(|(p, c)| c * falling(degree - p, order))
        .collect()
}

/// `n · (n-1) · ... · (n-k+1)`.
#[allow(clippy::cast_precision_loss)]
fn falling(n: usize, k: usize) -> f64 {
    (0..k).map(|m| (n - m) as f64).product()
}

fn horner(coefficients: &[f64], x: f64) -> f64 {
    coefficients.iter().fold(0.0, |acc, c| acc * x + c)
}
