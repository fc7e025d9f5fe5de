//! Interpolation through sampled points.
//!
//! # Methods
//!
//! - [`newton`] — divided-difference form of the interpolating polynomial
//! - [`lagrange`] — weighted sum of the node values
//! - [`spline`] — piecewise linear, quadratic and cubic polynomials
//!
//! Polynomial methods interpolate through a chosen subset of nodes, picked
//! by index with the `linear`, `quadratic` and `polynomial` selectors.

mod error;

pub mod lagrange;
pub mod newton;
pub mod spline;

pub use error::Error;

use stepwise_core::{Point, PointSet};

/// Picks the nodes at `indices` and checks them for interpolation.
pub(crate) fn select(points: &PointSet, indices: &[usize]) -> Result<Vec<Point>, Error> {
    let len = points.len();
    let nodes = indices
        .iter()
        .map(|&index| {
            points
                .as_slice()
                .get(index)
                .copied()
                .ok_or(Error::NodeIndex { index, len })
        })
        .collect::<Result<Vec<_>, _>>()?;
    check_nodes(&nodes)?;
    Ok(nodes)
}

/// Requires at least two nodes with distinct `x` values.
#[allow(clippy::float_cmp)]
pub(crate) fn check_nodes(nodes: &[Point]) -> Result<(), Error> {
    if nodes.len() < 2 {
        return Err(Error::TooFewNodes {
            count: nodes.len(),
            min: 2,
        });
    }
    for (first, a) in nodes.iter().enumerate() {
        for (second, b) in nodes.iter().enumerate().skip(first + 1) {
            if a.x == b.x {
                return Err(Error::DuplicateNode {
                    first,
                    second,
                    x: a.x,
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_reports_bad_indices() {
        let points = PointSet::new([(0.0, 0.0), (1.0, 1.0)]).unwrap();
        assert_eq!(
            select(&points, &[0, 4]),
            Err(Error::NodeIndex { index: 4, len: 2 })
        );
    }

    #[test]
    fn select_needs_two_distinct_nodes() {
        let points = PointSet::new([(0.0, 0.0), (1.0, 1.0), (0.0, 3.0)]).unwrap();
        assert_eq!(
            select(&points, &[1]),
            Err(Error::TooFewNodes { count: 1, min: 2 })
        );
        assert!(matches!(
            select(&points, &[0, 1, 2]),
            Err(Error::DuplicateNode {
                first: 0,
                second: 2,
                ..
            })
        ));
    }
}
