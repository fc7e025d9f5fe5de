use stepwise_core::{Point, PointSet};

use super::{Error, check_nodes, select};

/// A Lagrange interpolation at one `x`.
#[derive(Debug, Clone, PartialEq)]
pub struct Estimate {
    /// Interpolated value `Σ L_i(x)·y_i`.
    pub value: f64,

    /// Basis weights `L_i(x) = Π_{j≠i} (x - x_j) / (x_i - x_j)`, one per node.
    pub weights: Vec<f64>,
}

/// Interpolates through every point in `points`.
///
/// # Errors
///
/// Returns an error with fewer than two nodes or when two nodes share `x`.
pub fn interpolate(points: &PointSet, x: f64) -> Result<Estimate, Error> {
    check_nodes(points.as_slice())?;
    Ok(evaluate(points.as_slice(), x))
}

/// Interpolates along the line through the nodes at `indices`.
///
/// # Errors
///
/// Returns an error if an index is out of range or the nodes share `x`.
pub fn linear(points: &PointSet, indices: [usize; 2], x: f64) -> Result<Estimate, Error> {
    polynomial(points, &indices, x)
}

/// Interpolates along the parabola through the nodes at `indices`.
///
/// # Errors
///
/// Returns an error if an index is out of range or two nodes share `x`.
pub fn quadratic(points: &PointSet, indices: [usize; 3], x: f64) -> Result<Estimate, Error> {
    polynomial(points, &indices, x)
}

/// Interpolates through the nodes at `indices`.
///
/// # Errors
///
/// Returns an error if an index is out of range, fewer than two nodes are
/// chosen, or two nodes share `x`.
pub fn polynomial(points: &PointSet, indices: &[usize], x: f64) -> Result<Estimate, Error> {
    let nodes = select(points, indices)?;
    Ok(evaluate(&nodes, x))
}

fn evaluate(nodes: &[Point], x: f64) -> Estimate {
    let weights: Vec<f64> = nodes
        .iter()
        .enumerate()
        .map(|(i, pi)| {
            nodes
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .map(|(_, pj)| (x - pj.x) / (pi.x - pj.x))
                .product()
        })
        .collect();

    let value: f64 = weights.iter().zip(nodes).map(|(w, p)| w * p.y).sum();

    log::trace!("lagrange: {} nodes, f({x}) = {value}", nodes.len());
    Estimate { value, weights }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn exact_on_polynomial_data() {
        // y = 2x² - 3x + 4
        let f = |x: f64| 2.0 * x * x - 3.0 * x + 4.0;
        let points = PointSet::new([-1.0, 0.5, 2.0].map(|x| (x, f(x)))).unwrap();

        for x in [-3.0, 0.0, 1.25, 4.0] {
            let estimate = interpolate(&points, x).unwrap();
            assert_relative_eq!(estimate.value, f(x), epsilon = 1e-10);
        }
    }

    #[test]
    fn weights_sum_to_one() {
        let points = PointSet::new([(0.0, 3.0), (1.0, -1.0), (4.0, 2.0), (6.0, 0.0)]).unwrap();
        let estimate = interpolate(&points, 2.5).unwrap();
        assert_relative_eq!(estimate.weights.iter().sum::<f64>(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn weight_is_one_at_its_own_node() {
        let points = PointSet::new([(0.0, 3.0), (1.0, -1.0), (4.0, 2.0)]).unwrap();
        let estimate = interpolate(&points, 1.0).unwrap();
        assert_eq!(estimate.weights, vec![0.0, 1.0, 0.0]);
        assert_relative_eq!(estimate.value, -1.0);
    }

    #[test]
    fn selectors_match_newton() {
        let points = PointSet::new([(0.0, 1.0), (1.0, 3.0), (3.0, 2.0), (4.0, 5.0)]).unwrap();
        for x in [0.5, 2.0, 3.5] {
            let l = quadratic(&points, [0, 1, 3], x).unwrap();
            let n = super::super::newton::quadratic(&points, [0, 1, 3], x).unwrap();
            assert_relative_eq!(l.value, n.value, epsilon = 1e-12);
        }
        assert_relative_eq!(linear(&points, [1, 2], 2.0).unwrap().value, 2.5);
    }

    #[test]
    fn duplicate_nodes_fail() {
        let points = PointSet::new([(1.0, 1.0), (1.0, 2.0)]).unwrap();
        assert!(matches!(
            interpolate(&points, 0.5),
            Err(Error::DuplicateNode { first: 0, second: 1, .. })
        ));
    }
}
