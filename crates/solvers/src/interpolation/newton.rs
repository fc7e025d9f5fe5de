use stepwise_core::{Point, PointSet};

use super::{Error, check_nodes, select};

/// A Newton divided-difference interpolation at one `x`.
#[derive(Debug, Clone, PartialEq)]
pub struct Estimate {
    /// Interpolated value.
    pub value: f64,

    /// Leading divided differences `f[x0]`, `f[x0, x1]`, ... in order.
    pub coefficients: Vec<f64>,

    /// Full divided-difference table; see [`table`].
    pub table: Vec<Vec<f64>>,
}

/// Builds the divided-difference table.
///
/// Column `k` holds the `k`-th order differences `f[x_i, ..., x_{i+k}]` for
/// every `i`, so it is `k` entries shorter than column `0`, which holds the
/// node values.
///
/// # Errors
///
/// Returns an error with fewer than two nodes or when two nodes share `x`.
pub fn table(points: &PointSet) -> Result<Vec<Vec<f64>>, Error> {
    check_nodes(points.as_slice())?;
    Ok(divided_differences(points.as_slice()))
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

/// Interpolates through the nodes at `indices`, in the given order.
///
/// # Errors
///
/// Returns an error if an index is out of range, fewer than two nodes are
/// chosen, or two nodes share `x`.
pub fn polynomial(points: &PointSet, indices: &[usize], x: f64) -> Result<Estimate, Error> {
    let nodes = select(points, indices)?;
    Ok(evaluate(&nodes, x))
}

fn divided_differences(nodes: &[Point]) -> Vec<Vec<f64>> {
    let n = nodes.len();
    let mut table: Vec<Vec<f64>> = Vec::with_capacity(n);
    table.push(nodes.iter().map(|p| p.y).collect());

    for k in 1..n {
        let prev = &table[k - 1];
        let column = (0..n - k)
            .map(|i| (prev[i + 1] - prev[i]) / (nodes[i + k].x - nodes[i].x))
            .collect();
        table.push(column);
    }

    table
}

fn evaluate(nodes: &[Point], x: f64) -> Estimate {
    let table = divided_differences(nodes);
    let coefficients: Vec<f64> = table.iter().map(|column| column[0]).collect();

    let mut value = 0.0;
    let mut basis = 1.0;
    for (k, c) in coefficients.iter().enumerate() {
        value += c * basis;
        basis *= x - nodes[k].x;
    }

    log::trace!("newton: {} nodes, f({x}) = {value}", nodes.len());
    Estimate {
        value,
        coefficients,
        table,
    }
}
