use stepwise_core::{Matrix, Vector};

use crate::linear::{
    Error, check_system,
    matrix::{adjugate, determinant},
};

use super::{Solution, uniform_shortcut};

/// Steps recorded by an inverse solve.
#[derive(Debug, Clone, PartialEq)]
pub struct Steps {
    /// `A⁻¹`, computed as `adj(A) / det(A)`.
    pub inverse: Matrix,

    /// Determinant of `A`.
    pub det: f64,
}

/// Solves `A·x = b` as `x = A⁻¹·b`.
///
/// # Errors
///
/// Returns [`Error::SingularMatrix`] if `det(A)` is zero, or a shape error
/// if the system is not square or `b` does not match.
pub fn solve(a: &Matrix, b: &Vector) -> Result<Solution<Steps>, Error> {
    let n = check_system(a, b)?;

    if let Some(x) = uniform_shortcut(a, b) {
        log::debug!("inverse: uniform system of size {n}, shortcut applied");
        return Ok(Solution::shortcut(x));
    }

    let det = determinant(a)?;
    #[allow(clippy::float_cmp)]
    if det == 0.0 {
        return Err(Error::SingularMatrix);
    }

    let inverse = adjugate(a)? / det;
    let x = inverse.dot(b);

    log::debug!("inverse: solved system of size {n}, det(A) = {det}");
    Ok(Solution::computed(x, Steps { inverse, det }))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use ndarray::{arr1, arr2};

    #[test]
    fn multiplies_by_inverse() {
        let a = arr2(&[[4.0, 7.0], [2.0, 6.0]]);
        let b = arr1(&[1.0, 2.0]);

        let solution = solve(&a, &b).unwrap();
        assert_relative_eq!(solution.x[0], -0.8, epsilon = 1e-12);
        assert_relative_eq!(solution.x[1], 0.6, epsilon = 1e-12);

        let steps = solution.steps().expect("computed route");
        assert_relative_eq!(steps.det, 10.0);
        assert_relative_eq!(steps.inverse[[0, 1]], -0.7, epsilon = 1e-12);
    }

    #[test]
    fn singular_system_fails() {
        let a = arr2(&[[3.0, 6.0], [1.0, 2.0]]);
        let b = arr1(&[1.0, 2.0]);
        assert_eq!(solve(&a, &b), Err(Error::SingularMatrix));
    }
}
