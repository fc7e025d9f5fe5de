use stepwise_core::{Matrix, Vector};

use crate::linear::{Error, check_system, matrix::square_size};

use super::{Solution, back_substitute, forward_substitute, uniform_shortcut};

/// Doolittle factors `A = L·U`.
#[derive(Debug, Clone, PartialEq)]
pub struct Factors {
    /// Unit lower-triangular factor.
    pub l: Matrix,

    /// Upper-triangular factor.
    pub u: Matrix,
}

/// Steps recorded by an LU solve.
#[derive(Debug, Clone, PartialEq)]
pub struct Steps {
    pub l: Matrix,
    pub u: Matrix,

    /// Intermediate solution of `L·y = b`.
    pub y: Vector,
}

/// Factors `A` into unit lower-triangular `L` and upper-triangular `U`.
///
/// No row exchanges are made.
///
/// # Errors
///
/// Returns [`Error::ZeroPivot`] when a diagonal entry of `U` is zero, or a
/// shape error if `a` is not square or is empty.
pub fn decompose(a: &Matrix) -> Result<Factors, Error> {
    let n = square_size(a)?;
    if n == 0 {
        return Err(Error::Empty);
    }

    let mut l = Matrix::zeros((n, n));
    let mut u = Matrix::zeros((n, n));

    for i in 0..n {
        for k in i..n {
            let sum: f64 = (0..i).map(|j| l[[i, j]] * u[[j, k]]).sum();
            u[[i, k]] = a[[i, k]] - sum;
        }

        #[allow(clippy::float_cmp)]
        if u[[i, i]] == 0.0 {
            return Err(Error::ZeroPivot { row: i });
        }

        l[[i, i]] = 1.0;
        for k in (i + 1)..n {
            let sum: f64 = (0..i).map(|j| l[[k, j]] * u[[j, i]]).sum();
            l[[k, i]] = (a[[k, i]] - sum) / u[[i, i]];
        }
    }

    Ok(Factors { l, u })
}

/// Solves `A·x = b` through `L·y = b` then `U·x = y`.
///
/// # Errors
///
/// Returns the errors of [`decompose`], or a shape error if `b` does not
/// match `a`.
pub fn solve(a: &Matrix, b: &Vector) -> Result<Solution<Steps>, Error> {
    let n = check_system(a, b)?;

    if let Some(x) = uniform_shortcut(a, b) {
        log::debug!("lu: uniform system of size {n}, shortcut applied");
        return Ok(Solution::shortcut(x));
    }

    let Factors { l, u } = decompose(a)?;
    let y = forward_substitute(&l, b);
    let x = back_substitute(&u, &y);

    log::debug!("lu: solved system of size {n}");
    Ok(Solution::computed(x, Steps { l, u, y }))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use ndarray::{arr1, arr2};

    use crate::linear::matrix::multiply;

    fn sample() -> Matrix {
        arr2(&[[4.0, 3.0, 2.0], [2.0, 1.0, 3.0], [3.0, 2.0, 1.0]])
    }

    #[test]
    fn factors_reproduce_matrix() {
        let a = sample();
        let Factors { l, u } = decompose(&a).unwrap();

        let product = multiply(&l, &u).unwrap();
        for (got, want) in product.iter().zip(a.iter()) {
            assert_relative_eq!(*got, *want, epsilon = 1e-12);
        }

        for i in 0..3 {
            assert_relative_eq!(l[[i, i]], 1.0);
            for j in (i + 1)..3 {
                assert_eq!(l[[i, j]], 0.0);
                assert_eq!(u[[j, i]], 0.0);
            }
        }
    }

    #[test]
    fn solves_through_forward_and_back_substitution() {
        let a = sample();
        let b = arr1(&[16.0, 13.0, 10.0]);

        let solution = solve(&a, &b).unwrap();
        assert_relative_eq!(solution.x[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(solution.x[1], 2.0, epsilon = 1e-12);
        assert_relative_eq!(solution.x[2], 3.0, epsilon = 1e-12);

        let steps = solution.steps().expect("computed route");
        assert_relative_eq!(steps.y[0], 16.0);
        assert_relative_eq!(steps.u[[2, 2]], -1.5, epsilon = 1e-12);
    }

    #[test]
    fn zero_leading_entry_is_a_zero_pivot() {
        let a = arr2(&[[0.0, 1.0], [1.0, 1.0]]);
        assert_eq!(decompose(&a), Err(Error::ZeroPivot { row: 0 }));
    }

    #[test]
    fn empty_matrix_is_rejected() {
        assert_eq!(decompose(&Matrix::zeros((0, 0))), Err(Error::Empty));
    }
}
