use stepwise_core::{Matrix, Vector};

use crate::linear::{Error, check_system};

use super::{
    Pivoting, Solution,
    gauss::{Steps, augment, select_pivot},
    uniform_shortcut,
};

/// Solves `A·x = b` by Gauss-Jordan reduction.
///
/// Each pivot row is scaled to a leading one and the pivot column is
/// cleared in every other row, leaving `[I|x]`. Snapshots use the same
/// [`Steps`] type as [`gauss`](super::gauss).
///
/// # Errors
///
/// Returns the same errors as [`gauss::solve`](super::gauss::solve).
pub fn solve(a: &Matrix, b: &Vector, pivoting: Pivoting) -> Result<Solution<Steps>, Error> {
    let n = check_system(a, b)?;

    if let Some(x) = uniform_shortcut(a, b) {
        log::debug!("gauss-jordan: uniform system of size {n}, shortcut applied");
        return Ok(Solution::shortcut(x));
    }

    let mut m = augment(a, b);
    let mut steps = Steps::initial(&m);

    for k in 0..n {
        let swap = select_pivot(&mut m, k, pivoting)?;

        let pivot = m[[k, k]];
        m.row_mut(k).mapv_inplace(|v| v / pivot);

        for i in (0..n).filter(|&i| i != k) {
            let factor = m[[i, k]];
            for j in 0..=n {
                let delta = factor * m[[k, j]];
                m[[i, j]] -= delta;
            }
        }

        log::trace!("gauss-jordan: reduced column {k}");
        steps.record(k, swap, &m);
    }

    let x = m.column(n).to_owned();

    log::debug!("gauss-jordan: solved system of size {n}");
    Ok(Solution::computed(x, steps))
}
