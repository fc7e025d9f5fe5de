use stepwise_core::Observer;

use crate::traits::{HasError, HasIteration};

/// Collects the convergence measure of every iteration.
///
/// The history never stops a solver. It suits convergence studies, such as
/// checking that an open method's error shrinks quadratically.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorHistory {
    entries: Vec<(usize, f64)>,
}

impl ErrorHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `(iteration, error)` pairs in the order observed.
    #[must_use]
    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    /// Returns the errors in the order observed.
    pub fn errors(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|&(_, error)| error)
    }

    /// Returns `e[k+1] / e[k]^order` for each consecutive pair of errors.
    ///
    /// Ratios that settle near a constant indicate convergence of that order.
    #[must_use]
    pub fn ratios(&self, order: f64) -> Vec<f64> {
        self.entries
            .windows(2)
            .map(|pair| pair[1].1 / pair[0].1.powf(order))
            .collect()
    }
}

impl<R: HasIteration + HasError, A> Observer<R, A> for &mut ErrorHistory {
    fn observe(&mut self, record: &R) -> Option<A> {
        self.entries.push((record.iteration(), record.error()));
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use stepwise_core::{Criterion, FnEquation};
    use stepwise_solvers::root::{bisection, newton_raphson};

    #[test]
    fn newton_converges_quadratically() {
        let f = FnEquation::new(|x: f64| x * x - 4.0).with_derivative(|x: f64| 2.0 * x);
        let criterion = Criterion::new(1e-6, 50).unwrap();
        let mut history = ErrorHistory::new();

        let solution = newton_raphson::solve(&f, 3.0, &criterion, &mut history).unwrap();

        assert_eq!(history.entries().len(), solution.iters);
        assert_eq!(history.entries()[0].0, 1);

        // Late ratios e[k+1] / e[k]² level off for a simple root.
        let ratios = history.ratios(2.0);
        let last = ratios[ratios.len() - 1];
        let before = ratios[ratios.len() - 2];
        assert_relative_eq!(last, before, max_relative = 0.1);
    }

    #[test]
    fn bisection_converges_linearly() {
        let f = FnEquation::new(|x: f64| x * x - 2.0);
        let criterion = Criterion::new(1e-8, 100).unwrap();
        let mut history = ErrorHistory::new();

        bisection::solve(&f, [1.0, 2.0], &criterion, &mut history).unwrap();

        assert!(history.errors().all(|e| e > 0.0));
        assert!(history.entries().len() > 20);
    }
}
