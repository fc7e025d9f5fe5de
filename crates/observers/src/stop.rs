use stepwise_core::Observer;

use crate::traits::{CanStopEarly, HasError, HasIteration};

/// Stops a solver once it has run `limit` iterations.
///
/// Unlike the criterion's cap, which fails with a non-convergence error,
/// this returns the current iterate with a stopped status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IterationBudget {
    limit: usize,
}

impl IterationBudget {
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }
}

impl<R: HasIteration, A: CanStopEarly> Observer<R, A> for IterationBudget {
    fn observe(&mut self, record: &R) -> Option<A> {
        (record.iteration() >= self.limit).then(A::stop_early)
    }
}

/// Stops a solver once its convergence measure drops below `tolerance`.
///
/// Useful for a looser answer than the criterion asks for, after a minimum
/// number of iterations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoodEnough {
    tolerance: f64,
    min_iters: usize,
}

impl GoodEnough {
    #[must_use]
    pub fn new(tolerance: f64) -> Self {
        Self {
            tolerance,
            min_iters: 1,
        }
    }

    /// Requires at least `min_iters` iterations before stopping.
    #[must_use]
    pub fn with_min_iters(self, min_iters: usize) -> Self {
        Self { min_iters, ..self }
    }
}

impl<R: HasIteration + HasError, A: CanStopEarly> Observer<R, A> for GoodEnough {
    fn observe(&mut self, record: &R) -> Option<A> {
        let ready = record.iteration() >= self.min_iters;
        (ready && record.error() < self.tolerance).then(A::stop_early)
    }
}
