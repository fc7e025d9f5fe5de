use crate::Trace;

/// How an iterative method finished.
///
/// Running out of iterations is not a status: methods report it as an
/// error so a non-converged value is never mistaken for an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// Met the tolerance of its criterion.
    Converged,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of an iterative method.
#[derive(Debug, Clone)]
pub struct Solution<T, R> {
    /// Final status.
    pub status: Status,

    /// The reported value (a root, or a solution vector).
    pub value: T,

    /// Iteration count when the method finished.
    pub iters: usize,

    /// One record per iteration.
    pub trace: Trace<R>,
}

impl<T, R> Solution<T, R> {
    /// Builds a converged solution.
    pub fn converged(value: T, iters: usize, trace: Trace<R>) -> Self {
        Self {
            status: Status::Converged,
            value,
            iters,
            trace,
        }
    }

    /// Builds a solution stopped by an observer.
    pub fn stopped(value: T, iters: usize, trace: Trace<R>) -> Self {
        Self {
            status: Status::StoppedByObserver,
            value,
            iters,
            trace,
        }
    }

    /// Returns `true` if the method met its tolerance.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }
}
