use std::fmt::Debug;

use log::Level;
use stepwise_core::Observer;

/// Logs every record it observes and never intervenes.
///
/// Records are written with their `Debug` form at the chosen [`Level`],
/// prefixed by a label naming the run. Installing a logger is up to the
/// caller.
#[derive(Debug, Clone)]
pub struct LogObserver {
    label: String,
    level: Level,
    observed: usize,
}

impl LogObserver {
    /// Creates an observer that logs at `level` under `label`.
    pub fn new(label: impl Into<String>, level: Level) -> Self {
        Self {
            label: label.into(),
            level,
            observed: 0,
        }
    }

    /// Returns the number of records observed so far.
    #[must_use]
    pub fn observed(&self) -> usize {
        self.observed
    }
}

impl Default for LogObserver {
    fn default() -> Self {
        Self::new("stepwise", Level::Debug)
    }
}

impl<R: Debug, A> Observer<R, A> for LogObserver {
    fn observe(&mut self, record: &R) -> Option<A> {
        self.observed += 1;
        log::log!(self.level, "{}: {record:?}", self.label);
        None
    }
}

impl<R: Debug, A> Observer<R, A> for &mut LogObserver {
    fn observe(&mut self, record: &R) -> Option<A> {
        Observer::<R, A>::observe(&mut **self, record)
    }
}
