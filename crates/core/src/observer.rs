/// Receives solver events and decides how the iteration should proceed.
///
/// Iterative methods hand every record they append to their trace to an
/// observer before testing for convergence. Returning `Some(action)` steers
/// the method; `None` lets it continue unchanged.
///
/// Closures implement `Observer`, and `()` is a no-op observer used by the
/// `*_unobserved` entry points.
pub trait Observer<E, A> {
    /// Observes a solver event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

/// Control actions understood by every iterative method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop now and return the current iterate with
    /// [`Status::StoppedByObserver`](crate::Status::StoppedByObserver).
    StopEarly,
}
