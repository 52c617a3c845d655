use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cooperative cancellation handle for a running search.
///
/// Clone it, hand one copy to the builder via
/// [`cancel()`](crate::SearchBuilder::cancel), keep the other, and call
/// [`cancel()`](CancelToken::cancel) from any thread. The engine checks the
/// token between node visits and winds down all walker threads promptly.
///
/// Cancellation is a normal termination path, not a failure: the search
/// returns `Ok` with everything delivered so far and
/// [`Results::cancelled`](crate::Results::cancelled) set.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Signal cancellation. Idempotent.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation has been signalled.
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}
