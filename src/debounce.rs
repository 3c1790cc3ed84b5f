//! Trailing-edge debounce with explicit time, so the collapse behavior is
//! testable without timers. The DOM layer realizes the same semantics with
//! `gloo_timers::callback::Timeout`.

/// Collapses repeated calls within a quiet period into a single trailing
/// fire carrying the last call's arguments.
#[derive(Debug)]
pub struct Debouncer<T> {
    quiet_ms: f64,
    pending: Option<(T, f64)>,
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(10.0)
    }
}

impl<T> Debouncer<T> {
    pub fn new(quiet_ms: f64) -> Self {
        Self {
            quiet_ms,
            pending: None,
        }
    }

    /// Record a call. Any previously pending fire is cancelled and the
    /// deadline re-arms from `now_ms`.
    pub fn call(&mut self, args: T, now_ms: f64) {
        self.pending = Some((args, now_ms + self.quiet_ms));
    }

    /// Fire the pending call if its quiet period has elapsed. Returns the
    /// recorded arguments at most once per burst.
    pub fn poll(&mut self, now_ms: f64) -> Option<T> {
        match &self.pending {
            Some((_, deadline)) if now_ms >= *deadline => {
                self.pending.take().map(|(args, _)| args)
            }
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop the pending call without firing it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
