//! Trailing-edge debouncer
//!
//! A timer state machine that turns a burst of input events into a single
//! committed value. Each event cancels the pending emission and schedules a
//! new one `window` later; when the deadline passes the latest value is
//! emitted and the machine clears. There is no leading-edge emission.
//!
//! The machine owns no timer. Drivers sleep until [`Debouncer::deadline`] and
//! then call [`Debouncer::poll`].

use std::time::{Duration, Instant};

/// Debounce state for values of type `T`
#[derive(Clone, Debug)]
pub struct Debouncer<T> {
    window: Duration,
    pending: Option<Pending<T>>,
}

#[derive(Clone, Debug)]
struct Pending<T> {
    value: T,
    deadline: Instant,
}

impl<T> Debouncer<T> {
    /// Create a debouncer with the given idle window
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    /// Record an event at `now`, replacing any pending value
    ///
    /// Returns the new deadline.
    pub fn push(&mut self, value: T, now: Instant) -> Instant {
        let deadline = now + self.window;
        self.pending = Some(Pending { value, deadline });
        deadline
    }

    /// When the pending value is due, if any
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    /// Whether a value is waiting to be emitted
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Emit the pending value if its deadline has passed at `now`
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let due = self.pending.as_ref().is_some_and(|p| p.deadline <= now);
        if due { self.fire() } else { None }
    }

    fn fire(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.value)
    }

    /// Drop the pending value without emitting it
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
