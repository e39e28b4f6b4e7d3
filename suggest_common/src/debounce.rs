//! Cancellable single-shot deferred task used to debounce input.
//!
//! The timer never sleeps or spawns anything: the owner passes the current
//! `Instant` in and the hosting event loop asks for `deadline()` to know how long it
//! may block. At most one task is pending; scheduling a new one cancels the previous
//! (last writer wins, nothing is queued).
use std::time::{Duration, Instant};

/// Quiet period after the last keystroke before suggestions are recomputed.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Identifies one scheduled task so it can be cancelled later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

#[derive(Debug)]
struct PendingTask<T> {
    handle: TaskHandle,
    due: Instant,
    payload: T,
}

/// Debounce timer carrying the payload of the most recent event.
#[derive(Debug)]
pub struct DebounceTimer<T> {
    delay: Duration,
    pending: Option<PendingTask<T>>,
    next_id: u64,
}

impl<T> DebounceTimer<T> {
    /// Create a timer with the given quiet period.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            next_id: 0,
        }
    }

    /// Quiet period of this timer.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule `payload` to become due `delay` after `now`, replacing any pending task.
    pub fn schedule(&mut self, payload: T, now: Instant) -> TaskHandle {
        let handle = TaskHandle(self.next_id);
        self.next_id += 1;
        self.pending = Some(PendingTask {
            handle,
            due: now + self.delay,
            payload,
        });
        handle
    }

    /// Cancel the task behind `handle`. Returns `false` if it already fired or was replaced.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        let matches = self.pending.as_ref().is_some_and(|task| task.handle == handle);
        if matches {
            self.pending = None;
        }
        matches
    }

    /// Drop whatever is pending.
    pub fn cancel_all(&mut self) {
        self.pending = None;
    }

    /// When the pending task becomes due, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|task| task.due)
    }

    /// Whether a task is waiting.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Take the payload if its quiet period has elapsed at `now`.
    pub fn take_due(&mut self, now: Instant) -> Option<T> {
        let due = self.pending.as_ref().is_some_and(|task| now >= task.due);
        if !due {
            return None;
        }
        self.pending.take().map(|task| task.payload)
    }
}

impl<T> Default for DebounceTimer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}
