//! `DelayQueue` — wall-clock-ordered deferred actions.
//!
//! # Why this exists
//!
//! The engine must sometimes act *later*: an initiating-gaze decision is
//! logged immediately but its motor onset is delayed by a fixed interval.
//! A timer-callback approach would scatter "is this still valid?" checks
//! across call sites; instead the scheduler owns one queue, drains it at the
//! top of every tick, and revalidates each item at the single drain site.
//!
//! # Revalidation contract
//!
//! Between `push` and `drain_due` the engine's state may have changed
//! arbitrarily (behaviors installed, superseded, completed).  The caller
//! must re-check an item's preconditions at fire time and silently no-op if
//! they no longer hold — the queue itself promises only ordering.

use std::collections::BTreeMap;

use gaze_core::Millis;

/// A queue mapping future instants → actions due at that instant.
///
/// Deferred times need not land on the tick grid; `drain_due` returns
/// everything scheduled at or before `now`.
pub struct DelayQueue<T> {
    inner: BTreeMap<Millis, Vec<T>>,
    /// Cached total item count for O(1) `len()`.
    total: usize,
}

impl<T> Default for DelayQueue<T> {
    fn default() -> Self {
        Self { inner: BTreeMap::new(), total: 0 }
    }
}

impl<T> DelayQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `item` to fire at `at`.
    pub fn push(&mut self, at: Millis, item: T) {
        self.inner.entry(at).or_default().push(item);
        self.total += 1;
    }

    /// Remove and return every item due at or before `now`, in time order.
    ///
    /// Returns an empty vec on ticks with nothing due (the common case).
    pub fn drain_due(&mut self, now: Millis) -> Vec<T> {
        if self.next_due().is_none_or(|due| due > now) {
            return Vec::new();
        }
        // Keys strictly after `now` stay queued; everything else drains.
        let later = self.inner.split_off(&Millis(now.0 + 1));
        let due = std::mem::replace(&mut self.inner, later);
        let items: Vec<T> = due.into_values().flatten().collect();
        self.total -= items.len();
        items
    }

    /// The earliest scheduled instant, or `None` if the queue is empty.
    pub fn next_due(&self) -> Option<Millis> {
        self.inner.keys().next().copied()
    }

    /// Total queued items across all future instants.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
