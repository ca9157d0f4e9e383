//! Bounded-duration gaze hold.

use gaze_core::{GazePoint, Millis};

/// Holds a target point for a fixed duration from creation.
///
/// `advance` reports active while `elapsed < duration_ms`; once the duration
/// has elapsed it reports inactive, with the position still equal to the
/// target so the owning behavior can hand the final point onward.
#[derive(Debug, Clone)]
pub struct Fixation {
    target:      GazePoint,
    duration_ms: u64,
    started_at:  Millis,
}

impl Fixation {
    pub fn new(target: GazePoint, duration_ms: u64, now: Millis) -> Self {
        Self { target, duration_ms, started_at: now }
    }

    /// Advance to `now`.  Returns `true` while the hold is still in progress.
    pub fn advance(&mut self, now: Millis) -> bool {
        now.since(self.started_at) < self.duration_ms
    }

    /// The held target — constant for the fixation's whole lifetime.
    #[inline]
    pub fn position(&self) -> GazePoint {
        self.target
    }

    /// Milliseconds since the fixation began.
    #[inline]
    pub fn elapsed(&self, now: Millis) -> u64 {
        now.since(self.started_at)
    }
}
