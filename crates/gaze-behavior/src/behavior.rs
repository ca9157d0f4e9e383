//! The `Behavior` trait — the uniform capability every composite behavior
//! exposes to the scheduler.

use gaze_core::{GazePoint, GazeRng, Millis};

use crate::SensedContext;

/// The result of advancing a behavior by one tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Step {
    /// Where the eyes should look this tick.
    pub point: GazePoint,
    /// `false` means the behavior has completed and should be discarded.
    pub active: bool,
}

impl Step {
    #[inline]
    pub fn active(point: GazePoint) -> Step {
        Step { point, active: true }
    }

    /// A terminal step: the behavior emits one last point and is done.
    #[inline]
    pub fn done(point: GazePoint) -> Step {
        Step { point, active: false }
    }
}

/// A stateful driver expressing one social gaze intent.
///
/// The scheduler owns at most one `Box<dyn Behavior>` at a time and calls
/// [`advance`][Self::advance] once per tick with the current instant, a
/// read-only perception snapshot, and the engine RNG.  Implementations keep
/// all of their timing state internal; there is no cancellation hook —
/// superseding a behavior simply drops it.
pub trait Behavior: Send {
    /// Human-readable behavior name for status projection and logs.
    fn name(&self) -> &'static str;

    /// Current internal phase, if the behavior has one worth displaying.
    fn phase(&self) -> Option<&'static str> {
        None
    }

    /// `true` for the joint-attention gestures.  The scheduler consults this
    /// at deferred-trigger fire time: a pending initiating gesture is dropped
    /// rather than interrupting a gesture already in flight.
    fn is_joint_attention(&self) -> bool {
        false
    }

    /// Advance to `now` and report the position for this tick.
    fn advance(&mut self, now: Millis, ctx: &SensedContext, rng: &mut GazeRng) -> Step;
}
