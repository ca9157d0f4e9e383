//! Sustained eye contact with natural aversions.

use gaze_core::{GazePoint, GazeRng, Millis};
use gaze_motion::SmoothPursuit;

use crate::{Behavior, GazeAversion, SensedContext, Step};

/// Default idle behavior whenever exactly one face is present.
///
/// A [`SmoothPursuit`] tracks the mirrored primary face (or drifts back to
/// center when the user steps away), pre-empted by [`GazeAversion`]'s
/// periodic gaze-breaks.  Never terminates on its own — only the scheduler
/// supersedes it.
pub struct MutualGaze {
    pursuit:  SmoothPursuit,
    aversion: GazeAversion,
}

impl MutualGaze {
    pub const DEFAULT_SMOOTHNESS: f32 = 0.1;

    /// `from` is the gaze position at install time, so tracking starts where
    /// the eyes already are.
    pub fn new(from: GazePoint, now: Millis, rng: &mut GazeRng) -> Self {
        Self::with_smoothness(Self::DEFAULT_SMOOTHNESS, from, now, rng)
    }

    pub fn with_smoothness(smoothness: f32, from: GazePoint, now: Millis, rng: &mut GazeRng) -> Self {
        Self {
            pursuit:  SmoothPursuit::new(from, smoothness),
            aversion: GazeAversion::new(now, rng),
        }
    }
}

impl Behavior for MutualGaze {
    fn name(&self) -> &'static str {
        "MutualGaze"
    }

    fn phase(&self) -> Option<&'static str> {
        self.aversion.averting().then_some("averting")
    }

    fn advance(&mut self, now: Millis, ctx: &SensedContext, rng: &mut GazeRng) -> Step {
        // An active aversion pre-empts tracking for the whole gaze-break.
        if self.aversion.update(now, rng) {
            return Step::active(self.aversion.position());
        }

        self.pursuit.update_target(ctx.user_target());
        Step::active(self.pursuit.advance())
    }
}
