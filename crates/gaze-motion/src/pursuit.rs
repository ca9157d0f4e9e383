//! Exponentially-smoothed target tracking.

use gaze_core::GazePoint;

/// Continuous tracker: each tick the position moves a fixed fraction of the
/// remaining distance toward the target.
///
/// `update_target` may be called at any time to retarget without a
/// discontinuity — the position simply starts converging toward the new
/// target from wherever it is.  The pursuit has no terminal state; the
/// owning behavior decides when to stop advancing it.
#[derive(Debug, Clone)]
pub struct SmoothPursuit {
    target:     GazePoint,
    current:    GazePoint,
    smoothness: f32,
}

impl SmoothPursuit {
    /// `smoothness` is the per-tick convergence fraction in (0, 1]; values
    /// outside that range are clamped (a zero smoothness would never move).
    pub fn new(start: GazePoint, smoothness: f32) -> Self {
        Self {
            target: start,
            current: start,
            smoothness: smoothness.clamp(0.01, 1.0),
        }
    }

    /// Retarget the pursuit.  No snapping: convergence resumes smoothly.
    #[inline]
    pub fn update_target(&mut self, target: GazePoint) {
        self.target = target;
    }

    /// Advance one tick and return the new position.
    pub fn advance(&mut self) -> GazePoint {
        self.current.x += (self.target.x - self.current.x) * self.smoothness;
        self.current.y += (self.target.y - self.current.y) * self.smoothness;
        self.current
    }

    #[inline]
    pub fn position(&self) -> GazePoint {
        self.current
    }
}
