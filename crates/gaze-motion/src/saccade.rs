//! Ballistic gaze jump between two points.

use gaze_core::GazePoint;

/// Minimum per-tick progress increment; guards against a zero or negative
/// speed that would never complete.
pub const MIN_SPEED: f32 = 0.01;

/// Linear interpolation from `start` to `end`, driven by a per-call progress
/// increment rather than elapsed time.
///
/// Coupling progress to the fixed scheduler tick keeps saccades fast and
/// deterministic — a ballistic movement that cannot be slowed by a stalled
/// clock.  Progress is clamped to 1; the call after progress reaches 1
/// reports inactive with the position snapped exactly to `end`.
#[derive(Debug, Clone)]
pub struct Saccade {
    start:    GazePoint,
    end:      GazePoint,
    speed:    f32,
    progress: f32,
    current:  GazePoint,
}

impl Saccade {
    pub fn new(start: GazePoint, end: GazePoint, speed: f32) -> Self {
        Self {
            start,
            end,
            speed: speed.max(MIN_SPEED),
            progress: 0.0,
            current: start,
        }
    }

    /// Advance one tick.  Returns `true` while the jump is still in flight
    /// (including the tick on which progress first reaches 1).
    pub fn advance(&mut self) -> bool {
        if self.progress < 1.0 {
            self.progress = (self.progress + self.speed).min(1.0);
            self.current = if self.progress >= 1.0 {
                self.end
            } else {
                self.start.lerp(self.end, self.progress)
            };
            true
        } else {
            self.current = self.end;
            false
        }
    }

    #[inline]
    pub fn position(&self) -> GazePoint {
        self.current
    }

    /// Fraction of the jump completed, in [0, 1].
    #[inline]
    pub fn progress(&self) -> f32 {
        self.progress
    }
}
