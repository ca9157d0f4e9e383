//! Small-amplitude periodic gaze jitter.

use gaze_core::{GazePoint, GazeRng, Millis};

/// Cosmetic micro-jitter layered on a base position.
///
/// On each `update`, if more than `1000 / frequency_hz` ms have passed since
/// the last jitter, the position becomes `base + uniform(−a/2, +a/2)` per
/// axis and the timer resets (returns `true`); otherwise the base position
/// passes through unchanged (returns `false`).
///
/// Purely visual — never used to gate behavior completion.
#[derive(Debug)]
pub struct Microsaccades {
    amplitude:   f32,
    interval_ms: u64,
    last_fire:   Millis,
    current:     GazePoint,
}

impl Microsaccades {
    pub fn new(amplitude: f32, frequency_hz: f32, now: Millis) -> Self {
        Self {
            amplitude,
            interval_ms: (1000.0 / frequency_hz.max(0.001)) as u64,
            last_fire: now,
            current: GazePoint::CENTER,
        }
    }

    /// Advance to `now` over `base`.  Returns `true` if a micro-jitter fired.
    pub fn update(&mut self, now: Millis, base: GazePoint, rng: &mut GazeRng) -> bool {
        if now.since(self.last_fire) > self.interval_ms {
            let dx = (rng.random::<f32>() - 0.5) * self.amplitude;
            let dy = (rng.random::<f32>() - 0.5) * self.amplitude;
            self.current = GazePoint::new(base.x + dx, base.y + dy);
            self.last_fire = now;
            true
        } else {
            self.current = base;
            false
        }
    }

    #[inline]
    pub fn position(&self) -> GazePoint {
        self.current
    }
}
