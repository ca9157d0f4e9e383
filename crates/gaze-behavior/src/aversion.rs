//! Brief, natural gaze-breaks away from the interaction partner.

use gaze_core::{GazePoint, GazeRng, Millis};
use gaze_motion::Fixation;

/// Periodic off-center gaze-breaks.
///
/// A sub-behavior consumed by [`MutualGaze`][crate::MutualGaze], not
/// installed by the scheduler directly.  Between aversions it is dormant;
/// once `now` passes the scheduled time it runs a short [`Fixation`] at an
/// off-center target, then reschedules.
///
/// The target is guaranteed at least 0.2 away from center horizontally so an
/// aversion is always visibly distinct from eye contact.
pub struct GazeAversion {
    aversion_ms:     u64,
    interval_min_ms: u64,
    interval_max_ms: u64,
    next_at:         Millis,
    fixation:        Option<Fixation>,
    current:         GazePoint,
}

impl GazeAversion {
    pub const DEFAULT_AVERSION_MS: u64 = 300;
    pub const DEFAULT_INTERVAL_MIN_MS: u64 = 1_000;
    pub const DEFAULT_INTERVAL_MAX_MS: u64 = 3_000;

    pub fn new(now: Millis, rng: &mut GazeRng) -> Self {
        Self::with_timing(
            Self::DEFAULT_AVERSION_MS,
            Self::DEFAULT_INTERVAL_MIN_MS,
            Self::DEFAULT_INTERVAL_MAX_MS,
            now,
            rng,
        )
    }

    /// Explicit timing, for tests and tuning.
    pub fn with_timing(
        aversion_ms:     u64,
        interval_min_ms: u64,
        interval_max_ms: u64,
        now:             Millis,
        rng:             &mut GazeRng,
    ) -> Self {
        let mut this = Self {
            aversion_ms,
            interval_min_ms,
            interval_max_ms: interval_max_ms.max(interval_min_ms),
            next_at: now,
            fixation: None,
            current: GazePoint::CENTER,
        };
        this.schedule_next(now, rng);
        this
    }

    fn schedule_next(&mut self, now: Millis, rng: &mut GazeRng) {
        let interval = rng.gen_range(self.interval_min_ms..=self.interval_max_ms);
        self.next_at = now + interval;
    }

    /// Sample an off-center target: horizontal offset sign-matched to a draw
    /// in [−0.4, 0.4] but pushed to at least ±0.2, vertical offset uniform
    /// in [−0.3, 0.3].
    fn sample_target(rng: &mut GazeRng) -> GazePoint {
        let dx = (rng.random::<f32>() - 0.5) * 0.8;
        let dy = (rng.random::<f32>() - 0.5) * 0.6;
        let x = 0.5 + if dx > 0.0 { dx.max(0.2) } else { dx.min(-0.2) };
        GazePoint::new(x, 0.5 + dy)
    }

    /// Advance to `now`.  Returns `true` while an aversion is in progress
    /// (including the tick one starts on); `false` on dormant ticks and on
    /// the tick an aversion just finished.
    pub fn update(&mut self, now: Millis, rng: &mut GazeRng) -> bool {
        if let Some(fixation) = &mut self.fixation {
            if fixation.advance(now) {
                self.current = fixation.position();
                return true;
            }
            // Aversion finished: clear it and schedule the next one.
            self.fixation = None;
            self.schedule_next(now, rng);
            return false;
        }

        if now >= self.next_at {
            let mut fixation = Fixation::new(Self::sample_target(rng), self.aversion_ms, now);
            fixation.advance(now);
            self.current = fixation.position();
            self.fixation = Some(fixation);
            return true;
        }

        false
    }

    /// `true` while an aversion fixation is running.
    #[inline]
    pub fn averting(&self) -> bool {
        self.fixation.is_some()
    }

    #[inline]
    pub fn position(&self) -> GazePoint {
        self.current
    }
}
