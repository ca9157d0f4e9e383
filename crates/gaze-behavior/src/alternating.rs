//! Alternating gaze between two detected faces.

use gaze_core::{GazePoint, GazeRng, Millis};
use gaze_motion::Saccade;

use crate::{Behavior, FaceSlot, SensedContext, Step};

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum AltState {
    Dwelling,
    Saccading,
}

/// Dwell on one face, saccade to the other, repeat.
///
/// Selected by the scheduler whenever a second face is present.  Target-loss
/// policy: if the attended face vanishes the behavior flips to the other
/// slot within the same tick; if neither slot has a valid target it emits
/// center and reports inactive so the scheduler reselects.
pub struct AlternatingGaze {
    state:         AltState,
    active_slot:   FaceSlot,
    dwell_ms:      u64,
    saccade_speed: f32,
    state_since:   Millis,
    saccade:       Option<Saccade>,
    current:       GazePoint,
}

impl AlternatingGaze {
    pub const DEFAULT_DWELL_MS: u64 = 2_000;
    pub const DEFAULT_SACCADE_SPEED: f32 = 0.15;

    pub fn new(from: GazePoint, now: Millis) -> Self {
        Self::with_timing(Self::DEFAULT_DWELL_MS, Self::DEFAULT_SACCADE_SPEED, from, now)
    }

    pub fn with_timing(dwell_ms: u64, saccade_speed: f32, from: GazePoint, now: Millis) -> Self {
        Self {
            state:         AltState::Dwelling,
            active_slot:   FaceSlot::Primary,
            dwell_ms,
            saccade_speed,
            state_since:   now,
            saccade:       None,
            current:       from,
        }
    }

    /// Which face slot the behavior is currently attending to.
    #[inline]
    pub fn active_slot(&self) -> FaceSlot {
        self.active_slot
    }

    /// The attended face vanished: flip to the other slot, or give up if
    /// that one is gone too.
    fn recover_from_loss(&mut self, now: Millis, ctx: &SensedContext) -> Step {
        tracing::debug!(slot = ?self.active_slot, "alternating gaze target lost");
        self.saccade = None;
        self.state = AltState::Dwelling;
        self.active_slot = self.active_slot.other();

        match ctx.face_target(self.active_slot) {
            Some(target) => {
                self.state_since = now;
                self.current = target;
                Step::active(target)
            }
            None => {
                self.current = GazePoint::CENTER;
                Step::done(GazePoint::CENTER)
            }
        }
    }

    fn advance_dwell(&mut self, now: Millis, ctx: &SensedContext, target: GazePoint) -> Step {
        self.current = target;

        if now.since(self.state_since) >= self.dwell_ms {
            match ctx.face_target(self.active_slot.other()) {
                Some(next) => {
                    self.saccade = Some(Saccade::new(self.current, next, self.saccade_speed));
                    self.state = AltState::Saccading;
                }
                None => {
                    // Other face not visible — keep dwelling on this one.
                    self.state_since = now;
                }
            }
        }
        Step::active(self.current)
    }

    fn advance_saccade(&mut self, now: Millis, ctx: &SensedContext) -> Step {
        let in_flight = match &mut self.saccade {
            Some(saccade) => {
                let active = saccade.advance();
                self.current = saccade.position();
                active
            }
            None => false,
        };
        if in_flight {
            return Step::active(self.current);
        }

        // Saccade finished: the other face officially becomes the active one.
        self.active_slot = self.active_slot.other();
        self.state = AltState::Dwelling;
        self.state_since = now;
        self.saccade = None;

        // Re-assert the exact target position to correct cumulative rounding.
        match ctx.face_target(self.active_slot) {
            Some(target) => {
                self.current = target;
                Step::active(target)
            }
            None => {
                self.current = GazePoint::CENTER;
                Step::done(GazePoint::CENTER)
            }
        }
    }
}

impl Behavior for AlternatingGaze {
    fn name(&self) -> &'static str {
        "AlternatingGaze"
    }

    fn phase(&self) -> Option<&'static str> {
        Some(match self.state {
            AltState::Dwelling => "dwelling",
            AltState::Saccading => "saccading",
        })
    }

    fn advance(&mut self, now: Millis, ctx: &SensedContext, _rng: &mut GazeRng) -> Step {
        let Some(target) = ctx.face_target(self.active_slot) else {
            return self.recover_from_loss(now, ctx);
        };

        match self.state {
            AltState::Dwelling => self.advance_dwell(now, ctx, target),
            AltState::Saccading => self.advance_saccade(now, ctx),
        }
    }
}
