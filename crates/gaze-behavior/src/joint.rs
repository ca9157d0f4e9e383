//! Joint-attention gestures: look to a side, hold, return to the user.

use gaze_core::{GazePoint, GazeRng, Millis, Side};

use crate::{Behavior, SensedContext, Step};

/// Who initiated the shared-gaze gesture.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum JointKind {
    /// Triggered by the user's observed head turn; the robot follows the
    /// user's point of regard outward, i.e. looks *opposite* the turn.
    Responding,
    /// Triggered by a game event or keyboard input; the robot looks *toward*
    /// the requested side to draw the user's attention there.
    Initiating,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum JaPhase {
    TransitionToSide,
    Hold,
    ReturnToUser,
    Done,
}

/// One-shot four-phase gesture shared by both joint-attention forms.
///
/// `TransitionToSide → Hold → ReturnToUser → Done`, each transition an
/// unconditional elapsed-time check.  The return target is the *current*
/// mirrored face position, re-read every tick, so a moving face is tracked
/// back toward.  There is no cancellation path once started — the scheduler
/// pre-empts by dropping the whole behavior.
pub struct JointAttention {
    kind:          JointKind,
    phase:         JaPhase,
    phase_since:   Millis,
    from:          GazePoint,
    side_target:   GazePoint,
    transition_ms: u64,
    hold_ms:       u64,
    return_ms:     u64,
    current:       GazePoint,
}

impl JointAttention {
    pub const DEFAULT_TRANSITION_MS: u64 = 300;
    pub const DEFAULT_HOLD_MS: u64 = 2_000;
    pub const DEFAULT_RETURN_MS: u64 = 300;

    /// Respond to the user's head turn: user looked `user_head` → the robot
    /// looks to the mirrored side (left turn → x = 0.8).
    pub fn responding(user_head: Side, from: GazePoint, now: Millis) -> Self {
        let x = match user_head {
            Side::Left => 0.8,
            Side::Right => 0.2,
        };
        Self::with_target(JointKind::Responding, GazePoint::new(x, 0.5), from, now)
    }

    /// Initiate toward `look` (left → x = 0.2).
    pub fn initiating(look: Side, from: GazePoint, now: Millis) -> Self {
        let x = match look {
            Side::Left => 0.2,
            Side::Right => 0.8,
        };
        Self::with_target(JointKind::Initiating, GazePoint::new(x, 0.5), from, now)
    }

    fn with_target(kind: JointKind, side_target: GazePoint, from: GazePoint, now: Millis) -> Self {
        Self {
            kind,
            phase: JaPhase::TransitionToSide,
            phase_since: now,
            from,
            side_target,
            transition_ms: Self::DEFAULT_TRANSITION_MS,
            hold_ms: Self::DEFAULT_HOLD_MS,
            return_ms: Self::DEFAULT_RETURN_MS,
            current: from,
        }
    }

    #[inline]
    pub fn kind(&self) -> JointKind {
        self.kind
    }

    fn phase_t(&self, now: Millis, duration_ms: u64) -> f32 {
        if duration_ms == 0 {
            return 1.0;
        }
        (now.since(self.phase_since) as f32 / duration_ms as f32).min(1.0)
    }
}

impl Behavior for JointAttention {
    fn name(&self) -> &'static str {
        match self.kind {
            JointKind::Responding => "RespondingJointAttention",
            JointKind::Initiating => "InitiatingJointAttention",
        }
    }

    fn phase(&self) -> Option<&'static str> {
        Some(match self.phase {
            JaPhase::TransitionToSide => "transition-to-side",
            JaPhase::Hold => "hold",
            JaPhase::ReturnToUser => "return-to-user",
            JaPhase::Done => "done",
        })
    }

    fn is_joint_attention(&self) -> bool {
        true
    }

    fn advance(&mut self, now: Millis, ctx: &SensedContext, _rng: &mut GazeRng) -> Step {
        match self.phase {
            JaPhase::TransitionToSide => {
                let t = self.phase_t(now, self.transition_ms);
                self.current = self.from.lerp(self.side_target, t);
                if t >= 1.0 {
                    self.phase = JaPhase::Hold;
                    self.phase_since = now;
                }
                Step::active(self.current)
            }
            JaPhase::Hold => {
                self.current = self.side_target;
                if now.since(self.phase_since) >= self.hold_ms {
                    self.phase = JaPhase::ReturnToUser;
                    self.phase_since = now;
                    self.from = self.current;
                }
                Step::active(self.current)
            }
            JaPhase::ReturnToUser => {
                // Re-read the user position every tick: a moving face is
                // tracked back toward during the return.
                let user = ctx.user_target();
                let t = self.phase_t(now, self.return_ms);
                self.current = self.from.lerp(user, t);
                if t >= 1.0 {
                    self.phase = JaPhase::Done;
                    return Step::done(self.current);
                }
                Step::active(self.current)
            }
            JaPhase::Done => {
                self.current = ctx.user_target();
                Step::done(self.current)
            }
        }
    }
}
