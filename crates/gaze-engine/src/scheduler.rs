//! The `Engine` struct and its tick loop.

use rustc_hash::FxHashSet;

use gaze_behavior::{AlternatingGaze, Behavior, JointAttention, MutualGaze, SensedContext};
use gaze_core::{EngineClock, EngineConfig, GazePoint, GazeRng, Millis, Side};

use crate::{DelayQueue, DropReason, EngineObserver, EngineStatus, FeedEvent, GazeSink};

/// Pupil-dilation factor passed to the sink.  Constant until arousal
/// modeling lands.
pub const PUPIL_SCALE: f32 = 1.0;

// ── Decision reporting ────────────────────────────────────────────────────────

/// Why an initiating-gaze decision resolved to "no gaze".
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Suppression {
    /// Observation-only mode is active.
    ObserveOnly,
    /// The initiating-gesture toggle is off.
    InitiatingDisabled,
}

impl Suppression {
    /// Log-row wording, matching the study's analysis scripts.
    pub fn reason(self) -> &'static str {
        match self {
            Suppression::ObserveOnly => "observation-only condition active",
            Suppression::InitiatingDisabled => "initiating joint attention disabled",
        }
    }
}

/// The outcome of one card-reveal trigger decision.
///
/// Emitted to the observer the moment the decision is made — the motor onset
/// follows [`EngineConfig::initiate_delay_ms`] later (if at all), but the
/// log must reflect decision time.
#[derive(Clone, Debug)]
pub struct Decision {
    pub card_id: String,
    /// `Some(side)` if gaze will fire; `None` if suppressed.
    pub gaze: Option<Side>,
    pub suppressed: Option<Suppression>,
    /// Engine instant of the decision.
    pub at: Millis,
}

impl Decision {
    /// The logged decision value: "left", "right", or "none".
    pub fn gaze_decision(&self) -> &'static str {
        match self.gaze {
            Some(Side::Left) => "left",
            Some(Side::Right) => "right",
            None => "none",
        }
    }

    /// The logged reason string; empty when gaze fired.
    pub fn reason(&self) -> &'static str {
        self.suppressed.map(Suppression::reason).unwrap_or("")
    }
}

// ── Deferred trigger payload ──────────────────────────────────────────────────

/// An initiating gesture scheduled for a later instant.
struct PendingTrigger {
    side:    Side,
    card_id: Option<String>,
}

// ── Engine ────────────────────────────────────────────────────────────────────

/// The gaze behavior engine.
///
/// Owns at most one active [`Behavior`], arbitrates which behavior runs next
/// from the sensed context, enforces the responding cooldown, and drives the
/// fixed tick.  Create via [`EngineBuilder`][crate::EngineBuilder].
///
/// # Shared-state contract
///
/// [`SensedContext`] is written only by the perception feed (through
/// [`apply_perception`][Self::apply_perception]) and read by the engine.
/// Everything here runs on one thread; a concurrent host must serialize feed
/// application and ticking onto the same executor.
pub struct Engine<S: GazeSink> {
    /// Global configuration (tick interval, toggles, cooldowns, seed, …).
    pub config: EngineConfig,

    /// Engine clock — advanced once per tick.
    pub clock: EngineClock,

    /// Perception snapshot, updated out-of-band by the feed.
    pub context: SensedContext,

    /// The output sink — receives the clamped point once per tick.
    pub sink: S,

    rng:             GazeRng,
    active:          Option<Box<dyn Behavior>>,
    deferred:        DelayQueue<PendingTrigger>,
    last_responding: Option<Millis>,
    seen_cards:      FxHashSet<String>,
    last_point:      GazePoint,
}

impl<S: GazeSink> Engine<S> {
    pub(crate) fn from_parts(config: EngineConfig, context: SensedContext, sink: S) -> Self {
        Self {
            clock:           config.make_clock(),
            rng:             GazeRng::new(config.seed),
            config,
            context,
            sink,
            active:          None,
            deferred:        DelayQueue::new(),
            last_responding: None,
            seen_cards:      FxHashSet::default(),
            last_point:      GazePoint::CENTER,
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run one tick: fire due triggers, advance/select a behavior, emit.
    ///
    /// Returns the point sent to the sink.
    pub fn tick<O: EngineObserver>(&mut self, observer: &mut O) -> GazePoint {
        let now = self.clock.now;
        observer.on_tick_start(now);

        // Deferred triggers run on the same tick queue, ahead of behavior
        // advancement, so a gesture installed now also moves now.
        for trigger in self.deferred.drain_due(now) {
            self.fire_trigger(trigger, now, observer);
        }

        let mut point = self.advance_active(now, observer);

        if point.is_none() {
            point = match self.select_behavior(now) {
                Some(mut behavior) => {
                    observer.on_behavior_start(now, behavior.name());
                    let step = behavior.advance(now, &self.context, &mut self.rng);
                    if step.active {
                        self.active = Some(behavior);
                    }
                    Some(step.point)
                }
                // No user in front: hold center with no behavior installed.
                None => Some(GazePoint::CENTER),
            };
        }

        let point = point.unwrap_or(GazePoint::CENTER).clamped();
        self.sink.set_gaze(point.x, point.y, PUPIL_SCALE);
        observer.on_gaze(now, point, PUPIL_SCALE);
        self.last_point = point;

        observer.on_tick_end(now);
        self.clock.advance();
        point
    }

    /// Run exactly `n` ticks.  Useful for tests and scripted sessions.
    pub fn run_ticks<O: EngineObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.tick(observer);
        }
    }

    /// Copy one face-detection update into the sensed context.
    pub fn apply_perception(&mut self, update: &crate::FaceUpdate) {
        update.apply_to(&mut self.context);
    }

    /// Handle a revealed card: decide, log immediately, and (unless
    /// suppressed) schedule the initiating gesture after the motor delay.
    ///
    /// A card id already handled this session is ignored.
    pub fn handle_card_reveal<O: EngineObserver>(
        &mut self,
        reveal:   crate::CardReveal,
        observer: &mut O,
    ) {
        let now = self.clock.now;

        if !self.seen_cards.insert(reveal.card_id.clone()) {
            tracing::debug!(card = %reveal.card_id, "duplicate card reveal ignored");
            observer.on_trigger_dropped(now, DropReason::DuplicateCard);
            return;
        }

        let suppressed = self.suppression();
        let decision = Decision {
            card_id: reveal.card_id.clone(),
            gaze: suppressed.is_none().then_some(reveal.side),
            suppressed,
            at: now,
        };
        tracing::debug!(
            card = %decision.card_id,
            decision = decision.gaze_decision(),
            "initiating gaze decision"
        );
        observer.on_decision(&decision);

        if decision.gaze.is_some() {
            self.deferred.push(
                now + self.config.initiate_delay_ms,
                PendingTrigger { side: reveal.side, card_id: Some(reveal.card_id) },
            );
        }
    }

    /// Keyboard path: install an initiating gesture immediately, subject to
    /// the same suppression and single-gesture guards as the card path.
    ///
    /// Returns `true` if the gesture was installed.
    pub fn trigger_initiating<O: EngineObserver>(
        &mut self,
        side:     Side,
        observer: &mut O,
    ) -> bool {
        let now = self.clock.now;
        if self.suppression().is_some() {
            observer.on_trigger_dropped(now, DropReason::Disabled);
            return false;
        }
        self.fire_trigger(PendingTrigger { side, card_id: None }, now, observer)
    }

    /// Dispatch one decoded feed message.
    pub fn apply_feed<O: EngineObserver>(&mut self, event: FeedEvent, observer: &mut O) {
        match event {
            FeedEvent::FaceDetection(update) => self.apply_perception(&update),
            FeedEvent::CardReveal(reveal) => self.handle_card_reveal(reveal, observer),
        }
    }

    /// Read-only projection of the current engine state, for display.
    pub fn status(&self) -> EngineStatus {
        EngineStatus {
            behavior:           self.active.as_ref().map(|b| b.name()),
            phase:              self.active.as_ref().and_then(|b| b.phase()),
            user_present:       self.context.user_present,
            face_count:         self.context.face_count(),
            head_direction:     self.context.head_direction,
            responding_enabled: self.config.responding_enabled,
            initiating_enabled: self.config.initiating_enabled,
            observe_only:       self.config.observe_only,
            condition:          self.config.condition.clone(),
        }
    }

    /// The last point emitted to the sink.
    pub fn last_point(&self) -> GazePoint {
        self.last_point
    }

    // ── Tick internals ────────────────────────────────────────────────────

    /// Advance the active behavior, discarding it on completion.
    /// Returns the point to emit, or `None` if the engine is now idle.
    fn advance_active<O: EngineObserver>(
        &mut self,
        now:      Millis,
        observer: &mut O,
    ) -> Option<GazePoint> {
        let behavior = self.active.as_mut()?;
        let step = behavior.advance(now, &self.context, &mut self.rng);
        if step.active {
            return Some(step.point);
        }
        tracing::debug!(name = behavior.name(), "behavior finished");
        observer.on_behavior_end(now, behavior.name());
        self.active = None;
        // The completed behavior's final point is superseded by whatever the
        // selection below produces this same tick.
        None
    }

    /// Priority arbitration for an idle engine.  `None` means "no user —
    /// emit center without installing anything".
    fn select_behavior(&mut self, now: Millis) -> Option<Box<dyn Behavior>> {
        if !self.context.user_present {
            return None;
        }

        if self.responding_eligible(now) {
            if let Some(side) = self.context.head_direction.side() {
                self.last_responding = Some(now);
                tracing::debug!(%side, "responding joint attention triggered");
                return Some(Box::new(JointAttention::responding(side, self.last_point, now)));
            }
        }

        if self.context.secondary_face.is_some() {
            return Some(Box::new(AlternatingGaze::new(self.last_point, now)));
        }

        Some(Box::new(MutualGaze::new(self.last_point, now, &mut self.rng)))
    }

    fn responding_eligible(&self, now: Millis) -> bool {
        self.config.responding_enabled
            && !self.config.observe_only
            && self
                .last_responding
                .is_none_or(|last| now.since(last) >= self.config.responding_cooldown_ms)
    }

    /// Install an initiating gesture, revalidating at fire time: if a
    /// joint-attention gesture became active since the trigger was scheduled
    /// the trigger is dropped; anything else is superseded unconditionally.
    fn fire_trigger<O: EngineObserver>(
        &mut self,
        trigger:  PendingTrigger,
        now:      Millis,
        observer: &mut O,
    ) -> bool {
        if self.active.as_ref().is_some_and(|b| b.is_joint_attention()) {
            tracing::debug!(
                card = ?trigger.card_id,
                "initiating gaze dropped: joint attention already in flight"
            );
            observer.on_trigger_dropped(now, DropReason::JointAttentionBusy);
            return false;
        }

        if let Some(previous) = self.active.take() {
            observer.on_behavior_end(now, previous.name());
        }
        let gesture = JointAttention::initiating(trigger.side, self.last_point, now);
        observer.on_behavior_start(now, gesture.name());
        self.active = Some(Box::new(gesture));
        true
    }

    fn suppression(&self) -> Option<Suppression> {
        if self.config.observe_only {
            Some(Suppression::ObserveOnly)
        } else if !self.config.initiating_enabled {
            Some(Suppression::InitiatingDisabled)
        } else {
            None
        }
    }
}
