//! Engine time model.
//!
//! # Design
//!
//! Time is represented as integer milliseconds since engine start (`Millis`).
//! The engine never reads a wall clock: `EngineClock` advances by a fixed
//! `tick_interval_ms` per tick, so behavior timing is exact and a run is
//! reproducible from its seed alone.  The host maps real time onto ticks
//! (sleep-per-tick in a live session, direct stepping in tests), and
//! wall-clock log timestamps are reconstructed as:
//!
//!   unix_ms = start_unix_ms + now
//!
//! The default tick interval is 50 ms (≈20 Hz), matching the cadence human
//! gaze motion is believably animated at.

use std::fmt;

// ── Millis ───────────────────────────────────────────────────────────────────

/// Milliseconds elapsed since engine start.
///
/// Stored as `u64`: at 1 ms resolution a u64 lasts ~585 million years, so
/// overflow is not a practical concern for any session length.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Millis(pub u64);

impl Millis {
    pub const ZERO: Millis = Millis(0);

    /// Return the instant `ms` milliseconds after `self`.
    #[inline]
    pub fn offset(self, ms: u64) -> Millis {
        Millis(self.0 + ms)
    }

    /// Milliseconds elapsed from `earlier` to `self`.
    ///
    /// Saturates at zero if `earlier > self` (a behavior installed "now" may
    /// be advanced with the same `now` on its first tick).
    #[inline]
    pub fn since(self, earlier: Millis) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl std::ops::Add<u64> for Millis {
    type Output = Millis;
    #[inline]
    fn add(self, rhs: u64) -> Millis {
        Millis(self.0 + rhs)
    }
}

impl std::ops::Sub for Millis {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Millis) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Millis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t+{}ms", self.0)
    }
}

// ── EngineClock ──────────────────────────────────────────────────────────────

/// Fixed-interval tick clock.
///
/// `EngineClock` is cheap to copy and intentionally holds no heap data.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineClock {
    /// How many milliseconds one tick represents.  Default: 50 (≈20 Hz).
    pub tick_interval_ms: u32,
    /// The current instant — advanced by `EngineClock::advance()` each tick.
    pub now: Millis,
    /// Ticks completed so far.
    pub ticks: u64,
}

impl EngineClock {
    pub fn new(tick_interval_ms: u32) -> Self {
        Self {
            tick_interval_ms,
            now: Millis::ZERO,
            ticks: 0,
        }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.now = self.now + self.tick_interval_ms as u64;
        self.ticks += 1;
    }

    /// Ticks spanning `ms` milliseconds (rounds up — a timer never fires early).
    #[inline]
    pub fn ticks_for_ms(&self, ms: u64) -> u64 {
        ms.div_ceil(self.tick_interval_ms as u64)
    }

    /// The nominal tick rate in Hz.
    #[inline]
    pub fn tick_hz(&self) -> f32 {
        1000.0 / self.tick_interval_ms as f32
    }
}

impl fmt::Display for EngineClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (tick {})", self.now, self.ticks)
    }
}

// ── EngineConfig ─────────────────────────────────────────────────────────────

/// Top-level engine configuration.
///
/// Every knob the original study exposed through its control panel lives
/// here as an explicit, injected value; the engine reads nothing ambient.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// Milliseconds per tick.  Must be > 0.  Default: 50.
    pub tick_interval_ms: u32,

    /// Master RNG seed.  The same seed always produces identical aversion
    /// timing and jitter.
    pub seed: u64,

    /// Unix timestamp (milliseconds) of tick 0, used only for log rows.
    pub start_unix_ms: i64,

    /// Whether responding joint attention (head-turn following) may trigger.
    pub responding_enabled: bool,

    /// Whether initiating joint attention (card/keyboard triggers) may fire.
    pub initiating_enabled: bool,

    /// Observation-only mode: suppresses both joint-attention forms while
    /// leaving mutual/alternating gaze running.
    pub observe_only: bool,

    /// Free-form experiment-condition label, copied verbatim into decision
    /// log rows.  The engine never interprets it.
    pub condition: String,

    /// Minimum spacing between responding joint-attention triggers.
    pub responding_cooldown_ms: u64,

    /// Delay between an initiating-gaze decision and its motor onset.
    pub initiate_delay_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms:       50,
            seed:                   0,
            start_unix_ms:          0,
            responding_enabled:     true,
            initiating_enabled:     true,
            observe_only:           false,
            condition:              String::from("default"),
            responding_cooldown_ms: 7_000,
            initiate_delay_ms:      2_000,
        }
    }
}

impl EngineConfig {
    /// Construct an `EngineClock` pre-configured for this run.
    pub fn make_clock(&self) -> EngineClock {
        EngineClock::new(self.tick_interval_ms)
    }

    /// Wall-clock milliseconds corresponding to engine instant `now`.
    #[inline]
    pub fn unix_ms(&self, now: Millis) -> i64 {
        self.start_unix_ms + now.0 as i64
    }
}
