//! `gaze-behavior` — composite social gaze behaviors.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`behavior`]    | `Behavior` trait and the per-tick `Step` result           |
//! | [`context`]     | `SensedContext` — perception snapshot read by every tick  |
//! | [`aversion`]    | `GazeAversion` — brief natural gaze-breaks (sub-behavior) |
//! | [`mutual`]      | `MutualGaze` — smooth face tracking with aversions        |
//! | [`alternating`] | `AlternatingGaze` — dwell/saccade between two faces       |
//! | [`joint`]       | `JointAttention` — responding/initiating side gestures    |
//!
//! # Design notes
//!
//! Each composite behavior sequences and combines motion primitives to
//! express one social intent.  All behaviors share the same capability:
//! `advance(now, ctx, rng) -> Step { point, active }`.  Exactly one behavior
//! is active at a time — owned by the scheduler in gaze-engine — and a
//! behavior that reports inactive is discarded, never pooled or resumed.
//!
//! Behaviors never touch the output sink; they return positions and the
//! engine emits.  They also never raise: a vanished face coordinate is
//! handled by a local fallback (flip face slot, return to center, or report
//! inactive so the scheduler reselects).

pub mod alternating;
pub mod aversion;
pub mod behavior;
pub mod context;
pub mod joint;
pub mod mutual;

#[cfg(test)]
mod tests;

pub use alternating::AlternatingGaze;
pub use aversion::GazeAversion;
pub use behavior::{Behavior, Step};
pub use context::{FaceSlot, SensedContext};
pub use joint::{JointAttention, JointKind};
pub use mutual::MutualGaze;
