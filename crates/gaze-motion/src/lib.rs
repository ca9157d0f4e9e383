//! `gaze-motion` — single-purpose generators of a 2D gaze point.
//!
//! # Crate layout
//!
//! | Module           | Contents                                              |
//! |------------------|-------------------------------------------------------|
//! | [`fixation`]     | `Fixation` — hold a target for a bounded duration     |
//! | [`saccade`]      | `Saccade` — ballistic tick-driven jump between points |
//! | [`pursuit`]      | `SmoothPursuit` — exponential tracking of a target    |
//! | [`microsaccade`] | `Microsaccades` — periodic cosmetic jitter            |
//!
//! # Design notes
//!
//! Primitives are time-bounded or continuous *samplers*: each `advance`/
//! `update` call computes the next position and returns whether the segment
//! is still active.  They never emit anywhere — the engine alone forwards
//! positions to the output sink, once per tick.
//!
//! A primitive is created by a composite behavior when a motion segment
//! begins and dropped when the segment completes or is superseded; primitives
//! are never shared between behaviors.

pub mod fixation;
pub mod microsaccade;
pub mod pursuit;
pub mod saccade;


pub use fixation::Fixation;
pub use microsaccade::Microsaccades;
pub use pursuit::SmoothPursuit;
pub use saccade::Saccade;
