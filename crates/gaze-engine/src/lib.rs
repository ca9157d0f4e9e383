//! `gaze-engine` — the behavior scheduler and its external interfaces.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                      |
//! |---------------|---------------------------------------------------------------|
//! | [`scheduler`] | `Engine` — tick loop, priority arbitration, trigger handling  |
//! | [`deferred`]  | `DelayQueue<T>` — wall-clock-ordered deferred actions         |
//! | [`feed`]      | Inbound wire messages (`FaceUpdate`, `CardReveal`, …)         |
//! | [`sink`]      | `GazeSink` — the one outbound gaze-point interface            |
//! | [`observer`]  | `EngineObserver` — lifecycle and decision callbacks           |
//! | [`status`]    | `EngineStatus` — read-only display projection                 |
//! | [`builder`]   | `EngineBuilder` — validated construction                      |
//! | [`error`]     | `EngineError`, `EngineResult<T>`                              |
//!
//! # Design notes
//!
//! The engine is single-threaded and cooperative: one fixed-rate tick drives
//! every behavior and primitive.  Each [`Engine::tick`]:
//!
//! 1. Fires due deferred triggers from the [`DelayQueue`], each through a
//!    revalidation check (a pending initiating gesture is dropped if a
//!    joint-attention behavior became active during its delay).
//! 2. Advances the active behavior; a completed behavior is discarded.
//! 3. If idle, selects in strict priority order: responding joint attention
//!    (head turned, cooldown elapsed) → alternating gaze (two faces) →
//!    mutual gaze — and advances the new behavior in the same tick.
//! 4. Clamps the resulting point and emits `(x, y, scale)` to the sink
//!    exactly once.
//!
//! Installing a behavior unconditionally discards the previous one; there is
//! no graceful-cancel path.  A valid gaze point is produced every tick even
//! under total sensor loss (center fallback).

pub mod builder;
pub mod deferred;
pub mod error;
pub mod feed;
pub mod observer;
pub mod scheduler;
pub mod sink;
pub mod status;


pub use builder::EngineBuilder;
pub use deferred::DelayQueue;
pub use error::{EngineError, EngineResult};
pub use feed::{parse_feed, CardReveal, FaceUpdate, FeedEvent};
pub use observer::{DropReason, EngineObserver, NoopObserver};
pub use scheduler::{Decision, Engine, Suppression, PUPIL_SCALE};
pub use sink::{GazeSink, NoopSink, RecordingSink};
pub use status::EngineStatus;
