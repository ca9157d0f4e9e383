//! `gaze-core` — foundational types for the `rust_gaze` behavior engine.
//!
//! This crate is a dependency of every other `gaze-*` crate.  It intentionally
//! has no `gaze-*` dependencies and minimal external ones (only `rand`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`point`]     | `GazePoint` — normalized 2D gaze target               |
//! | [`direction`] | `Side`, `HeadDirection`                               |
//! | [`time`]      | `Millis`, `EngineClock`, `EngineConfig`               |
//! | [`rng`]       | `GazeRng` — seeded engine-level RNG                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!           | Required by the gaze-engine wire feed.                     |

pub mod direction;
pub mod point;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use direction::{HeadDirection, Side};
pub use point::GazePoint;
pub use rng::GazeRng;
pub use time::{EngineClock, EngineConfig, Millis};
