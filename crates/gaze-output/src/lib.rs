//! `gaze-output` — decision logging for the rust_gaze engine.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`row`]      | `DecisionRow`, `GazeSampleRow` — plain data rows          |
//! | [`writer`]   | `LogWriter` trait implemented by all backends             |
//! | [`csv`]      | CSV backend (`decisions.csv`, `gaze_trace.csv`)           |
//! | [`jsonl`]    | JSON-lines backend (one event-tagged stream)              |
//! | [`observer`] | `DecisionLogObserver<W>` — `EngineObserver` → writer      |
//! | [`error`]    | `OutputError`, `OutputResult<T>`                          |
//!
//! The JSONL backend mirrors the study's original logging channel (one
//! message stream, each object tagged by an `event` field); the CSV backend
//! produces the flat files the analysis scripts read directly.

pub mod csv;
pub mod error;
pub mod jsonl;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvLogWriter;
pub use error::{OutputError, OutputResult};
pub use jsonl::JsonlLogWriter;
pub use observer::DecisionLogObserver;
pub use row::{DecisionRow, GazeSampleRow, GAZE_SAMPLE_EVENT, ROBOTS_MOVE_EVENT};
pub use writer::LogWriter;
