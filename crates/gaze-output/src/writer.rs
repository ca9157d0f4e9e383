//! The `LogWriter` trait implemented by all backend writers.

use crate::{DecisionRow, GazeSampleRow, OutputResult};

/// Trait implemented by the CSV and JSONL writers.
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with
/// [`DecisionLogObserver::take_error`][crate::DecisionLogObserver::take_error].
pub trait LogWriter {
    /// Write one decision row.
    fn write_decision(&mut self, row: &DecisionRow) -> OutputResult<()>;

    /// Write one gaze-trace sample.
    fn write_gaze_sample(&mut self, row: &GazeSampleRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
