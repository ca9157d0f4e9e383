//! `DecisionLogObserver<W>` — bridges `EngineObserver` to a `LogWriter`.

use gaze_core::{EngineConfig, GazePoint, Millis};
use gaze_engine::{Decision, EngineObserver};

use crate::row::{DecisionRow, GazeSampleRow, GAZE_SAMPLE_EVENT, ROBOTS_MOVE_EVENT};
use crate::writer::LogWriter;
use crate::OutputError;

/// An [`EngineObserver`] that writes decision rows and a sampled gaze trace
/// to any [`LogWriter`] backend (CSV, JSONL).
///
/// Errors from the writer are stored internally because observer methods
/// have no return value.  After the session, check for errors with
/// [`take_error`][Self::take_error].
pub struct DecisionLogObserver<W: LogWriter> {
    writer:           W,
    condition:        String,
    start_unix_ms:    i64,
    tick_interval_ms: u32,
    /// Minimum spacing between gaze-trace samples; 0 records every tick.
    sample_every_ms:  u64,
    last_sample:      Option<Millis>,
    last_error:       Option<OutputError>,
}

impl<W: LogWriter> DecisionLogObserver<W> {
    /// Create an observer backed by `writer`, using `config` for the
    /// condition label and wall-clock conversion.  Records every tick by
    /// default; thin the trace with [`sample_every_ms`][Self::sample_every_ms].
    pub fn new(writer: W, config: &EngineConfig) -> Self {
        Self {
            writer,
            condition:        config.condition.clone(),
            start_unix_ms:    config.start_unix_ms,
            tick_interval_ms: config.tick_interval_ms,
            sample_every_ms:  0,
            last_sample:      None,
            last_error:       None,
        }
    }

    /// Record at most one gaze sample per `ms` milliseconds.
    pub fn sample_every_ms(mut self, ms: u64) -> Self {
        self.sample_every_ms = ms;
        self
    }

    /// Take the stored write error (if any) after the session ends.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the session).
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Flush and close the underlying writer.
    pub fn finish(&mut self) {
        let result = self.writer.finish();
        self.store_err(result);
    }

    fn unix_ms(&self, now: Millis) -> i64 {
        self.start_unix_ms + now.0 as i64
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }

    fn due_for_sample(&self, now: Millis) -> bool {
        match self.last_sample {
            None => true,
            Some(last) => now.since(last) >= self.sample_every_ms,
        }
    }
}

impl<W: LogWriter> EngineObserver for DecisionLogObserver<W> {
    fn on_gaze(&mut self, now: Millis, point: GazePoint, scale: f32) {
        if !self.due_for_sample(now) {
            return;
        }
        self.last_sample = Some(now);
        let row = GazeSampleRow {
            event:        GAZE_SAMPLE_EVENT,
            tick:         now.0 / self.tick_interval_ms.max(1) as u64,
            timestamp_ms: self.unix_ms(now),
            x:            point.x,
            y:            point.y,
            scale,
        };
        let result = self.writer.write_gaze_sample(&row);
        self.store_err(result);
    }

    fn on_decision(&mut self, decision: &Decision) {
        let row = DecisionRow {
            event:         ROBOTS_MOVE_EVENT,
            card_id:       decision.card_id.clone(),
            gaze_decision: decision.gaze_decision(),
            condition:     self.condition.clone(),
            reason:        decision.reason(),
            timestamp_ms:  self.unix_ms(decision.at),
        };
        let result = self.writer.write_decision(&row);
        self.store_err(result);
    }
}
