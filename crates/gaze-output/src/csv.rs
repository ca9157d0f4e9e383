//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `decisions.csv`
//! - `gaze_trace.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::LogWriter;
use crate::{DecisionRow, GazeSampleRow, OutputResult};

/// Writes decision and gaze-trace rows to two CSV files.
pub struct CsvLogWriter {
    decisions: Writer<File>,
    trace:     Writer<File>,
    finished:  bool,
}

impl CsvLogWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut decisions = Writer::from_path(dir.join("decisions.csv"))?;
        decisions.write_record([
            "event", "card_id", "gaze_decision", "condition", "reason", "timestamp_ms",
        ])?;

        let mut trace = Writer::from_path(dir.join("gaze_trace.csv"))?;
        trace.write_record(["tick", "timestamp_ms", "x", "y", "scale"])?;

        Ok(Self { decisions, trace, finished: false })
    }
}

impl LogWriter for CsvLogWriter {
    fn write_decision(&mut self, row: &DecisionRow) -> OutputResult<()> {
        self.decisions.write_record(&[
            row.event.to_string(),
            row.card_id.clone(),
            row.gaze_decision.to_string(),
            row.condition.clone(),
            row.reason.to_string(),
            row.timestamp_ms.to_string(),
        ])?;
        // Decisions are rare and precious: flush so an aborted session still
        // has every decision on disk.
        self.decisions.flush()?;
        Ok(())
    }

    fn write_gaze_sample(&mut self, row: &GazeSampleRow) -> OutputResult<()> {
        self.trace.write_record(&[
            row.tick.to_string(),
            row.timestamp_ms.to_string(),
            row.x.to_string(),
            row.y.to_string(),
            row.scale.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.decisions.flush()?;
        self.trace.flush()?;
        Ok(())
    }
}
