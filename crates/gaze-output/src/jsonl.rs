//! JSON-lines output backend.
//!
//! One stream of event-tagged JSON objects, mirroring the study's original
//! logging channel — downstream tooling dispatches on the `event` field.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::writer::LogWriter;
use crate::{DecisionRow, GazeSampleRow, OutputResult};

/// Writes all rows as JSON lines to a single file.
pub struct JsonlLogWriter {
    out:      BufWriter<File>,
    finished: bool,
}

impl JsonlLogWriter {
    /// Create (or truncate) the log file at `path`.
    pub fn new(path: &Path) -> OutputResult<Self> {
        Ok(Self {
            out: BufWriter::new(File::create(path)?),
            finished: false,
        })
    }

    fn write_line<T: Serialize>(&mut self, row: &T) -> OutputResult<()> {
        serde_json::to_writer(&mut self.out, row)?;
        self.out.write_all(b"\n")?;
        Ok(())
    }
}

impl LogWriter for JsonlLogWriter {
    fn write_decision(&mut self, row: &DecisionRow) -> OutputResult<()> {
        self.write_line(row)?;
        self.out.flush()?;
        Ok(())
    }

    fn write_gaze_sample(&mut self, row: &GazeSampleRow) -> OutputResult<()> {
        self.write_line(row)
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}
