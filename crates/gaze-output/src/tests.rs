//! Unit tests for the output backends and the observer bridge.

use gaze_core::{EngineConfig, GazePoint, Millis};
use gaze_engine::EngineObserver;

use crate::row::GAZE_SAMPLE_EVENT;
use crate::{
    CsvLogWriter, DecisionLogObserver, DecisionRow, GazeSampleRow, JsonlLogWriter, LogWriter,
    OutputResult, ROBOTS_MOVE_EVENT,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn decision_row() -> DecisionRow {
    DecisionRow {
        event:         ROBOTS_MOVE_EVENT,
        card_id:       "card-7".into(),
        gaze_decision: "left",
        condition:     "test".into(),
        reason:        "",
        timestamp_ms:  1_700_000_000_050,
    }
}

fn sample_row(tick: u64) -> GazeSampleRow {
    GazeSampleRow {
        event:        GAZE_SAMPLE_EVENT,
        tick,
        timestamp_ms: 1_700_000_000_000 + tick as i64 * 50,
        x:            0.5,
        y:            0.5,
        scale:        1.0,
    }
}

/// In-memory writer for testing the observer bridge.
#[derive(Default)]
struct MemWriter {
    decisions: Vec<DecisionRow>,
    samples:   Vec<GazeSampleRow>,
    finished:  bool,
}

impl LogWriter for MemWriter {
    fn write_decision(&mut self, row: &DecisionRow) -> OutputResult<()> {
        self.decisions.push(row.clone());
        Ok(())
    }
    fn write_gaze_sample(&mut self, row: &GazeSampleRow) -> OutputResult<()> {
        self.samples.push(row.clone());
        Ok(())
    }
    fn finish(&mut self) -> OutputResult<()> {
        self.finished = true;
        Ok(())
    }
}

// ── CSV backend ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use super::*;

    #[test]
    fn writes_both_files_with_headers() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = CsvLogWriter::new(dir.path()).unwrap();

        writer.write_decision(&decision_row()).unwrap();
        writer.write_gaze_sample(&sample_row(0)).unwrap();
        writer.write_gaze_sample(&sample_row(1)).unwrap();
        writer.finish().unwrap();

        let decisions = std::fs::read_to_string(dir.path().join("decisions.csv")).unwrap();
        let mut lines = decisions.lines();
        assert_eq!(
            lines.next().unwrap(),
            "event,card_id,gaze_decision,condition,reason,timestamp_ms"
        );
        let row = lines.next().unwrap();
        assert!(row.contains("RobotsMove"));
        assert!(row.contains("card-7"));
        assert!(row.contains("left"));

        let trace = std::fs::read_to_string(dir.path().join("gaze_trace.csv")).unwrap();
        assert_eq!(trace.lines().count(), 3); // header + 2 samples
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = CsvLogWriter::new(dir.path()).unwrap();
        writer.finish().unwrap();
        writer.finish().unwrap();
    }
}

// ── JSONL backend ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod jsonl_tests {
    use super::*;

    #[test]
    fn rows_round_trip_as_tagged_json_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.jsonl");
        let mut writer = JsonlLogWriter::new(&path).unwrap();

        writer.write_decision(&decision_row()).unwrap();
        writer.write_gaze_sample(&sample_row(3)).unwrap();
        writer.finish().unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<serde_json::Value> = content
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["event"], "RobotsMove");
        assert_eq!(lines[0]["gazeDecision"], "left");
        assert_eq!(lines[0]["cardId"], "card-7");
        assert_eq!(lines[0]["timestamp"], 1_700_000_000_050i64);
        assert_eq!(lines[1]["event"], "GazeSample");
        assert_eq!(lines[1]["tick"], 3);
    }
}

// ── Observer bridge ───────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use super::*;
    use gaze_engine::{Decision, Suppression};
    use gaze_core::Side;

    fn config() -> EngineConfig {
        EngineConfig {
            condition: "pilot-A".into(),
            start_unix_ms: 1_000_000,
            ..EngineConfig::default()
        }
    }

    #[test]
    fn decision_rows_carry_condition_and_wall_clock() {
        let mut obs = DecisionLogObserver::new(MemWriter::default(), &config());

        let decision = Decision {
            card_id:    "c-1".into(),
            gaze:       Some(Side::Right),
            suppressed: None,
            at:         Millis(2_500),
        };
        obs.on_decision(&decision);

        let writer = obs.into_writer();
        assert_eq!(writer.decisions.len(), 1);
        let row = &writer.decisions[0];
        assert_eq!(row.event, "RobotsMove");
        assert_eq!(row.gaze_decision, "right");
        assert_eq!(row.condition, "pilot-A");
        assert_eq!(row.reason, "");
        assert_eq!(row.timestamp_ms, 1_002_500);
    }

    #[test]
    fn suppressed_decision_logs_none_with_reason() {
        let mut obs = DecisionLogObserver::new(MemWriter::default(), &config());
        obs.on_decision(&Decision {
            card_id:    "c-2".into(),
            gaze:       None,
            suppressed: Some(Suppression::ObserveOnly),
            at:         Millis(0),
        });
        let writer = obs.into_writer();
        assert_eq!(writer.decisions[0].gaze_decision, "none");
        assert_eq!(writer.decisions[0].reason, "observation-only condition active");
    }

    #[test]
    fn gaze_trace_thins_to_the_sample_interval() {
        let mut obs =
            DecisionLogObserver::new(MemWriter::default(), &config()).sample_every_ms(100);

        // 20 ticks at 50 ms → samples at 0, 100, 200, … only.
        for tick in 0..20u64 {
            obs.on_gaze(Millis(tick * 50), GazePoint::CENTER, 1.0);
        }
        let writer = obs.into_writer();
        assert_eq!(writer.samples.len(), 10);
        assert_eq!(writer.samples[0].tick, 0);
        assert_eq!(writer.samples[1].tick, 2);
    }

    #[test]
    fn finish_reaches_the_writer() {
        let mut obs = DecisionLogObserver::new(MemWriter::default(), &config());
        obs.finish();
        assert!(obs.take_error().is_none());
        assert!(obs.into_writer().finished);
    }
}
