//! Plain data row types written by output backends.

use serde::Serialize;

/// Event tag of a decision row, matching the study's analysis scripts.
pub const ROBOTS_MOVE_EVENT: &str = "RobotsMove";

/// One initiating-gaze decision, logged at decision time (the motor onset
/// follows up to two seconds later, or never if the decision was "none").
///
/// Serializes with the logging channel's wire keys (`cardId`,
/// `gazeDecision`, `timestamp`) so existing downstream tooling keeps
/// working.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionRow {
    pub event:         &'static str,
    pub card_id:       String,
    /// "left", "right", or "none".
    pub gaze_decision: &'static str,
    /// Experiment-condition label from the engine configuration.
    pub condition:     String,
    /// Why no gaze fired; empty when it did.
    pub reason:        &'static str,
    #[serde(rename = "timestamp")]
    pub timestamp_ms:  i64,
}

/// One sampled gaze point, for offline trace analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GazeSampleRow {
    pub event:        &'static str,
    pub tick:         u64,
    pub timestamp_ms: i64,
    pub x:            f32,
    pub y:            f32,
    pub scale:        f32,
}

/// Event tag of a gaze-sample row.
pub const GAZE_SAMPLE_EVENT: &str = "GazeSample";
