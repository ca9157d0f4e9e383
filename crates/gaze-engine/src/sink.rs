//! The output sink — the engine's one outbound gaze interface.

/// Receives the clamped gaze point once per tick.
///
/// Consumers render (pupil transforms) or record the point; the engine never
/// reads back the result.  The sink must be a pure projection of its last
/// argument: calling it twice with the same point requires no additional
/// state change on the consumer's side.
pub trait GazeSink {
    /// `x`, `y` ∈ [0,1]; `scale` is a pupil-dilation factor (currently
    /// always 1.0, reserved for future arousal modeling).
    fn set_gaze(&mut self, x: f32, y: f32, scale: f32);
}

/// A [`GazeSink`] that discards everything.  Use when only the decision log
/// matters (e.g. headless analysis runs).
pub struct NoopSink;

impl GazeSink for NoopSink {
    fn set_gaze(&mut self, _x: f32, _y: f32, _scale: f32) {}
}

/// A [`GazeSink`] that records every sample, for tests and offline replay.
#[derive(Default)]
pub struct RecordingSink {
    pub samples: Vec<(f32, f32, f32)>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent sample, if any tick has run.
    pub fn last(&self) -> Option<(f32, f32, f32)> {
        self.samples.last().copied()
    }
}

impl GazeSink for RecordingSink {
    fn set_gaze(&mut self, x: f32, y: f32, scale: f32) {
        self.samples.push((x, y, scale));
    }
}
