//! Fluent builder for constructing an [`Engine`].

use gaze_behavior::SensedContext;
use gaze_core::EngineConfig;

use crate::{Engine, EngineError, EngineResult, GazeSink};

/// Fluent builder for [`Engine<S>`].
///
/// # Required inputs
///
/// - [`EngineConfig`] — tick interval, toggles, cooldowns, seed, …
/// - `S: GazeSink` — where gaze points go
///
/// # Optional inputs
///
/// | Method          | Default                          |
/// |-----------------|----------------------------------|
/// | `.context(ctx)` | Empty context (no user in front) |
///
/// # Example
///
/// ```rust,ignore
/// let mut engine = EngineBuilder::new(EngineConfig::default(), NoopSink)
///     .build()?;
/// engine.run_ticks(100, &mut NoopObserver);
/// ```
pub struct EngineBuilder<S: GazeSink> {
    config:  EngineConfig,
    context: Option<SensedContext>,
    sink:    S,
}

impl<S: GazeSink> EngineBuilder<S> {
    pub fn new(config: EngineConfig, sink: S) -> Self {
        Self { config, context: None, sink }
    }

    /// Supply an initial sensed context (e.g. replaying a recorded session
    /// from a known perception state).
    pub fn context(mut self, context: SensedContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Validate the configuration and return a ready-to-tick [`Engine`].
    pub fn build(self) -> EngineResult<Engine<S>> {
        if self.config.tick_interval_ms == 0 {
            return Err(EngineError::Config(
                "tick_interval_ms must be > 0".into(),
            ));
        }
        if self.config.responding_cooldown_ms < self.config.tick_interval_ms as u64 {
            return Err(EngineError::Config(format!(
                "responding_cooldown_ms ({}) shorter than one tick ({})",
                self.config.responding_cooldown_ms, self.config.tick_interval_ms,
            )));
        }

        let context = self.context.unwrap_or_default();
        Ok(Engine::from_parts(self.config, context, self.sink))
    }
}
