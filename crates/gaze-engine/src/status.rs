//! Read-only status projection for operator displays.

use std::fmt;

use gaze_core::HeadDirection;

/// A snapshot of what the engine is doing, for display only.
///
/// Built by [`Engine::status`][crate::Engine::status]; carries no references
/// into the engine and makes no promises beyond the instant it was taken.
#[derive(Clone, Debug)]
pub struct EngineStatus {
    pub behavior:           Option<&'static str>,
    pub phase:              Option<&'static str>,
    pub user_present:       bool,
    pub face_count:         u8,
    pub head_direction:     HeadDirection,
    pub responding_enabled: bool,
    pub initiating_enabled: bool,
    pub observe_only:       bool,
    pub condition:          String,
}

impl fmt::Display for EngineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cond: {} | Behav: ", self.condition)?;
        match self.behavior {
            Some(name) => {
                write!(f, "{name}")?;
                if let Some(phase) = self.phase {
                    write!(f, " ({phase})")?;
                }
            }
            None => {
                write!(f, "Idle{}", if self.user_present { " (User)" } else { "" })?;
            }
        }
        write!(
            f,
            " | IJA:{} RJA:{}",
            on_off(self.initiating_enabled && !self.observe_only),
            on_off(self.responding_enabled && !self.observe_only),
        )?;
        write!(
            f,
            " | User:{} Faces:{} Head:{}",
            if self.user_present { "Y" } else { "N" },
            self.face_count,
            self.head_direction,
        )
    }
}

fn on_off(enabled: bool) -> &'static str {
    if enabled { "ON" } else { "OFF" }
}
