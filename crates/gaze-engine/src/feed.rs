//! Inbound wire messages from the perception and game collaborators.
//!
//! The engine consumes two asynchronous feeds through one narrow interface:
//! face-detection updates (at the perception server's own cadence) and game
//! events (card reveals).  Messages are JSON objects tagged by an `event`
//! field; [`parse_feed`] decodes one message, and the engine copies its
//! contents into [`SensedContext`] verbatim — substituting center for
//! missing coordinates while a user is in front, per the context invariant.

use serde::Deserialize;

use gaze_behavior::SensedContext;
use gaze_core::{GazePoint, HeadDirection, Side};

use crate::EngineResult;

// ── Face detection ────────────────────────────────────────────────────────────

/// One face-detection message from the perception feed.
///
/// Coordinates are camera-space in [0,1]; absent fields mean "not detected".
/// `head_direction` carries the perception server's literal strings
/// (`"Looking Left"`, `"Looking Right"`, anything else → no turn).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceUpdate {
    pub user_in_front: bool,
    #[serde(default)]
    pub face_x: Option<f32>,
    #[serde(default)]
    pub face_y: Option<f32>,
    #[serde(default)]
    pub second_face_x: Option<f32>,
    #[serde(default)]
    pub second_face_y: Option<f32>,
    #[serde(default)]
    pub head_direction: Option<String>,
}

impl FaceUpdate {
    /// Copy this update into the sensed context.
    pub fn apply_to(&self, ctx: &mut SensedContext) {
        let primary = match (self.face_x, self.face_y) {
            (Some(x), Some(y)) => Some(GazePoint::new(x, y)),
            _ => None,
        };
        let secondary = match (self.second_face_x, self.second_face_y) {
            (Some(x), Some(y)) => Some(GazePoint::new(x, y)),
            _ => None,
        };
        let head = self
            .head_direction
            .as_deref()
            .map(HeadDirection::parse)
            .unwrap_or_default();
        ctx.update_faces(self.user_in_front, primary, secondary, head);
    }
}

// ── Game events ───────────────────────────────────────────────────────────────

/// A revealed card: the trigger for initiating joint attention.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardReveal {
    pub card_id: String,
    /// Which side of the play field the card was revealed on.
    pub side: Side,
}

// ── Envelope ──────────────────────────────────────────────────────────────────

/// One decoded feed message.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "event")]
pub enum FeedEvent {
    #[serde(rename = "faceDetection")]
    FaceDetection(FaceUpdate),
    #[serde(rename = "cardReveal")]
    CardReveal(CardReveal),
}

/// Decode one raw feed message.
///
/// Unknown event tags and malformed payloads are parse errors; callers treat
/// them as "message dropped", never as fatal.
pub fn parse_feed(raw: &str) -> EngineResult<FeedEvent> {
    Ok(serde_json::from_str(raw)?)
}
