//! The sensed-context snapshot — the engine's only view of the outside world.

use gaze_core::{GazePoint, HeadDirection};

/// Which detected face a two-face behavior is currently attending to.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum FaceSlot {
    Primary,
    Secondary,
}

impl FaceSlot {
    #[inline]
    pub fn other(self) -> FaceSlot {
        match self {
            FaceSlot::Primary => FaceSlot::Secondary,
            FaceSlot::Secondary => FaceSlot::Primary,
        }
    }
}

/// Perception state, updated by the external perception feed at its own
/// cadence and read by the scheduler and behaviors each tick.
///
/// Single-writer/many-readers: only the feed mutates it (through
/// [`update_faces`][Self::update_faces]); everything inside the engine reads.
///
/// Invariant: `primary_face` is `Some` whenever `user_present` is true (a
/// missing coordinate is substituted with center at the update point);
/// `secondary_face` is `Some` only while a second face is detected.
#[derive(Clone, Debug, Default)]
pub struct SensedContext {
    pub user_present:   bool,
    /// Primary face position in camera space (un-mirrored).
    pub primary_face:   Option<GazePoint>,
    /// Second detected face, camera space.
    pub secondary_face: Option<GazePoint>,
    pub head_direction: HeadDirection,
}

impl SensedContext {
    /// Replace the whole snapshot from one perception message.
    ///
    /// Enforces the invariant: with `user_present`, a missing primary
    /// coordinate becomes center; without a user, the primary slot is
    /// cleared regardless of what the message carried.
    pub fn update_faces(
        &mut self,
        user_present: bool,
        primary:      Option<GazePoint>,
        secondary:    Option<GazePoint>,
        head:         HeadDirection,
    ) {
        self.user_present = user_present;
        self.primary_face = if user_present {
            Some(primary.unwrap_or(GazePoint::CENTER))
        } else {
            None
        };
        self.secondary_face = secondary;
        self.head_direction = head;
    }

    /// Where to look to meet the user's eyes: the mirrored primary face, or
    /// center when nobody is in front.
    pub fn user_target(&self) -> GazePoint {
        match (self.user_present, self.primary_face) {
            (true, Some(face)) => face.mirror_x(),
            _ => GazePoint::CENTER,
        }
    }

    /// The mirrored position of one face slot, if that face is currently
    /// detected.
    pub fn face_target(&self, slot: FaceSlot) -> Option<GazePoint> {
        let face = match slot {
            FaceSlot::Primary => self.user_present.then_some(self.primary_face).flatten(),
            FaceSlot::Secondary => self.secondary_face,
        };
        face.map(GazePoint::mirror_x)
    }

    /// Number of currently detected faces (0–2).
    pub fn face_count(&self) -> u8 {
        match (self.user_present, self.secondary_face.is_some()) {
            (false, _) => 0,
            (true, false) => 1,
            (true, true) => 2,
        }
    }
}
