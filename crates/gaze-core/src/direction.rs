//! Lateral direction enums shared across the engine.
//!
//! `Side` is the direction argument of the joint-attention behaviors and the
//! value logged in decision rows ("left"/"right").  `HeadDirection` is the
//! perception collaborator's head-pose estimate; its wire form is the literal
//! strings `"Looking Left"` / `"Looking Right"` with anything else treated as
//! no turn.

use std::fmt;

// ── Side ─────────────────────────────────────────────────────────────────────

/// A lateral screen side, from the robot's point of view.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Side {
    Left,
    Right,
}

impl Side {
    #[inline]
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

// ── HeadDirection ────────────────────────────────────────────────────────────

/// The user's head-turn direction as estimated by the perception feed.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeadDirection {
    #[default]
    None,
    Left,
    Right,
}

impl HeadDirection {
    /// Parse the wire string.  The perception server also emits
    /// `"Looking Forward"` and `"none"`; both map to `None`, as does any
    /// unrecognized value.
    pub fn parse(s: &str) -> HeadDirection {
        match s {
            "Looking Left" => HeadDirection::Left,
            "Looking Right" => HeadDirection::Right,
            _ => HeadDirection::None,
        }
    }

    /// The turned-to side, or `None` when the head is not turned.
    #[inline]
    pub fn side(self) -> Option<Side> {
        match self {
            HeadDirection::Left => Some(Side::Left),
            HeadDirection::Right => Some(Side::Right),
            HeadDirection::None => None,
        }
    }
}

impl fmt::Display for HeadDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeadDirection::None => write!(f, "none"),
            HeadDirection::Left => write!(f, "left"),
            HeadDirection::Right => write!(f, "right"),
        }
    }
}
