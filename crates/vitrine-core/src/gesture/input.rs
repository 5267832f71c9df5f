use std::fmt;

use crate::geometry::Vec2;

/// Identifier of a pointer (mouse, pen or a single touch contact).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct PointerId(pub u64);

impl fmt::Display for PointerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pointer#{}", self.0)
    }
}

/// Pointer input as delivered by the environment adapter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Down { id: PointerId, pos: Vec2 },
    Move { id: PointerId, pos: Vec2 },
    Up { id: PointerId, pos: Vec2 },
    Cancel { id: PointerId },
    CaptureLost { id: PointerId },
}

impl PointerEvent {
    pub fn id(&self) -> PointerId {
        match *self {
            Self::Down { id, .. }
            | Self::Move { id, .. }
            | Self::Up { id, .. }
            | Self::Cancel { id }
            | Self::CaptureLost { id } => id,
        }
    }
}

/// Keys the viewer reacts to. Everything else maps to `Other`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
    Plus,
    Equals,
    Minus,
    Other,
}

impl Key {
    /// Map a DOM-style key name (`"Escape"`, `"ArrowLeft"`, `"+"`, ...).
    pub fn from_name(name: &str) -> Self {
        match name {
            "Escape" | "Esc" => Self::Escape,
            "ArrowLeft" | "Left" => Self::ArrowLeft,
            "ArrowRight" | "Right" => Self::ArrowRight,
            "+" | "Plus" => Self::Plus,
            "=" | "Equals" => Self::Equals,
            "-" | "Minus" => Self::Minus,
            _ => Self::Other,
        }
    }
}
