use std::fmt;

use crate::consts::MIN_ZOOM;
use crate::geometry::Vec2;

/// Lifecycle of the viewer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewerPhase {
    Closed,
    Idle,
    Dragging,
}

impl fmt::Display for ViewerPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Closed => write!(f, "closed"),
            Self::Idle => write!(f, "open-idle"),
            Self::Dragging => write!(f, "open-dragging"),
        }
    }
}

/// Per-session state; created on open, discarded on close.
///
/// `pan_offset` is zero whenever `zoom_level` is at the minimum.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewerState {
    pub active_index: usize,
    pub zoom_level: f32,
    pub pan_offset: Vec2,
    pub is_dragging: bool,
    pub is_fullscreen: bool,
}

impl ViewerState {
    pub(super) fn new(active_index: usize) -> Self {
        Self {
            active_index,
            zoom_level: MIN_ZOOM,
            pan_offset: Vec2::ZERO,
            is_dragging: false,
            is_fullscreen: false,
        }
    }

    pub(super) fn reset_view(&mut self, min_zoom: f32) {
        self.zoom_level = min_zoom;
        self.pan_offset = Vec2::ZERO;
    }
}

/// What the renderer needs: translate by `offset`, then scale by `scale`
/// around the center of the contained image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    pub offset: Vec2,
    pub scale: f32,
    /// Suppress transition animation while the user is dragging.
    pub animate: bool,
}
