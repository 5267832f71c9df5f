use std::ops::{Add, AddAssign, Mul, Sub};

use serde::{Deserialize, Serialize};

use crate::consts::ZOOM_PRECISION;

/// 2D offset or position in logical pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }

    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

/// Width/height pair in logical pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// A size is usable for layout only when both sides are finite and positive.
    pub fn is_known(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width / self.height
    }
}

/// Snapshot of the container and the natural image size.
///
/// Only constructed when both sizes are known, so every method here can
/// assume non-zero dimensions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportGeometry {
    pub container: Size,
    pub natural: Size,
}

impl ViewportGeometry {
    /// Build a snapshot, or `None` if either size is not yet known.
    pub fn new(container: Size, natural: Size) -> Option<Self> {
        if container.is_known() && natural.is_known() {
            Some(Self { container, natural })
        } else {
            None
        }
    }

    /// Displayed image size at zoom 1 (image fitted inside the container).
    pub fn contained_size(&self) -> Size {
        contained_size(self.container, self.natural)
    }

    /// Maximum pan magnitude per axis at the given zoom.
    pub fn pan_limits(&self, zoom: f32) -> Vec2 {
        let base = self.contained_size();
        Vec2::new(
            ((base.width * zoom - base.width) / 2.0).max(0.0),
            ((base.height * zoom - base.height) / 2.0).max(0.0),
        )
    }

    /// Clamp `offset` per axis so the scaled image edge never moves past the
    /// edge of its contained box.
    pub fn clamp_pan(&self, offset: Vec2, zoom: f32) -> Vec2 {
        let max = self.pan_limits(zoom);
        Vec2::new(
            offset.x.clamp(-max.x, max.x),
            offset.y.clamp(-max.y, max.y),
        )
    }
}

/// Fit `natural` inside `container` preserving its aspect ratio.
pub fn contained_size(container: Size, natural: Size) -> Size {
    let container_ratio = container.aspect_ratio();
    let image_ratio = natural.aspect_ratio();

    if image_ratio > container_ratio {
        Size::new(container.width, container.width / image_ratio)
    } else {
        Size::new(container.height * image_ratio, container.height)
    }
}

/// Clamp a signed index into `[0, len - 1]`, or `None` for an empty list.
pub fn clamp_index(index: i64, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let last = (len - 1) as i64;
    Some(index.clamp(0, last) as usize)
}

/// Largest first-visible index that still leaves no trailing blank slots.
pub fn max_track_index(item_count: usize, items_per_view: usize) -> usize {
    item_count.saturating_sub(items_per_view.max(1))
}

/// Round a zoom level to two decimals and clamp it into `[min, max]`.
pub fn normalize_zoom(zoom: f32, min: f32, max: f32) -> f32 {
    ((zoom * ZOOM_PRECISION).round() / ZOOM_PRECISION).clamp(min, max)
}
