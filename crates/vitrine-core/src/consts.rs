/// Lowest zoom level; the image is shown contained (letterboxed).
pub const MIN_ZOOM: f32 = 1.0;

/// Highest zoom level reachable through the zoom controls.
pub const MAX_ZOOM: f32 = 3.0;

/// Increment applied by a single zoom-in / zoom-out step.
pub const ZOOM_STEP: f32 = 0.25;

/// Zoom level a double activation jumps to from the contained view.
pub const DOUBLE_TAP_ZOOM: f32 = 2.0;

/// Two activations closer than this (ms) count as a double activation.
pub const DOUBLE_TAP_WINDOW_MS: u64 = 300;

/// Cumulative pointer travel (px) under which a press/release is a tap.
pub const TAP_SLOP_PX: f32 = 6.0;

/// Absolute drag distance (px) that commits a carousel step.
pub const COMMIT_THRESHOLD_PX: f32 = 60.0;

/// Drag distance relative to the viewport width (%) that commits a carousel step.
pub const COMMIT_THRESHOLD_PERCENT: f32 = 10.0;

/// Default autoplay interval for the carousel.
pub const DEFAULT_AUTOPLAY_INTERVAL_MS: u64 = 4500;

/// Horizontal gap between carousel cards.
pub const DEFAULT_CARD_GAP_PX: f32 = 20.0;

/// Viewport width below which the carousel shows one card.
pub const BREAKPOINT_MOBILE_PX: f32 = 640.0;

/// Viewport width below which the carousel shows two cards.
pub const BREAKPOINT_TABLET_PX: f32 = 1024.0;

/// Cards shown at or above the widest breakpoint.
pub const DEFAULT_ITEMS_PER_VIEW: usize = 3;

/// Zoom values are kept at two decimals so repeated steps don't drift.
pub const ZOOM_PRECISION: f32 = 100.0;
