//! Carousel: a window of `items_per_view` cards over an ordered list,
//! moved one card at a time by buttons, drag or autoplay.

mod autoplay;

pub use autoplay::AutoplayTimer;

use std::fmt;

use tracing::{debug, trace};

use crate::clock::{Clock, SystemClock};
use crate::config::TrackConfig;
use crate::geometry::{clamp_index, max_track_index, Vec2};
use crate::gesture::{DragEnd, DragTracker, PointerEvent, PointerId};
use crate::host::{NoopHost, PointerCapture};

/// Renderable unit of the track. Only its identity matters here.
pub trait Card {
    type Key: PartialEq;

    fn key(&self) -> Self::Key;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Forward => write!(f, "forward"),
            Self::Backward => write!(f, "backward"),
        }
    }
}

/// How a drag on the track ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragOutcome {
    /// The pointer barely moved; the owner may treat it as a card activation.
    Tap,
    /// Below both commit thresholds, or cancelled.
    SnapBack,
    /// Threshold passed. At a boundary the index stays where it is.
    Committed(Direction),
}

/// Snapshot of the track's mutable state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackState {
    pub items_per_view: usize,
    pub active_index: usize,
    pub drag_delta_px: f32,
}

/// Pixel layout of the track for the current viewport width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackLayout {
    pub card_width: f32,
    /// Card width plus gap: distance between consecutive card origins.
    pub stride: f32,
    /// Horizontal translation of the strip, live drag delta included.
    pub offset_px: f32,
}

/// Windowed, horizontally navigable strip of cards.
///
/// `active_index` always stays within `[0, max_index()]`, so the last card
/// is never followed by blank space. The caller's list is never mutated.
pub struct SlideTrack<T: Card, C: Clock = SystemClock, P: PointerCapture = NoopHost> {
    config: TrackConfig,
    items: Vec<T>,
    items_per_view: usize,
    active_index: usize,
    viewport_width: f32,
    drag: DragTracker,
    drag_delta_px: f32,
    autoplay: AutoplayTimer,
    autoplay_enabled: bool,
    clock: C,
    capture: P,
}

impl<T: Card> SlideTrack<T> {
    pub fn with_defaults(items: Vec<T>) -> Self {
        Self::new(TrackConfig::default(), items, SystemClock::new(), NoopHost)
    }
}

impl<T: Card, C: Clock, P: PointerCapture> SlideTrack<T, C, P> {
    /// Mount the track. Autoplay starts immediately when enabled.
    pub fn new(config: TrackConfig, items: Vec<T>, clock: C, capture: P) -> Self {
        let autoplay = AutoplayTimer::new(config.autoplay_interval_ms);
        let autoplay_enabled = config.autoplay;
        let items_per_view = config.breakpoints.default_items.max(1);
        let mut track = Self {
            config,
            items,
            items_per_view,
            active_index: 0,
            viewport_width: 0.0,
            drag: DragTracker::default(),
            drag_delta_px: 0.0,
            autoplay,
            autoplay_enabled,
            clock,
            capture,
        };
        track.restart_autoplay();
        track
    }

    pub fn config(&self) -> &TrackConfig {
        &self.config
    }

    pub fn state(&self) -> TrackState {
        TrackState {
            items_per_view: self.items_per_view,
            active_index: self.active_index,
            drag_delta_px: self.drag_delta_px,
        }
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn items_per_view(&self) -> usize {
        self.items_per_view
    }

    /// Cards taking part in the track, after the `max_slides` limit.
    pub fn items(&self) -> &[T] {
        &self.items[..self.len()]
    }

    /// Cards currently inside the window.
    pub fn visible_items(&self) -> &[T] {
        let end = (self.active_index + self.items_per_view).min(self.len());
        &self.items[self.active_index.min(end)..end]
    }

    pub fn len(&self) -> usize {
        match self.config.max_slides {
            Some(slides) => {
                let limit = (slides * self.items_per_view).max(1);
                self.items.len().min(limit)
            }
            None => self.items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn max_index(&self) -> usize {
        max_track_index(self.len(), self.items_per_view)
    }

    /// Number of distinct window positions (one dot each).
    pub fn positions(&self) -> usize {
        self.max_index() + 1
    }

    pub fn can_prev(&self) -> bool {
        self.active_index > 0
    }

    pub fn can_next(&self) -> bool {
        self.active_index < self.max_index()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    // ------------------------------------------------------------------
    // External inputs
    // ------------------------------------------------------------------

    /// New responsive item count; the index is pulled back into range.
    pub fn set_items_per_view(&mut self, n: usize) {
        let n = n.max(1);
        if n == self.items_per_view {
            return;
        }
        let old_max = self.max_index();
        self.items_per_view = n;
        self.reclamp();
        debug!(items_per_view = n, index = self.active_index, "Track window resized");
        if self.max_index() != old_max {
            self.restart_autoplay();
        }
    }

    pub fn set_viewport_width(&mut self, width: f32) {
        self.viewport_width = if width.is_finite() { width.max(0.0) } else { 0.0 };
    }

    /// Replace the cards. The first visible card stays first when it survives.
    pub fn set_items(&mut self, items: Vec<T>) {
        let anchor = self.items.get(self.active_index).map(T::key);
        let old_max = self.max_index();
        self.items = items;
        if let Some(key) = anchor {
            if let Some(pos) = self.items().iter().position(|c| c.key() == key) {
                self.active_index = pos;
            }
        }
        self.reclamp();
        if self.max_index() != old_max {
            self.restart_autoplay();
        }
    }

    fn reclamp(&mut self) {
        self.active_index = self.active_index.min(self.max_index());
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    pub fn next(&mut self) {
        self.go_to(self.active_index as i64 + 1);
    }

    pub fn prev(&mut self) {
        self.go_to(self.active_index as i64 - 1);
    }

    /// Jump to window position `index`, clamped to `[0, max_index()]`.
    pub fn go_to(&mut self, index: i64) {
        let target = clamp_index(index, self.positions()).unwrap_or(0);
        if target != self.active_index {
            trace!(from = self.active_index, to = target, "Track moved");
            self.active_index = target;
        }
    }

    // ------------------------------------------------------------------
    // Autoplay
    // ------------------------------------------------------------------

    pub fn autoplay_enabled(&self) -> bool {
        self.autoplay_enabled
    }

    pub fn set_autoplay(&mut self, enabled: bool) {
        if enabled != self.autoplay_enabled {
            self.autoplay_enabled = enabled;
            self.restart_autoplay();
        }
    }

    /// One autoplay step: advance by one, wrapping to 0 past the end.
    /// Does nothing while autoplay is disabled or everything fits.
    pub fn autoplay_tick(&mut self) {
        let max = self.max_index();
        if !self.autoplay_enabled || max == 0 {
            return;
        }
        self.active_index = if self.active_index >= max {
            0
        } else {
            self.active_index + 1
        };
        trace!(index = self.active_index, "Autoplay tick");
    }

    /// Run the ticks that came due since the last poll. Returns `true` if the
    /// index moved. Ticks falling inside a drag are dropped.
    pub fn poll_autoplay(&mut self) -> bool {
        let ticks = self.autoplay.poll(self.clock.now_ms());
        if ticks == 0 || self.drag.is_active() {
            return false;
        }
        // A full cycle of wrapping ticks lands back on the same index.
        let steps = ticks % self.positions() as u64;
        let before = self.active_index;
        for _ in 0..steps {
            self.autoplay_tick();
        }
        self.active_index != before
    }

    /// Milliseconds until the next autoplay tick, if the timer runs.
    pub fn autoplay_remaining_ms(&self) -> Option<u64> {
        self.autoplay.remaining_ms(self.clock.now_ms())
    }

    fn restart_autoplay(&mut self) {
        if self.autoplay_enabled && self.max_index() > 0 {
            self.autoplay.start(self.clock.now_ms());
        } else {
            self.autoplay.cancel();
        }
    }

    // ------------------------------------------------------------------
    // Drag
    // ------------------------------------------------------------------

    /// Feed a pointer event. Returns the outcome when a drag session ends.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Option<DragOutcome> {
        match event {
            PointerEvent::Down { id, pos } => {
                if self.drag.begin(id, pos) {
                    self.drag_delta_px = 0.0;
                    self.capture.capture(id);
                }
                None
            }
            PointerEvent::Move { id, pos } => {
                if let Some(motion) = self.drag.update(id, pos) {
                    self.drag_delta_px = motion.total.x;
                }
                None
            }
            PointerEvent::Up { id, pos } => {
                let end = self.drag.finish(id, pos)?;
                Some(self.commit(end))
            }
            PointerEvent::Cancel { id } | PointerEvent::CaptureLost { id } => {
                self.drag.abort(id)?;
                self.finish_drag(id);
                Some(DragOutcome::SnapBack)
            }
        }
    }

    fn commit(&mut self, end: DragEnd) -> DragOutcome {
        self.finish_drag(end.pointer);
        let delta_px = end.total.x;

        // Thresholds win over the tap slop, so a narrow track still commits.
        let by_pixels = delta_px.abs() >= self.config.commit_threshold_px;
        let by_percent = self.to_percent(delta_px).abs() >= self.config.commit_threshold_percent;
        if delta_px == 0.0 || !(by_pixels || by_percent) {
            if end.is_tap {
                return DragOutcome::Tap;
            }
            trace!(delta_px, "Track drag snapped back");
            return DragOutcome::SnapBack;
        }

        let direction = if delta_px < 0.0 {
            self.next();
            Direction::Forward
        } else {
            self.prev();
            Direction::Backward
        };
        debug!(%direction, delta_px, index = self.active_index, "Track drag committed");
        DragOutcome::Committed(direction)
    }

    fn finish_drag(&mut self, pointer: PointerId) {
        self.drag_delta_px = 0.0;
        self.capture.release(pointer);
    }

    fn effective_width(&self) -> f32 {
        if self.viewport_width > 0.0 {
            self.viewport_width
        } else {
            1.0
        }
    }

    fn to_percent(&self, px: f32) -> f32 {
        px / self.effective_width() * 100.0
    }

    // ------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------

    /// Width of one slot as a percentage of the viewport.
    pub fn slot_percent(&self) -> f32 {
        100.0 / self.items_per_view as f32
    }

    /// Strip translation in percent of the viewport width. During a drag the
    /// live delta is added unclamped.
    pub fn offset_percent(&self) -> f32 {
        -(self.active_index as f32 * self.slot_percent()) + self.to_percent(self.drag_delta_px)
    }

    pub fn layout(&self) -> TrackLayout {
        let n = self.items_per_view as f32;
        let gap = self.config.card_gap_px;
        let card_width = ((self.viewport_width - gap * (n - 1.0)) / n).max(0.0);
        let stride = card_width + gap;
        TrackLayout {
            card_width,
            stride,
            offset_px: -(self.active_index as f32 * stride) + self.drag_delta_px,
        }
    }

    /// Index of the card under viewport-relative `x`, if any.
    pub fn card_at(&self, x: f32) -> Option<usize> {
        let layout = self.layout();
        if layout.stride <= 0.0 {
            return None;
        }
        let strip_x = x - layout.offset_px;
        if strip_x < 0.0 {
            return None;
        }
        let slot = (strip_x / layout.stride).floor() as usize;
        let within_card = strip_x - slot as f32 * layout.stride <= layout.card_width;
        (within_card && slot < self.len()).then_some(slot)
    }

    // ------------------------------------------------------------------
    // Teardown
    // ------------------------------------------------------------------

    /// Cancel autoplay and release any captured pointer.
    pub fn unmount(&mut self) {
        self.autoplay.cancel();
        if let Some(pointer) = self.drag.reset() {
            self.finish_drag(pointer);
        }
    }
}

impl<T: Card, C: Clock, P: PointerCapture> Drop for SlideTrack<T, C, P> {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Convenience for adapters that only report horizontal positions.
pub fn horizontal(x: f32) -> Vec2 {
    Vec2::new(x, 0.0)
}
