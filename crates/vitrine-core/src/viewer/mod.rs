//! Full-screen media viewer (lightbox): one image at a time with zoom,
//! clamped pan, double-activation zoom toggle and list navigation.

mod media;
mod state;

pub use media::{media_list, MediaItem, MediaList};
pub use state::{ViewTransform, ViewerPhase, ViewerState};

use tracing::{debug, trace, warn};

use crate::clock::{Clock, SystemClock};
use crate::config::ViewerConfig;
use crate::geometry::{clamp_index, normalize_zoom, Size, Vec2, ViewportGeometry};
use crate::gesture::{DragTracker, Key, PointerEvent, PointerId, TapDetector, TapKind};
use crate::host::{NoopHost, ViewerHost};

type CloseCallback = Box<dyn FnMut()>;

/// Lightbox state machine over a caller-supplied [`MediaList`].
///
/// Indices are always clamped, never rejected. Opening acquires the host's
/// scroll suspension; closing or dropping the viewer releases it together
/// with pointer capture and fullscreen mode.
pub struct MediaViewport<H: ViewerHost = NoopHost, C: Clock = SystemClock> {
    config: ViewerConfig,
    host: H,
    clock: C,
    media: Option<MediaList>,
    state: Option<ViewerState>,
    container: Option<Size>,
    natural: Option<Size>,
    taps: TapDetector,
    drag: DragTracker,
    on_close: Option<CloseCallback>,
}

impl Default for MediaViewport {
    fn default() -> Self {
        Self::new(ViewerConfig::default(), NoopHost, SystemClock::new())
    }
}

impl<H: ViewerHost, C: Clock> MediaViewport<H, C> {
    /// An invalid `config` is replaced by the defaults.
    pub fn new(config: ViewerConfig, host: H, clock: C) -> Self {
        let config = match config.validate() {
            Ok(()) => config,
            Err(e) => {
                warn!("Invalid viewer config, using defaults: {e}");
                ViewerConfig::default()
            }
        };
        let taps = TapDetector::new(config.double_tap_window_ms);
        Self {
            config,
            host,
            clock,
            media: None,
            state: None,
            container: None,
            natural: None,
            taps,
            drag: DragTracker::default(),
            on_close: None,
        }
    }

    /// Register the owner's close notification.
    pub fn set_on_close(&mut self, callback: impl FnMut() + 'static) {
        self.on_close = Some(Box::new(callback));
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn is_open(&self) -> bool {
        self.state.is_some()
    }

    pub fn phase(&self) -> ViewerPhase {
        match &self.state {
            None => ViewerPhase::Closed,
            Some(s) if s.is_dragging => ViewerPhase::Dragging,
            Some(_) => ViewerPhase::Idle,
        }
    }

    pub fn state(&self) -> Option<&ViewerState> {
        self.state.as_ref()
    }

    pub fn media(&self) -> &[MediaItem] {
        self.media.as_deref().unwrap_or(&[])
    }

    pub fn current(&self) -> Option<&MediaItem> {
        let index = self.state.as_ref()?.active_index;
        self.media().get(index)
    }

    pub fn can_prev(&self) -> bool {
        self.state.as_ref().is_some_and(|s| s.active_index > 0)
    }

    pub fn can_next(&self) -> bool {
        self.state
            .as_ref()
            .is_some_and(|s| s.active_index + 1 < self.media().len())
    }

    /// One-based position and total, e.g. `(3, 10)` for "3 / 10".
    pub fn counter(&self) -> Option<(usize, usize)> {
        self.state
            .as_ref()
            .map(|s| (s.active_index + 1, self.media().len()))
    }

    pub fn transform(&self) -> ViewTransform {
        match &self.state {
            Some(s) => ViewTransform {
                offset: s.pan_offset,
                scale: s.zoom_level,
                animate: !s.is_dragging,
            },
            None => ViewTransform {
                offset: Vec2::ZERO,
                scale: self.config.min_zoom,
                animate: true,
            },
        }
    }

    /// Current geometry snapshot, if both container and image sizes are known.
    pub fn geometry(&self) -> Option<ViewportGeometry> {
        ViewportGeometry::new(self.container?, self.natural?)
    }

    /// Pan bounds at the current zoom, if geometry is known.
    pub fn pan_limits(&self) -> Option<Vec2> {
        let zoom = self.state.as_ref()?.zoom_level;
        Some(self.geometry()?.pan_limits(zoom))
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Open on `list` at `start_index` (clamped). An empty list is a no-op.
    pub fn open(&mut self, list: MediaList, start_index: i64) {
        let Some(index) = clamp_index(start_index, list.len()) else {
            debug!("Ignoring open with an empty media list");
            return;
        };

        if self.is_open() {
            self.end_drag();
            self.exit_fullscreen_quietly();
        } else {
            self.host.suspend_scroll();
        }

        debug!(index, total = list.len(), "Viewer opened");
        self.media = Some(list);
        self.state = Some(ViewerState::new(index));
        if let Some(s) = self.state.as_mut() {
            s.reset_view(self.config.min_zoom);
        }
        self.natural = None;
        self.taps.reset();
    }

    /// Close, release every scoped resource and notify the owner.
    pub fn close(&mut self) {
        if !self.is_open() {
            return;
        }
        self.release_resources();
        self.state = None;
        self.media = None;
        self.natural = None;
        debug!("Viewer closed");

        if let Some(on_close) = self.on_close.as_mut() {
            on_close();
        }
    }

    fn release_resources(&mut self) {
        self.end_drag();
        self.exit_fullscreen_quietly();
        self.host.restore_scroll();
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    /// Show image `index` (clamped). Changing image resets zoom and pan.
    pub fn go_to(&mut self, index: i64) {
        let len = self.media().len();
        let Some(target) = clamp_index(index, len) else {
            return;
        };
        let Some(current) = self.state.as_ref().map(|s| s.active_index) else {
            return;
        };
        if target == current {
            return;
        }

        self.end_drag();
        let min_zoom = self.config.min_zoom;
        if let Some(s) = self.state.as_mut() {
            s.active_index = target;
            s.reset_view(min_zoom);
        }
        self.natural = None;
        self.taps.reset();
        debug!(from = current, to = target, "Viewer image changed");
    }

    pub fn next(&mut self) {
        if let Some(i) = self.state.as_ref().map(|s| s.active_index as i64) {
            self.go_to(i + 1);
        }
    }

    pub fn prev(&mut self) {
        if let Some(i) = self.state.as_ref().map(|s| s.active_index as i64) {
            self.go_to(i - 1);
        }
    }

    // ------------------------------------------------------------------
    // Zoom and pan
    // ------------------------------------------------------------------

    pub fn zoom_in(&mut self) {
        let step = self.config.zoom_step;
        self.zoom_by(step);
    }

    pub fn zoom_out(&mut self) {
        let step = self.config.zoom_step;
        self.zoom_by(-step);
    }

    /// Double activation: jump from the contained view to the double-tap
    /// level, or back to the contained view from any other level.
    pub fn toggle_zoom(&mut self) {
        let Some(zoom) = self.state.as_ref().map(|s| s.zoom_level) else {
            return;
        };
        let target = if zoom <= self.config.min_zoom {
            self.config.double_tap_zoom
        } else {
            self.config.min_zoom
        };
        self.set_zoom(target);
    }

    fn zoom_by(&mut self, delta: f32) {
        if let Some(zoom) = self.state.as_ref().map(|s| s.zoom_level) {
            self.set_zoom(zoom + delta);
        }
    }

    fn set_zoom(&mut self, zoom: f32) {
        let zoom = normalize_zoom(zoom, self.config.min_zoom, self.config.max_zoom);
        let geometry = self.geometry();
        let at_min = zoom <= self.config.min_zoom;

        let Some(s) = self.state.as_mut() else {
            return;
        };
        s.zoom_level = zoom;
        if at_min {
            s.pan_offset = Vec2::ZERO;
        } else if let Some(geo) = geometry {
            s.pan_offset = geo.clamp_pan(s.pan_offset, zoom);
        }
        debug!(zoom, "Viewer zoom changed");

        if at_min {
            self.end_drag();
        }
    }

    /// Move the zoomed image by `(dx, dy)`, clamped to the image bounds.
    ///
    /// No effect at the minimum zoom or while the geometry is unknown.
    pub fn pan(&mut self, dx: f32, dy: f32) {
        let Some(geo) = self.geometry() else {
            trace!("Pan ignored: geometry unknown");
            return;
        };
        let min_zoom = self.config.min_zoom;
        let Some(s) = self.state.as_mut() else {
            return;
        };
        if s.zoom_level <= min_zoom {
            return;
        }
        s.pan_offset = geo.clamp_pan(s.pan_offset + Vec2::new(dx, dy), s.zoom_level);
        trace!(x = s.pan_offset.x, y = s.pan_offset.y, "Viewer pan");
    }

    // ------------------------------------------------------------------
    // Fullscreen
    // ------------------------------------------------------------------

    /// Enter or leave platform fullscreen. Failures are logged and ignored.
    pub fn toggle_fullscreen(&mut self) {
        let Some(is_fullscreen) = self.state.as_ref().map(|s| s.is_fullscreen) else {
            return;
        };
        let result = if is_fullscreen {
            self.host.exit_fullscreen()
        } else {
            self.host.request_fullscreen()
        };
        match result {
            Ok(()) => {
                if let Some(s) = self.state.as_mut() {
                    s.is_fullscreen = !is_fullscreen;
                }
            }
            Err(e) => warn!("Fullscreen toggle failed: {e}"),
        }
    }

    /// The host left or entered fullscreen on its own (e.g. platform shortcut).
    pub fn fullscreen_changed(&mut self, active: bool) {
        if let Some(s) = self.state.as_mut() {
            s.is_fullscreen = active;
        }
    }

    fn exit_fullscreen_quietly(&mut self) {
        let was_fullscreen = self
            .state
            .as_mut()
            .map(|s| std::mem::replace(&mut s.is_fullscreen, false))
            .unwrap_or(false);
        if was_fullscreen {
            if let Err(e) = self.host.exit_fullscreen() {
                warn!("Leaving fullscreen failed: {e}");
            }
        }
    }

    // ------------------------------------------------------------------
    // Geometry provider
    // ------------------------------------------------------------------

    pub fn set_container_size(&mut self, size: Size) {
        if self.container != Some(size) {
            self.container = Some(size);
            self.reclamp_pan();
        }
    }

    /// The active image finished loading with this natural size.
    pub fn set_natural_size(&mut self, size: Size) {
        if self.natural != Some(size) {
            self.natural = Some(size);
            self.reclamp_pan();
        }
    }

    fn reclamp_pan(&mut self) {
        let Some(geo) = self.geometry() else {
            return;
        };
        if let Some(s) = self.state.as_mut() {
            s.pan_offset = geo.clamp_pan(s.pan_offset, s.zoom_level);
        }
    }

    // ------------------------------------------------------------------
    // Gesture input provider
    // ------------------------------------------------------------------

    /// Keyboard surface while open. Returns `true` if the key was handled.
    pub fn handle_key(&mut self, key: Key) -> bool {
        if !self.is_open() {
            return false;
        }
        match key {
            Key::Escape => self.close(),
            Key::ArrowLeft => self.prev(),
            Key::ArrowRight => self.next(),
            Key::Plus | Key::Equals => self.zoom_in(),
            Key::Minus => self.zoom_out(),
            Key::Other => return false,
        }
        true
    }

    pub fn handle_pointer(&mut self, event: PointerEvent) {
        if !self.is_open() {
            return;
        }
        match event {
            PointerEvent::Down { id, pos } => self.pointer_down(id, pos),
            PointerEvent::Move { id, pos } => {
                if let Some(motion) = self.drag.update(id, pos) {
                    self.pan(motion.step.x, motion.step.y);
                }
            }
            PointerEvent::Up { id, pos } => {
                if let Some(motion) = self.drag.update(id, pos) {
                    self.pan(motion.step.x, motion.step.y);
                }
                self.release_pointer(id);
            }
            PointerEvent::Cancel { id } | PointerEvent::CaptureLost { id } => {
                self.release_pointer(id);
            }
        }
    }

    fn pointer_down(&mut self, id: PointerId, pos: Vec2) {
        if self.taps.register(self.clock.now_ms()) == TapKind::Double {
            self.toggle_zoom();
        }

        let zoomed = self
            .state
            .as_ref()
            .is_some_and(|s| s.zoom_level > self.config.min_zoom);
        if !zoomed || !self.drag.begin(id, pos) {
            return;
        }
        self.host.capture(id);
        if let Some(s) = self.state.as_mut() {
            s.is_dragging = true;
        }
        trace!(%id, "Viewer drag started");
    }

    /// End the session owned by `id`. A press that turned into a pan never
    /// counts towards a double activation.
    fn release_pointer(&mut self, id: PointerId) {
        let Some(end) = self.drag.abort(id) else {
            return;
        };
        if !end.is_tap {
            self.taps.reset();
        }
        self.host.release(id);
        if let Some(s) = self.state.as_mut() {
            s.is_dragging = false;
        }
        trace!(pointer = %id, panned = !end.is_tap, "Viewer drag ended");
    }

    fn end_drag(&mut self) {
        if let Some(pointer) = self.drag.reset() {
            self.host.release(pointer);
            trace!(%pointer, "Viewer drag ended");
        }
        if let Some(s) = self.state.as_mut() {
            s.is_dragging = false;
        }
    }
}

impl<H: ViewerHost, C: Clock> Drop for MediaViewport<H, C> {
    fn drop(&mut self) {
        if self.is_open() {
            self.release_resources();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use std::cell::Cell;
    use std::rc::Rc;
    use std::sync::Arc;

    fn list(n: usize) -> MediaList {
        (0..n)
            .map(|i| MediaItem::new(format!("img/{i}.jpg"), format!("Image {i}")))
            .collect::<Vec<_>>()
            .into()
    }

    fn viewer() -> MediaViewport<NoopHost, ManualClock> {
        MediaViewport::new(ViewerConfig::default(), NoopHost, ManualClock::new(0))
    }

    #[test]
    fn test_open_clamps_start_index() {
        let mut v = viewer();
        v.open(list(4), 12);
        assert_eq!(v.state().unwrap().active_index, 3);
        v.open(list(4), -1);
        assert_eq!(v.state().unwrap().active_index, 0);
    }

    #[test]
    fn test_open_empty_list_is_noop() {
        let mut v = viewer();
        v.open(Arc::from(Vec::<MediaItem>::new()), 0);
        assert!(!v.is_open());
        assert_eq!(v.phase(), ViewerPhase::Closed);
        assert!(v.current().is_none());
    }

    #[test]
    fn test_counter_and_boundaries() {
        let mut v = viewer();
        v.open(list(3), 0);
        assert_eq!(v.counter(), Some((1, 3)));
        assert!(!v.can_prev());
        assert!(v.can_next());
        v.go_to(2);
        assert_eq!(v.counter(), Some((3, 3)));
        assert!(!v.can_next());
    }

    #[test]
    fn test_close_notifies_owner_once() {
        let closed = Rc::new(Cell::new(0));
        let mut v = viewer();
        let c = closed.clone();
        v.set_on_close(move || c.set(c.get() + 1));
        v.open(list(2), 0);
        v.close();
        v.close();
        assert_eq!(closed.get(), 1);
    }

    #[test]
    fn test_escape_closes() {
        let mut v = viewer();
        v.open(list(2), 0);
        assert!(v.handle_key(Key::Escape));
        assert!(!v.is_open());
        assert!(!v.handle_key(Key::ArrowRight));
    }

    #[test]
    fn test_zoom_out_reclamps_pan() {
        let mut v = viewer();
        v.open(list(1), 0);
        v.set_container_size(Size::new(800.0, 600.0));
        v.set_natural_size(Size::new(800.0, 600.0));
        v.toggle_zoom();
        v.pan(10_000.0, 0.0);
        assert_eq!(v.state().unwrap().pan_offset.x, 400.0);
        v.zoom_out();
        // zoom 1.75 -> limit 300
        assert_eq!(v.state().unwrap().pan_offset.x, 300.0);
    }

    #[test]
    fn test_transform_reports_drag_without_animation() {
        let clock = ManualClock::new(0);
        let mut v = MediaViewport::new(ViewerConfig::default(), NoopHost, clock.clone());
        v.open(list(1), 0);
        v.zoom_in();
        v.handle_pointer(PointerEvent::Down {
            id: PointerId(1),
            pos: Vec2::ZERO,
        });
        assert!(!v.transform().animate);
        v.handle_pointer(PointerEvent::Up {
            id: PointerId(1),
            pos: Vec2::ZERO,
        });
        assert!(v.transform().animate);
        assert_eq!(v.transform().scale, 1.25);
    }
}
