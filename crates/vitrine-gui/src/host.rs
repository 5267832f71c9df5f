//! egui side of the viewer's platform resources.
//!
//! egui owns the window, so requests are queued here and flushed as viewport
//! commands at the end of the frame.

use tracing::debug;
use vitrine_core::gesture::PointerId;
use vitrine_core::host::{PointerCapture, ViewerHost};

/// Tracks which pointer a widget currently owns.
#[derive(Debug, Default)]
pub struct DragCapture {
    pointer: Option<PointerId>,
}

impl DragCapture {
    pub fn is_captured(&self) -> bool {
        self.pointer.is_some()
    }
}

impl PointerCapture for DragCapture {
    fn capture(&mut self, pointer: PointerId) {
        self.pointer = Some(pointer);
    }

    fn release(&mut self, pointer: PointerId) {
        if self.pointer == Some(pointer) {
            self.pointer = None;
        }
    }
}

#[derive(Default)]
pub struct EguiHost {
    capture: DragCapture,
    scroll_suspended: bool,
    /// Fullscreen state requested but not yet reported back by the window.
    fullscreen_target: Option<bool>,
    pending: Vec<egui::ViewportCommand>,
}

impl EguiHost {
    /// Background scrolling is disabled while the lightbox is up.
    pub fn scroll_suspended(&self) -> bool {
        self.scroll_suspended
    }

    pub fn is_capturing(&self) -> bool {
        self.capture.is_captured()
    }

    pub fn fullscreen_target(&self) -> Option<bool> {
        self.fullscreen_target
    }

    /// The window reported its fullscreen state; clears a matching request.
    pub fn observe_fullscreen(&mut self, active: bool) {
        if self.fullscreen_target == Some(active) {
            self.fullscreen_target = None;
        }
    }

    pub fn take_commands(&mut self) -> Vec<egui::ViewportCommand> {
        std::mem::take(&mut self.pending)
    }

    fn set_fullscreen(&mut self, active: bool) {
        debug!(active, "Fullscreen requested");
        self.fullscreen_target = Some(active);
        self.pending.push(egui::ViewportCommand::Fullscreen(active));
    }
}

impl PointerCapture for EguiHost {
    fn capture(&mut self, pointer: PointerId) {
        self.capture.capture(pointer);
    }

    fn release(&mut self, pointer: PointerId) {
        self.capture.release(pointer);
    }
}

impl ViewerHost for EguiHost {
    fn suspend_scroll(&mut self) {
        self.scroll_suspended = true;
    }

    fn restore_scroll(&mut self) {
        self.scroll_suspended = false;
    }

    fn request_fullscreen(&mut self) -> vitrine_core::error::Result<()> {
        self.set_fullscreen(true);
        Ok(())
    }

    fn exit_fullscreen(&mut self) -> vitrine_core::error::Result<()> {
        self.set_fullscreen(false);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fullscreen_request_is_queued_until_observed() {
        let mut host = EguiHost::default();
        host.request_fullscreen().unwrap();
        assert_eq!(host.fullscreen_target(), Some(true));
        assert_eq!(host.take_commands().len(), 1);
        assert!(host.take_commands().is_empty());

        host.observe_fullscreen(false);
        assert_eq!(host.fullscreen_target(), Some(true));
        host.observe_fullscreen(true);
        assert_eq!(host.fullscreen_target(), None);
    }

    #[test]
    fn test_release_ignores_other_pointer() {
        let mut capture = DragCapture::default();
        capture.capture(PointerId(1));
        capture.release(PointerId(2));
        assert!(capture.is_captured());
        capture.release(PointerId(1));
        assert!(!capture.is_captured());
    }
}
