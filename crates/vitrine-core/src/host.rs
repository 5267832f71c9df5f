//! Platform resources the viewer and track acquire while active.
//!
//! Each acquisition has a matching release and the components guarantee the
//! release on every exit path, including drop.

use crate::error::Result;
use crate::gesture::PointerId;

/// Routes all events of one pointer to the component until released.
pub trait PointerCapture {
    fn capture(&mut self, _pointer: PointerId) {}

    fn release(&mut self, _pointer: PointerId) {}
}

/// Host environment of the full-screen viewer.
pub trait ViewerHost: PointerCapture {
    /// Disable scrolling of the page behind the viewer.
    fn suspend_scroll(&mut self) {}

    /// Undo [`ViewerHost::suspend_scroll`].
    fn restore_scroll(&mut self) {}

    fn request_fullscreen(&mut self) -> Result<()> {
        Ok(())
    }

    fn exit_fullscreen(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Host that owns no platform resources.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopHost;

impl PointerCapture for NoopHost {}
impl ViewerHost for NoopHost {}

impl<T: PointerCapture + ?Sized> PointerCapture for Box<T> {
    fn capture(&mut self, pointer: PointerId) {
        (**self).capture(pointer);
    }

    fn release(&mut self, pointer: PointerId) {
        (**self).release(pointer);
    }
}

impl<T: ViewerHost + ?Sized> ViewerHost for Box<T> {
    fn suspend_scroll(&mut self) {
        (**self).suspend_scroll();
    }

    fn restore_scroll(&mut self) {
        (**self).restore_scroll();
    }

    fn request_fullscreen(&mut self) -> Result<()> {
        (**self).request_fullscreen()
    }

    fn exit_fullscreen(&mut self) -> Result<()> {
        (**self).exit_fullscreen()
    }
}
