mod drag;
mod input;
mod tap;

pub use drag::{DragEnd, DragMotion, DragTracker};
pub use input::{Key, PointerEvent, PointerId};
pub use tap::{TapDetector, TapKind};
