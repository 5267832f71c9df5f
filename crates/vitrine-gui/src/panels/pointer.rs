use vitrine_core::geometry::Vec2;
use vitrine_core::gesture::{PointerEvent, PointerId};

/// egui merges mouse and touch into a single primary pointer.
pub const PRIMARY: PointerId = PointerId(0);

/// Translate this frame's primary pointer input over `response` into
/// component events in rect-local coordinates.
///
/// `tracking` says whether the component already owns the pointer. A press
/// only starts tracking when it lands on the response itself, not on a
/// widget drawn above it.
pub fn pointer_events(ui: &egui::Ui, response: &egui::Response, tracking: bool) -> Vec<PointerEvent> {
    let rect = response.rect;
    let (pressed, released, moving, present, pos) = ui.input(|i| {
        (
            i.pointer.primary_pressed(),
            i.pointer.primary_released(),
            i.pointer.is_moving(),
            i.pointer.has_pointer(),
            i.pointer.interact_pos(),
        )
    });
    let local = |p: egui::Pos2| Vec2::new(p.x - rect.left(), p.y - rect.top());

    let mut events = Vec::new();
    let mut tracking = tracking;
    if !tracking && pressed && response.hovered() {
        if let Some(p) = pos {
            events.push(PointerEvent::Down { id: PRIMARY, pos: local(p) });
            tracking = true;
        }
    }
    if !tracking {
        return events;
    }

    if !present {
        events.push(PointerEvent::Cancel { id: PRIMARY });
        return events;
    }
    if let Some(p) = pos {
        if moving {
            events.push(PointerEvent::Move { id: PRIMARY, pos: local(p) });
        }
        if released {
            events.push(PointerEvent::Up { id: PRIMARY, pos: local(p) });
        }
    }
    events
}
