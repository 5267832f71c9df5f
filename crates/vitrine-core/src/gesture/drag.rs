use crate::consts::TAP_SLOP_PX;
use crate::geometry::Vec2;

use super::input::PointerId;

#[derive(Clone, Copy, Debug)]
struct Session {
    pointer: PointerId,
    start: Vec2,
    last: Vec2,
    /// Furthest distance from `start` seen so far.
    max_travel: f32,
}

/// Movement reported while a drag session is captured.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragMotion {
    /// Movement since the previous event of this session.
    pub step: Vec2,
    /// Movement since the press.
    pub total: Vec2,
}

/// Summary of a finished session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragEnd {
    pub pointer: PointerId,
    pub total: Vec2,
    /// The pointer never left the tap slop radius.
    pub is_tap: bool,
}

/// Single-pointer drag session: press, captured moves, release.
///
/// While a session is active, events from any other pointer are ignored.
/// Sessions end on release, cancel, capture loss or [`DragTracker::reset`],
/// never implicitly.
#[derive(Clone, Debug)]
pub struct DragTracker {
    session: Option<Session>,
    tap_slop: f32,
}

impl Default for DragTracker {
    fn default() -> Self {
        Self::new(TAP_SLOP_PX)
    }
}

impl DragTracker {
    pub fn new(tap_slop: f32) -> Self {
        Self {
            session: None,
            tap_slop: tap_slop.max(0.0),
        }
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn pointer(&self) -> Option<PointerId> {
        self.session.map(|s| s.pointer)
    }

    /// Movement since the press of the active session.
    pub fn total(&self) -> Option<Vec2> {
        self.session.map(|s| s.last - s.start)
    }

    /// Start a session. Returns `false` if another pointer already owns one.
    pub fn begin(&mut self, pointer: PointerId, pos: Vec2) -> bool {
        if let Some(s) = self.session {
            if s.pointer != pointer {
                return false;
            }
        }
        self.session = Some(Session {
            pointer,
            start: pos,
            last: pos,
            max_travel: 0.0,
        });
        true
    }

    pub fn update(&mut self, pointer: PointerId, pos: Vec2) -> Option<DragMotion> {
        let session = self.session.as_mut().filter(|s| s.pointer == pointer)?;
        let step = pos - session.last;
        session.last = pos;
        let total = pos - session.start;
        session.max_travel = session.max_travel.max(total.length());
        Some(DragMotion { step, total })
    }

    /// Release at `pos`, ending the session.
    pub fn finish(&mut self, pointer: PointerId, pos: Vec2) -> Option<DragEnd> {
        self.update(pointer, pos)?;
        self.end(pointer)
    }

    /// End the session without a final position (cancel or capture loss).
    pub fn abort(&mut self, pointer: PointerId) -> Option<DragEnd> {
        self.end(pointer)
    }

    /// Drop any active session regardless of pointer.
    pub fn reset(&mut self) -> Option<PointerId> {
        self.session.take().map(|s| s.pointer)
    }

    fn end(&mut self, pointer: PointerId) -> Option<DragEnd> {
        let session = self.session.filter(|s| s.pointer == pointer)?;
        self.session = None;
        Some(DragEnd {
            pointer,
            total: session.last - session.start,
            is_tap: session.max_travel <= self.tap_slop,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const P1: PointerId = PointerId(1);
    const P2: PointerId = PointerId(2);

    #[test]
    fn test_steps_and_total_accumulate() {
        let mut drag = DragTracker::default();
        assert!(drag.begin(P1, Vec2::new(10.0, 10.0)));

        let m = drag.update(P1, Vec2::new(15.0, 8.0)).unwrap();
        assert_eq!(m.step, Vec2::new(5.0, -2.0));
        assert_eq!(m.total, Vec2::new(5.0, -2.0));

        let m = drag.update(P1, Vec2::new(25.0, 8.0)).unwrap();
        assert_eq!(m.step, Vec2::new(10.0, 0.0));
        assert_eq!(m.total, Vec2::new(15.0, -2.0));
    }

    #[test]
    fn test_other_pointer_is_ignored() {
        let mut drag = DragTracker::default();
        drag.begin(P1, Vec2::ZERO);
        assert!(!drag.begin(P2, Vec2::ZERO));
        assert!(drag.update(P2, Vec2::new(50.0, 0.0)).is_none());
        assert!(drag.finish(P2, Vec2::new(50.0, 0.0)).is_none());
        assert_eq!(drag.pointer(), Some(P1));
    }

    #[test]
    fn test_small_movement_is_tap() {
        let mut drag = DragTracker::default();
        drag.begin(P1, Vec2::ZERO);
        drag.update(P1, Vec2::new(3.0, 2.0));
        let end = drag.finish(P1, Vec2::new(1.0, 0.0)).unwrap();
        assert!(end.is_tap);
        assert!(!drag.is_active());
    }

    #[test]
    fn test_returning_to_start_is_not_tap() {
        let mut drag = DragTracker::default();
        drag.begin(P1, Vec2::ZERO);
        drag.update(P1, Vec2::new(40.0, 0.0));
        let end = drag.finish(P1, Vec2::ZERO).unwrap();
        assert!(!end.is_tap);
        assert_eq!(end.total, Vec2::ZERO);
    }

    #[test]
    fn test_abort_keeps_last_total() {
        let mut drag = DragTracker::default();
        drag.begin(P1, Vec2::ZERO);
        drag.update(P1, Vec2::new(-30.0, 0.0));
        let end = drag.abort(P1).unwrap();
        assert_eq!(end.total, Vec2::new(-30.0, 0.0));
        assert!(drag.abort(P1).is_none());
    }

    #[test]
    fn test_reset_returns_owner() {
        let mut drag = DragTracker::default();
        drag.begin(P2, Vec2::ZERO);
        assert_eq!(drag.reset(), Some(P2));
        assert_eq!(drag.reset(), None);
    }
}
