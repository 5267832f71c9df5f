mod common;

use approx::assert_relative_eq;
use common::{media, RecordingHost};
use vitrine_core::clock::ManualClock;
use vitrine_core::config::ViewerConfig;
use vitrine_core::geometry::{Size, Vec2};
use vitrine_core::gesture::{Key, PointerEvent, PointerId};
use vitrine_core::viewer::{MediaViewport, ViewerPhase};

const P: PointerId = PointerId(1);

type Viewer = MediaViewport<RecordingHost, ManualClock>;

fn setup(n: usize) -> (Viewer, RecordingHost, ManualClock) {
    let host = RecordingHost::default();
    let clock = ManualClock::new(10_000);
    let mut viewer = MediaViewport::new(ViewerConfig::default(), host.clone(), clock.clone());
    viewer.open(media(n), 0);
    viewer.set_container_size(Size::new(1000.0, 800.0));
    viewer.set_natural_size(Size::new(2000.0, 1000.0));
    (viewer, host, clock)
}

fn zoom(v: &Viewer) -> f32 {
    v.state().unwrap().zoom_level
}

fn pan(v: &Viewer) -> Vec2 {
    v.state().unwrap().pan_offset
}

fn tap(v: &mut Viewer) {
    v.handle_pointer(PointerEvent::Down { id: P, pos: Vec2::new(500.0, 400.0) });
    v.handle_pointer(PointerEvent::Up { id: P, pos: Vec2::new(500.0, 400.0) });
}

// ---------------------------------------------------------------------------
// Navigation
// ---------------------------------------------------------------------------

#[test]
fn test_go_to_clamps_and_is_idempotent() {
    let (mut v, _, _) = setup(10);
    v.go_to(-5);
    assert_eq!(v.state().unwrap().active_index, 0);
    v.go_to(999);
    assert_eq!(v.state().unwrap().active_index, 9);
    let before = v.state().unwrap().clone();
    v.go_to(999);
    assert_eq!(v.state().unwrap(), &before);
}

#[test]
fn test_prev_at_start_and_next_at_end_are_noops() {
    let (mut v, _, _) = setup(10);
    v.zoom_in();
    let before = v.state().unwrap().clone();
    v.prev();
    assert_eq!(v.state().unwrap(), &before);

    v.go_to(9);
    v.zoom_in();
    v.zoom_in();
    let before = v.state().unwrap().clone();
    v.next();
    assert_eq!(v.state().unwrap(), &before);
}

#[test]
fn test_changing_image_resets_zoom_and_pan() {
    let (mut v, _, _) = setup(3);
    v.toggle_zoom();
    v.pan(100.0, 0.0);
    assert!(!pan(&v).is_zero());
    v.next();
    assert_eq!(v.state().unwrap().active_index, 1);
    assert_relative_eq!(zoom(&v), 1.0);
    assert_eq!(pan(&v), Vec2::ZERO);
}

#[test]
fn test_arrow_keys_navigate() {
    let (mut v, _, _) = setup(3);
    assert!(v.handle_key(Key::ArrowRight));
    assert!(v.handle_key(Key::ArrowRight));
    assert!(v.handle_key(Key::ArrowRight));
    assert_eq!(v.state().unwrap().active_index, 2);
    assert!(v.handle_key(Key::ArrowLeft));
    assert_eq!(v.state().unwrap().active_index, 1);
    assert!(!v.handle_key(Key::Other));
}

// ---------------------------------------------------------------------------
// Zoom
// ---------------------------------------------------------------------------

#[test]
fn test_zoom_steps_are_bounded() {
    let (mut v, _, _) = setup(1);
    for _ in 0..20 {
        v.zoom_in();
    }
    assert_relative_eq!(zoom(&v), 3.0);
    for _ in 0..20 {
        v.zoom_out();
    }
    assert_relative_eq!(zoom(&v), 1.0);
}

#[test]
fn test_zoom_keys() {
    let (mut v, _, _) = setup(1);
    v.handle_key(Key::Plus);
    v.handle_key(Key::Equals);
    assert_relative_eq!(zoom(&v), 1.5);
    v.handle_key(Key::Minus);
    assert_relative_eq!(zoom(&v), 1.25);
}

#[test]
fn test_invalid_config_falls_back_to_defaults() {
    let config = ViewerConfig {
        min_zoom: 2.0,
        max_zoom: 1.5,
        ..ViewerConfig::default()
    };
    let mut v: Viewer = MediaViewport::new(config, RecordingHost::default(), ManualClock::new(0));
    assert_eq!(v.config().min_zoom, 1.0);
    assert_eq!(v.config().max_zoom, 3.0);
    v.open(media(2), 0);
    v.zoom_in();
    assert_relative_eq!(zoom(&v), 1.25);
}

#[test]
fn test_returning_to_zoom_one_clears_pan() {
    let (mut v, _, _) = setup(1);
    v.zoom_in();
    v.pan(-40.0, 10.0);
    assert!(!pan(&v).is_zero());
    v.zoom_out();
    assert_relative_eq!(zoom(&v), 1.0);
    assert_eq!(pan(&v), Vec2::ZERO);
}

#[test]
fn test_pan_is_zero_whenever_zoom_is_one() {
    let (mut v, _, clock) = setup(4);
    let steps: [fn(&mut Viewer); 10] = [
        |v| v.zoom_in(),
        |v| v.pan(300.0, -200.0),
        |v| v.zoom_out(),
        |v| v.pan(50.0, 50.0),
        |v| v.toggle_zoom(),
        |v| v.pan(-900.0, 900.0),
        |v| v.next(),
        |v| v.toggle_zoom(),
        |v| v.toggle_zoom(),
        |v| v.pan(12.0, 0.0),
    ];
    for step in steps {
        step(&mut v);
        clock.advance(500);
        if zoom(&v) <= 1.0 {
            assert_eq!(pan(&v), Vec2::ZERO);
        }
    }
}

// ---------------------------------------------------------------------------
// Pan clamping
// ---------------------------------------------------------------------------

#[test]
fn test_pan_sequences_stay_within_limits() {
    let (mut v, _, _) = setup(1);
    // Contained size: 1000 x 500.
    for z in [1.25_f32, 1.5, 2.0, 2.75, 3.0] {
        while zoom(&v) < z {
            v.zoom_in();
        }
        let max_x = (1000.0 * z - 1000.0) / 2.0;
        let max_y = (500.0 * z - 500.0) / 2.0;
        for (dx, dy) in [(400.0, 0.0), (400.0, 300.0), (-2000.0, -17.0), (33.0, 800.0), (-1.0, -900.0)] {
            v.pan(dx, dy);
            let p = pan(&v);
            assert!(p.x.abs() <= max_x + 1e-3, "x={} max={max_x} at z={z}", p.x);
            assert!(p.y.abs() <= max_y + 1e-3, "y={} max={max_y} at z={z}", p.y);
        }
    }
}

#[test]
fn test_pan_reaches_edge_exactly() {
    let (mut v, _, _) = setup(1);
    v.toggle_zoom();
    v.pan(10_000.0, -10_000.0);
    let limits = v.pan_limits().unwrap();
    assert_relative_eq!(limits.x, 500.0);
    assert_relative_eq!(limits.y, 250.0);
    assert_eq!(pan(&v), Vec2::new(500.0, -250.0));
}

#[test]
fn test_pan_without_geometry_is_noop() {
    let host = RecordingHost::default();
    let mut v = MediaViewport::new(ViewerConfig::default(), host, ManualClock::new(0));
    v.open(media(2), 0);
    v.set_container_size(Size::new(800.0, 600.0));
    v.toggle_zoom();
    v.pan(50.0, 50.0);
    assert_eq!(pan(&v), Vec2::ZERO);

    v.set_natural_size(Size::new(800.0, 600.0));
    v.pan(50.0, 50.0);
    assert_eq!(pan(&v), Vec2::new(50.0, 50.0));
}

#[test]
fn test_new_image_forgets_natural_size() {
    let (mut v, _, _) = setup(2);
    v.next();
    assert!(v.geometry().is_none());
    v.toggle_zoom();
    v.pan(10.0, 10.0);
    assert_eq!(pan(&v), Vec2::ZERO);
}

#[test]
fn test_container_shrink_reclamps_pan() {
    let (mut v, _, _) = setup(1);
    v.toggle_zoom();
    v.pan(10_000.0, 0.0);
    assert_relative_eq!(pan(&v).x, 500.0);
    v.set_container_size(Size::new(500.0, 800.0));
    // Contained width is now 500, limit at zoom 2 is 250.
    assert_relative_eq!(pan(&v).x, 250.0);
}

// ---------------------------------------------------------------------------
// Double activation
// ---------------------------------------------------------------------------

#[test]
fn test_double_tap_toggles_between_one_and_two() {
    let (mut v, _, clock) = setup(1);
    tap(&mut v);
    clock.advance(200);
    tap(&mut v);
    assert_relative_eq!(zoom(&v), 2.0);

    clock.advance(400);
    tap(&mut v);
    assert_relative_eq!(zoom(&v), 2.0);

    clock.advance(100);
    tap(&mut v);
    assert_relative_eq!(zoom(&v), 1.0);
    assert_eq!(pan(&v), Vec2::ZERO);
}

#[test]
fn test_slow_taps_do_not_toggle() {
    let (mut v, _, clock) = setup(1);
    tap(&mut v);
    clock.advance(300);
    tap(&mut v);
    assert_relative_eq!(zoom(&v), 1.0);
}

#[test]
fn test_double_tap_from_other_zoom_resets() {
    let (mut v, _, clock) = setup(1);
    v.zoom_in();
    v.zoom_in();
    v.zoom_in();
    tap(&mut v);
    clock.advance(120);
    tap(&mut v);
    assert_relative_eq!(zoom(&v), 1.0);
}

#[test]
fn test_quick_pan_strokes_are_not_a_double_tap() {
    let (mut v, _, clock) = setup(1);
    v.toggle_zoom();
    v.handle_pointer(PointerEvent::Down { id: P, pos: Vec2::new(500.0, 400.0) });
    clock.advance(200);
    v.handle_pointer(PointerEvent::Move { id: P, pos: Vec2::new(350.0, 400.0) });
    v.handle_pointer(PointerEvent::Up { id: P, pos: Vec2::new(350.0, 400.0) });
    assert_eq!(pan(&v), Vec2::new(-150.0, 0.0));

    // Second stroke starts 280ms after the first press.
    clock.advance(80);
    v.handle_pointer(PointerEvent::Down { id: P, pos: Vec2::new(350.0, 400.0) });
    assert_relative_eq!(zoom(&v), 2.0);
    assert_eq!(pan(&v), Vec2::new(-150.0, 0.0));
    assert_eq!(v.phase(), ViewerPhase::Dragging);
}

#[test]
fn test_tap_after_pan_starts_new_sequence() {
    let (mut v, _, clock) = setup(1);
    v.toggle_zoom();
    v.handle_pointer(PointerEvent::Down { id: P, pos: Vec2::new(500.0, 400.0) });
    v.handle_pointer(PointerEvent::Up { id: P, pos: Vec2::new(400.0, 400.0) });
    clock.advance(50);
    tap(&mut v);
    assert_relative_eq!(zoom(&v), 2.0);
    clock.advance(50);
    tap(&mut v);
    assert_relative_eq!(zoom(&v), 1.0);
}

// ---------------------------------------------------------------------------
// Drag state machine
// ---------------------------------------------------------------------------

#[test]
fn test_no_drag_state_at_zoom_one() {
    let (mut v, host, _) = setup(1);
    v.handle_pointer(PointerEvent::Down { id: P, pos: Vec2::ZERO });
    assert_eq!(v.phase(), ViewerPhase::Idle);
    assert!(host.log.borrow().captured.is_empty());
    v.handle_pointer(PointerEvent::Move { id: P, pos: Vec2::new(100.0, 0.0) });
    assert_eq!(pan(&v), Vec2::ZERO);
}

#[test]
fn test_drag_pans_and_releases_capture() {
    let (mut v, host, _) = setup(1);
    v.toggle_zoom();
    v.handle_pointer(PointerEvent::Down { id: P, pos: Vec2::new(100.0, 100.0) });
    assert_eq!(v.phase(), ViewerPhase::Dragging);
    assert_eq!(host.log.borrow().captured, vec![P]);

    v.handle_pointer(PointerEvent::Move { id: P, pos: Vec2::new(130.0, 90.0) });
    v.handle_pointer(PointerEvent::Move { id: P, pos: Vec2::new(150.0, 80.0) });
    assert_eq!(pan(&v), Vec2::new(50.0, -20.0));

    v.handle_pointer(PointerEvent::Up { id: P, pos: Vec2::new(160.0, 80.0) });
    assert_eq!(pan(&v), Vec2::new(60.0, -20.0));
    assert_eq!(v.phase(), ViewerPhase::Idle);
    assert!(host.log.borrow().captured.is_empty());
}

#[test]
fn test_capture_loss_ends_drag() {
    let (mut v, _, _) = setup(1);
    v.zoom_in();
    v.handle_pointer(PointerEvent::Down { id: P, pos: Vec2::ZERO });
    v.handle_pointer(PointerEvent::CaptureLost { id: P });
    assert_eq!(v.phase(), ViewerPhase::Idle);
    v.handle_pointer(PointerEvent::Move { id: P, pos: Vec2::new(40.0, 0.0) });
    assert_eq!(pan(&v), Vec2::ZERO);
}

#[test]
fn test_second_pointer_does_not_steal_drag() {
    let (mut v, _, _) = setup(1);
    v.toggle_zoom();
    v.handle_pointer(PointerEvent::Down { id: P, pos: Vec2::ZERO });
    v.handle_pointer(PointerEvent::Move { id: PointerId(2), pos: Vec2::new(80.0, 0.0) });
    v.handle_pointer(PointerEvent::Cancel { id: PointerId(2) });
    assert_eq!(v.phase(), ViewerPhase::Dragging);
    assert_eq!(pan(&v), Vec2::ZERO);
}

// ---------------------------------------------------------------------------
// Scoped resources
// ---------------------------------------------------------------------------

#[test]
fn test_open_and_close_manage_scroll() {
    let (mut v, host, _) = setup(2);
    assert!(host.log.borrow().scroll_suspended);
    v.open(media(5), 3);
    assert_eq!(host.log.borrow().suspend_calls, 1);
    v.close();
    assert!(!host.log.borrow().scroll_suspended);
    assert_eq!(v.phase(), ViewerPhase::Closed);
}

#[test]
fn test_drop_while_open_releases_everything() {
    let (mut v, host, _) = setup(2);
    v.toggle_fullscreen();
    v.toggle_zoom();
    v.handle_pointer(PointerEvent::Down { id: P, pos: Vec2::ZERO });
    drop(v);
    let log = host.log.borrow();
    assert!(!log.scroll_suspended);
    assert!(!log.fullscreen);
    assert!(log.captured.is_empty());
}

#[test]
fn test_close_during_drag_releases_capture() {
    let (mut v, host, _) = setup(2);
    v.zoom_in();
    v.handle_pointer(PointerEvent::Down { id: P, pos: Vec2::ZERO });
    assert!(v.handle_key(Key::Escape));
    assert!(host.log.borrow().captured.is_empty());
    assert!(!host.log.borrow().scroll_suspended);
}

#[test]
fn test_fullscreen_toggle() {
    let (mut v, host, _) = setup(1);
    v.toggle_fullscreen();
    assert!(v.state().unwrap().is_fullscreen);
    assert!(host.log.borrow().fullscreen);
    v.toggle_fullscreen();
    assert!(!v.state().unwrap().is_fullscreen);
    v.toggle_fullscreen();
    v.close();
    assert!(!host.log.borrow().fullscreen);
}

#[test]
fn test_fullscreen_failure_is_swallowed() {
    let host = RecordingHost::failing_fullscreen();
    let mut v = MediaViewport::new(ViewerConfig::default(), host, ManualClock::new(0));
    v.open(media(1), 0);
    v.toggle_fullscreen();
    assert!(v.is_open());
    assert!(!v.state().unwrap().is_fullscreen);
}

#[test]
fn test_empty_list_never_suspends_scroll() {
    let host = RecordingHost::default();
    let mut v = MediaViewport::new(ViewerConfig::default(), host.clone(), ManualClock::new(0));
    v.open(media(0), 0);
    assert!(!v.is_open());
    assert_eq!(host.log.borrow().suspend_calls, 0);
    v.next();
    v.zoom_in();
    v.pan(5.0, 5.0);
    assert!(v.state().is_none());
}
