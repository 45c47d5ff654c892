//! Mouse input while pixels float.

use crate::helpers::{mouse, Call, Fixture};
use movingpixels::geometry::{Point, Rect};
use movingpixels::handles::Handle;
use movingpixels::input::messages::{Message, MouseButtons};
use movingpixels::types::CursorType;

// ============================================================================
// Mouse down
// ============================================================================

#[test]
fn test_press_on_handle_catches_again() {
    let mut fx = Fixture::new();
    fx.enter(None, Point::new(30, 30));

    let handled = fx.dispatch(Message::MouseDown(mouse(10, 10, MouseButtons::left())));

    assert!(handled);
    assert_eq!(
        fx.log.calls(),
        vec![
            Call::CatchImageAgain(Point::new(10, 10), Handle::ScaleNW),
            Call::CaptureMouse,
        ]
    );
    assert_eq!(fx.current(), Some("moving_pixels"));
}

#[test]
fn test_press_on_rotate_handle_outside_selection() {
    let mut fx = Fixture::new();
    fx.enter(None, Point::new(30, 30));

    fx.dispatch(Message::MouseDown(mouse(59, 59, MouseButtons::left())));

    assert_eq!(
        fx.log.calls()[0],
        Call::CatchImageAgain(Point::new(59, 59), Handle::RotateSE)
    );
}

#[test]
fn test_recatch_while_dragging_commits_first() {
    let mut fx = Fixture::new();
    fx.enter(Some(Handle::Move), Point::new(30, 30));
    assert!(fx.dragging.get());

    fx.dispatch(Message::MouseDown(mouse(30, 30, MouseButtons::left())));

    assert_eq!(
        fx.log.calls(),
        vec![
            Call::DropImageTemporarily,
            Call::CatchImageAgain(Point::new(30, 30), Handle::Move),
            Call::CaptureMouse,
        ]
    );
}

#[test]
fn test_press_inside_selection_moves() {
    for buttons in [MouseButtons::left(), MouseButtons::right()] {
        let mut fx = Fixture::new();
        fx.enter(None, Point::new(30, 30));

        assert!(fx.dispatch(Message::MouseDown(mouse(25, 35, buttons))));
        assert_eq!(
            fx.log.calls()[0],
            Call::CatchImageAgain(Point::new(25, 35), Handle::Move)
        );
        assert!(fx.editor.captured);
    }
}

#[test]
fn test_press_inside_selection_without_button_drops() {
    let mut fx = Fixture::new();
    fx.enter(None, Point::new(30, 30));

    fx.dispatch(Message::MouseDown(mouse(30, 30, MouseButtons::none())));

    assert!(fx.log.contains(&Call::DropImage));
    assert_eq!(fx.current(), Some("standby"));
}

#[test]
fn test_press_outside_drops_and_delegates() {
    let mut fx = Fixture::new();
    fx.enter(Some(Handle::Move), Point::new(30, 30));

    let handled = fx.dispatch(Message::MouseDown(mouse(200, 200, MouseButtons::left())));

    assert!(handled, "fallback result is returned");
    let mut expected = Fixture::exit_sequence(true);
    expected.push(Call::State("fallback", "mouse_down"));
    expected.push(Call::State("standby", "enter"));
    assert_eq!(fx.log.calls(), expected);
    assert_eq!(fx.machine.history(), vec!["standby"]);
}

#[test]
fn test_hidden_mask_ignores_handles_and_selection() {
    let mut fx = Fixture::builder().with_hidden_mask().build();
    fx.enter(None, Point::new(30, 30));

    fx.dispatch(Message::MouseDown(mouse(10, 10, MouseButtons::left())));

    assert!(!fx.log.contains(&Call::CatchImageAgain(Point::new(10, 10), Handle::ScaleNW)));
    assert_eq!(fx.current(), Some("standby"));
}

#[test]
fn test_without_handles_selection_corner_moves() {
    let mut fx = Fixture::builder().without_handles().build();
    fx.enter(None, Point::new(30, 30));

    fx.dispatch(Message::MouseDown(mouse(10, 10, MouseButtons::left())));

    assert_eq!(
        fx.log.calls()[0],
        Call::CatchImageAgain(Point::new(10, 10), Handle::Move)
    );
}

// ============================================================================
// Mouse up
// ============================================================================

#[test]
fn test_release_ends_drag() {
    let mut fx = Fixture::new();
    fx.enter(Some(Handle::Move), Point::new(30, 30));

    let handled = fx.dispatch(Message::MouseUp(mouse(40, 40, MouseButtons::none())));

    assert!(handled);
    assert_eq!(
        fx.log.calls(),
        vec![Call::DropImageTemporarily, Call::Invalidate, Call::ReleaseMouse]
    );
    assert!(!fx.dragging.get());
    assert!(!fx.editor.captured);
    assert_eq!(fx.current(), Some("moving_pixels"));
}

// ============================================================================
// Mouse move
// ============================================================================

#[test]
fn test_drag_redraws_moved_region() {
    let mut fx = Fixture::new();
    fx.enter(Some(Handle::Move), Point::new(30, 30));
    let dirty = Rect::new(10, 10, 45, 45);
    fx.move_result.set(dirty);

    let handled = fx.dispatch(Message::MouseMove(mouse(35, 35, MouseButtons::left())));

    assert!(handled);
    assert_eq!(
        fx.log.calls(),
        vec![
            Call::MoveImage(Point::new(35, 35)),
            Call::HideMouseCursor,
            Call::DrawSpriteTiled(dirty),
            Call::ShowMouseCursor,
            Call::StatusText(100, "Pos 10 10, Size 40 40, Angle 0.0".to_string()),
        ]
    );
}

#[test]
fn test_drag_without_change_skips_redraw() {
    let mut fx = Fixture::new();
    fx.enter(Some(Handle::Move), Point::new(30, 30));

    fx.dispatch(Message::MouseMove(mouse(30, 30, MouseButtons::left())));

    assert_eq!(
        fx.log.calls(),
        vec![
            Call::MoveImage(Point::new(30, 30)),
            Call::StatusText(100, "Pos 10 10, Size 40 40, Angle 0.0".to_string()),
        ]
    );
}

#[test]
fn test_drag_follows_warped_pointer() {
    let mut fx = Fixture::new();
    fx.enter(Some(Handle::Move), Point::new(30, 30));
    fx.editor.scroll_warp = Some(Point::new(60, 60));

    fx.dispatch(Message::MouseMove(mouse(300, 300, MouseButtons::left())));

    assert_eq!(fx.log.calls()[0], Call::MoveImage(Point::new(60, 60)));
}

#[test]
fn test_drag_converts_to_canvas() {
    let mut fx = Fixture::new();
    fx.enter(Some(Handle::Move), Point::new(30, 30));
    fx.editor.viewport.origin = Point::new(100, 100);
    fx.editor.viewport.zoom = 2.0;

    fx.dispatch(Message::MouseMove(mouse(141, 161, MouseButtons::left())));

    assert_eq!(fx.log.calls()[0], Call::MoveImage(Point::new(20, 30)));
}

#[test]
fn test_move_without_drag_delegates() {
    let mut fx = Fixture::new();
    fx.enter(None, Point::new(30, 30));

    let handled = fx.dispatch(Message::MouseMove(mouse(30, 30, MouseButtons::none())));

    assert!(!handled);
    assert_eq!(fx.log.calls(), vec![Call::State("fallback", "mouse_move")]);
}

// ============================================================================
// Cursor and wheel
// ============================================================================

#[test]
fn test_move_cursor_while_dragging() {
    let mut fx = Fixture::new();
    fx.enter(Some(Handle::Move), Point::new(30, 30));

    assert!(fx.dispatch(Message::SetCursor));
    assert_eq!(
        fx.log.calls(),
        vec![Call::HideDrawingCursor, Call::SetCursor(CursorType::Move)]
    );
}

#[test]
fn test_cursor_delegates_when_idle() {
    let mut fx = Fixture::new();
    fx.enter(None, Point::new(30, 30));

    assert!(!fx.dispatch(Message::SetCursor));
    assert_eq!(fx.log.calls(), vec![Call::State("fallback", "set_cursor")]);
}

#[test]
fn test_wheel_delegates() {
    let mut fx = Fixture::new();
    fx.enter(Some(Handle::Move), Point::new(30, 30));

    let wheel = movingpixels::input::messages::WheelMessage {
        position: Point::new(30, 30),
        delta: 1,
        modifiers: Default::default(),
    };
    assert!(fx.dispatch(Message::MouseWheel(wheel)));
    assert_eq!(fx.log.calls(), vec![Call::State("fallback", "mouse_wheel")]);
    assert_eq!(fx.current(), Some("moving_pixels"));
}
