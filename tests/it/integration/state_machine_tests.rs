//! Editor state machine transitions.

use crate::helpers::{Call, CallLog, Fixture, RecordingState};
use movingpixels::input::messages::{KeyMessage, Message, Modifiers, MouseButtons, MouseMessage};
use movingpixels::input::{EditorContext, EditorState, EditorStateMachine};
use movingpixels::geometry::Point;

/// Leaves itself on key down, asking twice.
struct Quitter {
    log: CallLog,
}

impl EditorState for Quitter {
    fn name(&self) -> &'static str {
        "quitter"
    }

    fn on_before_change_state(&mut self, _cx: &mut EditorContext<'_>) -> bool {
        self.log.push(Call::State("quitter", "leave"));
        true
    }

    fn on_key_down(&mut self, cx: &mut EditorContext<'_>, _msg: &KeyMessage) -> bool {
        cx.back_to_previous_state(&mut *self);
        cx.back_to_previous_state(&mut *self);
        cx.has_left_state()
    }
}

/// Pushes a new state on mouse down.
struct Switcher {
    log: CallLog,
}

impl EditorState for Switcher {
    fn name(&self) -> &'static str {
        "switcher"
    }

    fn on_mouse_down(&mut self, cx: &mut EditorContext<'_>, _msg: &MouseMessage) -> bool {
        cx.set_state(Box::new(RecordingState::new("next", &self.log)));
        true
    }
}

fn key() -> Message {
    Message::KeyDown(KeyMessage::new("Escape", Modifiers::none()))
}

#[test]
fn test_new_machine_starts_in_initial_state() {
    let fx = Fixture::new();
    assert_eq!(fx.machine.depth(), 1);
    assert_eq!(fx.machine.history(), vec!["standby"]);
}

#[test]
fn test_back_without_history_is_ignored() {
    let mut fx = Fixture::new();

    fx.machine.back_to_previous_state(&mut fx.editor);

    assert_eq!(fx.machine.history(), vec!["standby"]);
    assert!(fx.log.calls().is_empty());
}

#[test]
fn test_back_returns_to_previous_state() {
    let mut fx = Fixture::new();
    let drawing = RecordingState::new("drawing", &fx.log);
    fx.machine.set_state(&mut fx.editor, Box::new(drawing));
    fx.log.clear();

    fx.machine.back_to_previous_state(&mut fx.editor);

    assert_eq!(fx.machine.history(), vec!["standby"]);
    assert_eq!(
        fx.log.calls(),
        vec![Call::State("drawing", "leave"), Call::State("standby", "enter")]
    );
}

#[test]
fn test_transient_state_not_kept_in_history() {
    let mut fx = Fixture::new();
    let preview = RecordingState::new("preview", &fx.log).transient();
    fx.machine.set_state(&mut fx.editor, Box::new(preview));
    let drawing = RecordingState::new("drawing", &fx.log);
    fx.machine.set_state(&mut fx.editor, Box::new(drawing));

    assert_eq!(fx.machine.history(), vec!["standby", "drawing"]);
    assert!(fx.log.contains(&Call::State("preview", "leave")));
}

#[test]
fn test_moving_pixels_never_kept_in_history() {
    let mut fx = Fixture::new();
    fx.enter(None, Point::new(30, 30));

    let drawing = RecordingState::new("drawing", &fx.log);
    fx.machine.set_state(&mut fx.editor, Box::new(drawing));

    assert_eq!(fx.machine.history(), vec!["standby", "drawing"]);
    assert!(fx.log.contains(&Call::DropImage));
}

#[test]
fn test_leaving_twice_in_one_hook_pops_once() {
    let mut fx = Fixture::new();
    let quitter = Quitter { log: fx.log.clone() };
    let mut machine = EditorStateMachine::new(Box::new(RecordingState::new("standby", &fx.log)));
    machine.set_state(&mut fx.editor, Box::new(RecordingState::new("base", &fx.log)));
    machine.set_state(&mut fx.editor, Box::new(quitter));
    fx.log.clear();

    assert!(machine.dispatch(&mut fx.editor, &key()));

    assert_eq!(machine.history(), vec!["standby", "base"]);
    assert_eq!(
        fx.log.calls(),
        vec![Call::State("quitter", "leave"), Call::State("base", "enter")]
    );
}

#[test]
fn test_sole_state_leaving_itself_is_kept() {
    let log = CallLog::default();
    let mut fx = Fixture::new();
    let mut machine = EditorStateMachine::new(Box::new(Quitter { log: log.clone() }));

    assert!(machine.dispatch(&mut fx.editor, &key()));
    assert_eq!(machine.depth(), 1);
    assert_eq!(machine.history(), vec!["quitter"]);

    // Still current, so input keeps reaching it
    assert!(machine.dispatch(&mut fx.editor, &key()));
    assert_eq!(machine.history(), vec!["quitter"]);
    assert_eq!(
        log.calls(),
        vec![Call::State("quitter", "leave"), Call::State("quitter", "leave")]
    );
}

#[test]
fn test_state_requested_from_hook_is_applied_after_it() {
    let mut fx = Fixture::new();
    let switcher = Switcher { log: fx.log.clone() };
    fx.machine.set_state(&mut fx.editor, Box::new(switcher));

    let press = MouseMessage::new(Point::new(0, 0), MouseButtons::left());
    assert!(fx.dispatch(Message::MouseDown(press)));

    assert_eq!(fx.machine.history(), vec!["standby", "switcher", "next"]);
    assert_eq!(fx.current(), Some("next"));
    assert!(fx.log.contains(&Call::State("next", "enter")));
}

#[test]
fn test_dispatch_returns_state_result() {
    let mut fx = Fixture::new();
    let press = MouseMessage::new(Point::new(0, 0), MouseButtons::left());

    assert!(fx.dispatch(Message::MouseDown(press)));
    assert!(!fx.dispatch(Message::SetCursor));
    assert!(!fx.machine.update_status_bar(&mut fx.editor));
}
