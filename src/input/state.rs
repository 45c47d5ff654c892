//! Editor states and the context they run in.
//!
//! An editor is always in exactly one interaction state (standby, drawing,
//! moving pixels, ...). The editor forwards each input message to its current
//! state through [`EditorState`]; the state reaches the editor, document and
//! status bar through the [`EditorContext`] handed to every hook.
//!
//! ## State Transitions
//!
//! States never swap themselves out directly. They queue a request on the
//! context and the [`super::EditorStateMachine`] applies it once the hook
//! returns:
//!
//! ```text
//! cx.set_state(new)                 current.on_before_change_state()
//!                                   -> drop current unless it asked to stay
//!                                   -> push new, new.on_after_change_state()
//!
//! cx.back_to_previous_state(self)   self.on_before_change_state() right away
//!                                   -> pop self after the hook returns
//!                                   -> previous.on_after_change_state()
//! ```

use crate::editor::Editor;
use crate::input::messages::{KeyMessage, MouseMessage, WheelMessage};
use std::ops::{Deref, DerefMut};

/// One node of the editor's interaction state machine.
///
/// Every hook has a neutral default so a state only implements what it
/// intercepts. Input hooks return true when the message was handled.
pub trait EditorState {
    /// Short name for logging
    fn name(&self) -> &'static str;

    /// Called after this state became the current one
    fn on_after_change_state(&mut self, _cx: &mut EditorContext<'_>) {}

    /// Called before the editor leaves this state. Returns whether the state
    /// stays in the history so the editor can come back to it.
    fn on_before_change_state(&mut self, _cx: &mut EditorContext<'_>) -> bool {
        true
    }

    fn on_current_tool_change(&mut self, _cx: &mut EditorContext<'_>) {}

    fn on_mouse_down(&mut self, _cx: &mut EditorContext<'_>, _msg: &MouseMessage) -> bool {
        false
    }

    fn on_mouse_up(&mut self, _cx: &mut EditorContext<'_>, _msg: &MouseMessage) -> bool {
        false
    }

    fn on_mouse_move(&mut self, _cx: &mut EditorContext<'_>, _msg: &MouseMessage) -> bool {
        false
    }

    fn on_mouse_wheel(&mut self, _cx: &mut EditorContext<'_>, _msg: &WheelMessage) -> bool {
        false
    }

    fn on_set_cursor(&mut self, _cx: &mut EditorContext<'_>) -> bool {
        false
    }

    fn on_key_down(&mut self, _cx: &mut EditorContext<'_>, _msg: &KeyMessage) -> bool {
        false
    }

    fn on_key_up(&mut self, _cx: &mut EditorContext<'_>, _msg: &KeyMessage) -> bool {
        false
    }

    fn on_update_status_bar(&mut self, _cx: &mut EditorContext<'_>) -> bool {
        false
    }

    /// Handle notifications queued by subscriptions the state holds. Called
    /// before every other hook.
    fn process_notifications(&mut self, _cx: &mut EditorContext<'_>) {}
}

/// Transition queued by a state during a hook.
pub(crate) enum StateRequest {
    /// Leave the current state for `state`
    Set(Box<dyn EditorState>),
    /// Return to the previous state; the current state has not exited yet
    Back,
    /// The current state already ran its exit hook and must be popped
    Left,
}

/// Per-call access to the editor plus the transition queue.
///
/// Derefs to the [`Editor`], so `cx.capture_mouse()` and friends work
/// directly.
pub struct EditorContext<'a> {
    editor: &'a mut dyn Editor,
    requests: Vec<StateRequest>,
    left: bool,
}

impl<'a> EditorContext<'a> {
    pub fn new(editor: &'a mut dyn Editor) -> Self {
        Self {
            editor,
            requests: Vec::new(),
            left: false,
        }
    }

    /// Switch to `state` once the current hook returns.
    pub fn set_state(&mut self, state: Box<dyn EditorState>) {
        tracing::trace!(next = state.name(), "State change requested");
        self.requests.push(StateRequest::Set(state));
    }

    /// Leave `current` and return to the previous state.
    ///
    /// `current` must be the state whose hook is running. Its exit hook runs
    /// immediately, so anything done afterwards in the same hook already
    /// sees the state torn down. Calling this again in the same hook does
    /// nothing.
    pub fn back_to_previous_state(&mut self, current: &mut dyn EditorState) {
        if self.left {
            tracing::trace!(state = current.name(), "Already leaving state");
            return;
        }
        self.left = true;

        let keep = current.on_before_change_state(self);
        tracing::debug!(state = current.name(), keep, "Back to previous state");
        self.requests.push(StateRequest::Left);
    }

    /// Returns true once the running state asked to go back
    pub fn has_left_state(&self) -> bool {
        self.left
    }

    pub(crate) fn into_requests(self) -> Vec<StateRequest> {
        self.requests
    }
}

impl<'a> Deref for EditorContext<'a> {
    type Target = dyn Editor + 'a;

    fn deref(&self) -> &Self::Target {
        &*self.editor
    }
}

impl<'a> DerefMut for EditorContext<'a> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.editor
    }
}
