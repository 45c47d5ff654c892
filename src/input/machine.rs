//! The editor's state stack.
//!
//! The top of the stack is the current state. States below it are the
//! history the editor returns to with `back_to_previous_state`. Whether a
//! state stays in the history when another one is pushed is up to its
//! `on_before_change_state` answer.

use crate::editor::Editor;
use crate::input::messages::Message;
use crate::input::state::{EditorContext, EditorState, StateRequest};
use crate::perf::StepTimer;
use std::collections::VecDeque;
use tracing::{debug, trace, warn};

pub struct EditorStateMachine {
    states: Vec<Box<dyn EditorState>>,
}

impl EditorStateMachine {
    /// Create a machine whose history starts with `initial`.
    pub fn new(initial: Box<dyn EditorState>) -> Self {
        Self {
            states: vec![initial],
        }
    }

    pub fn current(&self) -> Option<&dyn EditorState> {
        self.states.last().map(|s| s.as_ref())
    }

    pub fn current_name(&self) -> Option<&'static str> {
        self.current().map(|s| s.name())
    }

    /// Number of states in the history, current one included
    pub fn depth(&self) -> usize {
        self.states.len()
    }

    /// State names from the oldest to the current one
    pub fn history(&self) -> Vec<&'static str> {
        self.states.iter().map(|s| s.name()).collect()
    }

    /// Leave the current state for `state`.
    pub fn set_state(&mut self, editor: &mut dyn Editor, state: Box<dyn EditorState>) {
        self.apply(editor, vec![StateRequest::Set(state)]);
    }

    /// Leave the current state and return to the one below it.
    pub fn back_to_previous_state(&mut self, editor: &mut dyn Editor) {
        self.apply(editor, vec![StateRequest::Back]);
    }

    /// Route an input message to the current state. Returns true if handled.
    pub fn dispatch(&mut self, editor: &mut dyn Editor, msg: &Message) -> bool {
        let _timer = StepTimer::frame("dispatch");
        trace!(kind = msg.kind(), "Dispatching message");

        self.with_current(editor, false, |state, cx| match msg {
            Message::MouseDown(m) => state.on_mouse_down(cx, m),
            Message::MouseUp(m) => state.on_mouse_up(cx, m),
            Message::MouseMove(m) => state.on_mouse_move(cx, m),
            Message::MouseWheel(m) => state.on_mouse_wheel(cx, m),
            Message::KeyDown(m) => state.on_key_down(cx, m),
            Message::KeyUp(m) => state.on_key_up(cx, m),
            Message::SetCursor => state.on_set_cursor(cx),
        })
    }

    /// Tell the current state the editor's tool changed.
    pub fn current_tool_changed(&mut self, editor: &mut dyn Editor) {
        self.with_current(editor, (), |state, cx| state.on_current_tool_change(cx));
    }

    /// Let the current state refresh the status bar. Returns true if it did.
    pub fn update_status_bar(&mut self, editor: &mut dyn Editor) -> bool {
        self.with_current(editor, false, |state, cx| state.on_update_status_bar(cx))
    }

    fn with_current<R>(
        &mut self,
        editor: &mut dyn Editor,
        default: R,
        f: impl FnOnce(&mut dyn EditorState, &mut EditorContext<'_>) -> R,
    ) -> R {
        let (result, requests) = {
            let Some(state) = self.states.last_mut() else {
                warn!("Editor has no current state");
                return default;
            };
            let mut cx = EditorContext::new(&mut *editor);
            state.process_notifications(&mut cx);
            let result = f(state.as_mut(), &mut cx);
            (result, cx.into_requests())
        };

        self.apply(editor, requests);
        result
    }

    fn apply(&mut self, editor: &mut dyn Editor, requests: Vec<StateRequest>) {
        let mut queue: VecDeque<StateRequest> = requests.into();
        while let Some(request) = queue.pop_front() {
            let follow_up = match request {
                StateRequest::Set(state) => self.apply_set(editor, state),
                StateRequest::Back => self.apply_back(editor),
                StateRequest::Left => self.apply_left(editor),
            };
            queue.extend(follow_up);
        }
    }

    fn apply_set(
        &mut self,
        editor: &mut dyn Editor,
        state: Box<dyn EditorState>,
    ) -> Vec<StateRequest> {
        let mut cx = EditorContext::new(&mut *editor);

        if let Some(current) = self.states.last_mut() {
            current.process_notifications(&mut cx);
            let keep = current.on_before_change_state(&mut cx);
            if !keep {
                let dropped = self.states.pop();
                debug!(
                    state = dropped.as_ref().map(|s| s.name()),
                    "Dropped state from history"
                );
            }
        }

        debug!(state = state.name(), depth = self.states.len() + 1, "Entering state");
        self.states.push(state);
        if let Some(current) = self.states.last_mut() {
            current.on_after_change_state(&mut cx);
        }
        cx.into_requests()
    }

    fn apply_back(&mut self, editor: &mut dyn Editor) -> Vec<StateRequest> {
        if self.states.len() <= 1 {
            warn!("No previous state to go back to");
            return Vec::new();
        }

        let mut cx = EditorContext::new(&mut *editor);
        if let Some(mut leaving) = self.states.pop() {
            leaving.process_notifications(&mut cx);
            leaving.on_before_change_state(&mut cx);
            debug!(state = leaving.name(), "Left state");
        }
        self.enter_top(&mut cx);
        cx.into_requests()
    }

    fn apply_left(&mut self, editor: &mut dyn Editor) -> Vec<StateRequest> {
        if self.states.len() <= 1 {
            warn!("Last state cannot leave; keeping it");
            return Vec::new();
        }
        if let Some(left) = self.states.pop() {
            debug!(state = left.name(), "Left state");
        }

        let mut cx = EditorContext::new(&mut *editor);
        self.enter_top(&mut cx);
        cx.into_requests()
    }

    fn enter_top(&mut self, cx: &mut EditorContext<'_>) {
        let depth = self.states.len();
        if let Some(current) = self.states.last_mut() {
            debug!(state = current.name(), depth, "Back in state");
            current.on_after_change_state(cx);
        }
    }
}
