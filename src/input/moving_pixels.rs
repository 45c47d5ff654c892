//! The moving-pixels state: a floating selection being transformed.
//!
//! The state owns the transform session for the whole time the pixels float.
//! Leaving the state, for whatever reason, stamps the pixels into the
//! document. Input the state does not consume goes to the fallback state
//! (usually standby), so the user can keep working with the floating
//! selection in place.
//!
//! Each input kind is handled in its own module:
//!
//! - `mouse_down` - re-catching under a handle, or leaving on outside clicks
//! - `mouse_up` - ending a drag
//! - `drag` - moving the pixels and the cursor shown while dragging
//! - `keyboard` - copy-selection key, wheel and tool changes
//! - `status` - status bar text and transparent color updates

use crate::editor::StatusBarEvent;
use crate::geometry::Transformation;
use crate::handles::Handle;
use crate::input::messages::{KeyMessage, MouseMessage, WheelMessage};
use crate::input::state::{EditorContext, EditorState};
use crate::session::TransformSession;
use crate::subscription::Subscription;
use tracing::{debug, trace};

pub struct MovingPixelsState {
    pub(super) session: Option<Box<dyn TransformSession>>,
    pub(super) fallback: Box<dyn EditorState>,
    pub(super) status_subscription: Subscription<StatusBarEvent>,
}

impl MovingPixelsState {
    /// Enter with the pixels of `session` floating.
    ///
    /// With a `handle`, a drag starts right away at the message position and
    /// the mouse is captured. Without one the pixels just float until the
    /// next click.
    pub fn new(
        cx: &mut EditorContext<'_>,
        msg: &MouseMessage,
        mut session: Box<dyn TransformSession>,
        handle: Option<Handle>,
        fallback: Box<dyn EditorState>,
    ) -> Self {
        if let Some(handle) = handle {
            let pos = cx.screen_to_editor(msg.position);
            session.catch_image(pos, handle);
            cx.capture_mouse();
        }

        let status_subscription = cx.status_bar_mut().subscribe();

        let mut state = Self {
            session: Some(session),
            fallback,
            status_subscription,
        };

        let color = cx.status_bar().transparent_color();
        state.on_change_transparent_color(cx, color);
        cx.status_bar_mut().show_move_pixels_options();

        debug!(?handle, "Started moving pixels");
        state
    }

    /// Whether the state still owns its session
    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }

    /// Whether a drag is in progress
    pub fn is_dragging(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.is_dragging())
    }

    /// Current transformation of the floating pixels
    pub fn transformation(&self) -> Transformation {
        self.session().transformation()
    }

    pub(super) fn session(&self) -> &dyn TransformSession {
        match self.session.as_deref() {
            Some(session) => session,
            None => panic!("moving pixels state used after its session was dropped"),
        }
    }

    pub(super) fn session_mut(&mut self) -> &mut dyn TransformSession {
        match self.session.as_deref_mut() {
            Some(session) => session,
            None => panic!("moving pixels state used after its session was dropped"),
        }
    }

    pub(super) fn assert_session(&self) {
        assert!(
            self.session.is_some(),
            "moving pixels state received input after its session was dropped"
        );
    }

    /// Stamp the pixels and go back to the previous state.
    pub(super) fn drop_pixels(&mut self, cx: &mut EditorContext<'_>) {
        trace!("Dropping pixels");
        cx.back_to_previous_state(self);
    }
}

impl EditorState for MovingPixelsState {
    fn name(&self) -> &'static str {
        "moving_pixels"
    }

    fn on_before_change_state(&mut self, cx: &mut EditorContext<'_>) -> bool {
        if let Some(mut session) = self.session.take() {
            if session.is_dragging() {
                session.drop_image_temporarily();
            }
            session.drop_image();
            cx.document_mut().reset_transformation();
            drop(session);

            cx.release_mouse();
            cx.status_bar_mut().hide_move_pixels_options();
            debug!("Pixels dropped into the document");
        }
        false
    }

    fn on_current_tool_change(&mut self, cx: &mut EditorContext<'_>) {
        self.handle_current_tool_change(cx);
    }

    fn on_mouse_down(&mut self, cx: &mut EditorContext<'_>, msg: &MouseMessage) -> bool {
        self.handle_mouse_down(cx, msg)
    }

    fn on_mouse_up(&mut self, cx: &mut EditorContext<'_>, msg: &MouseMessage) -> bool {
        self.handle_mouse_up(cx, msg)
    }

    fn on_mouse_move(&mut self, cx: &mut EditorContext<'_>, msg: &MouseMessage) -> bool {
        self.handle_mouse_move(cx, msg)
    }

    fn on_mouse_wheel(&mut self, cx: &mut EditorContext<'_>, msg: &WheelMessage) -> bool {
        self.handle_mouse_wheel(cx, msg)
    }

    fn on_set_cursor(&mut self, cx: &mut EditorContext<'_>) -> bool {
        self.handle_set_cursor(cx)
    }

    fn on_key_down(&mut self, cx: &mut EditorContext<'_>, msg: &KeyMessage) -> bool {
        self.handle_key_down(cx, msg)
    }

    fn on_key_up(&mut self, cx: &mut EditorContext<'_>, msg: &KeyMessage) -> bool {
        self.handle_key_up(cx, msg)
    }

    fn on_update_status_bar(&mut self, cx: &mut EditorContext<'_>) -> bool {
        self.handle_update_status_bar(cx)
    }

    fn process_notifications(&mut self, cx: &mut EditorContext<'_>) {
        for event in self.status_subscription.drain() {
            match event {
                StatusBarEvent::TransparentColorChanged(color) => {
                    if self.session.is_some() {
                        self.on_change_transparent_color(cx, color);
                    }
                }
            }
        }
    }
}

impl Drop for MovingPixelsState {
    fn drop(&mut self) {
        trace!(
            session_owned = self.session.is_some(),
            "Moving pixels state destroyed"
        );
    }
}
