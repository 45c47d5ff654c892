//! Keyboard, wheel and tool changes while pixels float.

use crate::input::messages::{KeyMessage, WheelMessage};
use crate::input::moving_pixels::MovingPixelsState;
use crate::input::state::EditorContext;
use tracing::debug;

impl MovingPixelsState {
    /// Pressing the copy-selection key with no button held stamps the pixels,
    /// so the next drag inside the selection starts from a fresh copy.
    pub(super) fn handle_key_down(&mut self, cx: &mut EditorContext<'_>, msg: &KeyMessage) -> bool {
        self.assert_session();

        let copy_pressed = cx
            .customization()
            .is_some_and(|c| c.is_copy_selection_key_pressed(&msg.modifiers));

        if copy_pressed && !cx.mouse_buttons().any() {
            debug!(key = %msg.key, "Copy-selection key pressed");
            self.drop_pixels(cx);
        }

        self.fallback.on_key_down(cx, msg)
    }

    pub(super) fn handle_key_up(&mut self, cx: &mut EditorContext<'_>, msg: &KeyMessage) -> bool {
        self.assert_session();
        self.fallback.on_key_up(cx, msg)
    }

    pub(super) fn handle_mouse_wheel(
        &mut self,
        cx: &mut EditorContext<'_>,
        msg: &WheelMessage,
    ) -> bool {
        self.assert_session();
        self.fallback.on_mouse_wheel(cx, msg)
    }

    /// Only selection tools can keep working on floating pixels.
    pub(super) fn handle_current_tool_change(&mut self, cx: &mut EditorContext<'_>) {
        self.assert_session();

        let tool = cx.current_tool();
        if !tool.is_selection_tool() {
            debug!(tool = %tool.id, "Tool change drops pixels");
            self.drop_pixels(cx);
        }
    }
}
