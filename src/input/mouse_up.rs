//! Mouse up while pixels float - ends the drag, pixels stay floating.

use crate::input::messages::MouseMessage;
use crate::input::moving_pixels::MovingPixelsState;
use crate::input::state::EditorContext;

impl MovingPixelsState {
    pub(super) fn handle_mouse_up(&mut self, cx: &mut EditorContext<'_>, _msg: &MouseMessage) -> bool {
        self.assert_session();

        self.session_mut().drop_image_temporarily();
        cx.invalidate();
        cx.release_mouse();
        true
    }
}
