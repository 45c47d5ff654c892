//! Mouse down while pixels float - re-catching or dropping them.
//!
//! A press on a transform handle or inside the selection starts a new drag
//! from the current transformation. A press anywhere else stamps the pixels
//! and hands the press to the fallback state, so e.g. a new selection can
//! start with the same click.

use crate::geometry::Point;
use crate::handles::Handle;
use crate::input::messages::MouseMessage;
use crate::input::moving_pixels::MovingPixelsState;
use crate::input::state::EditorContext;
use crate::profile_scope;
use tracing::debug;

impl MovingPixelsState {
    pub(super) fn handle_mouse_down(
        &mut self,
        cx: &mut EditorContext<'_>,
        msg: &MouseMessage,
    ) -> bool {
        profile_scope!("moving_pixels_mouse_down");
        self.assert_session();

        let pos = cx.screen_to_editor(msg.position);

        // Handles first, they extend past the selection edges
        if cx.document().is_mask_visible() {
            if let Some(handles) = cx.transform_handles() {
                let transformation = self.transformation();
                if let Some(handle) = handles.handle_at_point(&**cx, msg.position, &transformation)
                {
                    self.catch_again(cx, pos, handle);
                    return true;
                }
            }
        }

        if cx.is_inside_selection(pos) && (msg.buttons.left || msg.buttons.right) {
            self.catch_again(cx, pos, Handle::Move);
            return true;
        }

        debug!(x = pos.x, y = pos.y, "Press outside the selection");
        self.drop_pixels(cx);
        self.fallback.on_mouse_down(cx, msg)
    }

    /// Start a new drag under `handle`. An active drag is committed first.
    fn catch_again(&mut self, cx: &mut EditorContext<'_>, pos: Point, handle: Handle) {
        let session = self.session_mut();
        if session.is_dragging() {
            session.drop_image_temporarily();
        }
        session.catch_image_again(pos, handle);
        cx.capture_mouse();
        debug!(?handle, x = pos.x, y = pos.y, "Caught pixels again");
    }
}
