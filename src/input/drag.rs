//! Drag step while pixels float - moving the pixels under the pointer.
//!
//! ## Performance Notes
//!
//! Mouse move arrives for every pointer event during a drag. The step only
//! redraws the region the session reports as changed, and a step slower
//! than `SLOW_DRAG_MS` is logged.
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use crate::constants::SLOW_DRAG_MS;
use crate::input::messages::MouseMessage;
use crate::input::moving_pixels::MovingPixelsState;
use crate::input::state::EditorContext;
use crate::perf::StepTimer;
use crate::profile_scope;
use crate::types::CursorType;
use tracing::trace;

impl MovingPixelsState {
    pub(super) fn handle_mouse_move(
        &mut self,
        cx: &mut EditorContext<'_>,
        msg: &MouseMessage,
    ) -> bool {
        profile_scope!("moving_pixels_mouse_move");
        self.assert_session();

        if !self.session().is_dragging() {
            return self.fallback.on_mouse_move(cx, msg);
        }

        let _timer = StepTimer::start("drag_step", SLOW_DRAG_MS);

        // The pointer may be warped back into the view
        let screen = cx.control_infinite_scroll(msg);
        let pos = cx.screen_to_editor(screen);

        let dirty = self.session_mut().move_image(pos);
        if !dirty.is_empty() {
            trace!(?dirty, "Redrawing moved pixels");
            cx.hide_mouse_cursor();
            cx.draw_sprite_tiled(dirty);
            cx.show_mouse_cursor();
        }

        self.handle_update_status_bar(cx);
        true
    }

    pub(super) fn handle_set_cursor(&mut self, cx: &mut EditorContext<'_>) -> bool {
        self.assert_session();

        if self.session().is_dragging() {
            cx.hide_drawing_cursor();
            cx.set_cursor(CursorType::Move);
            return true;
        }

        self.fallback.on_set_cursor(cx)
    }
}
