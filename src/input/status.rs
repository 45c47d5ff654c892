//! Status bar text and transparent color updates while pixels float.

use crate::color::{color_for_image, Color};
use crate::constants::STATUS_TEXT_MSECS;
use crate::geometry::Transformation;
use crate::input::moving_pixels::MovingPixelsState;
use crate::input::state::EditorContext;
use tracing::trace;

/// Status line for a floating selection, e.g. `Pos 10 20, Size 30 40, Angle 90.0`.
pub fn format_status_text(transformation: &Transformation) -> String {
    let bounds = transformation.bounds();
    format!(
        "Pos {} {}, Size {} {}, Angle {:.1}",
        bounds.x,
        bounds.y,
        bounds.w,
        bounds.h,
        transformation.angle_degrees()
    )
}

impl MovingPixelsState {
    pub(super) fn handle_update_status_bar(&mut self, cx: &mut EditorContext<'_>) -> bool {
        self.assert_session();

        let text = format_status_text(&self.transformation());
        cx.status_bar_mut().set_status_text(STATUS_TEXT_MSECS, text);
        true
    }

    /// Use `color` as the transparent color of the floating pixels.
    pub fn on_change_transparent_color(&mut self, cx: &EditorContext<'_>, color: Color) {
        let document = cx.document();
        let mask = color_for_image(color, document.pixel_format(), document.palette());
        trace!(?color, ?mask, "Transparent color changed");
        self.session_mut().set_mask_color(mask);
    }
}
