//! Collaborator contracts implemented by the host application.
//!
//! The editor view, its document and the status bar live outside this crate.
//! Interaction states only see them through these traits, reached via the
//! [`crate::input::EditorContext`] passed to every hook.

use crate::color::{Color, Palette, PixelFormat};
use crate::geometry::{Point, PointF, Rect};
use crate::handles::TransformHandles;
use crate::input::coords::{CoordinateContext, CoordinateConverter};
use crate::input::messages::{Modifiers, MouseButtons, MouseMessage};
use crate::subscription::Subscription;
use crate::types::{CursorType, Tool};

/// The sprite document shown by an editor.
pub trait Document {
    /// Whether a selection mask exists and is shown
    fn is_mask_visible(&self) -> bool;

    /// Whether canvas pixel `pos` lies inside the selection mask
    fn mask_contains(&self, pos: Point) -> bool;

    /// Discard any pending transformation preview of the selection
    fn reset_transformation(&mut self);

    fn pixel_format(&self) -> PixelFormat;

    fn palette(&self) -> &Palette;
}

/// Notifications published by the status bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusBarEvent {
    /// The user picked a new transparent color for floating pixels
    TransparentColorChanged(Color),
}

/// The application status bar.
pub trait StatusBar {
    /// Color currently chosen as transparent for floating pixels
    fn transparent_color(&self) -> Color;

    /// Register for status bar notifications until the subscription drops
    fn subscribe(&mut self) -> Subscription<StatusBarEvent>;

    /// Show the controls specific to moving pixels
    fn show_move_pixels_options(&mut self);

    fn hide_move_pixels_options(&mut self);

    /// Show `text` for at least `msecs` milliseconds
    fn set_status_text(&mut self, msecs: u32, text: String);
}

/// Host hooks that customize editor behavior.
pub trait EditorCustomizationDelegate {
    /// Whether the key that duplicates the selection is held
    fn is_copy_selection_key_pressed(&self, modifiers: &Modifiers) -> bool;
}

/// An editor view bound to one document.
pub trait Editor {
    /// Current screen <-> canvas mapping
    fn viewport(&self) -> CoordinateContext;

    fn screen_to_editor(&self, screen: Point) -> Point {
        CoordinateConverter::screen_to_canvas(screen, &self.viewport())
    }

    fn editor_to_screen(&self, canvas: PointF) -> PointF {
        CoordinateConverter::canvas_to_screen(canvas, &self.viewport())
    }

    fn capture_mouse(&mut self);
    fn release_mouse(&mut self);

    /// Mouse buttons held right now, independent of any message
    fn mouse_buttons(&self) -> MouseButtons;

    fn current_tool(&self) -> &Tool;

    fn document(&self) -> &dyn Document;
    fn document_mut(&mut self) -> &mut dyn Document;

    /// Whether canvas pixel `pos` is inside a visible selection
    fn is_inside_selection(&self, pos: Point) -> bool {
        let document = self.document();
        document.is_mask_visible() && document.mask_contains(pos)
    }

    /// Transform handles drawn by the editor decorator, if any
    fn transform_handles(&self) -> Option<TransformHandles>;

    /// Scroll the view when dragging near its edges. Returns the pointer's
    /// screen position afterwards, which moves if the pointer was warped.
    fn control_infinite_scroll(&mut self, msg: &MouseMessage) -> Point;

    /// Schedule a redraw of the whole view
    fn invalidate(&mut self);

    /// Redraw `region` (canvas coordinates) in every tile the sprite shows in
    fn draw_sprite_tiled(&mut self, region: Rect);

    fn hide_mouse_cursor(&mut self);
    fn show_mouse_cursor(&mut self);

    /// Hide the brush preview drawn under the pointer
    fn hide_drawing_cursor(&mut self);

    fn set_cursor(&mut self, cursor: CursorType);

    fn customization(&self) -> Option<&dyn EditorCustomizationDelegate>;

    fn status_bar(&self) -> &dyn StatusBar;
    fn status_bar_mut(&mut self) -> &mut dyn StatusBar;
}
