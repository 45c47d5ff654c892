//! The transform session contract.
//!
//! A session performs the actual move/scale/rotate of a floating pixel
//! region and its compositing into the document. The moving-pixels state
//! owns exactly one session and only drives it.

use crate::color::MaskColor;
use crate::geometry::{Point, Rect, Transformation};
use crate::handles::Handle;

pub trait TransformSession {
    /// Start dragging under `handle` at canvas position `pos`.
    fn catch_image(&mut self, pos: Point, handle: Handle);

    /// Commit the current transformation and start a new drag from it.
    fn catch_image_again(&mut self, pos: Point, handle: Handle);

    fn is_dragging(&self) -> bool;

    /// Drag to canvas position `pos`. Returns the canvas region that must be
    /// redrawn, or an empty rect if the pixels did not move.
    fn move_image(&mut self, pos: Point) -> Rect;

    /// End the drag, leaving the pixels floating where they are.
    fn drop_image_temporarily(&mut self);

    /// Stamp the floating pixels into the document.
    fn drop_image(&mut self);

    fn transformation(&self) -> Transformation;

    /// Color treated as transparent when compositing the floating pixels.
    fn set_mask_color(&mut self, color: MaskColor);
}
