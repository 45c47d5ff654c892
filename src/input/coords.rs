//! Coordinate conversion utilities for editor interactions.
//!
//! This module provides the screen <-> canvas formulas shared by the
//! default [`crate::editor::Editor`] conversions and handle hit testing.

use crate::geometry::{Point, PointF};
use serde::{Deserialize, Serialize};

/// Context needed for coordinate conversions
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CoordinateContext {
    /// Screen position of canvas pixel (0, 0)
    pub origin: Point,
    /// Screen pixels per canvas pixel
    pub zoom: f64,
}

impl Default for CoordinateContext {
    fn default() -> Self {
        Self {
            origin: Point::default(),
            zoom: 1.0,
        }
    }
}

impl CoordinateContext {
    /// Create a new coordinate context
    #[inline]
    pub fn new(origin: Point, zoom: f64) -> Self {
        Self { origin, zoom }
    }
}

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Convert screen position to the canvas pixel under it
    #[inline]
    pub fn screen_to_canvas(screen_pos: Point, ctx: &CoordinateContext) -> Point {
        Point::new(
            ((screen_pos.x - ctx.origin.x) as f64 / ctx.zoom).floor() as i32,
            ((screen_pos.y - ctx.origin.y) as f64 / ctx.zoom).floor() as i32,
        )
    }

    /// Convert canvas position to screen position
    #[inline]
    pub fn canvas_to_screen(canvas_pos: PointF, ctx: &CoordinateContext) -> PointF {
        PointF::new(
            canvas_pos.x * ctx.zoom + ctx.origin.x as f64,
            canvas_pos.y * ctx.zoom + ctx.origin.y as f64,
        )
    }
}
