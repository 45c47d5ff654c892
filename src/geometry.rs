//! Integer canvas geometry and the selection transformation.
//!
//! Canvas and screen positions are whole pixels (`Point`, `Rect`). Rotated
//! corners are fractional, so they use `PointF`.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// A pixel position, either on screen or on the canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A fractional position, used for rotated corners and pivots.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PointF {
    pub x: f64,
    pub y: f64,
}

impl PointF {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Midpoint between two points
    #[inline]
    pub fn midpoint(a: PointF, b: PointF) -> PointF {
        PointF::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
    }

    /// Round to the nearest whole pixel
    #[inline]
    pub fn round(self) -> Point {
        Point::new(self.x.round() as i32, self.y.round() as i32)
    }
}

impl From<Point> for PointF {
    fn from(p: Point) -> Self {
        PointF::new(p.x as f64, p.y as f64)
    }
}

/// Axis-aligned rectangle with integer origin and size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    #[inline]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// The empty rectangle returned when nothing was affected.
    #[inline]
    pub const fn empty() -> Self {
        Self::new(0, 0, 0, 0)
    }

    /// A square of `size` centered on `center`.
    pub fn centered(center: Point, size: i32) -> Self {
        Self::new(
            center.x.saturating_sub(size / 2),
            center.y.saturating_sub(size / 2),
            size,
            size,
        )
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// Exclusive right edge
    #[inline]
    pub fn x2(&self) -> i32 {
        self.x.saturating_add(self.w)
    }

    /// Exclusive bottom edge
    #[inline]
    pub fn y2(&self) -> i32 {
        self.y.saturating_add(self.h)
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.x2() && p.y >= self.y && p.y < self.y2()
    }

    pub fn center(&self) -> PointF {
        PointF::new(
            self.x as f64 + self.w as f64 / 2.0,
            self.y as f64 + self.h as f64 / 2.0,
        )
    }
}

/// Corner indices returned by [`Transformation::corners`].
pub mod corner {
    pub const LEFT_TOP: usize = 0;
    pub const RIGHT_TOP: usize = 1;
    pub const RIGHT_BOTTOM: usize = 2;
    pub const LEFT_BOTTOM: usize = 3;
}

/// Position, size and rotation of the floating selection.
///
/// `bounds` is the unrotated box. The box is rotated by `angle` radians
/// around `pivot`; a positive angle turns it counter-clockwise on screen.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transformation {
    bounds: Rect,
    angle: f64,
    pivot: PointF,
}

impl Default for Transformation {
    fn default() -> Self {
        Self::new(Rect::empty())
    }
}

impl Transformation {
    /// Unrotated transformation with the pivot at the bounds center.
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            angle: 0.0,
            pivot: bounds.center(),
        }
    }

    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    pub fn with_pivot(mut self, pivot: PointF) -> Self {
        self.pivot = pivot;
        self
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Rotation in radians
    #[inline]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Rotation in degrees
    #[inline]
    pub fn angle_degrees(&self) -> f64 {
        180.0 * self.angle / PI
    }

    #[inline]
    pub fn pivot(&self) -> PointF {
        self.pivot
    }

    /// Rotate `point` around the pivot by the transformation angle.
    pub fn rotate_point(&self, point: PointF) -> PointF {
        // Screen y grows downwards, so a counter-clockwise turn uses -angle.
        let (sin, cos) = (-self.angle).sin_cos();
        let dx = point.x - self.pivot.x;
        let dy = point.y - self.pivot.y;
        PointF::new(
            self.pivot.x + dx * cos - dy * sin,
            self.pivot.y + dx * sin + dy * cos,
        )
    }

    /// The four corners of the rotated box.
    pub fn corners(&self) -> [PointF; 4] {
        let b = self.bounds;
        let (x1, y1) = (b.x as f64, b.y as f64);
        let (x2, y2) = (b.x2() as f64, b.y2() as f64);
        [
            self.rotate_point(PointF::new(x1, y1)),
            self.rotate_point(PointF::new(x2, y1)),
            self.rotate_point(PointF::new(x2, y2)),
            self.rotate_point(PointF::new(x1, y2)),
        ]
    }
}
