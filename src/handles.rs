//! Transform handles drawn around a floating selection.
//!
//! Eight handles sit on the corners and edge midpoints of the (possibly
//! rotated) selection box. Grabbing one scales; grabbing just outside it
//! rotates. A rotated selection also exposes its pivot.
//!
//! ## Hit Testing
//!
//! ```text
//!   rotate    rotate    rotate
//!      +--[NW]---[N]---[NE]--+
//!      |                     |
//!     [W]       move        [E]
//!      |                     |
//!      +--[SW]---[S]---[SE]--+
//! ```
//!
//! Scale boxes (`2 * size`) are centered on each handle and tested first.
//! Rotate boxes (`3 * size`) are pushed outward along the handle direction,
//! so they only win where the scale boxes do not reach.

use crate::constants::{
    DEFAULT_HANDLE_SIZE, MAX_HANDLE_SIZE, ROTATE_HIT_FACTOR, SCALE_HIT_FACTOR,
};
use crate::editor::Editor;
use crate::geometry::{corner, Point, PointF, Rect, Transformation};
use crate::input::coords::{CoordinateContext, CoordinateConverter};
use crate::profile_scope;
use serde::{Deserialize, Serialize};

/// The transform control a gesture manipulates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Handle {
    /// Drag the whole selection
    Move,
    ScaleNW,
    ScaleN,
    ScaleNE,
    ScaleW,
    ScaleE,
    ScaleSW,
    ScaleS,
    ScaleSE,
    RotateNW,
    RotateN,
    RotateNE,
    RotateW,
    RotateE,
    RotateSW,
    RotateS,
    RotateSE,
    /// Move the rotation pivot
    Pivot,
}

/// Placement of one handle: between corners `i1` and `i2`, facing
/// `direction` degrees (counter-clockwise from east) on an unrotated box.
struct HandleInfo {
    i1: usize,
    i2: usize,
    direction: f64,
    scale: Handle,
    rotate: Handle,
}

const HANDLES: [HandleInfo; 8] = [
    HandleInfo { i1: corner::RIGHT_TOP, i2: corner::RIGHT_BOTTOM, direction: 0.0, scale: Handle::ScaleE, rotate: Handle::RotateE },
    HandleInfo { i1: corner::RIGHT_TOP, i2: corner::RIGHT_TOP, direction: 45.0, scale: Handle::ScaleNE, rotate: Handle::RotateNE },
    HandleInfo { i1: corner::LEFT_TOP, i2: corner::RIGHT_TOP, direction: 90.0, scale: Handle::ScaleN, rotate: Handle::RotateN },
    HandleInfo { i1: corner::LEFT_TOP, i2: corner::LEFT_TOP, direction: 135.0, scale: Handle::ScaleNW, rotate: Handle::RotateNW },
    HandleInfo { i1: corner::LEFT_TOP, i2: corner::LEFT_BOTTOM, direction: 180.0, scale: Handle::ScaleW, rotate: Handle::RotateW },
    HandleInfo { i1: corner::LEFT_BOTTOM, i2: corner::LEFT_BOTTOM, direction: 225.0, scale: Handle::ScaleSW, rotate: Handle::RotateSW },
    HandleInfo { i1: corner::LEFT_BOTTOM, i2: corner::RIGHT_BOTTOM, direction: 270.0, scale: Handle::ScaleS, rotate: Handle::RotateS },
    HandleInfo { i1: corner::RIGHT_BOTTOM, i2: corner::RIGHT_BOTTOM, direction: 315.0, scale: Handle::ScaleSE, rotate: Handle::RotateSE },
];

/// Handle geometry of an editor decorator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformHandles {
    /// Edge length of a handle graphic in screen pixels
    size: i32,
}

impl Default for TransformHandles {
    fn default() -> Self {
        Self::new(DEFAULT_HANDLE_SIZE)
    }
}

impl TransformHandles {
    /// Sizes outside `1..=MAX_HANDLE_SIZE` are clamped.
    pub fn new(size: i32) -> Self {
        Self {
            size: size.clamp(1, MAX_HANDLE_SIZE),
        }
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    /// Handle under screen point `pt` for a selection transformed by `transform`.
    pub fn handle_at_point(
        &self,
        editor: &dyn Editor,
        pt: Point,
        transform: &Transformation,
    ) -> Option<Handle> {
        self.hit_test(pt, transform, |p| editor.editor_to_screen(p))
    }

    /// Same as [`Self::handle_at_point`] with an explicit viewport.
    pub fn handle_at_point_in(
        &self,
        ctx: &CoordinateContext,
        pt: Point,
        transform: &Transformation,
    ) -> Option<Handle> {
        self.hit_test(pt, transform, |p| CoordinateConverter::canvas_to_screen(p, ctx))
    }

    fn hit_test(
        &self,
        pt: Point,
        transform: &Transformation,
        to_screen: impl Fn(PointF) -> PointF,
    ) -> Option<Handle> {
        profile_scope!("handle_hit_test");

        let corners = transform.corners().map(&to_screen);
        let angle = transform.angle_degrees();

        for (factor, rotate) in [(SCALE_HIT_FACTOR, false), (ROTATE_HIT_FACTOR, true)] {
            let hit_size = self.size.saturating_mul(factor);
            for info in &HANDLES {
                let mut center = PointF::midpoint(corners[info.i1], corners[info.i2]);
                if rotate {
                    let (sin, cos) = (angle + info.direction).to_radians().sin_cos();
                    let push = hit_size as f64 / 2.0;
                    center.x += cos * push;
                    center.y -= sin * push;
                }
                if Rect::centered(center.round(), hit_size).contains(pt) {
                    return Some(if rotate { info.rotate } else { info.scale });
                }
            }
        }

        if transform.angle() != 0.0 {
            let pivot = to_screen(transform.pivot()).round();
            if Rect::centered(pivot, self.size.saturating_mul(SCALE_HIT_FACTOR)).contains(pt) {
                return Some(Handle::Pivot);
            }
        }

        None
    }
}
