//! Minimum-area oriented rectangle around a convex polygon.
//!
//! Purpose
//! - Find the rectangle of least area enclosing a `ConvexPolygon` by a
//!   rotating-calipers sweep (`calipers::sweep`), O(n) after O(n) setup.
//!
//! Why n steps suffice
//! - The optimal rectangle has a side flush with some hull edge. Each step
//!   makes exactly one caliper flush with its next edge, so n steps visit every
//!   edge once across the four calipers.

mod calipers;

use crate::error::GeomError;
use crate::point::{distance, Point};
use crate::polygon::ConvexPolygon;

/// Rectangle given by its corners in its own rotated frame:
/// upper-left, bottom-left, bottom-right, upper-right.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrientedBox {
    pub corners: [Point; 4],
}

impl OrientedBox {
    pub const UPPER_LEFT: usize = 0;
    pub const BOTTOM_LEFT: usize = 1;
    pub const BOTTOM_RIGHT: usize = 2;
    pub const UPPER_RIGHT: usize = 3;

    /// Length of the top side (upper-left → upper-right).
    #[inline]
    pub fn width(&self) -> f64 {
        distance(
            self.corners[Self::UPPER_LEFT],
            self.corners[Self::UPPER_RIGHT],
        )
    }

    /// Length of the left side (upper-left → bottom-left).
    #[inline]
    pub fn height(&self) -> f64 {
        distance(
            self.corners[Self::UPPER_LEFT],
            self.corners[Self::BOTTOM_LEFT],
        )
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    #[inline]
    pub fn center(&self) -> Point {
        (self.corners[Self::UPPER_LEFT] + self.corners[Self::BOTTOM_RIGHT]) * 0.5
    }

    /// Apply `f` to every corner (e.g. an inverse projection).
    pub fn map(&self, f: impl FnMut(Point) -> Point) -> OrientedBox {
        OrientedBox {
            corners: self.corners.map(f),
        }
    }

    /// Membership with absolute slack `eps` along both rectangle axes.
    ///
    /// Independent of the corner winding: `p` is projected onto the two side
    /// directions through the upper-left corner.
    pub fn contains_eps(&self, p: Point, eps: f64) -> bool {
        let ul = self.corners[Self::UPPER_LEFT];
        let across = self.corners[Self::UPPER_RIGHT] - ul;
        let down = self.corners[Self::BOTTOM_LEFT] - ul;
        let (w, h) = (across.norm(), down.norm());
        if w == 0.0 || h == 0.0 {
            return false;
        }
        let d = p - ul;
        let s = d.dot(&across) / w;
        let t = d.dot(&down) / h;
        (-eps..=w + eps).contains(&s) && (-eps..=h + eps).contains(&t)
    }
}

/// Minimum-area enclosing rectangle of a validated convex polygon.
pub fn min_area_box(hull: &ConvexPolygon) -> Result<OrientedBox, GeomError> {
    let best = calipers::sweep(hull).ok_or(GeomError::NonFinite)?;
    tracing::debug!(hull = hull.vertices().len(), area = best.area(), "min area box");
    Ok(best)
}
