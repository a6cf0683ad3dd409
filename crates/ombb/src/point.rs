//! 2D vector primitives on top of `nalgebra::Vector2<f64>`.
//!
//! nalgebra already provides add/sub, scalar multiply, `dot`, `norm`,
//! `normalize` and negation. This module adds the handful of planar helpers
//! the hull and calipers code needs.

use nalgebra::Vector2;

/// A point (or direction) in the plane.
pub type Point = Vector2<f64>;

/// Position of a point relative to a directed line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
    On,
}

/// Scalar 2D cross product `a.x b.y - a.y b.x`.
#[inline]
pub fn cross(a: Point, b: Point) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Rotation by 90° clockwise: `(x, y) ↦ (y, -x)`.
#[inline]
pub fn orthogonal(p: Point) -> Point {
    Point::new(p.y, -p.x)
}

#[inline]
pub fn distance(a: Point, b: Point) -> f64 {
    (a - b).norm()
}

/// Classify `p` against the directed line `start → end`.
///
/// The signed area is compared against `±eps`; anything in between is `On`.
#[inline]
pub fn side_of_line(start: Point, end: Point, p: Point, eps: f64) -> Side {
    let d = (end.x - start.x) * (p.y - start.y) - (end.y - start.y) * (p.x - start.x);
    if d > eps {
        Side::Left
    } else if d < -eps {
        Side::Right
    } else {
        Side::On
    }
}

/// Intersection of the lines `start0 + s dir0` and `start1 + t dir1`.
///
/// Pre: the lines are not parallel (`cross(dir0, dir1) != 0`).
#[inline]
pub fn intersect_lines(start0: Point, dir0: Point, start1: Point, dir1: Point) -> Point {
    let dd = cross(dir0, dir1);
    let t = cross(start1 - start0, dir1) / dd;
    start0 + dir0 * t
}

/// Per-coordinate absolute comparison, `|a_i - b_i| <= delta`.
#[inline]
pub fn almost_eq(a: Point, b: Point, delta: f64) -> bool {
    (a.x - b.x).abs() <= delta && (a.y - b.y).abs() <= delta
}
