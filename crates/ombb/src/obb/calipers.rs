//! Rotating-calipers sweep.
//!
//! Four mutually perpendicular supporting lines (left, right, top, bottom)
//! start axis-aligned at the extreme vertices. Each step rotates the whole
//! frame by the smallest angle that makes one caliper flush with the hull
//! edge leaving its vertex, then rebuilds the rectangle by line intersection.

use crate::point::{cross, intersect_lines, orthogonal, Point};
use crate::polygon::ConvexPolygon;

use super::OrientedBox;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Caliper {
    Left,
    Right,
    Top,
    Bottom,
}

const CALIPERS: [Caliper; 4] = [Caliper::Left, Caliper::Right, Caliper::Top, Caliper::Bottom];

/// Caliper directions and supported vertex indices.
#[derive(Clone, Copy, Debug)]
struct Frame {
    dir: [Point; 4],
    idx: [usize; 4],
}

impl Frame {
    fn axis_aligned(idx: [usize; 4]) -> Self {
        Self {
            dir: [
                Point::new(0.0, -1.0),
                Point::new(0.0, 1.0),
                Point::new(-1.0, 0.0),
                Point::new(1.0, 0.0),
            ],
            idx,
        }
    }

    /// Realign caliper `c` to `edge` and derive the other three directions.
    fn realign(&mut self, c: Caliper, edge: Point) {
        let (left, top) = match c {
            Caliper::Left => (edge, orthogonal(edge)),
            Caliper::Right => (-edge, orthogonal(-edge)),
            Caliper::Top => (orthogonal(-edge), edge),
            Caliper::Bottom => (orthogonal(edge), -edge),
        };
        self.dir = [left, -left, top, -top];
    }
}

/// Leftmost, rightmost, topmost, bottommost vertex indices (first occurrence wins).
fn extremes(vertices: &[Point]) -> [usize; 4] {
    let mut min = Point::new(f64::MAX, f64::MAX);
    let mut max = Point::new(-f64::MAX, -f64::MAX);
    let mut idx = [0usize; 4];
    for (i, p) in vertices.iter().enumerate() {
        if p.x < min.x {
            min.x = p.x;
            idx[0] = i;
        }
        if p.x > max.x {
            max.x = p.x;
            idx[1] = i;
        }
        if p.y > max.y {
            max.y = p.y;
            idx[2] = i;
        }
        if p.y < min.y {
            min.y = p.y;
            idx[3] = i;
        }
    }
    idx
}

/// Angle between two unit vectors; the dot product is clamped so rounding
/// overshoot past ±1 cannot turn into NaN.
#[inline]
fn angle_between(a: Point, b: Point) -> f64 {
    a.dot(&b).clamp(-1.0, 1.0).acos()
}

fn rectangle(hull: &[Point], f: &Frame) -> OrientedBox {
    let [left, right, top, bottom] = f.dir;
    let [il, ir, it, ib] = f.idx;
    debug_assert!(cross(left, top) != 0.0, "adjacent calipers must not be parallel");
    let upper_left = intersect_lines(hull[il], left, hull[it], top);
    let upper_right = intersect_lines(hull[ir], right, hull[it], top);
    let bottom_left = intersect_lines(hull[ib], bottom, hull[il], left);
    let bottom_right = intersect_lines(hull[ib], bottom, hull[ir], right);
    OrientedBox {
        corners: [upper_left, bottom_left, bottom_right, upper_right],
    }
}

/// Best rectangle over the n caliper positions; `None` if every candidate
/// area was non-finite.
pub(super) fn sweep(hull: &ConvexPolygon) -> Option<OrientedBox> {
    let vertices = hull.vertices();
    let n = vertices.len();
    let edge_dirs = hull.edge_dirs();
    let mut frame = Frame::axis_aligned(extremes(vertices));

    let mut best: Option<(OrientedBox, f64)> = None;
    for step in 0..n {
        let mut turn = Caliper::Left;
        let mut min_phi = f64::MAX;
        for (k, &c) in CALIPERS.iter().enumerate() {
            let phi = angle_between(frame.dir[k], edge_dirs[frame.idx[k]]);
            if phi < min_phi {
                min_phi = phi;
                turn = c;
            }
        }

        let k = turn as usize;
        frame.realign(turn, edge_dirs[frame.idx[k]]);
        frame.idx[k] = (frame.idx[k] + 1) % n;

        let candidate = rectangle(vertices, &frame);
        let area = candidate.area();
        tracing::trace!(step, caliper = ?turn, phi = min_phi, area, "caliper step");
        if best.as_ref().map_or(area.is_finite(), |(_, a)| area < *a) {
            best = Some((candidate, area));
        }
    }
    best.map(|(b, _)| b)
}
