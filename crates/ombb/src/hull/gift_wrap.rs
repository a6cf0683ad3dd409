use crate::error::GeomError;
use crate::point::{distance, side_of_line, Point, Side};

use super::HullBuilder;

/// Jarvis march, O(n·h).
///
/// The walk starts at the lowest-leftmost point and always keeps the
/// candidate with no point to its left; on ties along the current line the
/// farther point wins, so vertices in the middle of an edge are skipped.
/// The walk runs clockwise and is reversed on return.
#[derive(Clone, Copy, Debug, Default)]
pub struct GiftWrap;

impl HullBuilder for GiftWrap {
    fn build(&self, points: &[Point], eps: f64) -> Result<Vec<Point>, GeomError> {
        if points.len() < 3 {
            return Ok(points.to_vec());
        }
        let n = points.len();
        let start = lowest_leftmost(points);

        let mut hull: Vec<Point> = Vec::new();
        let mut current = start;
        loop {
            // A closed walk visits each distinct point at most once.
            if hull.len() >= n {
                tracing::debug!(points = n, "gift wrap did not close");
                return Err(GeomError::UnclosedHull { points: n });
            }
            hull.push(current);

            let mut next = points[0];
            for &p in &points[1..] {
                let replace = next == current
                    || match side_of_line(current, next, p, eps) {
                        Side::Left => true,
                        Side::On => distance(current, p) > distance(current, next),
                        Side::Right => false,
                    };
                if replace {
                    next = p;
                }
            }

            current = next;
            if next == hull[0] {
                break;
            }
        }

        hull.reverse();
        tracing::debug!(points = n, hull = hull.len(), "gift wrap");
        Ok(hull)
    }

    fn name(&self) -> &'static str {
        "gift-wrap"
    }
}

/// Minimum x, ties by minimum y; the first occurrence wins on exact ties.
fn lowest_leftmost(points: &[Point]) -> Point {
    let mut best = points[0];
    for &p in points {
        if p.x < best.x || (p.x == best.x && p.y < best.y) {
            best = p;
        }
    }
    best
}
