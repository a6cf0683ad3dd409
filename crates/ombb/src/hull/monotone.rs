use std::cmp::Ordering;

use crate::error::GeomError;
use crate::point::{side_of_line, Point, Side};

use super::HullBuilder;

/// Andrew's monotone chain, O(n log n). Starts at the lowest-leftmost point.
#[derive(Clone, Copy, Debug, Default)]
pub struct MonotoneChain;

impl HullBuilder for MonotoneChain {
    fn build(&self, points: &[Point], eps: f64) -> Result<Vec<Point>, GeomError> {
        if points.len() < 3 {
            return Ok(points.to_vec());
        }
        if points.iter().any(|p| !(p.x.is_finite() && p.y.is_finite())) {
            return Err(GeomError::NonFinite);
        }
        let mut pts: Vec<Point> = points.to_vec();
        pts.sort_by(|a, b| match a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal) {
            Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal),
            o => o,
        });
        pts.dedup();
        if pts.len() < 3 {
            return Ok(pts);
        }

        let mut lower: Vec<Point> = Vec::with_capacity(pts.len());
        for p in &pts {
            push_left_turn(&mut lower, *p, eps);
        }
        let mut upper: Vec<Point> = Vec::with_capacity(pts.len());
        for p in pts.iter().rev() {
            push_left_turn(&mut upper, *p, eps);
        }
        lower.pop();
        upper.pop();
        let mut hull = lower;
        hull.extend(upper);
        tracing::debug!(points = points.len(), hull = hull.len(), "monotone chain");
        Ok(hull)
    }

    fn name(&self) -> &'static str {
        "monotone-chain"
    }
}

/// Pop every tail vertex that would not make a strict left turn towards `p`.
fn push_left_turn(chain: &mut Vec<Point>, p: Point, eps: f64) {
    while chain.len() >= 2
        && side_of_line(chain[chain.len() - 2], chain[chain.len() - 1], p, eps) != Side::Left
    {
        chain.pop();
    }
    chain.push(p);
}
