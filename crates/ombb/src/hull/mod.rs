//! Convex hulls of planar point sets.
//!
//! Output contract (shared by every `HullBuilder`)
//! - Counter-clockwise vertex order, no repeated closing vertex.
//! - Points lying on a hull edge are skipped.
//! - Inputs with fewer than 3 points are returned unchanged.
//!
//! `GiftWrap` is the default strategy; `MonotoneChain` produces the same cycle
//! (possibly starting at another vertex) and serves as a cross-check.

mod gift_wrap;
mod monotone;

pub use gift_wrap::GiftWrap;
pub use monotone::MonotoneChain;

use crate::error::GeomError;
use crate::point::Point;

/// Hull tolerances.
#[derive(Clone, Copy, Debug)]
pub struct HullCfg {
    /// Signed-area threshold below which a point counts as lying on a line.
    /// Scale it with the coordinates: lon/lat degrees need a much smaller value
    /// than pixels or projected metres.
    pub eps_side: f64,
}

impl Default for HullCfg {
    fn default() -> Self {
        Self { eps_side: 1e-5 }
    }
}

/// Strategy for building a convex hull.
pub trait HullBuilder {
    /// Hull of `points` under the module's output contract.
    fn build(&self, points: &[Point], eps: f64) -> Result<Vec<Point>, GeomError>;

    /// Short identifier used in logs.
    fn name(&self) -> &'static str;
}

/// Gift-wrapping hull with an explicit side tolerance.
pub fn convex_hull(points: &[Point], eps: f64) -> Result<Vec<Point>, GeomError> {
    GiftWrap.build(points, eps)
}

#[cfg(test)]
mod tests;
