//! Points in, oriented minimum-area box out.

use std::fmt;

use crate::error::GeomError;
use crate::hull::{GiftWrap, HullBuilder, HullCfg};
use crate::obb::{min_area_box, OrientedBox};
use crate::point::Point;
use crate::polygon::ConvexPolygon;
use crate::projection::{Identity, Projection};

/// Pipeline configuration.
///
/// `Default` uses the gift-wrapping hull, no projection and
/// `HullCfg::default().eps_side`.
#[derive(Clone, Copy)]
pub struct OmbbCfg<'a> {
    pub eps_side: f64,
    pub hull: &'a dyn HullBuilder,
    pub projection: &'a dyn Projection,
}

impl Default for OmbbCfg<'_> {
    fn default() -> Self {
        Self {
            eps_side: HullCfg::default().eps_side,
            hull: &GiftWrap,
            projection: &Identity,
        }
    }
}

impl fmt::Debug for OmbbCfg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OmbbCfg")
            .field("eps_side", &self.eps_side)
            .field("hull", &self.hull.name())
            .finish_non_exhaustive()
    }
}

/// Oriented minimum-area bounding box of `points`.
///
/// Fails with `GeomError::Degenerate` when the hull has fewer than three
/// vertices (fewer than three distinct points, or all collinear).
pub fn ombb(points: &[Point], cfg: &OmbbCfg<'_>) -> Result<OrientedBox, GeomError> {
    let projected: Vec<Point> = points.iter().map(|&p| cfg.projection.forward(p)).collect();
    let hull = cfg.hull.build(&projected, cfg.eps_side)?;
    tracing::debug!(
        builder = cfg.hull.name(),
        points = points.len(),
        hull = hull.len(),
        "hull built"
    );
    let poly = ConvexPolygon::from_ccw(hull, cfg.eps_side)?;
    let obb = min_area_box(&poly)?;
    Ok(obb.map(|c| cfg.projection.inverse(c)))
}
