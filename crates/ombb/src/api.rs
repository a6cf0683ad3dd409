//! Curated surface for drivers (CLI, benches, examples).
//!
//! Re-exports the pipeline types plus the fixtures and the cloud sampler so a
//! driver needs a single import path.

pub use crate::error::GeomError;
pub use crate::fixtures::{lonlat_points, pixel_points, LONLAT_BOX, PIXEL_BOX, PIXEL_HULL};
pub use crate::hull::{convex_hull, GiftWrap, HullBuilder, HullCfg, MonotoneChain};
pub use crate::obb::{min_area_box, OrientedBox};
pub use crate::pipeline::{ombb, OmbbCfg};
pub use crate::point::Point;
pub use crate::polygon::ConvexPolygon;
pub use crate::projection::{Identity, Projection, SphericalMercator};
pub use crate::sample::{draw_cloud, CloudCfg, CloudShape, PointCount, ReplayToken};

/// Hull builder by its `HullBuilder::name`.
pub fn hull_builder(name: &str) -> Option<&'static dyn HullBuilder> {
    match name {
        "gift-wrap" => Some(&GiftWrap),
        "monotone-chain" => Some(&MonotoneChain),
        _ => None,
    }
}
