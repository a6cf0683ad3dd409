//! Oriented minimum-area bounding boxes of planar point sets.
//!
//! Pipeline
//! - points → (forward projection) → convex hull → `ConvexPolygon`
//!   → rotating-calipers search → 4 corners → (inverse projection).
//!
//! Conventions
//! - Points are `nalgebra::Vector2<f64>` (alias `Point`).
//! - Hulls are counter-clockwise without a repeated closing vertex.
//! - Tolerances are explicit parameters; defaults live in `HullCfg`/`OmbbCfg`
//!   and are only applied at the outer entry points.

pub mod api;
pub mod error;
pub mod fixtures;
pub mod hull;
pub mod obb;
pub mod pipeline;
pub mod point;
pub mod polygon;
pub mod projection;
pub mod sample;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::GeomError;
pub use hull::{convex_hull, GiftWrap, HullBuilder, HullCfg, MonotoneChain};
pub use obb::{min_area_box, OrientedBox};
pub use pipeline::{ombb, OmbbCfg};
pub use point::{Point, Side};
pub use polygon::ConvexPolygon;
pub use projection::{Identity, Projection, SphericalMercator};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::hull::{convex_hull, GiftWrap, HullBuilder, HullCfg, MonotoneChain};
    pub use crate::obb::{min_area_box, OrientedBox};
    pub use crate::pipeline::{ombb, OmbbCfg};
    pub use crate::point::{almost_eq, cross, orthogonal, Point, Side};
    pub use crate::polygon::ConvexPolygon;
    pub use crate::projection::{Identity, Projection, SphericalMercator};
    pub use crate::GeomError;
    pub use nalgebra::Vector2 as Vec2;
}
