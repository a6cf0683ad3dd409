//! Coordinate projections applied around the hull/box computation.
//!
//! Rotating calipers assumes a locally Euclidean plane. Geographic input is
//! mapped with `forward` first and the resulting corners are mapped back with
//! `inverse`.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

use crate::point::Point;

/// Forward/inverse point mapping.
pub trait Projection {
    fn forward(&self, p: Point) -> Point;
    fn inverse(&self, p: Point) -> Point;
}

/// No-op projection (planar input).
#[derive(Clone, Copy, Debug, Default)]
pub struct Identity;

impl Projection for Identity {
    #[inline]
    fn forward(&self, p: Point) -> Point {
        p
    }
    #[inline]
    fn inverse(&self, p: Point) -> Point {
        p
    }
}

/// Spherical (web) Mercator, lon/lat degrees ↔ metres.
///
/// Forward output is clamped to `±MAX_EXTENT` on both axes, which bounds
/// latitude to about ±85.0511°.
#[derive(Clone, Copy, Debug)]
pub struct SphericalMercator {
    /// Sphere radius in metres.
    pub radius: f64,
}

impl SphericalMercator {
    pub const EARTH_RADIUS: f64 = 6_378_137.0;
    pub const MAX_EXTENT: f64 = 20_037_508.342_789_244;
}

impl Default for SphericalMercator {
    fn default() -> Self {
        Self {
            radius: Self::EARTH_RADIUS,
        }
    }
}

impl Projection for SphericalMercator {
    fn forward(&self, p: Point) -> Point {
        let x = self.radius * p.x.to_radians();
        let y = self.radius * (FRAC_PI_4 + 0.5 * p.y.to_radians()).tan().ln();
        let m = Self::MAX_EXTENT * self.radius / Self::EARTH_RADIUS;
        Point::new(x.clamp(-m, m), y.clamp(-m, m))
    }

    fn inverse(&self, p: Point) -> Point {
        let lon = (p.x / self.radius).to_degrees();
        let lat = (FRAC_PI_2 - 2.0 * (-p.y / self.radius).exp().atan()).to_degrees();
        Point::new(lon, lat)
    }
}
