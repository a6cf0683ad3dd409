//! Validated convex polygon (counter-clockwise vertex list).
//!
//! Invariants (checked by `ConvexPolygon::from_ccw`):
//! - At least 3 vertices, all finite.
//! - No vertex coincides with its successor (closing edge included).
//! - Every vertex lies left of or "on" (within `eps`) every edge; signed area
//!   is positive.
//!
//! The edge test is global (O(n²)): self-intersecting cycles such as a
//! pentagram have only left turns and still fail it.

use crate::error::GeomError;
use crate::point::{cross, side_of_line, Point, Side};

#[derive(Clone, Debug, PartialEq)]
pub struct ConvexPolygon {
    vertices: Vec<Point>,
}

impl ConvexPolygon {
    /// Validate a counter-clockwise vertex list.
    pub fn from_ccw(vertices: Vec<Point>, eps: f64) -> Result<Self, GeomError> {
        let n = vertices.len();
        if n < 3 {
            return Err(GeomError::Degenerate { vertices: n });
        }
        if vertices.iter().any(|p| !(p.x.is_finite() && p.y.is_finite())) {
            return Err(GeomError::NonFinite);
        }
        for i in 0..n {
            if vertices[i] == vertices[(i + 1) % n] {
                return Err(GeomError::CoincidentVertices { index: i });
            }
        }
        for i in 0..n {
            let (a, b) = (vertices[i], vertices[(i + 1) % n]);
            let outside = (0..n)
                .filter(|&j| j != i && j != (i + 1) % n)
                .any(|j| side_of_line(a, b, vertices[j], eps) == Side::Right);
            if outside {
                return Err(GeomError::NotConvex { index: i });
            }
        }
        let poly = Self { vertices };
        if poly.signed_area() <= 0.0 {
            return Err(GeomError::Degenerate { vertices: n });
        }
        Ok(poly)
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Shoelace area, positive for counter-clockwise order.
    pub fn signed_area(&self) -> f64 {
        let n = self.vertices.len();
        let twice: f64 = (0..n)
            .map(|i| cross(self.vertices[i], self.vertices[(i + 1) % n]))
            .sum();
        0.5 * twice
    }

    /// Unit direction of edge `i → i+1` for every vertex `i`.
    pub fn edge_dirs(&self) -> Vec<Point> {
        let n = self.vertices.len();
        (0..n)
            .map(|i| (self.vertices[(i + 1) % n] - self.vertices[i]).normalize())
            .collect()
    }

    /// Membership with slack: `p` may lie up to `eps` (signed area) right of an edge.
    pub fn contains_eps(&self, p: Point, eps: f64) -> bool {
        let n = self.vertices.len();
        (0..n).all(|i| {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];
            side_of_line(a, b, p, eps) != Side::Right
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn unit_square() -> Vec<Point> {
        vec![
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![1.0, 1.0],
            vector![0.0, 1.0],
        ]
    }

    #[test]
    fn accepts_ccw_square() {
        let p = ConvexPolygon::from_ccw(unit_square(), 1e-9).unwrap();
        assert_eq!(p.vertices().len(), 4);
        assert!((p.signed_area() - 1.0).abs() < 1e-12);
        assert!(p.contains_eps(vector![0.5, 0.5], 1e-9));
        assert!(p.contains_eps(vector![1.0, 0.5], 1e-9));
        assert!(!p.contains_eps(vector![1.1, 0.5], 1e-9));
        let dirs = p.edge_dirs();
        assert_eq!(dirs[0], vector![1.0, 0.0]);
        assert_eq!(dirs[3], vector![0.0, -1.0]);
    }

    #[test]
    fn rejects_degenerate_inputs() {
        let two = vec![vector![0.0, 0.0], vector![1.0, 0.0]];
        assert_eq!(
            ConvexPolygon::from_ccw(two, 1e-9),
            Err(GeomError::Degenerate { vertices: 2 })
        );

        let mut cw = unit_square();
        cw.reverse();
        assert!(matches!(
            ConvexPolygon::from_ccw(cw, 1e-9),
            Err(GeomError::NotConvex { .. })
        ));

        let mut dup = unit_square();
        dup.push(vector![0.0, 0.0]);
        assert_eq!(
            ConvexPolygon::from_ccw(dup, 1e-9),
            Err(GeomError::CoincidentVertices { index: 4 })
        );

        let flat = vec![vector![0.0, 0.0], vector![1.0, 0.0], vector![2.0, 0.0]];
        assert!(ConvexPolygon::from_ccw(flat, 1e-9).is_err());

        let nan = vec![vector![0.0, 0.0], vector![f64::NAN, 0.0], vector![0.0, 1.0]];
        assert_eq!(ConvexPolygon::from_ccw(nan, 1e-9), Err(GeomError::NonFinite));
    }

    #[test]
    fn rejects_pentagram_with_only_left_turns() {
        let star: Vec<Point> = (0..5)
            .map(|k| {
                let t = (90.0 + 144.0 * k as f64).to_radians();
                vector![t.cos(), t.sin()]
            })
            .collect();
        // every local turn is left and the shoelace area is positive
        for i in 0..5 {
            let turn = side_of_line(star[(i + 4) % 5], star[i], star[(i + 1) % 5], 1e-9);
            assert_eq!(turn, Side::Left);
        }
        let area: f64 = (0..5).map(|i| cross(star[i], star[(i + 1) % 5])).sum();
        assert!(area > 0.0);
        assert!(matches!(
            ConvexPolygon::from_ccw(star, 1e-9),
            Err(GeomError::NotConvex { .. })
        ));
    }

    #[test]
    fn collinear_boundary_vertex_is_accepted() {
        let mut sq = unit_square();
        sq.insert(1, vector![0.5, 0.0]);
        let p = ConvexPolygon::from_ccw(sq, 1e-9).unwrap();
        assert_eq!(p.vertices().len(), 5);
    }
}
