//! Errors surfaced by hull construction, polygon validation and the search.

use std::fmt;

/// Degenerate or out-of-contract geometry.
#[derive(Clone, Debug, PartialEq)]
pub enum GeomError {
    /// The gift-wrapping walk did not return to its start within `points` steps
    /// (side tolerance too large for the coordinate scale, or non-finite input).
    UnclosedHull { points: usize },
    /// Fewer than three vertices, or no enclosed area.
    Degenerate { vertices: usize },
    /// Vertex `index` coincides with its successor.
    CoincidentVertices { index: usize },
    /// Some vertex lies right of the edge starting at vertex `index`, beyond tolerance.
    NotConvex { index: usize },
    /// No candidate rectangle with a finite area was found.
    NonFinite,
}

impl fmt::Display for GeomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeomError::UnclosedHull { points } => write!(
                f,
                "convex hull walk did not close within {} steps (side tolerance too large for the coordinate scale, or non-finite input)",
                points
            ),
            GeomError::Degenerate { vertices } => write!(
                f,
                "degenerate geometry: hull with {} vertices encloses no area (needs ≥3 non-collinear)",
                vertices
            ),
            GeomError::CoincidentVertices { index } => {
                write!(f, "hull vertex {} coincides with its successor", index)
            }
            GeomError::NotConvex { index } => {
                write!(f, "hull is not convex/counter-clockwise: a vertex lies right of edge {}", index)
            }
            GeomError::NonFinite => write!(f, "no finite bounding rectangle (non-finite input)"),
        }
    }
}

impl std::error::Error for GeomError {}
