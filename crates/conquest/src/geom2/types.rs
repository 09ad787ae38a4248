//! Basic 2D types and tolerances used by the hull engine.
//!
//! - `DiskPoint`: a point of the open unit disk (plain `Vector2<f64>`).
//! - `HullPolygon`: ordered CCW boundary plus the path that produced it.
//! - `EPS`: orientation/containment tolerance.
//!
//! Code cross-refs: `util::convex_hull`, `concave::concave_hull`, `area::signed_area`

use nalgebra::Vector2;

use super::area::{polygon_area, signed_area};
use super::util::point_in_polygon_eps;

/// Tolerance for orientation and containment predicates.
///
/// Disk coordinates are O(1), so an absolute value is fine.
pub const EPS: f64 = 1e-12;

/// A projected word. Produced by `embed::project_raw`; satisfies `|p| < 1`.
pub type DiskPoint = Vector2<f64>;

/// Which construction path produced a `HullPolygon`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HullKind {
    /// Fewer than three distinct points, or all collinear. Zero area.
    Degenerate,
    /// Plain convex hull (no edge was dug in).
    Convex,
    /// At least one edge was dug in.
    Concave,
    /// Digging produced an invalid polygon; the convex hull was returned instead.
    ConvexFallback,
}

/// Boundary polygon over a point set.
///
/// Invariants:
/// - Vertices are a subset of the input points, CCW, open (first not repeated).
/// - No two consecutive vertices coincide.
/// - `Degenerate` hulls hold at most two vertices (a point or a segment).
#[derive(Clone, Debug, PartialEq)]
pub struct HullPolygon {
    pub vertices: Vec<DiskPoint>,
    pub kind: HullKind,
}

impl HullPolygon {
    #[inline]
    pub fn degenerate(vertices: Vec<DiskPoint>) -> Self {
        Self {
            vertices,
            kind: HullKind::Degenerate,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.kind == HullKind::Degenerate
    }

    /// Enclosed area (absolute shoelace); 0 for degenerate hulls.
    #[inline]
    pub fn area(&self) -> f64 {
        polygon_area(&self.vertices)
    }

    /// Signed shoelace area; positive for CCW.
    #[inline]
    pub fn signed_area(&self) -> f64 {
        signed_area(&self.vertices)
    }

    /// Point membership, boundary inclusive.
    pub fn contains(&self, p: DiskPoint) -> bool {
        match self.vertices.len() {
            0 => false,
            1 => (self.vertices[0] - p).norm() <= EPS.sqrt(),
            _ => point_in_polygon_eps(&self.vertices, p, EPS.sqrt()),
        }
    }
}
