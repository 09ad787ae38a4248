//! Concave hull by edge digging.
//!
//! Purpose
//! - Produce a boundary tighter than the convex hull whose vertices are input
//!   points, with one knob (`concavity`) trading tightness for smoothness.
//!
//! Model
//! - Start from the CCW convex hull. Every boundary edge at least `concavity`
//!   long may be "dug in": an inner point `p` is spliced between its endpoints,
//!   replacing `a → b` by `a → p → b`. Passes repeat until nothing moves.
//! - `p` qualifies for edge `(a, b)` when
//!   1. it lies strictly left of `a → b` (interior side),
//!   2. both base angles at `a` and `b` are acute,
//!   3. `(a, b)` is its nearest boundary edge,
//!   4. the new edges do not touch the current boundary,
//!   5. the triangle `(a, p, b)` it carves off holds no other point.
//!   Among qualifying points the one nearest the edge wins.
//! - Condition 5 keeps every input point enclosed; 4 keeps the boundary simple.
//!   The result is still validated and replaced by the convex hull if either
//!   property fails (`HullKind::ConvexFallback`).
//!
//! Assumptions and conventions
//! - Input is deduplicated and sorted first, so the output depends only on the
//!   point set, never on insertion order.
//! - A non-finite or non-positive `concavity` disables digging.
//! - Cost is O(n³) worst case; point counts per game are small.
//!
//! Code cross-refs: `util::{convex_hull_sorted, segments_intersect}`, `HullPolygon`

use super::area::signed_area;
use super::types::{DiskPoint, HullKind, HullPolygon, EPS};
use super::util::{
    convex_hull_sorted, cross, dist_sq_to_segment, is_simple, point_in_polygon_eps,
    segments_intersect, sorted_unique,
};

/// Concave hull of `points` (any order, duplicates allowed).
///
/// Fewer than three distinct points, or a collinear set, yield a `Degenerate`
/// hull holding the distinct extremes (zero area).
pub fn concave_hull(points: &[DiskPoint], concavity: f64) -> HullPolygon {
    let pts = sorted_unique(points);
    let convex = convex_hull_sorted(&pts);
    if convex.len() < 3 {
        return HullPolygon::degenerate(convex);
    }
    let max_sq_edge = if concavity.is_finite() && concavity > 0.0 {
        concavity * concavity
    } else {
        f64::INFINITY
    };
    let mut inner: Vec<DiskPoint> = pts
        .iter()
        .copied()
        .filter(|p| !convex.contains(p))
        .collect();
    if inner.is_empty() || max_sq_edge.is_infinite() {
        return HullPolygon {
            vertices: convex,
            kind: HullKind::Convex,
        };
    }

    let mut boundary = convex.clone();
    if dig(&mut boundary, &mut inner, max_sq_edge) == 0 {
        return HullPolygon {
            vertices: convex,
            kind: HullKind::Convex,
        };
    }
    validated(boundary, convex, &pts)
}

/// Keep `boundary` if it is CCW, simple and encloses every point of `pts`;
/// otherwise return `convex` as `ConvexFallback`.
pub(super) fn validated(
    boundary: Vec<DiskPoint>,
    convex: Vec<DiskPoint>,
    pts: &[DiskPoint],
) -> HullPolygon {
    if is_valid(&boundary, pts) {
        return HullPolygon {
            vertices: boundary,
            kind: HullKind::Concave,
        };
    }
    tracing::debug!(
        points = pts.len(),
        boundary = boundary.len(),
        "concave hull invalid, falling back to convex"
    );
    HullPolygon {
        vertices: convex,
        kind: HullKind::ConvexFallback,
    }
}

/// Convex hull wrapped as a `HullPolygon` (`Degenerate` below three corners).
pub fn convex_hull_polygon(points: &[DiskPoint]) -> HullPolygon {
    let convex = convex_hull_sorted(&sorted_unique(points));
    if convex.len() < 3 {
        HullPolygon::degenerate(convex)
    } else {
        HullPolygon {
            vertices: convex,
            kind: HullKind::Convex,
        }
    }
}

/// Splice inner points into long edges until a full pass changes nothing.
fn dig(boundary: &mut Vec<DiskPoint>, inner: &mut Vec<DiskPoint>, max_sq_edge: f64) -> usize {
    let mut dug = 0usize;
    loop {
        let mut inserted = false;
        let mut i = 0usize;
        while i < boundary.len() && !inner.is_empty() {
            let a = boundary[i];
            let b = boundary[(i + 1) % boundary.len()];
            if (b - a).norm_squared() >= max_sq_edge {
                if let Some(k) = pick_candidate(boundary, i, inner) {
                    let p = inner.remove(k);
                    // Wraparound edge: inserting at len appends p between a and boundary[0].
                    boundary.insert(i + 1, p);
                    dug += 1;
                    inserted = true;
                    // Revisit (a, p) before moving on.
                    continue;
                }
            }
            i += 1;
        }
        if !inserted {
            break;
        }
    }
    dug
}

fn pick_candidate(boundary: &[DiskPoint], i: usize, inner: &[DiskPoint]) -> Option<usize> {
    let n = boundary.len();
    let a = boundary[i];
    let b = boundary[(i + 1) % n];
    let mut best: Option<(usize, f64)> = None;
    for (k, &p) in inner.iter().enumerate() {
        if cross(a, b, p) <= EPS {
            continue;
        }
        // Acute base angles: p projects onto the open edge.
        if (b - a).dot(&(p - a)) <= 0.0 || (a - b).dot(&(p - b)) <= 0.0 {
            continue;
        }
        let d = dist_sq_to_segment(p, a, b);
        if matches!(best, Some((_, bd)) if d >= bd) {
            continue;
        }
        if !nearest_edge_is(boundary, i, p, d) {
            continue;
        }
        if touches_boundary(boundary, a, p) || touches_boundary(boundary, p, b) {
            continue;
        }
        if carves_off_points(boundary, inner, i, k, p) {
            continue;
        }
        best = Some((k, d));
    }
    best.map(|(k, _)| k)
}

fn nearest_edge_is(boundary: &[DiskPoint], i: usize, p: DiskPoint, d: f64) -> bool {
    let n = boundary.len();
    (0..n)
        .filter(|&m| m != i)
        .all(|m| dist_sq_to_segment(p, boundary[m], boundary[(m + 1) % n]) + EPS >= d)
}

fn touches_boundary(boundary: &[DiskPoint], s: DiskPoint, t: DiskPoint) -> bool {
    let n = boundary.len();
    (0..n).any(|m| segments_intersect(s, t, boundary[m], boundary[(m + 1) % n]))
}

/// Would splicing `p` into edge `i` leave another point outside (closed triangle test)?
fn carves_off_points(
    boundary: &[DiskPoint],
    inner: &[DiskPoint],
    i: usize,
    k: usize,
    p: DiskPoint,
) -> bool {
    let n = boundary.len();
    let j = (i + 1) % n;
    let (a, b) = (boundary[i], boundary[j]);
    let inner_hit = inner
        .iter()
        .enumerate()
        .any(|(m, &r)| m != k && in_closed_triangle(r, a, p, b));
    let boundary_hit = boundary
        .iter()
        .enumerate()
        .any(|(m, &v)| m != i && m != j && in_closed_triangle(v, a, p, b));
    inner_hit || boundary_hit
}

#[inline]
fn in_closed_triangle(r: DiskPoint, a: DiskPoint, b: DiskPoint, c: DiskPoint) -> bool {
    let d1 = cross(a, b, r);
    let d2 = cross(b, c, r);
    let d3 = cross(c, a, r);
    (d1 >= -EPS && d2 >= -EPS && d3 >= -EPS) || (d1 <= EPS && d2 <= EPS && d3 <= EPS)
}

fn is_valid(boundary: &[DiskPoint], pts: &[DiskPoint]) -> bool {
    signed_area(boundary) > 0.0
        && is_simple(boundary)
        && pts
            .iter()
            .all(|p| point_in_polygon_eps(boundary, *p, EPS.sqrt()))
}
