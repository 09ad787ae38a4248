use std::cmp::Ordering;

use nalgebra::Vector2;

use super::types::EPS;

/// Orientation of `c` relative to the directed line `a → b` (twice the signed triangle area).
#[inline]
pub(crate) fn cross(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

#[inline]
fn lex_cmp(a: &Vector2<f64>, b: &Vector2<f64>) -> Ordering {
    match a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal),
        o => o,
    }
}

/// Sort by (x, y) and drop exact duplicates.
pub(crate) fn sorted_unique(points: &[Vector2<f64>]) -> Vec<Vector2<f64>> {
    let mut pts: Vec<_> = points.to_vec();
    pts.sort_by(lex_cmp);
    pts.dedup();
    pts
}

/// Andrew’s monotone chain convex hull over sorted, unique points (CCW, collinear dropped).
///
/// Returns fewer than three vertices when the input is a point or all collinear.
pub(crate) fn convex_hull_sorted(pts: &[Vector2<f64>]) -> Vec<Vector2<f64>> {
    if pts.len() < 3 {
        return pts.to_vec();
    }
    let mut lower: Vec<Vector2<f64>> = Vec::with_capacity(pts.len());
    for p in pts {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], *p) <= EPS {
            lower.pop();
        }
        lower.push(*p);
    }
    let mut upper: Vec<Vector2<f64>> = Vec::with_capacity(pts.len());
    for p in pts.iter().rev() {
        while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], *p) <= EPS {
            upper.pop();
        }
        upper.push(*p);
    }
    lower.pop();
    upper.pop();
    let mut hull = lower;
    // All collinear: lower and upper collapse onto the two extremes.
    hull.extend(upper);
    hull
}

/// Convex hull of an arbitrary point slice (CCW, open).
pub fn convex_hull(points: &[Vector2<f64>]) -> Vec<Vector2<f64>> {
    convex_hull_sorted(&sorted_unique(points))
}

/// Squared distance from `p` to the closed segment `[a, b]`.
pub(crate) fn dist_sq_to_segment(p: Vector2<f64>, a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    let ab = b - a;
    let len_sq = ab.norm_squared();
    if len_sq <= 0.0 {
        return (p - a).norm_squared();
    }
    let t = ((p - a).dot(&ab) / len_sq).clamp(0.0, 1.0);
    (p - (a + ab * t)).norm_squared()
}

/// True if the open segments `(p1, p2)` and `(q1, q2)` cross or touch away from shared endpoints.
///
/// Segments that share an endpoint only intersect if they overlap collinearly.
pub(crate) fn segments_intersect(
    p1: Vector2<f64>,
    p2: Vector2<f64>,
    q1: Vector2<f64>,
    q2: Vector2<f64>,
) -> bool {
    let shared = p1 == q1 || p1 == q2 || p2 == q1 || p2 == q2;
    let d1 = cross(q1, q2, p1);
    let d2 = cross(q1, q2, p2);
    let d3 = cross(p1, p2, q1);
    let d4 = cross(p1, p2, q2);
    if shared {
        // Only a collinear overlap counts when an endpoint is shared.
        if d1.abs() > EPS || d2.abs() > EPS || d3.abs() > EPS || d4.abs() > EPS {
            return false;
        }
        let (s, o1, o2) = if p1 == q1 {
            (p1, p2, q2)
        } else if p1 == q2 {
            (p1, p2, q1)
        } else if p2 == q1 {
            (p2, p1, q2)
        } else {
            (p2, p1, q1)
        };
        return (o1 - s).dot(&(o2 - s)) > 0.0;
    }
    if ((d1 > EPS && d2 < -EPS) || (d1 < -EPS && d2 > EPS))
        && ((d3 > EPS && d4 < -EPS) || (d3 < -EPS && d4 > EPS))
    {
        return true;
    }
    on_segment(q1, q2, p1, d1)
        || on_segment(q1, q2, p2, d2)
        || on_segment(p1, p2, q1, d3)
        || on_segment(p1, p2, q2, d4)
}

#[inline]
fn on_segment(a: Vector2<f64>, b: Vector2<f64>, p: Vector2<f64>, orient: f64) -> bool {
    orient.abs() <= EPS
        && p.x >= a.x.min(b.x) - EPS
        && p.x <= a.x.max(b.x) + EPS
        && p.y >= a.y.min(b.y) - EPS
        && p.y <= a.y.max(b.y) + EPS
}

/// Point-in-polygon by ray casting; points within `tol` of the boundary count as inside.
pub(crate) fn point_in_polygon_eps(poly: &[Vector2<f64>], p: Vector2<f64>, tol: f64) -> bool {
    let n = poly.len();
    if n == 0 {
        return false;
    }
    let tol_sq = tol * tol;
    for k in 0..n {
        if dist_sq_to_segment(p, poly[k], poly[(k + 1) % n]) <= tol_sq {
            return true;
        }
    }
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (a, b) = (poly[i], poly[j]);
        if (a.y > p.y) != (b.y > p.y) {
            let x_at = (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x;
            if p.x < x_at {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Simple-polygon check: no repeated vertices, no two non-adjacent edges intersect.
pub(crate) fn is_simple(poly: &[Vector2<f64>]) -> bool {
    let n = poly.len();
    if n < 3 {
        return false;
    }
    if sorted_unique(poly).len() != n {
        return false;
    }
    // Adjacent edges share a vertex; `segments_intersect` then only flags a collinear fold.
    for i in 0..n {
        let (a1, a2) = (poly[i], poly[(i + 1) % n]);
        for j in (i + 1)..n {
            let (b1, b2) = (poly[j], poly[(j + 1) % n]);
            if segments_intersect(a1, a2, b1, b2) {
                return false;
            }
        }
    }
    true
}
