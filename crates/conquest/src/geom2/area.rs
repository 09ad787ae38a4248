//! Shoelace area and score derivation.

use nalgebra::Vector2;

/// Signed shoelace area of a closed polygon (wraparound edge included).
///
/// Positive for CCW order. Returns 0 for fewer than three vertices.
pub fn signed_area(poly: &[Vector2<f64>]) -> f64 {
    let n = poly.len();
    if n < 3 {
        return 0.0;
    }
    let mut twice = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        twice += poly[i].x * poly[j].y - poly[j].x * poly[i].y;
    }
    twice / 2.0
}

/// Enclosed area; independent of winding and start vertex.
#[inline]
pub fn polygon_area(poly: &[Vector2<f64>]) -> f64 {
    signed_area(poly).abs()
}

/// `floor(area * scale)`; negative or non-finite products score 0.
#[inline]
pub fn score_from_area(area: f64, scale: f64) -> u64 {
    let raw = (area * scale).floor();
    if raw.is_finite() && raw > 0.0 {
        raw as u64
    } else {
        0
    }
}
