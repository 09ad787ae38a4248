//! 2D geometry for scoring: convex and concave hulls plus shoelace area.
//!
//! Purpose
//! - Turn the accumulated disk points into a simple boundary polygon and an
//!   area, with every function total on finite input.
//!
//! Why this shape
//! - Points are plain `nalgebra::Vector2<f64>`; no wrapper type to convert through.
//! - The convex hull is both the starting point of the concave engine and its
//!   fallback, so it lives beside it.
//!
//! Code cross-refs: `HullPolygon`, `concave_hull`, `polygon_area`, `score_from_area`

mod area;
mod concave;
mod types;
mod util;

pub use area::{polygon_area, score_from_area, signed_area};
pub use concave::{concave_hull, convex_hull_polygon};
pub use types::{DiskPoint, HullKind, HullPolygon, EPS};
pub use util::convex_hull;
