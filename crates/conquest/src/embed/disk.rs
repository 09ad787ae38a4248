//! Direction-preserving compression of R² into the open unit disk.

use nalgebra::Vector2;

use crate::geom2::DiskPoint;

/// Largest radius a projected point may have after float rounding.
const MAX_RADIUS: f64 = 1.0 - 1e-12;

/// `c ↦ c / (1 + |c|)`.
///
/// Keeps the direction of `c`, maps the origin to itself and every finite `c`
/// strictly inside the unit circle. Coordinates so large that the quotient
/// rounds to radius 1 are pulled back to `MAX_RADIUS`.
pub fn project_raw(coord: Vector2<f64>) -> DiskPoint {
    let s = coord.x.abs().max(coord.y.abs());
    let p = if s > 1.0 {
        // Same map divided through by s; |c| itself may overflow.
        let u = coord / s;
        u / (1.0 / s + u.norm())
    } else {
        coord / (1.0 + coord.norm())
    };
    let r = p.norm();
    if r >= 1.0 {
        p * (MAX_RADIUS / r)
    } else {
        p
    }
}

/// Lookup key for a submitted word: surrounding whitespace trimmed, lowercased.
pub fn normalize_word(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;
    use proptest::prelude::*;

    #[test]
    fn three_four_five() {
        let p = project_raw(vector![3.0, 4.0]);
        assert!((p.x - 0.5).abs() < 1e-15);
        assert!((p.y - 4.0 / 6.0).abs() < 1e-15);
    }

    #[test]
    fn origin_is_fixed() {
        assert_eq!(project_raw(vector![0.0, 0.0]), vector![0.0, 0.0]);
    }

    #[test]
    fn huge_coordinates_stay_inside() {
        for c in [vector![1e20, 0.0], vector![-1e300, 1e300], vector![f64::MAX, f64::MAX]] {
            let p = project_raw(c);
            assert!(p.norm() < 1.0, "{c:?} -> {p:?}");
            assert!(p.x.signum() == c.x.signum() && p.y.signum() == c.y.signum());
        }
    }

    #[test]
    fn normalization_trims_and_lowercases() {
        assert_eq!(normalize_word("  Cat\t"), "cat");
        assert_eq!(normalize_word("CAT"), "cat");
        assert_eq!(normalize_word("\n"), "");
    }

    proptest! {
        #[test]
        fn finite_coords_land_in_open_disk(x in -1e6f64..1e6, y in -1e6f64..1e6) {
            let p = project_raw(Vector2::new(x, y));
            prop_assert!(p.norm() < 1.0);
            prop_assert_eq!(p == Vector2::zeros(), x == 0.0 && y == 0.0);
        }

        #[test]
        fn direction_is_preserved(x in -1e3f64..1e3, y in -1e3f64..1e3) {
            prop_assume!(x != 0.0 || y != 0.0);
            let c = Vector2::new(x, y);
            let p = project_raw(c);
            // Parallel and same orientation.
            prop_assert!((c.x * p.y - c.y * p.x).abs() <= 1e-9 * c.norm());
            prop_assert!(c.dot(&p) > 0.0);
        }
    }
}
