//! Plane vector algebra.
//!
//! Addition, subtraction, scaling, dot products and magnitudes come straight
//! from `nalgebra`'s operators on [`Vector2`] and [`Point2`]. This module adds
//! the pieces with conventions of their own.

use nalgebra::{Point2, Vector2};
use num_traits::identities::Zero;

/// Normalizes `v`, or returns the zero vector when `v` has no length.
pub fn normalize(v: &Vector2<f64>) -> Vector2<f64> {
    v.try_normalize(0.0).unwrap_or_else(Vector2::zero)
}

/// Point reached by walking `length` units along `direction` from `origin`.
pub fn advance(origin: &Point2<f64>, direction: &Vector2<f64>, length: f64) -> Point2<f64> {
    *origin + direction * length
}

pub fn is_finite(v: &Vector2<f64>) -> bool {
    v.x.is_finite() && v.y.is_finite()
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn it_normalizes_vectors() {
        assert_relative_eq!(normalize(&Vector2::new(3.0, 4.0)), Vector2::new(0.6, 0.8));
        assert_relative_eq!(normalize(&Vector2::new(0.0, -2.0)), Vector2::new(0.0, -1.0));
        assert_relative_eq!(normalize(&Vector2::new(1e-3, 0.0)).norm(), 1.0);
    }

    #[test]
    fn it_normalizes_the_zero_vector_to_zero() {
        assert_eq!(normalize(&Vector2::zero()), Vector2::zero());
    }

    #[test]
    fn it_advances_points() {
        let point = advance(&Point2::new(100.0, 350.0), &Vector2::new(1.0, 0.0), 1000.0);
        assert_relative_eq!(point, Point2::new(1100.0, 350.0));

        let point = advance(&Point2::new(0.0, 0.0), &Vector2::new(0.6, 0.8), 5.0);
        assert_relative_eq!(point, Point2::new(3.0, 4.0));
    }

    #[test]
    fn it_detects_non_finite_vectors() {
        assert!(is_finite(&Vector2::new(1.0, -2.0)));
        assert!(!is_finite(&Vector2::new(f64::NAN, 0.0)));
        assert!(!is_finite(&Vector2::new(0.0, f64::INFINITY)));
    }
}
