//! Pure geometry helpers for measurements. All inputs are image-space points.

use bevy::prelude::*;

/// Rays shorter than this are treated as degenerate for angle computation.
pub const DEGENERATE_EPSILON: f32 = 1e-4;

/// Euclidean distance between two points.
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Midpoint of a segment (label anchor for rulers).
pub fn midpoint(a: Vec2, b: Vec2) -> Vec2 {
    (a + b) / 2.0
}

/// Angle at `vertex` between the rays toward `a` and `b`, in degrees.
///
/// Returns `None` when either ray is (near) zero length; the dot-product
/// formula divides by the ray lengths and would otherwise produce NaN.
pub fn angle_degrees(a: Vec2, vertex: Vec2, b: Vec2) -> Option<f32> {
    let ray_a = a - vertex;
    let ray_b = b - vertex;

    let len_a = ray_a.length();
    let len_b = ray_b.length();
    if len_a < DEGENERATE_EPSILON || len_b < DEGENERATE_EPSILON {
        return None;
    }

    // Clamp against rounding so acos never sees values outside [-1, 1]
    let cos = (ray_a.dot(ray_b) / (len_a * len_b)).clamp(-1.0, 1.0);
    Some(cos.acos().to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_is_symmetric() {
        let a = Vec2::new(1.5, -2.0);
        let b = Vec2::new(-4.0, 7.25);
        assert_eq!(distance(a, b), distance(b, a));
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let a = Vec2::new(12.0, 34.0);
        assert_eq!(distance(a, a), 0.0);
    }

    #[test]
    fn test_distance_three_four_five() {
        assert!((distance(Vec2::ZERO, Vec2::new(3.0, 4.0)) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_midpoint() {
        let m = midpoint(Vec2::new(0.0, 0.0), Vec2::new(10.0, 4.0));
        assert_eq!(m, Vec2::new(5.0, 2.0));
    }

    #[test]
    fn test_perpendicular_rays_are_ninety_degrees() {
        let angle = angle_degrees(Vec2::new(1.0, 0.0), Vec2::ZERO, Vec2::new(0.0, 1.0)).unwrap();
        assert!((angle - 90.0).abs() < 1e-4);
    }

    #[test]
    fn test_straight_line_is_one_eighty() {
        let angle =
            angle_degrees(Vec2::new(-5.0, 0.0), Vec2::ZERO, Vec2::new(5.0, 0.0)).unwrap();
        assert!((angle - 180.0).abs() < 1e-3);
    }

    #[test]
    fn test_collinear_same_direction_is_zero() {
        let angle =
            angle_degrees(Vec2::new(2.0, 2.0), Vec2::ZERO, Vec2::new(5.0, 5.0)).unwrap();
        assert!(angle.abs() < 1e-3);
    }

    #[test]
    fn test_forty_five_degrees() {
        let angle =
            angle_degrees(Vec2::new(1.0, 0.0), Vec2::ZERO, Vec2::new(1.0, 1.0)).unwrap();
        assert!((angle - 45.0).abs() < 1e-3);
    }

    #[test]
    fn test_degenerate_first_ray_is_none() {
        let v = Vec2::new(3.0, 3.0);
        assert_eq!(angle_degrees(v, v, Vec2::new(9.0, 9.0)), None);
    }

    #[test]
    fn test_degenerate_second_ray_is_none() {
        let v = Vec2::new(3.0, 3.0);
        assert_eq!(angle_degrees(Vec2::ZERO, v, v), None);
    }

    #[test]
    fn test_result_is_never_nan_for_parallel_long_rays() {
        // Rounding can push the cosine slightly past 1.0 without the clamp
        let angle = angle_degrees(
            Vec2::new(1000.0, 2000.0),
            Vec2::ZERO,
            Vec2::new(500.0, 1000.0),
        )
        .unwrap();
        assert!(!angle.is_nan());
    }

    #[test]
    fn test_angle_independent_of_ray_length() {
        let short = angle_degrees(Vec2::new(1.0, 0.0), Vec2::ZERO, Vec2::new(0.0, 2.0)).unwrap();
        let long =
            angle_degrees(Vec2::new(100.0, 0.0), Vec2::ZERO, Vec2::new(0.0, 0.5)).unwrap();
        assert!((short - long).abs() < 1e-3);
    }
}
