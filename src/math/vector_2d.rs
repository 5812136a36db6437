use super::{Point2, Vector2, HIT_RADIUS, TOLERANCE};
use crate::error::{GeometryError, Result};

/// Scalar cross product of two 2D vectors.
///
/// This is the z-component of the 3D cross product of the vectors
/// extended with `z = 0`; positive when `b` is counter-clockwise from `a`.
#[must_use]
pub fn cross(a: Vector2, b: Vector2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Componentwise division with a zero guard.
///
/// Dividing by exactly zero returns `v` unchanged instead of propagating
/// infinities; interactive normalization code relies on this soft guard
/// when geometry degenerates mid-drag.
#[must_use]
pub fn safe_div(v: Vector2, k: f64) -> Vector2 {
    if k == 0.0 {
        return v;
    }
    v / k
}

/// Returns whether `a` and `b` are closer than `radius`.
#[must_use]
pub fn is_within(a: Point2, b: Point2, radius: f64) -> bool {
    (a - b).norm() < radius
}

/// Hit-test proximity predicate with the default [`HIT_RADIUS`].
#[must_use]
pub fn is_near(a: Point2, b: Point2) -> bool {
    is_within(a, b, HIT_RADIUS)
}

/// Mirrors a vector through the origin: same length, opposite direction.
#[must_use]
pub fn mirror(v: Vector2) -> Vector2 {
    -v
}

/// Mirrors the direction of `v` while rescaling it to `length`.
///
/// Used to mirror one control handle's angle onto the other while
/// preserving the other handle's existing length.
///
/// # Errors
///
/// Returns [`GeometryError::ZeroVector`] if `v` is shorter than
/// [`TOLERANCE`], since a zero vector has no direction to mirror.
pub fn mirror_with_length(v: Vector2, length: f64) -> Result<Vector2> {
    let len = v.norm();
    if len < TOLERANCE {
        return Err(GeometryError::ZeroVector);
    }
    Ok(v * (-length / len))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn v(x: f64, y: f64) -> Vector2 {
        Vector2::new(x, y)
    }

    #[test]
    fn add_sub_round_trip() {
        let a = v(1.5, -2.0);
        let b = v(3.0, 4.25);
        let r = (a + b) - b;
        assert!((r - a).norm() < TOL);
    }

    #[test]
    fn scale_div_round_trip() {
        let a = v(3.0, -7.0);
        let r = safe_div(a, 4.0) * 4.0;
        assert!((r - a).norm() < TOL);
    }

    #[test]
    fn cross_is_antisymmetric() {
        let a = v(1.0, 2.0);
        let b = v(3.0, -1.0);
        assert!((cross(a, b) + cross(b, a)).abs() < TOL);
        assert!(cross(a, a).abs() < TOL);
    }

    #[test]
    fn cross_sign_is_ccw() {
        // (0,1) is counter-clockwise from (1,0).
        assert!(cross(v(1.0, 0.0), v(0.0, 1.0)) > 0.0);
        assert!(cross(v(0.0, 1.0), v(1.0, 0.0)) < 0.0);
    }

    #[test]
    fn safe_div_by_zero_returns_input() {
        let a = v(5.0, -3.0);
        let r = safe_div(a, 0.0);
        assert!((r - a).norm() < TOL);
        assert!(r.x.is_finite() && r.y.is_finite());
    }

    #[test]
    fn safe_div_nonzero_divides() {
        let r = safe_div(v(6.0, -8.0), 2.0);
        assert!((r.x - 3.0).abs() < TOL, "x={}", r.x);
        assert!((r.y + 4.0).abs() < TOL, "y={}", r.y);
    }

    #[test]
    fn is_near_uses_default_radius() {
        // Default radius is 8: 7.9 apart is near, 8.1 is not.
        assert!(is_near(p(0.0, 0.0), p(7.9, 0.0)));
        assert!(!is_near(p(0.0, 0.0), p(8.1, 0.0)));
    }

    #[test]
    fn is_near_boundary_is_exclusive() {
        assert!(!is_near(p(0.0, 0.0), p(8.0, 0.0)));
    }

    #[test]
    fn is_within_custom_radius() {
        assert!(is_within(p(0.0, 0.0), p(0.0, 2.0), 2.5));
        assert!(!is_within(p(0.0, 0.0), p(0.0, 2.0), 1.5));
    }

    #[test]
    fn mirror_negates_both_components() {
        let m = mirror(v(3.0, -4.0));
        assert!((m.x + 3.0).abs() < TOL);
        assert!((m.y - 4.0).abs() < TOL);
        assert!((m.norm() - 5.0).abs() < TOL);
    }

    #[test]
    fn mirror_with_length_rescales() {
        // Direction (0, 1) of length 10, mirrored to length 5: (0, -5).
        let m = mirror_with_length(v(0.0, 10.0), 5.0).unwrap();
        assert!(m.x.abs() < TOL, "x={}", m.x);
        assert!((m.y + 5.0).abs() < TOL, "y={}", m.y);
    }

    #[test]
    fn mirror_with_length_preserves_direction_line() {
        let m = mirror_with_length(v(3.0, 4.0), 10.0).unwrap();
        assert!((m.x + 6.0).abs() < TOL, "x={}", m.x);
        assert!((m.y + 8.0).abs() < TOL, "y={}", m.y);
        assert!((m.norm() - 10.0).abs() < TOL);
    }

    #[test]
    fn mirror_with_length_zero_vector_is_error() {
        assert!(mirror_with_length(v(0.0, 0.0), 5.0).is_err());
    }
}
