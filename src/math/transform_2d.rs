use super::{Matrix3, Point2, Vector2};
use crate::error::{GeometryError, Result};

/// Builds a translation by `(tx, ty)`.
#[must_use]
pub fn translation(tx: f64, ty: f64) -> Matrix3 {
    Matrix3::new_translation(&Vector2::new(tx, ty))
}

/// Builds a counter-clockwise rotation from an angle in degrees.
///
/// `rotation_deg(90.0)` maps `(1, 0)` to `(0, 1)`.
#[must_use]
pub fn rotation_deg(degrees: f64) -> Matrix3 {
    Matrix3::new_rotation(degrees.to_radians())
}

/// Builds a scaling by `(sx, sy)` about the origin.
#[must_use]
pub fn scaling(sx: f64, sy: f64) -> Matrix3 {
    Matrix3::new_nonuniform_scaling(&Vector2::new(sx, sy))
}

/// Composes transforms listed in application order.
///
/// `compose(&[a, b])` first applies `a`, then `b`, when the result is
/// later used with [`transform_point`]. An empty slice yields the
/// identity transform. Composition is associative but not commutative.
#[must_use]
pub fn compose(transforms: &[Matrix3]) -> Matrix3 {
    transforms
        .iter()
        .fold(Matrix3::identity(), |acc, m| m * acc)
}

/// Transforms a point by a 3x3 matrix (homogeneous coordinates).
#[must_use]
pub fn transform_point(matrix: &Matrix3, point: Point2) -> Point2 {
    let v = matrix * nalgebra::Vector3::new(point.x, point.y, 1.0);
    Point2::new(v.x, v.y)
}

/// Transforms a direction vector by a 3x3 matrix (ignoring translation).
#[must_use]
pub fn transform_vector(matrix: &Matrix3, vector: Vector2) -> Vector2 {
    let v = matrix * nalgebra::Vector3::new(vector.x, vector.y, 0.0);
    Vector2::new(v.x, v.y)
}

/// Transforms a point by the inverse of a 3x3 matrix.
///
/// Maps world-space coordinates back into a node's local space.
///
/// # Errors
///
/// Returns [`GeometryError::SingularTransform`] if the matrix is not
/// invertible, e.g. a transform carrying a zero scale.
pub fn inverse_transform_point(matrix: &Matrix3, point: Point2) -> Result<Point2> {
    let inverse = matrix
        .try_inverse()
        .ok_or(GeometryError::SingularTransform)?;
    Ok(transform_point(&inverse, point))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    const TOL: f64 = 1e-9;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn identity_is_multiplicative_unit() {
        let m = compose(&[translation(3.0, -2.0), rotation_deg(30.0)]);
        assert_relative_eq!(compose(&[Matrix3::identity(), m]), m, epsilon = TOL);
        assert_relative_eq!(compose(&[m, Matrix3::identity()]), m, epsilon = TOL);
    }

    #[test]
    fn compose_empty_is_identity() {
        assert_relative_eq!(compose(&[]), Matrix3::identity(), epsilon = TOL);
    }

    #[test]
    fn compose_single_returns_it() {
        let m = rotation_deg(45.0);
        assert_relative_eq!(compose(&[m]), m, epsilon = TOL);
    }

    #[test]
    fn compose_applies_left_to_right() {
        // Translate then rotate is not rotate then translate.
        let t = translation(1.0, 0.0);
        let r = rotation_deg(90.0);
        let origin = p(0.0, 0.0);

        // Translate first: (0,0) -> (1,0) -> rotated to (0,1).
        let a = transform_point(&compose(&[t, r]), origin);
        assert_relative_eq!(a, p(0.0, 1.0), epsilon = TOL);

        // Rotate first: (0,0) stays, then translated to (1,0).
        let b = transform_point(&compose(&[r, t]), origin);
        assert_relative_eq!(b, p(1.0, 0.0), epsilon = TOL);
    }

    #[test]
    fn compose_matches_sequential_application() {
        let chain = [translation(2.0, 3.0), rotation_deg(30.0), scaling(2.0, 0.5)];
        let pt = p(1.5, -4.0);

        let composed = transform_point(&compose(&chain), pt);
        let mut sequential = pt;
        for m in &chain {
            sequential = transform_point(m, sequential);
        }
        assert_relative_eq!(composed, sequential, epsilon = TOL);
    }

    #[test]
    fn rotation_90_maps_x_axis_to_y_axis() {
        let r = rotation_deg(90.0);
        assert_relative_eq!(transform_point(&r, p(1.0, 0.0)), p(0.0, 1.0), epsilon = TOL);
    }

    #[test]
    fn rotation_full_turn_is_identity() {
        assert_relative_eq!(rotation_deg(360.0), Matrix3::identity(), epsilon = TOL);
    }

    #[test]
    fn translation_shifts_points() {
        let m = translation(5.0, -2.0);
        assert_relative_eq!(transform_point(&m, p(1.0, 1.0)), p(6.0, -1.0), epsilon = TOL);
    }

    #[test]
    fn scaling_scales_about_origin() {
        let m = scaling(2.0, 3.0);
        assert_relative_eq!(transform_point(&m, p(1.0, -1.0)), p(2.0, -3.0), epsilon = TOL);
    }

    #[test]
    fn transform_vector_ignores_translation() {
        let m = compose(&[rotation_deg(90.0), translation(100.0, 100.0)]);
        let v = transform_vector(&m, Vector2::new(1.0, 0.0));
        assert!((v.x).abs() < TOL, "x={}", v.x);
        assert!((v.y - 1.0).abs() < TOL, "y={}", v.y);
    }

    #[test]
    fn inverse_round_trip() {
        let m = compose(&[scaling(2.0, 0.5), rotation_deg(33.0), translation(-7.0, 4.0)]);
        let pt = p(3.25, -1.5);
        let there = transform_point(&m, pt);
        let back = inverse_transform_point(&m, there).unwrap();
        assert_relative_eq!(back, pt, epsilon = TOL);
    }

    #[test]
    fn inverse_of_singular_transform_is_error() {
        let m = scaling(0.0, 0.0);
        assert!(inverse_transform_point(&m, p(1.0, 1.0)).is_err());
    }
}
