//! Rotation about the gravity-aligned vertical axis.
//!
//! The anchor frame is right-handed with +Y up, so a positive angle turns
//! counter-clockwise when viewed from above:
//!
//! ```text
//! Ry(θ) = |  cos θ   0   sin θ |
//!         |    0     1     0   |
//!         | -sin θ   0   cos θ |
//! ```

use nalgebra::{Matrix3, Rotation3};

/// Rotation about +Y by a signed angle in radians
#[inline]
pub fn rotation_about_vertical(theta: f64) -> Rotation3<f64> {
    let (sin, cos) = theta.sin_cos();
    #[rustfmt::skip]
    let matrix = Matrix3::new(
        cos, 0.0, sin,
        0.0, 1.0, 0.0,
        -sin, 0.0, cos,
    );
    Rotation3::from_matrix_unchecked(matrix)
}

/// Rotation that turns the anchor's forward axis (−Z) toward a compass
/// bearing, clockwise from north.
///
/// Compass bearings turn clockwise seen from above while `Ry` turns
/// counter-clockwise, so this is the inverse of `Ry(bearing)`.
#[inline]
pub fn rotation_for_bearing(bearing: f64) -> Rotation3<f64> {
    rotation_about_vertical(bearing).inverse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Vector3;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_rotation_times_inverse_angle_is_identity() {
        for theta in [0.0, 0.3, -1.2, FRAC_PI_2, PI, 2.5, -3.0] {
            let product = rotation_about_vertical(theta) * rotation_about_vertical(-theta);
            assert_relative_eq!(product.into_inner(), Matrix3::identity(), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_matches_nalgebra_axis_angle() {
        let theta = 0.7;
        let expected = Rotation3::from_axis_angle(&Vector3::y_axis(), theta);
        assert_relative_eq!(rotation_about_vertical(theta), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_vertical_axis_is_fixed() {
        let up = Vector3::y();
        assert_relative_eq!(rotation_about_vertical(1.1) * up, up, epsilon = 1e-15);
    }

    #[test]
    fn test_bearing_rotation_points_forward_axis() {
        let forward = Vector3::new(0.0, 0.0, -1.0);

        // North stays on −Z
        assert_relative_eq!(rotation_for_bearing(0.0) * forward, forward, epsilon = 1e-12);
        // East lands on +X
        assert_relative_eq!(
            rotation_for_bearing(FRAC_PI_2) * forward,
            Vector3::new(1.0, 0.0, 0.0),
            epsilon = 1e-12
        );
        // West lands on −X
        assert_relative_eq!(
            rotation_for_bearing(-FRAC_PI_2) * forward,
            Vector3::new(-1.0, 0.0, 0.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_bearing_rotation_equals_negative_angle() {
        let theta = -2.2;
        assert_relative_eq!(
            rotation_for_bearing(theta),
            rotation_about_vertical(-theta),
            epsilon = 1e-12
        );
    }
}
