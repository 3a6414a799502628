//! World space to camera space.

use crate::camera::{Camera, ViewBasis};
use crate::math::{rotate_plane, Vec3};

/// Moves a world-space point into the camera's frame.
///
/// The camera position is subtracted first, then `(x, z)` is turned by the
/// yaw and `(y, z)` by the pitch. Passing the camera's own angles to
/// [`rotate_plane`] undoes the camera's orientation: a point straight ahead
/// of the camera ends up on the +Z axis.
#[inline]
pub fn to_camera_space(world: Vec3, camera_position: Vec3, basis: &ViewBasis) -> Vec3 {
    let p = world - camera_position;
    let (x, z) = rotate_plane(p.x, p.z, basis.yaw);
    let (y, z) = rotate_plane(p.y, z, basis.pitch);
    Vec3::new(x, y, z)
}

/// Convenience wrapper that reads position and basis from `camera`.
pub fn camera_space_of(world: Vec3, camera: &Camera) -> Vec3 {
    to_camera_space(world, camera.position(), &camera.view_basis())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::MoveIntent;
    use approx::assert_relative_eq;

    #[test]
    fn identity_camera_leaves_points_unchanged() {
        let camera = Camera::new(Vec3::ZERO);
        for p in [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.5, -2.0, 7.25),
            Vec3::new(-100.0, 3.0, -0.5),
        ] {
            assert_eq!(camera_space_of(p, &camera), p);
        }
    }

    #[test]
    fn translation_is_subtracted() {
        let camera = Camera::new(Vec3::new(0.0, 0.0, -5.0));
        let p = camera_space_of(Vec3::new(1.0, 2.0, 0.0), &camera);
        assert_eq!(p, Vec3::new(1.0, 2.0, 5.0));
    }

    #[test]
    fn point_ahead_after_turning_lands_on_view_axis() {
        let mut camera = Camera::new(Vec3::ZERO).with_orientation(0.0, 0.9);
        camera.update(0.3, &MoveIntent { forward: true, ..Default::default() }, (0, 0));

        // Walking forward 3 units along the yaw, the origin is now 3 units behind.
        let behind = camera_space_of(Vec3::ZERO, &camera);
        assert_relative_eq!(behind.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(behind.z, -3.0, epsilon = 1e-5);
    }

    #[test]
    fn pitch_moves_points_vertically() {
        let camera = Camera::new(Vec3::ZERO).with_orientation(std::f32::consts::FRAC_PI_2, 0.0);
        let p = camera_space_of(Vec3::new(0.0, 0.0, 1.0), &camera);
        assert_relative_eq!(p.y, -1.0, epsilon = 1e-6);
        assert_relative_eq!(p.z, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn repeated_calls_are_exact() {
        let camera = Camera::new(Vec3::new(0.3, -1.0, 2.0)).with_orientation(0.2, -1.1);
        let world = Vec3::new(4.0, 5.0, 6.0);
        let first = camera_space_of(world, &camera);
        for _ in 0..100 {
            assert_eq!(camera_space_of(world, &camera), first);
        }
    }
}
