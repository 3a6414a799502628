//! Free-flying first-person camera
//!
//! # Coordinate System
//!
//! - X: positive right
//! - Y: positive down on screen
//! - Z: positive forward (into screen)
//!
//! # Orientation
//!
//! Orientation is stored as two raw angle accumulators and turned into
//! sine/cosine pairs each time a [`ViewBasis`] is requested.
//!
//! - **Yaw**: rotation in the horizontal `(x, z)` plane
//! - **Pitch**: rotation in the vertical `(y, z)` plane
//!
//! Neither angle is wrapped or clamped. Pitching past a quarter turn flips
//! the view upside down and the mouse controls invert with it.

use crate::input::MoveIntent;
use crate::math::{SinCos, Vec3};

/// The near clip plane never gets closer than this, so everything that
/// survives clipping has a strictly positive depth.
pub const MIN_NEAR_CLIP: f32 = 0.01;

/// Camera orientation as sine/cosine pairs, ready for the view transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBasis {
    pub pitch: SinCos,
    pub yaw: SinCos,
}

impl ViewBasis {
    pub const IDENTITY: Self = Self {
        pitch: SinCos::IDENTITY,
        yaw: SinCos::IDENTITY,
    };
}

#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    yaw: f32,   // radians
    pitch: f32, // radians
    near_clip: f32,

    /// Movement speed in units per second.
    pub move_speed: f32,
    /// Pointer pixels per radian of rotation.
    pub look_sensitivity: f32,
    /// Near clip change in units per second while a clip axis is held.
    pub clip_speed: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

impl Camera {
    /// Creates a camera at `position` looking along +Z.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            yaw: 0.0,
            pitch: 0.0,
            near_clip: 0.1,
            move_speed: 10.0,
            look_sensitivity: 200.0,
            clip_speed: 1.0,
        }
    }

    /// Sets both orientation angles (radians).
    pub fn with_orientation(mut self, pitch: f32, yaw: f32) -> Self {
        self.pitch = pitch;
        self.yaw = yaw;
        self
    }

    pub fn with_near_clip(mut self, near_clip: f32) -> Self {
        self.set_near_clip(near_clip);
        self
    }

    // =========================================================================
    // Per-frame update
    // =========================================================================

    /// Advances the camera by one frame of input.
    ///
    /// Vertical movement is along world Y. Horizontal movement follows the
    /// yaw only, so looking up or down never changes walking speed.
    /// `look_delta` is raw pointer motion and is divided by
    /// `look_sensitivity` before being added to `(pitch, yaw)`.
    pub fn update(&mut self, delta_time: f32, intent: &MoveIntent, look_delta: (i32, i32)) {
        let s = delta_time * self.move_speed;

        if intent.up {
            self.position.y += s;
        }
        if intent.down {
            self.position.y -= s;
        }

        let dx = s * self.yaw.sin();
        let dz = s * self.yaw.cos();

        if intent.forward {
            self.position.x += dx;
            self.position.z += dz;
        }
        if intent.backward {
            self.position.x -= dx;
            self.position.z -= dz;
        }
        if intent.left {
            self.position.x -= dz;
            self.position.z += dx;
        }
        if intent.right {
            self.position.x += dz;
            self.position.z -= dx;
        }

        let clip_step = delta_time * self.clip_speed;
        if intent.clip_push {
            self.adjust_near_clip(clip_step);
        }
        if intent.clip_pull {
            self.adjust_near_clip(-clip_step);
        }

        let (mx, my) = look_delta;
        self.pitch += my as f32 / self.look_sensitivity;
        self.yaw += mx as f32 / self.look_sensitivity;
    }

    // =========================================================================
    // Near clip
    // =========================================================================

    pub fn near_clip(&self) -> f32 {
        self.near_clip
    }

    /// Sets the near clip distance, raised to [`MIN_NEAR_CLIP`] if smaller.
    pub fn set_near_clip(&mut self, near_clip: f32) {
        self.near_clip = near_clip.max(MIN_NEAR_CLIP);
    }

    pub fn adjust_near_clip(&mut self, delta: f32) {
        self.set_near_clip(self.near_clip + delta);
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns the orientation trigonometry. Recomputed on every call.
    pub fn view_basis(&self) -> ViewBasis {
        ViewBasis {
            pitch: SinCos::from_angle(self.pitch),
            yaw: SinCos::from_angle(self.yaw),
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn intent() -> MoveIntent {
        MoveIntent::default()
    }

    #[test]
    fn forward_follows_yaw() {
        let mut camera = Camera::new(Vec3::ZERO).with_orientation(0.0, FRAC_PI_2);
        camera.update(0.5, &MoveIntent { forward: true, ..intent() }, (0, 0));

        // 0.5s at 10 units/s, yawed a quarter turn: all movement along +X
        assert_relative_eq!(camera.position().x, 5.0, epsilon = 1e-5);
        assert_relative_eq!(camera.position().z, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn strafe_right_is_perpendicular_to_forward() {
        let mut camera = Camera::new(Vec3::ZERO);
        camera.update(1.0, &MoveIntent { right: true, ..intent() }, (0, 0));

        assert_relative_eq!(camera.position().x, 10.0, epsilon = 1e-5);
        assert_relative_eq!(camera.position().z, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn opposite_keys_cancel() {
        let mut camera = Camera::new(Vec3::new(1.0, 2.0, 3.0));
        let all = MoveIntent {
            forward: true,
            backward: true,
            left: true,
            right: true,
            up: true,
            down: true,
            ..intent()
        };
        camera.update(0.25, &all, (0, 0));

        assert_relative_eq!(camera.position().x, 1.0, epsilon = 1e-5);
        assert_relative_eq!(camera.position().y, 2.0, epsilon = 1e-5);
        assert_relative_eq!(camera.position().z, 3.0, epsilon = 1e-5);
    }

    #[test]
    fn vertical_movement_ignores_pitch() {
        let mut camera = Camera::new(Vec3::ZERO).with_orientation(1.2, 0.4);
        camera.update(0.1, &MoveIntent { up: true, ..intent() }, (0, 0));

        assert_relative_eq!(camera.position().y, 1.0, epsilon = 1e-5);
        assert_relative_eq!(camera.position().x, 0.0);
        assert_relative_eq!(camera.position().z, 0.0);
    }

    #[test]
    fn look_delta_is_scaled_by_sensitivity() {
        let mut camera = Camera::new(Vec3::ZERO);
        camera.update(0.016, &intent(), (100, -50));

        assert_relative_eq!(camera.yaw(), 0.5);
        assert_relative_eq!(camera.pitch(), -0.25);
    }

    #[test]
    fn pitch_is_not_clamped() {
        let mut camera = Camera::new(Vec3::ZERO);
        for _ in 0..10 {
            camera.update(0.016, &intent(), (0, 200));
        }
        assert!(camera.pitch() > PI);
    }

    #[test]
    fn near_clip_has_a_floor() {
        let mut camera = Camera::new(Vec3::ZERO).with_near_clip(0.5);
        camera.update(2.0, &MoveIntent { clip_pull: true, ..intent() }, (0, 0));
        assert_relative_eq!(camera.near_clip(), MIN_NEAR_CLIP);

        camera.update(1.5, &MoveIntent { clip_push: true, ..intent() }, (0, 0));
        assert_relative_eq!(camera.near_clip(), MIN_NEAR_CLIP + 1.5, epsilon = 1e-5);
    }

    #[test]
    fn view_basis_tracks_orientation() {
        let camera = Camera::new(Vec3::ZERO).with_orientation(FRAC_PI_2, 0.0);
        let basis = camera.view_basis();
        assert_relative_eq!(basis.pitch.sin, 1.0, epsilon = 1e-6);
        assert_relative_eq!(basis.yaw.cos, 1.0, epsilon = 1e-6);
    }
}
