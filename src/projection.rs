//! Perspective projection parameters.
//!
//! The [`Projection`] struct is the single source of truth for the viewport
//! size and vertical field of view. Scale factors are derived once whenever
//! either changes.

use crate::math::{ScreenPoint, Vec3};

/// Perspective projection onto an integer pixel grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    width: u32,
    height: u32,
    /// Vertical field of view in radians.
    fov_y: f32,
    half_width: i32,
    half_height: i32,
    proj_x: f32,
    proj_y: f32,
}

impl Projection {
    /// Creates a projection for a `width` x `height` viewport.
    ///
    /// # Arguments
    /// * `fov_y` - Vertical field of view in radians, in `(0, PI)`
    pub fn new(width: u32, height: u32, fov_y: f32) -> Self {
        let half_width = (width / 2) as i32;
        let half_height = (height / 2) as i32;
        let aspect_ratio = width as f32 / height as f32;
        let tan_half_fov = (fov_y / 2.0).tan();

        Self {
            width,
            height,
            fov_y,
            half_width,
            half_height,
            proj_x: half_width as f32 / tan_half_fov / aspect_ratio,
            proj_y: half_height as f32 / tan_half_fov,
        }
    }

    /// Creates a projection from degrees instead of radians.
    pub fn from_degrees(width: u32, height: u32, fov_y_degrees: f32) -> Self {
        Self::new(width, height, fov_y_degrees.to_radians())
    }

    /// Rebuilds the scale factors for a new viewport size.
    pub fn resize(&mut self, width: u32, height: u32) {
        *self = Self::new(width, height, self.fov_y);
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the vertical field of view in radians.
    pub fn fov_y(&self) -> f32 {
        self.fov_y
    }

    /// Returns the `(x, y)` scale factors applied after the perspective divide.
    pub fn scale(&self) -> (f32, f32) {
        (self.proj_x, self.proj_y)
    }

    /// Projects a camera-space point to pixel coordinates.
    ///
    /// The point must be in front of the camera (`z > 0`). The offset from
    /// the viewport centre is truncated toward zero, not rounded.
    #[inline]
    pub fn to_screen(&self, point: Vec3) -> ScreenPoint {
        debug_assert!(point.z > 0.0, "projected a point at z = {}", point.z);
        let x = (point.x / point.z * self.proj_x) as i32;
        let y = (point.y / point.z * self.proj_y) as i32;
        ScreenPoint::new(
            self.half_width.saturating_add(x),
            self.half_height.saturating_add(y),
        )
    }

    /// Whether `point` lies strictly inside the viewport.
    #[inline]
    pub fn contains(&self, point: ScreenPoint) -> bool {
        point.x > 0 && point.x < self.width as i32 && point.y > 0 && point.y < self.height as i32
    }
}
