//! Plane rotations.
//!
//! Orientation is never stored as a matrix. A 3D view rotation is composed from
//! two independent 2D rotations: yaw in the `(x, z)` plane, then pitch in the
//! `(y, z)` plane.

/// Sine and cosine of an angle, computed once and reused for every vertex.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SinCos {
    pub sin: f32,
    pub cos: f32,
}

impl SinCos {
    pub const IDENTITY: Self = Self { sin: 0.0, cos: 1.0 };

    pub fn from_angle(radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self { sin, cos }
    }
}

/// Rotates the pair `(a, b)` by the angle described by `angle`.
///
/// Returns `(a*cos - b*sin, b*cos + a*sin)`. With screen `y` pointing down this
/// turns clockwise on screen.
#[inline]
pub fn rotate_plane(a: f32, b: f32, angle: SinCos) -> (f32, f32) {
    (
        a * angle.cos - b * angle.sin,
        b * angle.cos + a * angle.sin,
    )
}
