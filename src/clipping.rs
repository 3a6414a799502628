//! Near-plane polygon clipping.
//!
//! Faces are clipped in camera space, before projection, against the single
//! half-space `z >= near_z` using one Sutherland-Hodgman pass. The output is
//! always built as a fresh vertex ring; the input is never spliced in place.

use crate::math::Vec3;

/// The plane `z = near_z`. The visible side is `z >= near_z`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NearPlane {
    pub z: f32,
}

impl NearPlane {
    pub fn new(z: f32) -> Self {
        Self { z }
    }

    /// Signed distance along the view axis. Non-negative means visible.
    #[inline]
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        point.z - self.z
    }

    #[inline]
    pub fn is_inside(&self, point: Vec3) -> bool {
        self.signed_distance(point) >= 0.0
    }

    /// Intersection of the edge from `behind` to `front` with this plane.
    ///
    /// Returns `None` when both endpoints share the same depth, since such an
    /// edge has no single crossing point.
    pub fn intersect(&self, behind: Vec3, front: Vec3) -> Option<Vec3> {
        let dz = front.z - behind.z;
        if dz == 0.0 {
            return None;
        }
        let t = (self.z - behind.z) / dz;
        let mut point = behind.lerp(front, t);
        // The lerp can be off by an ulp in z; the crossing lies on the plane.
        point.z = self.z;
        Some(point)
    }
}

/// A face ring after clipping.
///
/// Holds 3 or more camera-space points, or nothing when the face was clipped
/// away or collapsed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClippedFace {
    pub vertices: Vec<Vec3>,
}

impl ClippedFace {
    /// Returns true if the face has been completely clipped away.
    pub fn is_empty(&self) -> bool {
        self.vertices.len() < 3
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }
}

/// Clips one face ring against the plane `z = near_z`.
///
/// Vertices in front are copied through. A vertex behind the plane is
/// replaced by the crossing point on each edge that leads to an in-front
/// neighbour: zero, one or two new vertices, emitted in ring order so the
/// winding is preserved. Rings that end up with fewer than 3 vertices come
/// back empty.
pub fn clip_face_near(vertices: &[Vec3], near_z: f32) -> ClippedFace {
    if vertices.len() < 3 {
        return ClippedFace::default();
    }

    let plane = NearPlane::new(near_z);
    let mut output = Vec::with_capacity(vertices.len() + 2);

    for i in 0..vertices.len() {
        let current = vertices[i];
        let next = vertices[(i + 1) % vertices.len()];

        let current_inside = plane.is_inside(current);
        let next_inside = plane.is_inside(next);

        if current_inside {
            output.push(current);

            if !next_inside {
                // Leaving the visible side: keep the crossing.
                output.extend(plane.intersect(next, current));
            }
        } else if next_inside {
            // Re-entering: the crossing replaces the hidden vertex.
            output.extend(plane.intersect(current, next));
        }
    }

    if output.len() < 3 {
        output.clear();
    }

    ClippedFace { vertices: output }
}
