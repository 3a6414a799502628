//! Painter's algorithm ordering.
//!
//! There is no depth buffer. Faces are ordered by the squared distance of
//! their centroid from the camera and drawn farthest first.

use crate::math::Vec3;

/// Squared distance from the camera to the centroid of `vertices`.
///
/// Only meaningful as an ordering key. Returns `0.0` for an empty slice.
pub fn depth_key(vertices: &[Vec3]) -> f32 {
    if vertices.is_empty() {
        return 0.0;
    }
    let n = vertices.len() as f32;
    (0..3)
        .map(|axis| {
            let mean = vertices.iter().map(|v| v.axis(axis)).sum::<f32>() / n;
            mean * mean
        })
        .sum()
}

/// Sorts descending by `key` (farthest first).
///
/// The sort is stable, so faces with equal keys keep their submission order
/// and the same scene always produces the same draw sequence.
pub fn sort_back_to_front<T>(items: &mut [T], key: impl Fn(&T) -> f32) {
    items.sort_by(|a, b| key(b).total_cmp(&key(a)));
}
