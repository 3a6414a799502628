//! Cube geometry.
//!
//! Every object in a scene is an axis-aligned unit cube. The vertex, edge,
//! face and color tables are shared by all instances; a [`Cube`] only stores
//! its origin and the world-space corners derived from it.

use crate::colors::{self, Color};
use crate::math::Vec3;

pub const N_CUBE_VERTICES: usize = 8;
pub const N_CUBE_EDGES: usize = 12;
pub const N_CUBE_FACES: usize = 6;

/// Template corners are at +/-1 and scaled by this on instantiation.
pub const CUBE_HALF_EXTENT: f32 = 0.5;

// OWNERSHIP: Static/constant data - owned by the program itself ('static lifetime)
// Every Cube borrows these tables; nothing is copied per instance.
pub const CUBE_VERTICES: [Vec3; N_CUBE_VERTICES] = [
    Vec3::new(-1.0, -1.0, -1.0),
    Vec3::new(1.0, -1.0, -1.0),
    Vec3::new(1.0, 1.0, -1.0),
    Vec3::new(-1.0, 1.0, -1.0),
    Vec3::new(-1.0, -1.0, 1.0),
    Vec3::new(1.0, -1.0, 1.0),
    Vec3::new(1.0, 1.0, 1.0),
    Vec3::new(-1.0, 1.0, 1.0),
];

pub const CUBE_EDGES: [[usize; 2]; N_CUBE_EDGES] = [
    [0, 1],
    [1, 2],
    [2, 3],
    [3, 0],
    [4, 5],
    [5, 6],
    [6, 7],
    [7, 4],
    [0, 4],
    [1, 5],
    [2, 6],
    [3, 7],
];

/// Quads as rings of vertex indices. Indexed in parallel with [`CUBE_FACE_COLORS`].
pub const CUBE_FACES: [[usize; 4]; N_CUBE_FACES] = [
    // -Z
    [0, 1, 2, 3],
    // +Z
    [4, 5, 6, 7],
    // -Y
    [0, 1, 5, 4],
    // +Y
    [2, 3, 7, 6],
    // -X
    [0, 3, 7, 4],
    // +X
    [1, 2, 6, 5],
];

pub const CUBE_FACE_COLORS: [Color; N_CUBE_FACES] = [
    colors::RED,
    colors::ORANGE,
    colors::YELLOW,
    colors::WHITE,
    colors::BLUE,
    colors::GREEN,
];

/// One cube placed in the world. Geometry is fixed after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Cube {
    origin: Vec3,
    world_vertices: [Vec3; N_CUBE_VERTICES],
}

impl Cube {
    pub fn new(origin: Vec3) -> Self {
        Self {
            origin,
            world_vertices: CUBE_VERTICES.map(|offset| origin + offset * CUBE_HALF_EXTENT),
        }
    }

    /// A cube resting on the ground plane (`y = 0`).
    pub fn on_ground(x: f32, z: f32) -> Self {
        Self::new(Vec3::new(x, 0.0, z))
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    pub fn world_vertices(&self) -> &[Vec3; N_CUBE_VERTICES] {
        &self.world_vertices
    }

    pub fn edges(&self) -> &'static [[usize; 2]] {
        &CUBE_EDGES
    }

    pub fn faces(&self) -> &'static [[usize; 4]] {
        &CUBE_FACES
    }

    pub fn face_colors(&self) -> &'static [Color] {
        &CUBE_FACE_COLORS
    }
}
