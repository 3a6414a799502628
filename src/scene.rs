//! Scene setup.
//!
//! A scene is an ordered list of cubes placed on the ground plane. Layouts
//! come from a JSON file of `(x, z)` pairs or from the built-in default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::mesh::Cube;

/// Errors from scene loading.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("cube {index} has a non-finite position ({x}, {z})")]
    NonFinite { index: usize, x: f32, z: f32 },
}

/// On-disk scene layout: `{ "cubes": [[x, z], ...] }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneFile {
    pub cubes: Vec<[f32; 2]>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    cubes: Vec<Cube>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Places one cube at each `(x, z)` ground coordinate, in order.
    pub fn from_ground_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = (f32, f32)>,
    {
        Self {
            cubes: points.into_iter().map(|(x, z)| Cube::on_ground(x, z)).collect(),
        }
    }

    pub fn from_file_data(file: &SceneFile) -> Result<Self, SceneError> {
        if let Some((index, &[x, z])) = file
            .cubes
            .iter()
            .enumerate()
            .find(|(_, [x, z])| !x.is_finite() || !z.is_finite())
        {
            return Err(SceneError::NonFinite { index, x, z });
        }
        Ok(Self::from_ground_points(file.cubes.iter().map(|&[x, z]| (x, z))))
    }

    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        let file: SceneFile = serde_json::from_str(json)?;
        Self::from_file_data(&file)
    }

    /// Load a scene layout from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SceneError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let scene = Self::from_json(&json)?;
        tracing::info!(
            path = %path.as_ref().display(),
            cubes = scene.len(),
            "scene loaded"
        );
        Ok(scene)
    }

    /// A small walled courtyard with a few pillars, used when no scene file is given.
    pub fn default_layout() -> Self {
        let mut points = Vec::new();
        for i in -6..=6 {
            let i = i as f32;
            points.push((i, 6.0));
            points.push((i, -6.0));
        }
        for i in -5..=5 {
            // Doorways in the side walls.
            if i == 0 {
                continue;
            }
            let i = i as f32;
            points.push((-6.0, i));
            points.push((6.0, i));
        }
        points.extend([(-2.0, 2.0), (2.0, 2.0), (-2.0, -2.0), (2.0, -2.0), (0.0, 0.0)]);
        Self::from_ground_points(points)
    }

    pub fn cubes(&self) -> &[Cube] {
        &self.cubes
    }

    pub fn len(&self) -> usize {
        self.cubes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cubes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec3;

    #[test]
    fn ground_points_become_cubes_at_y_zero() {
        let scene = Scene::from_ground_points([(1.0, 2.0), (-3.0, 4.5)]);
        assert_eq!(scene.len(), 2);
        assert_eq!(scene.cubes()[0].origin(), Vec3::new(1.0, 0.0, 2.0));
        assert_eq!(scene.cubes()[1].origin(), Vec3::new(-3.0, 0.0, 4.5));
    }

    #[test]
    fn parses_json_layout() {
        let scene = Scene::from_json(r#"{ "cubes": [[0, 0], [1.5, -2]] }"#).unwrap();
        assert_eq!(scene.len(), 2);
        assert_eq!(scene.cubes()[1].origin(), Vec3::new(1.5, 0.0, -2.0));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = Scene::from_json(r#"{ "cubes": [[0]] }"#).unwrap_err();
        assert!(matches!(err, SceneError::Json(_)));
    }

    #[test]
    fn rejects_non_finite_points() {
        let file = SceneFile {
            cubes: vec![[0.0, 0.0], [f32::NAN, 1.0]],
        };
        let err = Scene::from_file_data(&file).unwrap_err();
        assert!(matches!(err, SceneError::NonFinite { index: 1, .. }));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Scene::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, SceneError::Io(_)));
    }

    #[test]
    fn default_layout_is_populated() {
        let scene = Scene::default_layout();
        assert_eq!(scene.len(), 26 + 20 + 5);
    }
}
