//! Runtime configuration for the engine.

use crate::culling::FaceCulling;
use crate::math::Vec3;

/// Largest accepted viewport side, in pixels.
pub const MAX_VIEWPORT_DIMENSION: u32 = 16_384;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("viewport must be at least 1x1, got {width}x{height}")]
    EmptyViewport { width: u32, height: u32 },
    #[error("viewport {width}x{height} exceeds the {max}px limit per side")]
    ViewportTooLarge { width: u32, height: u32, max: u32 },
    #[error("field of view must be between 0 and 180 degrees, got {0}")]
    FieldOfView(f32),
    #[error("{name} must be positive, got {value}")]
    NotPositive { name: &'static str, value: f32 },
}

/// Everything needed to start a session. `Default` gives the interactive defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub width: u32,
    pub height: u32,
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f32,
    pub near_clip: f32,
    /// Selectable with the number keys, in order.
    pub near_clip_presets: Vec<f32>,
    pub camera_position: Vec3,
    pub move_speed: f32,
    pub look_sensitivity: f32,
    pub clip_speed: f32,
    pub wireframe: bool,
    pub culling: FaceCulling,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            fov_y_degrees: 60.0,
            near_clip: 0.1,
            near_clip_presets: vec![0.1, 1.0, 2.0, 5.0],
            camera_position: Vec3::new(0.0, 0.0, -5.0),
            move_speed: 10.0,
            look_sensitivity: 200.0,
            clip_speed: 1.0,
            wireframe: false,
            culling: FaceCulling::default(),
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyViewport {
                width: self.width,
                height: self.height,
            });
        }
        if self.width > MAX_VIEWPORT_DIMENSION || self.height > MAX_VIEWPORT_DIMENSION {
            return Err(ConfigError::ViewportTooLarge {
                width: self.width,
                height: self.height,
                max: MAX_VIEWPORT_DIMENSION,
            });
        }
        if !(self.fov_y_degrees > 0.0 && self.fov_y_degrees < 180.0) {
            return Err(ConfigError::FieldOfView(self.fov_y_degrees));
        }
        for (name, value) in [
            ("near clip", self.near_clip),
            ("move speed", self.move_speed),
            ("look sensitivity", self.look_sensitivity),
            ("clip speed", self.clip_speed),
        ] {
            if !(value > 0.0) {
                return Err(ConfigError::NotPositive { name, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(EngineConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_values() {
        let config = EngineConfig {
            height: 0,
            ..EngineConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::EmptyViewport { .. })));

        let config = EngineConfig {
            width: 70_000,
            height: 70_000,
            ..EngineConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::ViewportTooLarge { .. })));

        let config = EngineConfig {
            width: MAX_VIEWPORT_DIMENSION,
            height: 1,
            ..EngineConfig::default()
        };
        assert_eq!(config.validate(), Ok(()));

        let config = EngineConfig {
            fov_y_degrees: 180.0,
            ..EngineConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::FieldOfView(180.0)));

        let config = EngineConfig {
            look_sensitivity: 0.0,
            ..EngineConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPositive { name: "look sensitivity", .. })
        ));
    }
}
