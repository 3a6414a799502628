//! A small CPU software renderer for a field of cubes.
//!
//! A free-flying camera looks at unit cubes resting on the ground plane.
//! Each frame the cube corners are moved into camera space, faces are
//! clipped against an adjustable near plane, projected, and painted back to
//! front. SDL2 is only used for the window, input and presenting the frame.
//!
//! # Quick Start
//!
//! ```ignore
//! use cubescape::prelude::*;
//!
//! let mut engine = Engine::from_config(&EngineConfig::default(), Scene::default_layout())?;
//! let mut platform = SdlPlatform::new("Cubescape", 800, 600)?;
//! cubescape::session::run(&mut engine, &mut platform)?;
//! ```

// Public API - exposed to library consumers
pub mod camera;
pub mod colors;
pub mod config;
pub mod culling;
pub mod engine;
pub mod input;
pub mod math;
pub mod mesh;
pub mod projection;
pub mod render;
pub mod scene;
pub mod session;
pub mod window;

// Pipeline stages
pub mod clipping;
pub mod depth;
pub mod transform;

// Re-export commonly needed types at crate root for convenience
pub use camera::Camera;
pub use config::{ConfigError, EngineConfig};
pub use engine::{Engine, Frame, FrameStats, RenderOptions};
pub use projection::Projection;
pub use scene::{Scene, SceneError};

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use cubescape::prelude::*;
/// ```
pub mod prelude {
    // Camera & input
    pub use crate::camera::Camera;
    pub use crate::input::{FrameInput, MoveIntent};

    // Engine
    pub use crate::config::EngineConfig;
    pub use crate::culling::FaceCulling;
    pub use crate::engine::{Engine, RenderOptions};

    // Scene
    pub use crate::mesh::Cube;
    pub use crate::scene::Scene;

    // Projection
    pub use crate::projection::Projection;

    // Math
    pub use crate::math::{ScreenPoint, Vec3};

    // Rendering
    pub use crate::render::{Canvas, DrawCommand, FrameTarget, RenderSink};

    // Window & session
    pub use crate::session::{Platform, SessionSummary};
    pub use crate::window::{FrameLimiter, SdlPlatform, Window};
}
