//! Small vector math used by the pipeline.

pub mod rotation;
pub mod screen;
pub mod vec3;

pub use rotation::{rotate_plane, SinCos};
pub use screen::ScreenPoint;
pub use vec3::Vec3;
