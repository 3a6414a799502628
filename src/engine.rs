//! Core rendering engine.
//!
//! The [`Engine`] owns the camera, the scene and the projection, and turns
//! them into an ordered list of draw commands once per frame:
//!
//! 1. every cube's corners are moved into camera space,
//! 2. wireframe edges are emitted when the overlay is on,
//! 3. each face is clipped against the near plane, projected and culled,
//! 4. surviving faces from all cubes are sorted farthest first.

use crate::camera::Camera;
use crate::clipping::clip_face_near;
use crate::colors::{self, Color};
use crate::config::{ConfigError, EngineConfig};
use crate::culling::FaceCulling;
use crate::depth::{depth_key, sort_back_to_front};
use crate::input::FrameInput;
use crate::math::{ScreenPoint, Vec3};
use crate::mesh::N_CUBE_VERTICES;
use crate::projection::Projection;
use crate::render::{DrawCommand, Polygon, RenderSink};
use crate::scene::Scene;
use crate::transform::to_camera_space;

/// Per-frame toggles that change what gets drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    /// Emit every cube edge as a line. Edges are not clipped.
    pub wireframe: bool,
    pub culling: FaceCulling,
}

/// Counters for one built frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameStats {
    pub faces: usize,
    pub clipped_away: usize,
    pub culled: usize,
    pub degenerate: usize,
    pub drawn: usize,
    pub edges: usize,
}

/// One frame's draw commands, in submission order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    pub commands: Vec<DrawCommand>,
    pub stats: FrameStats,
}

/// A face that survived clipping and culling, waiting for the depth sort.
struct DepthFace {
    depth: f32,
    polygon: Polygon,
    color: Color,
}

pub struct Engine {
    camera: Camera,
    scene: Scene,
    projection: Projection,
    options: RenderOptions,
    near_clip_presets: Vec<f32>,
}

impl Engine {
    pub fn new(camera: Camera, scene: Scene, projection: Projection) -> Self {
        Self {
            camera,
            scene,
            projection,
            options: RenderOptions::default(),
            near_clip_presets: Vec::new(),
        }
    }

    pub fn from_config(config: &EngineConfig, scene: Scene) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut camera = Camera::new(config.camera_position).with_near_clip(config.near_clip);
        camera.move_speed = config.move_speed;
        camera.look_sensitivity = config.look_sensitivity;
        camera.clip_speed = config.clip_speed;

        let projection = Projection::from_degrees(config.width, config.height, config.fov_y_degrees);

        let mut engine = Self::new(camera, scene, projection);
        engine.options = RenderOptions {
            wireframe: config.wireframe,
            culling: config.culling,
        };
        engine.near_clip_presets = config.near_clip_presets.clone();
        Ok(engine)
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    pub fn options(&self) -> RenderOptions {
        self.options
    }

    pub fn set_wireframe(&mut self, wireframe: bool) {
        self.options.wireframe = wireframe;
    }

    pub fn set_culling(&mut self, culling: FaceCulling) {
        self.options.culling = culling;
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.projection.resize(width, height);
        tracing::debug!(width, height, "viewport resized");
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Applies one frame of input: runtime toggles first, then camera motion.
    pub fn apply_input(&mut self, delta_time: f32, input: &FrameInput) {
        if input.toggle_wireframe {
            self.options.wireframe = !self.options.wireframe;
            tracing::debug!(wireframe = self.options.wireframe, "wireframe toggled");
        }

        if let Some(index) = input.near_clip_preset {
            if let Some(&near_clip) = self.near_clip_presets.get(index) {
                self.camera.set_near_clip(near_clip);
                tracing::debug!(preset = index, near_clip = self.camera.near_clip(), "near clip preset");
            }
        }

        let before = self.camera.near_clip();
        self.camera.update(delta_time, &input.intent, input.look_delta);
        if self.camera.near_clip() != before {
            tracing::trace!(near_clip = self.camera.near_clip(), "near clip adjusted");
        }
    }

    // =========================================================================
    // Frame building
    // =========================================================================

    /// Builds the ordered draw commands for the current camera state.
    pub fn build_frame(&self) -> Frame {
        let _span = tracing::trace_span!("frame").entered();

        let position = self.camera.position();
        let basis = self.camera.view_basis();
        let near_clip = self.camera.near_clip();

        let mut commands = Vec::new();
        let mut faces: Vec<DepthFace> = Vec::new();
        let mut stats = FrameStats::default();

        for cube in self.scene.cubes() {
            let camera_vertices: [Vec3; N_CUBE_VERTICES] = cube
                .world_vertices()
                .map(|v| to_camera_space(v, position, &basis));

            if self.options.wireframe {
                for &[a, b] in cube.edges() {
                    if let Some((from, to)) = self.project_edge(camera_vertices[a], camera_vertices[b]) {
                        commands.push(DrawCommand::Line {
                            from,
                            to,
                            color: colors::WIREFRAME,
                        });
                        stats.edges += 1;
                    }
                }
            }

            for (face, &color) in cube.faces().iter().zip(cube.face_colors()) {
                stats.faces += 1;

                let ring = face.map(|i| camera_vertices[i]);
                let clipped = clip_face_near(&ring, near_clip);
                if clipped.is_empty() {
                    stats.clipped_away += 1;
                    continue;
                }

                let points: Vec<ScreenPoint> = clipped
                    .vertices
                    .iter()
                    .map(|&v| self.projection.to_screen(v))
                    .collect();

                if !self.options.culling.is_visible(&points, &self.projection) {
                    stats.culled += 1;
                    continue;
                }

                let Some(polygon) = Polygon::new(points) else {
                    stats.degenerate += 1;
                    continue;
                };

                faces.push(DepthFace {
                    depth: depth_key(&clipped.vertices),
                    polygon,
                    color,
                });
            }
        }

        // Painter's algorithm: farthest faces first
        sort_back_to_front(&mut faces, |face| face.depth);

        stats.drawn = faces.len();
        commands.extend(faces.into_iter().map(|face| DrawCommand::Polygon {
            polygon: face.polygon,
            color: face.color,
        }));

        tracing::trace!(
            faces = stats.faces,
            clipped_away = stats.clipped_away,
            culled = stats.culled,
            drawn = stats.drawn,
            edges = stats.edges,
            "frame built"
        );

        Frame { commands, stats }
    }

    /// Builds the frame and submits every command to `sink`.
    pub fn draw(&self, sink: &mut impl RenderSink) -> FrameStats {
        let frame = self.build_frame();
        for command in &frame.commands {
            sink.submit(command);
        }
        frame.stats
    }

    /// Projects an edge without clipping it.
    ///
    /// An edge with an endpoint at or behind the camera cannot be projected
    /// and is skipped.
    fn project_edge(&self, a: Vec3, b: Vec3) -> Option<(ScreenPoint, ScreenPoint)> {
        if a.z <= 0.0 || b.z <= 0.0 {
            return None;
        }
        Some((self.projection.to_screen(a), self.projection.to_screen(b)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::MoveIntent;
    use crate::mesh::CUBE_FACE_COLORS;

    fn single_cube_engine(near_clip: f32) -> Engine {
        let camera = Camera::new(Vec3::new(0.0, 0.0, -5.0)).with_near_clip(near_clip);
        let scene = Scene::from_ground_points([(0.0, 0.0)]);
        Engine::new(camera, scene, Projection::from_degrees(800, 600, 60.0))
    }

    fn polygon_colors(frame: &Frame) -> Vec<Color> {
        frame
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Polygon { color, .. } => Some(*color),
                DrawCommand::Line { .. } => None,
            })
            .collect()
    }

    #[test]
    fn cube_in_front_draws_all_faces_back_to_front() {
        let frame = single_cube_engine(1.0).build_frame();

        assert_eq!(frame.stats.faces, 6);
        assert_eq!(frame.stats.clipped_away, 0);
        assert_eq!(frame.stats.drawn, 6);

        let order = polygon_colors(&frame);
        assert_eq!(order.len(), 6);
        // +Z face is farthest and drawn first, -Z face is nearest and drawn last.
        assert_eq!(order[0], CUBE_FACE_COLORS[1]);
        assert_eq!(order[5], CUBE_FACE_COLORS[0]);
    }

    #[test]
    fn cube_behind_camera_draws_nothing() {
        let mut engine = single_cube_engine(0.1);
        engine.camera_mut().set_position(Vec3::new(0.0, 0.0, 5.0));

        let frame = engine.build_frame();
        assert!(frame.commands.is_empty());
        assert_eq!(frame.stats.clipped_away, 6);
    }

    #[test]
    fn near_plane_through_cube_clips_the_near_face() {
        // Near plane at camera z = 5 cuts the cube in half; the -Z face (z = 4.5)
        // is entirely behind it.
        let frame = single_cube_engine(5.0).build_frame();

        assert!(frame.stats.clipped_away >= 1);
        assert!(!polygon_colors(&frame).contains(&CUBE_FACE_COLORS[0]));
        assert!(polygon_colors(&frame).contains(&CUBE_FACE_COLORS[1]));
    }

    #[test]
    fn wireframe_emits_edges_before_faces() {
        let mut engine = single_cube_engine(1.0);
        engine.set_wireframe(true);

        let frame = engine.build_frame();
        assert_eq!(frame.stats.edges, 12);
        assert!(frame.commands[..12]
            .iter()
            .all(|c| matches!(c, DrawCommand::Line { .. })));
        assert_eq!(frame.commands.len(), 12 + 6);
    }

    #[test]
    fn wireframe_edges_ignore_the_near_plane() {
        // Near plane at z = 5 removes the -Z face, but every edge endpoint is
        // still in front of the camera, so all 12 edges are drawn.
        let mut engine = single_cube_engine(5.0);
        engine.set_wireframe(true);

        let frame = engine.build_frame();
        assert_eq!(frame.stats.edges, 12);
        assert_eq!(frame.stats.clipped_away, 1);
        assert_eq!(frame.stats.drawn, 5);
        assert!(!polygon_colors(&frame).contains(&CUBE_FACE_COLORS[0]));
        assert!(frame.commands[..12]
            .iter()
            .all(|c| matches!(c, DrawCommand::Line { .. })));
    }

    #[test]
    fn wireframe_skips_edges_behind_camera() {
        let mut engine = single_cube_engine(0.1);
        engine.set_wireframe(true);
        engine.camera_mut().set_position(Vec3::ZERO);

        // Camera sits inside the cube: only the four edges of the +Z ring are
        // fully in front of it.
        let frame = engine.build_frame();
        assert_eq!(frame.stats.edges, 4);
    }

    #[test]
    fn faces_from_all_cubes_are_sorted_together() {
        let camera = Camera::new(Vec3::new(0.0, 0.0, -5.0));
        let scene = Scene::from_ground_points([(0.0, 0.0), (0.0, 10.0)]);
        let engine = Engine::new(camera, scene, Projection::from_degrees(800, 600, 60.0));

        let frame = engine.build_frame();
        let order = polygon_colors(&frame);
        assert_eq!(frame.stats.drawn, 12);
        // The far cube's +Z face opens the frame, the near cube's -Z face closes it.
        assert_eq!(order[0], CUBE_FACE_COLORS[1]);
        assert_eq!(order[11], CUBE_FACE_COLORS[0]);
        // The far cube's six faces all come before any face of the near cube.
        assert_eq!(order[6], CUBE_FACE_COLORS[1]);
    }

    #[test]
    fn off_screen_cube_is_culled() {
        let camera = Camera::new(Vec3::new(0.0, 0.0, -5.0));
        let scene = Scene::from_ground_points([(100.0, 0.0)]);
        let mut engine = Engine::new(camera, scene, Projection::from_degrees(800, 600, 60.0));

        assert_eq!(engine.build_frame().stats.culled, 6);

        engine.set_culling(FaceCulling::None);
        assert_eq!(engine.build_frame().stats.culled, 0);
    }

    #[test]
    fn input_toggles_and_presets() {
        let mut engine = Engine::from_config(&EngineConfig::default(), Scene::new()).unwrap();
        assert!(!engine.options().wireframe);

        engine.apply_input(
            0.0,
            &FrameInput {
                toggle_wireframe: true,
                near_clip_preset: Some(2),
                ..FrameInput::default()
            },
        );
        assert!(engine.options().wireframe);
        assert_eq!(engine.camera().near_clip(), 2.0);

        // Unknown preset index is ignored.
        engine.apply_input(
            0.0,
            &FrameInput {
                near_clip_preset: Some(99),
                ..FrameInput::default()
            },
        );
        assert_eq!(engine.camera().near_clip(), 2.0);
    }

    #[test]
    fn input_moves_the_camera() {
        let mut engine = single_cube_engine(1.0);
        engine.apply_input(
            0.1,
            &FrameInput {
                intent: MoveIntent {
                    forward: true,
                    ..MoveIntent::default()
                },
                ..FrameInput::default()
            },
        );
        assert!((engine.camera().position().z - -4.0).abs() < 1e-5);
    }

    #[test]
    fn draw_submits_in_frame_order() {
        let engine = single_cube_engine(1.0);
        let mut sink: Vec<DrawCommand> = Vec::new();
        let stats = engine.draw(&mut sink);

        assert_eq!(stats.drawn, 6);
        assert_eq!(sink, engine.build_frame().commands);
    }
}
