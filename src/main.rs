use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cubescape::colors;
use cubescape::culling::FaceCulling;
use cubescape::math::Vec3;
use cubescape::render::{Canvas, FrameTarget};
use cubescape::session;
use cubescape::window::SdlPlatform;
use cubescape::{Engine, EngineConfig, Scene};

#[derive(Parser)]
#[command(name = "cubescape", version, about = "Fly around a field of cubes in a software renderer")]
struct Cli {
    /// Window width in pixels
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Window height in pixels
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Vertical field of view in degrees
    #[arg(long, default_value_t = 60.0)]
    fov: f32,

    /// Initial near clip distance
    #[arg(long, default_value_t = 0.1)]
    near_clip: f32,

    /// JSON scene file with ground positions: { "cubes": [[x, z], ...] }
    #[arg(long)]
    scene: Option<PathBuf>,

    /// Start with the wireframe overlay on (Tab toggles it)
    #[arg(long)]
    wireframe: bool,

    /// Screen-space culling policy for projected faces
    #[arg(long, value_enum, default_value_t = FaceCulling::Bounds)]
    culling: FaceCulling,

    /// Camera movement speed in units per second
    #[arg(long, default_value_t = 10.0)]
    speed: f32,

    /// Pointer counts per radian of look rotation
    #[arg(long, default_value_t = 200.0)]
    sensitivity: f32,

    /// Render a single frame to this image file instead of opening a window
    #[arg(long)]
    screenshot: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();

    let scene = match &cli.scene {
        Some(path) => Scene::load(path).with_context(|| format!("loading scene {}", path.display()))?,
        None => Scene::default_layout(),
    };
    if scene.is_empty() {
        tracing::warn!("scene has no cubes; only the background will be drawn");
    }

    let config = EngineConfig {
        width: cli.width,
        height: cli.height,
        fov_y_degrees: cli.fov,
        near_clip: cli.near_clip,
        camera_position: Vec3::new(0.0, 0.0, -5.0),
        move_speed: cli.speed,
        look_sensitivity: cli.sensitivity,
        wireframe: cli.wireframe,
        culling: cli.culling,
        ..EngineConfig::default()
    };
    let mut engine = Engine::from_config(&config, scene).context("invalid engine configuration")?;

    tracing::info!(
        cubes = engine.scene().len(),
        width = config.width,
        height = config.height,
        culling = %config.culling,
        "engine ready"
    );

    if let Some(path) = &cli.screenshot {
        let mut canvas = Canvas::new(config.width, config.height);
        canvas.clear(colors::BACKGROUND);
        let stats = engine.draw(&mut canvas);
        canvas
            .save(path)
            .with_context(|| format!("writing screenshot {}", path.display()))?;
        tracing::info!(drawn = stats.drawn, path = %path.display(), "screenshot saved");
        return Ok(());
    }

    let mut platform = SdlPlatform::new("Cubescape", config.width, config.height)?;
    let summary = session::run(&mut engine, &mut platform)?;
    tracing::info!(frames = summary.frames, "session finished");

    Ok(())
}
