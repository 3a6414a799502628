//! The interactive frame loop.
//!
//! Windowing, input polling and frame pacing sit behind the [`Platform`]
//! trait so the loop itself can run against SDL2 or against a scripted
//! platform in tests.

use crate::colors;
use crate::engine::Engine;
use crate::input::FrameInput;
use crate::render::FrameTarget;

/// Errors reported by a platform backend.
#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    /// SDL reports failures as plain strings.
    #[error("SDL error: {0}")]
    Sdl(String),
}

impl From<String> for PlatformError {
    fn from(message: String) -> Self {
        PlatformError::Sdl(message)
    }
}

/// Everything the frame loop needs from the outside world.
pub trait Platform {
    type Target: FrameTarget;

    /// Drains pending events and samples held keys and pointer motion.
    fn poll_input(&mut self) -> FrameInput;

    /// Reallocates the frame for a new drawable size. On error the previous
    /// size must still be in effect.
    fn resize(&mut self, width: u32, height: u32) -> Result<(), PlatformError>;

    /// The frame being drawn.
    fn target(&mut self) -> &mut Self::Target;

    /// Shows the finished frame.
    fn present(&mut self) -> Result<(), PlatformError>;

    /// Waits out the rest of the frame budget and returns the elapsed
    /// seconds since the previous call.
    fn pace_frame(&mut self) -> f32;
}

/// Totals for a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub frames: u64,
}

/// Runs frames until the platform reports quit.
///
/// Each frame: clear, poll input (stopping right away on quit), apply a
/// pending resize, build and draw the frame, present, pace, then advance the
/// camera by the measured elapsed time. The projection only follows a resize
/// the platform managed to apply.
pub fn run<P: Platform>(engine: &mut Engine, platform: &mut P) -> Result<SessionSummary, PlatformError> {
    let mut frames = 0u64;

    loop {
        platform.target().clear(colors::BACKGROUND);

        let input = platform.poll_input();
        if input.quit {
            tracing::info!(frames, "quit requested");
            return Ok(SessionSummary { frames });
        }
        if let Some((width, height)) = input.resize {
            match platform.resize(width, height) {
                Ok(()) => engine.resize(width, height),
                Err(e) => tracing::warn!(width, height, "resize failed, keeping previous size: {e}"),
            }
        }

        engine.draw(platform.target());
        platform.present()?;
        frames += 1;

        let delta_time = platform.pace_frame();
        engine.apply_input(delta_time, &input);
    }
}
