//! Abstract per-frame input.
//!
//! The window layer maps raw keyboard and mouse events into these types; the
//! engine and camera only ever see a [`FrameInput`].

/// Held movement keys, one flag per axis direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveIntent {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    /// Push the near clip plane away from the camera.
    pub clip_push: bool,
    /// Pull the near clip plane toward the camera.
    pub clip_pull: bool,
}

/// Everything the frame loop needs from the input collaborator for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub intent: MoveIntent,
    /// Raw pointer motion since the previous frame, in pixels.
    pub look_delta: (i32, i32),
    /// Quit or escape was received. The loop stops before drawing.
    pub quit: bool,
    pub toggle_wireframe: bool,
    /// Index into the configured near clip presets.
    pub near_clip_preset: Option<usize>,
    /// New drawable size in pixels, when the window changed size.
    pub resize: Option<(u32, u32)>,
}
