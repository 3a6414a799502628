//! SDL2 window, input mapping and frame pacing.
//!
//! SDL is only used to show a finished [`Canvas`] and to read the keyboard
//! and mouse. Key bindings:
//!
//! - W/S: forward/backward, A/D: strafe, Q/E: up/down
//! - Mouse: look (captured in relative mode)
//! - Z/X: pull/push the near clip plane, 1-4: near clip presets
//! - Tab: toggle wireframe overlay
//! - Escape or closing the window: quit

use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Scancode;
use sdl2::pixels::PixelFormatEnum;
use sdl2::rect::Rect;

use crate::input::{FrameInput, MoveIntent};
use crate::render::Canvas;
use crate::session::{Platform, PlatformError};

pub const FPS: u64 = 60;
pub const FRAME_TARGET_TIME: f64 = 1000.0 / FPS as f64;

const PRESET_KEYS: [Scancode; 4] = [
    Scancode::Num1,
    Scancode::Num2,
    Scancode::Num3,
    Scancode::Num4,
];

pub struct FrameLimiter {
    previous_frame_time: u64,
}

impl FrameLimiter {
    pub fn new(window: &Window) -> Self {
        Self {
            previous_frame_time: window.timer().ticks64(),
        }
    }

    /// Sleeps until the frame budget has elapsed and returns the time since
    /// the previous call, in seconds.
    pub fn wait_and_get_delta(&mut self, window: &Window) -> f32 {
        let mut current_time = window.timer().ticks64();
        let mut delta_time = current_time - self.previous_frame_time;

        if delta_time < FRAME_TARGET_TIME as u64 {
            let time_to_wait = (FRAME_TARGET_TIME as u64) - delta_time;
            std::thread::sleep(std::time::Duration::from_millis(time_to_wait));
            current_time = window.timer().ticks64();
            delta_time = current_time - self.previous_frame_time;
        }

        self.previous_frame_time = current_time;
        delta_time as f32 / 1000.0
    }
}

pub struct Window {
    canvas: sdl2::render::Canvas<sdl2::video::Window>,
    // Field order matters: `texture` must drop before `texture_creator`.
    texture: sdl2::render::Texture<'static>,
    texture_creator: Box<sdl2::render::TextureCreator<sdl2::video::WindowContext>>,
    event_pump: sdl2::EventPump,
    timer_subsystem: sdl2::TimerSubsystem,
    width: u32,
    height: u32,
}

impl Window {
    pub fn new(title: &str, width: u32, height: u32) -> Result<Self, PlatformError> {
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;
        let timer_subsystem = sdl_context.timer()?;

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .resizable()
            .build()
            .map_err(|e| e.to_string())?;

        let canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
        let texture_creator = Box::new(canvas.texture_creator());
        let event_pump = sdl_context.event_pump()?;

        // Look deltas are raw pointer motion, so keep the cursor captured.
        sdl_context.mouse().set_relative_mouse_mode(true);

        let texture = Self::create_texture(&texture_creator, width, height)?;

        Ok(Self {
            canvas,
            texture,
            texture_creator,
            event_pump,
            timer_subsystem,
            width,
            height,
        })
    }

    fn create_texture(
        texture_creator: &sdl2::render::TextureCreator<sdl2::video::WindowContext>,
        width: u32,
        height: u32,
    ) -> Result<sdl2::render::Texture<'static>, PlatformError> {
        // SAFETY: texture_creator is heap-allocated and lives as long as Window.
        // We ensure texture is dropped before texture_creator by struct field order.
        let texture_creator_ref: &'static sdl2::render::TextureCreator<sdl2::video::WindowContext> =
            unsafe { &*(texture_creator as *const _) };
        let texture = texture_creator_ref
            .create_texture_streaming(PixelFormatEnum::ARGB8888, width, height)
            .map_err(|e| e.to_string())?;
        Ok(texture)
    }

    /// Drains the event queue and samples the keyboard and mouse.
    pub fn poll_input(&mut self) -> FrameInput {
        let mut input = FrameInput::default();

        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    scancode: Some(Scancode::Escape),
                    ..
                } => input.quit = true,
                Event::KeyDown {
                    scancode: Some(Scancode::Tab),
                    repeat: false,
                    ..
                } => input.toggle_wireframe = !input.toggle_wireframe,
                Event::KeyDown {
                    scancode: Some(scancode),
                    repeat: false,
                    ..
                } => {
                    if let Some(index) = PRESET_KEYS.iter().position(|&k| k == scancode) {
                        input.near_clip_preset = Some(index);
                    }
                }
                Event::Window {
                    win_event: WindowEvent::Resized(w, h),
                    ..
                } => input.resize = Some((w as u32, h as u32)),
                _ => {}
            }
        }

        let keys = self.event_pump.keyboard_state();
        input.intent = MoveIntent {
            forward: keys.is_scancode_pressed(Scancode::W),
            backward: keys.is_scancode_pressed(Scancode::S),
            left: keys.is_scancode_pressed(Scancode::A),
            right: keys.is_scancode_pressed(Scancode::D),
            up: keys.is_scancode_pressed(Scancode::Q),
            down: keys.is_scancode_pressed(Scancode::E),
            clip_push: keys.is_scancode_pressed(Scancode::X),
            clip_pull: keys.is_scancode_pressed(Scancode::Z),
        };

        let mouse = self.event_pump.relative_mouse_state();
        input.look_delta = (mouse.x(), mouse.y());

        input
    }

    pub fn present(&mut self, buffer: &[u8]) -> Result<(), PlatformError> {
        self.texture
            .update(None, buffer, self.width as usize * 4)
            .map_err(|e| e.to_string())?;

        self.canvas.clear();
        self.canvas
            .copy(&self.texture, None, Some(Rect::new(0, 0, self.width, self.height)))?;
        self.canvas.present();
        Ok(())
    }

    /// Replaces the streaming texture. The old texture and size stay in place
    /// if the new one cannot be created.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), PlatformError> {
        self.texture = Self::create_texture(&self.texture_creator, width, height)?;
        self.width = width;
        self.height = height;
        Ok(())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn timer(&self) -> &sdl2::TimerSubsystem {
        &self.timer_subsystem
    }
}

/// [`Platform`] backed by an SDL2 window and a software [`Canvas`].
pub struct SdlPlatform {
    window: Window,
    canvas: Canvas,
    limiter: FrameLimiter,
}

impl SdlPlatform {
    pub fn new(title: &str, width: u32, height: u32) -> Result<Self, PlatformError> {
        let window = Window::new(title, width, height)?;
        let limiter = FrameLimiter::new(&window);
        Ok(Self {
            window,
            canvas: Canvas::new(width, height),
            limiter,
        })
    }
}

impl Platform for SdlPlatform {
    type Target = Canvas;

    fn poll_input(&mut self) -> FrameInput {
        self.window.poll_input()
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), PlatformError> {
        self.window.resize(width, height)?;
        self.canvas.resize(width, height);
        Ok(())
    }

    fn target(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    fn present(&mut self) -> Result<(), PlatformError> {
        self.window.present(self.canvas.as_bytes())
    }

    fn pace_frame(&mut self) -> f32 {
        self.limiter.wait_and_get_delta(&self.window)
    }
}
