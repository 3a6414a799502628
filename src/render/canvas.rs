//! Software framebuffer.
//!
//! [`Canvas`] owns an ARGB8888 color buffer and implements the drawing
//! primitives on the CPU: even-odd scanline polygon fill and Bresenham lines.
//! There is no depth buffer; callers draw back to front.

use std::path::Path;

use crate::colors::{self, Color};
use crate::math::ScreenPoint;

use super::{FrameTarget, RenderSink};

#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Pixel count of a `width` x `height` frame. Computed in `usize` so large
/// viewports cannot wrap.
fn buffer_len(width: u32, height: u32) -> usize {
    width as usize * height as usize
}

pub struct Canvas {
    color_buffer: Vec<u32>,
    width: u32,
    height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        let size = buffer_len(width, height);
        Self {
            color_buffer: vec![colors::BACKGROUND.to_argb(); size],
            width,
            height,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        let size = buffer_len(width, height);
        self.color_buffer = vec![colors::BACKGROUND.to_argb(); size];
        self.width = width;
        self.height = height;
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Buffer index of an in-bounds pixel.
    #[inline]
    fn index(&self, x: i32, y: i32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            let idx = self.index(x, y);
            self.color_buffer[idx] = color;
        }
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(Color::from_argb(self.color_buffer[self.index(x, y)]))
        } else {
            None
        }
    }

    /// Fills a polygon using the even-odd rule.
    ///
    /// Pixel centres are sampled at `(x + 0.5, y + 0.5)`. Rows and spans are
    /// clamped to the canvas before iterating, so vertices far outside the
    /// viewport cost nothing extra.
    pub fn fill_polygon(&mut self, points: &[ScreenPoint], color: u32) {
        if points.len() < 3 {
            return;
        }

        let min_y = points.iter().map(|p| p.y).min().unwrap_or(0).max(0);
        let max_y = points
            .iter()
            .map(|p| p.y)
            .max()
            .unwrap_or(0)
            .min(self.height as i32 - 1);

        let mut crossings: Vec<f32> = Vec::with_capacity(points.len());

        for y in min_y..=max_y {
            let sample_y = y as f32 + 0.5;
            crossings.clear();

            for i in 0..points.len() {
                let a = points[i];
                let b = points[(i + 1) % points.len()];
                // Walk every edge top to bottom so both windings give identical spans.
                let (top, bottom) = if a.y <= b.y { (a, b) } else { (b, a) };
                let (top_y, bottom_y) = (top.y as f32, bottom.y as f32);

                // Half-open test so shared vertices are counted once.
                if top_y <= sample_y && sample_y < bottom_y {
                    let t = (sample_y - top_y) / (bottom_y - top_y);
                    crossings.push(top.x as f32 + t * (bottom.x as f32 - top.x as f32));
                }
            }

            crossings.sort_by(f32::total_cmp);

            for span in crossings.chunks_exact(2) {
                let start = ((span[0] - 0.5).ceil() as i32).max(0);
                let end = ((span[1] - 0.5).ceil() as i32).min(self.width as i32);
                if start < end {
                    let row = self.index(0, y);
                    self.color_buffer[row + start as usize..row + end as usize].fill(color);
                }
            }
        }
    }

    /// Draws a line between two points using Bresenham's line algorithm.
    ///
    /// The segment is first clipped to the canvas rectangle so endpoints
    /// projected far off screen do not turn into millions of wasted steps.
    pub fn draw_line_bresenham(&mut self, from: ScreenPoint, to: ScreenPoint, color: u32) {
        let Some((from, to)) = self.clip_segment(from, to) else {
            return;
        };
        let (x0, y0, x1, y1) = (from.x, from.y, to.x, to.y);

        // Calculate the absolute distances in each axis.
        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();

        // Step direction for each axis, so lines work in any direction.
        let x_incr_direction = if x0 < x1 { 1 } else { -1 };
        let y_incr_direction = if y0 < y1 { 1 } else { -1 };

        // The error term tracks how far off we are from the ideal line.
        // A positive error favors x movement, negative favors y.
        let mut err = dx - dy;

        let mut x = x0;
        let mut y = y0;

        loop {
            self.set_pixel(x, y, color);

            if x == x1 && y == y1 {
                break;
            }

            let e2 = 2 * err;

            if e2 > -dy {
                err -= dy;
                x += x_incr_direction;
            }

            // Both conditions can be true, resulting in a diagonal step.
            if e2 < dx {
                err += dx;
                y += y_incr_direction;
            }
        }
    }

    /// Liang-Barsky clip of a segment to the canvas rectangle.
    fn clip_segment(&self, from: ScreenPoint, to: ScreenPoint) -> Option<(ScreenPoint, ScreenPoint)> {
        if self.width == 0 || self.height == 0 {
            return None;
        }
        let (x0, y0) = (from.x as f64, from.y as f64);
        let (dx, dy) = (to.x as f64 - x0, to.y as f64 - y0);
        let (max_x, max_y) = ((self.width - 1) as f64, (self.height - 1) as f64);

        let mut t0 = 0.0_f64;
        let mut t1 = 1.0_f64;
        for (p, q) in [(-dx, x0), (dx, max_x - x0), (-dy, y0), (dy, max_y - y0)] {
            if p == 0.0 {
                if q < 0.0 {
                    return None;
                }
                continue;
            }
            let r = q / p;
            if p < 0.0 {
                t0 = t0.max(r);
            } else {
                t1 = t1.min(r);
            }
            if t0 > t1 {
                return None;
            }
        }

        let at = |t: f64| {
            ScreenPoint::new((x0 + t * dx).round() as i32, (y0 + t * dy).round() as i32)
        };
        Some((at(t0), at(t1)))
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.color_buffer)
    }

    /// Writes the current frame as an image file; the format follows the extension.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), CaptureError> {
        let image = image::RgbImage::from_fn(self.width, self.height, |x, y| {
            let c = Color::from_argb(self.color_buffer[self.index(x as i32, y as i32)]);
            image::Rgb([c.r, c.g, c.b])
        });
        image.save(path)?;
        Ok(())
    }
}

impl RenderSink for Canvas {
    fn draw_polygon(&mut self, points: &[ScreenPoint], color: Color) {
        self.fill_polygon(points, color.to_argb());
    }

    fn draw_line(&mut self, from: ScreenPoint, to: ScreenPoint, color: Color) {
        self.draw_line_bresenham(from, to, color.to_argb());
    }
}

impl FrameTarget for Canvas {
    fn clear(&mut self, color: Color) {
        self.color_buffer.fill(color.to_argb());
    }
}
