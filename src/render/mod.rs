//! Drawing commands and the sinks that consume them.
//!
//! The pipeline never rasterizes directly. It produces an ordered list of
//! [`DrawCommand`]s and hands them to a [`RenderSink`]. [`Canvas`] is the
//! software sink used by the window and by headless capture.

mod canvas;

pub use canvas::{CaptureError, Canvas};

use crate::colors::Color;
use crate::math::ScreenPoint;

/// A filled polygon with at least 3 points and non-zero area.
///
/// The only way to build one is [`Polygon::new`], so a sink never receives a
/// degenerate ring from the pipeline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Polygon {
    points: Vec<ScreenPoint>,
}

impl Polygon {
    pub fn new(points: Vec<ScreenPoint>) -> Option<Self> {
        (points.len() >= 3 && twice_signed_area(&points) != 0).then_some(Self { points })
    }

    pub fn points(&self) -> &[ScreenPoint] {
        &self.points
    }
}

/// Shoelace sum. Widened so saturated off-screen coordinates cannot overflow.
fn twice_signed_area(points: &[ScreenPoint]) -> i128 {
    (0..points.len())
        .map(|i| {
            let p = points[i];
            let q = points[(i + 1) % points.len()];
            p.x as i128 * q.y as i128 - q.x as i128 * p.y as i128
        })
        .sum()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawCommand {
    Polygon { polygon: Polygon, color: Color },
    Line { from: ScreenPoint, to: ScreenPoint, color: Color },
}

/// Rasterizer-agnostic drawing primitives.
///
/// Implementations must quietly ignore polygons with fewer than 3 points.
pub trait RenderSink {
    fn draw_polygon(&mut self, points: &[ScreenPoint], color: Color);
    fn draw_line(&mut self, from: ScreenPoint, to: ScreenPoint, color: Color);

    fn submit(&mut self, command: &DrawCommand) {
        match command {
            DrawCommand::Polygon { polygon, color } => self.draw_polygon(polygon.points(), *color),
            DrawCommand::Line { from, to, color } => self.draw_line(*from, *to, *color),
        }
    }
}

/// A sink that also owns the frame it draws into.
pub trait FrameTarget: RenderSink {
    fn clear(&mut self, color: Color);
}

/// Records commands instead of drawing them.
impl RenderSink for Vec<DrawCommand> {
    fn draw_polygon(&mut self, points: &[ScreenPoint], color: Color) {
        if let Some(polygon) = Polygon::new(points.to_vec()) {
            self.push(DrawCommand::Polygon { polygon, color });
        }
    }

    fn draw_line(&mut self, from: ScreenPoint, to: ScreenPoint, color: Color) {
        self.push(DrawCommand::Line { from, to, color });
    }
}
