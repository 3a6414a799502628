//! Colors used by the renderer.
//!
//! Colors are plain RGB triples at the drawing boundary and are packed into
//! ARGB8888 when they land in the framebuffer.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Packs into ARGB8888 with full alpha.
    #[inline]
    pub const fn to_argb(self) -> u32 {
        0xFF00_0000 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Unpacks an ARGB8888 value, dropping alpha.
    #[inline]
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
        }
    }
}

pub const BLACK: Color = Color::rgb(0, 0, 0);
pub const WHITE: Color = Color::rgb(255, 255, 255);
pub const RED: Color = Color::rgb(255, 0, 0);
pub const ORANGE: Color = Color::rgb(255, 128, 0);
pub const YELLOW: Color = Color::rgb(255, 255, 0);
pub const BLUE: Color = Color::rgb(0, 0, 255);
pub const GREEN: Color = Color::rgb(0, 255, 0);

pub const BACKGROUND: Color = BLACK;
pub const WIREFRAME: Color = WHITE;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argb_packing_round_trips() {
        let c = Color::rgb(0x12, 0x34, 0x56);
        assert_eq!(c.to_argb(), 0xFF12_3456);
        assert_eq!(Color::from_argb(c.to_argb()), c);
    }
}
