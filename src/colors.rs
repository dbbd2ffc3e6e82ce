//! Packed ARGB colors used by the renderer.
//!
//! Colors are stored as `0xAARRGGBB` in a `u32`.

pub const BACKGROUND: u32 = 0xFF000000;
pub const GRID: u32 = 0xFF333333;
pub const WIREFRAME: u32 = 0xFFFFFFFF;
pub const VERTEX: u32 = 0xFFFFFF00;
pub const FACE: u32 = 0xFFFFFFFF;

pub const ALPHA_MASK: u32 = 0xFF000000;
pub const RED_MASK: u32 = 0x00FF0000;
pub const GREEN_MASK: u32 = 0x0000FF00;
pub const BLUE_MASK: u32 = 0x000000FF;

/// Packs 8-bit channels into an ARGB color.
#[inline]
pub const fn pack_argb(a: u8, r: u8, g: u8, b: u8) -> u32 {
    ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}
