//! Triangle rasterization.
//!
//! A single scanline skeleton ([`ScanlineRasterizer`]) walks the pixels of a
//! screen-space triangle and hands each covered pixel to a [`PixelShader`],
//! which decides its color. Flat and textured fills differ only in the
//! shader they plug in.

mod scanline;
mod shader;

pub use scanline::ScanlineRasterizer;
pub use shader::{FlatShader, PixelShader, TextureShader};

use crate::math::vec2::Vec2;
use crate::math::vec4::Vec4;

/// A triangle ready for rasterization in screen space.
///
/// `points` hold pixel x/y, the post-divide z, and the view-space depth in w.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub points: [Vec4; 3],
    pub texcoords: [Vec2; 3],
    /// Flat-shaded color, also used when no texture is available.
    pub color: u32,
    /// Index of the mesh whose texture this triangle samples.
    pub mesh_index: usize,
}

impl Triangle {
    pub fn new(points: [Vec4; 3], texcoords: [Vec2; 3], color: u32, mesh_index: usize) -> Self {
        Self {
            points,
            texcoords,
            color,
            mesh_index,
        }
    }
}

/// Barycentric weights `[alpha, beta, gamma]` of `p` relative to triangle
/// `abc`.
///
/// Alpha and beta are ratios of sub-parallelogram areas to the area of the
/// parallelogram spanned by `abc`; gamma is `1 - alpha - beta`.
#[inline]
pub fn barycentric_weights(a: Vec2, b: Vec2, c: Vec2, p: Vec2) -> [f32; 3] {
    let ac = c - a;
    let ab = b - a;
    let pc = c - p;
    let pb = b - p;
    let ap = p - a;

    let area_abc = ac.cross(ab);
    let alpha = pc.cross(pb) / area_abc;
    let beta = ac.cross(ap) / area_abc;
    let gamma = 1.0 - alpha - beta;

    [alpha, beta, gamma]
}
