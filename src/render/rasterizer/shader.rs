//! Pixel shaders for triangle rasterization.
//!
//! The rasterizer handles span walking, barycentric weights and the depth
//! test; a shader only turns the weights of a covered pixel into a color.

use super::scanline::ScreenVertex;
use crate::texture::Texture;

/// Trait for per-pixel shading computations.
///
/// # Arguments passed to `shade`
///
/// * `weights` - barycentric weights `[alpha, beta, gamma]` of the pixel
///   against the y-sorted triangle vertices
/// * `reciprocal_w` - the interpolated `1/w` at the pixel, used to undo the
///   perspective foreshortening of interpolated attributes
pub trait PixelShader {
    fn shade(&self, weights: [f32; 3], reciprocal_w: f32) -> u32;
}

/// Flat shader - returns a constant color for all pixels.
pub struct FlatShader {
    color: u32,
}

impl FlatShader {
    pub fn new(color: u32) -> Self {
        Self { color }
    }
}

impl PixelShader for FlatShader {
    #[inline]
    fn shade(&self, _weights: [f32; 3], _reciprocal_w: f32) -> u32 {
        self.color
    }
}

/// Texture shader - perspective-correct nearest-neighbour texture lookup.
///
/// u/w and v/w are interpolated linearly in screen space and divided by the
/// interpolated 1/w to recover the true texture coordinate.
pub struct TextureShader<'a> {
    texture: &'a Texture,
    u_over_w: [f32; 3],
    v_over_w: [f32; 3],
}

impl<'a> TextureShader<'a> {
    /// Builds the shader from y-sorted vertices.
    ///
    /// `v` is flipped (`1 - v`) here so textures with a top-left origin map
    /// upright.
    pub(super) fn new(texture: &'a Texture, vertices: &[ScreenVertex; 3]) -> Self {
        Self {
            texture,
            u_over_w: vertices.map(|v| v.uv.x / v.w),
            v_over_w: vertices.map(|v| (1.0 - v.uv.y) / v.w),
        }
    }
}

impl PixelShader for TextureShader<'_> {
    #[inline]
    fn shade(&self, weights: [f32; 3], reciprocal_w: f32) -> u32 {
        let [alpha, beta, gamma] = weights;
        let u = self.u_over_w[0] * alpha + self.u_over_w[1] * beta + self.u_over_w[2] * gamma;
        let v = self.v_over_w[0] * alpha + self.v_over_w[1] * beta + self.v_over_w[2] * gamma;
        self.texture.sample(u / reciprocal_w, v / reciprocal_w)
    }
}
