//! Scanline-based triangle rasterization.
//!
//! Triangles are rasterized with the classic flat-bottom/flat-top
//! decomposition, one horizontal span at a time.
//!
//! # Algorithm Overview
//!
//! 1. **Snap and sort** the vertices: x and y are truncated to whole pixels
//!    and the corners sorted by y (top to bottom in screen space)
//! 2. **Decompose** the triangle at the middle vertex's row
//! 3. **Walk spans** between the two active edges, computing each pixel's
//!    barycentric weights, interpolated `1/w` and depth
//!
//! ```text
//!        v0                   v0
//!        /\                   /\
//!       /  \                 /  \
//!      /    \       =>      /----\<- split at v1.y
//!     /      \             v1   split
//!    /________\             \    /
//!   v1        v2             \  /
//!                             \/
//!                             v2
//!
//!   General triangle      Flat-bottom (top) + Flat-top (bottom)
//! ```
//!
//! # Inverse Slope Method
//!
//! Edges are tracked with inverse slopes, `dx / dy`, so the x position of an
//! edge on row `y` is `x_start + inv_slope * (y - y_start)`. Spans include
//! their left end and exclude their right end.
//!
//! # Depth
//!
//! Depth is `1 - interp(1/w)`. A pixel is written only when its depth is
//! strictly less than what the depth buffer already holds, so drawing the
//! same triangle twice leaves the buffers unchanged.

use super::shader::{FlatShader, PixelShader, TextureShader};
use super::{barycentric_weights, Triangle};
use crate::math::vec2::Vec2;
use crate::render::framebuffer::FrameBuffer;
use crate::texture::Texture;

/// A triangle corner snapped to the pixel grid.
#[derive(Clone, Copy, Debug)]
pub(super) struct ScreenVertex {
    pub x: i32,
    pub y: i32,
    pub w: f32,
    pub uv: Vec2,
}

impl ScreenVertex {
    #[inline]
    fn position(&self) -> Vec2 {
        Vec2::new(self.x as f32, self.y as f32)
    }
}

/// Scanline-based triangle rasterizer.
///
/// Flat and textured fills share one traversal; only the
/// [`PixelShader`] differs.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScanlineRasterizer;

impl ScanlineRasterizer {
    /// Creates a new scanline rasterizer instance.
    pub fn new() -> Self {
        Self
    }

    /// Fills a triangle with a single color, depth tested.
    pub fn fill_triangle(&self, triangle: &Triangle, buffer: &mut FrameBuffer, color: u32) {
        let vertices = Self::sorted_vertices(triangle);
        Self::rasterize(&vertices, &FlatShader::new(color), buffer);
    }

    /// Fills a triangle with perspective-correct texels, depth tested.
    pub fn fill_textured_triangle(
        &self,
        triangle: &Triangle,
        buffer: &mut FrameBuffer,
        texture: &Texture,
    ) {
        let vertices = Self::sorted_vertices(triangle);
        let shader = TextureShader::new(texture, &vertices);
        Self::rasterize(&vertices, &shader, buffer);
    }

    /// Snaps the triangle's corners to whole pixels and sorts them by y.
    ///
    /// Three compare-and-swaps suffice for three elements. After sorting:
    /// `v0.y <= v1.y <= v2.y`
    fn sorted_vertices(triangle: &Triangle) -> [ScreenVertex; 3] {
        let mut v: [ScreenVertex; 3] = std::array::from_fn(|i| {
            let p = triangle.points[i];
            ScreenVertex {
                x: p.x as i32,
                y: p.y as i32,
                w: p.w,
                uv: triangle.texcoords[i],
            }
        });

        if v[0].y > v[1].y {
            v.swap(0, 1);
        }
        if v[1].y > v[2].y {
            v.swap(1, 2);
        }
        if v[0].y > v[1].y {
            v.swap(0, 1);
        }
        v
    }

    fn rasterize<S: PixelShader>(v: &[ScreenVertex; 3], shader: &S, buffer: &mut FrameBuffer) {
        let [v0, v1, v2] = *v;
        let last_row = buffer.height() as i32 - 1;
        let inverse_w = v.map(|p| 1.0 / p.w);
        let positions = v.map(|p| p.position());

        // Flat-bottom half: rows v0.y ..= v1.y
        if v1.y != v0.y {
            let inv_slope_1 = Self::inverse_slope(v0, v1);
            let inv_slope_2 = Self::inverse_slope(v0, v2);

            for y in v0.y.max(0)..=v1.y.min(last_row) {
                let x_start = Self::edge_x(v1, inv_slope_1, y);
                let x_end = Self::edge_x(v0, inv_slope_2, y);
                Self::draw_span(y, x_start, x_end, &positions, &inverse_w, shader, buffer);
            }
        }

        // Flat-top half: rows v1.y ..= v2.y
        if v2.y != v1.y {
            let inv_slope_1 = Self::inverse_slope(v1, v2);
            let inv_slope_2 = Self::inverse_slope(v0, v2);

            for y in v1.y.max(0)..=v2.y.min(last_row) {
                let x_start = Self::edge_x(v1, inv_slope_1, y);
                let x_end = Self::edge_x(v0, inv_slope_2, y);
                Self::draw_span(y, x_start, x_end, &positions, &inverse_w, shader, buffer);
            }
        }
    }

    /// `dx / |dy|` of the edge `from -> to`.
    ///
    /// Differences are taken in floating point: snapped coordinates span the
    /// whole `i32` range and their integer difference can overflow.
    #[inline]
    fn inverse_slope(from: ScreenVertex, to: ScreenVertex) -> f32 {
        (to.x as f32 - from.x as f32) / (to.y as f32 - from.y as f32).abs()
    }

    /// The x position on row `y` of the edge through `origin`.
    #[inline]
    fn edge_x(origin: ScreenVertex, inv_slope: f32, y: i32) -> i32 {
        (origin.x as f32 + (y as f32 - origin.y as f32) * inv_slope) as i32
    }

    /// Shades the pixels `x_start..x_end` of row `y`, in either edge order.
    #[inline]
    fn draw_span<S: PixelShader>(
        y: i32,
        x_start: i32,
        x_end: i32,
        positions: &[Vec2; 3],
        inverse_w: &[f32; 3],
        shader: &S,
        buffer: &mut FrameBuffer,
    ) {
        let (x_start, x_end) = if x_end < x_start {
            (x_end, x_start)
        } else {
            (x_start, x_end)
        };
        let [a, b, c] = *positions;

        for x in x_start.max(0)..x_end.min(buffer.width() as i32) {
            let weights = barycentric_weights(a, b, c, Vec2::new(x as f32, y as f32));
            let [alpha, beta, gamma] = weights;
            let reciprocal_w = inverse_w[0] * alpha + inverse_w[1] * beta + inverse_w[2] * gamma;

            // Degenerate triangles produce NaN here and fail the comparison.
            let depth = 1.0 - reciprocal_w;
            if depth < buffer.depth(x, y) {
                buffer.set_pixel(x, y, shader.shade(weights, reciprocal_w));
                buffer.set_depth(x, y, depth);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vec4::Vec4;
    use crate::render::framebuffer::FAR_DEPTH;
    use approx::assert_relative_eq;

    const W: u32 = 32;
    const H: u32 = 32;

    fn buffers() -> (Vec<u32>, Vec<f32>) {
        (vec![0; (W * H) as usize], vec![FAR_DEPTH; (W * H) as usize])
    }

    fn triangle(w: f32) -> Triangle {
        Triangle::new(
            [
                Vec4::new(2.0, 2.0, 0.5, w),
                Vec4::new(28.0, 4.0, 0.5, w),
                Vec4::new(10.0, 28.0, 0.5, w),
            ],
            [Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)],
            0xFFFF0000,
            0,
        )
    }

    #[test]
    fn fill_covers_interior_and_records_depth() {
        let (mut color, mut depth) = buffers();
        let mut fb = FrameBuffer::new(&mut color, &mut depth, W, H);
        ScanlineRasterizer::new().fill_triangle(&triangle(4.0), &mut fb, 0xFFFF0000);

        assert_eq!(fb.get_pixel(12, 10), Some(0xFFFF0000));
        assert_relative_eq!(fb.depth(12, 10), 0.75, epsilon = 1e-5);
        // Outside the triangle.
        assert_eq!(fb.get_pixel(30, 30), Some(0));
        assert_eq!(fb.depth(30, 30), FAR_DEPTH);
    }

    #[test]
    fn drawing_twice_is_idempotent() {
        let (mut color, mut depth) = buffers();
        let raster = ScanlineRasterizer::new();
        {
            let mut fb = FrameBuffer::new(&mut color, &mut depth, W, H);
            raster.fill_triangle(&triangle(4.0), &mut fb, 0xFFFF0000);
        }
        let (first_color, first_depth) = (color.clone(), depth.clone());
        {
            let mut fb = FrameBuffer::new(&mut color, &mut depth, W, H);
            raster.fill_triangle(&triangle(4.0), &mut fb, 0xFF00FF00);
        }
        assert_eq!(color, first_color);
        assert_eq!(depth, first_depth);
    }

    #[test]
    fn nearer_triangle_wins_regardless_of_order() {
        let raster = ScanlineRasterizer::new();
        let near = triangle(2.0);
        let far = triangle(10.0);

        for order in [[&near, &far], [&far, &near]] {
            let (mut color, mut depth) = buffers();
            let mut fb = FrameBuffer::new(&mut color, &mut depth, W, H);
            for tri in order {
                let c = if tri.points[0].w < 5.0 { 0xFF0000FF } else { 0xFF00FF00 };
                raster.fill_triangle(tri, &mut fb, c);
            }
            assert_eq!(fb.get_pixel(12, 10), Some(0xFF0000FF));
        }
    }

    #[test]
    fn zero_height_triangle_draws_nothing() {
        let (mut color, mut depth) = buffers();
        let mut fb = FrameBuffer::new(&mut color, &mut depth, W, H);
        let flat = Triangle::new(
            [
                Vec4::new(2.0, 5.0, 0.5, 2.0),
                Vec4::new(20.0, 5.0, 0.5, 2.0),
                Vec4::new(12.0, 5.0, 0.5, 2.0),
            ],
            [Vec2::ZERO; 3],
            0xFFFFFFFF,
            0,
        );
        ScanlineRasterizer::new().fill_triangle(&flat, &mut fb, 0xFFFFFFFF);
        drop(fb);
        assert!(color.iter().all(|&c| c == 0));
    }

    #[test]
    fn offscreen_parts_are_skipped() {
        let (mut color, mut depth) = buffers();
        let mut fb = FrameBuffer::new(&mut color, &mut depth, W, H);
        let big = Triangle::new(
            [
                Vec4::new(-100.0, -100.0, 0.5, 2.0),
                Vec4::new(200.0, -90.0, 0.5, 2.0),
                Vec4::new(-90.0, 200.0, 0.5, 2.0),
            ],
            [Vec2::ZERO; 3],
            0xFFFFFFFF,
            0,
        );
        ScanlineRasterizer::new().fill_triangle(&big, &mut fb, 0xFFFFFFFF);
        assert_eq!(fb.get_pixel(0, 0), Some(0xFFFFFFFF));
        assert_eq!(fb.get_pixel(16, 16), Some(0xFFFFFFFF));
    }

    #[test]
    fn textured_fill_samples_texture() {
        let texture = Texture::checkerboard(8, 8, 8, 0xFF123456, 0xFF654321);
        let (mut color, mut depth) = buffers();
        let mut fb = FrameBuffer::new(&mut color, &mut depth, W, H);
        ScanlineRasterizer::new().fill_textured_triangle(&triangle(3.0), &mut fb, &texture);

        // A single-cell checkerboard is uniform.
        assert_eq!(fb.get_pixel(12, 10), Some(0xFF123456));
        assert_relative_eq!(fb.depth(12, 10), 1.0 - 1.0 / 3.0, epsilon = 1e-5);
    }

    #[test]
    fn textured_fill_flips_v() {
        // Top half of the texture is one color, bottom half the other.
        let mut data = vec![0xFFAAAAAA; 8];
        data.extend(vec![0xFFBBBBBB; 8]);
        let texture = Texture::from_pixels(4, 4, data).unwrap();

        let (mut color, mut depth) = buffers();
        let mut fb = FrameBuffer::new(&mut color, &mut depth, W, H);
        let tri = Triangle::new(
            [
                Vec4::new(0.0, 0.0, 0.5, 2.0),
                Vec4::new(31.0, 0.0, 0.5, 2.0),
                Vec4::new(0.0, 31.0, 0.5, 2.0),
            ],
            [Vec2::new(0.0, 0.1), Vec2::new(1.0, 0.1), Vec2::new(0.0, 0.9)],
            0,
            0,
        );
        ScanlineRasterizer::new().fill_textured_triangle(&tri, &mut fb, &texture);

        // Near the top edge v ~ 0.1, flipped to ~ 0.9 -> bottom rows.
        assert_eq!(fb.get_pixel(2, 1), Some(0xFFBBBBBB));
        // Near the bottom-left corner v ~ 0.9, flipped to ~ 0.1 -> top rows.
        assert_eq!(fb.get_pixel(1, 28), Some(0xFFAAAAAA));
    }

    #[test]
    fn huge_coordinates_do_not_overflow() {
        let (mut color, mut depth) = buffers();
        let mut fb = FrameBuffer::new(&mut color, &mut depth, W, H);
        let huge = Triangle::new(
            [
                Vec4::new(-2e9, 0.0, 0.5, 2.0),
                Vec4::new(2e9, 10.0, 0.5, 2.0),
                Vec4::new(10.0, 40.0, 0.5, 2.0),
            ],
            [Vec2::ZERO; 3],
            0xFFFFFFFF,
            0,
        );
        let raster = ScanlineRasterizer::new();
        raster.fill_triangle(&huge, &mut fb, 0xFFFFFFFF);
        raster.fill_textured_triangle(&huge, &mut fb, &Texture::checkerboard(2, 2, 1, 0, 0));
    }

    /// A texture one row high whose texel encodes its own column.
    fn column_texture(width: u32) -> Texture {
        Texture::from_pixels(width, 1, (0..width).map(|x| 0xFF000000 | x).collect()).unwrap()
    }

    #[test]
    fn texture_coordinates_are_perspective_correct() {
        let texture = column_texture(64);
        let (mut color, mut depth) = buffers();
        let mut fb = FrameBuffer::new(&mut color, &mut depth, W, H);
        // u runs 0 -> 1 along the top edge while w runs 1 -> 10.
        let tri = Triangle::new(
            [
                Vec4::new(0.0, 0.0, 0.5, 1.0),
                Vec4::new(30.0, 0.0, 0.5, 10.0),
                Vec4::new(0.0, 30.0, 0.5, 1.0),
            ],
            [Vec2::new(0.0, 0.5), Vec2::new(1.0, 0.5), Vec2::new(0.0, 0.5)],
            0,
            0,
        );
        ScanlineRasterizer::new().fill_textured_triangle(&tri, &mut fb, &texture);

        // At (10, 0) the weights are [2/3, 1/3, 0]:
        //   u = (1/3 * 1/10) / (2/3 + 1/3 * 1/10) = 1/21 -> column 3
        // whereas interpolating u directly gives 1/3 -> column 21.
        assert_eq!(fb.get_pixel(10, 0), Some(0xFF000003));
        assert_relative_eq!(fb.depth(10, 0), 1.0 - (2.0 / 3.0 + 1.0 / 30.0), epsilon = 1e-5);

        // At (20, 0): u = (2/30) / (1/3 + 2/30) = 1/6 -> column 10, not 42.
        assert_eq!(fb.get_pixel(20, 0), Some(0xFF00000A));
        assert_relative_eq!(fb.depth(20, 0), 1.0 - (1.0 / 3.0 + 2.0 / 30.0), epsilon = 1e-5);
    }
}
