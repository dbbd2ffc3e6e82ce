//! Low-level rendering primitives.
//!
//! Provides the [`Renderer`] struct which owns the color and depth buffers
//! and implements basic 2D drawing operations: grid dots, rectangles, lines
//! and triangle wireframes.

use super::framebuffer::{FrameBuffer, FAR_DEPTH};
use super::rasterizer::Triangle;
use crate::colors;

pub struct Renderer {
    color_buffer: Vec<u32>,
    depth_buffer: Vec<f32>,
    width: u32,
    height: u32,
}

impl Renderer {
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width * height) as usize;
        Self {
            color_buffer: vec![colors::BACKGROUND; size],
            depth_buffer: vec![FAR_DEPTH; size],
            width,
            height,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        let size = (width * height) as usize;
        self.color_buffer = vec![colors::BACKGROUND; size];
        self.depth_buffer = vec![FAR_DEPTH; size];
        self.width = width;
        self.height = height;
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn clear(&mut self, color: u32) {
        self.color_buffer.fill(color);
    }

    /// Reset every depth to [`FAR_DEPTH`] for a new frame.
    #[inline]
    pub fn clear_depth(&mut self) {
        self.depth_buffer.fill(FAR_DEPTH);
    }

    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            let index = (y as u32 * self.width + x as u32) as usize;
            self.color_buffer[index] = color;
        }
    }

    /// Draws a dot at every pixel whose x and y are both multiples of
    /// `spacing`.
    pub fn draw_grid(&mut self, spacing: u32, color: u32) {
        let step = spacing.max(1) as usize;
        for y in (0..self.height as i32).step_by(step) {
            for x in (0..self.width as i32).step_by(step) {
                self.set_pixel(x, y, color);
            }
        }
    }

    #[inline]
    pub fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: u32) {
        for dy in 0..height {
            for dx in 0..width {
                self.set_pixel(x + dx, y + dy, color);
            }
        }
    }

    /// Draws the three edges of a screen-space triangle. No depth test.
    pub fn draw_triangle_wireframe(&mut self, triangle: &Triangle, color: u32) {
        let [p0, p1, p2] = triangle.points;
        for (a, b) in [(p0, p1), (p1, p2), (p2, p0)] {
            self.draw_line(a.x as i32, a.y as i32, b.x as i32, b.y as i32, color);
        }
    }

    /// Draws a line with the DDA algorithm, both end points included.
    ///
    /// Steps once per pixel along the longer axis and advances the shorter
    /// axis by a fractional increment, rounding to the nearest pixel. Only
    /// the steps whose long-axis coordinate lands inside the buffer are
    /// walked, so far off-screen end points cost nothing.
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
        let dx = i64::from(x1) - i64::from(x0);
        let dy = i64::from(y1) - i64::from(y0);
        let side_length = dx.abs().max(dy.abs());

        if side_length == 0 {
            self.set_pixel(x0, y0, color);
            return;
        }

        let x_increment = dx as f64 / side_length as f64;
        let y_increment = dy as f64 / side_length as f64;

        let (major_start, major_delta, major_extent) = if dx.abs() >= dy.abs() {
            (i64::from(x0), dx, i64::from(self.width))
        } else {
            (i64::from(y0), dy, i64::from(self.height))
        };
        let (first, last) = if major_delta > 0 {
            (-major_start, major_extent - 1 - major_start)
        } else {
            (major_start - (major_extent - 1), major_start)
        };

        for step in first.max(0)..=last.min(side_length) {
            let x = f64::from(x0) + step as f64 * x_increment;
            let y = f64::from(y0) + step as f64 * y_increment;
            self.set_pixel(x.round() as i32, y.round() as i32, color);
        }
    }

    pub fn color_buffer(&self) -> &[u32] {
        &self.color_buffer
    }

    pub fn depth_buffer(&self) -> &[f32] {
        &self.depth_buffer
    }

    /// The color buffer as raw bytes, for uploading to a streaming texture.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.color_buffer)
    }

    /// Get a mutable FrameBuffer view into the color and depth buffers.
    pub fn as_framebuffer(&mut self) -> FrameBuffer<'_> {
        FrameBuffer::new(
            &mut self.color_buffer,
            &mut self.depth_buffer,
            self.width,
            self.height,
        )
    }
}
