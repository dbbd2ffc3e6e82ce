//! Frame buffer abstraction for 2D pixel access.
//!
//! Provides a safe view into color and depth buffers with bounds-checked access.
//! The depth buffer enables hidden surface removal via the z-buffer algorithm.

/// Depth reported for pixels outside the buffer, and the value every pixel
/// is reset to at the start of a frame.
pub const FAR_DEPTH: f32 = 1.0;

/// A view into color and depth buffers.
///
/// Wraps 1D slices with width/height metadata to enable safe 2D pixel access.
/// This is a borrowed view, not an owning type - it's meant to be created
/// temporarily when you need to pass buffers + dimensions together.
///
/// # Depth Buffer
///
/// Depth values are `1 - 1/w`, where w is the view-space depth. Smaller
/// values are closer to the camera; [`FAR_DEPTH`] is the farthest.
pub struct FrameBuffer<'a> {
    color_buffer: &'a mut [u32],
    depth_buffer: &'a mut [f32],
    width: u32,
    height: u32,
}

impl<'a> FrameBuffer<'a> {
    /// Create a new FrameBuffer view from buffer slices and dimensions.
    pub fn new(
        color_buffer: &'a mut [u32],
        depth_buffer: &'a mut [f32],
        width: u32,
        height: u32,
    ) -> Self {
        debug_assert_eq!(
            color_buffer.len(),
            (width * height) as usize,
            "Color buffer size doesn't match dimensions"
        );
        debug_assert_eq!(
            depth_buffer.len(),
            (width * height) as usize,
            "Depth buffer size doesn't match dimensions"
        );
        Self {
            color_buffer,
            depth_buffer,
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some((y as u32 * self.width + x as u32) as usize)
        } else {
            None
        }
    }

    /// Set a pixel without depth testing. Out-of-bounds writes are ignored.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if let Some(idx) = self.index(x, y) {
            self.color_buffer[idx] = color;
        }
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u32> {
        self.index(x, y).map(|idx| self.color_buffer[idx])
    }

    /// Stored depth at (x, y), or [`FAR_DEPTH`] outside the buffer.
    #[inline]
    pub fn depth(&self, x: i32, y: i32) -> f32 {
        self.index(x, y)
            .map_or(FAR_DEPTH, |idx| self.depth_buffer[idx])
    }

    /// Overwrite the depth at (x, y). Out-of-bounds writes are ignored.
    #[inline]
    pub fn set_depth(&mut self, x: i32, y: i32, depth: f32) {
        if let Some(idx) = self.index(x, y) {
            self.depth_buffer[idx] = depth;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_access_is_ignored() {
        let mut color = vec![0u32; 4];
        let mut depth = vec![FAR_DEPTH; 4];
        let mut fb = FrameBuffer::new(&mut color, &mut depth, 2, 2);

        fb.set_pixel(-1, 0, 0xFFFFFFFF);
        fb.set_pixel(2, 0, 0xFFFFFFFF);
        fb.set_pixel(0, 2, 0xFFFFFFFF);
        fb.set_depth(5, 5, 0.0);

        assert_eq!(fb.get_pixel(-1, 0), None);
        assert_eq!(fb.depth(-1, -1), FAR_DEPTH);
        assert_eq!(fb.depth(2, 0), FAR_DEPTH);
        drop(fb);
        assert!(color.iter().all(|&c| c == 0));
        assert!(depth.iter().all(|&d| d == FAR_DEPTH));
    }

    #[test]
    fn in_bounds_access_is_row_major() {
        let mut color = vec![0u32; 6];
        let mut depth = vec![FAR_DEPTH; 6];
        let mut fb = FrameBuffer::new(&mut color, &mut depth, 3, 2);

        fb.set_pixel(2, 1, 7);
        fb.set_depth(2, 1, 0.25);
        assert_eq!(fb.get_pixel(2, 1), Some(7));
        assert_eq!(fb.depth(2, 1), 0.25);
        drop(fb);
        assert_eq!(color[5], 7);
        assert_eq!(depth[5], 0.25);
    }
}
