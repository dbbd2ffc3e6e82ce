use std::path::Path;

use tracing::debug;

use crate::colors::pack_argb;
use crate::error::{RenderError, Result};

/// Represents a 2D texture for texture mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    data: Vec<u32>, // The pixel data of the texture in ARGB format.
    width: u32,     // The width of the texture in pixels.
    height: u32,    // The height of the texture in pixels.
}

impl Texture {
    /// Wraps ARGB texels laid out row by row from the top-left corner.
    pub fn from_pixels(width: u32, height: u32, data: Vec<u32>) -> Result<Self> {
        if width == 0 || height == 0 || data.len() != (width as usize) * (height as usize) {
            return Err(RenderError::TextureSize {
                width,
                height,
                len: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    // Load a texture from an image file (PNG, JPG, etc.)
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let img = image::open(path.as_ref())?.to_rgba8();
        let (width, height) = img.dimensions();

        // Convert RGBA bytes to ARGB u32
        let data: Vec<u32> = img
            .pixels()
            .map(|p| {
                let [r, g, b, a] = p.0;
                pack_argb(a, r, g, b)
            })
            .collect();

        debug!(path = %path.as_ref().display(), width, height, "Loaded texture");
        Self::from_pixels(width, height, data)
    }

    /// Generates a two-color checkerboard with square cells of `cell` texels.
    pub fn checkerboard(width: u32, height: u32, cell: u32, even: u32, odd: u32) -> Self {
        let (width, height, cell) = (width.max(1), height.max(1), cell.max(1));
        let data = (0..height)
            .flat_map(|y| {
                (0..width).map(move |x| {
                    if ((x / cell) + (y / cell)) % 2 == 0 {
                        even
                    } else {
                        odd
                    }
                })
            })
            .collect();
        Self {
            data,
            width,
            height,
        }
    }

    /// Sample the texture at UV coordinates using nearest-neighbor filtering.
    ///
    /// UVs outside `[0, 1)` wrap: the texel column is
    /// `|trunc(u * width)| mod width` and likewise for rows. `v` is expected
    /// to already be in top-left-origin texture space.
    #[inline]
    pub fn sample(&self, u: f32, v: f32) -> u32 {
        let x = ((u * self.width as f32) as i32).unsigned_abs() % self.width;
        let y = ((v * self.height as f32) as i32).unsigned_abs() % self.height;

        // Sample from flat array: index = y * width + x
        self.data[(y * self.width + x) as usize]
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A texture whose texel value encodes its own column and row.
    fn coordinate_texture(width: u32, height: u32) -> Texture {
        let data = (0..height)
            .flat_map(|y| (0..width).map(move |x| (y << 16) | x))
            .collect();
        Texture::from_pixels(width, height, data).unwrap()
    }

    #[test]
    fn uv_wraps_around() {
        let tex = coordinate_texture(256, 4);
        assert_eq!(tex.sample(1.2, 0.0), tex.sample(0.2, 0.0));
        assert_eq!(tex.sample(0.2, 0.0) & 0xFFFF, 51);
    }

    #[test]
    fn negative_uv_uses_absolute_value() {
        let tex = coordinate_texture(256, 4);
        assert_eq!(tex.sample(-0.2, 0.0), tex.sample(0.2, 0.0));
    }

    #[test]
    fn rows_follow_v() {
        let tex = coordinate_texture(4, 4);
        assert_eq!(tex.sample(0.0, 0.0), 0);
        assert_eq!(tex.sample(0.0, 0.5) >> 16, 2);
        assert_eq!(tex.sample(0.0, 1.0) >> 16, 0);
    }

    #[test]
    fn from_pixels_rejects_wrong_length() {
        let err = Texture::from_pixels(2, 2, vec![0; 3]).unwrap_err();
        assert!(matches!(err, RenderError::TextureSize { len: 3, .. }));
        assert!(Texture::from_pixels(0, 0, vec![]).is_err());
    }

    #[test]
    fn checkerboard_alternates() {
        let tex = Texture::checkerboard(4, 4, 2, 1, 2);
        assert_eq!(tex.sample(0.0, 0.0), 1);
        assert_eq!(tex.sample(0.5, 0.0), 2);
        assert_eq!(tex.sample(0.5, 0.5), 1);
    }
}
