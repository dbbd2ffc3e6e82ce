//! Directional lighting for flat shading.

use crate::colors::{ALPHA_MASK, BLUE_MASK, GREEN_MASK, RED_MASK};
use crate::math::vec3::Vec3;

/// A directional light that illuminates the scene uniformly from a direction.
///
/// All rays are parallel, so a single intensity is computed per face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    /// The direction the light travels (not where it comes from).
    pub direction: Vec3,
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self::new(Vec3::FORWARD)
    }
}

impl DirectionalLight {
    pub fn new(direction: Vec3) -> Self {
        Self { direction }
    }

    /// Intensity factor for a face with the given unit normal.
    ///
    /// The result is not clamped; [`apply_intensity`] clamps it when the
    /// color is shaded.
    pub fn intensity(&self, normal: Vec3) -> f32 {
        -normal.dot(self.direction)
    }
}

/// Scales the R, G and B channels of an ARGB color by `factor`.
///
/// The factor is clamped to `[0, 1]`. Each channel is masked in place,
/// multiplied, then masked again so anything that spills into a
/// neighbouring byte is discarded. Alpha is never modified.
pub fn apply_intensity(color: u32, factor: f32) -> u32 {
    let factor = factor.clamp(0.0, 1.0);

    let a = color & ALPHA_MASK;
    let r = ((color & RED_MASK) as f32 * factor) as u32;
    let g = ((color & GREEN_MASK) as f32 * factor) as u32;
    let b = ((color & BLUE_MASK) as f32 * factor) as u32;

    a | (r & RED_MASK) | (g & GREEN_MASK) | (b & BLUE_MASK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direct_illumination() {
        // Light travelling +Z hits a face whose normal points back at it
        let light = DirectionalLight::new(Vec3::new(0.0, 0.0, 1.0));
        let normal = Vec3::new(0.0, 0.0, -1.0);
        assert!((light.intensity(normal) - 1.0).abs() < 0.001);
    }

    #[test]
    fn facing_away_is_negative() {
        let light = DirectionalLight::new(Vec3::new(0.0, 0.0, 1.0));
        assert!(light.intensity(Vec3::new(0.0, 0.0, 1.0)) < 0.0);
    }

    #[test]
    fn intensity_is_clamped() {
        let color = 0xFF80C0FF;
        assert_eq!(apply_intensity(color, -0.5), apply_intensity(color, 0.0));
        assert_eq!(apply_intensity(color, 1.5), apply_intensity(color, 1.0));
        assert_eq!(apply_intensity(color, 1.0), color);
        assert_eq!(apply_intensity(color, 0.0), 0xFF000000);
    }

    #[test]
    fn alpha_is_untouched() {
        for factor in [-1.0, 0.0, 0.25, 0.5, 0.9, 1.0, 2.0] {
            assert_eq!(apply_intensity(0x7F123456, factor) & ALPHA_MASK, 0x7F000000);
        }
    }

    #[test]
    fn half_intensity_masks_after_multiply() {
        // 0xFF0000 * 0.5 = 0x7F8000; the stray bits below the red byte are
        // masked away instead of leaking into green.
        assert_eq!(apply_intensity(0xFFFF0000, 0.5), 0xFF7F0000);
        assert_eq!(apply_intensity(0xFFFFFFFF, 0.5), 0xFF7F7F7F);
    }
}
