//! Per-instance placement of a mesh in the world.
//!
//! A [`Transform`] holds the scale, Euler rotation and translation of one
//! mesh instance. Setters return `&mut Self` so edits chain:
//!
//! ```ignore
//! mesh.transform_mut()
//!     .set_translation(5.0, 2.0, 0.0)
//!     .rotate(Vec3::new(0.0, 0.1, 0.0))
//!     .set_uniform_scale(2.0);
//! ```

use crate::math::{mat4::Mat4, vec3::Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    scale: Vec3,
    rotation: Vec3, // radians around x, y and z
    translation: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::new(Vec3::ONE, Vec3::ZERO, Vec3::ZERO)
    }
}

impl Transform {
    pub fn new(scale: Vec3, rotation: Vec3, translation: Vec3) -> Self {
        Self {
            scale,
            rotation,
            translation,
        }
    }

    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: Vec3) -> &mut Self {
        self.scale = scale;
        self
    }

    pub fn set_uniform_scale(&mut self, s: f32) -> &mut Self {
        self.scale = Vec3::new(s, s, s);
        self
    }

    /// Euler angles in radians.
    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    pub fn set_rotation(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.rotation = Vec3::new(x, y, z);
        self
    }

    /// Adds `delta` to each Euler angle, e.g. to spin a mesh every frame.
    pub fn rotate(&mut self, delta: Vec3) -> &mut Self {
        self.rotation = self.rotation + delta;
        self
    }

    pub fn translation(&self) -> Vec3 {
        self.translation
    }

    pub fn set_translation(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.translation = Vec3::new(x, y, z);
        self
    }

    pub fn translate(&mut self, delta: Vec3) -> &mut Self {
        self.translation = self.translation + delta;
        self
    }

    /// The local-to-world matrix.
    ///
    /// `Translation * RotationZ * RotationY * RotationX * Scale * Identity`:
    /// a vertex is scaled first, then rotated about x, y and z in turn, and
    /// translated last.
    pub fn world_matrix(&self) -> Mat4 {
        let Vec3 { x: rx, y: ry, z: rz } = self.rotation;
        Mat4::translation(self.translation.x, self.translation.y, self.translation.z)
            * Mat4::rotation_z(rz)
            * Mat4::rotation_y(ry)
            * Mat4::rotation_x(rx)
            * Mat4::scaling(self.scale.x, self.scale.y, self.scale.z)
            * Mat4::identity()
    }
}
