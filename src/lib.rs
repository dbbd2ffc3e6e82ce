//! A CPU-based software triangle rasterizer.
//!
//! Meshes are transformed to view space, backface culled, clipped against
//! the view frustum, projected and scan-converted into an ARGB color buffer
//! with a depth buffer. SDL2 is used only by the optional `window` feature
//! to present the result.
//!
//! # Quick Start
//!
//! ```ignore
//! use trirast::prelude::*;
//!
//! let mut engine = Engine::new(EngineConfig::default());
//! let mut cube = Mesh::cube();
//! cube.transform_mut().set_translation(0.0, 0.0, 5.0);
//! engine.add_mesh(cube);
//! engine.update();
//! engine.render();
//! let pixels: &[u32] = engine.color_buffer();
//! ```

pub mod camera;
pub mod clipper;
pub mod colors;
pub mod config;
pub mod engine;
pub mod error;
pub mod light;
pub mod math;
pub mod mesh;
pub mod pipeline;
pub mod projection;
pub mod render;
pub mod texture;
pub mod transform;
#[cfg(feature = "window")]
pub mod window;

// Re-export commonly needed types at crate root for convenience
pub use camera::Camera;
pub use config::{CullMode, EngineConfig, RenderMode};
pub use engine::Engine;
pub use error::{RenderError, Result};
pub use mesh::{Face, Mesh};
pub use pipeline::FrameStats;
pub use projection::Projection;
pub use texture::Texture;
pub use transform::Transform;

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use trirast::prelude::*;
/// ```
pub mod prelude {
    // Engine
    pub use crate::config::{CullMode, EngineConfig, RenderMode};
    pub use crate::engine::Engine;
    pub use crate::pipeline::FrameStats;

    // Scene
    pub use crate::camera::Camera;
    pub use crate::light::DirectionalLight;
    pub use crate::mesh::{Face, Mesh};
    pub use crate::projection::Projection;
    pub use crate::texture::Texture;
    pub use crate::transform::Transform;

    // Math
    pub use crate::math::mat4::Mat4;
    pub use crate::math::vec2::Vec2;
    pub use crate::math::vec3::Vec3;
    pub use crate::math::vec4::Vec4;

    // Window & Input
    #[cfg(feature = "window")]
    pub use crate::window::{FrameLimiter, Key, Window, WindowEvent};
}
