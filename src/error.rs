//! Error types for asset loading and presentation.
//!
//! The per-frame pipeline never fails; only the edges of the crate (mesh and
//! texture loading, the optional window) return errors.

/// All error types surfaced by the renderer.
#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("failed to load OBJ: {0}")]
    Obj(#[from] tobj::LoadError),
    #[error("failed to load texture: {0}")]
    Image(#[from] image::ImageError),
    #[error("face {face} references vertex {index}, but the mesh has {vertex_count} vertices")]
    FaceIndexOutOfBounds {
        face: usize,
        index: u32,
        vertex_count: usize,
    },
    #[error("texture is {width}x{height} but {len} texels were supplied")]
    TextureSize { width: u32, height: u32, len: usize },
    #[error("window error: {0}")]
    Window(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RenderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_strings() {
        let e = RenderError::FaceIndexOutOfBounds {
            face: 3,
            index: 9,
            vertex_count: 8,
        };
        assert_eq!(
            e.to_string(),
            "face 3 references vertex 9, but the mesh has 8 vertices"
        );

        let e = RenderError::TextureSize {
            width: 2,
            height: 2,
            len: 3,
        };
        assert_eq!(e.to_string(), "texture is 2x2 but 3 texels were supplied");

        let e = RenderError::Window("no display".into());
        assert_eq!(e.to_string(), "window error: no display");
    }
}
