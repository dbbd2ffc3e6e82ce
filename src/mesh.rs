//! Triangle meshes: local-space vertices, indexed faces and an optional
//! texture, placed in the world by a [`Transform`].

use std::path::Path;

use tracing::{debug, info, warn};

use crate::colors;
use crate::error::{RenderError, Result};
use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;
use crate::texture::Texture;
use crate::transform::Transform;

/// A triangle defined by three 0-based indices into the mesh's vertices,
/// the texture coordinate of each corner, and a base ARGB color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Face {
    pub a: u32,
    pub b: u32,
    pub c: u32,
    pub a_uv: Vec2,
    pub b_uv: Vec2,
    pub c_uv: Vec2,
    pub color: u32,
}

impl Face {
    pub const fn new(indices: [u32; 3], uvs: [Vec2; 3], color: u32) -> Self {
        Self {
            a: indices[0],
            b: indices[1],
            c: indices[2],
            a_uv: uvs[0],
            b_uv: uvs[1],
            c_uv: uvs[2],
            color,
        }
    }

    pub fn indices(&self) -> [u32; 3] {
        [self.a, self.b, self.c]
    }

    pub fn uvs(&self) -> [Vec2; 3] {
        [self.a_uv, self.b_uv, self.c_uv]
    }
}

pub const CUBE_VERTICES: [Vec3; 8] = [
    Vec3::new(-1.0, -1.0, -1.0),
    Vec3::new(-1.0, 1.0, -1.0),
    Vec3::new(1.0, 1.0, -1.0),
    Vec3::new(1.0, -1.0, -1.0),
    Vec3::new(1.0, 1.0, 1.0),
    Vec3::new(1.0, -1.0, 1.0),
    Vec3::new(-1.0, 1.0, 1.0),
    Vec3::new(-1.0, -1.0, 1.0),
];

const UV_00: Vec2 = Vec2::new(0.0, 0.0);
const UV_01: Vec2 = Vec2::new(0.0, 1.0);
const UV_10: Vec2 = Vec2::new(1.0, 0.0);
const UV_11: Vec2 = Vec2::new(1.0, 1.0);

/// Two clockwise triangles per side; every face normal points outward.
pub const CUBE_FACES: [Face; 12] = [
    // Front
    Face::new([0, 1, 2], [UV_01, UV_00, UV_10], colors::FACE),
    Face::new([0, 2, 3], [UV_01, UV_10, UV_11], colors::FACE),
    // Right
    Face::new([3, 2, 4], [UV_01, UV_00, UV_10], colors::FACE),
    Face::new([3, 4, 5], [UV_01, UV_10, UV_11], colors::FACE),
    // Back
    Face::new([5, 4, 6], [UV_01, UV_00, UV_10], colors::FACE),
    Face::new([5, 6, 7], [UV_01, UV_10, UV_11], colors::FACE),
    // Left
    Face::new([7, 6, 1], [UV_01, UV_00, UV_10], colors::FACE),
    Face::new([7, 1, 0], [UV_01, UV_10, UV_11], colors::FACE),
    // Top
    Face::new([1, 6, 4], [UV_01, UV_00, UV_10], colors::FACE),
    Face::new([1, 4, 2], [UV_01, UV_10, UV_11], colors::FACE),
    // Bottom
    Face::new([5, 7, 0], [UV_01, UV_00, UV_10], colors::FACE),
    Face::new([5, 0, 3], [UV_01, UV_10, UV_11], colors::FACE),
];

/// A mesh instance.
///
/// Vertices and faces are fixed once the mesh is built; only the transform
/// changes from frame to frame.
#[derive(Debug, Clone)]
pub struct Mesh {
    name: String,
    vertices: Vec<Vec3>,
    faces: Vec<Face>,
    texture: Option<Texture>,
    transform: Transform,
}

impl Mesh {
    /// Builds a mesh, checking that every face index resolves to a vertex.
    pub fn new(name: impl Into<String>, vertices: Vec<Vec3>, faces: Vec<Face>) -> Result<Self> {
        for (face_index, face) in faces.iter().enumerate() {
            if let Some(&index) = face
                .indices()
                .iter()
                .find(|&&i| i as usize >= vertices.len())
            {
                return Err(RenderError::FaceIndexOutOfBounds {
                    face: face_index,
                    index,
                    vertex_count: vertices.len(),
                });
            }
        }

        Ok(Self {
            name: name.into(),
            vertices,
            faces,
            texture: None,
            transform: Transform::default(),
        })
    }

    /// A 2x2x2 cube centered at the origin.
    pub fn cube() -> Self {
        Self {
            name: "cube".to_string(),
            vertices: CUBE_VERTICES.to_vec(),
            faces: CUBE_FACES.to_vec(),
            texture: None,
            transform: Transform::default(),
        }
    }

    /// Loads every object in an OBJ file into a single mesh.
    ///
    /// Polygons are triangulated and indices are converted to 0-based by the
    /// loader. Faces take their UVs from the file's texcoord table (or zero
    /// when it has none) and are colored white.
    pub fn from_obj<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let options = tobj::LoadOptions {
            triangulate: true,
            single_index: false,
            ..Default::default()
        };
        let (models, materials) = tobj::load_obj(path, &options)?;
        if let Err(e) = materials {
            debug!(path = %path.display(), "No materials loaded: {e}");
        }

        let mut vertices = Vec::new();
        let mut faces = Vec::new();

        for model in &models {
            let mesh = &model.mesh;
            let base = vertices.len() as u32;

            vertices.extend(
                mesh.positions
                    .chunks_exact(3)
                    .map(|p| Vec3::new(p[0], p[1], p[2])),
            );

            let uv_at = |corner: usize| -> Vec2 {
                mesh.texcoord_indices
                    .get(corner)
                    .and_then(|&ti| {
                        let ti = ti as usize * 2;
                        mesh.texcoords.get(ti..ti + 2)
                    })
                    .map(|uv| Vec2::new(uv[0], uv[1]))
                    .unwrap_or(Vec2::ZERO)
            };

            for (tri, idx) in mesh.indices.chunks_exact(3).enumerate() {
                let corner = tri * 3;
                faces.push(Face::new(
                    [base + idx[0], base + idx[1], base + idx[2]],
                    [uv_at(corner), uv_at(corner + 1), uv_at(corner + 2)],
                    colors::FACE,
                ));
            }

            debug!(
                object = %model.name,
                vertices = mesh.positions.len() / 3,
                triangles = mesh.indices.len() / 3,
                "Loaded OBJ object"
            );
        }

        if faces.is_empty() {
            warn!(path = %path.display(), "OBJ file contains no faces");
        }

        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mesh = Self::new(name, vertices, faces)?;
        info!(
            mesh = %mesh.name,
            vertices = mesh.vertices.len(),
            faces = mesh.faces.len(),
            "Loaded mesh"
        );
        Ok(mesh)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Local-space positions of a face's three corners.
    ///
    /// Indices were validated when the mesh was built.
    pub fn face_vertices(&self, face: &Face) -> [Vec3; 3] {
        face.indices().map(|i| self.vertices[i as usize])
    }

    // ============ Texture ============

    pub fn texture(&self) -> Option<&Texture> {
        self.texture.as_ref()
    }

    pub fn set_texture(&mut self, texture: Texture) {
        self.texture = Some(texture);
    }

    pub fn with_texture(mut self, texture: Texture) -> Self {
        self.texture = Some(texture);
        self
    }

    // ============ Transform ============

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_normals_point_outward() {
        let cube = Mesh::cube();
        for face in cube.faces() {
            let [a, b, c] = cube.face_vertices(face);
            let normal = (b - a).cross(c - a);
            let centroid = (a + b + c) / 3.0;
            assert!(normal.dot(centroid) > 0.0, "face {face:?} is inward");
        }
    }

    #[test]
    fn new_rejects_out_of_range_index() {
        let faces = vec![Face::new([0, 1, 3], [Vec2::ZERO; 3], colors::FACE)];
        let vertices = vec![Vec3::ZERO, Vec3::ONE, Vec3::UP];
        let err = Mesh::new("bad", vertices, faces).unwrap_err();
        assert!(matches!(
            err,
            RenderError::FaceIndexOutOfBounds {
                face: 0,
                index: 3,
                vertex_count: 3
            }
        ));
    }

    #[test]
    fn empty_mesh_is_valid() {
        let mesh = Mesh::new("empty", vec![], vec![]).unwrap();
        assert!(mesh.faces().is_empty());
        assert!(mesh.texture().is_none());
    }
}
