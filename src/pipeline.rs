//! Per-frame geometry pipeline.
//!
//! Each face of a mesh runs through the same fixed sequence:
//!
//! 1. **Transform** its corners to view space: `View * (World * v)`
//! 2. **Cull** it if it faces away from the camera
//! 3. **Clip** it against the view frustum, fanning the result back into
//!    triangles
//! 4. **Project** every triangle to screen space and shade it with the light
//! 5. **Collect** it into the bounded render list
//!
//! Nothing here fails: faces that cull, clip away or overflow the render
//! list are counted in [`FrameStats`] and skipped.

use crate::clipper::{Polygon, ViewFrustum};
use crate::config::CullMode;
use crate::light::{apply_intensity, DirectionalLight};
use crate::math::mat4::Mat4;
use crate::math::vec3::Vec3;
use crate::math::vec4::Vec4;
use crate::mesh::Mesh;
use crate::render::{RenderList, Triangle};

/// Everything the pipeline reads while processing one frame.
#[derive(Debug, Clone)]
pub struct FrameContext<'a> {
    pub view: Mat4,
    pub projection: Mat4,
    pub frustum: &'a ViewFrustum,
    pub light: DirectionalLight,
    pub width: u32,
    pub height: u32,
    pub cull_mode: CullMode,
}

/// Counters gathered while building a frame's render list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Faces read from all meshes.
    pub faces: usize,
    /// Faces skipped by backface culling.
    pub faces_culled: usize,
    /// Faces whose clipped polygon produced no triangles.
    pub faces_clipped: usize,
    /// Triangles added to the render list.
    pub triangles_emitted: usize,
    /// Triangles lost because the render list was full.
    pub triangles_dropped: usize,
}

/// Unit normal of a view-space triangle, from its normalized edges AB and AC.
pub fn face_normal(vertices: &[Vec3; 3]) -> Vec3 {
    let [a, b, c] = *vertices;
    let ab = (b - a).normalize();
    let ac = (c - a).normalize();
    ab.cross(ac).normalize()
}

/// True if the face points away from a camera sitting at the view-space
/// origin.
///
/// The camera ray runs from vertex A to the origin (`origin - A`); the face
/// is a backface when its normal has a negative component along that ray.
pub fn is_backface(vertices: &[Vec3; 3], normal: Vec3) -> bool {
    let camera_ray = Vec3::ZERO - vertices[0];
    normal.dot(camera_ray) < 0.0
}

/// Projects a view-space point to screen space.
///
/// x, y and z are divided by w unless w is zero, in which case the
/// un-divided values are kept. y is flipped so it grows downward, then x and
/// y are scaled and offset from `[-1, 1]` to pixels. w keeps the view-space
/// depth for the rasterizer.
pub fn project_to_screen(projection: &Mat4, point: Vec3, width: u32, height: u32) -> Vec4 {
    let mut p = projection.project(Vec4::from_vec3(point, 1.0)).perspective_divide();

    let half_width = width as f32 / 2.0;
    let half_height = height as f32 / 2.0;

    p.y = -p.y;
    p.x = p.x * half_width + half_width;
    p.y = p.y * half_height + half_height;
    p
}

/// Runs every face of `mesh` through the pipeline and appends the resulting
/// screen-space triangles to `render_list`.
pub fn process_mesh(
    mesh: &Mesh,
    mesh_index: usize,
    ctx: &FrameContext,
    render_list: &mut RenderList,
    stats: &mut FrameStats,
) {
    let world = mesh.transform().world_matrix();

    for face in mesh.faces() {
        stats.faces += 1;

        let view_vertices = mesh
            .face_vertices(face)
            .map(|v| (ctx.view * (world * Vec4::from_vec3(v, 1.0))).to_vec3());

        let normal = face_normal(&view_vertices);
        if ctx.cull_mode == CullMode::Backface && is_backface(&view_vertices, normal) {
            stats.faces_culled += 1;
            continue;
        }

        let mut polygon = Polygon::from_triangle(view_vertices, face.uvs());
        ctx.frustum.clip_polygon(&mut polygon);
        if polygon.is_empty() {
            stats.faces_clipped += 1;
            continue;
        }

        let color = apply_intensity(face.color, ctx.light.intensity(normal));

        for clipped in polygon.triangulate() {
            let points = clipped.map(|v| {
                project_to_screen(&ctx.projection, v.position, ctx.width, ctx.height)
            });
            let texcoords = clipped.map(|v| v.texcoord);

            if render_list.push(Triangle::new(points, texcoords, color, mesh_index)) {
                stats.triangles_emitted += 1;
            } else {
                stats.triangles_dropped += 1;
            }
        }
    }
}
