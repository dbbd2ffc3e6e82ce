//! Core rendering engine.
//!
//! The [`Engine`] struct is the main entry point for the renderer. It owns
//! the scene (meshes, camera, light), the frame buffers and the per-frame
//! render list, and drives the pipeline in two steps:
//!
//! - [`Engine::update`] transforms, culls, clips and projects every mesh into
//!   the render list
//! - [`Engine::render`] clears the buffers and draws the render list with the
//!   passes selected by the current [`RenderMode`]

use std::path::Path;

use tracing::{debug, info, trace, warn};

use crate::camera::Camera;
use crate::clipper::ViewFrustum;
use crate::colors;
use crate::config::{CullMode, EngineConfig, RenderMode};
use crate::error::Result;
use crate::light::DirectionalLight;
use crate::math::vec3::Vec3;
use crate::mesh::Mesh;
use crate::pipeline::{self, FrameContext, FrameStats};
use crate::projection::Projection;
use crate::render::{RenderList, Renderer, ScanlineRasterizer};
use crate::texture::Texture;

/// Side length of the square drawn on each vertex in
/// [`RenderMode::WireframeVertices`].
const VERTEX_MARKER_SIZE: i32 = 6;

pub struct Engine {
    config: EngineConfig,
    renderer: Renderer,
    rasterizer: ScanlineRasterizer,
    render_list: RenderList,
    meshes: Vec<Mesh>,
    camera: Camera,
    light: DirectionalLight,
    projection: Projection,
    frustum: ViewFrustum,
    render_mode: RenderMode,
    cull_mode: CullMode,
    last_stats: FrameStats,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        let projection = Projection::for_viewport(
            config.fov_y,
            config.width,
            config.height,
            config.z_near,
            config.z_far,
        );
        let frustum = projection.view_frustum();

        info!(
            width = config.width,
            height = config.height,
            fov_y = config.fov_y,
            render_mode = %config.render_mode,
            cull_mode = %config.cull_mode,
            "Engine created"
        );

        Self {
            renderer: Renderer::new(config.width, config.height),
            rasterizer: ScanlineRasterizer::new(),
            render_list: RenderList::new(config.render_list_capacity),
            meshes: Vec::new(),
            camera: Camera::new(config.camera_position),
            light: DirectionalLight::new(config.light_direction),
            projection,
            frustum,
            render_mode: config.render_mode,
            cull_mode: config.cull_mode,
            last_stats: FrameStats::default(),
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn width(&self) -> u32 {
        self.renderer.width()
    }

    pub fn height(&self) -> u32 {
        self.renderer.height()
    }

    /// Resizes the frame buffers and refits the projection to the new
    /// aspect ratio.
    pub fn resize(&mut self, width: u32, height: u32) {
        let (width, height) = (width.max(1), height.max(1));
        self.renderer.resize(width, height);
        self.projection.set_aspect_ratio(width as f32 / height as f32);
        self.frustum = self.projection.view_frustum();
        self.config.width = width;
        self.config.height = height;
        debug!(width, height, "Viewport resized");
    }

    // ============ Modes ============

    pub fn set_render_mode(&mut self, mode: RenderMode) {
        if mode != self.render_mode {
            debug!(from = %self.render_mode, to = %mode, "Render mode changed");
        }
        self.render_mode = mode;
    }

    pub fn render_mode(&self) -> RenderMode {
        self.render_mode
    }

    pub fn set_cull_mode(&mut self, mode: CullMode) {
        if mode != self.cull_mode {
            debug!(from = %self.cull_mode, to = %mode, "Cull mode changed");
        }
        self.cull_mode = mode;
    }

    pub fn cull_mode(&self) -> CullMode {
        self.cull_mode
    }

    pub fn set_draw_grid(&mut self, draw_grid: bool) {
        self.config.draw_grid = draw_grid;
    }

    // ============ Scene ============

    /// Adds a mesh to the scene and returns its index.
    pub fn add_mesh(&mut self, mesh: Mesh) -> usize {
        debug!(
            mesh = mesh.name(),
            faces = mesh.faces().len(),
            textured = mesh.texture().is_some(),
            "Mesh added"
        );
        self.meshes.push(mesh);
        self.meshes.len() - 1
    }

    /// Loads an OBJ mesh, and optionally its texture, into the scene.
    pub fn load_mesh<P: AsRef<Path>>(
        &mut self,
        obj_path: P,
        texture_path: Option<P>,
    ) -> Result<usize> {
        let mut mesh = Mesh::from_obj(obj_path)?;
        if let Some(path) = texture_path {
            mesh.set_texture(Texture::from_file(path)?);
        }
        Ok(self.add_mesh(mesh))
    }

    pub fn meshes(&self) -> &[Mesh] {
        &self.meshes
    }

    pub fn mesh(&self, index: usize) -> Option<&Mesh> {
        self.meshes.get(index)
    }

    pub fn mesh_mut(&mut self, index: usize) -> Option<&mut Mesh> {
        self.meshes.get_mut(index)
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn light(&self) -> &DirectionalLight {
        &self.light
    }

    pub fn set_light_direction(&mut self, direction: Vec3) {
        self.light.direction = direction;
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    // ============ Frame ============

    /// Builds this frame's render list from every mesh in the scene.
    pub fn update(&mut self) -> FrameStats {
        self.render_list.clear();

        let ctx = FrameContext {
            view: self.camera.view_matrix(),
            projection: self.projection.matrix(),
            frustum: &self.frustum,
            light: self.light,
            width: self.renderer.width(),
            height: self.renderer.height(),
            cull_mode: self.cull_mode,
        };

        let mut stats = FrameStats::default();
        for (mesh_index, mesh) in self.meshes.iter().enumerate() {
            pipeline::process_mesh(mesh, mesh_index, &ctx, &mut self.render_list, &mut stats);
        }

        trace!(
            faces = stats.faces,
            culled = stats.faces_culled,
            clipped = stats.faces_clipped,
            triangles = stats.triangles_emitted,
            "Frame updated"
        );
        if stats.triangles_dropped > 0 {
            warn!(
                dropped = stats.triangles_dropped,
                capacity = self.render_list.capacity(),
                "Render list full, triangles dropped"
            );
        }

        self.last_stats = stats;
        stats
    }

    /// Draws the render list into the frame buffers.
    ///
    /// Each triangle runs the filled, textured, wireframe and vertex passes
    /// its render mode enables, in that order, before the next triangle.
    pub fn render(&mut self) {
        self.renderer.clear(self.config.background_color);
        self.renderer.clear_depth();

        if self.config.draw_grid {
            self.renderer
                .draw_grid(self.config.grid_spacing, self.config.grid_color);
        }

        let mode = self.render_mode;
        let mut missing_texture = false;

        for triangle in self.render_list.iter() {
            if mode.draws_filled() {
                let mut fb = self.renderer.as_framebuffer();
                self.rasterizer.fill_triangle(triangle, &mut fb, triangle.color);
            }

            if mode.draws_textured() {
                let mut fb = self.renderer.as_framebuffer();
                match self.meshes.get(triangle.mesh_index).and_then(Mesh::texture) {
                    Some(texture) => {
                        self.rasterizer.fill_textured_triangle(triangle, &mut fb, texture)
                    }
                    None => {
                        missing_texture = true;
                        self.rasterizer.fill_triangle(triangle, &mut fb, triangle.color);
                    }
                }
            }

            if mode.draws_wireframe() {
                self.renderer
                    .draw_triangle_wireframe(triangle, colors::WIREFRAME);
            }

            if mode.draws_vertices() {
                let half = (VERTEX_MARKER_SIZE / 2) as f32;
                for p in &triangle.points {
                    self.renderer.draw_rect(
                        (p.x - half) as i32,
                        (p.y - half) as i32,
                        VERTEX_MARKER_SIZE,
                        VERTEX_MARKER_SIZE,
                        colors::VERTEX,
                    );
                }
            }
        }

        if missing_texture {
            warn!("Textured pass met a mesh without a texture, drew it flat");
        }
    }

    /// Statistics from the most recent [`update`](Self::update).
    pub fn last_stats(&self) -> FrameStats {
        self.last_stats
    }

    pub fn render_list(&self) -> &RenderList {
        &self.render_list
    }

    /// Returns the rendered frame as bytes (ARGB8888 format)
    pub fn frame_buffer(&self) -> &[u8] {
        self.renderer.as_bytes()
    }

    pub fn color_buffer(&self) -> &[u32] {
        self.renderer.color_buffer()
    }

    pub fn depth_buffer(&self) -> &[f32] {
        self.renderer.depth_buffer()
    }
}
