//! Engine settings and the demo binary's command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::colors;
use crate::math::vec3::Vec3;
use crate::render::DEFAULT_RENDER_LIST_CAPACITY;

/// What each frame draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum RenderMode {
    /// Triangle edges only.
    #[default]
    Wireframe,
    /// Triangle edges plus a marker on every vertex.
    WireframeVertices,
    /// Flat-shaded triangles.
    Filled,
    /// Flat-shaded triangles with their edges on top.
    FilledWireframe,
    /// Texture-mapped triangles.
    Textured,
    /// Texture-mapped triangles with their edges on top.
    TexturedWireframe,
}

impl RenderMode {
    pub fn draws_wireframe(self) -> bool {
        matches!(
            self,
            Self::Wireframe | Self::WireframeVertices | Self::FilledWireframe | Self::TexturedWireframe
        )
    }

    pub fn draws_vertices(self) -> bool {
        self == Self::WireframeVertices
    }

    pub fn draws_filled(self) -> bool {
        matches!(self, Self::Filled | Self::FilledWireframe)
    }

    pub fn draws_textured(self) -> bool {
        matches!(self, Self::Textured | Self::TexturedWireframe)
    }
}

impl std::fmt::Display for RenderMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderMode::Wireframe => write!(f, "wireframe"),
            RenderMode::WireframeVertices => write!(f, "wireframe-vertices"),
            RenderMode::Filled => write!(f, "filled"),
            RenderMode::FilledWireframe => write!(f, "filled-wireframe"),
            RenderMode::Textured => write!(f, "textured"),
            RenderMode::TexturedWireframe => write!(f, "textured-wireframe"),
        }
    }
}

/// Which faces are discarded before clipping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum CullMode {
    /// Skip faces whose normal points away from the camera.
    #[default]
    Backface,
    /// Keep both windings.
    None,
}

impl std::fmt::Display for CullMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CullMode::Backface => write!(f, "backface"),
            CullMode::None => write!(f, "none"),
        }
    }
}

/// Fully resolved engine configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub width: u32,
    pub height: u32,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    pub z_near: f32,
    pub z_far: f32,
    pub light_direction: Vec3,
    pub camera_position: Vec3,
    /// Maximum number of triangles drawn per frame.
    pub render_list_capacity: usize,
    pub background_color: u32,
    pub grid_color: u32,
    /// Distance between grid dots in pixels.
    pub grid_spacing: u32,
    pub draw_grid: bool,
    pub render_mode: RenderMode,
    pub cull_mode: CullMode,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            fov_y: std::f32::consts::FRAC_PI_3,
            z_near: 1.0,
            z_far: 20.0,
            light_direction: Vec3::FORWARD,
            camera_position: Vec3::ZERO,
            render_list_capacity: DEFAULT_RENDER_LIST_CAPACITY,
            background_color: colors::BACKGROUND,
            grid_color: colors::GRID,
            grid_spacing: 10,
            draw_grid: true,
            render_mode: RenderMode::default(),
            cull_mode: CullMode::default(),
        }
    }
}

/// CLI argument definition (clap derive).
#[derive(Parser, Debug)]
#[command(name = "trirast", about = "Software triangle rasterizer", version)]
pub struct CliArgs {
    /// Mesh to display (OBJ); a cube is shown when omitted
    #[arg(short = 'm', long)]
    pub obj: Option<PathBuf>,

    /// Texture for the mesh (PNG, JPG, ...); a checkerboard is used when omitted
    #[arg(short = 't', long)]
    pub texture: Option<PathBuf>,

    /// Viewport width in pixels
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Viewport height in pixels
    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// Vertical field of view in degrees
    #[arg(long, default_value_t = 60.0)]
    pub fov: f32,

    /// Initial render mode
    #[arg(long, value_enum, default_value_t = RenderMode::Wireframe)]
    pub mode: RenderMode,

    /// Disable backface culling
    #[arg(long)]
    pub no_cull: bool,

    /// Hide the background grid
    #[arg(long)]
    pub no_grid: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl From<&CliArgs> for EngineConfig {
    fn from(args: &CliArgs) -> Self {
        EngineConfig {
            width: args.width.max(1),
            height: args.height.max(1),
            fov_y: args.fov.to_radians(),
            draw_grid: !args.no_grid,
            render_mode: args.mode,
            cull_mode: if args.no_cull {
                CullMode::None
            } else {
                CullMode::Backface
            },
            ..EngineConfig::default()
        }
    }
}
