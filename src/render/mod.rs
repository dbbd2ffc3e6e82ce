//! Rendering: buffers, 2D primitives and triangle rasterization.

pub mod framebuffer;
pub mod rasterizer;
pub mod render_list;
pub mod renderer;

pub use framebuffer::{FrameBuffer, FAR_DEPTH};
pub use rasterizer::{barycentric_weights, ScanlineRasterizer, Triangle};
pub use render_list::{RenderList, DEFAULT_RENDER_LIST_CAPACITY};
pub use renderer::Renderer;
