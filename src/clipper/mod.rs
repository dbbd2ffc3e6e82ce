//! Polygon clipping against the view frustum.
//!
//! Triangles are clipped in view space, before projection, using the
//! Sutherland-Hodgman algorithm and then fan-triangulated back into
//! triangles for rasterization.

pub mod view_space;

pub use view_space::{
    ClipVertex, Plane, Polygon, ViewFrustum, MAX_POLYGON_TRIANGLES, MAX_POLYGON_VERTICES,
};
