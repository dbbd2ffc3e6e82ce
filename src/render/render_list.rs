//! Per-frame list of triangles waiting to be drawn.

use super::rasterizer::Triangle;

/// Default number of triangles a frame may hold.
pub const DEFAULT_RENDER_LIST_CAPACITY: usize = 10_000;

/// A bounded list of screen-space triangles.
///
/// Once the capacity is reached further pushes are rejected and counted, so
/// an oversized scene degrades to missing triangles instead of unbounded
/// allocation.
#[derive(Debug, Clone)]
pub struct RenderList {
    triangles: Vec<Triangle>,
    capacity: usize,
    dropped: usize,
}

impl Default for RenderList {
    fn default() -> Self {
        Self::new(DEFAULT_RENDER_LIST_CAPACITY)
    }
}

impl RenderList {
    pub fn new(capacity: usize) -> Self {
        Self {
            triangles: Vec::with_capacity(capacity),
            capacity,
            dropped: 0,
        }
    }

    /// Appends a triangle. Returns false, and counts the drop, when full.
    pub fn push(&mut self, triangle: Triangle) -> bool {
        if self.triangles.len() >= self.capacity {
            self.dropped += 1;
            return false;
        }
        self.triangles.push(triangle);
        true
    }

    /// Empties the list and resets the drop counter.
    pub fn clear(&mut self) {
        self.triangles.clear();
        self.dropped = 0;
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Triangles rejected since the last [`clear`](Self::clear).
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Triangle> {
        self.triangles.iter()
    }
}

impl<'a> IntoIterator for &'a RenderList {
    type Item = &'a Triangle;
    type IntoIter = std::slice::Iter<'a, Triangle>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
