//! View-space frustum clipping.
//!
//! Polygons are clipped against the six frustum planes with the
//! Sutherland-Hodgman algorithm, before projection. Planes are point + normal
//! pairs with normals facing into the visible volume.

use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;

/// Maximum number of vertices a clipped triangle can grow to.
pub const MAX_POLYGON_VERTICES: usize = 10;

/// Maximum number of triangles a clipped polygon is split back into.
pub const MAX_POLYGON_TRIANGLES: usize = 10;

/// A plane defined by a point on the plane and its normal vector.
/// The normal points toward the "inside" (visible) half-space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    pub point: Vec3,
    pub normal: Vec3,
}

impl Plane {
    pub fn new(point: Vec3, normal: Vec3) -> Self {
        Self { point, normal }
    }

    /// Returns the signed distance from a point to this plane.
    /// Positive = inside (same side as normal), Negative = outside.
    pub fn signed_distance(&self, position: Vec3) -> f32 {
        (position - self.point).dot(self.normal)
    }
}

/// A vertex with all attributes needed for clipping interpolation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClipVertex {
    pub position: Vec3,
    pub texcoord: Vec2,
}

impl ClipVertex {
    pub fn new(position: Vec3, texcoord: Vec2) -> Self {
        Self { position, texcoord }
    }

    /// Linearly interpolate position and texture coordinate.
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            position: self.position.lerp(other.position, t),
            texcoord: self.texcoord.lerp(other.texcoord, t),
        }
    }
}

/// A convex polygon produced by clipping a triangle.
///
/// Holds at most [`MAX_POLYGON_VERTICES`] vertices; an empty polygon means
/// the triangle was clipped away entirely.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    vertices: Vec<ClipVertex>,
}

impl Polygon {
    /// Create a polygon from a triangle's view-space corners and UVs.
    pub fn from_triangle(positions: [Vec3; 3], texcoords: [Vec2; 3]) -> Self {
        let mut vertices = Vec::with_capacity(MAX_POLYGON_VERTICES);
        vertices.extend(
            positions
                .into_iter()
                .zip(texcoords)
                .map(|(p, uv)| ClipVertex::new(p, uv)),
        );
        Self { vertices }
    }

    pub fn vertices(&self) -> &[ClipVertex] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if the polygon can no longer form a triangle.
    pub fn is_empty(&self) -> bool {
        self.vertices.len() < 3
    }

    /// Clip this polygon against a single plane.
    ///
    /// Each vertex is visited together with its predecessor (the first
    /// vertex's predecessor is the last one). When the edge between them
    /// crosses the plane the intersection is emitted, then the current
    /// vertex is kept if it lies on the inside (distance >= 0).
    pub fn clip_against_plane(&mut self, plane: &Plane) {
        let Some(&last) = self.vertices.last() else {
            return;
        };

        let mut output = Vec::with_capacity(MAX_POLYGON_VERTICES);
        let mut previous = last;
        let mut previous_distance = plane.signed_distance(previous.position);

        for &current in &self.vertices {
            let current_distance = plane.signed_distance(current.position);

            if current_distance * previous_distance < 0.0 && output.len() < MAX_POLYGON_VERTICES {
                let t = current_distance / (current_distance - previous_distance);
                output.push(current.lerp(&previous, t));
            }

            if current_distance >= 0.0 && output.len() < MAX_POLYGON_VERTICES {
                output.push(current);
            }

            previous = current;
            previous_distance = current_distance;
        }

        self.vertices = output;
    }

    /// Split this convex polygon into a triangle fan around vertex 0.
    ///
    /// Yields nothing for polygons with fewer than three vertices.
    pub fn triangulate(&self) -> impl Iterator<Item = [ClipVertex; 3]> + '_ {
        (1..self.vertices.len().saturating_sub(1))
            .take(MAX_POLYGON_TRIANGLES)
            .map(move |i| [self.vertices[0], self.vertices[i], self.vertices[i + 1]])
    }
}

/// View-space frustum defined by 6 clipping planes.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewFrustum {
    planes: [Plane; 6],
}

impl ViewFrustum {
    /// Creates a new view frustum from projection parameters.
    ///
    /// # Arguments
    /// * `fov_x` - Horizontal field of view in radians
    /// * `fov_y` - Vertical field of view in radians
    /// * `z_near` - Near clipping plane distance
    /// * `z_far` - Far clipping plane distance
    pub fn new(fov_x: f32, fov_y: f32, z_near: f32, z_far: f32) -> Self {
        let (sin_x, cos_x) = (fov_x / 2.0).sin_cos();
        let (sin_y, cos_y) = (fov_y / 2.0).sin_cos();
        let origin = Vec3::ZERO;

        Self {
            planes: [
                // Left
                Plane::new(origin, Vec3::new(cos_x, 0.0, sin_x)),
                // Right
                Plane::new(origin, Vec3::new(-cos_x, 0.0, sin_x)),
                // Top
                Plane::new(origin, Vec3::new(0.0, -cos_y, sin_y)),
                // Bottom
                Plane::new(origin, Vec3::new(0.0, cos_y, sin_y)),
                // Near
                Plane::new(Vec3::new(0.0, 0.0, z_near), Vec3::new(0.0, 0.0, 1.0)),
                // Far
                Plane::new(Vec3::new(0.0, 0.0, z_far), Vec3::new(0.0, 0.0, -1.0)),
            ],
        }
    }

    /// Planes in clipping order: left, right, top, bottom, near, far.
    pub fn planes(&self) -> &[Plane; 6] {
        &self.planes
    }

    /// Clip a polygon against all frustum planes in place.
    pub fn clip_polygon(&self, polygon: &mut Polygon) {
        for plane in &self.planes {
            if polygon.vertices.is_empty() {
                break;
            }
            polygon.clip_against_plane(plane);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    fn frustum() -> ViewFrustum {
        ViewFrustum::new(FRAC_PI_2, FRAC_PI_2, 1.0, 20.0)
    }

    const UVS: [Vec2; 3] = [Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)];

    #[test]
    fn inside_triangle_is_unchanged() {
        let positions = [
            Vec3::new(-1.0, -1.0, 5.0),
            Vec3::new(1.0, -1.0, 5.0),
            Vec3::new(0.0, 1.0, 6.0),
        ];
        let unclipped = Polygon::from_triangle(positions, UVS);
        let mut polygon = unclipped.clone();
        frustum().clip_polygon(&mut polygon);
        assert_eq!(polygon, unclipped);
        assert_eq!(polygon.triangulate().count(), 1);
    }

    #[test]
    fn triangle_behind_camera_is_removed() {
        let mut polygon = Polygon::from_triangle(
            [
                Vec3::new(-1.0, -1.0, -5.0),
                Vec3::new(1.0, -1.0, -5.0),
                Vec3::new(0.0, 1.0, -5.0),
            ],
            UVS,
        );
        frustum().clip_polygon(&mut polygon);
        assert_eq!(polygon.len(), 0);
        assert_eq!(polygon.triangulate().count(), 0);
    }

    #[test]
    fn triangle_beyond_far_plane_is_removed() {
        let mut polygon = Polygon::from_triangle(
            [
                Vec3::new(-1.0, -1.0, 25.0),
                Vec3::new(1.0, -1.0, 25.0),
                Vec3::new(0.0, 1.0, 30.0),
            ],
            UVS,
        );
        frustum().clip_polygon(&mut polygon);
        assert!(polygon.is_empty());
    }

    #[test]
    fn triangle_outside_a_single_plane_is_removed() {
        for plane in frustum().planes() {
            // Push a small triangle well outside this plane.
            let center = plane.point - plane.normal * 3.0;
            let mut polygon = Polygon::from_triangle(
                [
                    center,
                    center + Vec3::new(0.1, 0.0, 0.0),
                    center + Vec3::new(0.0, 0.1, 0.0),
                ],
                UVS,
            );
            polygon.clip_against_plane(plane);
            assert_eq!(polygon.len(), 0);
        }
    }

    #[test]
    fn near_plane_cut_interpolates_position_and_uv() {
        let plane = Plane::new(Vec3::new(0.0, 0.0, 1.0), Vec3::new(0.0, 0.0, 1.0));
        let mut polygon = Polygon::from_triangle(
            [
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(0.0, 0.0, 2.0),
                Vec3::new(1.0, 0.0, 2.0),
            ],
            [Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(1.0, 1.0)],
        );
        polygon.clip_against_plane(&plane);

        // One corner behind the plane becomes two intersection points: a quad.
        assert_eq!(polygon.len(), 4);
        assert_eq!(polygon.triangulate().count(), 2);
        for v in polygon.vertices() {
            assert!(v.position.z >= 1.0 - 1e-6);
        }

        let first = polygon.vertices()[0];
        assert_relative_eq!(first.position.z, 1.0, epsilon = 1e-6);
        assert_relative_eq!(first.texcoord.x, 0.5, epsilon = 1e-6);
    }

    #[test]
    fn triangle_straddling_side_planes_stays_bounded() {
        let mut polygon = Polygon::from_triangle(
            [
                Vec3::new(-50.0, -50.0, 10.0),
                Vec3::new(50.0, -50.0, 10.0),
                Vec3::new(0.0, 50.0, 10.0),
            ],
            UVS,
        );
        frustum().clip_polygon(&mut polygon);
        assert!(polygon.len() >= 3);
        assert!(polygon.len() <= MAX_POLYGON_VERTICES);
        assert_eq!(polygon.triangulate().count(), polygon.len() - 2);
    }
}
