//! First-person camera
//!
//! # Coordinate System
//!
//! Uses a **left-handed** coordinate system:
//! - X: positive right
//! - Y: positive up
//! - Z: positive forward (into screen)
//!
//! # Orientation
//!
//! Orientation is stored as yaw/pitch angles. The facing direction is the
//! +Z axis rotated by pitch (around X) and then yaw (around Y), and is
//! refreshed whenever either angle changes.
//!
//! - **Yaw**: Rotation around Y-axis (horizontal look, positive = look right)
//! - **Pitch**: Rotation around X-axis (vertical look, positive = look down)

use crate::math::mat4::Mat4;
use crate::math::vec3::Vec3;
use crate::math::vec4::Vec4;

/// First-person camera with position and yaw/pitch orientation.
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    direction: Vec3,
    forward_velocity: Vec3,
    yaw: f32,   // Rotation around Y-axis (radians)
    pitch: f32, // Rotation around X-axis (radians)

    pitch_min: f32,
    pitch_max: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

impl Camera {
    /// Creates a new camera at the given position, looking along +Z axis.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            direction: Vec3::FORWARD,
            forward_velocity: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            pitch_min: -89.0_f32.to_radians(),
            pitch_max: 89.0_f32.to_radians(),
        }
    }

    // =========================================================================
    // Core: Rotation Matrix
    // =========================================================================

    /// Builds the rotation matrix from yaw and pitch.
    ///
    /// Order: Yaw (Y) * Pitch (X), so pitch is applied first.
    fn rotation_matrix(&self) -> Mat4 {
        Mat4::rotation_y(self.yaw) * Mat4::rotation_x(self.pitch)
    }

    fn update_direction(&mut self) {
        let forward = self.rotation_matrix() * Vec4::direction(0.0, 0.0, 1.0);
        self.direction = forward.to_vec3();
    }

    // =========================================================================
    // Orientation - Rotation
    // =========================================================================

    /// Rotates the camera horizontally (around Y-axis).
    /// Positive values rotate right, negative values rotate left.
    pub fn rotate_yaw(&mut self, delta: f32) {
        self.yaw = (self.yaw + delta).rem_euclid(std::f32::consts::TAU);
        self.update_direction();
    }

    /// Rotates the camera vertically (around X-axis).
    /// Positive values look down, negative values look up.
    /// Automatically clamped to pitch limits.
    pub fn rotate_pitch(&mut self, delta: f32) {
        self.pitch = (self.pitch + delta).clamp(self.pitch_min, self.pitch_max);
        self.update_direction();
    }

    // =========================================================================
    // Movement
    // =========================================================================

    /// Moves the camera `distance` units along its facing direction.
    ///
    /// The step is kept as the camera's forward velocity.
    pub fn move_forward(&mut self, distance: f32) {
        self.forward_velocity = self.direction * distance;
        self.position = self.position + self.forward_velocity;
    }

    /// Moves the camera `distance` units against its facing direction.
    pub fn move_backward(&mut self, distance: f32) {
        self.forward_velocity = self.direction * distance;
        self.position = self.position - self.forward_velocity;
    }

    /// Teleports the camera to a new position without changing orientation.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns the camera's world position.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Returns the camera's facing direction (unit length).
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Returns the displacement applied by the last forward/backward move.
    pub fn forward_velocity(&self) -> Vec3 {
        self.forward_velocity
    }

    /// The point one unit ahead of the camera.
    pub fn look_at_target(&self) -> Vec3 {
        self.position + self.direction
    }

    /// Returns the yaw angle in radians.
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Returns the pitch angle in radians.
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    // =========================================================================
    // Matrix Generation
    // =========================================================================

    /// Computes the view matrix for the rendering pipeline, looking from the
    /// camera position toward [`look_at_target`](Self::look_at_target) with
    /// world +Y as up.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at(self.position, self.look_at_target(), Vec3::UP)
    }
}

// =============================================================================
// Tests
// =============================================================================
