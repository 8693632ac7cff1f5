//! Camera description shared by projection, picking, and rendering.
//!
//! Platform-free on purpose: the web frontend builds matrices from this for
//! the GPU uniform, while host-side tests drive it directly.

use glam::{Mat4, Vec3};

/// Right-handed perspective camera. Depth range follows wgpu (0..1).
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Combined projection * view, recomputed per use because orientation
    /// changes continuously under damped orbiting.
    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
