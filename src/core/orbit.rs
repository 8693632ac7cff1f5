//! Damped orbit controls around a mutable target.
//!
//! Rotation and dolly input accumulate as pending deltas; `update` applies a
//! damped fraction per frame, which gives the familiar eased settling. The
//! spherical offset is re-derived from the live eye every frame, so external
//! writers of camera state (the choreographer) compose with in-flight orbit
//! input instead of fighting it.

use super::camera::Camera;
use glam::Vec3;

// Guard against the polar singularity at the poles.
const POLAR_EPS: f32 = 1e-3;
const MIN_RADIUS: f32 = 1e-4;

#[derive(Clone, Debug)]
pub struct OrbitControls {
    pub target: Vec3,
    pub damping: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub min_polar: f32,
    pub max_polar: f32,
    delta_theta: f32,
    delta_phi: f32,
    pending_dolly: f32,
}

impl OrbitControls {
    pub fn new(target: Vec3) -> Self {
        Self {
            target,
            damping: 0.1,
            min_distance: 0.0,
            max_distance: f32::INFINITY,
            min_polar: 0.0,
            max_polar: std::f32::consts::PI,
            delta_theta: 0.0,
            delta_phi: 0.0,
            pending_dolly: 1.0,
        }
    }

    /// Queue a rotation in radians: `d_theta` around the vertical axis,
    /// `d_phi` toward/away from the pole.
    pub fn rotate(&mut self, d_theta: f32, d_phi: f32) {
        self.delta_theta += d_theta;
        self.delta_phi += d_phi;
    }

    /// Queue a multiplicative distance change; > 1 moves away.
    pub fn dolly(&mut self, scale: f32) {
        if scale > 0.0 {
            self.pending_dolly *= scale;
        }
    }

    /// Apply one frame of damped motion and write the camera pose. Also syncs
    /// the camera's look-at target to the orbit target so choreographed
    /// target moves steer the view.
    pub fn update(&mut self, camera: &mut Camera) {
        let offset = camera.eye - self.target;
        let mut radius = offset.length();
        if radius < MIN_RADIUS {
            camera.target = self.target;
            return;
        }
        let mut theta = offset.x.atan2(offset.z);
        let mut phi = (offset.y / radius).clamp(-1.0, 1.0).acos();

        theta += self.delta_theta * self.damping;
        phi += self.delta_phi * self.damping;
        self.delta_theta *= 1.0 - self.damping;
        self.delta_phi *= 1.0 - self.damping;

        radius *= self.pending_dolly;
        self.pending_dolly = 1.0;

        phi = phi.clamp(self.min_polar.max(POLAR_EPS), self.max_polar.min(std::f32::consts::PI - POLAR_EPS));
        radius = radius.clamp(self.min_distance.max(MIN_RADIUS), self.max_distance);

        let sin_phi = phi.sin();
        camera.eye = self.target
            + Vec3::new(
                radius * sin_phi * theta.sin(),
                radius * phi.cos(),
                radius * sin_phi * theta.cos(),
            );
        camera.target = self.target;
    }
}
