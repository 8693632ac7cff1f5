//! Pointer hit-testing against the single designated interactive surface.
//!
//! Pointer motion only stores converted NDC coordinates; the actual ray cast
//! happens once per frame from the driver. Press handlers read the stored
//! hover flag synchronously, which may be one frame stale by contract.

use super::camera::Camera;
use super::project;
use super::scene::SceneGraph;
use glam::Vec2;

/// Latest known pointer position in normalized device coordinates.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerState {
    /// `None` until the first pointer-move arrives.
    pub ndc: Option<Vec2>,
}

impl PointerState {
    pub fn set_ndc(&mut self, x: f32, y: f32) {
        self.ndc = Some(Vec2::new(x, y));
    }
}

/// Per-frame hover evaluation for one named interactive node.
#[derive(Clone, Debug)]
pub struct HoverTester {
    pub surface: &'static str,
    pub hovered: bool,
}

impl HoverTester {
    pub fn new(surface: &'static str) -> Self {
        Self {
            surface,
            hovered: false,
        }
    }

    /// Recompute hover from the latest pointer NDC. Defaults to false when
    /// there is no pointer yet or the surface node is absent; a missing
    /// surface only disables the affordance.
    pub fn evaluate(&mut self, pointer: &PointerState, scene: &SceneGraph, camera: &Camera) -> bool {
        self.hovered = (|| {
            let ndc = pointer.ndc?;
            let node = scene.find(self.surface)?;
            let mesh = node.mesh.as_ref()?;
            let inv_view_proj = camera.view_proj().inverse();
            let (origin, dir) = project::ray_through_ndc(camera.eye, inv_view_proj, ndc)?;
            mesh.intersect_ray(origin, dir)
        })()
        .is_some();
        self.hovered
    }
}
