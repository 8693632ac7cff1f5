//! Per-frame anchor visibility: frustum rejection, occlusion ray test, and
//! minimal-diff application to the presentation sink.

use super::anchor::AnchorRegistry;
use super::camera::Camera;
use super::project::{self, Frustum, Viewport};
use super::scene::SceneGraph;
use super::sink::PresentationSink;
use fnv::FnvHashMap;

/// Owns the mutable per-anchor visibility booleans, kept apart from the
/// immutable registry. Sink mutations are issued only when a value actually
/// flips; the stored state is updated every frame regardless.
#[derive(Debug, Default)]
pub struct VisibilityEvaluator {
    state: FnvHashMap<&'static str, bool>,
}

impl VisibilityEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.state.get(id).copied().unwrap_or(false)
    }

    /// Evaluate every anchor for the current camera pose. Does nothing at all
    /// on a degenerate viewport; that frame's marker state is simply stale
    /// rather than NaN-positioned.
    pub fn evaluate(
        &mut self,
        registry: &AnchorRegistry,
        scene: &SceneGraph,
        camera: &Camera,
        viewport: Viewport,
        sink: &mut impl PresentationSink,
    ) {
        if viewport.is_degenerate() {
            return;
        }
        let view_proj = camera.view_proj();
        let inv_view_proj = view_proj.inverse();
        let frustum = Frustum::from_view_proj(view_proj);

        for anchor in registry.iter() {
            // Markers are repositioned even while hidden so a reappearing
            // marker transitions in from the right place.
            if let Some(px) = project::project_to_screen(anchor.position, view_proj, viewport) {
                sink.set_translation(anchor.id, px.x, px.y);
            }

            let visible = if !frustum.contains_point(anchor.position) {
                false
            } else {
                line_of_sight(anchor.position, scene, camera.eye, view_proj, inv_view_proj)
            };

            let previous = self.state.insert(anchor.id, visible);
            if previous != Some(visible) {
                sink.set_visible(anchor.id, visible);
            }
        }
    }
}

/// Occlusion test: cast from the eye through the anchor's NDC position
/// against the full renderable graph. A hit strictly nearer than the anchor
/// hides it; the comparison carries no tolerance, matching the shipped
/// behavior for near-coplanar geometry.
fn line_of_sight(
    position: glam::Vec3,
    scene: &SceneGraph,
    eye: glam::Vec3,
    view_proj: glam::Mat4,
    inv_view_proj: glam::Mat4,
) -> bool {
    let Some(ndc) = project::project_to_ndc(position, view_proj) else {
        return false;
    };
    let Some((origin, dir)) =
        project::ray_through_ndc(eye, inv_view_proj, glam::Vec2::new(ndc.x, ndc.y))
    else {
        return false;
    };
    match scene.intersect_ray(origin, dir) {
        None => true,
        Some(hit_distance) => hit_distance >= position.distance(eye),
    }
}
