//! Interaction orchestration: hotspot clicks, the back action, and the
//! choreographer events they produce.

use super::anchor::AnchorRegistry;
use super::camera::Camera;
use super::choreo::{
    CameraProperty, ChoreoEvent, Choreographer, CueAction, TransitionRequest,
};
use super::sink::PresentationSink;
use glam::Vec3;

/// Camera pose captured before the first focus transition, restored by the
/// back action.
#[derive(Clone, Copy, Debug)]
pub struct SavedView {
    pub eye: Vec3,
    pub target: Vec3,
}

/// Seconds for a focus or back transition, matching the authored pacing.
pub const FOCUS_DURATION: f32 = 1.2;
/// Progress at which a focused anchor's detail panel is revealed.
pub const REVEAL_AT: f32 = 0.5;

#[derive(Debug, Default)]
pub struct Director {
    saved: Option<SavedView>,
    current: Option<&'static str>,
}

impl Director {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a focus transition toward the anchor: the orbit target eases to
    /// the anchor position and the detail panel is revealed halfway through.
    ///
    /// The overview pose is captured only when entering details mode, so
    /// hopping between hotspots keeps the original overview as the back
    /// destination. Clicking mid-transition simply supersedes the previous
    /// orbit-target transition, whose reveal cue then never fires.
    pub fn anchor_clicked(
        &mut self,
        id: &str,
        registry: &AnchorRegistry,
        camera: &Camera,
        orbit_target: Vec3,
        choreo: &mut Choreographer,
        sink: &mut impl PresentationSink,
    ) {
        let Some(anchor) = registry.get(id) else {
            return;
        };
        if self.saved.is_none() {
            self.saved = Some(SavedView {
                eye: camera.eye,
                target: orbit_target,
            });
        }
        if let Some(previous) = self.current.take() {
            if previous != anchor.id {
                sink.set_detail_open(previous, false);
            }
        }
        self.current = Some(anchor.id);
        choreo.request(
            TransitionRequest::new(CameraProperty::OrbitTarget, anchor.position, FOCUS_DURATION)
                .with_cue(REVEAL_AT, CueAction::RevealDetails)
                .with_tag(anchor.id),
        );
    }

    /// Close the open detail panel and ease back to the captured overview.
    /// Returns false (and does nothing) when no pose was ever captured; the
    /// capture step is a precondition for any reversible transition.
    pub fn back_requested(
        &mut self,
        choreo: &mut Choreographer,
        sink: &mut impl PresentationSink,
    ) -> bool {
        let Some(saved) = self.saved.take() else {
            return false;
        };
        if let Some(current) = self.current.take() {
            sink.set_detail_open(current, false);
        }
        sink.set_details_mode(false);
        choreo.request(TransitionRequest::new(
            CameraProperty::Eye,
            saved.eye,
            FOCUS_DURATION,
        ));
        choreo.request(TransitionRequest::new(
            CameraProperty::OrbitTarget,
            saved.target,
            FOCUS_DURATION,
        ));
        true
    }

    /// Apply one choreographer event to the presentation layer.
    pub fn handle_event(&self, event: &ChoreoEvent, sink: &mut impl PresentationSink) {
        if let ChoreoEvent::CueFired {
            action: CueAction::RevealDetails,
            tag: Some(id),
        } = event
        {
            sink.set_details_mode(true);
            sink.set_detail_open(id, true);
        }
    }
}
