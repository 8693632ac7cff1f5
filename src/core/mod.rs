//! Platform-free scene logic: anchors, projection, visibility, picking, and
//! camera choreography. Everything here compiles on the host so the root
//! `tests/` suite can exercise it without a browser.

pub mod anchor;
pub mod camera;
pub mod choreo;
pub mod director;
pub mod orbit;
pub mod picking;
pub mod project;
pub mod scene;
pub mod sink;
pub mod visibility;

pub use anchor::{Anchor, AnchorDef, AnchorRegistry};
pub use camera::Camera;
pub use choreo::{CameraProperty, ChoreoEvent, Choreographer, Cue, CueAction, TransitionRequest};
pub use director::{Director, SavedView, FOCUS_DURATION, REVEAL_AT};
pub use orbit::OrbitControls;
pub use picking::{HoverTester, PointerState};
pub use project::{Frustum, Viewport};
pub use scene::{SceneGraph, SceneNode, TriMesh};
pub use sink::PresentationSink;
pub use visibility::VisibilityEvaluator;
