//! Scene tuning constants and authored hotspot bindings.
//!
//! Poses and timings mirror the authored presentation: the camera wakes up
//! behind the desk, flies to the presentation pose shortly after load, and
//! focus transitions run at a fixed pace.

use crate::core::AnchorDef;
use glam::Vec3;

// Camera lens
pub const CAMERA_FOVY_RADIANS: f32 = 45.0 * std::f32::consts::PI / 180.0;
pub const CAMERA_ZNEAR: f32 = 0.001;
pub const CAMERA_ZFAR: f32 = 80.0;

// Poses
pub const CAMERA_START_EYE: Vec3 = Vec3::new(2.0, 1.5, -2.0);
pub const CAMERA_INTRO_EYE: Vec3 = Vec3::new(-1.8, 1.3, 1.1);
pub const DEFAULT_ORBIT_TARGET: Vec3 = Vec3::new(0.0, 1.0, 0.0);

// Intro fly-in
pub const INTRO_DURATION: f32 = 4.0;
pub const INTRO_DELAY: f32 = 2.4;
pub const INTRO_TAG: &str = "intro";

// Orbit constraints
pub const ORBIT_DAMPING: f32 = 0.1;
pub const ORBIT_MAX_DISTANCE: f32 = 2.5;
pub const ORBIT_MAX_POLAR: f32 = std::f32::consts::FRAC_PI_2;
pub const ORBIT_ROTATE_SPEED: f32 = 0.005; // radians per CSS pixel dragged
pub const ORBIT_DOLLY_STEP: f32 = 0.95; // per wheel notch, inverted for zoom-out
pub const ARROW_ROTATE_STEP: f32 = 0.08; // radians per arrow-key press

// Node hosting the playable screen video.
pub const SCREEN_SURFACE_NODE: &str = "SM_Prop_TV_01";
pub const SCREEN_VIDEO_ID: &str = "screen-video";

/// Hotspot bindings: anchor id doubles as the suffix of the marker
/// (`.point--{id}`) and detail panel (`.screen--{id}`) elements.
pub const ANCHOR_DEFS: &[AnchorDef] = &[
    AnchorDef {
        id: "education",
        node_name: "SM_Prop_Certificate_01",
        offset: Vec3::new(0.1, 0.0, 0.0),
    },
    AnchorDef {
        id: "activities",
        node_name: "SM_Prop_CorkBoard_01",
        offset: Vec3::new(-0.4, 0.3, 0.3),
    },
    AnchorDef {
        id: "achievements",
        node_name: "SM_Prop_Trophy_01",
        offset: Vec3::new(0.0, 0.0, 0.3),
    },
    AnchorDef {
        id: "about",
        node_name: "SM_Prop_Computer_Setup_01",
        offset: Vec3::new(0.0, 0.2, 0.5),
    },
    AnchorDef {
        id: "contact",
        node_name: "SM_Prop_Phone_Desk_01",
        offset: Vec3::new(0.0, 0.27, 0.0),
    },
    AnchorDef {
        id: "skills",
        node_name: "SM_Prop_Book_Group_02",
        offset: Vec3::new(0.0, 0.0, 0.3),
    },
];
