// Host-side tests for pointer hover against the designated interactive
// surface.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod scene_core;

use glam::Vec3;
use scene_core::{Camera, HoverTester, PointerState, SceneGraph, SceneNode, TriMesh};

fn tv_scene() -> SceneGraph {
    SceneGraph::new(vec![SceneNode::new("SM_Prop_TV_01", Vec3::ZERO).with_mesh(
        TriMesh::cuboid(Vec3::ZERO, Vec3::new(0.5, 0.5, 0.1)),
    )])
}

fn camera_at_z5() -> Camera {
    Camera {
        eye: Vec3::new(0.0, 0.0, 5.0),
        target: Vec3::ZERO,
        up: Vec3::Y,
        aspect: 1.0,
        fovy_radians: std::f32::consts::FRAC_PI_4,
        znear: 0.1,
        zfar: 100.0,
    }
}

#[test]
fn pointer_over_surface_hovers() {
    let scene = tv_scene();
    let mut pointer = PointerState::default();
    pointer.set_ndc(0.0, 0.0);
    let mut hover = HoverTester::new("SM_Prop_TV_01");
    assert!(hover.evaluate(&pointer, &scene, &camera_at_z5()));
    assert!(hover.hovered);
}

#[test]
fn pointer_off_surface_does_not_hover() {
    let scene = tv_scene();
    let mut pointer = PointerState::default();
    pointer.set_ndc(0.9, 0.9);
    let mut hover = HoverTester::new("SM_Prop_TV_01");
    assert!(!hover.evaluate(&pointer, &scene, &camera_at_z5()));
}

#[test]
fn no_pointer_yet_means_no_hover() {
    let scene = tv_scene();
    let pointer = PointerState::default();
    let mut hover = HoverTester::new("SM_Prop_TV_01");
    assert!(!hover.evaluate(&pointer, &scene, &camera_at_z5()));
}

#[test]
fn missing_surface_defaults_to_false() {
    let scene = tv_scene();
    let mut pointer = PointerState::default();
    pointer.set_ndc(0.0, 0.0);
    let mut hover = HoverTester::new("SM_Prop_Projector_01");
    assert!(!hover.evaluate(&pointer, &scene, &camera_at_z5()));
}

#[test]
fn move_only_stores_coordinates_until_evaluated() {
    let scene = tv_scene();
    let mut pointer = PointerState::default();
    let mut hover = HoverTester::new("SM_Prop_TV_01");
    hover.evaluate(&pointer, &scene, &camera_at_z5());
    assert!(!hover.hovered);
    // Motion alone does not change the flag; the next frame's evaluation
    // does.
    pointer.set_ndc(0.0, 0.0);
    assert!(!hover.hovered);
    hover.evaluate(&pointer, &scene, &camera_at_z5());
    assert!(hover.hovered);
}
