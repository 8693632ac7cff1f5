// Host-side tests for frustum + occlusion visibility and its minimal-diff
// contract against the presentation sink.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod scene_core;

use glam::Vec3;
use scene_core::{
    AnchorDef, AnchorRegistry, Camera, PresentationSink, SceneGraph, SceneNode, TriMesh, Viewport,
    VisibilityEvaluator,
};

#[derive(Default)]
struct RecordingSink {
    translations: Vec<(String, f32, f32)>,
    visible_calls: Vec<(String, bool)>,
    detail_calls: Vec<(String, bool)>,
    moving_calls: Vec<bool>,
    details_mode_calls: Vec<bool>,
}

impl PresentationSink for RecordingSink {
    fn set_translation(&mut self, id: &str, x: f32, y: f32) {
        self.translations.push((id.to_string(), x, y));
    }
    fn set_visible(&mut self, id: &str, visible: bool) {
        self.visible_calls.push((id.to_string(), visible));
    }
    fn set_detail_open(&mut self, id: &str, open: bool) {
        self.detail_calls.push((id.to_string(), open));
    }
    fn set_moving(&mut self, moving: bool) {
        self.moving_calls.push(moving);
    }
    fn set_details_mode(&mut self, on: bool) {
        self.details_mode_calls.push(on);
    }
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

const VIEWPORT: Viewport = Viewport {
    width: 800.0,
    height: 600.0,
};

/// One anchor at the origin, attached to a non-renderable marker node.
fn graph_with(extra: Vec<SceneNode>) -> (SceneGraph, AnchorRegistry) {
    let mut roots = vec![SceneNode::new("SM_Prop_Trophy_01", Vec3::ZERO)];
    roots.extend(extra);
    let graph = SceneGraph::new(roots);
    let registry = AnchorRegistry::resolve(
        &graph,
        &[AnchorDef {
            id: "achievements",
            node_name: "SM_Prop_Trophy_01",
            offset: Vec3::ZERO,
        }],
    );
    (graph, registry)
}

fn wall_at(z: f32) -> SceneNode {
    SceneNode::new("Wall", Vec3::new(0.0, 0.0, z)).with_mesh(TriMesh::cuboid(
        Vec3::new(0.0, 0.0, z),
        Vec3::new(2.0, 2.0, 0.1),
    ))
}

#[test]
fn clear_line_of_sight_is_visible() {
    let (graph, registry) = graph_with(vec![]);
    let mut evaluator = VisibilityEvaluator::new();
    let mut sink = RecordingSink::default();
    evaluator.evaluate(&registry, &graph, &camera_at_z5(), VIEWPORT, &mut sink);
    assert!(evaluator.is_visible("achievements"));
    assert_eq!(sink.visible_calls, vec![("achievements".to_string(), true)]);
}

#[test]
fn occluder_in_front_hides_anchor() {
    let (graph, registry) = graph_with(vec![wall_at(2.5)]);
    let mut evaluator = VisibilityEvaluator::new();
    let mut sink = RecordingSink::default();
    evaluator.evaluate(&registry, &graph, &camera_at_z5(), VIEWPORT, &mut sink);
    assert!(!evaluator.is_visible("achievements"));
    assert_eq!(sink.visible_calls, vec![("achievements".to_string(), false)]);
}

#[test]
fn geometry_behind_anchor_does_not_occlude() {
    let (graph, registry) = graph_with(vec![wall_at(-2.5)]);
    let mut evaluator = VisibilityEvaluator::new();
    let mut sink = RecordingSink::default();
    evaluator.evaluate(&registry, &graph, &camera_at_z5(), VIEWPORT, &mut sink);
    assert!(evaluator.is_visible("achievements"));
}

#[test]
fn outside_frustum_is_hidden_regardless_of_occluders() {
    let (graph, registry) = graph_with(vec![]);
    let mut evaluator = VisibilityEvaluator::new();
    let mut sink = RecordingSink::default();
    let mut camera = camera_at_z5();
    // Look away; the anchor falls outside the frustum with nothing in front.
    camera.target = Vec3::new(0.0, 0.0, 10.0);
    evaluator.evaluate(&registry, &graph, &camera, VIEWPORT, &mut sink);
    assert!(!evaluator.is_visible("achievements"));
}

#[test]
fn sink_mutation_only_on_state_change() {
    let (graph, registry) = graph_with(vec![]);
    let mut evaluator = VisibilityEvaluator::new();
    let mut sink = RecordingSink::default();
    let camera = camera_at_z5();
    for _ in 0..5 {
        evaluator.evaluate(&registry, &graph, &camera, VIEWPORT, &mut sink);
    }
    // First frame establishes the state; steady frames add nothing.
    assert_eq!(sink.visible_calls.len(), 1);
}

#[test]
fn sink_mutation_fires_once_per_flip() {
    let graph_clear = graph_with(vec![]).0;
    let (graph_blocked, registry) = graph_with(vec![wall_at(2.5)]);
    let mut evaluator = VisibilityEvaluator::new();
    let mut sink = RecordingSink::default();
    let camera = camera_at_z5();
    evaluator.evaluate(&registry, &graph_clear, &camera, VIEWPORT, &mut sink);
    evaluator.evaluate(&registry, &graph_blocked, &camera, VIEWPORT, &mut sink);
    evaluator.evaluate(&registry, &graph_blocked, &camera, VIEWPORT, &mut sink);
    assert_eq!(
        sink.visible_calls,
        vec![
            ("achievements".to_string(), true),
            ("achievements".to_string(), false),
        ]
    );
}

#[test]
fn hidden_anchor_is_still_repositioned_every_frame() {
    let (graph, registry) = graph_with(vec![wall_at(2.5)]);
    let mut evaluator = VisibilityEvaluator::new();
    let mut sink = RecordingSink::default();
    let camera = camera_at_z5();
    evaluator.evaluate(&registry, &graph, &camera, VIEWPORT, &mut sink);
    evaluator.evaluate(&registry, &graph, &camera, VIEWPORT, &mut sink);
    assert!(!evaluator.is_visible("achievements"));
    assert_eq!(sink.translations.len(), 2);
}

#[test]
fn degenerate_viewport_skips_all_work() {
    let (graph, registry) = graph_with(vec![]);
    let mut evaluator = VisibilityEvaluator::new();
    let mut sink = RecordingSink::default();
    evaluator.evaluate(
        &registry,
        &graph,
        &camera_at_z5(),
        Viewport::new(0.0, 0.0),
        &mut sink,
    );
    assert!(sink.translations.is_empty());
    assert!(sink.visible_calls.is_empty());
}
