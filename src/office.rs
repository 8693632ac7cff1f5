//! Procedural stand-in for the office model.
//!
//! Asset loading happens outside this crate; until a loaded graph is handed
//! in, this builds a small furnished room whose prop names match the authored
//! hotspot bindings, so anchors, occlusion, and picking behave like they will
//! against the real asset.

use crate::core::{SceneGraph, SceneNode, TriMesh};
use glam::Vec3;

pub fn build_office_scene() -> SceneGraph {
    let floor = SceneNode::new("Floor", Vec3::ZERO)
        .with_mesh(TriMesh::cuboid(
            Vec3::new(0.0, -0.05, 0.0),
            Vec3::new(3.0, 0.05, 3.0),
        ))
        .with_color([0.55, 0.5, 0.45]);

    let back_wall = SceneNode::new("Wall_Back", Vec3::new(0.0, 1.25, -3.0))
        .with_mesh(TriMesh::cuboid(
            Vec3::new(0.0, 1.25, -3.0),
            Vec3::new(3.0, 1.25, 0.05),
        ))
        .with_color([0.85, 0.83, 0.8]);

    let side_wall = SceneNode::new("Wall_Side", Vec3::new(-3.0, 1.25, 0.0))
        .with_mesh(TriMesh::cuboid(
            Vec3::new(-3.0, 1.25, 0.0),
            Vec3::new(0.05, 1.25, 3.0),
        ))
        .with_color([0.85, 0.83, 0.8]);

    let desk = SceneNode::new("SM_Prop_Desk_01", Vec3::new(-0.8, 0.75, -1.6))
        .with_mesh(TriMesh::cuboid(
            Vec3::new(-0.8, 0.72, -1.6),
            Vec3::new(0.9, 0.03, 0.45),
        ))
        .with_color([0.45, 0.3, 0.2])
        .with_child(
            SceneNode::new("SM_Prop_Computer_Setup_01", Vec3::new(-0.8, 0.95, -1.8))
                .with_mesh(TriMesh::cuboid(
                    Vec3::new(-0.8, 0.95, -1.8),
                    Vec3::new(0.25, 0.18, 0.03),
                ))
                .with_color([0.15, 0.15, 0.17]),
        )
        .with_child(
            SceneNode::new("SM_Prop_Phone_Desk_01", Vec3::new(-0.2, 0.78, -1.5))
                .with_mesh(TriMesh::cuboid(
                    Vec3::new(-0.2, 0.8, -1.5),
                    Vec3::new(0.06, 0.05, 0.09),
                ))
                .with_color([0.1, 0.1, 0.1]),
        );

    let shelf = SceneNode::new("SM_Prop_Shelf_01", Vec3::new(-2.8, 1.4, 1.2))
        .with_mesh(TriMesh::cuboid(
            Vec3::new(-2.8, 1.4, 1.2),
            Vec3::new(0.15, 0.6, 0.5),
        ))
        .with_color([0.4, 0.28, 0.18])
        .with_child(
            SceneNode::new("SM_Prop_Book_Group_02", Vec3::new(-2.65, 1.6, 1.2))
                .with_mesh(TriMesh::cuboid(
                    Vec3::new(-2.65, 1.6, 1.2),
                    Vec3::new(0.08, 0.12, 0.2),
                ))
                .with_color([0.6, 0.2, 0.2]),
        )
        .with_child(
            SceneNode::new("SM_Prop_Trophy_01", Vec3::new(-2.65, 1.05, 1.0))
                .with_mesh(TriMesh::cuboid(
                    Vec3::new(-2.65, 1.1, 1.0),
                    Vec3::new(0.05, 0.12, 0.05),
                ))
                .with_color([0.85, 0.7, 0.25]),
        );

    let certificate = SceneNode::new("SM_Prop_Certificate_01", Vec3::new(-1.6, 1.7, -2.9))
        .with_mesh(TriMesh::cuboid(
            Vec3::new(-1.6, 1.7, -2.9),
            Vec3::new(0.2, 0.28, 0.02),
        ))
        .with_color([0.9, 0.88, 0.8]);

    let cork_board = SceneNode::new("SM_Prop_CorkBoard_01", Vec3::new(0.9, 1.5, -2.9))
        .with_mesh(TriMesh::cuboid(
            Vec3::new(0.9, 1.5, -2.9),
            Vec3::new(0.45, 0.35, 0.02),
        ))
        .with_color([0.7, 0.5, 0.3]);

    let tv = SceneNode::new("SM_Prop_TV_01", Vec3::new(-2.9, 1.5, -1.2))
        .with_mesh(TriMesh::cuboid(
            Vec3::new(-2.9, 1.5, -1.2),
            Vec3::new(0.03, 0.35, 0.6),
        ))
        .with_color([0.05, 0.05, 0.06]);

    SceneGraph::new(vec![
        floor, back_wall, side_wall, desk, shelf, certificate, cork_board, tv,
    ])
}
