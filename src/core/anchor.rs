//! Anchor registry: authored point-of-interest definitions resolved against
//! the scene graph once, after load.
//!
//! Resolution is a single traversal. A definition whose node name never
//! appears simply produces no anchor; that is an authoring mismatch for tests
//! to catch, not a runtime fault. Resolved positions are immutable because
//! the referenced geometry is static after load.

use super::scene::SceneGraph;
use glam::Vec3;

/// Authored binding of a hotspot to a named scene node.
#[derive(Clone, Copy, Debug)]
pub struct AnchorDef {
    /// Stable key, also used to address presentation elements.
    pub id: &'static str,
    /// Scene-graph node the hotspot is attached to.
    pub node_name: &'static str,
    /// Local offset from the node's world position.
    pub offset: Vec3,
}

/// A resolved point of interest.
#[derive(Clone, Copy, Debug)]
pub struct Anchor {
    pub id: &'static str,
    pub position: Vec3,
}

#[derive(Clone, Debug, Default)]
pub struct AnchorRegistry {
    anchors: Vec<Anchor>,
}

impl AnchorRegistry {
    /// Traverse the graph once and emit an anchor for every definition whose
    /// node is present. If a name appears more than once, the last visited
    /// node wins.
    pub fn resolve(graph: &SceneGraph, defs: &[AnchorDef]) -> Self {
        let mut positions: Vec<Option<Vec3>> = vec![None; defs.len()];
        graph.visit(&mut |node| {
            for (i, def) in defs.iter().enumerate() {
                if node.name == def.node_name {
                    positions[i] = Some(node.world_position + def.offset);
                }
            }
        });
        let anchors = defs
            .iter()
            .zip(positions)
            .filter_map(|(def, pos)| {
                pos.map(|position| Anchor {
                    id: def.id,
                    position,
                })
            })
            .collect();
        Self { anchors }
    }

    pub fn get(&self, id: &str) -> Option<&Anchor> {
        self.anchors.iter().find(|a| a.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Anchor> {
        self.anchors.iter()
    }

    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }
}
