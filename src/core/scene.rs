//! Minimal scene-graph types consumed by the anchor and visibility logic.
//!
//! The real asset pipeline hands us a resolved graph: named nodes with
//! world-space positions and triangle geometry. Whether a node takes part in
//! ray queries is decided once at construction via the `renderable` tag, not
//! by inspecting node contents during traversal.

use glam::Vec3;

/// Minimum ray parameter accepted by intersection queries, to reject hits at
/// the ray origin itself.
pub const RAY_EPS: f32 = 1e-4;

/// Indexed triangle mesh with world-space vertices.
#[derive(Clone, Debug, Default)]
pub struct TriMesh {
    pub positions: Vec<Vec3>,
    pub indices: Vec<[u32; 3]>,
}

impl TriMesh {
    /// Axis-aligned box, 12 triangles with outward winding.
    pub fn cuboid(center: Vec3, half: Vec3) -> Self {
        let (cx, cy, cz) = (center.x, center.y, center.z);
        let (hx, hy, hz) = (half.x, half.y, half.z);
        let positions = vec![
            Vec3::new(cx - hx, cy - hy, cz - hz),
            Vec3::new(cx + hx, cy - hy, cz - hz),
            Vec3::new(cx + hx, cy + hy, cz - hz),
            Vec3::new(cx - hx, cy + hy, cz - hz),
            Vec3::new(cx - hx, cy - hy, cz + hz),
            Vec3::new(cx + hx, cy - hy, cz + hz),
            Vec3::new(cx + hx, cy + hy, cz + hz),
            Vec3::new(cx - hx, cy + hy, cz + hz),
        ];
        let indices = vec![
            // -z
            [0, 2, 1],
            [0, 3, 2],
            // +z
            [4, 5, 6],
            [4, 6, 7],
            // -x
            [0, 4, 7],
            [0, 7, 3],
            // +x
            [1, 2, 6],
            [1, 6, 5],
            // -y
            [0, 1, 5],
            [0, 5, 4],
            // +y
            [3, 7, 6],
            [3, 6, 2],
        ];
        Self { positions, indices }
    }

    /// Nearest intersection parameter along `dir` (assumed normalized), or
    /// `None` when the ray misses every triangle. Moeller-Trumbore without
    /// backface culling; occluders block regardless of winding.
    pub fn intersect_ray(&self, origin: Vec3, dir: Vec3) -> Option<f32> {
        let mut nearest: Option<f32> = None;
        for tri in &self.indices {
            let a = self.positions[tri[0] as usize];
            let b = self.positions[tri[1] as usize];
            let c = self.positions[tri[2] as usize];
            let ab = b - a;
            let ac = c - a;
            let pvec = dir.cross(ac);
            let det = ab.dot(pvec);
            if det.abs() < 1e-8 {
                continue;
            }
            let inv_det = 1.0 / det;
            let tvec = origin - a;
            let u = tvec.dot(pvec) * inv_det;
            if !(0.0..=1.0).contains(&u) {
                continue;
            }
            let qvec = tvec.cross(ab);
            let v = dir.dot(qvec) * inv_det;
            if v < 0.0 || u + v > 1.0 {
                continue;
            }
            let t = ac.dot(qvec) * inv_det;
            if t > RAY_EPS && nearest.map_or(true, |n| t < n) {
                nearest = Some(t);
            }
        }
        nearest
    }
}

/// Named node with a resolved world position and optional geometry.
#[derive(Clone, Debug)]
pub struct SceneNode {
    pub name: String,
    pub world_position: Vec3,
    pub color_rgb: [f32; 3],
    /// Capability tag: participates in ray queries and rendering.
    pub renderable: bool,
    pub mesh: Option<TriMesh>,
    pub children: Vec<SceneNode>,
}

impl SceneNode {
    pub fn new(name: &str, world_position: Vec3) -> Self {
        Self {
            name: name.to_string(),
            world_position,
            color_rgb: [0.7, 0.7, 0.7],
            renderable: false,
            mesh: None,
            children: Vec::new(),
        }
    }

    pub fn with_mesh(mut self, mesh: TriMesh) -> Self {
        self.mesh = Some(mesh);
        self.renderable = true;
        self
    }

    pub fn with_color(mut self, color_rgb: [f32; 3]) -> Self {
        self.color_rgb = color_rgb;
        self
    }

    pub fn with_child(mut self, child: SceneNode) -> Self {
        self.children.push(child);
        self
    }
}

/// A resolved scene graph. Geometry is static after load; node positions are
/// already in world space.
#[derive(Clone, Debug, Default)]
pub struct SceneGraph {
    pub roots: Vec<SceneNode>,
}

impl SceneGraph {
    pub fn new(roots: Vec<SceneNode>) -> Self {
        Self { roots }
    }

    /// Visit every node exactly once. Order is unspecified beyond being
    /// deterministic for a given graph.
    pub fn visit(&self, f: &mut impl FnMut(&SceneNode)) {
        fn walk(node: &SceneNode, f: &mut impl FnMut(&SceneNode)) {
            f(node);
            for child in &node.children {
                walk(child, f);
            }
        }
        for root in &self.roots {
            walk(root, f);
        }
    }

    pub fn find(&self, name: &str) -> Option<&SceneNode> {
        let mut found: Option<&SceneNode> = None;
        // Recursive search without early exit; graphs here are small.
        fn walk<'a>(node: &'a SceneNode, name: &str, found: &mut Option<&'a SceneNode>) {
            if found.is_none() && node.name == name {
                *found = Some(node);
            }
            for child in &node.children {
                walk(child, name, found);
            }
        }
        for root in &self.roots {
            walk(root, name, &mut found);
        }
        found
    }

    /// Nearest ray hit against every renderable mesh in the graph.
    pub fn intersect_ray(&self, origin: Vec3, dir: Vec3) -> Option<f32> {
        let mut nearest: Option<f32> = None;
        self.visit(&mut |node| {
            if !node.renderable {
                return;
            }
            if let Some(mesh) = &node.mesh {
                if let Some(t) = mesh.intersect_ray(origin, dir) {
                    if nearest.map_or(true, |n| t < n) {
                        nearest = Some(t);
                    }
                }
            }
        });
        nearest
    }
}
