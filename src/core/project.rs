//! World-to-screen projection, view-frustum tests, and NDC rays.

use glam::{Mat4, Vec2, Vec3, Vec4, Vec4Swizzles};

/// Viewport in CSS or device pixels; only the ratio and half-extents matter.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True before layout has settled (zero-sized canvas). Projection work is
    /// skipped entirely for such frames instead of emitting NaN coordinates.
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Project a world point to normalized device coordinates. `None` when the
/// point is at or behind the eye plane (clip w <= 0).
pub fn project_to_ndc(world: Vec3, view_proj: Mat4) -> Option<Vec3> {
    let clip = view_proj * world.extend(1.0);
    if clip.w <= 0.0 {
        return None;
    }
    Some(clip.xyz() / clip.w)
}

/// Pixel-space marker translation for a world point: `x * width/2` and
/// `-y * height/2`. Device Y grows downward while NDC Y grows upward, hence
/// the sign flip.
pub fn project_to_screen(world: Vec3, view_proj: Mat4, viewport: Viewport) -> Option<Vec2> {
    if viewport.is_degenerate() {
        return None;
    }
    let ndc = project_to_ndc(world, view_proj)?;
    Some(Vec2::new(
        ndc.x * viewport.width * 0.5,
        -ndc.y * viewport.height * 0.5,
    ))
}

/// World-space ray from the eye through an NDC coordinate, via the inverse
/// view-projection. `None` when the matrix is singular enough to produce a
/// non-finite far point.
pub fn ray_through_ndc(eye: Vec3, inv_view_proj: Mat4, ndc: Vec2) -> Option<(Vec3, Vec3)> {
    let far = inv_view_proj * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
    if far.w.abs() < 1e-9 {
        return None;
    }
    let far_world = far.xyz() / far.w;
    let dir = far_world - eye;
    if !dir.is_finite() || dir.length_squared() < 1e-12 {
        return None;
    }
    Some((eye, dir.normalize()))
}

/// View frustum as six inward-facing planes extracted from a view-projection
/// matrix (Gribb-Hartmann). The near plane uses row 2 directly because the
/// projection maps depth to [0, 1].
#[derive(Clone, Copy, Debug)]
pub struct Frustum {
    planes: [Vec4; 6],
}

impl Frustum {
    pub fn from_view_proj(m: Mat4) -> Self {
        let r0 = m.row(0);
        let r1 = m.row(1);
        let r2 = m.row(2);
        let r3 = m.row(3);
        Self {
            planes: [
                r3 + r0, // left
                r3 - r0, // right
                r3 + r1, // bottom
                r3 - r1, // top
                r2,      // near
                r3 - r2, // far
            ],
        }
    }

    pub fn contains_point(&self, p: Vec3) -> bool {
        let hp = p.extend(1.0);
        self.planes.iter().all(|plane| plane.dot(hp) >= 0.0)
    }
}
