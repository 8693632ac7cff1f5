//! Pointer coordinate conversions between CSS pixels and NDC.

use glam::Vec2;
use web_sys as web;

#[inline]
pub fn pointer_css_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    Vec2::new(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    )
}

/// CSS-pixel position to NDC, Y up. `None` before layout has given the canvas
/// a size.
#[inline]
pub fn pointer_ndc(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Option<Vec2> {
    let rect = canvas.get_bounding_client_rect();
    let w = rect.width() as f32;
    let h = rect.height() as f32;
    if w <= 0.0 || h <= 0.0 {
        return None;
    }
    let css = pointer_css_px(ev, canvas);
    Some(Vec2::new(
        (css.x / w) * 2.0 - 1.0,
        -((css.y / h) * 2.0 - 1.0),
    ))
}
