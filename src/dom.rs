use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn add_pointerdown_listener(
    document: &web::Document,
    selector: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Ok(Some(el)) = document.query_selector(selector) {
        let closure = wasm_bindgen::closure::Closure::wrap(
            Box::new(move |_: web::PointerEvent| handler()) as Box<dyn FnMut(_)>,
        );
        _ = el.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Start the screen video if present. Absence is fine; the screen is then
/// just dark.
pub fn play_video(document: &web::Document, element_id: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        if let Ok(video) = el.dyn_into::<web::HtmlVideoElement>() {
            _ = video.play();
        }
    }
}

pub fn toggle_video(document: &web::Document, element_id: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        if let Ok(video) = el.dyn_into::<web::HtmlVideoElement>() {
            if video.paused() {
                _ = video.play();
            } else {
                video.pause().ok();
            }
        }
    }
}
