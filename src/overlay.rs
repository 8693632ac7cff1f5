//! DOM-backed presentation sink for hotspot markers and detail panels.
//!
//! Elements are looked up once at construction. Anchors whose elements are
//! missing from the page simply get no-op updates; the scene logic neither
//! knows nor cares.

use crate::core::PresentationSink;
use fnv::FnvHashMap;
use wasm_bindgen::JsCast;
use web_sys as web;

struct AnchorElements {
    marker: web::HtmlElement,
    detail: web::Element,
}

pub struct DomSink {
    body: Option<web::HtmlElement>,
    anchors: FnvHashMap<String, AnchorElements>,
}

impl DomSink {
    /// Cache `.point--{id}` and `.screen--{id}` for each anchor id.
    pub fn new(document: &web::Document, anchor_ids: impl IntoIterator<Item = &'static str>) -> Self {
        let mut anchors = FnvHashMap::default();
        for id in anchor_ids {
            let marker = document
                .query_selector(&format!(".point--{id}"))
                .ok()
                .flatten()
                .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
            let detail = document
                .query_selector(&format!(".screen--{id}"))
                .ok()
                .flatten();
            match (marker, detail) {
                (Some(marker), Some(detail)) => {
                    anchors.insert(id.to_string(), AnchorElements { marker, detail });
                }
                _ => log::warn!("[overlay] missing elements for anchor '{id}'"),
            }
        }
        Self {
            body: document.body(),
            anchors,
        }
    }

    fn set_body_class(&self, class: &str, on: bool) {
        if let Some(body) = &self.body {
            let cl = body.class_list();
            if on {
                _ = cl.add_1(class);
            } else {
                _ = cl.remove_1(class);
            }
        }
    }
}

fn set_class(el: &web::Element, class: &str, on: bool) {
    let cl = el.class_list();
    if on {
        _ = cl.add_1(class);
    } else {
        _ = cl.remove_1(class);
    }
}

impl PresentationSink for DomSink {
    fn set_translation(&mut self, id: &str, x: f32, y: f32) {
        if let Some(els) = self.anchors.get(id) {
            _ = els.marker.style().set_property(
                "transform",
                &format!("translateX({x:.1}px) translateY({y:.1}px)"),
            );
        }
    }

    fn set_visible(&mut self, id: &str, visible: bool) {
        if let Some(els) = self.anchors.get(id) {
            set_class(&els.marker, "visible", visible);
        }
    }

    fn set_detail_open(&mut self, id: &str, open: bool) {
        if let Some(els) = self.anchors.get(id) {
            set_class(&els.detail, "visible", open);
        }
    }

    fn set_moving(&mut self, moving: bool) {
        self.set_body_class("camera-moving", moving);
    }

    fn set_details_mode(&mut self, on: bool) {
        self.set_body_class("details", on);
    }
}
