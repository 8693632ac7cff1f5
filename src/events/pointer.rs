//! Pointer wiring: orbit drag, hover-gated screen clicks, hotspot markers,
//! and the back button.
//!
//! Move events only store coordinates; hit-testing happens on the frame tick.
//! Press handlers read the last per-frame hover result, which by contract may
//! be one frame stale.

use crate::constants::{
    ANCHOR_DEFS, ORBIT_DOLLY_STEP, ORBIT_ROTATE_SPEED, SCREEN_VIDEO_ID,
};
use crate::core::{
    AnchorRegistry, Camera, Choreographer, Director, HoverTester, OrbitControls, PointerState,
};
use crate::dom;
use crate::input;
use crate::overlay::DomSink;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub registry: Rc<AnchorRegistry>,
    pub camera: Rc<RefCell<Camera>>,
    pub orbit: Rc<RefCell<OrbitControls>>,
    pub choreo: Rc<RefCell<Choreographer>>,
    pub director: Rc<RefCell<Director>>,
    pub sink: Rc<RefCell<DomSink>>,
    pub pointer: Rc<RefCell<PointerState>>,
    pub hover: Rc<RefCell<HoverTester>>,
}

#[derive(Default, Clone, Copy)]
struct DragState {
    active: bool,
    last_css: Vec2,
}

pub fn wire_input_handlers(document: &web::Document, w: InputWiring) {
    let drag = Rc::new(RefCell::new(DragState::default()));
    wire_pointermove(&w, drag.clone());
    wire_pointerdown(&w, drag.clone());
    wire_pointerup(drag);
    wire_wheel(&w);
    wire_markers(document, &w);
    wire_back(document, &w);
}

fn wire_pointermove(w: &InputWiring, drag: Rc<RefCell<DragState>>) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if let Some(ndc) = input::pointer_ndc(&ev, &w.canvas) {
            w.pointer.borrow_mut().set_ndc(ndc.x, ndc.y);
        }
        let css = input::pointer_css_px(&ev, &w.canvas);
        let mut ds = drag.borrow_mut();
        if ds.active {
            let delta = css - ds.last_css;
            w.orbit.borrow_mut().rotate(
                -delta.x * ORBIT_ROTATE_SPEED,
                -delta.y * ORBIT_ROTATE_SPEED,
            );
        }
        ds.last_css = css;
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerdown(w: &InputWiring, drag: Rc<RefCell<DragState>>) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        // Press consults the stored hover flag; no fresh hit-test here.
        if w.hover.borrow().hovered {
            if let Some(document) = dom::window_document() {
                dom::toggle_video(&document, SCREEN_VIDEO_ID);
            }
        } else {
            let mut ds = drag.borrow_mut();
            ds.active = true;
            ds.last_css = input::pointer_css_px(&ev, &w.canvas);
        }
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(drag: Rc<RefCell<DragState>>) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        drag.borrow_mut().active = false;
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_wheel(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        let scale = if ev.delta_y() < 0.0 {
            ORBIT_DOLLY_STEP
        } else {
            1.0 / ORBIT_DOLLY_STEP
        };
        w.orbit.borrow_mut().dolly(scale);
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_markers(document: &web::Document, w: &InputWiring) {
    for def in ANCHOR_DEFS {
        let w = w.clone();
        let id = def.id;
        dom::add_pointerdown_listener(document, &format!(".point--{id}"), move || {
            log::info!("[click] hotspot '{}'", id);
            let camera = w.camera.borrow();
            let orbit_target = w.orbit.borrow().target;
            w.director.borrow_mut().anchor_clicked(
                id,
                &w.registry,
                &camera,
                orbit_target,
                &mut w.choreo.borrow_mut(),
                &mut *w.sink.borrow_mut(),
            );
        });
    }
}

fn wire_back(document: &web::Document, w: &InputWiring) {
    let w = w.clone();
    dom::add_pointerdown_listener(document, ".details__back", move || {
        let handled = w
            .director
            .borrow_mut()
            .back_requested(&mut w.choreo.borrow_mut(), &mut *w.sink.borrow_mut());
        if !handled {
            log::warn!("[click] back with no saved view; ignoring");
        }
    });
}
