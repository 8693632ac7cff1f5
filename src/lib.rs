#![cfg(target_arch = "wasm32")]
//! Web entry point: builds the scene, resolves anchors, wires input, and
//! starts the frame loop.

use glam::Vec3;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod office;
mod overlay;
mod render;

use crate::constants::*;
use crate::core::{
    AnchorRegistry, Camera, CameraProperty, Choreographer, Director, HoverTester, OrbitControls,
    PointerState, TransitionRequest,
};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("office-scene starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = document
        .query_selector("canvas.webgl")
        .ok()
        .flatten()
        .ok_or_else(|| anyhow::anyhow!("missing canvas.webgl"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    wire_canvas_resize(&canvas);

    // Scene graph and anchors. The procedural office stands in for the
    // loaded asset; names match the authored bindings.
    let scene = Rc::new(office::build_office_scene());
    let registry = Rc::new(AnchorRegistry::resolve(&scene, ANCHOR_DEFS));
    log::info!(
        "[anchors] resolved {}/{} definitions",
        registry.len(),
        ANCHOR_DEFS.len()
    );

    let camera = Rc::new(RefCell::new(Camera {
        eye: CAMERA_START_EYE,
        target: DEFAULT_ORBIT_TARGET,
        up: Vec3::Y,
        aspect: 1.0,
        fovy_radians: CAMERA_FOVY_RADIANS,
        znear: CAMERA_ZNEAR,
        zfar: CAMERA_ZFAR,
    }));
    let orbit = {
        let mut controls = OrbitControls::new(DEFAULT_ORBIT_TARGET);
        controls.damping = ORBIT_DAMPING;
        controls.max_distance = ORBIT_MAX_DISTANCE;
        controls.max_polar = ORBIT_MAX_POLAR;
        Rc::new(RefCell::new(controls))
    };

    let choreo = Rc::new(RefCell::new(Choreographer::new()));
    // Intro fly-in to the presentation pose; its completion starts the
    // screen video instead of a timed guess.
    choreo.borrow_mut().request(
        TransitionRequest::new(CameraProperty::Eye, CAMERA_INTRO_EYE, INTRO_DURATION)
            .with_delay(INTRO_DELAY)
            .with_tag(INTRO_TAG),
    );

    let director = Rc::new(RefCell::new(Director::new()));
    let sink = Rc::new(RefCell::new(overlay::DomSink::new(
        &document,
        ANCHOR_DEFS.iter().map(|d| d.id),
    )));
    let pointer = Rc::new(RefCell::new(PointerState::default()));
    let hover = Rc::new(RefCell::new(HoverTester::new(SCREEN_SURFACE_NODE)));

    events::wire_input_handlers(
        &document,
        events::InputWiring {
            canvas: canvas.clone(),
            registry: registry.clone(),
            camera: camera.clone(),
            orbit: orbit.clone(),
            choreo: choreo.clone(),
            director: director.clone(),
            sink: sink.clone(),
            pointer: pointer.clone(),
            hover: hover.clone(),
        },
    );
    events::wire_global_keydown(
        orbit.clone(),
        choreo.clone(),
        director.clone(),
        sink.clone(),
    );

    let gpu = render::init_gpu(&canvas, &scene).await;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        canvas, scene, registry, camera, orbit, choreo, director, sink, pointer, hover, gpu,
    )));
    frame::start_loop(frame_ctx);
    Ok(())
}

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}
