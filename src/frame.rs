//! Per-frame driver: one self-rescheduling tick that advances transitions
//! and orbit damping, re-evaluates anchor visibility and hover, and renders.

use crate::constants::{INTRO_TAG, SCREEN_VIDEO_ID};
use crate::core::{
    AnchorRegistry, Camera, ChoreoEvent, Choreographer, Director, HoverTester, OrbitControls,
    PointerState, SceneGraph, Viewport, VisibilityEvaluator,
};
use crate::dom;
use crate::overlay::DomSink;
use crate::render;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<SceneGraph>,
    pub registry: Rc<AnchorRegistry>,

    pub camera: Rc<RefCell<Camera>>,
    pub orbit: Rc<RefCell<OrbitControls>>,
    pub choreo: Rc<RefCell<Choreographer>>,
    pub director: Rc<RefCell<Director>>,
    pub sink: Rc<RefCell<DomSink>>,
    pub pointer: Rc<RefCell<PointerState>>,
    pub hover: Rc<RefCell<HoverTester>>,

    pub evaluator: VisibilityEvaluator,
    pub gpu: Option<render::GpuState<'static>>,

    pub last_instant: Instant,
    events: Vec<ChoreoEvent>,
    moving_applied: bool,
}

impl FrameContext {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        canvas: web::HtmlCanvasElement,
        scene: Rc<SceneGraph>,
        registry: Rc<AnchorRegistry>,
        camera: Rc<RefCell<Camera>>,
        orbit: Rc<RefCell<OrbitControls>>,
        choreo: Rc<RefCell<Choreographer>>,
        director: Rc<RefCell<Director>>,
        sink: Rc<RefCell<DomSink>>,
        pointer: Rc<RefCell<PointerState>>,
        hover: Rc<RefCell<HoverTester>>,
        gpu: Option<render::GpuState<'static>>,
    ) -> Self {
        Self {
            canvas,
            scene,
            registry,
            camera,
            orbit,
            choreo,
            director,
            sink,
            pointer,
            hover,
            evaluator: VisibilityEvaluator::new(),
            gpu,
            last_instant: Instant::now(),
            events: Vec::new(),
            moving_applied: false,
        }
    }

    /// One tick. Order matters: transitions and orbit damping first, then
    /// visibility and hover against the settled pose, then the render that
    /// uses that same pose.
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        // Marker math runs in CSS pixels; the GPU surface uses the backing
        // store size. Aspect is the same ratio either way.
        let rect = self.canvas.get_bounding_client_rect();
        let viewport = Viewport::new(rect.width() as f32, rect.height() as f32);

        {
            let mut camera = self.camera.borrow_mut();
            let mut orbit = self.orbit.borrow_mut();
            if !viewport.is_degenerate() {
                camera.aspect = viewport.width / viewport.height;
            }

            self.events.clear();
            self.choreo.borrow_mut().tick(
                dt,
                &mut camera.eye,
                &mut orbit.target,
                &mut self.events,
            );
            orbit.update(&mut camera);
        }

        {
            let mut sink = self.sink.borrow_mut();
            let director = self.director.borrow();
            for event in &self.events {
                director.handle_event(event, &mut *sink);
                if let ChoreoEvent::Completed {
                    tag: Some(INTRO_TAG),
                    ..
                } = event
                {
                    if let Some(document) = dom::window_document() {
                        dom::play_video(&document, SCREEN_VIDEO_ID);
                    }
                }
            }

            let moving = self.choreo.borrow().is_moving();
            if moving != self.moving_applied {
                self.moving_applied = moving;
                sink.set_moving(moving);
            }

            let camera = self.camera.borrow();
            self.evaluator.evaluate(
                &self.registry,
                &self.scene,
                &camera,
                viewport,
                &mut *sink,
            );
            self.hover
                .borrow_mut()
                .evaluate(&self.pointer.borrow(), &self.scene, &camera);
        }

        if let Some(gpu) = &mut self.gpu {
            gpu.resize_if_needed(self.canvas.width(), self.canvas.height());
            let view_proj = self.camera.borrow().view_proj();
            if let Err(e) = gpu.render(view_proj) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

/// Drive `frame` from `requestAnimationFrame`, rescheduling at the end of
/// each execution.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
