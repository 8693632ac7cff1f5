//! Keyboard affordances: Escape backs out of a detail view, arrow keys nudge
//! the orbit the way the authored controls bound them.

use crate::constants::ARROW_ROTATE_STEP;
use crate::core::{Choreographer, Director, OrbitControls};
use crate::overlay::DomSink;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_global_keydown(
    orbit: Rc<RefCell<OrbitControls>>,
    choreo: Rc<RefCell<Choreographer>>,
    director: Rc<RefCell<Director>>,
    sink: Rc<RefCell<DomSink>>,
) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        match ev.key().as_str() {
            "Escape" => {
                _ = director
                    .borrow_mut()
                    .back_requested(&mut choreo.borrow_mut(), &mut *sink.borrow_mut());
            }
            "ArrowLeft" => orbit.borrow_mut().rotate(ARROW_ROTATE_STEP, 0.0),
            "ArrowRight" => orbit.borrow_mut().rotate(-ARROW_ROTATE_STEP, 0.0),
            "ArrowUp" => orbit.borrow_mut().rotate(0.0, -ARROW_ROTATE_STEP),
            "ArrowDown" => orbit.borrow_mut().rotate(0.0, ARROW_ROTATE_STEP),
            _ => {}
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
