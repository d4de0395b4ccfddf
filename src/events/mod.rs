mod keyboard;

use crate::controls::DomControls;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_global_keydown(controls: Rc<DomControls>, document: web::Document) {
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        keyboard::handle_global_keydown(&ev, &controls, &document);
    }) as Box<dyn FnMut(web::KeyboardEvent)>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
