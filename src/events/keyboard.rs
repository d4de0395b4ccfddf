use crate::controls::DomControls;
use crate::overlay;
use fractal_core::{apply_key_action, describe_settings, key_action, KeyAction, ParameterSource};
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, controls: &DomControls, document: &web::Document) {
    if ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
        return;
    }
    let Some(action) = key_action(&ev.key()) else {
        return;
    };
    if action == KeyAction::ToggleHint {
        overlay::toggle_hint(document);
        return;
    }
    let mut settings = controls.snapshot();
    if apply_key_action(action, &mut settings) {
        controls.store(&settings);
        overlay::update_hint(document, &settings);
        log::info!("[keys] {}", describe_settings(&settings));
    }
    ev.prevent_default();
}
