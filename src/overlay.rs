use crate::constants::HINT_OVERLAY_ID;
use fractal_core::{describe_settings, ControlSettings, HINT_KEYS};
use web_sys as web;

#[inline]
pub fn show_hint(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(HINT_OVERLAY_ID) {
        _ = el.class_list().remove_1("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide_hint(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(HINT_OVERLAY_ID) {
        _ = el.class_list().add_1("hidden");
        _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn is_hint_hidden(document: &web::Document) -> bool {
    if let Some(el) = document.get_element_by_id(HINT_OVERLAY_ID) {
        if el.class_list().contains("hidden") {
            return true;
        }
        return el
            .get_attribute("style")
            .map(|s| s.contains("display:none"))
            .unwrap_or(false);
    }
    false
}

#[inline]
pub fn toggle_hint(document: &web::Document) {
    if is_hint_hidden(document) {
        show_hint(document);
    } else {
        hide_hint(document);
    }
}

/// Refresh the hint overlay with the current control values
pub fn update_hint(document: &web::Document, settings: &ControlSettings) {
    if let Some(el) = document.get_element_by_id(HINT_OVERLAY_ID) {
        let hint_html = format!(
            "<div style='color: #f3e9ff; font: 13px system-ui; background: rgba(12, 8, 20, 0.8); padding: 8px 12px; border-radius: 6px; border: 1px solid rgba(150, 110, 190, 0.35);'>{}<br><span style='opacity: 0.7'>{}</span></div>",
            describe_settings(settings),
            HINT_KEYS
        );
        el.set_inner_html(&hint_html);
    }
}
