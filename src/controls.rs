use crate::constants::{COLOR_SPEED_ID, REDUCE_FLASH_ID, ZOOM_SPEED_ID};
use crate::dom;
use fractal_core::{parse_speed, parse_zoom_speed, ControlSettings, ParameterSource};
use std::cell::Cell;
use web_sys as web;

/// Controls backed by the page's `<input>` elements, read fresh every frame.
///
/// Missing elements fall back to an in-memory value that keyboard shortcuts
/// still adjust, so the demo runs on a bare page with just a canvas.
pub struct DomControls {
    reduce_flash: Option<web::HtmlInputElement>,
    color_speed: Option<web::HtmlInputElement>,
    zoom_speed: Option<web::HtmlInputElement>,
    fallback: Cell<ControlSettings>,
}

impl DomControls {
    pub fn new(document: &web::Document, prefers_reduced_motion: impl FnOnce() -> bool) -> Self {
        let controls = Self {
            reduce_flash: dom::input_by_id(document, REDUCE_FLASH_ID),
            color_speed: dom::input_by_id(document, COLOR_SPEED_ID),
            zoom_speed: dom::input_by_id(document, ZOOM_SPEED_ID),
            fallback: Cell::new(ControlSettings::initial(prefers_reduced_motion)),
        };
        // Only force the checkbox on; an unchecked page default stays as authored
        if controls.fallback.get().reduce_flash {
            if let Some(el) = &controls.reduce_flash {
                el.set_checked(true);
            }
            log::info!("[controls] reduced motion requested; reduce flash on");
        }
        controls
    }

    /// Write settings back to the widgets (used by keyboard shortcuts).
    pub fn store(&self, settings: &ControlSettings) {
        if let Some(el) = &self.reduce_flash {
            el.set_checked(settings.reduce_flash);
        }
        if let Some(el) = &self.color_speed {
            el.set_value(&format!("{:.2}", settings.color_speed));
        }
        if let Some(el) = &self.zoom_speed {
            el.set_value(&format!("{:.2}", settings.zoom_speed));
        }
        self.fallback.set(*settings);
    }
}

impl ParameterSource for DomControls {
    fn reduce_flash(&self) -> bool {
        match &self.reduce_flash {
            Some(el) => el.checked(),
            None => self.fallback.get().reduce_flash,
        }
    }

    fn color_speed_preference(&self) -> f64 {
        match &self.color_speed {
            Some(el) => parse_speed(&el.value()),
            None => self.fallback.get().color_speed,
        }
    }

    fn zoom_speed_preference(&self) -> f64 {
        match &self.zoom_speed {
            Some(el) => parse_zoom_speed(&el.value()),
            None => self.fallback.get().zoom_speed,
        }
    }
}
