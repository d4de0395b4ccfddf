use crate::constants::{SPEED_KEY_STEP, SPEED_MAX, SPEED_MIN};
use crate::controls::ControlSettings;

// Keyboard shortcuts shared by the web and native frontends.
//
// Keys are matched on the logical key text (`KeyboardEvent.key` on the web,
// `Key::Character` on winit) so both frontends feed the same strings in.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    ToggleReduceFlash,
    ColorSpeedDown,
    ColorSpeedUp,
    ZoomSpeedDown,
    ZoomSpeedUp,
    ResetSpeeds,
    ToggleHint,
}

#[inline]
pub fn key_action(key: &str) -> Option<KeyAction> {
    match key {
        "f" | "F" => Some(KeyAction::ToggleReduceFlash),
        "[" => Some(KeyAction::ColorSpeedDown),
        "]" => Some(KeyAction::ColorSpeedUp),
        "-" | "_" => Some(KeyAction::ZoomSpeedDown),
        "=" | "+" => Some(KeyAction::ZoomSpeedUp),
        "0" => Some(KeyAction::ResetSpeeds),
        "h" | "H" => Some(KeyAction::ToggleHint),
        _ => None,
    }
}

#[inline]
fn step_speed(value: f64, direction: f64) -> f64 {
    let stepped = value + direction * SPEED_KEY_STEP;
    // Snap to the step grid so repeated presses don't accumulate float drift
    ((stepped / SPEED_KEY_STEP).round() * SPEED_KEY_STEP).clamp(SPEED_MIN, SPEED_MAX)
}

/// Apply a key action to the settings. Returns true when a control value
/// changed; `ToggleHint` is left to the frontend.
pub fn apply_key_action(action: KeyAction, settings: &mut ControlSettings) -> bool {
    let before = *settings;
    match action {
        KeyAction::ToggleReduceFlash => settings.reduce_flash = !settings.reduce_flash,
        KeyAction::ColorSpeedDown => settings.color_speed = step_speed(settings.color_speed, -1.0),
        KeyAction::ColorSpeedUp => settings.color_speed = step_speed(settings.color_speed, 1.0),
        KeyAction::ZoomSpeedDown => settings.zoom_speed = step_speed(settings.zoom_speed, -1.0),
        KeyAction::ZoomSpeedUp => settings.zoom_speed = step_speed(settings.zoom_speed, 1.0),
        KeyAction::ResetSpeeds => settings.reset_speeds(),
        KeyAction::ToggleHint => {}
    }
    *settings != before
}

/// Key legend shown under the settings line; every key token here is one
/// `key_action` accepts.
pub const HINT_KEYS: &str = "F flash • [ ] color • - = zoom • 0 reset • H hide";

/// One-line summary used by the hint overlay and the native log.
pub fn describe_settings(settings: &ControlSettings) -> String {
    format!(
        "Reduce flash: {} • Color speed: {:.2} • Zoom speed: {:.2}",
        if settings.reduce_flash { "on" } else { "off" },
        settings.color_speed,
        settings.zoom_speed
    )
}
