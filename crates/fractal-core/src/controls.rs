//! Control values read by the animation once per frame.
//!
//! Front ends own the actual widgets (DOM inputs on the web, key presses on
//! native); this module holds the value snapshot, the source trait both front
//! ends implement, and the lenient speed parser.

use crate::constants::{DEFAULT_COLOR_SPEED, DEFAULT_ZOOM_SPEED, SPEED_INPUT_LIMIT, ZOOM_SPEED_FLOOR};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ControlError {
    #[error("speed value is empty")]
    Empty,
    #[error("speed value {0:?} is not a number")]
    NotANumber(String),
    #[error("speed value {0:?} is not finite")]
    NonFinite(String),
}

/// Anything that can report the three animation controls.
pub trait ParameterSource {
    fn reduce_flash(&self) -> bool;
    fn color_speed_preference(&self) -> f64;
    fn zoom_speed_preference(&self) -> f64;

    fn snapshot(&self) -> ControlSettings {
        ControlSettings {
            reduce_flash: self.reduce_flash(),
            color_speed: self.color_speed_preference(),
            zoom_speed: self.zoom_speed_preference(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlSettings {
    pub reduce_flash: bool,
    pub color_speed: f64,
    pub zoom_speed: f64,
}

impl Default for ControlSettings {
    fn default() -> Self {
        Self {
            reduce_flash: false,
            color_speed: DEFAULT_COLOR_SPEED,
            zoom_speed: DEFAULT_ZOOM_SPEED,
        }
    }
}

impl ControlSettings {
    /// Initial settings; reduce-flash starts on when the host asks for
    /// reduced motion.
    pub fn initial(prefers_reduced_motion: impl FnOnce() -> bool) -> Self {
        Self {
            reduce_flash: prefers_reduced_motion(),
            ..Self::default()
        }
    }

    pub fn reset_speeds(&mut self) {
        self.color_speed = DEFAULT_COLOR_SPEED;
        self.zoom_speed = DEFAULT_ZOOM_SPEED;
    }
}

impl ParameterSource for ControlSettings {
    fn reduce_flash(&self) -> bool {
        self.reduce_flash
    }
    fn color_speed_preference(&self) -> f64 {
        self.color_speed
    }
    fn zoom_speed_preference(&self) -> f64 {
        self.zoom_speed
    }
}

// Longest leading run that could belong to a decimal float literal
fn float_candidate(s: &str) -> &str {
    let end = s
        .find(|c: char| !(c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')))
        .unwrap_or(s.len());
    &s[..end]
}

/// Parse a speed preference the way a browser `parseFloat` reads slider text:
/// leading whitespace is skipped and trailing garbage after a valid number is
/// ignored ("0.75x" is 0.75).
pub fn try_parse_speed(raw: &str) -> Result<f64, ControlError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ControlError::Empty);
    }
    if let Ok(v) = trimmed.parse::<f64>() {
        return if v.is_finite() {
            Ok(v)
        } else {
            Err(ControlError::NonFinite(raw.to_string()))
        };
    }
    // candidate is ASCII-only, so every index is a char boundary
    let candidate = float_candidate(trimmed);
    (1..=candidate.len())
        .rev()
        .find_map(|n| candidate[..n].parse::<f64>().ok())
        .ok_or_else(|| ControlError::NotANumber(raw.to_string()))
}

/// Lenient variant used every frame: anything unusable becomes `0.0`.
/// Negative values pass through; magnitudes are capped at
/// `SPEED_INPUT_LIMIT`.
pub fn parse_speed(raw: &str) -> f64 {
    match try_parse_speed(raw) {
        Ok(v) => v.clamp(-SPEED_INPUT_LIMIT, SPEED_INPUT_LIMIT),
        Err(e) => {
            log::debug!("[controls] {e}; using 0");
            0.0
        }
    }
}

/// Zoom speed text; like `parse_speed` but never below `ZOOM_SPEED_FLOOR`,
/// so the derived zoom stays positive.
pub fn parse_zoom_speed(raw: &str) -> f64 {
    parse_speed(raw).max(ZOOM_SPEED_FLOOR)
}

/// Interpret a host-provided reduced-motion flag such as an environment
/// variable value.
pub fn reduced_motion_flag(value: Option<&str>) -> bool {
    match value {
        Some(v) => matches!(
            v.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on" | "reduce"
        ),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_padded_numbers() {
        assert_eq!(parse_speed("1.5"), 1.5);
        assert_eq!(parse_speed("  2 "), 2.0);
        assert_eq!(parse_speed("0.75abc"), 0.75);
        assert_eq!(parse_speed(".5"), 0.5);
        assert_eq!(parse_speed("1e"), 1.0);
    }

    #[test]
    fn unusable_values_become_zero() {
        assert_eq!(parse_speed(""), 0.0);
        assert_eq!(parse_speed("fast"), 0.0);
        assert_eq!(parse_speed("NaN"), 0.0);
        assert_eq!(parse_speed("inf"), 0.0);
    }

    #[test]
    fn negative_speeds_pass_through() {
        assert_eq!(parse_speed("-0.5"), -0.5);
        assert_eq!(parse_speed("-2"), -2.0);
        assert_eq!(parse_zoom_speed("-0.5"), -0.5);
        assert_eq!(parse_zoom_speed("-2.6"), ZOOM_SPEED_FLOOR);
        assert_eq!(parse_zoom_speed("-3"), ZOOM_SPEED_FLOOR);
        let p = crate::params::derive_frame_parameters(10.0, false, 1.0, parse_zoom_speed("-0.5"));
        assert!(p.zoom > 0.0);
    }

    #[test]
    fn huge_magnitudes_are_capped() {
        assert_eq!(parse_speed("1e308"), SPEED_INPUT_LIMIT);
        assert_eq!(parse_speed("-1e308"), -SPEED_INPUT_LIMIT);
        assert_eq!(parse_zoom_speed("-1e308"), ZOOM_SPEED_FLOOR);
        let p = crate::params::derive_frame_parameters(
            42.0,
            false,
            parse_speed("-1e308"),
            parse_zoom_speed("1e308"),
        );
        assert!(p.is_finite());
        assert!(p.zoom > 0.0);
    }

    #[test]
    fn checked_parser_reports_why() {
        assert_eq!(try_parse_speed("   "), Err(ControlError::Empty));
        assert_eq!(
            try_parse_speed("abc"),
            Err(ControlError::NotANumber("abc".to_string()))
        );
        assert_eq!(
            try_parse_speed("inf"),
            Err(ControlError::NonFinite("inf".to_string()))
        );
        assert_eq!(try_parse_speed("-2"), Ok(-2.0));
    }

    #[test]
    fn reduced_motion_defaults_reduce_flash() {
        assert!(ControlSettings::initial(|| true).reduce_flash);
        let s = ControlSettings::initial(|| false);
        assert!(!s.reduce_flash);
        assert_eq!(s.color_speed, DEFAULT_COLOR_SPEED);
        assert_eq!(s.zoom_speed, DEFAULT_ZOOM_SPEED);
    }

    #[test]
    fn reduced_motion_flag_values() {
        assert!(reduced_motion_flag(Some("1")));
        assert!(reduced_motion_flag(Some(" TRUE ")));
        assert!(reduced_motion_flag(Some("on")));
        assert!(!reduced_motion_flag(Some("0")));
        assert!(!reduced_motion_flag(Some("")));
        assert!(!reduced_motion_flag(None));
    }
}
