//! Per-frame animation parameters for the fractal shader.
//!
//! Everything here is a pure function of elapsed time and the current control
//! values, so a frame can be derived at any cadence and re-derived with the
//! same inputs to get the same bits back.

use crate::constants::*;
use crate::controls::ControlSettings;
use glam::DVec2;

/// Parameter bundle handed to the renderer each frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameParameters {
    pub elapsed_seconds: f64,
    /// Pan offset, each axis within `±PAN_AMPLITUDE`.
    pub center: DVec2,
    pub zoom: f64,
    pub color_phase: f64,
    /// In `[0, STROBE_INTENSITY]`; zero whenever reduce-flash is on.
    pub strobe_intensity: f64,
}

/// Color and zoom speeds after the reduce-flash scaling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EffectiveSpeeds {
    pub color: f64,
    pub zoom: f64,
}

#[inline]
pub fn effective_speeds(
    reduce_flash: bool,
    color_speed_raw: f64,
    zoom_speed_raw: f64,
) -> EffectiveSpeeds {
    if reduce_flash {
        EffectiveSpeeds {
            color: color_speed_raw * REDUCED_COLOR_SPEED_FACTOR,
            zoom: zoom_speed_raw * REDUCED_ZOOM_SPEED_FACTOR,
        }
    } else {
        EffectiveSpeeds {
            color: color_speed_raw,
            zoom: zoom_speed_raw,
        }
    }
}

#[inline]
pub fn pan_center(t: f64) -> DVec2 {
    DVec2::new(
        PAN_AMPLITUDE * (t * PAN_FREQ_X).sin(),
        PAN_AMPLITUDE * (t * PAN_FREQ_Y).cos(),
    )
}

#[inline]
pub fn base_zoom(t: f64, zoom_speed: f64) -> f64 {
    BASE_ZOOM_MID + BASE_ZOOM_SWING * (t * (BASE_ZOOM_FREQ + zoom_speed)).sin()
}

/// Slow secondary oscillator; `(sin + 1)` stays in `[0, 2]` so this is
/// `>= 1.0` for any non-negative zoom speed and stays positive down to a
/// zoom speed of `-8/3`.
#[inline]
pub fn deep_zoom(t: f64, zoom_speed: f64) -> f64 {
    1.0 + DEEP_ZOOM_GAIN
        * ((t * DEEP_ZOOM_FREQ).sin() + 1.0)
        * (zoom_speed * DEEP_ZOOM_SPEED_SCALE)
}

#[inline]
pub fn color_phase(t: f64, color_speed: f64) -> f64 {
    t * (COLOR_PHASE_BASE_RATE + color_speed * COLOR_PHASE_SPEED_GAIN)
}

#[inline]
pub fn strobe_intensity(reduce_flash: bool) -> f64 {
    if reduce_flash {
        0.0
    } else {
        STROBE_INTENSITY
    }
}

pub fn derive_frame_parameters(
    elapsed_seconds: f64,
    reduce_flash: bool,
    color_speed_raw: f64,
    zoom_speed_raw: f64,
) -> FrameParameters {
    let t = elapsed_seconds;
    let speeds = effective_speeds(reduce_flash, color_speed_raw, zoom_speed_raw);
    FrameParameters {
        elapsed_seconds: t,
        center: pan_center(t),
        zoom: base_zoom(t, speeds.zoom) * deep_zoom(t, speeds.zoom),
        color_phase: color_phase(t, speeds.color),
        strobe_intensity: strobe_intensity(reduce_flash),
    }
}

impl FrameParameters {
    #[inline]
    pub fn derive(elapsed_seconds: f64, settings: &ControlSettings) -> Self {
        derive_frame_parameters(
            elapsed_seconds,
            settings.reduce_flash,
            settings.color_speed,
            settings.zoom_speed,
        )
    }

    pub fn is_finite(&self) -> bool {
        self.elapsed_seconds.is_finite()
            && self.center.is_finite()
            && self.zoom.is_finite()
            && self.color_phase.is_finite()
            && self.strobe_intensity.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn start_of_animation_with_unit_speeds() {
        let p = derive_frame_parameters(0.0, false, 1.0, 1.0);
        assert_eq!(p.center, DVec2::new(0.0, 0.35));
        assert!(approx(base_zoom(0.0, 1.0), 0.85));
        // sin(0) + 1 == 1, so the breathing term contributes 0.25 * 0.75
        assert!(approx(deep_zoom(0.0, 1.0), 1.1875));
        assert!(approx(p.zoom, 0.85 * 1.1875));
        assert_eq!(p.color_phase, 0.0);
        assert_eq!(p.strobe_intensity, 0.75);
    }

    #[test]
    fn deep_zoom_is_neutral_without_zoom_speed() {
        assert_eq!(deep_zoom(0.0, 0.0), 1.0);
        assert_eq!(deep_zoom(123.4, 0.0), 1.0);
        let p = derive_frame_parameters(0.0, false, 1.0, 0.0);
        assert!(approx(p.zoom, 0.85));
    }

    #[test]
    fn reduce_flash_scales_speeds_and_kills_strobe() {
        let s = effective_speeds(true, 1.0, 1.0);
        assert_eq!(s.color, 1.0 * REDUCED_COLOR_SPEED_FACTOR);
        assert_eq!(s.zoom, 1.0 * REDUCED_ZOOM_SPEED_FACTOR);

        let p = derive_frame_parameters(0.0, true, 1.0, 1.0);
        assert_eq!(p.strobe_intensity, 0.0);
        assert!(approx(p.zoom, 0.85 * deep_zoom(0.0, 0.15)));
    }

    #[test]
    fn negative_zoom_speed_stays_positive_above_floor() {
        let p = derive_frame_parameters(10.0, false, 1.0, -0.5);
        assert!((p.zoom - 0.6036063924764545).abs() < 1e-9);
        for i in 0..500 {
            let t = i as f64 * 0.61;
            assert!(deep_zoom(t, ZOOM_SPEED_FLOOR) > 0.0);
            assert!(derive_frame_parameters(t, false, 1.0, ZOOM_SPEED_FLOOR).zoom > 0.0);
        }
    }

    #[test]
    fn color_phase_grows_with_time() {
        let a = derive_frame_parameters(1.0, false, 1.0, 1.0);
        let b = derive_frame_parameters(2.0, false, 1.0, 1.0);
        assert!(approx(a.color_phase, 3.0));
        assert!(b.color_phase > a.color_phase);
    }
}
