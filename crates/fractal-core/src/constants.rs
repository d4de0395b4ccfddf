// Shared animation tuning constants used by both web and native frontends.

// Reduce-flash scaling applied to the raw speed preferences
pub const REDUCED_COLOR_SPEED_FACTOR: f64 = 0.2;
pub const REDUCED_ZOOM_SPEED_FACTOR: f64 = 0.15;

// Pan orbit (independent frequencies so the path never closes into a circle)
pub const PAN_AMPLITUDE: f64 = 0.35;
pub const PAN_FREQ_X: f64 = 0.2;
pub const PAN_FREQ_Y: f64 = 0.17;

// Primary zoom oscillator
pub const BASE_ZOOM_MID: f64 = 0.85;
pub const BASE_ZOOM_SWING: f64 = 0.15;
pub const BASE_ZOOM_FREQ: f64 = 0.3; // added to the effective zoom speed

// Slow "breathing depth" oscillator
pub const DEEP_ZOOM_FREQ: f64 = 0.07;
pub const DEEP_ZOOM_GAIN: f64 = 0.25;
pub const DEEP_ZOOM_SPEED_SCALE: f64 = 0.75;

// Palette cycling
pub const COLOR_PHASE_BASE_RATE: f64 = 0.8;
pub const COLOR_PHASE_SPEED_GAIN: f64 = 2.2;

// Strobe intensity when reduce-flash is off (not user-tunable)
pub const STROBE_INTENSITY: f64 = 0.75;

// Control defaults and the range the sliders/keys can reach
pub const DEFAULT_COLOR_SPEED: f64 = 1.0;
pub const DEFAULT_ZOOM_SPEED: f64 = 1.0;
pub const SPEED_MIN: f64 = 0.0;
pub const SPEED_MAX: f64 = 3.0;
pub const SPEED_KEY_STEP: f64 = 0.05;

// Bounds on typed-in speed preferences. The magnitude limit keeps `t * speed`
// finite for any realistic run time; the zoom floor sits just above -8/3,
// where the breathing oscillator's minimum reaches zero.
pub const SPEED_INPUT_LIMIT: f64 = 1.0e6;
pub const ZOOM_SPEED_FLOOR: f64 = -2.6;

// Advisory only; loops follow the display cadence
pub const TARGET_FPS: f64 = 60.0;
