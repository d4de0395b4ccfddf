// Page contract: element ids the web frontend looks up at startup.
pub const CANVAS_ID: &str = "app-canvas";
pub const REDUCE_FLASH_ID: &str = "safe";
pub const COLOR_SPEED_ID: &str = "colorSpeed";
pub const ZOOM_SPEED_ID: &str = "zoomSpeed";
pub const HINT_OVERLAY_ID: &str = "hint-overlay";

// Background behind the fractal while the first frame is being prepared
pub const CLEAR_COLOR: [f64; 3] = [0.0, 0.0, 0.0];

// Interval between fps reports in the console (seconds)
pub const FPS_REPORT_INTERVAL_SEC: u64 = 5;
