pub mod clock;
pub mod constants;
pub mod controls;
pub mod keys;
pub mod params;
pub mod uniforms;

// Shader bundled as a string constant; both front ends compile it at startup
pub static FRACTAL_WGSL: &str = include_str!("../shaders/fractal.wgsl");

pub use clock::*;
pub use constants::*;
pub use controls::*;
pub use keys::*;
pub use params::*;
pub use uniforms::*;
