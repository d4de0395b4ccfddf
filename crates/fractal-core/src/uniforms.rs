use crate::params::FrameParameters;

/// GPU-side uniform block; field order matches `FractalUniforms` in
/// `shaders/fractal.wgsl`.
///
/// Shader naming: `resolution` is `u_res`, `center` is `u_center`, `time` is
/// `u_time`, `zoom` is `u_zoom`, `color_phase` is `u_colorPhase` and `strobe`
/// is `u_strobe`.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FractalUniforms {
    pub resolution: [f32; 2],
    pub center: [f32; 2],
    pub time: f32,
    pub zoom: f32,
    pub color_phase: f32,
    pub strobe: f32,
}

impl FractalUniforms {
    pub fn new(params: &FrameParameters, width: u32, height: u32) -> Self {
        Self {
            // zero-sized viewports would divide by zero in the shader
            resolution: [width.max(1) as f32, height.max(1) as f32],
            center: params.center.as_vec2().to_array(),
            time: params.elapsed_seconds as f32,
            zoom: params.zoom as f32,
            color_phase: params.color_phase as f32,
            strobe: params.strobe_intensity as f32,
        }
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::derive_frame_parameters;

    #[test]
    fn layout_matches_wgsl_block() {
        assert_eq!(std::mem::size_of::<FractalUniforms>(), 32);
        assert_eq!(std::mem::size_of::<FractalUniforms>() % 16, 0);
    }

    #[test]
    fn forwards_parameters_verbatim() {
        let p = derive_frame_parameters(2.5, false, 1.0, 1.0);
        let u = FractalUniforms::new(&p, 1280, 720);
        assert_eq!(u.resolution, [1280.0, 720.0]);
        assert_eq!(u.center, [p.center.x as f32, p.center.y as f32]);
        assert_eq!(u.time, 2.5);
        assert_eq!(u.zoom, p.zoom as f32);
        assert_eq!(u.color_phase, p.color_phase as f32);
        assert_eq!(u.strobe, 0.75);
    }

    #[test]
    fn zero_viewport_is_clamped() {
        let p = derive_frame_parameters(0.0, true, 1.0, 1.0);
        let u = FractalUniforms::new(&p, 0, 0);
        assert_eq!(u.resolution, [1.0, 1.0]);
        assert_eq!(u.strobe, 0.0);
    }
}
