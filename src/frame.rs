use crate::controls::DomControls;
use crate::overlay;
use crate::render;
use fractal_core::{AnimationClock, ControlSettings, FrameParameters, FrameStats, ParameterSource};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub clock: AnimationClock,
    pub controls: Rc<DomControls>,
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState>,

    pub last_instant: Instant,
    pub stats: FrameStats,
    pub last_settings: Option<ControlSettings>,
}

impl FrameContext {
    /// One animation tick. Returns false once there is nothing left to draw.
    pub fn frame(&mut self) -> bool {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        if let Some(report) = self.stats.record(dt) {
            if report.below_target {
                log::debug!("[frame] {:.1} fps (below target)", report.fps);
            }
        }

        let settings = self.controls.snapshot();
        if self.last_settings != Some(settings) {
            overlay::update_hint(&self.document, &settings);
            self.last_settings = Some(settings);
        }
        let params = FrameParameters::derive(self.clock.elapsed_seconds(), &settings);

        let Some(gpu) = self.gpu.as_mut() else {
            return false;
        };
        // Canvas backing size is kept in sync by the resize listener
        gpu.resize_if_needed(self.canvas.width(), self.canvas.height());
        match gpu.render(&params) {
            Ok(()) => true,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                gpu.reconfigure();
                true
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("[frame] GPU out of memory; stopping animation");
                self.gpu = None;
                false
            }
            Err(e) => {
                log::warn!("[frame] skipped frame: {:?}", e);
                true
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState> {
    match render::GpuState::new(canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !frame_ctx_tick.borrow_mut().frame() {
            log::info!("[frame] animation loop stopped");
            return;
        }
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
