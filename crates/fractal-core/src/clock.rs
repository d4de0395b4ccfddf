use crate::constants::TARGET_FPS;
use instant::Instant;
use std::time::Duration;

/// Wall-clock time since the animation started.
///
/// Only elapsed time carries across frames; the derivation reads it fresh
/// every call so the animation looks the same at any frame rate.
#[derive(Clone, Copy, Debug)]
pub struct AnimationClock {
    start: Instant,
}

impl AnimationClock {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    #[inline]
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed().as_secs_f64()
    }
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::start()
    }
}

/// Rolling frame counter for periodic fps reports. The target rate is
/// advisory; nothing here throttles the loop.
#[derive(Clone, Debug)]
pub struct FrameStats {
    window: Duration,
    frames: u32,
    accum: Duration,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FpsReport {
    pub fps: f64,
    pub below_target: bool,
}

impl FrameStats {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            frames: 0,
            accum: Duration::ZERO,
        }
    }

    /// Record one frame that took `dt`; yields a report once per window.
    pub fn record(&mut self, dt: Duration) -> Option<FpsReport> {
        self.frames += 1;
        self.accum += dt;
        if self.accum < self.window || self.accum.is_zero() {
            return None;
        }
        let fps = self.frames as f64 / self.accum.as_secs_f64();
        self.frames = 0;
        self.accum = Duration::ZERO;
        Some(FpsReport {
            fps,
            // allow a little slack for display timing jitter
            below_target: fps < TARGET_FPS * 0.9,
        })
    }
}
