//! Frame timing for hosts that drive the engine from a render loop.

use web_time::{Duration, Instant};

/// Per-frame clock: produces the `dt` handed to
/// [`CarouselEngine::tick`](crate::engine::CarouselEngine::tick) and a
/// smoothed FPS for display.
///
/// Long stalls (a backgrounded tab, a debugger break) are clamped to
/// `max_dt` so the carousel resumes from where it was instead of jumping.
#[derive(Debug, Clone)]
pub struct FrameClock {
    /// Last frame timestamp
    last_frame: Instant,
    /// Upper bound on a single step
    max_dt: Duration,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
    frames: u64,
}

impl FrameClock {
    /// Default stall clamp: a tenth of a second.
    pub const DEFAULT_MAX_DT: Duration = Duration::from_millis(100);

    /// Start a clock at the current instant.
    #[must_use]
    pub fn new(max_dt: Duration) -> Self {
        Self {
            last_frame: Instant::now(),
            max_dt,
            smoothed_fps: 60.0,
            smoothing: 0.05,
            frames: 0,
        }
    }

    /// Call once per frame; returns the clamped step in seconds.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.advance(elapsed)
    }

    /// Account for a frame that took `elapsed`; returns the clamped step
    /// in seconds.
    pub fn advance(&mut self, elapsed: Duration) -> f32 {
        self.frames += 1;
        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        elapsed.min(self.max_dt).as_secs_f32()
    }

    /// Current FPS (smoothed).
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }

    /// Frames counted so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_DT)
    }
}
