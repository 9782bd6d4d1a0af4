use web_time::{Duration, Instant};

/// Measures elapsed time between consecutive frames of the render loop.
///
/// All autonomous motion is scaled by the `dt` this clock reports, so the
/// camera moves at the same world speed regardless of display refresh rate.
pub struct FrameTiming {
    /// Timestamp of the previous frame (`None` before the first frame).
    last_frame: Option<Instant>,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameTiming {
    /// Create a clock that has not seen any frame yet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_frame: None,
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Record a frame at `now` and return the time since the previous one.
    ///
    /// The first frame, and any frame stamped earlier than its predecessor,
    /// reports zero.
    pub fn tick(&mut self, now: Instant) -> Duration {
        let elapsed = self
            .last_frame
            .map_or(Duration::ZERO, |last| now.saturating_duration_since(last));
        self.last_frame = Some(self.last_frame.map_or(now, |last| last.max(now)));

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        elapsed
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self::new()
    }
}
