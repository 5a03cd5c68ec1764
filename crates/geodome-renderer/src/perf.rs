//! Frame timing and performance monitoring.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Timing handed to a visual for one frame, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTick {
    pub delta_ms: f64,
    pub elapsed_ms: f64,
}

/// Tracks frame durations for FPS calculation and drives per-frame timing.
pub struct FrameTimer {
    frame_times: VecDeque<Duration>,
    started: Instant,
    last_frame: Instant,
    max_samples: usize,
}

impl FrameTimer {
    /// Create a new frame timer with a default 120-sample rolling window.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            frame_times: VecDeque::new(),
            started: now,
            last_frame: now,
            max_samples: 120,
        }
    }

    /// Record the start of a new frame. Call this once per frame.
    pub fn begin_frame(&mut self) -> FrameTick {
        self.begin_frame_at(Instant::now())
    }

    fn begin_frame_at(&mut self, now: Instant) -> FrameTick {
        let dt = now.saturating_duration_since(self.last_frame);
        self.last_frame = now;
        self.frame_times.push_back(dt);
        if self.frame_times.len() > self.max_samples {
            self.frame_times.pop_front();
        }
        FrameTick {
            delta_ms: dt.as_secs_f64() * 1000.0,
            elapsed_ms: now.saturating_duration_since(self.started).as_secs_f64() * 1000.0,
        }
    }

    /// Average frames per second over the sample window.
    pub fn fps(&self) -> f64 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        let total: f64 = self.frame_times.iter().map(|d| d.as_secs_f64()).sum();
        if total <= 0.0 {
            return 0.0;
        }
        self.frame_times.len() as f64 / total
    }

    /// Average frame time in milliseconds.
    pub fn frame_time_ms(&self) -> f64 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        let total: f64 = self.frame_times.iter().map(|d| d.as_secs_f64()).sum();
        (total / self.frame_times.len() as f64) * 1000.0
    }

    /// Number of frame samples currently stored.
    pub fn sample_count(&self) -> usize {
        self.frame_times.len()
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}
