//! Per-frame advance and resize forwarding.

use std::time::{Duration, Instant};

use geodome_renderer::Visual;

use super::core::GeodomeApp;

/// How often frame statistics are logged at debug level.
const STATS_INTERVAL: Duration = Duration::from_secs(5);

impl GeodomeApp {
    /// Advance the dome by the time since the last frame and draw it.
    pub(super) fn render_frame(&mut self) {
        let Some(ref mut dome) = self.dome else {
            return;
        };

        let tick = self.timer.begin_frame();
        if let Err(e) = dome.advance(tick.delta_ms, tick.elapsed_ms) {
            tracing::error!("Render error: {e}");
        }

        if self.last_stats.elapsed() >= STATS_INTERVAL {
            self.last_stats = Instant::now();
            tracing::debug!(
                "{:.1} fps ({:.2} ms/frame), camera at {:.1}s",
                self.timer.fps(),
                self.timer.frame_time_ms(),
                dome.camera().elapsed(),
            );
        }
    }

    /// Forward a window resize to the dome.
    pub(super) fn handle_resize(&mut self, width: u32, height: u32) {
        let Some(ref mut dome) = self.dome else {
            return;
        };

        tracing::debug!("Resized to {width}x{height}");
        if let Err(e) = dome.resize(width, height) {
            tracing::error!("Render error after resize: {e}");
        }
    }
}
