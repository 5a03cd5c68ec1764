//! GeodomeApp struct definition and constructor.

use std::sync::Arc;
use std::time::Instant;

use winit::window::Window;

use geodome_config::DomeConfig;
use geodome_renderer::{FrameTimer, GeodesicDome, GpuSceneRenderer};

/// Top-level application state.
pub struct GeodomeApp {
    pub(super) config: DomeConfig,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) dome: Option<GeodesicDome<GpuSceneRenderer>>,

    // Frame timing
    pub(super) timer: FrameTimer,
    pub(super) last_stats: Instant,
}

impl GeodomeApp {
    pub fn new(config: DomeConfig) -> Self {
        Self {
            config,
            window: None,
            dome: None,
            timer: FrameTimer::new(),
            last_stats: Instant::now(),
        }
    }

    /// Request a redraw from the window (if it exists).
    pub(super) fn request_redraw(&self) {
        if let Some(ref w) = self.window {
            w.request_redraw();
        }
    }
}
