//! Window creation and dome/renderer initialization.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use geodome_common::{Color, GeodomeError};
use geodome_config::colors::parse_color;
use geodome_renderer::{FrameTimer, GeodesicDome, GpuContext, GpuSceneRenderer};

use super::core::GeodomeApp;

impl GeodomeApp {
    /// Create the window, initialize the GPU, and build the dome.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        match self.try_initialize(event_loop) {
            Ok(()) => {
                tracing::info!("Window created and renderer initialized");
                true
            }
            Err(e) => {
                tracing::error!("Initialization failed: {e}");
                false
            }
        }
    }

    fn try_initialize(&mut self, event_loop: &ActiveEventLoop) -> Result<(), GeodomeError> {
        let attrs = WindowAttributes::default()
            .with_title(self.config.window.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.window.width as f64,
                self.config.window.height as f64,
            ));

        let window = event_loop
            .create_window(attrs)
            .map(Arc::new)
            .map_err(|e| GeodomeError::Window(e.to_string()))?;

        let gpu = pollster::block_on(GpuContext::new(window.clone()))
            .map_err(|e| GeodomeError::Renderer(e.to_string()))?;

        self.dome = Some(self.build_dome(gpu)?);
        self.window = Some(window);

        // Don't count setup time as the first frame's delta
        self.timer = FrameTimer::new();
        Ok(())
    }

    fn build_dome(
        &self,
        gpu: GpuContext,
    ) -> Result<GeodesicDome<GpuSceneRenderer>, GeodomeError> {
        let mut rng = match self.config.seed {
            Some(seed) => {
                tracing::info!("Using seed {seed}");
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };

        let clear = parse_color(&self.config.window.clear_color).unwrap_or_else(|e| {
            tracing::warn!("{e}, clearing to black");
            Color::BLACK
        });
        let size = gpu.size;

        GeodesicDome::from_config(&self.config, &mut rng, size, move |mesh| {
            Ok(GpuSceneRenderer::new(gpu, mesh, clear))
        })
    }
}
