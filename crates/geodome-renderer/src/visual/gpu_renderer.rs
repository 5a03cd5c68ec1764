//! wgpu-backed [`SceneRenderer`].

use geodome_common::{Color, Size};

use super::types::{DomeFrame, SceneRenderer};
use crate::gpu::{CameraUniforms, GpuContext, RendererError};
use crate::pipeline::DomePipeline;
use crate::shell::DomeMesh;

/// Draws the dome into the window surface.
pub struct GpuSceneRenderer {
    gpu: GpuContext,
    pipeline: DomePipeline,
    clear: wgpu::Color,
}

impl GpuSceneRenderer {
    /// Upload the baked mesh and build the pipeline for `gpu`'s surface.
    pub fn new(gpu: GpuContext, mesh: &DomeMesh, clear_color: Color) -> Self {
        let vertices = mesh.vertices();
        let pipeline = DomePipeline::new(
            &gpu.device,
            gpu.format(),
            gpu.sample_count,
            &vertices,
            gpu.size.width,
            gpu.size.height,
        );
        tracing::info!(
            vertices = vertices.len(),
            "dome mesh uploaded ({:.1} KiB)",
            std::mem::size_of_val(vertices.as_slice()) as f64 / 1024.0
        );

        let [r, g, b] = clear_color.to_rgb_f32();
        Self {
            gpu,
            pipeline,
            clear: wgpu::Color {
                r: r as f64,
                g: g as f64,
                b: b as f64,
                a: 1.0,
            },
        }
    }
}

impl SceneRenderer for GpuSceneRenderer {
    type Error = RendererError;

    fn set_size(&mut self, size: Size) {
        self.gpu.resize(size.width, size.height);
        self.pipeline
            .resize(&self.gpu.device, self.gpu.size.width, self.gpu.size.height);
    }

    fn draw(&mut self, frame: &DomeFrame<'_>) -> Result<(), RendererError> {
        self.pipeline.update_uniforms(
            &self.gpu.queue,
            &CameraUniforms::new(frame.view_projection),
        );

        let output = match self.gpu.current_texture() {
            Ok(texture) => texture,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                tracing::warn!("surface lost or outdated, reconfiguring");
                self.gpu.reconfigure();
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("dome frame encoder"),
            });
        self.pipeline.render(&mut encoder, &view, self.clear);

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        log_first_frame(self.gpu.size.width, self.gpu.size.height, self.gpu.format());
        Ok(())
    }
}

/// Log the first frame presentation (once only).
fn log_first_frame(width: u32, height: u32, format: wgpu::TextureFormat) {
    static PRESENTED: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);
    if !PRESENTED.swap(true, std::sync::atomic::Ordering::Relaxed) {
        tracing::info!(
            "First frame presented ({}x{}, format={:?})",
            width,
            height,
            format,
        );
    }
}
