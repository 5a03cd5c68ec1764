use std::sync::Arc;

use geodome_common::Size;
use glam::Mat4;
use winit::window::Window;

// ---------------------------------------------------------------------------
// RendererError
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum RendererError {
    #[error("surface error: {0}")]
    SurfaceError(String),

    #[error("no suitable GPU adapter found")]
    AdapterNotFound,

    #[error("device error: {0}")]
    DeviceError(String),
}

impl From<wgpu::SurfaceError> for RendererError {
    fn from(e: wgpu::SurfaceError) -> Self {
        RendererError::SurfaceError(e.to_string())
    }
}

impl From<wgpu::RequestDeviceError> for RendererError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        RendererError::DeviceError(e.to_string())
    }
}

// ---------------------------------------------------------------------------
// CameraUniforms
// ---------------------------------------------------------------------------

/// Per-frame camera data uploaded to bind group 0.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniforms {
    /// View-projection matrix (column-major).
    pub view_proj: [f32; 16],
}

impl CameraUniforms {
    pub fn new(view_proj: Mat4) -> Self {
        Self {
            view_proj: view_proj.to_cols_array(),
        }
    }
}

impl Default for CameraUniforms {
    fn default() -> Self {
        Self::new(Mat4::IDENTITY)
    }
}

// ---------------------------------------------------------------------------
// GpuContext
// ---------------------------------------------------------------------------

pub struct GpuContext {
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub surface: wgpu::Surface<'static>,
    pub surface_config: wgpu::SurfaceConfiguration,
    pub size: Size,
    /// MSAA sample count for the surface format (4, or 1 if unsupported).
    pub sample_count: u32,
}

/// 4x MSAA when the format can both multisample at 4x and resolve.
pub fn msaa_sample_count(flags: wgpu::TextureFormatFeatureFlags) -> u32 {
    let needed = wgpu::TextureFormatFeatureFlags::MULTISAMPLE_X4
        | wgpu::TextureFormatFeatureFlags::MULTISAMPLE_RESOLVE;
    if flags.contains(needed) {
        4
    } else {
        1
    }
}

impl GpuContext {
    /// Initialize wgpu: create instance, surface, adapter, device, and configure
    /// the surface for rendering.
    pub async fn new(window: Arc<Window>) -> Result<Self, RendererError> {
        let inner_size = window.inner_size();

        let width = inner_size.width.max(1);
        let height = inner_size.height.max(1);

        // 1. Create Instance with default backends
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());

        // 2. Create surface from window
        let surface = instance
            .create_surface(window)
            .map_err(|e| RendererError::SurfaceError(e.to_string()))?;

        // 3. Request adapter (prefer high-performance GPU, fallback to software)
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                force_fallback_adapter: false,
                compatible_surface: Some(&surface),
            })
            .await;

        let adapter = match adapter {
            Some(a) => a,
            None => {
                tracing::warn!("No hardware GPU adapter found, trying software fallback");
                instance
                    .request_adapter(&wgpu::RequestAdapterOptions {
                        power_preference: wgpu::PowerPreference::LowPower,
                        force_fallback_adapter: true,
                        compatible_surface: Some(&surface),
                    })
                    .await
                    .ok_or(RendererError::AdapterNotFound)?
            }
        };

        let adapter_info = adapter.get_info();
        tracing::info!(
            "GPU adapter: {} ({:?}, {:?})",
            adapter_info.name,
            adapter_info.device_type,
            adapter_info.backend,
        );

        // 4. Request device with default limits
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("geodome device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::default(),
                },
                None,
            )
            .await?;

        // 5. Prefer a non-sRGB surface: baked colors are written as authored
        let surface_caps = surface.get_capabilities(&adapter);
        let format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
            .or_else(|| surface_caps.formats.first().copied())
            .unwrap_or(wgpu::TextureFormat::Bgra8Unorm);
        tracing::info!(
            "Surface format: {format:?} (available: {:?})",
            surface_caps.formats
        );

        let sample_count = msaa_sample_count(adapter.get_texture_format_features(format).flags);
        tracing::debug!("MSAA sample count: {sample_count}");

        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            desired_maximum_frame_latency: 2,
            alpha_mode: wgpu::CompositeAlphaMode::Auto,
            view_formats: vec![],
        };
        surface.configure(&device, &surface_config);

        Ok(Self {
            device,
            queue,
            surface,
            surface_config,
            size: Size::new(width, height),
            sample_count,
        })
    }

    /// Reconfigure the surface after a window resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        let width = width.max(1);
        let height = height.max(1);

        self.size = Size::new(width, height);
        self.surface_config.width = width;
        self.surface_config.height = height;
        self.surface.configure(&self.device, &self.surface_config);
    }

    /// Reapply the current configuration after the surface was lost.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.surface_config);
    }

    /// Get the next frame's surface texture.
    pub fn current_texture(&self) -> Result<wgpu::SurfaceTexture, wgpu::SurfaceError> {
        self.surface.get_current_texture()
    }

    /// Return the surface texture format.
    pub fn format(&self) -> wgpu::TextureFormat {
        self.surface_config.format
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renderer_error_adapter_not_found_display() {
        let err = RendererError::AdapterNotFound;
        assert_eq!(err.to_string(), "no suitable GPU adapter found");
    }

    #[test]
    fn renderer_error_surface_display() {
        let err = RendererError::SurfaceError("timeout".to_string());
        assert_eq!(err.to_string(), "surface error: timeout");
    }

    #[test]
    fn renderer_error_device_display() {
        let err = RendererError::DeviceError("out of memory".to_string());
        assert_eq!(err.to_string(), "device error: out of memory");
    }

    #[test]
    fn msaa_needs_x4_and_resolve() {
        use wgpu::TextureFormatFeatureFlags as F;
        assert_eq!(msaa_sample_count(F::MULTISAMPLE_X4 | F::MULTISAMPLE_RESOLVE), 4);
        assert_eq!(
            msaa_sample_count(F::MULTISAMPLE_X2 | F::MULTISAMPLE_X4 | F::MULTISAMPLE_RESOLVE),
            4
        );
        assert_eq!(msaa_sample_count(F::MULTISAMPLE_X4), 1);
        assert_eq!(msaa_sample_count(F::MULTISAMPLE_RESOLVE), 1);
        assert_eq!(msaa_sample_count(F::empty()), 1);
    }

    #[test]
    fn camera_uniforms_size_is_64_bytes() {
        assert_eq!(std::mem::size_of::<CameraUniforms>(), 64);
    }

    #[test]
    fn camera_uniforms_default_is_identity() {
        let uniforms = CameraUniforms::default();
        assert_eq!(uniforms.view_proj, Mat4::IDENTITY.to_cols_array());
    }

    #[test]
    fn camera_uniforms_are_column_major() {
        let m = Mat4::from_translation(glam::Vec3::new(1.0, 2.0, 3.0));
        let uniforms = CameraUniforms::new(m);
        assert_eq!(&uniforms.view_proj[12..15], &[1.0, 2.0, 3.0]);
    }
}
