//! Dome vertex type and buffer layout.

/// A single vertex of the baked dome mesh.
///
/// Layout: position(vec3) + color(vec3) = 24 bytes. Faces are flat-shaded,
/// so the three vertices of a face carry the same color.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct DomeVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl DomeVertex {
    /// wgpu vertex buffer layout for `DomeVertex`.
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<DomeVertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            // position: vec3<f32> at offset 0
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: 0,
            },
            // color: vec3<f32> at offset 12
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 12,
                shader_location: 1,
            },
        ],
    };
}
