//! Rendering module for 3D graphics and visualization
//!
//! This module handles everything drawn on screen: the sphere mesh, the
//! camera system, the wgpu pipeline, and the embedded shader.

pub mod camera;
pub mod mesh;
pub mod renderer;
pub mod shaders;

// Re-export commonly used items
pub use camera::{Camera, CameraController, CameraMode};
pub use mesh::SphereMesh;
pub use renderer::Renderer;

use glam::Mat4;

/// Common vertex type for 3D rendering. Position and normal only; for the
/// unit sphere the two are identical.
#[repr(C)]
#[derive(Clone, Copy, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    /// Get the vertex buffer layout for wgpu: position at location 0,
    /// normal at location 1, stride of six floats.
    pub fn desc<'a>() -> wgpu::VertexBufferLayout<'a> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                // Position
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                // Normal
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x3,
                },
            ],
        }
    }
}

/// Uniform data passed to the sphere shader. Field order and padding mirror
/// the `Uniforms` block in `sphere.wgsl`.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Uniforms {
    pub model: [[f32; 4]; 4],
    pub mvp: [[f32; 4]; 4],
    pub light_dir: [f32; 3],
    pub _pad: f32, // vec3 rounds up to 16 bytes in WGSL uniform layout
}

impl Uniforms {
    pub fn new() -> Self {
        Self {
            model: Mat4::IDENTITY.to_cols_array_2d(),
            mvp: Mat4::IDENTITY.to_cols_array_2d(),
            light_dir: [-0.4, -0.8, -0.45],
            _pad: 0.0,
        }
    }

    /// Refresh the matrices from the current camera pose and model transform.
    pub fn update(&mut self, model: Mat4, camera: &Camera) {
        self.model = model.to_cols_array_2d();
        self.mvp = (camera.view_projection() * model).to_cols_array_2d();
    }
}

impl Default for Uniforms {
    fn default() -> Self {
        Self::new()
    }
}

/// Rendering error types
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("surface error: {0}")]
    Surface(#[from] wgpu::SurfaceError),
}

pub type RenderResult<T> = Result<T, RenderError>;
