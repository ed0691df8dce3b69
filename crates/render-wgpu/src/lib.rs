//! wgpu backend: draws a [`cottage_render::FramePlan`] with textured Phong
//! lighting and an optional unlit lamp marker.
//!
//! # Invariants
//! - The renderer never mutates camera or scene state.
//! - Every scene object owns one uniform slot; meshes own one vertex buffer.
//! - Shader and pipeline validation errors surface as [`GpuError`] at startup.

mod error;
mod gpu;
mod shaders;
mod texture;
mod uniforms;

pub use error::GpuError;
pub use gpu::WgpuRenderer;
pub use texture::{GpuTexture, GpuTextureTable};

pub fn crate_info() -> &'static str {
    "cottage-render-wgpu v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("wgpu"));
    }

    #[test]
    fn shaders_declare_their_entry_points() {
        assert!(shaders::PHONG_SHADER.contains("fn vs_main"));
        assert!(shaders::PHONG_SHADER.contains("fn fs_main"));
        assert!(shaders::LAMP_SHADER.contains("fn vs_lamp"));
        assert!(shaders::LAMP_SHADER.contains("fn fs_lamp"));
    }
}
