//! Scene: baked triangle meshes and the fixed house scene table.
//!
//! # Invariants
//! - Meshes are non-indexed triangle lists; vertex count is a multiple of 3.
//! - Object order in the table is the draw order.
//! - Scene data is built once at startup and never mutated.

pub mod house;
pub mod mesh;

pub use house::{Scene, SceneError, SceneObject, TextureSource, lamp_mesh};
pub use mesh::{MeshBuilder, MeshData, Vertex};

pub fn crate_info() -> &'static str {
    "cottage-scene v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("scene"));
    }
}
