//! Shared value types for the cottage renderer crates.
//!
//! # Invariants
//! - Types here are plain data: no GPU handles, no window handles.
//! - Configuration always has a complete default; files only override.

pub mod config;
pub mod timing;
pub mod types;

pub use config::{
    AppConfig, CameraConfig, ConfigError, LightConfig, ProjectionConfig, StartProjection,
    WindowConfig,
};
pub use timing::FrameClock;
pub use types::{MeshId, MoveDirection, TextureId, Transform};

pub fn crate_info() -> &'static str {
    "cottage-common v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("common"));
    }
}
