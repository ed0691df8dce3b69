//! Renderer core: camera controller, projection, lighting and frame plans.
//!
//! # Invariants
//! - Camera basis vectors stay orthonormal; pitch stays within ±89°.
//! - Zoom stays within the configured bounds.
//! - A frame plan lists draws in scene table order.
//! - Renderers only read the frame plan.
//!
//! The wgpu backend lives in `cottage-render-wgpu`; [`DebugTextRenderer`]
//! renders the same plan to text.

mod camera;
mod frame;
mod lighting;
mod projection;
mod renderer;

pub use camera::{Camera, PITCH_LIMIT};
pub use frame::{DrawCall, FramePlan};
pub use lighting::{LightTerms, PhongParams, PointLight, phong_terms, shade};
pub use projection::{Projection, ProjectionMode, aspect_ratio};
pub use renderer::{DebugTextRenderer, Renderer};

pub fn crate_info() -> &'static str {
    "cottage-render v0.1.0"
}
