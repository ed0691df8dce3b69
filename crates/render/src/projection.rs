use cottage_common::{ProjectionConfig, StartProjection};
use glam::Mat4;

/// Which projection the frame uses. Flipped by a single toggle key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectionMode {
    #[default]
    Perspective,
    Orthographic,
}

impl ProjectionMode {
    pub fn toggled(self) -> Self {
        match self {
            ProjectionMode::Perspective => ProjectionMode::Orthographic,
            ProjectionMode::Orthographic => ProjectionMode::Perspective,
        }
    }

    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    pub fn label(self) -> &'static str {
        match self {
            ProjectionMode::Perspective => "perspective",
            ProjectionMode::Orthographic => "orthographic",
        }
    }
}

impl From<StartProjection> for ProjectionMode {
    fn from(mode: StartProjection) -> Self {
        match mode {
            StartProjection::Perspective => ProjectionMode::Perspective,
            StartProjection::Orthographic => ProjectionMode::Orthographic,
        }
    }
}

/// Projection parameters. Depth maps to `[0, 1]` (wgpu convention).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub mode: ProjectionMode,
    pub near: f32,
    pub far: f32,
    pub ortho_half_width: f32,
    pub ortho_half_height: f32,
    pub ortho_near: f32,
    pub ortho_far: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self::from_config(&ProjectionConfig::default())
    }
}

impl Projection {
    pub fn from_config(config: &ProjectionConfig) -> Self {
        Self {
            mode: config.mode.into(),
            near: config.near,
            far: config.far,
            ortho_half_width: 800.0 / config.ortho_scale,
            ortho_half_height: 600.0 / config.ortho_scale,
            ortho_near: config.ortho_near,
            ortho_far: config.ortho_far,
        }
    }

    /// Projection matrix for the current mode.
    ///
    /// `fov_degrees` is only used in perspective mode; the orthographic box
    /// has fixed extents regardless of zoom and aspect.
    pub fn matrix(&self, fov_degrees: f32, aspect: f32) -> Mat4 {
        match self.mode {
            ProjectionMode::Perspective => Mat4::perspective_rh(
                fov_degrees.to_radians(),
                aspect.max(f32::EPSILON),
                self.near,
                self.far,
            ),
            ProjectionMode::Orthographic => Mat4::orthographic_rh(
                -self.ortho_half_width,
                self.ortho_half_width,
                -self.ortho_half_height,
                self.ortho_half_height,
                self.ortho_near,
                self.ortho_far,
            ),
        }
    }
}

/// Aspect ratio of a surface, treating zero-sized dimensions as 1.
pub fn aspect_ratio(width: u32, height: u32) -> f32 {
    width.max(1) as f32 / height.max(1) as f32
}
