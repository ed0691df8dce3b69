//! Application configuration.
//!
//! Every section has a complete default matching the built-in scene, so a
//! config file only needs the fields it wants to change.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Errors from loading or saving configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Cottage".into(),
            width: 1200,
            height: 800,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: Vec3,
    /// Degrees.
    pub yaw: f32,
    /// Degrees.
    pub pitch: f32,
    /// World units per second.
    pub speed: f32,
    /// Degrees per pointer unit.
    pub sensitivity: f32,
    /// Starting vertical field of view in degrees.
    pub zoom: f32,
    pub min_zoom: f32,
    pub max_zoom: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: Vec3::new(-0.5, 1.0, 4.0),
            yaw: -90.0,
            pitch: 0.0,
            speed: 2.5,
            sensitivity: 0.1,
            zoom: 45.0,
            min_zoom: 1.0,
            max_zoom: 45.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightConfig {
    pub position: Vec3,
    pub color: Vec3,
    /// Draw the unlit lamp cube at the light position.
    pub show_lamp: bool,
    pub lamp_scale: f32,
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            position: Vec3::new(2.5, 6.5, 3.5),
            color: Vec3::ONE,
            show_lamp: false,
            lamp_scale: 0.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StartProjection {
    #[default]
    Perspective,
    Orthographic,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    pub mode: StartProjection,
    pub near: f32,
    pub far: f32,
    /// Orthographic half extents are `800 / ortho_scale` by `600 / ortho_scale`.
    pub ortho_scale: f32,
    pub ortho_near: f32,
    pub ortho_far: f32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            mode: StartProjection::Perspective,
            near: 0.1,
            far: 100.0,
            ortho_scale: 90.0,
            ortho_near: -2.5,
            ortho_far: 6.5,
        }
    }
}

/// Top-level application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub camera: CameraConfig,
    pub light: LightConfig,
    pub projection: ProjectionConfig,
    /// Directory the scene's texture files are resolved against.
    pub texture_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            camera: CameraConfig::default(),
            light: LightConfig::default(),
            projection: ProjectionConfig::default(),
            texture_dir: PathBuf::from("assets/textures"),
        }
    }
}

impl AppConfig {
    /// Load a YAML config file and validate it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_yaml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        tracing::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Load `path` if given, otherwise use defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self).map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Reject values the camera and projection math cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let cam = &self.camera;
        if !(cam.min_zoom > 0.0 && cam.min_zoom <= cam.max_zoom && cam.max_zoom < 180.0) {
            return Err(ConfigError::Invalid(format!(
                "zoom bounds must satisfy 0 < min <= max < 180, got [{}, {}]",
                cam.min_zoom, cam.max_zoom
            )));
        }
        if cam.speed < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "camera speed must be non-negative, got {}",
                cam.speed
            )));
        }
        let proj = &self.projection;
        if !(proj.near > 0.0 && proj.far > proj.near) {
            return Err(ConfigError::Invalid(format!(
                "perspective planes must satisfy 0 < near < far, got near={} far={}",
                proj.near, proj.far
            )));
        }
        if proj.ortho_scale <= 0.0 || proj.ortho_far <= proj.ortho_near {
            return Err(ConfigError::Invalid(
                "orthographic scale must be positive and far > near".into(),
            ));
        }
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::Invalid("window size must be non-zero".into()));
        }
        Ok(())
    }
}
