//! Single point light and the Phong constants shared by the shader.
//!
//! [`shade`] mirrors the fragment shader on the CPU so the lighting rules
//! can be tested without a GPU.

use cottage_common::LightConfig;
use glam::Vec3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub color: Vec3,
}

impl Default for PointLight {
    fn default() -> Self {
        Self::from_config(&LightConfig::default())
    }
}

impl PointLight {
    pub fn from_config(config: &LightConfig) -> Self {
        Self {
            position: config.position,
            color: config.color,
        }
    }
}

/// Phong lighting constants.
///
/// `diffuse_floor` is the minimum diffuse factor; faces turned away from the
/// light stay dimly lit instead of going black.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhongParams {
    pub ambient_strength: f32,
    pub diffuse_floor: f32,
    pub specular_intensity: f32,
    pub shininess: f32,
}

impl Default for PhongParams {
    fn default() -> Self {
        Self {
            ambient_strength: 0.1,
            diffuse_floor: 0.15,
            specular_intensity: 0.8,
            shininess: 16.0,
        }
    }
}

/// The three Phong terms for one fragment, already multiplied by light color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightTerms {
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
}

impl LightTerms {
    pub fn total(&self) -> Vec3 {
        self.ambient + self.diffuse + self.specular
    }
}

fn reflect(incident: Vec3, normal: Vec3) -> Vec3 {
    incident - 2.0 * normal.dot(incident) * normal
}

/// Phong terms at `frag_pos` with surface `normal`, seen from `view_pos`.
pub fn phong_terms(
    params: &PhongParams,
    light: &PointLight,
    frag_pos: Vec3,
    normal: Vec3,
    view_pos: Vec3,
) -> LightTerms {
    let n = normal.normalize_or_zero();
    let light_dir = (light.position - frag_pos).normalize_or_zero();
    let view_dir = (view_pos - frag_pos).normalize_or_zero();

    let ambient = params.ambient_strength * light.color;

    let impact = n.dot(light_dir).max(params.diffuse_floor);
    let diffuse = impact * light.color;

    let reflect_dir = reflect(-light_dir, n);
    let spec = view_dir.dot(reflect_dir).max(0.0).powf(params.shininess);
    let specular = params.specular_intensity * spec * light.color;

    LightTerms {
        ambient,
        diffuse,
        specular,
    }
}

/// Final fragment color: `(ambient + diffuse + specular) * texture_color`.
pub fn shade(
    params: &PhongParams,
    light: &PointLight,
    frag_pos: Vec3,
    normal: Vec3,
    view_pos: Vec3,
    texture_color: Vec3,
) -> Vec3 {
    phong_terms(params, light, frag_pos, normal, view_pos).total() * texture_color
}
