use bytemuck::{Pod, Zeroable};
use cottage_render::FramePlan;
use glam::{Mat4, Vec3};

/// Per-frame uniform block, group 0. Mirrors `FrameUniforms` in the WGSL.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub(crate) struct FrameUniforms {
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    pub light_position: [f32; 4],
    pub light_color: [f32; 4],
    pub view_position: [f32; 4],
    pub phong: [f32; 4],
    pub uv_scale: [f32; 4],
}

impl FrameUniforms {
    pub fn from_plan(plan: &FramePlan) -> Self {
        let p = &plan.phong;
        Self {
            view: plan.view.to_cols_array_2d(),
            projection: plan.projection.to_cols_array_2d(),
            light_position: point(plan.light.position),
            light_color: point(plan.light.color),
            view_position: point(plan.camera_position),
            phong: [
                p.ambient_strength,
                p.diffuse_floor,
                p.specular_intensity,
                p.shininess,
            ],
            uv_scale: [plan.uv_scale.x, plan.uv_scale.y, 0.0, 0.0],
        }
    }
}

/// Per-object uniform block, group 1.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub(crate) struct ObjectUniforms {
    pub model: [[f32; 4]; 4],
    /// Inverse transpose of `model`, for transforming normals.
    pub normal: [[f32; 4]; 4],
}

impl ObjectUniforms {
    pub fn new(model: Mat4) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            normal: normal_matrix(model).to_cols_array_2d(),
        }
    }
}

impl Default for ObjectUniforms {
    fn default() -> Self {
        Self::new(Mat4::IDENTITY)
    }
}

fn point(v: Vec3) -> [f32; 4] {
    [v.x, v.y, v.z, 1.0]
}

/// Inverse transpose of the model's upper 3x3, so non-uniform scale keeps
/// normals perpendicular to their surfaces.
pub(crate) fn normal_matrix(model: Mat4) -> Mat4 {
    let m3 = glam::Mat3::from_mat4(model);
    if m3.determinant().abs() <= f32::EPSILON {
        return Mat4::IDENTITY;
    }
    Mat4::from_mat3(m3.inverse().transpose())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cottage_render::{Camera, PointLight, Projection};
    use cottage_scene::Scene;
    use glam::Quat;

    #[test]
    fn block_sizes_match_wgsl_layout() {
        assert_eq!(std::mem::size_of::<FrameUniforms>(), 208);
        assert_eq!(std::mem::size_of::<ObjectUniforms>(), 128);
        assert_eq!(std::mem::size_of::<FrameUniforms>() % 16, 0);
    }

    #[test]
    fn frame_uniforms_pack_the_plan() {
        let plan = FramePlan::build(
            &Camera::default(),
            &Projection::default(),
            1.5,
            PointLight::default(),
            &Scene::house(),
        );
        let u = FrameUniforms::from_plan(&plan);
        assert_eq!(u.view, plan.view.to_cols_array_2d());
        assert_eq!(u.light_position, [2.5, 6.5, 3.5, 1.0]);
        assert_eq!(u.view_position, [-0.5, 1.0, 4.0, 1.0]);
        assert_eq!(u.phong, [0.1, 0.15, 0.8, 16.0]);
        assert_eq!(u.uv_scale[..2], [1.0, 1.0]);
    }

    #[test]
    fn normal_matrix_of_rotation_is_rotation() {
        let model = Mat4::from_rotation_y(0.3) * Mat4::from_translation(Vec3::new(4.0, 0.0, 1.0));
        let n = normal_matrix(model);
        let expected = Quat::from_rotation_y(0.3) * Vec3::X;
        assert!((n.transform_vector3(Vec3::X) - expected).length() < 1e-5);
    }

    #[test]
    fn normal_matrix_keeps_normals_perpendicular_under_scale() {
        let model = Mat4::from_scale(Vec3::new(4.0, 1.0, 1.0));
        // Surface along the (1, 1) diagonal in XY, normal (1, -1).
        let tangent = model.transform_vector3(Vec3::new(1.0, 1.0, 0.0));
        let normal = normal_matrix(model).transform_vector3(Vec3::new(1.0, -1.0, 0.0));
        assert!(tangent.dot(normal).abs() < 1e-5);
    }

    #[test]
    fn degenerate_model_falls_back_to_identity() {
        assert_eq!(normal_matrix(Mat4::from_scale(Vec3::ZERO)), Mat4::IDENTITY);
    }
}
