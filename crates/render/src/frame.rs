use crate::camera::Camera;
use crate::lighting::{PhongParams, PointLight};
use crate::projection::{Projection, ProjectionMode};
use cottage_common::{MeshId, TextureId};
use cottage_scene::Scene;
use glam::{Mat4, Vec2, Vec3};

/// One entry of the ordered draw list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCall {
    pub object: &'static str,
    pub mesh: MeshId,
    pub texture: TextureId,
    pub vertex_count: u32,
    /// Object-to-world transform (`T * R * S`).
    pub model: Mat4,
}

/// Everything a backend needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FramePlan {
    pub view: Mat4,
    pub projection: Mat4,
    pub mode: ProjectionMode,
    pub camera_position: Vec3,
    pub camera_front: Vec3,
    pub fov_degrees: f32,
    pub light: PointLight,
    pub phong: PhongParams,
    pub uv_scale: Vec2,
    /// In scene table order.
    pub draws: Vec<DrawCall>,
    /// Model matrix of the lamp marker, when shown.
    pub lamp: Option<Mat4>,
}

impl FramePlan {
    /// Build the plan for the current camera, projection and light.
    ///
    /// Objects whose mesh is missing from the scene are skipped with a
    /// warning; [`Scene::validate`] rules that out for the built-in house.
    pub fn build(
        camera: &Camera,
        projection: &Projection,
        aspect: f32,
        light: PointLight,
        scene: &Scene,
    ) -> Self {
        let draws = scene
            .objects()
            .iter()
            .filter_map(|obj| {
                let Some(mesh) = scene.mesh(obj.mesh) else {
                    tracing::warn!("object '{}' has no mesh {:?}, skipped", obj.name, obj.mesh);
                    return None;
                };
                Some(DrawCall {
                    object: obj.name,
                    mesh: obj.mesh,
                    texture: obj.texture,
                    vertex_count: mesh.vertex_count(),
                    model: obj.transform.matrix(),
                })
            })
            .collect();

        Self {
            view: camera.view_matrix(),
            projection: projection.matrix(camera.zoom(), aspect),
            mode: projection.mode,
            camera_position: camera.position,
            camera_front: camera.front(),
            fov_degrees: camera.zoom(),
            light,
            phong: PhongParams::default(),
            uv_scale: Vec2::ONE,
            draws,
            lamp: None,
        }
    }

    /// Add the lamp marker: a cube of side `scale` at the light position.
    pub fn with_lamp(mut self, scale: f32) -> Self {
        self.lamp = Some(Mat4::from_scale_rotation_translation(
            Vec3::splat(scale),
            glam::Quat::IDENTITY,
            self.light.position,
        ));
        self
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view
    }

    pub fn total_vertices(&self) -> u32 {
        self.draws.iter().map(|d| d.vertex_count).sum()
    }
}
