use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Index of a mesh in the scene's mesh list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MeshId(pub u32);

/// Index of a texture in the application-wide texture table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TextureId(pub u32);

impl MeshId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl TextureId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Direction for keyboard-driven camera movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveDirection {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

impl MoveDirection {
    pub const ALL: [MoveDirection; 6] = [
        MoveDirection::Forward,
        MoveDirection::Backward,
        MoveDirection::Left,
        MoveDirection::Right,
        MoveDirection::Up,
        MoveDirection::Down,
    ];
}

/// Per-object model transform.
///
/// Applied to each vertex as scale, then rotation, then translation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub scale: Vec3,
    pub rotation: Quat,
    pub translation: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            scale: Vec3::ONE,
            rotation: Quat::IDENTITY,
            translation: Vec3::ZERO,
        }
    }
}

impl Transform {
    /// Transform rotated about +Y by `degrees`, then moved to `translation`.
    pub fn yaw_degrees(degrees: f32, translation: Vec3) -> Self {
        Self {
            rotation: Quat::from_rotation_y(degrees.to_radians()),
            translation,
            ..Self::default()
        }
    }

    /// Model matrix `T * R * S`.
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_default_is_identity() {
        let t = Transform::default();
        assert_eq!(t.translation, Vec3::ZERO);
        assert_eq!(t.rotation, Quat::IDENTITY);
        assert_eq!(t.scale, Vec3::ONE);
        assert_eq!(t.matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn matrix_scales_before_rotating_and_translating() {
        let t = Transform {
            scale: Vec3::new(2.0, 1.0, 1.0),
            rotation: Quat::from_rotation_y(90.0_f32.to_radians()),
            translation: Vec3::new(0.0, 0.0, 5.0),
        };
        // +X scaled to 2, rotated onto -Z, then moved by +5 Z.
        let p = t.matrix().transform_point3(Vec3::X);
        assert!((p - Vec3::new(0.0, 0.0, 3.0)).length() < 1e-5, "{p:?}");
    }

    #[test]
    fn yaw_degrees_rotates_about_y() {
        let t = Transform::yaw_degrees(180.0, Vec3::ZERO);
        let p = t.matrix().transform_point3(Vec3::X);
        assert!((p + Vec3::X).length() < 1e-5);
    }

    #[test]
    fn handles_index() {
        assert_eq!(MeshId(3).index(), 3);
        assert_eq!(TextureId(7).index(), 7);
    }
}
