use crate::mesh::{MeshBuilder, MeshData};
use cottage_common::{MeshId, TextureId, Transform};
use glam::{Vec2, Vec3};

/// Errors from scene table validation.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum SceneError {
    #[error("object '{object}' references unknown mesh {mesh:?}")]
    UnknownMesh { object: &'static str, mesh: MeshId },
    #[error("object '{object}' references unknown texture {texture:?}")]
    UnknownTexture {
        object: &'static str,
        texture: TextureId,
    },
    #[error("mesh '{0}' has no vertices")]
    EmptyMesh(&'static str),
    #[error("mesh '{name}' has {count} vertices, not a whole number of triangles")]
    NotTriangles { name: &'static str, count: u32 },
}

/// A texture the scene needs, by table name and file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureSource {
    pub name: &'static str,
    pub file: &'static str,
}

/// One entry of the draw table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneObject {
    pub name: &'static str,
    pub mesh: MeshId,
    pub texture: TextureId,
    pub transform: Transform,
}

/// The fixed scene: meshes, textures and the ordered object table.
#[derive(Debug, Clone)]
pub struct Scene {
    meshes: Vec<MeshData>,
    textures: Vec<TextureSource>,
    objects: Vec<SceneObject>,
}

/// Where every house part sits relative to the ground plane.
const HOUSE_OFFSET: Vec3 = Vec3::new(-1.0, 0.0, 1.7);

const TEXTURES: [TextureSource; 8] = [
    TextureSource { name: "rocky_ground", file: "rockyGround.jpg" },
    TextureSource { name: "wooden_wall", file: "woodenWall.jpg" },
    TextureSource { name: "stone_wall", file: "stoneWall.jpg" },
    TextureSource { name: "tile_roof", file: "tileRoof.jpeg" },
    TextureSource { name: "doors", file: "doors.jpg" },
    TextureSource { name: "white_wood", file: "whiteWoodTexture.jpg" },
    TextureSource { name: "windows", file: "windows.JPG" },
    TextureSource { name: "bush", file: "bush.jpg" },
];

impl Scene {
    pub fn new(
        meshes: Vec<MeshData>,
        textures: Vec<TextureSource>,
        objects: Vec<SceneObject>,
    ) -> Self {
        Self {
            meshes,
            textures,
            objects,
        }
    }

    /// The textured house on rocky ground.
    pub fn house() -> Self {
        let meshes = vec![
            ground_mesh(),
            base_building_mesh(),
            bushes_mesh(),
            house_stone_wall_mesh(),
            roof_mesh(),
            doors_mesh(),
            third_story_mesh(),
            surrounding_wall_mesh(),
            windows_mesh(),
        ];
        let textures = TEXTURES.to_vec();

        let tex = |name: &str| {
            TEXTURES
                .iter()
                .position(|t| t.name == name)
                .map(|i| TextureId(i as u32))
                .unwrap_or(TextureId(u32::MAX))
        };
        let object = |name, mesh: u32, texture: &str, yaw: f32| SceneObject {
            name,
            mesh: MeshId(mesh),
            texture: tex(texture),
            transform: Transform::yaw_degrees(yaw, HOUSE_OFFSET),
        };

        let objects = vec![
            SceneObject {
                name: "ground",
                mesh: MeshId(0),
                texture: tex("rocky_ground"),
                transform: Transform::default(),
            },
            object("base_building", 1, "wooden_wall", 2.0),
            object("house_stone_wall", 3, "stone_wall", 3.0),
            object("roof", 4, "tile_roof", 3.0),
            object("doors", 5, "doors", 3.0),
            object("third_story", 6, "white_wood", 3.0),
            object("surrounding_wall", 7, "stone_wall", 0.0),
            object("windows", 8, "windows", 0.0),
            object("bushes", 2, "bush", 0.0),
        ];

        Self::new(meshes, textures, objects)
    }

    pub fn meshes(&self) -> &[MeshData] {
        &self.meshes
    }

    pub fn textures(&self) -> &[TextureSource] {
        &self.textures
    }

    /// Objects in draw order.
    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn mesh(&self, id: MeshId) -> Option<&MeshData> {
        self.meshes.get(id.index())
    }

    pub fn texture_id(&self, name: &str) -> Option<TextureId> {
        self.textures
            .iter()
            .position(|t| t.name == name)
            .map(|i| TextureId(i as u32))
    }

    /// Total vertices across all meshes.
    pub fn vertex_count(&self) -> u32 {
        self.meshes.iter().map(MeshData::vertex_count).sum()
    }

    /// Check every object points at an existing mesh and texture, and every
    /// mesh is a non-empty triangle list.
    pub fn validate(&self) -> Result<(), SceneError> {
        for mesh in &self.meshes {
            let count = mesh.vertex_count();
            if count == 0 {
                return Err(SceneError::EmptyMesh(mesh.name));
            }
            if count % 3 != 0 {
                return Err(SceneError::NotTriangles {
                    name: mesh.name,
                    count,
                });
            }
        }
        for obj in &self.objects {
            if self.mesh(obj.mesh).is_none() {
                return Err(SceneError::UnknownMesh {
                    object: obj.name,
                    mesh: obj.mesh,
                });
            }
            if obj.texture.index() >= self.textures.len() {
                return Err(SceneError::UnknownTexture {
                    object: obj.name,
                    texture: obj.texture,
                });
            }
        }
        Ok(())
    }
}

/// Unit cube centred on the origin, used for the lamp marker.
pub fn lamp_mesh() -> MeshData {
    MeshBuilder::new("lamp")
        .cuboid(Vec3::splat(-0.5), Vec3::splat(0.5))
        .build()
}

fn ground_mesh() -> MeshData {
    MeshBuilder::new("ground")
        .floor(Vec2::splat(-5.0), Vec2::splat(5.0), 0.0, Vec2::splat(5.0))
        .build()
}

fn base_building_mesh() -> MeshData {
    MeshBuilder::new("base_building")
        .cuboid(Vec3::new(-0.8, 0.0, -0.5), Vec3::new(1.8, 0.75, 0.5))
        .cuboid(Vec3::new(-0.8, 0.75, -0.5), Vec3::new(0.4, 1.5, 0.5))
        // tree stump
        .cuboid(Vec3::new(4.1, 0.0, 2.8), Vec3::new(4.2, 0.4, 2.9))
        .build()
}

fn bushes_mesh() -> MeshData {
    MeshBuilder::new("bushes")
        .cuboid(Vec3::new(-2.0, 0.0, 2.0), Vec3::new(-1.6, 0.5, 3.0))
        .cuboid(Vec3::new(-2.0, 0.0, 0.0), Vec3::new(-1.6, 0.5, 1.0))
        .cuboid(Vec3::new(-2.0, 0.0, -2.0), Vec3::new(-1.6, 0.5, -1.0))
        // tree crown over the stump
        .pyramid(
            Vec2::new(4.0, 2.5),
            Vec2::new(4.6, 3.0),
            0.25,
            Vec3::new(4.2, 1.0, 2.8),
        )
        .build()
}

fn house_stone_wall_mesh() -> MeshData {
    MeshBuilder::new("house_stone_wall")
        .cuboid(Vec3::new(-0.8, 0.0, -0.5), Vec3::new(-0.2, 0.3, 3.0))
        .build()
}

fn third_story_mesh() -> MeshData {
    MeshBuilder::new("third_story")
        .cuboid(Vec3::new(-0.8, 1.5, -0.5), Vec3::new(0.4, 2.25, 0.5))
        .build()
}

fn roof_mesh() -> MeshData {
    MeshBuilder::new("roof")
        // lean-to roof over the low wing
        .pyramid(
            Vec2::new(0.4, -0.7),
            Vec2::new(1.9, 0.7),
            0.75,
            Vec3::new(0.0, 1.0, 0.0),
        )
        // top roof over the third story
        .pyramid(
            Vec2::new(-0.8, -0.7),
            Vec2::new(0.4, 0.7),
            2.25,
            Vec3::new(0.0, 2.5, 0.0),
        )
        .build()
}

fn doors_mesh() -> MeshData {
    MeshBuilder::new("doors")
        .rect_z(Vec2::new(0.0, 0.0), Vec2::new(0.4, 0.5), 0.51, true)
        .build()
}

fn surrounding_wall_mesh() -> MeshData {
    MeshBuilder::new("surrounding_wall")
        .cuboid(Vec3::new(-3.8, 0.0, -5.0), Vec3::new(-3.2, 0.9, 3.0))
        .cuboid(Vec3::new(3.2, 0.0, -5.0), Vec3::new(3.8, 0.9, 3.0))
        .cuboid(Vec3::new(-3.2, 0.0, -5.0), Vec3::new(3.2, 0.9, -4.0))
        .build()
}

fn windows_mesh() -> MeshData {
    // (min x, min y, max x, max y, z); panes in front of the walls face +Z,
    // panes behind them face -Z.
    #[rustfmt::skip]
    const PANES: [(f32, f32, f32, f32, f32); 15] = [
        // ground floor, front
        ( 1.2, 0.25,  1.4, 0.5,  0.51),
        ( 0.8, 0.25,  1.0, 0.5,  0.51),
        (-0.6, 0.4,  -0.4, 0.6,  0.53),
        // ground floor, rear
        ( 1.2, 0.25,  1.4, 0.5, -0.55),
        ( 0.8, 0.25,  1.0, 0.5, -0.55),
        (-0.6, 0.25, -0.4, 0.5, -0.51),
        (-0.2, 0.25,  0.0, 0.5, -0.51),
        // second floor
        (-0.6, 1.0,  -0.4, 1.2, -0.51),
        ( 0.0, 1.0,   0.2, 1.2, -0.53),
        (-0.6, 1.0,  -0.4, 1.2,  0.54),
        ( 0.0, 1.0,   0.2, 1.2,  0.52),
        // third floor
        (-0.6, 1.7,  -0.4, 1.9, -0.51),
        ( 0.0, 1.7,   0.2, 1.9, -0.53),
        (-0.6, 1.7,  -0.4, 1.9,  0.54),
        ( 0.0, 1.7,   0.2, 1.9,  0.52),
    ];

    PANES
        .iter()
        .fold(MeshBuilder::new("windows"), |b, &(x0, y0, x1, y1, z)| {
            b.rect_z(Vec2::new(x0, y0), Vec2::new(x1, y1), z, z > 0.0)
        })
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn house_scene_is_valid() {
        let scene = Scene::house();
        assert_eq!(scene.validate(), Ok(()));
        assert_eq!(scene.meshes().len(), 9);
        assert_eq!(scene.textures().len(), 8);
        assert_eq!(scene.objects().len(), 9);
    }

    #[test]
    fn draw_order_matches_table() {
        let scene = Scene::house();
        let names: Vec<_> = scene.objects().iter().map(|o| o.name).collect();
        assert_eq!(
            names,
            [
                "ground",
                "base_building",
                "house_stone_wall",
                "roof",
                "doors",
                "third_story",
                "surrounding_wall",
                "windows",
                "bushes",
            ]
        );
    }

    #[test]
    fn ground_is_untransformed_and_rest_is_offset() {
        let scene = Scene::house();
        let objects = scene.objects();
        assert_eq!(objects[0].transform, Transform::default());
        for obj in &objects[1..] {
            assert_eq!(obj.transform.translation, HOUSE_OFFSET, "{}", obj.name);
        }
    }

    #[test]
    fn texture_lookup_by_name() {
        let scene = Scene::house();
        assert_eq!(scene.texture_id("rocky_ground"), Some(TextureId(0)));
        assert_eq!(scene.texture_id("bush"), Some(TextureId(7)));
        assert_eq!(scene.texture_id("marble"), None);

        let walls: Vec<_> = scene
            .objects()
            .iter()
            .filter(|o| o.texture == TextureId(2))
            .map(|o| o.name)
            .collect();
        assert_eq!(walls, ["house_stone_wall", "surrounding_wall"]);
    }

    #[test]
    fn mesh_sizes() {
        let scene = Scene::house();
        let count = |id| scene.mesh(MeshId(id)).map(MeshData::vertex_count);
        assert_eq!(count(0), Some(6));
        assert_eq!(count(1), Some(3 * 36));
        assert_eq!(count(5), Some(6));
        assert_eq!(count(8), Some(15 * 6));
        assert_eq!(count(9), None);
    }

    #[test]
    fn dangling_mesh_reference_is_rejected() {
        let scene = Scene::house();
        let mut objects = scene.objects().to_vec();
        objects[1].mesh = MeshId(42);
        let broken = Scene::new(scene.meshes().to_vec(), scene.textures().to_vec(), objects);
        assert!(matches!(
            broken.validate(),
            Err(SceneError::UnknownMesh {
                object: "base_building",
                ..
            })
        ));
    }

    #[test]
    fn dangling_texture_reference_is_rejected() {
        let scene = Scene::house();
        let broken = Scene::new(
            scene.meshes().to_vec(),
            scene.textures()[..2].to_vec(),
            scene.objects().to_vec(),
        );
        assert!(matches!(
            broken.validate(),
            Err(SceneError::UnknownTexture { .. })
        ));
    }

    #[test]
    fn empty_mesh_is_rejected() {
        let broken = Scene::new(vec![MeshBuilder::new("nothing").build()], vec![], vec![]);
        assert_eq!(broken.validate(), Err(SceneError::EmptyMesh("nothing")));
    }

    #[test]
    fn lamp_is_unit_cube() {
        let lamp = lamp_mesh();
        assert_eq!(lamp.vertex_count(), 36);
        assert_eq!(lamp.bounds(), Some((Vec3::splat(-0.5), Vec3::splat(0.5))));
    }
}
