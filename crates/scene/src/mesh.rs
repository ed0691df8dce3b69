use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};

/// Interleaved vertex: position, normal, texture coordinate.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl Vertex {
    pub fn new(position: Vec3, normal: Vec3, uv: Vec2) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
            uv: uv.to_array(),
        }
    }
}

/// CPU-side triangle list for one renderable mesh.
#[derive(Debug, Clone)]
pub struct MeshData {
    pub name: &'static str,
    pub vertices: Vec<Vertex>,
}

impl MeshData {
    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Axis-aligned bounds of all vertex positions, or `None` for an empty mesh.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let mut iter = self.vertices.iter().map(|v| Vec3::from_array(v.position));
        let first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p))))
    }
}

/// Builds triangle lists out of boxes, rectangles and pyramids.
///
/// Faces are wound counter-clockwise seen from outside and carry flat
/// normals derived from that winding.
#[derive(Debug)]
pub struct MeshBuilder {
    name: &'static str,
    vertices: Vec<Vertex>,
}

impl MeshBuilder {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            vertices: Vec::new(),
        }
    }

    /// Quad from corners in counter-clockwise order (bottom-left first).
    /// Texture coordinates run 0..uv_scale across the quad.
    pub fn quad(mut self, corners: [Vec3; 4], uv_scale: Vec2) -> Self {
        let [bl, br, tr, tl] = corners;
        let normal = (br - bl).cross(tl - bl).normalize_or_zero();
        let uv = [
            Vec2::ZERO,
            Vec2::new(uv_scale.x, 0.0),
            uv_scale,
            Vec2::new(0.0, uv_scale.y),
        ];
        for (p, t) in [(bl, uv[0]), (br, uv[1]), (tr, uv[2]), (tr, uv[2]), (tl, uv[3]), (bl, uv[0])]
        {
            self.vertices.push(Vertex::new(p, normal, t));
        }
        self
    }

    /// Single triangle; apex gets the top-center texture coordinate.
    pub fn triangle(mut self, a: Vec3, b: Vec3, apex: Vec3) -> Self {
        let normal = (b - a).cross(apex - a).normalize_or_zero();
        self.vertices.push(Vertex::new(a, normal, Vec2::new(0.0, 0.0)));
        self.vertices.push(Vertex::new(b, normal, Vec2::new(1.0, 0.0)));
        self.vertices.push(Vertex::new(apex, normal, Vec2::new(0.5, 1.0)));
        self
    }

    /// Closed axis-aligned box.
    pub fn cuboid(self, min: Vec3, max: Vec3) -> Self {
        let (x0, y0, z0) = (min.x, min.y, min.z);
        let (x1, y1, z1) = (max.x, max.y, max.z);
        let v = Vec3::new;
        self
            // +Z
            .quad([v(x0, y0, z1), v(x1, y0, z1), v(x1, y1, z1), v(x0, y1, z1)], Vec2::ONE)
            // -Z
            .quad([v(x1, y0, z0), v(x0, y0, z0), v(x0, y1, z0), v(x1, y1, z0)], Vec2::ONE)
            // +X
            .quad([v(x1, y0, z1), v(x1, y0, z0), v(x1, y1, z0), v(x1, y1, z1)], Vec2::ONE)
            // -X
            .quad([v(x0, y0, z0), v(x0, y0, z1), v(x0, y1, z1), v(x0, y1, z0)], Vec2::ONE)
            // +Y
            .quad([v(x0, y1, z1), v(x1, y1, z1), v(x1, y1, z0), v(x0, y1, z0)], Vec2::ONE)
            // -Y
            .quad([v(x0, y0, z0), v(x1, y0, z0), v(x1, y0, z1), v(x0, y0, z1)], Vec2::ONE)
    }

    /// Vertical rectangle in the plane `z`, spanning `min..max` in x/y.
    /// `facing_positive` selects a +Z or -Z normal.
    pub fn rect_z(self, min: Vec2, max: Vec2, z: f32, facing_positive: bool) -> Self {
        let v = Vec3::new;
        let corners = if facing_positive {
            [v(min.x, min.y, z), v(max.x, min.y, z), v(max.x, max.y, z), v(min.x, max.y, z)]
        } else {
            [v(max.x, min.y, z), v(min.x, min.y, z), v(min.x, max.y, z), v(max.x, max.y, z)]
        };
        self.quad(corners, Vec2::ONE)
    }

    /// Horizontal upward-facing rectangle at height `y`.
    pub fn floor(self, min: Vec2, max: Vec2, y: f32, uv_scale: Vec2) -> Self {
        let v = Vec3::new;
        self.quad(
            [v(min.x, y, max.y), v(max.x, y, max.y), v(max.x, y, min.y), v(min.x, y, min.y)],
            uv_scale,
        )
    }

    /// Four-sided pyramid over the rectangle `base_min..base_max` (x/z) at
    /// height `base_y`, closed underneath.
    pub fn pyramid(self, base_min: Vec2, base_max: Vec2, base_y: f32, apex: Vec3) -> Self {
        let c = |x: f32, z: f32| Vec3::new(x, base_y, z);
        let front_left = c(base_min.x, base_max.y);
        let front_right = c(base_max.x, base_max.y);
        let back_right = c(base_max.x, base_min.y);
        let back_left = c(base_min.x, base_min.y);
        self.triangle(front_left, front_right, apex)
            .triangle(front_right, back_right, apex)
            .triangle(back_right, back_left, apex)
            .triangle(back_left, front_left, apex)
            .quad([back_left, back_right, front_right, front_left], Vec2::ONE)
    }

    pub fn build(self) -> MeshData {
        tracing::debug!(
            "built mesh '{}' with {} vertices",
            self.name,
            self.vertices.len()
        );
        MeshData {
            name: self.name,
            vertices: self.vertices,
        }
    }
}
