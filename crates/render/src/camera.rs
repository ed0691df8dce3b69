use cottage_common::{CameraConfig, MoveDirection};
use glam::{Mat4, Vec3};

/// Pitch limit in degrees; looking straight up or down would flip the basis.
pub const PITCH_LIMIT: f32 = 89.0;

/// Free-fly camera with yaw/pitch orientation and a zoom (field of view).
///
/// Angles are in degrees. `front`, `right` and `up` are recomputed after
/// every orientation change and always form an orthonormal basis.
/// Movement is unbounded.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    yaw: f32,
    pitch: f32,
    zoom: f32,
    front: Vec3,
    up: Vec3,
    right: Vec3,
    world_up: Vec3,
    /// World units per second.
    pub speed: f32,
    /// Degrees per pointer unit.
    pub sensitivity: f32,
    min_zoom: f32,
    max_zoom: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_config(&CameraConfig::default())
    }
}

impl Camera {
    pub fn new(position: Vec3, yaw: f32, pitch: f32) -> Self {
        Self {
            position,
            yaw,
            ..Self::default()
        }
        .with_pitch(pitch)
    }

    pub fn from_config(config: &CameraConfig) -> Self {
        let mut camera = Self {
            position: config.position,
            yaw: config.yaw,
            pitch: 0.0,
            zoom: 0.0,
            front: Vec3::NEG_Z,
            up: Vec3::Y,
            right: Vec3::X,
            world_up: Vec3::Y,
            speed: config.speed,
            sensitivity: config.sensitivity,
            min_zoom: config.min_zoom,
            max_zoom: config.max_zoom,
        };
        camera.zoom = config.zoom.clamp(camera.min_zoom, camera.max_zoom);
        camera.with_pitch(config.pitch)
    }

    fn with_pitch(mut self, pitch: f32) -> Self {
        self.pitch = pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.update_vectors();
        self
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Vertical field of view in degrees.
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn zoom_bounds(&self) -> (f32, f32) {
        (self.min_zoom, self.max_zoom)
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    /// Move along the camera basis by `speed * delta_time`.
    pub fn process_keyboard_move(&mut self, direction: MoveDirection, delta_time: f32) {
        let velocity = self.speed * delta_time;
        match direction {
            MoveDirection::Forward => self.position += self.front * velocity,
            MoveDirection::Backward => self.position -= self.front * velocity,
            MoveDirection::Left => self.position -= self.right * velocity,
            MoveDirection::Right => self.position += self.right * velocity,
            MoveDirection::Up => self.position += self.up * velocity,
            MoveDirection::Down => self.position -= self.up * velocity,
        }
    }

    /// Turn by pointer offsets scaled by `sensitivity`; pitch is clamped.
    pub fn process_mouse_move(&mut self, x_offset: f32, y_offset: f32) {
        self.yaw += x_offset * self.sensitivity;
        self.pitch = (self.pitch + y_offset * self.sensitivity).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.update_vectors();
    }

    /// Scrolling up narrows the field of view, clamped to the zoom bounds.
    pub fn process_mouse_scroll(&mut self, y_offset: f32) {
        self.zoom = (self.zoom - y_offset).clamp(self.min_zoom, self.max_zoom);
    }

    /// Right-handed look-at from `position` towards `position + front`.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    fn update_vectors(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        self.front = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn assert_orthonormal(cam: &Camera) {
        let (f, r, u) = (cam.front(), cam.right(), cam.up());
        for v in [f, r, u] {
            assert!((v.length() - 1.0).abs() < EPS, "not unit: {v:?}");
        }
        assert!(f.dot(r).abs() < EPS);
        assert!(f.dot(u).abs() < EPS);
        assert!(r.dot(u).abs() < EPS);
    }

    /// Small deterministic generator so the property tests need no extra crates.
    fn offsets(seed: u32, n: usize) -> impl Iterator<Item = (f32, f32)> {
        let mut state = seed;
        let mut next = move || {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state as f32 / u32::MAX as f32) * 2.0 - 1.0
        };
        (0..n).map(move |_| (next() * 800.0, next() * 800.0))
    }

    #[test]
    fn default_matches_start_pose() {
        let cam = Camera::default();
        assert_eq!(cam.position, Vec3::new(-0.5, 1.0, 4.0));
        assert_eq!(cam.yaw(), -90.0);
        assert_eq!(cam.pitch(), 0.0);
        assert_eq!(cam.zoom(), 45.0);
        assert!((cam.front() - Vec3::NEG_Z).length() < EPS);
        assert_orthonormal(&cam);
    }

    #[test]
    fn forward_from_origin_facing_neg_z() {
        let mut cam = Camera::new(Vec3::ZERO, -90.0, 0.0);
        cam.speed = 2.5;
        cam.process_keyboard_move(MoveDirection::Forward, 1.0);
        assert!((cam.position - Vec3::new(0.0, 0.0, -2.5)).length() < EPS);
    }

    #[test]
    fn each_direction_moves_along_its_axis() {
        let cases = [
            (MoveDirection::Forward, Vec3::NEG_Z),
            (MoveDirection::Backward, Vec3::Z),
            (MoveDirection::Left, Vec3::NEG_X),
            (MoveDirection::Right, Vec3::X),
            (MoveDirection::Up, Vec3::Y),
            (MoveDirection::Down, Vec3::NEG_Y),
        ];
        for (dir, expected) in cases {
            let mut cam = Camera::new(Vec3::ZERO, -90.0, 0.0);
            cam.speed = 1.0;
            cam.process_keyboard_move(dir, 0.5);
            assert!(
                (cam.position - expected * 0.5).length() < EPS,
                "{dir:?}: {:?}",
                cam.position
            );
        }
    }

    #[test]
    fn movement_is_unbounded() {
        let mut cam = Camera::default();
        cam.speed = 1.0e6;
        cam.process_keyboard_move(MoveDirection::Backward, 10.0);
        assert!(cam.position.z > 1.0e6);
    }

    #[test]
    fn basis_stays_orthonormal_under_random_look() {
        for seed in [1, 7, 42, 1234] {
            let mut cam = Camera::default();
            for (dx, dy) in offsets(seed, 500) {
                cam.process_mouse_move(dx, dy);
                assert_orthonormal(&cam);
            }
        }
    }

    #[test]
    fn pitch_stays_within_limits() {
        let mut cam = Camera::default();
        for _ in 0..100 {
            cam.process_mouse_move(0.0, 1000.0);
            assert!(cam.pitch() <= PITCH_LIMIT);
        }
        assert_eq!(cam.pitch(), PITCH_LIMIT);
        for _ in 0..100 {
            cam.process_mouse_move(3.0, -1000.0);
            assert!(cam.pitch() >= -PITCH_LIMIT);
        }
        assert_eq!(cam.pitch(), -PITCH_LIMIT);
        assert_orthonormal(&cam);
    }

    #[test]
    fn mouse_move_scales_by_sensitivity() {
        let mut cam = Camera::default();
        cam.process_mouse_move(10.0, 5.0);
        assert!((cam.yaw() - (-89.0)).abs() < EPS);
        assert!((cam.pitch() - 0.5).abs() < EPS);
    }

    #[test]
    fn scroll_down_at_max_stays_clamped() {
        let mut cam = Camera::default();
        assert_eq!(cam.zoom(), 45.0);
        cam.process_mouse_scroll(-1.0);
        assert_eq!(cam.zoom(), 45.0);
    }

    #[test]
    fn scroll_down_widens_by_one_degree() {
        let mut cam = Camera::default();
        cam.process_mouse_scroll(1.0);
        assert_eq!(cam.zoom(), 44.0);
        cam.process_mouse_scroll(-1.0);
        assert_eq!(cam.zoom(), 45.0);
    }

    #[test]
    fn zoom_stays_within_bounds() {
        let mut cam = Camera::default();
        let (lo, hi) = cam.zoom_bounds();
        for (dy, _) in offsets(99, 300) {
            cam.process_mouse_scroll(dy / 20.0);
            assert!(cam.zoom() >= lo && cam.zoom() <= hi);
        }
        cam.process_mouse_scroll(1000.0);
        assert_eq!(cam.zoom(), lo);
    }

    #[test]
    fn config_pitch_and_zoom_are_clamped() {
        let config = CameraConfig {
            pitch: 120.0,
            zoom: 90.0,
            ..CameraConfig::default()
        };
        let cam = Camera::from_config(&config);
        assert_eq!(cam.pitch(), PITCH_LIMIT);
        assert_eq!(cam.zoom(), config.max_zoom);
    }

    #[test]
    fn view_matrix_maps_target_onto_neg_z() {
        let cam = Camera::default();
        let view = cam.view_matrix();
        let eye = view.transform_point3(cam.position);
        assert!(eye.length() < EPS);
        let ahead = view.transform_point3(cam.position + cam.front() * 3.0);
        assert!((ahead - Vec3::new(0.0, 0.0, -3.0)).length() < EPS);
    }

    #[test]
    fn view_matrix_is_pure() {
        let cam = Camera::default();
        let before = cam.clone();
        let a = cam.view_matrix();
        let b = cam.view_matrix();
        assert_eq!(a, b);
        assert_eq!(cam, before);
    }
}
