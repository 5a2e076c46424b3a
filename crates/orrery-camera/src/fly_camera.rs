//! Free-fly camera driven by yaw/pitch angles.
//!
//! [`FlyCamera`] converts discrete input events (held movement keys, cursor
//! deltas, scroll deltas) into pose updates and produces a view matrix and a
//! perspective projection on demand. The front/right/up basis is always derived
//! from yaw/pitch, so it stays orthonormal under any input sequence.

use glam::{Mat4, Vec3};

/// Pitch is clamped to this magnitude (degrees) to keep the up vector from
/// flipping sign at the poles.
pub const PITCH_LIMIT_DEG: f32 = 89.0;
/// Minimum zoom (vertical field of view, degrees).
pub const ZOOM_MIN_DEG: f32 = 1.0;
/// Maximum zoom (vertical field of view, degrees).
pub const ZOOM_MAX_DEG: f32 = 45.0;

const DEFAULT_YAW_DEG: f32 = -90.0;
const DEFAULT_PITCH_DEG: f32 = 0.0;
const DEFAULT_SPEED: f32 = 2.5;
const DEFAULT_SENSITIVITY: f32 = 0.1;

/// Discrete movement directions fed from held keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraMovement {
    Forward,
    Backward,
    Left,
    Right,
}

/// A free-fly camera with yaw/pitch orientation and zoom standing in for
/// field of view.
#[derive(Debug, Clone)]
pub struct FlyCamera {
    /// World-space position. Unbounded; movement does no collision checks.
    pub position: Vec3,
    /// Horizontal look angle in degrees. −90 looks down −Z.
    pub yaw: f32,
    /// Vertical look angle in degrees, clamped to ±[`PITCH_LIMIT_DEG`].
    pub pitch: f32,
    /// Derived look direction (unit length).
    pub front: Vec3,
    /// Derived right vector (unit length).
    pub right: Vec3,
    /// Derived up vector (unit length).
    pub up: Vec3,
    /// World up used to derive the basis.
    pub world_up: Vec3,
    /// Vertical field of view in degrees, clamped to
    /// [[`ZOOM_MIN_DEG`], [`ZOOM_MAX_DEG`]].
    pub zoom: f32,
    /// Movement speed in units per second.
    pub speed: f32,
    /// Degrees of rotation per unit of cursor delta.
    pub sensitivity: f32,
}

impl FlyCamera {
    /// Creates a camera at `position` looking down −Z.
    pub fn new(position: Vec3) -> Self {
        let mut camera = Self {
            position,
            yaw: DEFAULT_YAW_DEG,
            pitch: DEFAULT_PITCH_DEG,
            front: Vec3::NEG_Z,
            right: Vec3::X,
            up: Vec3::Y,
            world_up: Vec3::Y,
            zoom: ZOOM_MAX_DEG,
            speed: DEFAULT_SPEED,
            sensitivity: DEFAULT_SENSITIVITY,
        };
        camera.update_vectors();
        camera
    }

    /// Moves the camera along its front/right vectors for one frame.
    pub fn process_keyboard(&mut self, direction: CameraMovement, dt: f32) {
        let velocity = self.speed * dt;
        match direction {
            CameraMovement::Forward => self.position += self.front * velocity,
            CameraMovement::Backward => self.position -= self.front * velocity,
            CameraMovement::Left => self.position -= self.right * velocity,
            CameraMovement::Right => self.position += self.right * velocity,
        }
    }

    /// Rotates the camera by a cursor delta. `dy` is positive when the cursor
    /// moves toward the top of the window.
    pub fn process_mouse_movement(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * self.sensitivity;
        self.pitch += dy * self.sensitivity;
        self.pitch = self.pitch.clamp(-PITCH_LIMIT_DEG, PITCH_LIMIT_DEG);
        self.update_vectors();
    }

    /// Adjusts zoom by a scroll delta. Scrolling up zooms in.
    pub fn process_mouse_scroll(&mut self, dy: f32) {
        self.zoom = (self.zoom - dy).clamp(ZOOM_MIN_DEG, ZOOM_MAX_DEG);
    }

    /// Points the camera along `front`, re-deriving yaw/pitch so the basis
    /// invariant holds. Used when restoring a persisted pose.
    pub fn set_front(&mut self, front: Vec3) {
        let front = front.normalize_or_zero();
        if front == Vec3::ZERO {
            return;
        }
        self.pitch = front
            .y
            .clamp(-1.0, 1.0)
            .asin()
            .to_degrees()
            .clamp(-PITCH_LIMIT_DEG, PITCH_LIMIT_DEG);
        self.yaw = front.z.atan2(front.x).to_degrees();
        self.update_vectors();
    }

    /// Right-handed look-at matrix from the current pose. Pure.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// Perspective projection using zoom as the vertical field of view. Pure.
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.zoom.to_radians(), aspect, 0.1, 100.0)
    }

    /// Recomputes front/right/up from yaw/pitch (spherical → Cartesian).
    fn update_vectors(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        let front = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        );
        self.front = front.normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

impl Default for FlyCamera {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 0.0, 3.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_camera_looks_down_neg_z() {
        let camera = FlyCamera::default();
        assert_relative_eq!(camera.front.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(camera.front.y, 0.0, epsilon = 1e-6);
        assert_relative_eq!(camera.front.z, -1.0, epsilon = 1e-6);
        assert_eq!(camera.position, Vec3::new(0.0, 0.0, 3.0));
    }

    #[test]
    fn test_pitch_clamped_under_extreme_input() {
        let mut camera = FlyCamera::default();
        for _ in 0..1000 {
            camera.process_mouse_movement(0.0, 50.0);
        }
        assert!(camera.pitch <= PITCH_LIMIT_DEG);
        for _ in 0..2000 {
            camera.process_mouse_movement(0.0, -50.0);
        }
        assert!(camera.pitch >= -PITCH_LIMIT_DEG);
    }

    #[test]
    fn test_front_y_equals_sin_pitch() {
        let mut camera = FlyCamera::default();
        let limit = PITCH_LIMIT_DEG.to_radians().sin();
        for dy in [12.3_f32, 40.0, 300.0, -95.5, -400.0] {
            camera.process_mouse_movement(0.0, dy);
            assert_relative_eq!(
                camera.front.y,
                camera.pitch.to_radians().sin(),
                epsilon = 1e-5
            );
            assert!(camera.front.y.abs() <= limit + 1e-6);
        }
    }

    #[test]
    fn test_zoom_clamped_to_range() {
        let mut camera = FlyCamera::default();
        for _ in 0..500 {
            camera.process_mouse_scroll(10.0);
        }
        assert_relative_eq!(camera.zoom, ZOOM_MIN_DEG);
        for _ in 0..500 {
            camera.process_mouse_scroll(-10.0);
        }
        assert_relative_eq!(camera.zoom, ZOOM_MAX_DEG);
    }

    #[test]
    fn test_basis_orthonormal_for_arbitrary_angles() {
        let mut camera = FlyCamera::default();
        for (dx, dy) in [(123.0, 45.0), (-310.0, -80.0), (721.5, 12.25), (0.1, -0.1)] {
            camera.process_mouse_movement(dx, dy);
            let (f, r, u) = (camera.front, camera.right, camera.up);
            assert_relative_eq!(f.length(), 1.0, epsilon = 1e-5);
            assert_relative_eq!(r.length(), 1.0, epsilon = 1e-5);
            assert_relative_eq!(u.length(), 1.0, epsilon = 1e-5);
            assert_relative_eq!(f.dot(r), 0.0, epsilon = 1e-5);
            assert_relative_eq!(f.dot(u), 0.0, epsilon = 1e-5);
            assert_relative_eq!(r.dot(u), 0.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_keyboard_moves_along_basis() {
        let mut camera = FlyCamera::default();
        let start = camera.position;
        camera.process_keyboard(CameraMovement::Forward, 2.0);
        let expected = start + camera.front * camera.speed * 2.0;
        assert_relative_eq!((camera.position - expected).length(), 0.0, epsilon = 1e-6);

        camera.process_keyboard(CameraMovement::Left, 1.0);
        camera.process_keyboard(CameraMovement::Right, 1.0);
        assert_relative_eq!((camera.position - expected).length(), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_view_matrix_has_no_side_effects() {
        let camera = FlyCamera::default();
        let a = camera.view_matrix();
        let b = camera.view_matrix();
        assert_eq!(a, b);
    }

    #[test]
    fn test_view_matrix_maps_target_to_neg_z() {
        let camera = FlyCamera::default();
        // A point straight ahead of the camera lands on the view-space −Z axis.
        let target = camera.position + camera.front * 5.0;
        let v = camera.view_matrix() * target.extend(1.0);
        assert_relative_eq!(v.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(v.y, 0.0, epsilon = 1e-5);
        assert_relative_eq!(v.z, -5.0, epsilon = 1e-4);
    }

    #[test]
    fn test_set_front_round_trips() {
        let mut source = FlyCamera::default();
        source.process_mouse_movement(230.0, -120.0);

        let mut restored = FlyCamera::default();
        restored.set_front(source.front);
        assert_relative_eq!((restored.front - source.front).length(), 0.0, epsilon = 1e-5);
        // The restored basis is still orthonormal.
        assert_relative_eq!(restored.front.dot(restored.right), 0.0, epsilon = 1e-5);
        assert_relative_eq!(restored.front.dot(restored.up), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_set_front_ignores_zero_vector() {
        let mut camera = FlyCamera::default();
        let before = camera.front;
        camera.set_front(Vec3::ZERO);
        assert_eq!(camera.front, before);
    }

    #[test]
    fn test_projection_uses_zoom_as_fov() {
        let mut camera = FlyCamera::default();
        camera.process_mouse_scroll(20.0); // zoom in to 25°
        let proj = camera.projection_matrix(800.0 / 600.0);
        let expected = Mat4::perspective_rh(25.0_f32.to_radians(), 800.0 / 600.0, 0.1, 100.0);
        assert_relative_eq!(
            (proj.col(1)[1] - expected.col(1)[1]).abs(),
            0.0,
            epsilon = 1e-5
        );
    }
}
