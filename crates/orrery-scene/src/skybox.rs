//! Skybox cube geometry and the view-matrix translation strip.

use glam::{Mat3, Mat4};

/// The skybox draws as a non-indexed triangle list of this many vertices.
pub const SKYBOX_VERTEX_COUNT: u32 = 36;

/// Unit cube as 12 triangles, positions only, wound to face inward so the
/// cube is visible from its center.
#[rustfmt::skip]
pub const SKYBOX_VERTICES: [[f32; 3]; SKYBOX_VERTEX_COUNT as usize] = [
    [-1.0,  1.0, -1.0], [-1.0, -1.0, -1.0], [ 1.0, -1.0, -1.0],
    [ 1.0, -1.0, -1.0], [ 1.0,  1.0, -1.0], [-1.0,  1.0, -1.0],

    [-1.0, -1.0,  1.0], [-1.0, -1.0, -1.0], [-1.0,  1.0, -1.0],
    [-1.0,  1.0, -1.0], [-1.0,  1.0,  1.0], [-1.0, -1.0,  1.0],

    [ 1.0, -1.0, -1.0], [ 1.0, -1.0,  1.0], [ 1.0,  1.0,  1.0],
    [ 1.0,  1.0,  1.0], [ 1.0,  1.0, -1.0], [ 1.0, -1.0, -1.0],

    [-1.0, -1.0,  1.0], [-1.0,  1.0,  1.0], [ 1.0,  1.0,  1.0],
    [ 1.0,  1.0,  1.0], [ 1.0, -1.0,  1.0], [-1.0, -1.0,  1.0],

    [-1.0,  1.0, -1.0], [ 1.0,  1.0, -1.0], [ 1.0,  1.0,  1.0],
    [ 1.0,  1.0,  1.0], [-1.0,  1.0,  1.0], [-1.0,  1.0, -1.0],

    [-1.0, -1.0, -1.0], [-1.0, -1.0,  1.0], [ 1.0, -1.0, -1.0],
    [ 1.0, -1.0, -1.0], [-1.0, -1.0,  1.0], [ 1.0, -1.0,  1.0],
];

/// Drops the translation component of a view matrix, keeping orientation
/// only. Drawn with this view, the skybox appears infinitely distant: camera
/// movement never changes it, camera rotation does.
pub fn strip_translation(view: Mat4) -> Mat4 {
    Mat4::from_mat3(Mat3::from_mat4(view))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::{Vec3, Vec4};

    #[test]
    fn test_vertex_count_matches_cube() {
        assert_eq!(SKYBOX_VERTICES.len(), 36);
        assert_eq!(SKYBOX_VERTEX_COUNT, 36);
        // Every vertex sits on the unit cube surface.
        for v in &SKYBOX_VERTICES {
            assert!(v.iter().any(|c| c.abs() == 1.0));
            assert!(v.iter().all(|c| c.abs() <= 1.0));
        }
    }

    #[test]
    fn test_strip_translation_zeroes_translation_column() {
        let view = Mat4::look_at_rh(Vec3::new(5.0, -2.0, 9.0), Vec3::ZERO, Vec3::Y);
        let stripped = strip_translation(view);
        assert_eq!(stripped.col(3), Vec4::new(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_strip_translation_preserves_rotation() {
        let view = Mat4::look_at_rh(Vec3::new(5.0, -2.0, 9.0), Vec3::ZERO, Vec3::Y);
        let stripped = strip_translation(view);
        for col in 0..3 {
            let original = view.col(col).truncate();
            let kept = stripped.col(col).truncate();
            assert_relative_eq!((original - kept).length(), 0.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_stripped_view_is_position_independent() {
        let a = Mat4::look_at_rh(Vec3::new(1.0, 2.0, 3.0), Vec3::new(1.0, 2.0, 2.0), Vec3::Y);
        let b = Mat4::look_at_rh(
            Vec3::new(-40.0, 7.0, 100.0),
            Vec3::new(-40.0, 7.0, 99.0),
            Vec3::Y,
        );
        let sa = strip_translation(a);
        let sb = strip_translation(b);
        for col in 0..4 {
            assert_relative_eq!((sa.col(col) - sb.col(col)).length(), 0.0, epsilon = 1e-5);
        }
    }
}
