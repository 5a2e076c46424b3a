//! Fixed lighting constants for the lit bodies.

use glam::Vec3;

/// Specular exponent shared by all lit materials.
pub const SHININESS: f32 = 32.0;

/// A directional fill light: a direction plus small uniform color terms used
/// to soften pure point-light shadowing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillLight {
    pub direction: Vec3,
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
}

const FILL_COLOR: Vec3 = Vec3::new(0.005, 0.005, 0.005);

const fn fill(direction: Vec3) -> FillLight {
    FillLight {
        direction,
        ambient: FILL_COLOR,
        diffuse: FILL_COLOR,
        specular: FILL_COLOR,
    }
}

/// Four fill lights bracketing the scene from above and below. These are
/// scene-tuning constants, not derived from any other state.
pub const FILL_LIGHTS: [FillLight; 4] = [
    fill(Vec3::new(-0.2, -1.0, -0.3)),
    fill(Vec3::new(0.2, -1.0, -0.3)),
    fill(Vec3::new(-0.2, 1.0, -0.3)),
    fill(Vec3::new(0.2, 1.0, -0.3)),
];
