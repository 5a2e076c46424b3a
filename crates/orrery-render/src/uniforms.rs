//! GPU-visible uniform structs shared across the pipelines.
//!
//! All structs are `#[repr(C)]` with vec3 values widened to vec4 so the Rust
//! layout matches WGSL uniform address-space rules without padding surprises.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

use orrery_config::PointLightParams;
use orrery_scene::{FILL_LIGHTS, FillLight, SHININESS};

fn widen(v: Vec3) -> [f32; 4] {
    [v.x, v.y, v.z, 0.0]
}

/// Per-frame uniforms shared by the body and sun pipelines (group 0).
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct FrameUniform {
    pub projection: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    /// Viewer position; w unused.
    pub view_pos: [f32; 4],
}

impl FrameUniform {
    pub fn new(projection: Mat4, view: Mat4, view_pos: Vec3) -> Self {
        Self {
            projection: projection.to_cols_array_2d(),
            view: view.to_cols_array_2d(),
            view_pos: widen(view_pos),
        }
    }
}

/// Per-body model matrix (group 1).
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct ModelUniform {
    pub model: [[f32; 4]; 4],
}

impl ModelUniform {
    pub fn new(model: Mat4) -> Self {
        Self {
            model: model.to_cols_array_2d(),
        }
    }
}

/// Point light with attenuation packed alongside the shininess scalar.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct PointLightUniform {
    pub position: [f32; 4],
    pub ambient: [f32; 4],
    pub diffuse: [f32; 4],
    pub specular: [f32; 4],
    /// x = constant, y = linear, z = quadratic, w = material shininess.
    pub attenuation: [f32; 4],
}

/// One directional fill light.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct FillLightUniform {
    pub direction: [f32; 4],
    pub ambient: [f32; 4],
    pub diffuse: [f32; 4],
    pub specular: [f32; 4],
}

impl From<&FillLight> for FillLightUniform {
    fn from(light: &FillLight) -> Self {
        Self {
            direction: widen(light.direction),
            ambient: widen(light.ambient),
            diffuse: widen(light.diffuse),
            specular: widen(light.specular),
        }
    }
}

/// The full lighting block for the lit bodies (group 2): one point light plus
/// the four fixed fill lights.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct LightsUniform {
    pub point: PointLightUniform,
    pub fill: [FillLightUniform; 4],
}

impl LightsUniform {
    /// Builds the block from the runtime-tunable point light and the fixed
    /// fill lights.
    pub fn new(point: &PointLightParams) -> Self {
        Self {
            point: PointLightUniform {
                position: widen(point.position),
                ambient: widen(point.ambient),
                diffuse: widen(point.diffuse),
                specular: widen(point.specular),
                attenuation: [point.constant, point.linear, point.quadratic, SHININESS],
            },
            fill: [
                FillLightUniform::from(&FILL_LIGHTS[0]),
                FillLightUniform::from(&FILL_LIGHTS[1]),
                FillLightUniform::from(&FILL_LIGHTS[2]),
                FillLightUniform::from(&FILL_LIGHTS[3]),
            ],
        }
    }
}

/// Skybox pass uniforms: projection plus the rotation-only view (group 0).
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct SkyboxUniform {
    pub projection: [[f32; 4]; 4],
    /// View matrix with the translation column stripped.
    pub view_rot: [[f32; 4]; 4],
}

impl SkyboxUniform {
    pub fn new(projection: Mat4, view_rot: Mat4) -> Self {
        Self {
            projection: projection.to_cols_array_2d(),
            view_rot: view_rot.to_cols_array_2d(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_sizes_match_wgsl_layout() {
        assert_eq!(std::mem::size_of::<FrameUniform>(), 144);
        assert_eq!(std::mem::size_of::<ModelUniform>(), 64);
        assert_eq!(std::mem::size_of::<PointLightUniform>(), 80);
        assert_eq!(std::mem::size_of::<FillLightUniform>(), 64);
        assert_eq!(std::mem::size_of::<LightsUniform>(), 80 + 4 * 64);
        assert_eq!(std::mem::size_of::<SkyboxUniform>(), 128);
    }

    #[test]
    fn test_lights_uniform_packs_attenuation_and_shininess() {
        let params = PointLightParams::default();
        let uniform = LightsUniform::new(&params);
        assert_eq!(uniform.point.attenuation, [1.0, 0.09, 0.032, 32.0]);
        assert_eq!(uniform.point.position[..3], [-7.0, 14.5, 35.0]);
        assert_eq!(uniform.point.diffuse[..3], [50.0, 50.0, 50.0]);
    }

    #[test]
    fn test_lights_uniform_carries_fill_constants() {
        let uniform = LightsUniform::new(&PointLightParams::default());
        assert_eq!(uniform.fill[0].direction[..3], [-0.2, -1.0, -0.3]);
        assert_eq!(uniform.fill[3].direction[..3], [0.2, 1.0, -0.3]);
        for fill in &uniform.fill {
            assert_eq!(fill.ambient[..3], [0.005, 0.005, 0.005]);
        }
    }

    #[test]
    fn test_frame_uniform_column_major() {
        let projection = Mat4::perspective_rh(0.8, 4.0 / 3.0, 0.1, 100.0);
        let view = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        let uniform = FrameUniform::new(projection, view, Vec3::new(9.0, 8.0, 7.0));
        // Translation lives in the fourth column.
        assert_eq!(uniform.view[3][0], 1.0);
        assert_eq!(uniform.view[3][1], 2.0);
        assert_eq!(uniform.view[3][2], 3.0);
        assert_eq!(uniform.view_pos, [9.0, 8.0, 7.0, 0.0]);
    }
}
