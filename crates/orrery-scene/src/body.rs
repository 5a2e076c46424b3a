//! Scene bodies and their time-driven transform laws.

use glam::{Mat4, Vec3};

/// How a body's transform evolves with elapsed time. Each variant is a pure
/// function of `t`; identical inputs yield bit-identical matrices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransformLaw {
    /// Fixed placement with axial spin: `translate(offset) · scale(scale) ·
    /// rotate_x(tilt) · rotate_y(spin_rate · t)` — scale first, then the
    /// rotations, then the translation, in object space.
    Spin {
        offset: Vec3,
        scale: f32,
        /// Fixed tilt about X in degrees, applied before the spin.
        tilt_deg: f32,
        /// Spin about Y in radians per second.
        spin_rate: f32,
    },
    /// Circular orbit in the XZ plane at a fixed height:
    /// `translate(−radius·cos(rate·t), height, −radius·sin(rate·t))`.
    Orbit {
        radius: f32,
        height: f32,
        /// Angular rate in radians per second.
        rate: f32,
    },
}

impl TransformLaw {
    /// Model matrix at elapsed time `t` seconds.
    pub fn model_matrix(&self, t: f32) -> Mat4 {
        match *self {
            TransformLaw::Spin {
                offset,
                scale,
                tilt_deg,
                spin_rate,
            } => {
                Mat4::from_translation(offset)
                    * Mat4::from_scale(Vec3::splat(scale))
                    * Mat4::from_rotation_x(tilt_deg.to_radians())
                    * Mat4::from_rotation_y(spin_rate * t)
            }
            TransformLaw::Orbit {
                radius,
                height,
                rate,
            } => {
                let angle = rate * t;
                Mat4::from_translation(Vec3::new(
                    -radius * angle.cos(),
                    height,
                    -radius * angle.sin(),
                ))
            }
        }
    }
}

/// Which shader path a body takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShadingMode {
    /// Point light + directional fill lights + specular highlight.
    Lit,
    /// Plain texture sample, no lighting. The sun is its own light source.
    Textured,
}

/// One rendered celestial body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneBody {
    pub name: &'static str,
    pub law: TransformLaw,
    pub shading: ShadingMode,
}

/// The fixed scene, opaque draw order: Earth, Moon, Sun.
pub fn scene_bodies() -> [SceneBody; 3] {
    [
        SceneBody {
            name: "earth",
            law: TransformLaw::Spin {
                offset: Vec3::new(0.5, 15.5, 3.0),
                scale: 1.0,
                tilt_deg: 180.0,
                spin_rate: 0.5,
            },
            shading: ShadingMode::Lit,
        },
        SceneBody {
            name: "moon",
            law: TransformLaw::Orbit {
                radius: 8.0,
                height: 14.5,
                rate: 1.0,
            },
            shading: ShadingMode::Lit,
        },
        SceneBody {
            name: "sun",
            law: TransformLaw::Spin {
                offset: Vec3::new(-28.0, 8.5, 75.0),
                scale: 5.0,
                tilt_deg: 0.0,
                spin_rate: 0.25,
            },
            shading: ShadingMode::Textured,
        },
    ]
}
