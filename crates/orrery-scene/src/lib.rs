//! Scene content for the Sun–Earth–Moon orrery: the body list with its
//! transform laws, the lighting tuning constants, and the skybox geometry.
//!
//! Everything here is pure data and pure math — no GPU types. Each body's
//! transform is fully determined by elapsed time and fixed per-body constants;
//! there is no physics integration and no state carried between frames.

mod body;
mod lights;
mod skybox;

pub use body::{SceneBody, ShadingMode, TransformLaw, scene_bodies};
pub use lights::{FILL_LIGHTS, FillLight, SHININESS};
pub use skybox::{SKYBOX_VERTEX_COUNT, SKYBOX_VERTICES, strip_translation};
