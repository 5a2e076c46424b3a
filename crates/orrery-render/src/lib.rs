//! GPU plumbing for the orrery viewer: device/surface management, depth
//! buffer, mesh and texture upload, and the three render pipelines (lit
//! bodies, textured sun, skybox).

mod body_pipeline;
mod buffer;
mod depth;
mod gpu;
mod skybox_pipeline;
mod sun_pipeline;
mod texture;
mod uniforms;

pub use body_pipeline::{BODY_SHADER_SOURCE, BodyPipeline, draw_body};
pub use buffer::{MeshBuffer, VertexPosition, VertexPositionNormalUv, skybox_vertex_buffer};
pub use depth::DepthBuffer;
pub use gpu::{RenderContext, RenderContextError, SurfaceError, init_render_context_blocking};
pub use skybox_pipeline::{SKYBOX_SHADER_SOURCE, SkyboxPipeline, draw_skybox};
pub use sun_pipeline::{SUN_SHADER_SOURCE, SunPipeline, draw_sun};
pub use texture::{
    CubemapTexture, Texture2d, create_cubemap_bind_group_layout, create_material_bind_group_layout,
    mip_level_count,
};
pub use uniforms::{
    FillLightUniform, FrameUniform, LightsUniform, ModelUniform, PointLightUniform, SkyboxUniform,
};
