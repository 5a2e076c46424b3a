//! Skybox pipeline: the cube drawn last, at far-plane depth, with the
//! translation-stripped view matrix.
//!
//! The vertex shader forces `z = w` so every skybox fragment lands at exactly
//! far-plane depth; with the buffer cleared to 1.0 and this pipeline testing
//! `LessEqual`, the skybox fills whatever the opaque bodies left uncovered.
//! Depth writes are off and no other pipeline uses the relaxed comparison, so
//! body depth testing is unaffected before and after this draw.

use std::num::NonZeroU64;

use crate::buffer::VertexPosition;
use crate::depth::DepthBuffer;
use crate::uniforms::SkyboxUniform;

use orrery_scene::SKYBOX_VERTEX_COUNT;

/// WGSL shader source for the skybox pass.
pub const SKYBOX_SHADER_SOURCE: &str = r#"
struct SkyboxUniform {
    projection: mat4x4<f32>,
    // View matrix with translation stripped: orientation only.
    view_rot: mat4x4<f32>,
};

@group(0) @binding(0)
var<uniform> skybox: SkyboxUniform;
@group(1) @binding(0)
var t_skybox: texture_cube<f32>;
@group(1) @binding(1)
var s_skybox: sampler;

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) direction: vec3<f32>,
};

@vertex
fn vs_main(@location(0) position: vec3<f32>) -> VertexOutput {
    var out: VertexOutput;
    let clip = skybox.projection * skybox.view_rot * vec4<f32>(position, 1.0);
    // z = w pins the cube to the far plane after the perspective divide.
    out.clip_position = clip.xyww;
    out.direction = position;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    return textureSample(t_skybox, s_skybox, in.direction);
}
"#;

/// Skybox rendering pipeline.
pub struct SkyboxPipeline {
    /// The underlying wgpu render pipeline.
    pub pipeline: wgpu::RenderPipeline,
    /// Skybox uniform bind group layout (group 0).
    pub uniform_bind_group_layout: wgpu::BindGroupLayout,
}

impl SkyboxPipeline {
    /// Create the skybox pipeline. `cubemap_bind_group_layout` is group 1
    /// (cube texture + sampler).
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        cubemap_bind_group_layout: &wgpu::BindGroupLayout,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("skybox-shader"),
            source: wgpu::ShaderSource::Wgsl(SKYBOX_SHADER_SOURCE.into()),
        });

        let uniform_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("skybox-uniform-bgl"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: NonZeroU64::new(
                            std::mem::size_of::<SkyboxUniform>() as u64
                        ),
                    },
                    count: None,
                }],
            });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("skybox-pipeline-layout"),
            bind_group_layouts: &[&uniform_bind_group_layout, cubemap_bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("skybox-pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[VertexPosition::layout()],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                // The cube is viewed from inside; culling would discard it.
                cull_mode: None,
                unclipped_depth: false,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DepthBuffer::FORMAT,
                depth_write_enabled: false,
                depth_compare: DepthBuffer::SKYBOX_COMPARE_FUNCTION,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            multiview: None,
            cache: None,
        });

        Self {
            pipeline,
            uniform_bind_group_layout,
        }
    }
}

/// Draw the skybox: a non-indexed 36-vertex triangle list. Must come after
/// every opaque body draw in the pass.
pub fn draw_skybox(
    render_pass: &mut wgpu::RenderPass<'_>,
    pipeline: &SkyboxPipeline,
    uniform_bind_group: &wgpu::BindGroup,
    cubemap_bind_group: &wgpu::BindGroup,
    vertex_buffer: &wgpu::Buffer,
) {
    render_pass.set_pipeline(&pipeline.pipeline);
    render_pass.set_bind_group(0, uniform_bind_group, &[]);
    render_pass.set_bind_group(1, cubemap_bind_group, &[]);
    render_pass.set_vertex_buffer(0, vertex_buffer.slice(..));
    render_pass.draw(0..SKYBOX_VERTEX_COUNT, 0..1);
}
