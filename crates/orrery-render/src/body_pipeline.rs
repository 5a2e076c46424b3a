//! Lit pipeline for the Earth and Moon bodies.
//!
//! Phong shading from one point light with distance attenuation plus four
//! directional fill lights, sampling the body's diffuse texture. Bind groups:
//! 0 = frame (projection/view/viewer), 1 = model, 2 = lights, 3 = material.
//! Two further material slots (normal and specular maps) are part of the
//! material layout's declared order but are not bound by the current scene.

use std::num::NonZeroU64;

use crate::buffer::{MeshBuffer, VertexPositionNormalUv};
use crate::depth::DepthBuffer;
use crate::uniforms::{FrameUniform, LightsUniform, ModelUniform};

/// WGSL shader source for the lit body pass.
pub const BODY_SHADER_SOURCE: &str = r#"
struct FrameUniform {
    projection: mat4x4<f32>,
    view: mat4x4<f32>,
    view_pos: vec4<f32>,
};

struct ModelUniform {
    model: mat4x4<f32>,
};

struct PointLight {
    position: vec4<f32>,
    ambient: vec4<f32>,
    diffuse: vec4<f32>,
    specular: vec4<f32>,
    // x = constant, y = linear, z = quadratic, w = material shininess
    attenuation: vec4<f32>,
};

struct FillLight {
    direction: vec4<f32>,
    ambient: vec4<f32>,
    diffuse: vec4<f32>,
    specular: vec4<f32>,
};

struct Lights {
    point: PointLight,
    fill: array<FillLight, 4>,
};

@group(0) @binding(0)
var<uniform> frame: FrameUniform;
@group(1) @binding(0)
var<uniform> body: ModelUniform;
@group(2) @binding(0)
var<uniform> lights: Lights;
@group(3) @binding(0)
var t_diffuse: texture_2d<f32>;
@group(3) @binding(1)
var s_diffuse: sampler;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
    @location(2) uv: vec2<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) world_pos: vec3<f32>,
    @location(1) normal: vec3<f32>,
    @location(2) uv: vec2<f32>,
};

@vertex
fn vs_main(in: VertexInput) -> VertexOutput {
    let world = body.model * vec4<f32>(in.position, 1.0);
    var out: VertexOutput;
    out.clip_position = frame.projection * frame.view * world;
    out.world_pos = world.xyz;
    // Body transforms use uniform scale, so the model matrix is a valid
    // normal transform.
    out.normal = (body.model * vec4<f32>(in.normal, 0.0)).xyz;
    out.uv = in.uv;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let base = textureSample(t_diffuse, s_diffuse, in.uv).rgb;
    let n = normalize(in.normal);
    let view_dir = normalize(frame.view_pos.xyz - in.world_pos);
    let shininess = lights.point.attenuation.w;

    // Point light with distance attenuation.
    let to_light = lights.point.position.xyz - in.world_pos;
    let dist = length(to_light);
    let light_dir = to_light / dist;
    let diff = max(dot(n, light_dir), 0.0);
    let reflect_dir = reflect(-light_dir, n);
    let spec = pow(max(dot(view_dir, reflect_dir), 0.0), shininess);
    let att = 1.0 / (lights.point.attenuation.x
        + lights.point.attenuation.y * dist
        + lights.point.attenuation.z * dist * dist);
    var color = (lights.point.ambient.rgb * base
        + lights.point.diffuse.rgb * diff * base
        + lights.point.specular.rgb * spec) * att;

    // Directional fill lights.
    for (var i = 0u; i < 4u; i = i + 1u) {
        let fill = lights.fill[i];
        let fill_dir = normalize(-fill.direction.xyz);
        let fill_diff = max(dot(n, fill_dir), 0.0);
        let fill_reflect = reflect(-fill_dir, n);
        let fill_spec = pow(max(dot(view_dir, fill_reflect), 0.0), shininess);
        color = color
            + fill.ambient.rgb * base
            + fill.diffuse.rgb * fill_diff * base
            + fill.specular.rgb * fill_spec;
    }

    return vec4<f32>(color, 1.0);
}
"#;

/// Lit rendering pipeline for the Earth and Moon.
pub struct BodyPipeline {
    /// The underlying wgpu render pipeline.
    pub pipeline: wgpu::RenderPipeline,
    /// Frame uniform bind group layout (group 0).
    pub frame_bind_group_layout: wgpu::BindGroupLayout,
    /// Model uniform bind group layout (group 1).
    pub model_bind_group_layout: wgpu::BindGroupLayout,
    /// Lights uniform bind group layout (group 2).
    pub lights_bind_group_layout: wgpu::BindGroupLayout,
}

impl BodyPipeline {
    /// Create the lit pipeline. `material_bind_group_layout` is group 3
    /// (diffuse texture + sampler).
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        material_bind_group_layout: &wgpu::BindGroupLayout,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("body-shader"),
            source: wgpu::ShaderSource::Wgsl(BODY_SHADER_SOURCE.into()),
        });

        let frame_bind_group_layout = uniform_layout(
            device,
            "body-frame-bgl",
            wgpu::ShaderStages::VERTEX_FRAGMENT,
            std::mem::size_of::<FrameUniform>() as u64,
        );
        let model_bind_group_layout = uniform_layout(
            device,
            "body-model-bgl",
            wgpu::ShaderStages::VERTEX,
            std::mem::size_of::<ModelUniform>() as u64,
        );
        let lights_bind_group_layout = uniform_layout(
            device,
            "body-lights-bgl",
            wgpu::ShaderStages::FRAGMENT,
            std::mem::size_of::<LightsUniform>() as u64,
        );

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("body-pipeline-layout"),
            bind_group_layouts: &[
                &frame_bind_group_layout,
                &model_bind_group_layout,
                &lights_bind_group_layout,
                material_bind_group_layout,
            ],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("body-pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[VertexPositionNormalUv::layout()],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: Some(wgpu::Face::Back),
                unclipped_depth: false,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DepthBuffer::FORMAT,
                depth_write_enabled: true,
                depth_compare: DepthBuffer::COMPARE_FUNCTION,
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
            frame_bind_group_layout,
            model_bind_group_layout,
            lights_bind_group_layout,
        }
    }
}

fn uniform_layout(
    device: &wgpu::Device,
    label: &str,
    visibility: wgpu::ShaderStages,
    size: u64,
) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some(label),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: NonZeroU64::new(size),
            },
            count: None,
        }],
    })
}

/// Draw a lit body.
pub fn draw_body(
    render_pass: &mut wgpu::RenderPass<'_>,
    pipeline: &BodyPipeline,
    frame_bind_group: &wgpu::BindGroup,
    model_bind_group: &wgpu::BindGroup,
    lights_bind_group: &wgpu::BindGroup,
    material_bind_group: &wgpu::BindGroup,
    mesh: &MeshBuffer,
) {
    render_pass.set_pipeline(&pipeline.pipeline);
    render_pass.set_bind_group(0, frame_bind_group, &[]);
    render_pass.set_bind_group(1, model_bind_group, &[]);
    render_pass.set_bind_group(2, lights_bind_group, &[]);
    render_pass.set_bind_group(3, material_bind_group, &[]);
    mesh.draw(render_pass);
}
