//! The scene renderer: owns every GPU resource for the three bodies and the
//! skybox, and records the per-frame scene pass.
//!
//! Draw order within the pass is fixed: opaque bodies first (Earth, Moon,
//! Sun), then the skybox with its relaxed depth comparison. All transform
//! math is recomputed from scratch each frame from the elapsed time.

use std::path::Path;

use wgpu::util::DeviceExt;

use orrery_assets::{load_cubemap, load_image, load_obj_mesh};
use orrery_config::ProgramState;
use orrery_render::{
    BodyPipeline, CubemapTexture, DepthBuffer, FrameUniform, LightsUniform, MeshBuffer,
    ModelUniform, RenderContext, SkyboxPipeline, SkyboxUniform, SunPipeline, Texture2d,
    create_cubemap_bind_group_layout, create_material_bind_group_layout, draw_body, draw_skybox,
    draw_sun, skybox_vertex_buffer,
};
use orrery_scene::{SceneBody, ShadingMode, scene_bodies, strip_translation};

/// Skybox face files under `textures/skybox/`, in +X, −X, +Y, −Y, +Z, −Z
/// order.
const SKYBOX_FACES: [&str; 6] = [
    "right.png",
    "left.png",
    "top.png",
    "bottom.png",
    "front.png",
    "back.png",
];

/// GPU resources for one body.
struct BodyResources {
    body: SceneBody,
    /// `None` when the model failed to load; the body is skipped at draw.
    mesh: Option<MeshBuffer>,
    model_buffer: wgpu::Buffer,
    model_bind_group: wgpu::BindGroup,
    material: Texture2d,
}

/// Owns pipelines, meshes, textures, and uniform buffers for the scene pass.
pub struct SceneRenderer {
    body_pipeline: BodyPipeline,
    sun_pipeline: SunPipeline,
    skybox_pipeline: SkyboxPipeline,
    depth_buffer: DepthBuffer,
    frame_buffer: wgpu::Buffer,
    frame_bind_group_body: wgpu::BindGroup,
    frame_bind_group_sun: wgpu::BindGroup,
    lights_buffer: wgpu::Buffer,
    lights_bind_group: wgpu::BindGroup,
    skybox_uniform_buffer: wgpu::Buffer,
    skybox_uniform_bind_group: wgpu::BindGroup,
    skybox_vertices: wgpu::Buffer,
    cubemap: CubemapTexture,
    bodies: Vec<BodyResources>,
}

impl SceneRenderer {
    /// Loads all assets from `resources_dir` and builds every GPU resource.
    /// Asset failures degrade to placeholders; this constructor itself cannot
    /// fail once a device exists.
    pub fn new(gpu: &RenderContext, resources_dir: &Path) -> Self {
        let device = &gpu.device;

        let material_layout = create_material_bind_group_layout(device);
        let cubemap_layout = create_cubemap_bind_group_layout(device);

        let body_pipeline = BodyPipeline::new(device, gpu.surface_format, &material_layout);
        let sun_pipeline = SunPipeline::new(device, gpu.surface_format, &material_layout);
        let skybox_pipeline = SkyboxPipeline::new(device, gpu.surface_format, &cubemap_layout);

        let depth_buffer = DepthBuffer::new(
            device,
            gpu.surface_config.width,
            gpu.surface_config.height,
        );

        // Shared per-frame uniforms. Each pipeline declares its own layout
        // object, so each needs its own bind group over the same buffer.
        let frame_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("frame-uniform"),
            contents: bytemuck::cast_slice(&[FrameUniform::new(
                glam::Mat4::IDENTITY,
                glam::Mat4::IDENTITY,
                glam::Vec3::ZERO,
            )]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let frame_bind_group_body = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("frame-bind-group-body"),
            layout: &body_pipeline.frame_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: frame_buffer.as_entire_binding(),
            }],
        });
        let frame_bind_group_sun = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("frame-bind-group-sun"),
            layout: &sun_pipeline.frame_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: frame_buffer.as_entire_binding(),
            }],
        });

        let lights_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("lights-uniform"),
            contents: bytemuck::cast_slice(&[LightsUniform::new(
                &orrery_config::PointLightParams::default(),
            )]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let lights_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("lights-bind-group"),
            layout: &body_pipeline.lights_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: lights_buffer.as_entire_binding(),
            }],
        });

        let skybox_uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("skybox-uniform"),
            contents: bytemuck::cast_slice(&[SkyboxUniform::new(
                glam::Mat4::IDENTITY,
                glam::Mat4::IDENTITY,
            )]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let skybox_uniform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("skybox-uniform-bind-group"),
            layout: &skybox_pipeline.uniform_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: skybox_uniform_buffer.as_entire_binding(),
            }],
        });
        let skybox_vertices = skybox_vertex_buffer(device);

        let cubemap_data = load_cubemap(&resources_dir.join("textures/skybox"), &SKYBOX_FACES);
        let cubemap = CubemapTexture::new(device, &gpu.queue, &cubemap_data, &cubemap_layout);

        let bodies = scene_bodies()
            .into_iter()
            .map(|body| {
                let body_dir = resources_dir.join("objects").join(body.name);
                let mesh_data = load_obj_mesh(&body_dir.join(format!("{}.obj", body.name)));
                let mesh = MeshBuffer::from_mesh_data(device, body.name, &mesh_data);

                let texture_data = load_image(&body_dir.join(format!("{}_diff.jpg", body.name)));
                let material = Texture2d::new(device, &gpu.queue, &texture_data, &material_layout);

                let model_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some(&format!("{}-model-uniform", body.name)),
                    contents: bytemuck::cast_slice(&[ModelUniform::new(glam::Mat4::IDENTITY)]),
                    usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                });
                let model_layout = match body.shading {
                    ShadingMode::Lit => &body_pipeline.model_bind_group_layout,
                    ShadingMode::Textured => &sun_pipeline.model_bind_group_layout,
                };
                let model_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
                    label: Some(&format!("{}-model-bind-group", body.name)),
                    layout: model_layout,
                    entries: &[wgpu::BindGroupEntry {
                        binding: 0,
                        resource: model_buffer.as_entire_binding(),
                    }],
                });

                BodyResources {
                    body,
                    mesh,
                    model_buffer,
                    model_bind_group,
                    material,
                }
            })
            .collect();

        Self {
            body_pipeline,
            sun_pipeline,
            skybox_pipeline,
            depth_buffer,
            frame_buffer,
            frame_bind_group_body,
            frame_bind_group_sun,
            lights_buffer,
            lights_bind_group,
            skybox_uniform_buffer,
            skybox_uniform_bind_group,
            skybox_vertices,
            cubemap,
            bodies,
        }
    }

    /// Resizes the depth buffer to match the surface.
    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        self.depth_buffer.resize(device, width, height);
    }

    /// Uploads this frame's uniforms and records the scene pass: clear,
    /// bodies in order, skybox last.
    pub fn render(
        &self,
        gpu: &RenderContext,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        state: &ProgramState,
        t: f32,
    ) {
        let width = gpu.surface_config.width;
        let height = gpu.surface_config.height.max(1);
        let aspect = width as f32 / height as f32;

        let projection = state.camera.projection_matrix(aspect);
        let view_matrix = state.camera.view_matrix();

        gpu.queue.write_buffer(
            &self.frame_buffer,
            0,
            bytemuck::cast_slice(&[FrameUniform::new(
                projection,
                view_matrix,
                state.camera.position,
            )]),
        );
        gpu.queue.write_buffer(
            &self.lights_buffer,
            0,
            bytemuck::cast_slice(&[LightsUniform::new(&state.point_light)]),
        );
        gpu.queue.write_buffer(
            &self.skybox_uniform_buffer,
            0,
            bytemuck::cast_slice(&[SkyboxUniform::new(
                projection,
                strip_translation(view_matrix),
            )]),
        );
        for body in &self.bodies {
            gpu.queue.write_buffer(
                &body.model_buffer,
                0,
                bytemuck::cast_slice(&[ModelUniform::new(body.body.law.model_matrix(t))]),
            );
        }

        let clear = state.clear_color;
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("scene-pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color {
                        r: clear.x as f64,
                        g: clear.y as f64,
                        b: clear.z as f64,
                        a: 1.0,
                    }),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: &self.depth_buffer.view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(DepthBuffer::CLEAR_VALUE),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            occlusion_query_set: None,
            timestamp_writes: None,
        });

        for body in &self.bodies {
            let Some(mesh) = &body.mesh else { continue };
            match body.body.shading {
                ShadingMode::Lit => draw_body(
                    &mut pass,
                    &self.body_pipeline,
                    &self.frame_bind_group_body,
                    &body.model_bind_group,
                    &self.lights_bind_group,
                    &body.material.bind_group,
                    mesh,
                ),
                ShadingMode::Textured => draw_sun(
                    &mut pass,
                    &self.sun_pipeline,
                    &self.frame_bind_group_sun,
                    &body.model_bind_group,
                    &body.material.bind_group,
                    mesh,
                ),
            }
        }

        draw_skybox(
            &mut pass,
            &self.skybox_pipeline,
            &self.skybox_uniform_bind_group,
            &self.cubemap.bind_group,
            &self.skybox_vertices,
        );
    }
}
