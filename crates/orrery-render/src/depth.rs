//! Depth buffer management.
//!
//! Standard-Z depth mapping: the buffer clears to 1.0 (far plane), opaque
//! bodies test with `Less`, and the skybox — drawn last at exactly far-plane
//! depth — tests with `LessEqual`. The relaxed comparison lives only in the
//! skybox pipeline, so every other draw in this frame and the next sees
//! `Less`.

/// Depth buffer for the scene pass.
pub struct DepthBuffer {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub format: wgpu::TextureFormat,
    width: u32,
    height: u32,
}

impl DepthBuffer {
    /// 32-bit float depth format.
    pub const FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

    /// Clear value: 1.0 represents the far plane.
    pub const CLEAR_VALUE: f32 = 1.0;

    /// Depth comparison for opaque bodies: closer fragments win.
    pub const COMPARE_FUNCTION: wgpu::CompareFunction = wgpu::CompareFunction::Less;

    /// Depth comparison for the skybox: passes at exactly far-plane depth.
    pub const SKYBOX_COMPARE_FUNCTION: wgpu::CompareFunction = wgpu::CompareFunction::LessEqual;

    /// Create a new depth buffer with the specified dimensions.
    pub fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("depth-buffer"),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: Self::FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        Self {
            texture,
            view,
            format: Self::FORMAT,
            width,
            height,
        }
    }

    /// Resize the depth buffer to new dimensions.
    /// No-op if dimensions are unchanged to avoid needless GPU allocation.
    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        if self.width == width && self.height == height {
            return;
        }
        *self = Self::new(device, width, height);
    }

    /// Current width of the depth buffer.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Current height of the depth buffer.
    pub fn height(&self) -> u32 {
        self.height
    }
}
