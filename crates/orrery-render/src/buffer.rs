//! Vertex formats and GPU mesh buffers.

use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use orrery_assets::MeshData;
use orrery_scene::SKYBOX_VERTICES;

/// Vertex with position, normal, and texture coordinates. Used by all bodies.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct VertexPositionNormalUv {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl VertexPositionNormalUv {
    const ATTRIBUTES: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
        0 => Float32x3,
        1 => Float32x3,
        2 => Float32x2,
    ];

    /// Vertex buffer layout for pipeline creation.
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Position-only vertex. Used by the skybox cube.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct VertexPosition {
    pub position: [f32; 3],
}

impl VertexPosition {
    const ATTRIBUTES: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

    /// Vertex buffer layout for pipeline creation.
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// An uploaded indexed mesh.
pub struct MeshBuffer {
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub index_count: u32,
}

impl MeshBuffer {
    /// Interleaves and uploads mesh data. Returns `None` for an empty mesh —
    /// the caller then skips the draw, which is the soft-failure path for a
    /// model that failed to load.
    pub fn from_mesh_data(device: &wgpu::Device, label: &str, mesh: &MeshData) -> Option<Self> {
        if mesh.is_empty() {
            log::warn!("Mesh {label} is empty; body will not be drawn");
            return None;
        }

        let vertices: Vec<VertexPositionNormalUv> = mesh
            .positions
            .iter()
            .zip(mesh.normals.iter())
            .zip(mesh.uvs.iter())
            .map(|((p, n), uv)| VertexPositionNormalUv {
                position: p.to_array(),
                normal: n.to_array(),
                uv: uv.to_array(),
            })
            .collect();

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label}-vertices")),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label}-indices")),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        Some(Self {
            vertex_buffer,
            index_buffer,
            index_count: mesh.indices.len() as u32,
        })
    }

    /// Binds buffers and issues the indexed draw.
    pub fn draw(&self, render_pass: &mut wgpu::RenderPass<'_>) {
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        render_pass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}

/// Uploads the 36-vertex skybox cube, non-indexed.
pub fn skybox_vertex_buffer(device: &wgpu::Device) -> wgpu::Buffer {
    let vertices: Vec<VertexPosition> = SKYBOX_VERTICES
        .iter()
        .map(|p| VertexPosition { position: *p })
        .collect();
    device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("skybox-vertices"),
        contents: bytemuck::cast_slice(&vertices),
        usage: wgpu::BufferUsages::VERTEX,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_stride_matches_attributes() {
        // 3 + 3 + 2 floats, tightly packed.
        assert_eq!(std::mem::size_of::<VertexPositionNormalUv>(), 32);
        assert_eq!(
            VertexPositionNormalUv::layout().array_stride,
            32 as wgpu::BufferAddress
        );
        assert_eq!(std::mem::size_of::<VertexPosition>(), 12);
    }

    #[test]
    fn test_attribute_offsets() {
        let attrs = VertexPositionNormalUv::ATTRIBUTES;
        assert_eq!(attrs[0].offset, 0);
        assert_eq!(attrs[1].offset, 12);
        assert_eq!(attrs[2].offset, 24);
        assert_eq!(attrs[0].shader_location, 0);
        assert_eq!(attrs[2].shader_location, 2);
    }

    #[test]
    fn test_skybox_vertex_data_is_position_only() {
        assert_eq!(SKYBOX_VERTICES.len(), 36);
        let first = VertexPosition {
            position: SKYBOX_VERTICES[0],
        };
        assert_eq!(first.position, [-1.0, 1.0, -1.0]);
    }
}
