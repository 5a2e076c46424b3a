//! Asset loading: images, cubemap faces, and OBJ meshes from the resource
//! tree into CPU-side data ready for GPU upload.
//!
//! Every loader here follows the same soft-failure policy: a missing or
//! corrupt file is logged and replaced by placeholder data (black pixels, an
//! empty mesh) so startup always completes. Nothing downstream needs a
//! failure path.

mod cubemap;
mod mesh;
mod texture;

pub use cubemap::{CUBEMAP_FACE_COUNT, CubemapData, load_cubemap};
pub use mesh::{MeshData, load_obj_mesh};
pub use texture::{TextureData, WrapMode, load_image};

/// Errors surfaced by the fallible inner decode steps. Public loaders catch
/// these, log them, and fall back to placeholder data.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    /// Failed to read the asset file from disk.
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to decode an image.
    #[error("failed to decode image {path}: {source}")]
    ImageDecode {
        path: String,
        #[source]
        source: image::ImageError,
    },

    /// Failed to parse an OBJ file.
    #[error("failed to parse OBJ {path}: {source}")]
    ObjParse {
        path: String,
        #[source]
        source: tobj::LoadError,
    },
}
