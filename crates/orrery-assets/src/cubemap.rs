//! Six-face cubemap loading with per-face failure isolation.

use std::path::Path;

use crate::texture::{TextureData, load_image};

/// A cubemap always has six faces: +X, −X, +Y, −Y, +Z, −Z.
pub const CUBEMAP_FACE_COUNT: usize = 6;

/// Decoded cubemap, all faces square RGBA8 of the same edge length.
#[derive(Debug, Clone)]
pub struct CubemapData {
    /// Edge length of every face in texels.
    pub face_size: u32,
    /// Face pixel data in +X, −X, +Y, −Y, +Z, −Z order.
    pub faces: [Vec<u8>; CUBEMAP_FACE_COUNT],
}

impl CubemapData {
    /// Black face of the given edge length.
    fn placeholder_face(face_size: u32) -> Vec<u8> {
        let mut face = vec![0u8; (face_size * face_size * 4) as usize];
        for px in face.chunks_exact_mut(4) {
            px[3] = 255;
        }
        face
    }
}

/// Loads six cubemap faces from `dir`, in +X, −X, +Y, −Y, +Z, −Z order.
///
/// Face failures are independent: a face that fails to decode (or whose
/// dimensions disagree with the established face size) is replaced by a black
/// face while the remaining faces still populate. The face size is taken from
/// the first face that decodes; if none do, a 1-texel black cubemap results.
pub fn load_cubemap(dir: &Path, face_names: &[&str; CUBEMAP_FACE_COUNT]) -> CubemapData {
    let decoded: Vec<TextureData> = face_names
        .iter()
        .map(|name| load_image(&dir.join(name)))
        .collect();

    let face_size = decoded
        .iter()
        .find(|d| !d.is_placeholder())
        .map(|d| d.width)
        .unwrap_or(1);

    let mut faces: [Vec<u8>; CUBEMAP_FACE_COUNT] = Default::default();
    let mut populated = 0usize;
    for (i, data) in decoded.into_iter().enumerate() {
        let usable = !data.is_placeholder() && data.width == face_size && data.height == face_size;
        if usable {
            faces[i] = data.pixels;
            populated += 1;
        } else {
            if !data.is_placeholder() {
                log::warn!(
                    "Cubemap face {} is {}x{}, expected {}x{}; using placeholder",
                    face_names[i],
                    data.width,
                    data.height,
                    face_size,
                    face_size
                );
            }
            faces[i] = CubemapData::placeholder_face(face_size);
        }
    }

    log::info!(
        "Loaded cubemap from {}: {}x{} per face, {}/{} faces populated",
        dir.display(),
        face_size,
        face_size,
        populated,
        CUBEMAP_FACE_COUNT
    );

    CubemapData { face_size, faces }
}
