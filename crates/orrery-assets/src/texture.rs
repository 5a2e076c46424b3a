//! 2D texture decoding with channel-driven wrap policy.

use std::path::Path;

use crate::AssetError;

/// Wrap mode recorded at decode time and applied at sampler creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapMode {
    /// Clamp to edge. Used for alpha-bearing images so transparent borders
    /// don't bleed across tile seams.
    ClampToEdge,
    /// Repeat. Used for everything else.
    Repeat,
}

/// Decoded image ready for GPU upload, always expanded to RGBA8.
#[derive(Debug, Clone)]
pub struct TextureData {
    /// Tightly packed RGBA8 pixels, row-major.
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
    /// Wrap policy derived from the source channel count.
    pub wrap: WrapMode,
    /// Debug label, usually the file stem.
    pub label: String,
}

impl TextureData {
    /// 1×1 opaque black stand-in for a texture that failed to decode.
    pub fn placeholder(label: &str) -> Self {
        Self {
            pixels: vec![0, 0, 0, 255],
            width: 1,
            height: 1,
            wrap: WrapMode::Repeat,
            label: label.to_string(),
        }
    }

    /// Whether this is decoded image data rather than the placeholder.
    pub fn is_placeholder(&self) -> bool {
        self.width == 1 && self.height == 1
    }
}

/// Decodes a single image file. On failure, logs a diagnostic and returns a
/// 1×1 placeholder — callers tolerate an unpopulated texture rather than
/// aborting startup.
pub fn load_image(path: &Path) -> TextureData {
    let label = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "texture".to_string());

    match decode_image(path, &label) {
        Ok(data) => {
            log::info!(
                "Loaded texture {}: {}x{} ({:?})",
                path.display(),
                data.width,
                data.height,
                data.wrap
            );
            data
        }
        Err(err) => {
            log::error!("{err}");
            TextureData::placeholder(&label)
        }
    }
}

fn decode_image(path: &Path, label: &str) -> Result<TextureData, AssetError> {
    let bytes = std::fs::read(path).map_err(|source| AssetError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let decoded = image::load_from_memory(&bytes).map_err(|source| AssetError::ImageDecode {
        path: path.display().to_string(),
        source,
    })?;

    // Alpha-bearing sources clamp; one- and three-channel sources repeat.
    let wrap = match decoded.color().channel_count() {
        4 => WrapMode::ClampToEdge,
        _ => WrapMode::Repeat,
    };

    let rgba = decoded.to_rgba8();
    Ok(TextureData {
        width: rgba.width(),
        height: rgba.height(),
        pixels: rgba.into_raw(),
        wrap,
        label: label.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_png(path: &Path, width: u32, height: u32, rgba: [u8; 4]) {
        let img = image::RgbaImage::from_pixel(width, height, image::Rgba(rgba));
        img.save(path).unwrap();
    }

    #[test]
    fn test_missing_file_yields_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let data = load_image(&dir.path().join("missing.png"));
        assert!(data.is_placeholder());
        assert_eq!(data.pixels, vec![0, 0, 0, 255]);
    }

    #[test]
    fn test_corrupt_file_yields_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.png");
        std::fs::write(&path, b"definitely not a png").unwrap();
        let data = load_image(&path);
        assert!(data.is_placeholder());
    }

    #[test]
    fn test_rgba_png_decodes_with_clamp_wrap() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sprite.png");
        write_png(&path, 4, 2, [10, 20, 30, 128]);

        let data = load_image(&path);
        assert_eq!((data.width, data.height), (4, 2));
        assert_eq!(data.wrap, WrapMode::ClampToEdge);
        assert_eq!(data.pixels.len(), 4 * 2 * 4);
        assert_eq!(&data.pixels[..4], &[10, 20, 30, 128]);
        assert_eq!(data.label, "sprite");
    }

    #[test]
    fn test_rgb_png_decodes_with_repeat_wrap() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("surface.png");
        let img = image::RgbImage::from_pixel(2, 2, image::Rgb([200, 100, 50]));
        img.save(&path).unwrap();

        let data = load_image(&path);
        assert_eq!(data.wrap, WrapMode::Repeat);
        // RGB expands to RGBA with opaque alpha.
        assert_eq!(&data.pixels[..4], &[200, 100, 50, 255]);
    }

    #[test]
    fn test_grayscale_png_decodes_with_repeat_wrap() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("height.png");
        let img = image::GrayImage::from_pixel(2, 2, image::Luma([77]));
        img.save(&path).unwrap();

        let data = load_image(&path);
        assert_eq!(data.wrap, WrapMode::Repeat);
        assert_eq!(&data.pixels[..4], &[77, 77, 77, 255]);
    }
}
