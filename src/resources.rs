//! Startup resource loading.
//!
//! The tray icon image and the emoji font are read once at startup. Any
//! failure here is fatal to the binary that needs the resource.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tray_icon::Icon;

/// Resource loading error types.
#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("Resource not found: {0}")]
    Missing(PathBuf),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode image {path}: {message}")]
    Image { path: PathBuf, message: String },

    #[error("Invalid tray icon: {0}")]
    Icon(String),
}

/// Decoded RGBA8 image.
#[derive(Debug, Clone)]
pub struct RgbaImage {
    pub rgba: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

fn read_file(path: &Path) -> Result<Vec<u8>, ResourceError> {
    std::fs::read(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            ResourceError::Missing(path.to_path_buf())
        } else {
            ResourceError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}

/// Decode an encoded image into RGBA8 pixels.
pub fn decode_rgba(path: &Path, bytes: &[u8]) -> Result<RgbaImage, ResourceError> {
    let image = image::load_from_memory(bytes).map_err(|e| ResourceError::Image {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let rgba = image.into_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(RgbaImage {
        rgba: rgba.into_raw(),
        width,
        height,
    })
}

/// Load the tray icon image.
pub fn load_tray_icon(path: &Path) -> Result<Icon, ResourceError> {
    let bytes = read_file(path)?;
    let image = decode_rgba(path, &bytes)?;
    tracing::debug!(width = image.width, height = image.height, "Loaded tray icon");

    Icon::from_rgba(image.rgba, image.width, image.height)
        .map_err(|e| ResourceError::Icon(e.to_string()))
}

/// Load a font file's bytes.
pub fn load_font(path: &Path) -> Result<Vec<u8>, ResourceError> {
    let bytes = read_file(path)?;
    tracing::debug!(path = %path.display(), size = bytes.len(), "Loaded font");
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let image = image::RgbaImage::from_pixel(width, height, image::Rgba([10, 20, 30, 255]));
        let mut out = Cursor::new(Vec::new());
        image.write_to(&mut out, image::ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn test_decode_png() {
        let decoded = decode_rgba(Path::new("icon.png"), &png_bytes(4, 2)).unwrap();
        assert_eq!((decoded.width, decoded.height), (4, 2));
        assert_eq!(decoded.rgba.len(), 4 * 2 * 4);
        assert_eq!(&decoded.rgba[..4], &[10, 20, 30, 255]);
    }

    #[test]
    fn test_decode_garbage_fails() {
        let err = decode_rgba(Path::new("icon.png"), b"not an image").unwrap_err();
        assert!(matches!(err, ResourceError::Image { .. }));
    }

    #[test]
    fn test_missing_font_is_reported() {
        let path = Path::new("pigment-moji-missing-font.ttf");
        let err = load_font(path).unwrap_err();
        assert!(matches!(err, ResourceError::Missing(ref p) if p == path));
    }
}
