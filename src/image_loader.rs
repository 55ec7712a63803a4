//! Loading image files into immutable records.
//!
//! A record carries the whole file as a base64 data URL so every view can
//! render it without touching the filesystem again.

use crate::config::FALLBACK_MIME_EXTENSION;
use crate::error::{AppError, Result};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use log::debug;
use slint::{Rgba8Pixel, SharedPixelBuffer};
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// File content embedded as `data:<mime>;base64,<bytes>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlinePayload {
    mime_type: String,
    data_url: String,
}

impl InlinePayload {
    pub fn encode(mime_type: String, bytes: &[u8]) -> Self {
        let data_url = format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes));
        Self {
            mime_type,
            data_url,
        }
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Recovers the original file bytes.
    pub fn decode_bytes(&self) -> Result<Vec<u8>> {
        let encoded = self
            .data_url
            .split_once(',')
            .map(|(_, data)| data)
            .ok_or_else(|| AppError::Decode("Malformed data URL".to_string()))?;
        Ok(STANDARD.decode(encoded)?)
    }
}

/// Immutable description of one loaded image.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageRecord {
    pub path: PathBuf,
    pub name: String,
    pub size_bytes: u64,
    /// 0 when the bytes could not be measured.
    pub width: u32,
    pub height: u32,
    pub payload: InlinePayload,
}

impl ImageRecord {
    /// Size in kilobytes with one decimal, e.g. `12.3 KB`.
    pub fn formatted_size(&self) -> String {
        format!("{:.1} KB", self.size_bytes as f64 / 1024.0)
    }
}

/// Declared mime type for the payload, derived from the lower-cased suffix.
fn mime_type_for(path: &Path) -> String {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty())
        .map(|ext| ext.to_lowercase())
        .unwrap_or_else(|| FALLBACK_MIME_EXTENSION.to_string());
    format!("image/{}", ext)
}

/// Reads pixel dimensions from the image header, guessing the format from content.
fn probe_dimensions(bytes: &[u8]) -> Result<(u32, u32)> {
    let reader = image::ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| AppError::Decode(e.to_string()))?;
    Ok(reader.into_dimensions()?)
}

/// Reads the whole file at `path` and builds its record.
///
/// Unreadable dimensions degrade to `0x0` instead of failing the load.
pub fn load_image(path: &Path) -> Result<ImageRecord> {
    let metadata =
        fs::metadata(path).map_err(|e| AppError::from_file_io(path.to_path_buf(), e))?;
    if !metadata.is_file() {
        return Err(AppError::Read {
            path: path.to_path_buf(),
            message: "not a regular file".to_string(),
        });
    }

    let bytes = fs::read(path).map_err(|e| AppError::from_file_io(path.to_path_buf(), e))?;

    let (width, height) = probe_dimensions(&bytes).unwrap_or_else(|e| {
        debug!("No dimensions for {:?}: {}", path, e);
        (0, 0)
    });

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(ImageRecord {
        path: path.to_path_buf(),
        name,
        size_bytes: bytes.len() as u64,
        width,
        height,
        payload: InlinePayload::encode(mime_type_for(path), &bytes),
    })
}

/// Decodes a payload into an RGBA buffer that can cross to the UI thread.
pub fn decode_pixels(payload: &InlinePayload) -> Result<SharedPixelBuffer<Rgba8Pixel>> {
    let bytes = payload.decode_bytes()?;
    let image = image::load_from_memory(&bytes)?.to_rgba8();
    Ok(SharedPixelBuffer::<Rgba8Pixel>::clone_from_slice(
        image.as_raw(),
        image.width(),
        image.height(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
        let path = dir.join(name);
        image::RgbImage::new(width, height)
            .save_with_format(&path, image::ImageFormat::Png)
            .expect("failed to write png fixture");
        path
    }

    #[test]
    fn valid_png_reports_dimensions_and_exact_size() {
        let dir = tempdir().unwrap();
        let path = write_png(dir.path(), "wide.png", 100, 50);

        let record = load_image(&path).unwrap();

        assert_eq!(record.width, 100);
        assert_eq!(record.height, 50);
        assert_eq!(record.size_bytes, fs::metadata(&path).unwrap().len());
        assert_eq!(record.name, "wide.png");
        assert_eq!(record.path, path);
        assert_eq!(record.payload.mime_type(), "image/png");
        assert_eq!(record.payload.decode_bytes().unwrap(), fs::read(&path).unwrap());
    }

    #[test]
    fn corrupt_bytes_degrade_to_zero_dimensions() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.png");
        let mut bytes = b"\x89PNG\r\n\x1a\n".to_vec();
        bytes.extend_from_slice(b"definitely not chunks");
        fs::write(&path, &bytes).unwrap();

        let record = load_image(&path).unwrap();

        assert_eq!((record.width, record.height), (0, 0));
        assert_eq!(record.size_bytes, bytes.len() as u64);
        assert_eq!(record.payload.decode_bytes().unwrap(), bytes);
    }

    #[test]
    fn extension_drives_declared_mime_type() {
        let dir = tempdir().unwrap();
        let jpg = dir.path().join("Photo.JPG");
        let bare = dir.path().join("README");
        fs::write(&jpg, b"x").unwrap();
        fs::write(&bare, b"y").unwrap();

        assert_eq!(load_image(&jpg).unwrap().payload.mime_type(), "image/jpg");
        assert_eq!(load_image(&bare).unwrap().payload.mime_type(), "image/png");
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let result = load_image(&dir.path().join("nope.png"));
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[test]
    fn directory_is_a_read_error() {
        let dir = tempdir().unwrap();
        let result = load_image(dir.path());
        assert!(matches!(result, Err(AppError::Read { .. })));
    }

    #[test]
    fn reload_after_change_yields_new_record() {
        let dir = tempdir().unwrap();
        let path = write_png(dir.path(), "swap.png", 4, 4);
        let first = load_image(&path).unwrap();

        write_png(dir.path(), "swap.png", 8, 2);
        let second = load_image(&path).unwrap();

        assert_ne!(first, second);
        assert_eq!((second.width, second.height), (8, 2));
    }

    #[test]
    fn payload_decodes_into_pixels() {
        let dir = tempdir().unwrap();
        let path = write_png(dir.path(), "tiny.png", 3, 2);
        let record = load_image(&path).unwrap();

        let buffer = decode_pixels(&record.payload).unwrap();

        assert_eq!((buffer.width(), buffer.height()), (3, 2));
    }

    #[test]
    fn formatted_size_uses_kilobytes() {
        let record = ImageRecord {
            path: PathBuf::from("/a.png"),
            name: "a.png".to_string(),
            size_bytes: 1536,
            width: 0,
            height: 0,
            payload: InlinePayload::encode("image/png".to_string(), b""),
        };
        assert_eq!(record.formatted_size(), "1.5 KB");
    }
}
