//! I/O helpers for frames, edge maps and JSON.
//!
//! - `load_nv21_from_image`: read a PNG/JPEG/etc. and encode it as NV21.
//! - `load_nv21_raw`: read a raw NV21 dump of known geometry.
//! - `save_rgba_png`: write an `RgbaImage` edge map to a PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::RgbaImage;
use crate::error::FrameError;
use crate::nv21::{checked_nv21_len, rgb_to_nv21, Nv21Frame};
use image::{DynamicImage, ImageBuffer, Rgba};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Owned NV21 buffer with borrowed frame conversion.
#[derive(Clone, Debug)]
pub struct Nv21Buffer {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl Nv21Buffer {
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            data,
        }
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Borrow as a validated `Nv21Frame`
    pub fn as_frame(&self) -> Result<Nv21Frame<'_>, FrameError> {
        Nv21Frame::new(&self.data, self.width, self.height)
    }
}

/// Load an image from disk and encode it as NV21.
pub fn load_nv21_from_image(path: &Path) -> Result<Nv21Buffer, String> {
    let rgb = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgb8();
    let width = rgb.width() as usize;
    let height = rgb.height() as usize;
    Ok(Nv21Buffer::new(width, height, rgb_to_nv21(&rgb)))
}

/// Read a raw NV21 dump. The file must hold at least the Y plane; a missing
/// or partial chroma plane is tolerated since the edge filter never reads it.
pub fn load_nv21_raw(path: &Path, width: usize, height: usize) -> Result<Nv21Buffer, String> {
    let data = fs::read(path).map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    let buffer = Nv21Buffer::new(width, height, data);
    buffer
        .as_frame()
        .map_err(|e| format!("{}: {e}", path.display()))?;
    if checked_nv21_len(width, height).is_some_and(|len| buffer.data.len() < len) {
        log::debug!(
            "{} holds {} bytes, chroma plane incomplete",
            path.display(),
            buffer.data.len()
        );
    }
    Ok(buffer)
}

/// Save an RGBA edge map to a PNG.
pub fn save_rgba_png(image: &RgbaImage, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let raw = image.clone().into_raw();
    let buffer: ImageBuffer<Rgba<u8>, Vec<u8>> =
        ImageBuffer::from_raw(image.w as u32, image.h as u32, raw)
            .ok_or_else(|| "Failed to create image buffer".to_string())?;
    DynamicImage::ImageRgba8(buffer)
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
