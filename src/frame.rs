//! Host-facing entry point: NV21 bytes in, RGBA edge-map bytes out.
//!
//! Dimensions arrive as signed 32-bit integers, as a JVM host passes them.
//! Every precondition is checked up front and reported as a [`FrameError`];
//! nothing is read outside the supplied buffer.
use crate::edges::edge_map_rgba;
use crate::error::FrameError;
use crate::image::RgbaImage;
use crate::nv21::Nv21Frame;
use log::debug;

/// Convert an NV21 frame to an interleaved RGBA edge map.
///
/// Only the leading `width * height` bytes (the Y plane) are read. The result
/// is exactly `width * height * 4` bytes.
pub fn process_frame_nv21(nv21: &[u8], width: i32, height: i32) -> Result<Vec<u8>, FrameError> {
    let frame = validate(nv21, width, height).inspect_err(|err| {
        debug!("process_frame_nv21 rejected input: {err}");
    })?;
    let map = edge_map_nv21(&frame)?;
    debug!(
        "process_frame_nv21 {}x{} -> {} RGBA bytes",
        frame.width(),
        frame.height(),
        map.byte_len()
    );
    Ok(map.into_raw())
}

/// Typed variant of [`process_frame_nv21`] for callers that already hold a
/// validated frame.
pub fn edge_map_nv21(frame: &Nv21Frame<'_>) -> Result<RgbaImage, FrameError> {
    edge_map_rgba(&frame.luma())
}

fn validate(nv21: &[u8], width: i32, height: i32) -> Result<Nv21Frame<'_>, FrameError> {
    let invalid = FrameError::InvalidDimensions {
        width: i64::from(width),
        height: i64::from(height),
        buffer_len: nv21.len(),
    };
    let w = usize::try_from(width).map_err(|_| invalid)?;
    let h = usize::try_from(height).map_err(|_| invalid)?;
    Nv21Frame::new(nv21, w, h)
}
