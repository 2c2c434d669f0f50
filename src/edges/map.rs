use super::grad::l1_magnitude;
use crate::error::FrameError;
use crate::image::{ImageView, ImageViewMut, RgbaImage};
use serde::Serialize;

/// Render the gradient magnitude of `luma` as an opaque grayscale RGBA image.
///
/// Interior pixels become `[mag, mag, mag, 255]`. The one-pixel border is
/// never written and stays `[0, 0, 0, 0]`, so images narrower or shorter than
/// three pixels come back fully transparent.
pub fn edge_map_rgba<I>(luma: &I) -> Result<RgbaImage, FrameError>
where
    I: ImageView<Pixel = u8>,
{
    let w = luma.width();
    let h = luma.height();
    let mut out = RgbaImage::try_zeroed(w, h)?;

    for y in 1..h.saturating_sub(1) {
        let above = luma.row(y - 1);
        let row = luma.row(y);
        let below = luma.row(y + 1);
        let dst = out.row_mut(y);
        for x in 1..w.saturating_sub(1) {
            let mag = l1_magnitude(row[x - 1], row[x + 1], above[x], below[x]);
            dst[x] = [mag, mag, mag, 255];
        }
    }

    Ok(out)
}

/// Aggregate statistics over the interior of an edge map.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeSummary {
    pub width: usize,
    pub height: usize,
    pub interior_pixels: usize,
    pub max_magnitude: u8,
    pub mean_magnitude: f32,
    /// Pixels whose magnitude hit the 255 ceiling.
    pub saturated_pixels: usize,
}

impl EdgeSummary {
    pub fn from_edge_map(map: &RgbaImage) -> Self {
        let mut summary = EdgeSummary {
            width: map.w,
            height: map.h,
            ..Default::default()
        };
        let mut total = 0u64;
        let interior_rows = map.h.saturating_sub(2);
        for row in map.rows().skip(1).take(interior_rows) {
            let interior = row.get(1..row.len().saturating_sub(1)).unwrap_or(&[]);
            for px in interior {
                let mag = px[0];
                summary.interior_pixels += 1;
                summary.max_magnitude = summary.max_magnitude.max(mag);
                if mag == u8::MAX {
                    summary.saturated_pixels += 1;
                }
                total += u64::from(mag);
            }
        }
        if summary.interior_pixels > 0 {
            summary.mean_magnitude = (total as f64 / summary.interior_pixels as f64) as f32;
        }
        summary
    }
}
