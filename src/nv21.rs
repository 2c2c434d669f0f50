//! NV21 frame layout: a full-resolution Y plane followed by interleaved
//! `V, U` pairs, one pair per 2×2 block of luma.
//!
//! - [`Nv21Frame`]: validated borrowed view splitting the two planes.
//! - [`pack_yuv420_to_nv21`]: repack a strided three-plane YUV_420_888
//!   capture into a tight NV21 buffer.
//! - [`rgb_to_nv21`]: encode an RGB still (BT.601 full range) for offline use.
//!
//! Chroma geometry uses integer division (`w / 2` by `h / 2` pairs), so the
//! last column/row of odd-sized frames has no chroma of its own. Buffers are
//! still sized `w * h * 3 / 2` as the capture side allocates them; the bytes
//! past the last pair are zero.
use crate::error::FrameError;
use crate::image::ImageU8;
use image::RgbImage;

/// Bytes in an NV21 buffer for `width × height`, or `None` on overflow.
pub fn checked_nv21_len(width: usize, height: usize) -> Option<usize> {
    let luma = width.checked_mul(height)?;
    luma.checked_add(luma / 2)
}

/// Bytes of interleaved `V, U` samples, one pair per full 2×2 block.
fn vu_len(width: usize, height: usize) -> Option<usize> {
    (width / 2).checked_mul(height / 2)?.checked_mul(2)
}

#[inline]
fn dim_i64(v: usize) -> i64 {
    i64::try_from(v).unwrap_or(i64::MAX)
}

/// Borrowed NV21 frame. Only the Y plane is required to be present.
#[derive(Clone, Copy, Debug)]
pub struct Nv21Frame<'a> {
    width: usize,
    height: usize,
    data: &'a [u8],
}

impl<'a> Nv21Frame<'a> {
    /// Wrap `data` as a `width × height` frame.
    ///
    /// Fails with [`FrameError::InvalidDimensions`] when a dimension is zero
    /// or `data` cannot hold the luminance plane.
    pub fn new(data: &'a [u8], width: usize, height: usize) -> Result<Self, FrameError> {
        let invalid = || FrameError::InvalidDimensions {
            width: dim_i64(width),
            height: dim_i64(height),
            buffer_len: data.len(),
        };
        if width == 0 || height == 0 {
            return Err(invalid());
        }
        let luma_len = width.checked_mul(height).ok_or_else(invalid)?;
        if data.len() < luma_len {
            return Err(invalid());
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The Y plane as a packed 8-bit view.
    pub fn luma(&self) -> ImageU8<'a> {
        ImageU8 {
            w: self.width,
            h: self.height,
            stride: self.width,
            data: &self.data[..self.width * self.height],
        }
    }

    /// Interleaved `V, U` bytes, if the buffer carries every chroma pair.
    pub fn vu_plane(&self) -> Option<&'a [u8]> {
        let start = self.width * self.height;
        let end = start.checked_add(vu_len(self.width, self.height)?)?;
        self.data.get(start..end)
    }
}

/// One plane of a YUV_420_888 image.
#[derive(Clone, Copy, Debug)]
pub struct PlaneRef<'a> {
    pub data: &'a [u8],
    /// Bytes between the starts of consecutive rows.
    pub row_stride: usize,
    /// Bytes between consecutive samples in a row (1 for planar, 2 for semi-planar).
    pub pixel_stride: usize,
}

impl<'a> PlaneRef<'a> {
    pub fn packed(data: &'a [u8], width: usize) -> Self {
        Self {
            data,
            row_stride: width,
            pixel_stride: 1,
        }
    }

    fn offset(&self, col: usize, row: usize) -> Option<usize> {
        row.checked_mul(self.row_stride)?
            .checked_add(col.checked_mul(self.pixel_stride)?)
    }

    /// `required` is `None` when the index itself overflows.
    fn too_short(&self, plane: &'static str, required: Option<usize>) -> FrameError {
        FrameError::PlaneTooShort {
            plane,
            required: required.unwrap_or(usize::MAX),
            found: self.data.len(),
        }
    }

    fn row_bytes(
        &self,
        plane: &'static str,
        row: usize,
        len: usize,
    ) -> Result<&'a [u8], FrameError> {
        let start = self.offset(0, row);
        let end = start.and_then(|s| s.checked_add(len));
        start
            .zip(end)
            .and_then(|(s, e)| self.data.get(s..e))
            .ok_or_else(|| self.too_short(plane, end))
    }

    fn sample(&self, plane: &'static str, col: usize, row: usize) -> Result<u8, FrameError> {
        let idx = self.offset(col, row);
        idx.and_then(|i| self.data.get(i))
            .copied()
            .ok_or_else(|| self.too_short(plane, idx.and_then(|i| i.checked_add(1))))
    }
}

/// Repack a strided three-plane capture into NV21.
///
/// Y rows are copied `width` bytes at a time skipping row padding; chroma is
/// written as `V` then `U` for each of the `(width / 2) × (height / 2)` blocks.
/// Geometry whose buffer size overflows `usize` is rejected with
/// [`FrameError::InvalidDimensions`].
pub fn pack_yuv420_to_nv21(
    width: usize,
    height: usize,
    y: PlaneRef<'_>,
    u: PlaneRef<'_>,
    v: PlaneRef<'_>,
) -> Result<Vec<u8>, FrameError> {
    let bytes = checked_nv21_len(width, height).ok_or(FrameError::InvalidDimensions {
        width: dim_i64(width),
        height: dim_i64(height),
        buffer_len: y.data.len(),
    })?;
    let mut nv21 = Vec::new();
    nv21.try_reserve_exact(bytes)
        .map_err(|_| FrameError::AllocationFailure { bytes })?;

    for row in 0..height {
        nv21.extend_from_slice(y.row_bytes("Y", row, width)?);
    }

    for row in 0..height / 2 {
        for col in 0..width / 2 {
            nv21.push(v.sample("V", col, row)?);
            nv21.push(u.sample("U", col, row)?);
        }
    }

    nv21.resize(bytes, 0);
    Ok(nv21)
}

#[inline]
fn clamp_u8(v: i32) -> u8 {
    v.clamp(0, 255) as u8
}

#[inline]
fn bt601_luma(r: i32, g: i32, b: i32) -> u8 {
    clamp_u8((77 * r + 150 * g + 29 * b + 128) >> 8)
}

#[inline]
fn bt601_chroma(r: i32, g: i32, b: i32) -> (u8, u8) {
    let u = ((-43 * r - 85 * g + 128 * b + 128) >> 8) + 128;
    let v = ((128 * r - 107 * g - 21 * b + 128) >> 8) + 128;
    (clamp_u8(u), clamp_u8(v))
}

/// Encode an RGB image as NV21 using full-range BT.601 integer coefficients.
/// Chroma for each 2×2 block is computed from the block's mean color.
pub fn rgb_to_nv21(rgb: &RgbImage) -> Vec<u8> {
    let width = rgb.width() as usize;
    let height = rgb.height() as usize;
    let bytes = width * height + width * height / 2;
    let mut nv21 = Vec::with_capacity(bytes);

    for px in rgb.pixels() {
        let [r, g, b] = px.0.map(i32::from);
        nv21.push(bt601_luma(r, g, b));
    }

    for by in 0..(height / 2) as u32 {
        for bx in 0..(width / 2) as u32 {
            let mut sum = [0i32; 3];
            for (dx, dy) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
                let px = rgb.get_pixel(2 * bx + dx, 2 * by + dy).0;
                for (acc, c) in sum.iter_mut().zip(px) {
                    *acc += i32::from(c);
                }
            }
            let [r, g, b] = sum.map(|s| (s + 2) / 4);
            let (u, v) = bt601_chroma(r, g, b);
            nv21.push(v);
            nv21.push(u);
        }
    }

    nv21.resize(bytes, 0);
    nv21
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::ImageView;
    use image::Rgb;

    #[test]
    fn frame_splits_luma_and_chroma() {
        let mut data = vec![7u8; 4 * 2];
        data.extend_from_slice(&[200, 100, 201, 101]);
        let frame = Nv21Frame::new(&data, 4, 2).expect("frame");
        assert_eq!(frame.luma().row(1), &[7, 7, 7, 7]);
        assert_eq!(frame.vu_plane(), Some(&[200u8, 100, 201, 101][..]));
    }

    #[test]
    fn frame_without_chroma_is_accepted() {
        let data = [0u8; 9];
        let frame = Nv21Frame::new(&data, 3, 3).expect("frame");
        assert_eq!(frame.luma().as_slice().map(<[u8]>::len), Some(9));
        assert!(frame.vu_plane().is_none());
    }

    #[test]
    fn frame_rejects_short_or_empty() {
        assert!(matches!(
            Nv21Frame::new(&[0u8; 8], 3, 3),
            Err(FrameError::InvalidDimensions { buffer_len: 8, .. })
        ));
        assert!(Nv21Frame::new(&[0u8; 8], 0, 3).is_err());
    }

    #[test]
    fn pack_skips_row_padding_and_orders_v_before_u() {
        // 4x2 luma with 2 bytes of padding per row.
        let y = [1u8, 2, 3, 4, 0, 0, 5, 6, 7, 8, 0, 0];
        // Semi-planar chroma: U and V interleaved with pixel stride 2.
        let u = [10u8, 0, 11, 0];
        let v = [20u8, 0, 21, 0];
        let nv21 = pack_yuv420_to_nv21(
            4,
            2,
            PlaneRef {
                data: &y,
                row_stride: 6,
                pixel_stride: 1,
            },
            PlaneRef {
                data: &u,
                row_stride: 4,
                pixel_stride: 2,
            },
            PlaneRef {
                data: &v,
                row_stride: 4,
                pixel_stride: 2,
            },
        )
        .expect("pack");
        assert_eq!(nv21, vec![1, 2, 3, 4, 5, 6, 7, 8, 20, 10, 21, 11]);
        assert_eq!(Some(nv21.len()), checked_nv21_len(4, 2));
    }

    #[test]
    fn pack_reports_short_chroma_plane() {
        let y = [0u8; 16];
        let u = [0u8; 4];
        let v = [0u8; 3];
        let err = pack_yuv420_to_nv21(
            4,
            4,
            PlaneRef::packed(&y, 4),
            PlaneRef::packed(&u, 2),
            PlaneRef::packed(&v, 2),
        )
        .unwrap_err();
        assert_eq!(
            err,
            FrameError::PlaneTooShort {
                plane: "V",
                required: 4,
                found: 3
            }
        );
    }

    #[test]
    fn pack_rejects_overflowing_geometry() {
        let plane = [0u8; 8];
        let err = pack_yuv420_to_nv21(
            usize::MAX,
            2,
            PlaneRef::packed(&plane, 2),
            PlaneRef::packed(&plane, 1),
            PlaneRef::packed(&plane, 1),
        )
        .unwrap_err();
        assert_eq!(
            err,
            FrameError::InvalidDimensions {
                width: i64::MAX,
                height: 2,
                buffer_len: 8
            }
        );
    }

    #[test]
    fn pack_reports_overflowing_stride_as_short_plane() {
        let y = [0u8; 4];
        let chroma = [0u8; 1];
        let err = pack_yuv420_to_nv21(
            2,
            2,
            PlaneRef {
                data: &y,
                row_stride: usize::MAX,
                pixel_stride: 1,
            },
            PlaneRef::packed(&chroma, 1),
            PlaneRef::packed(&chroma, 1),
        )
        .unwrap_err();
        assert_eq!(
            err,
            FrameError::PlaneTooShort {
                plane: "Y",
                required: usize::MAX,
                found: 4
            }
        );

        let y = [0u8; 8];
        let err = pack_yuv420_to_nv21(
            2,
            4,
            PlaneRef::packed(&y, 2),
            PlaneRef::packed(&chroma, 1),
            PlaneRef {
                data: &chroma,
                row_stride: usize::MAX,
                pixel_stride: 1,
            },
        );
        assert_eq!(
            err,
            Err(FrameError::PlaneTooShort {
                plane: "V",
                required: usize::MAX,
                found: 1
            })
        );
    }

    #[test]
    fn odd_sized_pack_pads_like_the_capture_buffer() {
        let y: Vec<u8> = (1..=9).collect();
        let nv21 = pack_yuv420_to_nv21(
            3,
            3,
            PlaneRef::packed(&y, 3),
            PlaneRef::packed(&[50], 1),
            PlaneRef::packed(&[60], 1),
        )
        .expect("pack");
        assert_eq!(nv21, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 60, 50, 0, 0]);
        assert_eq!(checked_nv21_len(3, 3), Some(13));

        let frame = Nv21Frame::new(&nv21, 3, 3).expect("frame");
        assert_eq!(frame.vu_plane(), Some(&[60u8, 50][..]));
    }

    #[test]
    fn odd_sized_rgb_encodes_with_zero_tail() {
        let rgb = RgbImage::from_pixel(3, 3, Rgb([90, 90, 90]));
        let nv21 = rgb_to_nv21(&rgb);
        assert_eq!(nv21.len(), 13);
        assert!(nv21[..9].iter().all(|&y| y == 90));
        assert_eq!(&nv21[9..], &[128, 128, 0, 0]);
    }

    #[test]
    fn gray_rgb_encodes_to_neutral_chroma() {
        let rgb = RgbImage::from_pixel(4, 2, Rgb([90, 90, 90]));
        let nv21 = rgb_to_nv21(&rgb);
        assert_eq!(Some(nv21.len()), checked_nv21_len(4, 2));
        assert!(nv21[..8].iter().all(|&y| y == 90));
        assert!(nv21[8..].iter().all(|&c| c == 128));
    }

    #[test]
    fn red_block_has_high_v() {
        let rgb = RgbImage::from_pixel(2, 2, Rgb([255, 0, 0]));
        let nv21 = rgb_to_nv21(&rgb);
        assert_eq!(nv21[0], 77);
        let (v, u) = (nv21[4], nv21[5]);
        assert!(v > 200, "v={v}");
        assert!(u < 128, "u={u}");
    }
}
