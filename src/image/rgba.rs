//! Owned RGBA image in row-major layout (stride == width).
//!
//! Pixels are stored as `[r, g, b, a]` arrays so rows index by pixel, and
//! [`RgbaImage::into_raw`] hands the caller the interleaved byte buffer.
use crate::error::FrameError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbaImage {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Backing storage in row-major order
    pub data: Vec<[u8; 4]>,
}

impl RgbaImage {
    /// Zero-filled (transparent black) image of `w × h` pixels.
    ///
    /// Reports [`FrameError::AllocationFailure`] instead of aborting when the
    /// buffer cannot be reserved.
    pub fn try_zeroed(w: usize, h: usize) -> Result<Self, FrameError> {
        let pixels = w
            .checked_mul(h)
            .ok_or(FrameError::AllocationFailure { bytes: usize::MAX })?;
        let bytes = pixels.saturating_mul(4);
        let mut data = Vec::new();
        data.try_reserve_exact(pixels)
            .map_err(|_| FrameError::AllocationFailure { bytes })?;
        data.resize(pixels, [0u8; 4]);
        Ok(Self { w, h, data })
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> [u8; 4] {
        self.data[self.idx(x, y)]
    }
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, px: [u8; 4]) {
        let i = self.idx(x, y);
        self.data[i] = px;
    }

    /// Length of the interleaved byte representation.
    pub fn byte_len(&self) -> usize {
        self.data.len() * 4
    }

    /// Interleaved `R, G, B, A` bytes, row-major.
    pub fn into_raw(self) -> Vec<u8> {
        self.data.into_flattened()
    }
}

impl crate::image::traits::ImageView for RgbaImage {
    type Pixel = [u8; 4];

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[[u8; 4]] {
        let start = y * self.w;
        &self.data[start..start + self.w]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[[u8; 4]]> {
        Some(&self.data)
    }
}

impl crate::image::traits::ImageViewMut for RgbaImage {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [[u8; 4]] {
        let start = y * self.w;
        let end = start + self.w;
        &mut self.data[start..end]
    }
}
