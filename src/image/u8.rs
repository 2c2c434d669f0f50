/// Borrowed 8-bit single-channel image, e.g. the luminance plane of a frame.
///
/// `data` may extend past the last row (trailing chroma); only
/// `stride * (h - 1) + w` bytes are ever read.
#[derive(Clone, Debug)]
pub struct ImageU8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // bytes between rows
    pub data: &'a [u8],
}

impl<'a> ImageU8<'a> {
    /// Wrap a tightly packed plane, or `None` if `data` is shorter than `w * h`.
    pub fn packed(data: &'a [u8], w: usize, h: usize) -> Option<Self> {
        let len = w.checked_mul(h)?;
        (data.len() >= len).then_some(Self {
            w,
            h,
            stride: w,
            data,
        })
    }
}

impl<'a> crate::image::traits::ImageView for ImageU8<'a> {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[u8]> {
        (self.stride == self.w).then_some(&self.data[..self.w * self.h])
    }
}
