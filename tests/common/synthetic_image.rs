/// Generates a simple high-contrast checkerboard image.
pub fn checkerboard_u8(width: usize, height: usize, cell: usize) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");

    let mut img = vec![0u8; width * height];
    for y in 0..height {
        for x in 0..width {
            let cx = x / cell;
            let cy = y / cell;
            let val = if (cx + cy) & 1 == 0 { 32u8 } else { 220u8 };
            img[y * width + x] = val;
        }
    }
    img
}

/// Appends an interleaved VU plane filled with `chroma` to a luminance plane.
pub fn with_chroma(mut luma: Vec<u8>, width: usize, height: usize, chroma: u8) -> Vec<u8> {
    luma.resize(width * height * 3 / 2, chroma);
    luma
}
