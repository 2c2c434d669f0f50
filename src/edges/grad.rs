//! L1 central-difference gradient on 8-bit luminance.
//!
//! For an interior pixel with neighbours `left`, `right`, `up`, `down`:
//!
//! ```text
//! gx  = left - right
//! gy  = up   - down
//! mag = min(255, |gx| + |gy|)
//! ```
//!
//! Samples are widened from `u8` before subtracting, so bright values
//! (≥ 128) contribute their full unsigned range.

/// Clamped L1 gradient magnitude from the four axis neighbours of a pixel.
#[inline]
pub fn l1_magnitude(left: u8, right: u8, up: u8, down: u8) -> u8 {
    let gx = i16::from(left) - i16::from(right);
    let gy = i16::from(up) - i16::from(down);
    (gx.unsigned_abs() + gy.unsigned_abs()).min(255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_neighbourhood_has_zero_magnitude() {
        assert_eq!(l1_magnitude(10, 10, 10, 10), 0);
    }

    #[test]
    fn sign_of_difference_does_not_matter() {
        assert_eq!(l1_magnitude(100, 200, 0, 0), 100);
        assert_eq!(l1_magnitude(200, 100, 0, 0), 100);
        assert_eq!(l1_magnitude(0, 0, 30, 70), 40);
    }

    #[test]
    fn bright_samples_are_unsigned() {
        // As signed bytes 200 would read as -56 and 130 as -126.
        assert_eq!(l1_magnitude(200, 130, 0, 0), 70);
        assert_eq!(l1_magnitude(255, 128, 128, 255), 254);
    }

    #[test]
    fn magnitude_saturates_at_255() {
        assert_eq!(l1_magnitude(200, 0, 200, 0), 255);
        assert_eq!(l1_magnitude(255, 0, 0, 255), 255);
    }
}
