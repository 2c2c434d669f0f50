//! Pixel buffers used by the edge filter.
//!
//! - [`ImageU8`]: borrowed single-channel 8-bit view (the NV21 Y plane).
//! - [`RgbaImage`]: owned interleaved RGBA output.
//! - [`io`]: loading frames from disk and writing results.
pub mod io;
pub mod rgba;
pub mod traits;
pub mod u8;

pub use self::rgba::RgbaImage;
pub use self::traits::{ImageView, ImageViewMut, Rows};
pub use self::u8::ImageU8;
