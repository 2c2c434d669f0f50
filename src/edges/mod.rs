//! Luminance edge maps.
//!
//! - Gradient: clamped L1 magnitude of the horizontal and vertical central
//!   differences of an 8-bit plane.
//! - Rendering: magnitude replicated into R, G and B with opaque alpha on
//!   interior pixels; the one-pixel border is left transparent black.
//! - Summary: serializable statistics over the interior for tooling.
//!
//! Complexity: O(W·H) per frame, one allocation (the output).

pub mod grad;
pub mod map;

/// Clamped L1 gradient magnitude of a single pixel.
pub use grad::l1_magnitude;
/// Edge-map rendering and interior statistics.
pub use map::{edge_map_rgba, EdgeSummary};
