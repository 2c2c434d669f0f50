#![doc = include_str!("../README.md")]

pub mod edges;
pub mod error;
pub mod frame;
pub mod image;
pub mod nv21;

// Tooling support (CLI configuration).
pub mod config;

// --- High-level re-exports -------------------------------------------------

pub use crate::edges::{edge_map_rgba, EdgeSummary};
pub use crate::error::FrameError;
pub use crate::frame::{edge_map_nv21, process_frame_nv21};
pub use crate::nv21::Nv21Frame;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use edge_viewer::prelude::*;
///
/// # fn main() -> Result<(), FrameError> {
/// let (w, h) = (640usize, 480usize);
/// let nv21 = vec![0u8; w * h * 3 / 2];
/// let frame = Nv21Frame::new(&nv21, w, h)?;
///
/// let edges = edge_map_nv21(&frame)?;
/// let summary = EdgeSummary::from_edge_map(&edges);
/// println!("max={} mean={:.3}", summary.max_magnitude, summary.mean_magnitude);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{ImageU8, RgbaImage};
    pub use crate::{edge_map_nv21, process_frame_nv21, EdgeSummary, FrameError, Nv21Frame};
}
