/// Reasons a frame cannot be turned into an edge map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameError {
    /// Non-positive or overflowing dimensions, or a buffer shorter than the
    /// luminance plane they describe.
    InvalidDimensions {
        width: i64,
        height: i64,
        buffer_len: usize,
    },
    /// The output buffer could not be reserved.
    AllocationFailure { bytes: usize },
    /// A YUV_420_888 source plane ends before the last sample it must supply.
    PlaneTooShort {
        plane: &'static str,
        required: usize,
        found: usize,
    },
}

impl std::fmt::Display for FrameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FrameError::InvalidDimensions {
                width,
                height,
                buffer_len,
            } => write!(
                f,
                "invalid frame dimensions {width}x{height} for a {buffer_len}-byte buffer"
            ),
            FrameError::AllocationFailure { bytes } => {
                write!(f, "failed to allocate {bytes} bytes for the output image")
            }
            FrameError::PlaneTooShort {
                plane,
                required,
                found,
            } => write!(f, "{plane} plane too short ({found} < {required} bytes)"),
        }
    }
}

impl std::error::Error for FrameError {}
