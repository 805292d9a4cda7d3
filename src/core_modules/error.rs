// The complete failure taxonomy of the detection core. Loading can fail before
// the pipeline runs, and a grid can be too small for the interior sweeps and
// the smoothing window; every other operation is total over well-formed grids
// (all stage arithmetic is clamped or integer-divided within 8-bit range).

use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetectionError {
    /// The source image is missing, undecodable, or its buffer does not match
    /// the declared dimensions. Raised by the loading seam, never mid-pipeline.
    ImageLoad { reason: String },
    /// The grid is too small for the interior sweeps and the smoothing window.
    /// These failures are deterministic and data-dependent; callers must not
    /// retry and must not read a partial candidate list out of them.
    InvalidDimensions { width: u32, height: u32 },
}

impl fmt::Display for DetectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetectionError::ImageLoad { reason } => {
                write!(f, "failed to load source image: {}", reason)
            }
            DetectionError::InvalidDimensions { width, height } => {
                write!(
                    f,
                    "a {}x{} image is too small for the detection pipeline",
                    width, height
                )
            }
        }
    }
}

impl Error for DetectionError {}

impl From<image::ImageError> for DetectionError {
    fn from(error: image::ImageError) -> Self {
        DetectionError::ImageLoad {
            reason: error.to_string(),
        }
    }
}
