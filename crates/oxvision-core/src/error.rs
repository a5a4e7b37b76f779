//! Error types for oxvision

use thiserror::Error;

/// Result type for oxvision operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in oxvision operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Invalid value supplied by the caller (bad configuration, bad labels,
    /// empty datasets). The message is surfaced to the caller verbatim.
    #[error("{0}")]
    Value(String),

    /// The operation is not supported for the given inputs
    /// (e.g. mismatched task types)
    #[error("{0}")]
    NotSupported(String),

    /// Pixel buffer size doesn't match the declared image dimensions
    #[error("Buffer size mismatch: expected {expected}, got {actual}")]
    BufferSize { expected: usize, actual: usize },

    /// Two heatmaps with different grid shapes were combined
    #[error("Heatmap shape mismatch: {expected_width}x{expected_height} vs {actual_width}x{actual_height}")]
    ShapeMismatch {
        expected_width: u32,
        expected_height: u32,
        actual_width: u32,
        actual_height: u32,
    },
}
