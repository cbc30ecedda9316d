//! Error types for textgrid operations.

use thiserror::Error;

/// Error type for line-wrapping operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WrapError {
    /// The target width cannot hold any content.
    ///
    /// The wrap loop cannot guarantee termination below a width of 1, so the
    /// wrapper rejects such targets instead of clamping them silently.
    /// Callers that derive a width from a division (such as the table layout
    /// engine) are expected to clamp before calling.
    #[error("invalid wrap width: {width} (must be at least 1)")]
    InvalidWidth {
        /// The rejected target width.
        width: usize,
    },
}

/// Result type alias for wrapping operations.
pub type WrapResult<T> = std::result::Result<T, WrapError>;
