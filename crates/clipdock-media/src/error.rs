//! Error types for media operations.

use thiserror::Error;

/// Result type for media operations.
pub type MediaResult<T> = Result<T, MediaError>;

/// Errors that can occur during stream inspection and upload staging.
#[derive(Debug, Error)]
pub enum MediaError {
    #[error("FFprobe not found in PATH")]
    FfprobeNotFound,

    #[error("FFprobe command failed: {message}")]
    FfprobeFailed {
        message: String,
        exit_code: Option<i32>,
    },

    #[error("FFprobe output parse error: {0}")]
    ProbeParse(#[from] serde_json::Error),

    #[error("no video stream found")]
    NoVideoStream,

    #[error("degenerate stream dimensions: {width}x{height}")]
    DegenerateDimensions { width: u32, height: u32 },

    #[error("payload exceeds limit of {limit} bytes")]
    PayloadTooLarge { limit: u64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl MediaError {
    /// Create an FFprobe failure error.
    pub fn ffprobe_failed(message: impl Into<String>, exit_code: Option<i32>) -> Self {
        Self::FfprobeFailed {
            message: message.into(),
            exit_code,
        }
    }
}
