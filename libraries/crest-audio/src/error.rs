/// Audio-specific errors
use thiserror::Error;

/// Result type alias using `AudioError`
pub type Result<T> = std::result::Result<T, AudioError>;

/// Audio error types
#[derive(Error, Debug)]
pub enum AudioError {
    /// File not found
    #[error("file not found: {0}")]
    FileNotFound(String),

    /// Unsupported format
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Decoding error
    #[error("decode error: {0}")]
    Decode(String),

    /// Symphonia error
    #[error("symphonia error: {0}")]
    Symphonia(String),

    /// Encoding error
    #[error("encode error: {0}")]
    Encode(String),

    /// ffmpeg exited unsuccessfully
    #[error("ffmpeg failed: {0}")]
    FfmpegFailed(String),

    /// Invalid audio buffer
    #[error("invalid audio buffer: {0}")]
    InvalidBuffer(String),

    /// I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<AudioError> for crest_core::CrestError {
    fn from(err: AudioError) -> Self {
        match err {
            AudioError::FileNotFound(_)
            | AudioError::UnsupportedFormat(_)
            | AudioError::Decode(_)
            | AudioError::Symphonia(_) => crest_core::CrestError::Decode(err.to_string()),
            AudioError::Encode(_) | AudioError::FfmpegFailed(_) => {
                crest_core::CrestError::Encode(err.to_string())
            }
            AudioError::InvalidBuffer(msg) => crest_core::CrestError::InvalidInput(msg),
            AudioError::Io(e) => crest_core::CrestError::Io(e),
        }
    }
}
