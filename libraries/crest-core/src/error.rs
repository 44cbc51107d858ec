/// Core error types for Crest
use thiserror::Error;

/// Result type alias using `CrestError`
pub type Result<T> = std::result::Result<T, CrestError>;

/// Core error type for Crest
#[derive(Error, Debug)]
pub enum CrestError {
    /// An effect or export was requested before any audio was opened
    #[error("no audio loaded")]
    NoSourceLoaded,

    /// Decoding error surfaced from the decoder collaborator
    #[error("decode error: {0}")]
    Decode(String),

    /// Encoding error surfaced from the encoder collaborator
    #[error("encode error: {0}")]
    Encode(String),

    /// Chunk worker pool failure; the whole operation is aborted
    #[error("worker pool error: {0}")]
    WorkerPool(String),

    /// Invalid input
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CrestError {
    /// Create a decode error
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Create an encode error
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Create a worker pool error
    pub fn worker_pool(msg: impl Into<String>) -> Self {
        Self::WorkerPool(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
