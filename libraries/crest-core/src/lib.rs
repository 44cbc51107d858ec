//! Crest Core
//!
//! Platform-agnostic core types, collaborator traits, and error handling for
//! the Crest audio editing pipeline.
//!
//! This crate defines:
//! - **Data Types**: `SampleBuffer`, `SampleRate`, `ExportFormat`
//! - **Collaborator Traits**: `AudioDecoder`, `AudioEncoder`
//! - **Error Handling**: Unified `CrestError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use crest_core::{SampleBuffer, SampleRate};
//!
//! // One second of silence at CD quality
//! let buffer = SampleBuffer::new(vec![0.0; 88_200], SampleRate::CD_QUALITY);
//! assert_eq!(buffer.duration_ms(), 1000);
//!
//! // Millisecond-addressed slicing
//! let head = buffer.slice_ms(0, 20);
//! assert_eq!(head.duration_ms(), 20);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{CrestError, Result};
pub use traits::{AudioDecoder, AudioEncoder};
pub use types::{ExportFormat, SampleBuffer, SampleRate, CHANNELS};
