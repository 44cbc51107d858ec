//! Crest Audio
//!
//! Effect operators, chunked parallel processing, and the edit pipeline for
//! Crest.
//!
//! This crate provides:
//! - Pure effect operators: static pan, decibel gain
//! - A chunked, worker-pool pan sweep ("smooth pan")
//! - Compressor control validation rendered as an encoder filter descriptor
//! - The `EditSession` command pipeline over decoder/encoder collaborators
//! - Built-in collaborators: Symphonia decoding, ffmpeg encoding
//! - A partial-failure-tolerant batch converter
//!
//! # Example: Applying Effects
//!
//! ```rust
//! use crest_audio::effects::{gain, pan};
//! use crest_core::{SampleBuffer, SampleRate};
//!
//! // One second of a quiet clip at CD quality
//! let clip = SampleBuffer::new(vec![0.1; 88_200], SampleRate::CD_QUALITY);
//!
//! // Lean it left, then bring the level down 6 dB
//! let panned = pan::apply(&clip, -0.5);
//! let quieter = gain::apply(&panned, -6.0);
//! assert_eq!(quieter.duration_ms(), clip.duration_ms());
//! ```
//!
//! # Example: Driving the Pipeline
//!
//! ```rust,no_run
//! use crest_audio::pipeline::{EditCommand, EditSession};
//! use crest_audio::{FfmpegEncoder, SymphoniaDecoder};
//! use crest_core::ExportFormat;
//!
//! # fn example() -> crest_core::Result<()> {
//! let mut session = EditSession::new(
//!     Box::new(SymphoniaDecoder::new()),
//!     Box::new(FfmpegEncoder::new()),
//! )?;
//!
//! session.dispatch(EditCommand::Open("/music/clip.flac".into()))?;
//! session.dispatch(EditCommand::ApplySmoothPan)?;
//! session.dispatch(EditCommand::Export {
//!     path: "/music/clip-swept.ogg".into(),
//!     format: ExportFormat::Ogg,
//! })?;
//! # Ok(())
//! # }
//! ```

pub mod batch;
mod decoder;
pub mod effects;
mod encoder;
mod error;
pub mod pipeline;

pub use batch::{BatchConverter, BatchSummary};
pub use decoder::SymphoniaDecoder;
pub use encoder::FfmpegEncoder;
pub use error::{AudioError, Result};
pub use pipeline::{EditCommand, EditSession};
