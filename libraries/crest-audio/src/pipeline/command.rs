//! Edit commands
//!
//! The UI layer produces discrete commands; the session consumes them
//! synchronously. This keeps the core free of any windowing concerns and
//! directly testable.

use crate::effects::CompressorSettings;
use crest_core::ExportFormat;
use std::path::PathBuf;

/// A discrete user action consumed by [`EditSession::dispatch`]
///
/// [`EditSession::dispatch`]: crate::pipeline::EditSession::dispatch
#[derive(Debug, Clone, PartialEq)]
pub enum EditCommand {
    /// Decode a file and make it the session source
    Open(PathBuf),
    /// Apply a static pan; position in [-1.0, 1.0], clamped
    ApplyPan(f32),
    /// Apply a decibel gain
    ApplyGain(f32),
    /// Apply the chunked smooth-pan sweep
    ApplySmoothPan,
    /// Engage the compressor with the given controls
    SetCompressor(CompressorSettings),
    /// Disengage the compressor and restore default controls
    ResetCompressor,
    /// Encode the current result to a file
    Export {
        /// Output file path
        path: PathBuf,
        /// Target format
        format: ExportFormat,
    },
}
