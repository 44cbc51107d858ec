/// Collaborator traits for Crest
use crate::error::Result;
use crate::types::{ExportFormat, SampleBuffer};
use std::path::Path;

/// Audio decoder trait
///
/// Implementers decode audio files into the stereo `SampleBuffer` format.
/// Invoked once per "open" action; the editing core never touches container
/// formats itself.
pub trait AudioDecoder: Send {
    /// Decode an audio file from the given path
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or decoded
    fn decode(&mut self, path: &Path) -> Result<SampleBuffer>;

    /// Check if the decoder supports the given file format
    fn supports_format(&self, path: &Path) -> bool;
}

/// Audio encoder trait
///
/// Implementers write a `SampleBuffer` to a file in the requested format.
/// When `filter` is present it is an opaque filter-graph descriptor executed
/// entirely inside the encoder (the core never applies it to the buffer).
pub trait AudioEncoder: Send {
    /// Encode a buffer to `path` in `format`
    ///
    /// # Errors
    /// Returns an error if the path is unwritable or the format unsupported
    fn encode(
        &mut self,
        buffer: &SampleBuffer,
        path: &Path,
        format: ExportFormat,
        filter: Option<&str>,
    ) -> Result<()>;
}
