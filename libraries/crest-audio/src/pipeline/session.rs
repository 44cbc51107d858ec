//! Edit session state machine
//!
//! Owns the loaded `source` buffer and the derived `result` buffer. The
//! session starts with no source, where every effect and export fails with
//! `NoSourceLoaded`; opening a file moves it to the loaded state with
//! `result = source`. Each effect application replaces `result` wholesale.
//! Export is not a state transition: the result persists so repeated or
//! varied exports of the same edit are possible.

use crate::effects::{gain, pan, CompressorSettings, CompressorSpec, PanSweep};
use crate::pipeline::EditCommand;
use crest_core::{
    AudioDecoder, AudioEncoder, CrestError, ExportFormat, Result, SampleBuffer,
};
use std::path::Path;

/// The editing pipeline: source/result buffers, compressor spec, and the
/// decoder/encoder collaborators
pub struct EditSession {
    decoder: Box<dyn AudioDecoder>,
    encoder: Box<dyn AudioEncoder>,
    sweep: PanSweep,
    compressor: CompressorSpec,
    source: Option<SampleBuffer>,
    result: Option<SampleBuffer>,
}

impl EditSession {
    /// Create a session around a decoder/encoder pair
    pub fn new(decoder: Box<dyn AudioDecoder>, encoder: Box<dyn AudioEncoder>) -> Result<Self> {
        Ok(Self {
            decoder,
            encoder,
            sweep: PanSweep::new()?,
            compressor: CompressorSpec::new(),
            source: None,
            result: None,
        })
    }

    /// Consume one command
    ///
    /// Errors are reported to the caller and never leave the buffers in a
    /// partially overwritten state.
    pub fn dispatch(&mut self, command: EditCommand) -> Result<()> {
        match command {
            EditCommand::Open(path) => self.open(&path),
            EditCommand::ApplyPan(position) => self.apply_pan(position),
            EditCommand::ApplyGain(gain_db) => self.apply_gain(gain_db),
            EditCommand::ApplySmoothPan => self.apply_smooth_pan(),
            EditCommand::SetCompressor(settings) => {
                self.set_compressor(settings);
                Ok(())
            }
            EditCommand::ResetCompressor => {
                self.reset_compressor();
                Ok(())
            }
            EditCommand::Export { path, format } => self.export(&path, format),
        }
    }

    fn open(&mut self, path: &Path) -> Result<()> {
        let buffer = self.decoder.decode(path)?;
        tracing::info!(
            path = %path.display(),
            duration_ms = buffer.duration_ms(),
            "opened audio file"
        );
        self.result = Some(buffer.clone());
        self.source = Some(buffer);
        Ok(())
    }

    /// Effects always derive from the originally loaded audio, never from
    /// the previous result.
    fn source_buffer(&self) -> Result<&SampleBuffer> {
        self.source.as_ref().ok_or(CrestError::NoSourceLoaded)
    }

    fn apply_pan(&mut self, position: f32) -> Result<()> {
        let panned = pan::apply(self.source_buffer()?, position);
        self.result = Some(panned);
        tracing::debug!(position, "applied pan");
        Ok(())
    }

    fn apply_gain(&mut self, gain_db: f32) -> Result<()> {
        let scaled = gain::apply(self.source_buffer()?, gain_db);
        self.result = Some(scaled);
        tracing::debug!(gain_db, "applied gain");
        Ok(())
    }

    fn apply_smooth_pan(&mut self) -> Result<()> {
        // The previous result is replaced only once the sweep succeeds
        let swept = self.sweep.apply(self.source_buffer()?)?;
        self.result = Some(swept);
        tracing::debug!("applied smooth pan");
        Ok(())
    }

    /// Engage the compressor; the descriptor only affects export
    pub fn set_compressor(&mut self, settings: CompressorSettings) {
        self.compressor.set(settings);
    }

    /// Disengage the compressor; subsequent exports omit the filter
    pub fn reset_compressor(&mut self) {
        self.compressor.reset();
    }

    fn export(&mut self, path: &Path, format: ExportFormat) -> Result<()> {
        let buffer = self.result.as_ref().ok_or(CrestError::NoSourceLoaded)?;
        let filter = self.compressor.render();
        self.encoder.encode(buffer, path, format, filter.as_deref())?;
        tracing::info!(
            path = %path.display(),
            %format,
            filter = filter.as_deref().unwrap_or("none"),
            "exported audio"
        );
        Ok(())
    }

    /// Whether a source has been loaded
    pub fn is_loaded(&self) -> bool {
        self.source.is_some()
    }

    /// The originally loaded audio, if any
    pub fn source(&self) -> Option<&SampleBuffer> {
        self.source.as_ref()
    }

    /// The current edit result, if any
    pub fn result(&self) -> Option<&SampleBuffer> {
        self.result.as_ref()
    }

    /// The compressor specification
    pub fn compressor(&self) -> &CompressorSpec {
        &self.compressor
    }
}
