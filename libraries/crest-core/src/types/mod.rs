//! Core types for Crest

mod buffer;
mod format;

pub use buffer::{SampleBuffer, SampleRate, CHANNELS};
pub use format::ExportFormat;
