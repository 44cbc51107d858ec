//! Decibel gain

use crest_core::SampleBuffer;

/// Convert a decibel offset to a linear amplitude factor
///
/// Non-finite input is treated as 0 dB.
pub fn db_to_linear(gain_db: f32) -> f32 {
    if !gain_db.is_finite() {
        return 1.0;
    }
    10.0_f32.powf(gain_db / 20.0)
}

/// Apply a decibel gain, returning a new buffer
///
/// Samples pushed past full scale saturate to [-1.0, 1.0] rather than
/// wrapping.
pub fn apply(buffer: &SampleBuffer, gain_db: f32) -> SampleBuffer {
    let factor = db_to_linear(gain_db);
    let samples = buffer
        .samples()
        .iter()
        .map(|s| (s * factor).clamp(-1.0, 1.0))
        .collect();
    SampleBuffer::new(samples, buffer.sample_rate())
}
