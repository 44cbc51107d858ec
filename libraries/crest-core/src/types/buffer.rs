/// PCM sample container types
use serde::{Deserialize, Serialize};

/// Channel count of every buffer in the system (interleaved stereo)
pub const CHANNELS: u16 = 2;

/// Sample rate in Hz
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SampleRate(pub u32);

impl SampleRate {
    /// CD quality, 44.1 kHz
    pub const CD_QUALITY: Self = Self(44_100);
    /// DVD quality, 48 kHz
    pub const DVD_QUALITY: Self = Self(48_000);

    /// Create a new sample rate
    #[must_use]
    pub fn new(hz: u32) -> Self {
        Self(hz)
    }

    /// Get the sample rate as Hz
    pub fn as_hz(&self) -> u32 {
        self.0
    }
}

/// Stereo PCM buffer containing decoded samples
///
/// Samples are stored as f32 in the range [-1.0, 1.0], interleaved
/// [L, R, L, R, ...]. A buffer is a value: once constructed it is never
/// mutated, every effect operator returns a new one.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBuffer {
    /// Audio samples (f32, interleaved stereo)
    samples: Vec<f32>,

    /// Sample rate of the audio
    sample_rate: SampleRate,
}

impl SampleBuffer {
    /// Create a new buffer from interleaved stereo samples
    pub fn new(samples: Vec<f32>, sample_rate: SampleRate) -> Self {
        debug_assert!(
            samples.len() % CHANNELS as usize == 0,
            "interleaved stereo sample count must be even"
        );
        Self {
            samples,
            sample_rate,
        }
    }

    /// Create an empty buffer at the given sample rate
    pub fn empty(sample_rate: SampleRate) -> Self {
        Self {
            samples: Vec::new(),
            sample_rate,
        }
    }

    /// Concatenate chunk outputs in order into one buffer
    ///
    /// All parts must share `sample_rate`.
    pub fn concat(sample_rate: SampleRate, parts: &[SampleBuffer]) -> Self {
        let total: usize = parts.iter().map(|p| p.samples.len()).sum();
        let mut samples = Vec::with_capacity(total);
        for part in parts {
            debug_assert_eq!(part.sample_rate, sample_rate);
            samples.extend_from_slice(&part.samples);
        }
        Self {
            samples,
            sample_rate,
        }
    }

    /// Get the interleaved samples
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Consume the buffer, returning the interleaved samples
    pub fn into_samples(self) -> Vec<f32> {
        self.samples
    }

    /// Get the sample rate
    pub fn sample_rate(&self) -> SampleRate {
        self.sample_rate
    }

    /// Get the number of frames (samples per channel)
    pub fn frames(&self) -> usize {
        self.samples.len() / CHANNELS as usize
    }

    /// Check if the buffer holds no frames
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Get the duration in milliseconds, truncated
    pub fn duration_ms(&self) -> u64 {
        self.frames() as u64 * 1000 / u64::from(self.sample_rate.as_hz())
    }

    /// Frame index of a millisecond offset, floored
    ///
    /// Flooring on both ends of a range keeps adjacent slices free of
    /// overlap and gaps: slice boundaries of [a, b) and [b, c) meet at the
    /// same frame.
    fn frame_at_ms(&self, ms: u64) -> usize {
        (ms * u64::from(self.sample_rate.as_hz()) / 1000) as usize
    }

    /// Copy out the frames covering `[start_ms, end_ms)`
    ///
    /// The end is clamped to the buffer length; an inverted or fully
    /// out-of-range window yields an empty buffer.
    pub fn slice_ms(&self, start_ms: u64, end_ms: u64) -> SampleBuffer {
        let frames = self.frames();
        let start = self.frame_at_ms(start_ms).min(frames);
        let end = self.frame_at_ms(end_ms).min(frames);
        if start >= end {
            return Self::empty(self.sample_rate);
        }
        let channels = CHANNELS as usize;
        Self {
            samples: self.samples[start * channels..end * channels].to_vec(),
            sample_rate: self.sample_rate,
        }
    }
}
