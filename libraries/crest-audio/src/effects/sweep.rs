//! Smooth pan: a time-varying sweep processed in parallel chunks
//!
//! The buffer is cut into fixed-duration chunks, each chunk is panned with a
//! position derived from its index, and the outputs are concatenated back in
//! index order. Chunks are independent, so they are processed concurrently
//! on a bounded worker pool; the source buffer is shared read-only and each
//! chunk result lands in its own output slot, so no locking is involved.

use crate::effects::pan;
use crest_core::{CrestError, Result, SampleBuffer};
use rayon::prelude::*;

/// Chunked pan sweep scheduler
pub struct PanSweep {
    chunk_ms: u64,
    phase_step: f32,
    pool: rayon::ThreadPool,
}

impl PanSweep {
    /// Nominal chunk duration
    pub const DEFAULT_CHUNK_MS: u64 = 20;
    /// Pan phase advance per chunk; the sweep period is independent of
    /// sample rate and buffer length
    pub const DEFAULT_PHASE_STEP: f32 = 0.01;
    /// Worker pool width
    pub const WORKERS: usize = 4;

    /// Create a scheduler with the default chunk size and phase step
    pub fn new() -> Result<Self> {
        Self::with_params(Self::DEFAULT_CHUNK_MS, Self::DEFAULT_PHASE_STEP)
    }

    /// Create a scheduler with explicit chunk duration and phase step
    pub fn with_params(chunk_ms: u64, phase_step: f32) -> Result<Self> {
        if chunk_ms == 0 {
            return Err(CrestError::invalid_input(
                "chunk duration must be at least 1 ms",
            ));
        }
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(Self::WORKERS)
            .build()
            .map_err(|e| CrestError::worker_pool(e.to_string()))?;
        Ok(Self {
            chunk_ms,
            phase_step,
            pool,
        })
    }

    /// Pan position for a chunk index: `sin(index * phase_step)`
    pub fn pan_at(&self, index: usize) -> f32 {
        (index as f32 * self.phase_step).sin()
    }

    /// Number of chunks covering `buffer`
    ///
    /// `ceil(duration / chunk_ms)`, with a floor of one chunk for buffers
    /// shorter than a millisecond so no frame is left behind.
    pub fn chunk_count(&self, buffer: &SampleBuffer) -> usize {
        if buffer.is_empty() {
            return 0;
        }
        buffer.duration_ms().div_ceil(self.chunk_ms).max(1) as usize
    }

    /// Apply the sweep, returning a new buffer of identical duration
    ///
    /// Fails atomically: if any chunk task errors the whole operation
    /// errors and no partial output is produced. Output is deterministic
    /// regardless of worker scheduling because results are collected by
    /// chunk index, not completion order.
    pub fn apply(&self, buffer: &SampleBuffer) -> Result<SampleBuffer> {
        let count = self.chunk_count(buffer);
        if count == 0 {
            return Ok(SampleBuffer::empty(buffer.sample_rate()));
        }

        let chunk_ms = self.chunk_ms;
        let chunks = self.pool.install(|| {
            (0..count)
                .into_par_iter()
                .map(|index| {
                    let start = index as u64 * chunk_ms;
                    // The final chunk's end is clamped to the buffer, so it
                    // may be shorter than the nominal duration.
                    let chunk = buffer.slice_ms(start, start + chunk_ms);
                    Ok(pan::apply(&chunk, self.pan_at(index)))
                })
                .collect::<Result<Vec<SampleBuffer>>>()
        })?;

        Ok(SampleBuffer::concat(buffer.sample_rate(), &chunks))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crest_core::SampleRate;

    #[test]
    fn pan_positions_follow_sine() {
        let sweep = PanSweep::new().unwrap();
        assert_eq!(sweep.pan_at(0), 0.0);
        assert!((sweep.pan_at(10) - 0.1_f32.sin()).abs() < 1e-6);
        assert!((sweep.pan_at(157) - 1.57_f32.sin()).abs() < 1e-6);
    }

    #[test]
    fn chunk_count_rounds_up() {
        let sweep = PanSweep::new().unwrap();
        let rate = SampleRate::new(1000);

        // 1000 ms / 20 ms = exactly 50 chunks
        let exact = SampleBuffer::new(vec![0.0; 1000 * 2], rate);
        assert_eq!(sweep.chunk_count(&exact), 50);

        // 990 ms needs 50 chunks, the last one 10 ms long
        let ragged = SampleBuffer::new(vec![0.0; 990 * 2], rate);
        assert_eq!(sweep.chunk_count(&ragged), 50);
    }

    #[test]
    fn sub_millisecond_buffer_still_gets_a_chunk() {
        let sweep = PanSweep::new().unwrap();
        let tiny = SampleBuffer::new(vec![0.0; 30 * 2], SampleRate::CD_QUALITY);
        assert_eq!(tiny.duration_ms(), 0);
        assert_eq!(sweep.chunk_count(&tiny), 1);

        let out = sweep.apply(&tiny).unwrap();
        assert_eq!(out.frames(), 30);
    }

    #[test]
    fn empty_buffer_yields_empty_output() {
        let sweep = PanSweep::new().unwrap();
        let empty = SampleBuffer::empty(SampleRate::CD_QUALITY);
        assert_eq!(sweep.chunk_count(&empty), 0);

        let out = sweep.apply(&empty).unwrap();
        assert!(out.is_empty());
        assert_eq!(out.sample_rate(), SampleRate::CD_QUALITY);
    }

    #[test]
    fn zero_chunk_duration_rejected() {
        assert!(matches!(
            PanSweep::with_params(0, 0.01),
            Err(CrestError::InvalidInput(_))
        ));
    }
}
