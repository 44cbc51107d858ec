//! Property-based tests for effect operators and chunk slicing
//!
//! These use proptest to verify invariants across many random inputs.

use crest_audio::effects::{gain, pan, PanSweep};
use crest_core::{SampleBuffer, SampleRate};
use proptest::prelude::*;

fn buffer_from_frames(frames: Vec<(f32, f32)>, rate: u32) -> SampleBuffer {
    let mut samples = Vec::with_capacity(frames.len() * 2);
    for (left, right) in frames {
        samples.push(left);
        samples.push(right);
    }
    SampleBuffer::new(samples, SampleRate::new(rate))
}

fn all_in_range(buffer: &SampleBuffer) -> bool {
    buffer
        .samples()
        .iter()
        .all(|s| s.is_finite() && (-1.0..=1.0).contains(s))
}

fn frame_strategy(
    max_frames: usize,
) -> impl Strategy<Value = Vec<(f32, f32)>> {
    prop::collection::vec((-1.0f32..1.0, -1.0f32..1.0), 0..max_frames)
}

proptest! {
    /// Pan must preserve duration and never produce NaN, Inf, or samples
    /// outside full scale, even for out-of-range pan positions
    #[test]
    fn pan_preserves_duration_and_stays_in_range(
        frames in frame_strategy(1000),
        pan_value in -3.0f32..3.0,
        rate in prop::sample::select(vec![8_000u32, 22_050, 44_100, 48_000]),
    ) {
        let buffer = buffer_from_frames(frames, rate);
        let out = pan::apply(&buffer, pan_value);

        prop_assert_eq!(out.frames(), buffer.frames());
        prop_assert_eq!(out.duration_ms(), buffer.duration_ms());
        prop_assert_eq!(out.sample_rate(), buffer.sample_rate());
        prop_assert!(all_in_range(&out));
    }

    /// Gain must saturate instead of wrapping and preserve duration for any
    /// finite decibel offset
    #[test]
    fn gain_saturates_and_preserves_duration(
        frames in frame_strategy(1000),
        gain_db in -80.0f32..80.0,
    ) {
        let buffer = buffer_from_frames(frames, 44_100);
        let out = gain::apply(&buffer, gain_db);

        prop_assert_eq!(out.frames(), buffer.frames());
        prop_assert!(all_in_range(&out));
    }

    /// Boosting then cutting by the same amount reproduces the original
    /// within quantization tolerance, as long as the boost leg cannot clip
    #[test]
    fn gain_round_trips_within_tolerance(
        frames in prop::collection::vec((-0.1f32..0.1, -0.1f32..0.1), 1..500),
        gain_db in -12.0f32..12.0,
    ) {
        let buffer = buffer_from_frames(frames, 44_100);
        let out = gain::apply(&gain::apply(&buffer, gain_db), -gain_db);

        for (a, b) in buffer.samples().iter().zip(out.samples()) {
            prop_assert!((a - b).abs() < 1e-4, "round trip drifted: {} vs {}", a, b);
        }
    }

    /// Millisecond slicing with floor on both ends tiles the buffer with no
    /// gaps, overlaps, or stragglers
    #[test]
    fn slicing_tiles_the_buffer_exactly(
        frames in frame_strategy(2000),
        chunk_ms in 1u64..50,
        rate in prop::sample::select(vec![8_000u32, 22_050, 44_100, 48_000]),
    ) {
        let buffer = buffer_from_frames(frames, rate);
        let count = if buffer.is_empty() {
            0
        } else {
            buffer.duration_ms().div_ceil(chunk_ms).max(1)
        };

        let mut reassembled = Vec::new();
        for i in 0..count {
            let part = buffer.slice_ms(i * chunk_ms, (i + 1) * chunk_ms);
            reassembled.extend_from_slice(part.samples());
        }

        prop_assert_eq!(reassembled.as_slice(), buffer.samples());
    }
}

proptest! {
    // Each case builds a worker pool, so keep the case count moderate
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// The sweep must preserve the exact frame count for any buffer length
    /// and chunk size
    #[test]
    fn sweep_preserves_frame_count(
        frames in frame_strategy(800),
        chunk_ms in 1u64..40,
    ) {
        let sweep = PanSweep::with_params(chunk_ms, 0.01).unwrap();
        let buffer = buffer_from_frames(frames, 44_100);

        let out = sweep.apply(&buffer).unwrap();
        prop_assert_eq!(out.frames(), buffer.frames());
        prop_assert!(all_in_range(&out));
    }
}
