/// Audio decoder implementation using Symphonia
use crate::error::{AudioError, Result};
use crest_core::{AudioDecoder as AudioDecoderTrait, SampleBuffer, SampleRate};
use std::path::Path;
use symphonia::core::audio::{AudioBufferRef, Signal};
use symphonia::core::codecs::DecoderOptions;
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

/// Audio decoder using Symphonia
///
/// Supports: MP3, FLAC, OGG, WAV. Decodes the whole file into one stereo
/// `SampleBuffer`; the editing pipeline works on complete clips, so there is
/// no streaming mode.
pub struct SymphoniaDecoder;

impl SymphoniaDecoder {
    /// Create a new decoder
    pub fn new() -> Self {
        Self
    }

    fn decode_file(path: &Path) -> Result<SampleBuffer> {
        if !path.exists() {
            return Err(AudioError::FileNotFound(path.display().to_string()));
        }

        let file = std::fs::File::open(path)?;
        let mss = MediaSourceStream::new(Box::new(file), Default::default());

        // A hint helps the format registry guess the container
        let mut hint = Hint::new();
        if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
            hint.with_extension(ext);
        }

        let probed = symphonia::default::get_probe()
            .format(
                &hint,
                mss,
                &FormatOptions::default(),
                &MetadataOptions::default(),
            )
            .map_err(|e| AudioError::Symphonia(format!("failed to probe file: {}", e)))?;

        let mut format = probed.format;

        let track = format
            .default_track()
            .ok_or_else(|| AudioError::Decode("no audio tracks found".to_string()))?;

        let sample_rate = track.codec_params.sample_rate.unwrap_or(44_100);
        let track_id = track.id;

        let mut decoder = symphonia::default::get_codecs()
            .make(&track.codec_params, &DecoderOptions::default())
            .map_err(|e| AudioError::Symphonia(format!("failed to create decoder: {}", e)))?;

        let mut samples = Vec::new();

        loop {
            let packet = match format.next_packet() {
                Ok(packet) => packet,
                Err(SymphoniaError::IoError(e))
                    if e.kind() == std::io::ErrorKind::UnexpectedEof =>
                {
                    break;
                }
                Err(e) => {
                    return Err(AudioError::Symphonia(format!("error reading packet: {}", e)));
                }
            };

            if packet.track_id() != track_id {
                continue;
            }

            let decoded = match decoder.decode(&packet) {
                Ok(decoded) => decoded,
                // A malformed packet is recoverable; skip it
                Err(SymphoniaError::DecodeError(_)) => continue,
                Err(e) => return Err(AudioError::Decode(format!("decode error: {}", e))),
            };

            Self::append_stereo(decoded, &mut samples);
        }

        Ok(SampleBuffer::new(samples, SampleRate::new(sample_rate)))
    }

    /// Convert a decoded packet to interleaved stereo f32 and append
    ///
    /// Mono is duplicated to both channels; layouts with more than two
    /// channels contribute their front left/right pair. Integer formats are
    /// scaled symmetrically (divide by 2^(N-1)) so the [-1.0, 1.0] range is
    /// symmetric.
    fn append_stereo(decoded: AudioBufferRef<'_>, out: &mut Vec<f32>) {
        match decoded {
            AudioBufferRef::F32(buf) => {
                // F32 audio can carry intersample peaks above full scale
                Self::extend_frames(&buf, out, |s| s.clamp(-1.0, 1.0));
            }
            AudioBufferRef::F64(buf) => {
                Self::extend_frames(&buf, out, |s| (s as f32).clamp(-1.0, 1.0));
            }
            AudioBufferRef::S32(buf) => {
                Self::extend_frames(&buf, out, |s| s as f32 / 2_147_483_648.0);
            }
            AudioBufferRef::S24(buf) => {
                Self::extend_frames(&buf, out, |s| s.inner() as f32 / 8_388_608.0);
            }
            AudioBufferRef::S16(buf) => {
                Self::extend_frames(&buf, out, |s| s as f32 / 32_768.0);
            }
            AudioBufferRef::S8(buf) => {
                Self::extend_frames(&buf, out, |s| s as f32 / 128.0);
            }
            AudioBufferRef::U32(buf) => {
                Self::extend_frames(&buf, out, |s| (s as f32 / u32::MAX as f32) * 2.0 - 1.0);
            }
            AudioBufferRef::U24(buf) => {
                Self::extend_frames(&buf, out, |s| (s.inner() as f32 / 16_777_215.0) * 2.0 - 1.0);
            }
            AudioBufferRef::U16(buf) => {
                Self::extend_frames(&buf, out, |s| (s as f32 / u16::MAX as f32) * 2.0 - 1.0);
            }
            AudioBufferRef::U8(buf) => {
                Self::extend_frames(&buf, out, |s| (s as f32 / u8::MAX as f32) * 2.0 - 1.0);
            }
        }
    }

    fn extend_frames<T, F>(
        buf: &symphonia::core::audio::AudioBuffer<T>,
        out: &mut Vec<f32>,
        normalize: F,
    ) where
        T: symphonia::core::sample::Sample + Copy,
        F: Fn(T) -> f32,
    {
        let channels = buf.spec().channels.count();
        let frames = buf.frames();
        out.reserve(frames * 2);

        match channels {
            0 => {
                out.resize(out.len() + frames * 2, 0.0);
            }
            1 => {
                let mono = buf.chan(0);
                for i in 0..frames {
                    let sample = normalize(mono[i]);
                    out.push(sample);
                    out.push(sample);
                }
            }
            _ => {
                let left = buf.chan(0);
                let right = buf.chan(1);
                for i in 0..frames {
                    out.push(normalize(left[i]));
                    out.push(normalize(right[i]));
                }
            }
        }
    }
}

impl Default for SymphoniaDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioDecoderTrait for SymphoniaDecoder {
    fn decode(&mut self, path: &Path) -> crest_core::Result<SampleBuffer> {
        Ok(Self::decode_file(path)?)
    }

    fn supports_format(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| {
                matches!(ext.to_lowercase().as_str(), "mp3" | "flac" | "ogg" | "wav")
            })
    }
}
