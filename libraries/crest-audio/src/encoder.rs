/// Audio encoder implementation - ffmpeg wrapper with filter-graph support
use crate::error::{AudioError, Result};
use crest_core::{AudioEncoder as AudioEncoderTrait, ExportFormat, SampleBuffer};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Encoder that stages PCM to a temporary WAV and hands it to ffmpeg
///
/// The optional filter descriptor is passed through as an `-af` filter
/// graph, so dynamic-range compression happens entirely inside ffmpeg and
/// never touches the in-memory buffer.
pub struct FfmpegEncoder {
    ffmpeg_path: PathBuf,
}

impl FfmpegEncoder {
    /// Create an encoder that resolves `ffmpeg` from PATH
    pub fn new() -> Self {
        Self {
            ffmpeg_path: PathBuf::from("ffmpeg"),
        }
    }

    /// Create an encoder with an explicit ffmpeg binary path
    pub fn with_path(ffmpeg_path: PathBuf) -> Self {
        Self { ffmpeg_path }
    }

    /// Write the buffer to a temporary 16-bit PCM WAV for ffmpeg to consume
    fn stage_wav(buffer: &SampleBuffer) -> Result<tempfile::NamedTempFile> {
        let staged = tempfile::Builder::new()
            .prefix("crest-export-")
            .suffix(".wav")
            .tempfile()?;

        let spec = hound::WavSpec {
            channels: crest_core::CHANNELS,
            sample_rate: buffer.sample_rate().as_hz(),
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(staged.path(), spec)
            .map_err(|e| AudioError::Encode(format!("failed to stage wav: {}", e)))?;
        for sample in buffer.samples() {
            let quantized = (sample.clamp(-1.0, 1.0) * f32::from(i16::MAX)) as i16;
            writer
                .write_sample(quantized)
                .map_err(|e| AudioError::Encode(format!("failed to stage wav: {}", e)))?;
        }
        writer
            .finalize()
            .map_err(|e| AudioError::Encode(format!("failed to stage wav: {}", e)))?;

        Ok(staged)
    }

    fn encode_impl(
        &self,
        buffer: &SampleBuffer,
        path: &Path,
        format: ExportFormat,
        filter: Option<&str>,
    ) -> Result<()> {
        let staged = Self::stage_wav(buffer)?;

        let mut cmd = Command::new(&self.ffmpeg_path);
        cmd.arg("-i")
            .arg(staged.path())
            .arg("-y") // Overwrite output file
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        if let Some(filter) = filter {
            cmd.arg("-af").arg(filter);
        }

        match format {
            ExportFormat::Ogg => {
                cmd.arg("-f").arg("ogg").arg("-c:a").arg("libvorbis");
            }
            ExportFormat::Flac => {
                cmd.arg("-f").arg("flac");
            }
            ExportFormat::Wav => {
                cmd.arg("-f").arg("wav").arg("-c:a").arg("pcm_s16le");
            }
            ExportFormat::Mp3 => {
                cmd.arg("-b:a").arg("192k").arg("-f").arg("mp3");
            }
        }

        cmd.arg(path);

        let output = cmd.output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AudioError::Encode(format!(
                    "ffmpeg not found at {}",
                    self.ffmpeg_path.display()
                ))
            } else {
                AudioError::Io(e)
            }
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AudioError::FfmpegFailed(stderr.trim().to_string()));
        }

        Ok(())
    }
}

impl Default for FfmpegEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioEncoderTrait for FfmpegEncoder {
    fn encode(
        &mut self,
        buffer: &SampleBuffer,
        path: &Path,
        format: ExportFormat,
        filter: Option<&str>,
    ) -> crest_core::Result<()> {
        Ok(self.encode_impl(buffer, path, format, filter)?)
    }
}
