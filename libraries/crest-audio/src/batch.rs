//! Batch format conversion
//!
//! Converts a set of input files to one target format, each file
//! independently. A failing file is logged and counted but never aborts the
//! rest of the batch.

use crest_core::{AudioDecoder, AudioEncoder, CrestError, ExportFormat, Result};
use std::path::{Path, PathBuf};

/// Outcome of a batch conversion run
#[derive(Debug, Default)]
pub struct BatchSummary {
    /// Number of input files processed
    pub total: usize,
    /// Files converted successfully
    pub converted: usize,
    /// Files that failed to convert
    pub failed: usize,
    /// Per-file failure reasons, in input order
    pub errors: Vec<(PathBuf, String)>,
}

/// Batch converter over a decoder/encoder pair
pub struct BatchConverter<D, E> {
    decoder: D,
    encoder: E,
}

impl<D: AudioDecoder, E: AudioEncoder> BatchConverter<D, E> {
    /// Create a batch converter
    pub fn new(decoder: D, encoder: E) -> Self {
        Self { decoder, encoder }
    }

    /// Convert every input into `out_dir`, named after the input stem
    ///
    /// Partial-failure tolerant: each file is decoded and re-encoded on its
    /// own, failures accumulate in the summary.
    pub fn convert_all(
        &mut self,
        inputs: &[PathBuf],
        out_dir: &Path,
        format: ExportFormat,
    ) -> BatchSummary {
        let mut summary = BatchSummary {
            total: inputs.len(),
            ..BatchSummary::default()
        };

        for input in inputs {
            match self.convert_one(input, out_dir, format) {
                Ok(output) => {
                    tracing::info!(
                        input = %input.display(),
                        output = %output.display(),
                        "converted file"
                    );
                    summary.converted += 1;
                }
                Err(e) => {
                    tracing::error!(input = %input.display(), error = %e, "failed to convert");
                    summary.errors.push((input.clone(), e.to_string()));
                    summary.failed += 1;
                }
            }
        }

        summary
    }

    fn convert_one(
        &mut self,
        input: &Path,
        out_dir: &Path,
        format: ExportFormat,
    ) -> Result<PathBuf> {
        let stem = input.file_stem().ok_or_else(|| {
            CrestError::invalid_input(format!("no file name in {}", input.display()))
        })?;
        let output = out_dir.join(stem).with_extension(format.extension());

        let buffer = self.decoder.decode(input)?;
        // Batch exports never carry a compressor filter
        self.encoder.encode(&buffer, &output, format, None)?;

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crest_core::{SampleBuffer, SampleRate};
    use std::collections::HashSet;

    struct StubDecoder {
        fail_on: HashSet<PathBuf>,
    }

    impl AudioDecoder for StubDecoder {
        fn decode(&mut self, path: &Path) -> Result<SampleBuffer> {
            if self.fail_on.contains(path) {
                return Err(CrestError::decode(format!("bad file {}", path.display())));
            }
            Ok(SampleBuffer::new(vec![0.0; 4], SampleRate::CD_QUALITY))
        }

        fn supports_format(&self, _path: &Path) -> bool {
            true
        }
    }

    #[derive(Default)]
    struct RecordingEncoder {
        written: Vec<(PathBuf, ExportFormat, Option<String>)>,
    }

    impl AudioEncoder for RecordingEncoder {
        fn encode(
            &mut self,
            _buffer: &SampleBuffer,
            path: &Path,
            format: ExportFormat,
            filter: Option<&str>,
        ) -> Result<()> {
            self.written
                .push((path.to_path_buf(), format, filter.map(String::from)));
            Ok(())
        }
    }

    #[test]
    fn one_bad_file_does_not_stop_the_batch() {
        let inputs = vec![
            PathBuf::from("/music/a.ogg"),
            PathBuf::from("/music/broken.ogg"),
            PathBuf::from("/music/c.flac"),
        ];
        let decoder = StubDecoder {
            fail_on: HashSet::from([PathBuf::from("/music/broken.ogg")]),
        };
        let mut converter = BatchConverter::new(decoder, RecordingEncoder::default());

        let summary = converter.convert_all(&inputs, Path::new("/out"), ExportFormat::Flac);

        assert_eq!(summary.total, 3);
        assert_eq!(summary.converted, 2);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.errors.len(), 1);
        assert_eq!(summary.errors[0].0, PathBuf::from("/music/broken.ogg"));
    }

    #[test]
    fn outputs_named_after_input_stem() {
        let decoder = StubDecoder {
            fail_on: HashSet::new(),
        };
        let mut converter = BatchConverter::new(decoder, RecordingEncoder::default());

        converter.convert_all(
            &[PathBuf::from("/music/track.ogg")],
            Path::new("/out"),
            ExportFormat::Wav,
        );

        let (path, format, filter) = &converter.encoder.written[0];
        assert_eq!(path, &PathBuf::from("/out/track.wav"));
        assert_eq!(*format, ExportFormat::Wav);
        assert_eq!(*filter, None);
    }

    #[test]
    fn empty_batch_is_an_empty_summary() {
        let decoder = StubDecoder {
            fail_on: HashSet::new(),
        };
        let mut converter = BatchConverter::new(decoder, RecordingEncoder::default());

        let summary = converter.convert_all(&[], Path::new("/out"), ExportFormat::Ogg);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.converted, 0);
        assert_eq!(summary.failed, 0);
    }
}
