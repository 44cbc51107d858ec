//! Dynamic-range compressor controls
//!
//! The compressor is never applied to the in-memory buffer. This module
//! validates the four UI-facing controls and renders them into an
//! `acompressor` filter-graph descriptor executed by the encoder
//! collaborator during export.

use serde::{Deserialize, Serialize};

/// Compressor control values
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompressorSettings {
    /// Threshold in dB (-60 to 0); signals above it are compressed
    pub threshold_db: i32,

    /// Ratio (1 to 20), e.g. 4 means 4:1 compression
    pub ratio: u32,

    /// Attack time in seconds (0.001 to 0.2)
    pub attack_s: f32,

    /// Release time in seconds (0.01 to 1.0)
    pub release_s: f32,
}

impl CompressorSettings {
    /// Create default settings: threshold -20 dB, ratio 4:1, attack 20 ms,
    /// release 200 ms
    pub fn new() -> Self {
        Self {
            threshold_db: -20,
            ratio: 4,
            attack_s: 0.02,
            release_s: 0.2,
        }
    }

    /// Clamp all controls into their slider ranges
    ///
    /// The UI exposes these as sliders, so out-of-domain values cannot
    /// normally occur; they are clamped defensively rather than rejected.
    pub fn validate(&mut self) {
        self.threshold_db = self.threshold_db.clamp(-60, 0);
        self.ratio = self.ratio.clamp(1, 20);
        self.attack_s = if self.attack_s.is_nan() {
            0.02
        } else {
            self.attack_s.clamp(0.001, 0.2)
        };
        self.release_s = if self.release_s.is_nan() {
            0.2
        } else {
            self.release_s.clamp(0.01, 1.0)
        };
    }
}

impl Default for CompressorSettings {
    fn default() -> Self {
        Self::new()
    }
}

/// Compressor specification with an engaged/disengaged lifecycle
///
/// A descriptor exists only after an explicit [`set`](Self::set); default
/// parameters alone do not imply an engaged compressor, and
/// [`reset`](Self::reset) discards any rendered descriptor so a subsequent
/// export omits the filter argument entirely.
#[derive(Debug, Clone)]
pub struct CompressorSpec {
    settings: CompressorSettings,
    engaged: bool,
}

impl CompressorSpec {
    /// Create a disengaged spec at default settings
    pub fn new() -> Self {
        Self {
            settings: CompressorSettings::new(),
            engaged: false,
        }
    }

    /// Store (clamped) settings and engage the compressor
    pub fn set(&mut self, mut settings: CompressorSettings) {
        settings.validate();
        self.settings = settings;
        self.engaged = true;
    }

    /// Render the filter-graph descriptor, if engaged
    pub fn render(&self) -> Option<String> {
        self.engaged.then(|| {
            format!(
                "acompressor=threshold={}dB:ratio={}:attack={}:release={}",
                self.settings.threshold_db,
                self.settings.ratio,
                self.settings.attack_s,
                self.settings.release_s
            )
        })
    }

    /// Restore defaults and discard the descriptor
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Current control values
    pub fn settings(&self) -> CompressorSettings {
        self.settings
    }

    /// Whether a descriptor will be rendered
    pub fn is_engaged(&self) -> bool {
        self.engaged
    }
}

impl Default for CompressorSpec {
    fn default() -> Self {
        Self::new()
    }
}
