//! Tone configuration.
//!
//! Holds every parameter that shapes the tap sound and where it is written.
//! The defaults reproduce the stock tap click, so a run with no config
//! always produces the same file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, TapError};

/// Default sample rate in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;

/// Default click length in seconds.
pub const DEFAULT_DURATION_SEC: f64 = 0.12;

/// Default tone frequency in Hz.
pub const DEFAULT_FREQUENCY: f64 = 1200.0;

/// Default peak amplitude before the envelope is applied.
pub const DEFAULT_AMPLITUDE: f64 = 0.5;

/// Default exponential decay coefficient (per second).
pub const DEFAULT_DECAY_RATE: f64 = 30.0;

/// Default output location, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "Resources/sounds/tap.wav";

/// Largest sample count whose 16-bit data chunk still fits a RIFF size field.
pub const MAX_SAMPLES: u64 = (u32::MAX as u64 - 44) / 2;

/// Parameters for a single tap render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToneConfig {
    /// Samples per second.
    pub sample_rate: u32,

    /// Length of the click in seconds. Zero yields an empty data chunk.
    pub duration_sec: f64,

    /// Sine frequency in Hz.
    pub frequency: f64,

    /// Peak scale factor, 0.0-1.0.
    pub amplitude: f64,

    /// Coefficient `k` of the `exp(-k * t)` envelope.
    pub decay_rate: f64,

    /// Where the WAV file is written. The parent directory must already exist.
    pub output_path: PathBuf,
}

impl Default for ToneConfig {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            duration_sec: DEFAULT_DURATION_SEC,
            frequency: DEFAULT_FREQUENCY,
            amplitude: DEFAULT_AMPLITUDE,
            decay_rate: DEFAULT_DECAY_RATE,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

impl ToneConfig {
    /// Creates a ToneConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a config from a JSON file.
    ///
    /// Fields missing from the file keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let display = path.display().to_string();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| TapError::config_load_failed(display.clone(), e))?;
        serde_json::from_str(&contents).map_err(|e| TapError::config_load_failed(display, e))
    }

    /// Number of samples to render: `floor(sample_rate * duration)`.
    ///
    /// Only meaningful on a config that passed [`ToneConfig::validate`].
    pub fn sample_count(&self) -> usize {
        (self.sample_rate as f64 * self.duration_sec).floor() as usize
    }

    /// Returns the Nyquist frequency for the configured sample rate.
    pub fn nyquist(&self) -> f64 {
        self.sample_rate as f64 / 2.0
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.sample_rate == 0 {
            return Err(TapError::invalid_config("sample_rate must be > 0"));
        }

        if !self.duration_sec.is_finite() || self.duration_sec < 0.0 {
            return Err(TapError::invalid_config(format!(
                "duration_sec must be a finite value >= 0 (got {})",
                self.duration_sec
            )));
        }

        if !self.frequency.is_finite() || self.frequency <= 0.0 {
            return Err(TapError::invalid_config(format!(
                "frequency must be a finite value > 0 (got {})",
                self.frequency
            )));
        }

        if !(0.0..=1.0).contains(&self.amplitude) {
            return Err(TapError::invalid_config(format!(
                "amplitude must be between 0.0 and 1.0 (got {})",
                self.amplitude
            )));
        }

        if !self.decay_rate.is_finite() || self.decay_rate < 0.0 {
            return Err(TapError::invalid_config(format!(
                "decay_rate must be a finite value >= 0 (got {})",
                self.decay_rate
            )));
        }

        if self.output_path.as_os_str().is_empty() {
            return Err(TapError::invalid_config("output_path cannot be empty"));
        }

        let samples = (self.sample_rate as f64 * self.duration_sec).floor();
        if samples > MAX_SAMPLES as f64 {
            return Err(TapError::invalid_config(format!(
                "{} samples exceed the WAV size limit of {}",
                samples, MAX_SAMPLES
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use tempfile::tempdir;

    #[test]
    fn defaults_match_stock_tap() {
        let config = ToneConfig::new();
        assert_eq!(config.sample_rate, 44100);
        assert_eq!(config.duration_sec, 0.12);
        assert_eq!(config.frequency, 1200.0);
        assert_eq!(config.amplitude, 0.5);
        assert_eq!(config.decay_rate, 30.0);
        assert_eq!(config.output_path, PathBuf::from("Resources/sounds/tap.wav"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn default_sample_count() {
        assert_eq!(ToneConfig::new().sample_count(), 5292);
    }

    #[test]
    fn sample_count_floors() {
        let config = ToneConfig {
            sample_rate: 8000,
            duration_sec: 0.00099,
            ..Default::default()
        };
        assert_eq!(config.sample_count(), 7);

        let empty = ToneConfig {
            duration_sec: 0.0,
            ..Default::default()
        };
        assert_eq!(empty.sample_count(), 0);
        assert!(empty.validate().is_ok());
    }

    #[test]
    fn config_validation() {
        let bad = [
            ToneConfig {
                sample_rate: 0,
                ..Default::default()
            },
            ToneConfig {
                duration_sec: -0.1,
                ..Default::default()
            },
            ToneConfig {
                duration_sec: f64::NAN,
                ..Default::default()
            },
            ToneConfig {
                frequency: 0.0,
                ..Default::default()
            },
            ToneConfig {
                amplitude: 1.5,
                ..Default::default()
            },
            ToneConfig {
                amplitude: f64::NAN,
                ..Default::default()
            },
            ToneConfig {
                decay_rate: -1.0,
                ..Default::default()
            },
            ToneConfig {
                output_path: PathBuf::new(),
                ..Default::default()
            },
            ToneConfig {
                sample_rate: 192_000,
                duration_sec: 1.0e6,
                ..Default::default()
            },
        ];

        for config in bad {
            let err = config.validate().unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidConfig, "{:?}", config);
        }

        let full_scale = ToneConfig {
            amplitude: 1.0,
            decay_rate: 0.0,
            ..Default::default()
        };
        assert!(full_scale.validate().is_ok());
    }

    #[test]
    fn from_file_fills_missing_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tone.json");
        std::fs::write(&path, r#"{"frequency": 880.0, "output_path": "click.wav"}"#).unwrap();

        let config = ToneConfig::from_file(&path).unwrap();
        assert_eq!(config.frequency, 880.0);
        assert_eq!(config.output_path, PathBuf::from("click.wav"));
        assert_eq!(config.sample_rate, DEFAULT_SAMPLE_RATE);
        assert_eq!(config.decay_rate, DEFAULT_DECAY_RATE);
    }

    #[test]
    fn from_file_errors() {
        let dir = tempdir().unwrap();

        let missing = ToneConfig::from_file(&dir.path().join("nope.json")).unwrap_err();
        assert_eq!(missing.code, ErrorCode::ConfigLoadFailed);
        assert_eq!(missing.io_kind(), Some(std::io::ErrorKind::NotFound));

        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ sample_rate: ").unwrap();
        let malformed = ToneConfig::from_file(&path).unwrap_err();
        assert_eq!(malformed.code, ErrorCode::ConfigLoadFailed);
    }

    #[test]
    fn nyquist_is_half_rate() {
        assert_eq!(ToneConfig::new().nyquist(), 22050.0);
    }
}
