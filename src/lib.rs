//! tapgen: renders the tap click sound effect.
//!
//! The tap is a short sine tone under an exponential decay envelope,
//! quantized to 16-bit mono PCM and written as a WAV file.
//!
//! # Modules
//!
//! - [`config`]: Tone parameters and config file loading (ToneConfig)
//! - [`synth`]: Sample generation
//! - [`audio`]: WAV encoding and atomic file output
//! - [`error`]: Error types and codes (TapError, ErrorCode)
//!
//! # Example
//!
//! ```rust,ignore
//! use tapgen::{render, ToneConfig};
//!
//! let config = ToneConfig {
//!     frequency: 900.0,
//!     output_path: "click.wav".into(),
//!     ..Default::default()
//! };
//! let written = render(&config)?;
//! assert_eq!(written.sample_count, 5292);
//! ```

pub mod audio;
pub mod cli;
pub mod config;
pub mod error;
pub mod synth;

// Re-export commonly used types at crate root for convenience
pub use audio::WrittenWav;
pub use config::ToneConfig;
pub use error::{ErrorCode, Result, TapError};

/// Validates `config`, synthesizes the tone and writes it to
/// `config.output_path`.
///
/// Nothing is written if validation fails.
pub fn render(config: &ToneConfig) -> Result<WrittenWav> {
    let samples = synth::synthesize(config)?;
    audio::write_wav(&samples, &config.output_path, config.sample_rate)
}
