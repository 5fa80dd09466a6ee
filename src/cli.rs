//! Command-line interface.
//!
//! Every flag is optional: a bare `tapgen` renders the stock tap to
//! `Resources/sounds/tap.wav`. Values are layered as defaults, then the
//! `--config` file, then individual flags.

use std::path::PathBuf;

use clap::Parser;

use crate::config::ToneConfig;
use crate::error::Result;

/// tapgen: renders a short decaying-sine tap click to a WAV file
#[derive(Parser, Debug, Default)]
#[command(name = "tapgen")]
#[command(about = "Renders a short decaying-sine tap click to a 16-bit mono WAV file")]
#[command(version)]
pub struct Cli {
    /// JSON file with tone parameters (missing fields use defaults)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output WAV file path (its directory must exist)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Sample rate in Hz
    #[arg(long)]
    pub sample_rate: Option<u32>,

    /// Click length in seconds
    #[arg(short, long)]
    pub duration: Option<f64>,

    /// Tone frequency in Hz
    #[arg(short, long)]
    pub frequency: Option<f64>,

    /// Peak amplitude (0.0-1.0)
    #[arg(short, long)]
    pub amplitude: Option<f64>,

    /// Envelope decay coefficient per second
    #[arg(long)]
    pub decay: Option<f64>,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Builds the effective tone config.
    ///
    /// Does not validate; synthesis does that before rendering.
    pub fn resolve_config(&self) -> Result<ToneConfig> {
        let mut config = match self.config {
            Some(ref path) => ToneConfig::from_file(path)?,
            None => ToneConfig::default(),
        };

        if let Some(ref output) = self.output {
            config.output_path = output.clone();
        }
        if let Some(sample_rate) = self.sample_rate {
            config.sample_rate = sample_rate;
        }
        if let Some(duration) = self.duration {
            config.duration_sec = duration;
        }
        if let Some(frequency) = self.frequency {
            config.frequency = frequency;
        }
        if let Some(amplitude) = self.amplitude {
            config.amplitude = amplitude;
        }
        if let Some(decay) = self.decay {
            config.decay_rate = decay;
        }

        Ok(config)
    }
}
