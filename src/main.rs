//! tapgen: renders the tap click WAV.
//!
//! With no arguments, writes the stock tap to `Resources/sounds/tap.wav`.

use std::time::Instant;

use log::info;

use tapgen::audio::samples_to_duration;
use tapgen::cli::Cli;
use tapgen::error::Result;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse_args();
    let config = cli.resolve_config()?;

    info!(
        "rendering {} Hz tap: {}s at {} Hz, amplitude {}, decay {}",
        config.frequency,
        config.duration_sec,
        config.sample_rate,
        config.amplitude,
        config.decay_rate
    );

    let start_time = Instant::now();
    let written = tapgen::render(&config)?;

    info!(
        "{} generated: {} samples ({:.3}s), {} bytes, sha256 {} in {:.1}ms",
        written.path.display(),
        written.sample_count,
        samples_to_duration(written.sample_count, config.sample_rate),
        written.byte_len,
        written.fingerprint,
        start_time.elapsed().as_secs_f64() * 1000.0
    );

    Ok(())
}
