//! Decaying sine tone generator.
//!
//! Each sample is `amplitude * exp(-decay * t) * sin(2π f t)`, scaled to the
//! signed 16-bit range.

use std::f64::consts::PI;

use log::{debug, warn};

use crate::config::ToneConfig;
use crate::error::Result;

/// Scale factor mapping a unit sample to 16-bit PCM.
pub const FULL_SCALE: f64 = i16::MAX as f64;

/// Exponential envelope gain at time `t` seconds.
///
/// Starts at 1.0 and decays toward 0. A zero rate holds at 1.0.
pub fn envelope(decay_rate: f64, t: f64) -> f64 {
    (-decay_rate * t).exp()
}

/// Converts a unit-range sample to 16-bit PCM, rounding to nearest.
///
/// Out-of-range input is clamped instead of wrapping.
pub fn quantize(value: f64) -> i16 {
    (value * FULL_SCALE)
        .round()
        .clamp(i16::MIN as f64, i16::MAX as f64) as i16
}

/// Renders the tap tone described by `config`.
///
/// The config is validated before any samples are computed. Output is
/// deterministic: identical configs yield identical samples.
///
/// # Example
///
/// ```ignore
/// use tapgen::{synth::synthesize, ToneConfig};
///
/// let samples = synthesize(&ToneConfig::default())?;
/// assert_eq!(samples.len(), 5292);
/// ```
pub fn synthesize(config: &ToneConfig) -> Result<Vec<i16>> {
    config.validate()?;

    if config.frequency > config.nyquist() {
        warn!(
            "frequency {} Hz is above the Nyquist limit of {} Hz and will alias",
            config.frequency,
            config.nyquist()
        );
    }

    let count = config.sample_count();
    let rate = config.sample_rate as f64;
    let omega = 2.0 * PI * config.frequency;

    let samples: Vec<i16> = (0..count)
        .map(|i| {
            let t = i as f64 / rate;
            let raw = config.amplitude * envelope(config.decay_rate, t) * (omega * t).sin();
            quantize(raw)
        })
        .collect();

    debug!(
        "synthesized {} samples ({} Hz tone at {} Hz)",
        samples.len(),
        config.frequency,
        config.sample_rate
    );

    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    /// Largest magnitude sample `index` may take under the envelope.
    fn peak_bound(config: &ToneConfig, index: usize) -> i16 {
        let t = index as f64 / config.sample_rate as f64;
        quantize(config.amplitude * envelope(config.decay_rate, t))
    }

    #[test]
    fn default_tap_shape() {
        let samples = synthesize(&ToneConfig::default()).unwrap();
        assert_eq!(samples.len(), 5292);
        assert_eq!(samples[0], 0);
        assert!(samples.iter().any(|&s| s != 0));
    }

    #[test]
    fn samples_stay_under_envelope() {
        let config = ToneConfig::default();
        let samples = synthesize(&config).unwrap();

        let mut previous_bound = i16::MAX;
        for (i, &sample) in samples.iter().enumerate() {
            let bound = peak_bound(&config, i);
            assert!(bound <= previous_bound, "envelope rose at sample {}", i);
            assert!(
                (sample as i32).abs() <= bound as i32,
                "sample {} = {} exceeds bound {}",
                i,
                sample,
                bound
            );
            previous_bound = bound;
        }
    }

    #[test]
    fn tail_is_quieter_than_head() {
        let samples = synthesize(&ToneConfig::default()).unwrap();
        let peak = |window: &[i16]| window.iter().map(|s| (*s as i32).abs()).max().unwrap();
        assert!(peak(&samples[..200]) > peak(&samples[samples.len() - 200..]) * 10);
    }

    #[test]
    fn quarter_period_hits_full_scale() {
        let config = ToneConfig {
            sample_rate: 4800,
            duration_sec: 0.001,
            frequency: 1200.0,
            amplitude: 1.0,
            decay_rate: 0.0,
            ..Default::default()
        };
        let samples = synthesize(&config).unwrap();
        assert_eq!(samples[..4], [0, 32767, 0, -32767]);
    }

    #[test]
    fn synthesis_is_deterministic() {
        let config = ToneConfig::default();
        assert_eq!(synthesize(&config).unwrap(), synthesize(&config).unwrap());
    }

    #[test]
    fn zero_duration_is_empty() {
        let config = ToneConfig {
            duration_sec: 0.0,
            ..Default::default()
        };
        assert!(synthesize(&config).unwrap().is_empty());
    }

    #[test]
    fn zero_amplitude_is_silent() {
        let config = ToneConfig {
            amplitude: 0.0,
            ..Default::default()
        };
        assert!(synthesize(&config).unwrap().iter().all(|&s| s == 0));
    }

    #[test]
    fn invalid_config_rejected_before_rendering() {
        let config = ToneConfig {
            sample_rate: 0,
            ..Default::default()
        };
        let err = synthesize(&config).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidConfig);
    }

    #[test]
    fn quantize_rounds_and_clamps() {
        assert_eq!(quantize(0.0), 0);
        assert_eq!(quantize(1.0), 32767);
        assert_eq!(quantize(-1.0), -32767);
        assert_eq!(quantize(0.5), 16384);
        assert_eq!(quantize(2.0), i16::MAX);
        assert_eq!(quantize(-2.0), i16::MIN);
    }

    #[test]
    fn envelope_decays() {
        assert_eq!(envelope(30.0, 0.0), 1.0);
        assert_eq!(envelope(0.0, 5.0), 1.0);
        assert!(envelope(30.0, 0.1) < envelope(30.0, 0.05));
        assert!((envelope(30.0, 0.1) - (-3.0f64).exp()).abs() < 1e-12);
    }
}
