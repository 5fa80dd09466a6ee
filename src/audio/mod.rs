//! Audio output module.
//!
//! Provides WAV encoding and atomic file writing for rendered taps.

pub mod wav;

// Re-export commonly used items
pub use wav::{
    encode_wav, fingerprint, pcm16_spec, samples_to_duration, write_wav, WrittenWav,
    BITS_PER_SAMPLE, CHANNELS,
};
