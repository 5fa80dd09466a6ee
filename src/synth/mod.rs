//! Tone synthesis module.
//!
//! Renders the decaying sine click as 16-bit PCM samples.

pub mod tone;

// Re-export commonly used items
pub use tone::{envelope, quantize, synthesize, FULL_SCALE};
