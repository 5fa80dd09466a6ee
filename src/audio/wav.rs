//! WAV file writer for the rendered tap.
//!
//! Encodes 16-bit mono PCM with the hound crate and replaces the target file
//! atomically, so a failed run never leaves a truncated WAV behind.

use std::fs::{File, Permissions};
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

use hound::{SampleFormat, WavSpec, WavWriter};
use sha2::{Digest, Sha256};
use tempfile::NamedTempFile;

use crate::error::{Result, TapError};

/// Number of audio channels (mono).
pub const CHANNELS: u16 = 1;

/// Bits per PCM sample.
pub const BITS_PER_SAMPLE: u16 = 16;

/// Mode given to newly created output files on unix.
#[cfg(unix)]
pub const NEW_FILE_MODE: u32 = 0o644;

/// Summary of a WAV file that was written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenWav {
    /// Final location of the file.
    pub path: PathBuf,
    /// Number of frames in the data chunk.
    pub sample_count: usize,
    /// Total file size in bytes, header included.
    pub byte_len: usize,
    /// First 8 bytes of the SHA-256 of the file contents, hex encoded.
    pub fingerprint: String,
}

/// Returns the hound spec for mono 16-bit integer PCM.
pub fn pcm16_spec(sample_rate: u32) -> WavSpec {
    WavSpec {
        channels: CHANNELS,
        sample_rate,
        bits_per_sample: BITS_PER_SAMPLE,
        sample_format: SampleFormat::Int,
    }
}

/// Encodes samples into an in-memory WAV file.
///
/// Returns the complete file contents, header included.
pub fn encode_wav(samples: &[i16], sample_rate: u32) -> Result<Vec<u8>> {
    let mut buffer = Vec::with_capacity(44 + samples.len() * 2);

    {
        let mut writer = WavWriter::new(Cursor::new(&mut buffer), pcm16_spec(sample_rate))
            .map_err(|e| TapError::output_write_failed("Failed to create WAV writer", e))?;

        for &sample in samples {
            writer
                .write_sample(sample)
                .map_err(|e| TapError::output_write_failed("Failed to write sample", e))?;
        }

        writer
            .finalize()
            .map_err(|e| TapError::output_write_failed("Failed to finalize WAV data", e))?;
    }

    Ok(buffer)
}

/// Writes samples to a WAV file at `path`, replacing any existing file.
///
/// The bytes go to a temporary file in the same directory first and are
/// renamed over `path` only once fully written and synced. The directory
/// must already exist.
///
/// # Example
///
/// ```ignore
/// use tapgen::audio::write_wav;
///
/// let written = write_wav(&[0, 1200, -1200, 0], Path::new("/tmp/tap.wav"), 44100)?;
/// println!("{}", written.fingerprint);
/// ```
pub fn write_wav(samples: &[i16], path: &Path, sample_rate: u32) -> Result<WrittenWav> {
    let bytes = encode_wav(samples, sample_rate)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| {
        TapError::output_write_failed(
            format!("Failed to create temporary file in {}", dir.display()),
            e,
        )
    })?;

    tmp.write_all(&bytes)
        .and_then(|_| tmp.as_file().sync_all())
        .map_err(|e| {
            TapError::output_write_failed(
                format!("Failed to write {}", tmp.path().display()),
                e,
            )
        })?;

    // Temp files are created 0600; give the result the target's mode instead.
    let permissions = output_permissions(path, tmp.as_file())?;
    tmp.as_file().set_permissions(permissions).map_err(|e| {
        TapError::output_write_failed(
            format!("Failed to set permissions on {}", tmp.path().display()),
            e,
        )
    })?;

    // Dropping the temp file on any earlier return removes it.
    tmp.persist(path).map_err(|e| {
        TapError::output_write_failed(format!("Failed to replace {}", path.display()), e.error)
    })?;

    Ok(WrittenWav {
        path: path.to_path_buf(),
        sample_count: samples.len(),
        byte_len: bytes.len(),
        fingerprint: fingerprint(&bytes),
    })
}

/// Permissions the written file should end up with.
///
/// An existing target keeps its mode. A new file gets 0644 on unix.
fn output_permissions(path: &Path, tmp: &File) -> Result<Permissions> {
    if let Ok(existing) = std::fs::metadata(path) {
        return Ok(existing.permissions());
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let _ = tmp;
        Ok(Permissions::from_mode(NEW_FILE_MODE))
    }

    #[cfg(not(unix))]
    {
        tmp.metadata()
            .map(|m| m.permissions())
            .map_err(|e| TapError::output_write_failed("Failed to read temp file metadata", e))
    }
}

/// Short content fingerprint: first 8 bytes of SHA-256, hex encoded.
pub fn fingerprint(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    hex::encode(&digest[..8])
}

/// Calculates the duration of audio in seconds from sample count.
pub fn samples_to_duration(sample_count: usize, sample_rate: u32) -> f64 {
    sample_count as f64 / sample_rate as f64
}
