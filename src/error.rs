//! Error types for tapgen.
//!
//! Every failure carries an [`ErrorCode`] so callers can tell a bad
//! configuration apart from a failed write.

use std::fmt;

/// Error codes for the ways a render can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Tone parameters are out of range.
    /// Trigger: zero sample rate, negative duration, amplitude above 1.0, etc.
    InvalidConfig,

    /// A config file could not be read or parsed.
    /// Trigger: missing file, malformed JSON, wrong field types.
    ConfigLoadFailed,

    /// The WAV file could not be written.
    /// Trigger: missing directory, permission denied, disk full.
    OutputWriteFailed,
}

impl ErrorCode {
    /// Returns the string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidConfig => "INVALID_CONFIG",
            ErrorCode::ConfigLoadFailed => "CONFIG_LOAD_FAILED",
            ErrorCode::OutputWriteFailed => "OUTPUT_WRITE_FAILED",
        }
    }

    /// Returns a recovery hint suggesting how to resolve this error.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCode::InvalidConfig => {
                "Use a sample rate > 0, duration >= 0, frequency > 0, \
                 amplitude within 0.0-1.0 and decay >= 0"
            }
            ErrorCode::ConfigLoadFailed => {
                "Check that the config path exists and contains a JSON object \
                 (e.g., {\"frequency\": 1200.0, \"duration_sec\": 0.12})"
            }
            ErrorCode::OutputWriteFailed => {
                "Make sure the output directory exists and is writable; \
                 it is not created automatically"
            }
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Main error type for tapgen operations.
#[derive(Debug)]
pub struct TapError {
    /// The error code identifying the type of error.
    pub code: ErrorCode,
    /// Human-readable error message with context.
    pub message: String,
    /// Optional underlying cause of the error.
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl TapError {
    /// Creates a new TapError with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new TapError with an underlying cause.
    pub fn with_source(
        code: ErrorCode,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates an INVALID_CONFIG error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::InvalidConfig,
            format!("Invalid tone config: {}", reason.into()),
        )
    }

    /// Creates a CONFIG_LOAD_FAILED error wrapping the underlying cause.
    pub fn config_load_failed(
        path: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::with_source(
            ErrorCode::ConfigLoadFailed,
            format!("Failed to load config {}: {}", path.into(), source),
            source,
        )
    }

    /// Creates an OUTPUT_WRITE_FAILED error wrapping the underlying cause.
    pub fn output_write_failed(
        reason: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::with_source(
            ErrorCode::OutputWriteFailed,
            format!("{}: {}", reason.into(), source),
            source,
        )
    }

    /// Returns the underlying I/O error kind, if this error was caused by one.
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        let source = self.source.as_ref()?;
        if let Some(io) = source.downcast_ref::<std::io::Error>() {
            return Some(io.kind());
        }
        match source.downcast_ref::<hound::Error>() {
            Some(hound::Error::IoError(io)) => Some(io.kind()),
            _ => None,
        }
    }
}

impl fmt::Display for TapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}. Recovery: {}",
            self.code,
            self.message,
            self.code.recovery_hint()
        )
    }
}

impl std::error::Error for TapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Result type alias using TapError.
pub type Result<T> = std::result::Result<T, TapError>;
