//! Error types for LTC generation.

use thiserror::Error;

/// Result type for LTC operations.
pub type LtcResult<T> = Result<T, LtcError>;

/// Errors that can occur during LTC generation.
#[derive(Debug, Error)]
pub enum LtcError {
    /// Unknown frame-rate label.
    #[error("unknown frame rate: '{label}'")]
    InvalidRate {
        /// The label that failed to parse.
        label: String,
    },

    /// Unsupported sample rate.
    #[error("invalid sample rate: {rate} Hz")]
    InvalidSampleRate {
        /// The invalid sample rate.
        rate: u32,
    },

    /// Unsupported bit depth.
    #[error("invalid bit depth: {bits} (expected 16 or 24)")]
    InvalidBitDepth {
        /// The invalid bit depth.
        bits: u16,
    },

    /// Start timecode violates a field range or the drop-frame rule.
    #[error("invalid start timecode: {message}")]
    InvalidStart {
        /// Error message.
        message: String,
    },

    /// Duration is non-finite, non-positive, or too long to serialize.
    #[error("invalid duration: {duration} seconds")]
    InvalidDuration {
        /// The invalid duration.
        duration: f64,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl LtcError {
    /// Creates an invalid rate error.
    pub fn invalid_rate(label: impl Into<String>) -> Self {
        Self::InvalidRate {
            label: label.into(),
        }
    }

    /// Creates an invalid start-timecode error.
    pub fn invalid_start(message: impl Into<String>) -> Self {
        Self::InvalidStart {
            message: message.into(),
        }
    }
}
