//! Serializable payloads for `--json` output.

use serde::Serialize;

/// Stable machine-readable error codes.
pub mod error_codes {
    /// A flag value failed parsing or host-side validation.
    pub const INVALID_ARGUMENT: &str = "LTC_001";
    /// The core rejected the config or the write failed.
    pub const GENERATION_FAILED: &str = "LTC_002";
}

/// One machine-readable error.
#[derive(Debug, Serialize)]
pub struct JsonError {
    /// Stable error code.
    pub code: &'static str,
    /// Human-readable message.
    pub message: String,
}

impl JsonError {
    /// Creates an error payload.
    pub fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Output of the `generate` command.
#[derive(Debug, Serialize)]
pub struct GenerateOutput {
    /// Whether generation succeeded.
    pub ok: bool,
    /// Path of the written file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Number of codewords synthesized.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frames: Option<usize>,
    /// Number of audio samples written.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub samples: Option<usize>,
    /// Duration of the written audio in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<f64>,
    /// BLAKE3 hash of the PCM payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pcm_hash: Option<String>,
    /// Errors, present on failure.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<JsonError>,
}

impl GenerateOutput {
    /// Builds a success payload from a generation result.
    pub fn success(result: &ltcgen_core::GenerateResult) -> Self {
        Self {
            ok: true,
            path: Some(result.path.display().to_string()),
            frames: Some(result.frames_synthesized),
            samples: Some(result.num_samples),
            duration_seconds: Some(result.duration_seconds),
            pcm_hash: Some(result.pcm_hash.clone()),
            errors: Vec::new(),
        }
    }

    /// Builds a failure payload.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            ok: false,
            path: None,
            frames: None,
            samples: None,
            duration_seconds: None,
            pcm_hash: None,
            errors,
        }
    }
}

/// One row of the `rates` listing.
#[derive(Debug, Serialize)]
pub struct RateEntry {
    /// Machine label accepted by `--rate`.
    pub label: &'static str,
    /// Human-readable display name.
    pub display: &'static str,
    /// Exact frames per second.
    pub fps: f64,
    /// Whether the rate counts drop-frame.
    pub drop_frame: bool,
}

/// Output of the `rates` command.
#[derive(Debug, Serialize)]
pub struct RatesOutput {
    /// Supported frame rates in catalog order.
    pub rates: Vec<RateEntry>,
}

/// Output of the `formats` command.
#[derive(Debug, Serialize)]
pub struct FormatsOutput {
    /// Supported sample rates in Hz.
    pub sample_rates: &'static [u32],
    /// Supported bit depths.
    pub bit_depths: &'static [u16],
}
