//! Main entry point for LTC generation.
//!
//! A single synchronous pass: for every frame, ask the counter for the
//! current timecode, assemble its codeword, modulate it, and append the
//! samples to the output buffer; then quantize and serialize the buffer
//! atomically. No state survives between calls, so identical configs
//! always produce identical files.

use std::path::PathBuf;

use crate::biphase::BiphaseEncoder;
use crate::codeword::Codeword;
use crate::config::LtcConfig;
use crate::error::LtcResult;
use crate::wav::{self, WavResult};

/// Result of one generation run.
#[derive(Debug)]
pub struct GenerateResult {
    /// Path the file was written to.
    pub path: PathBuf,
    /// Number of codewords synthesized (the last may be truncated).
    pub frames_synthesized: usize,
    /// Number of audio samples written.
    pub num_samples: usize,
    /// Duration of the written audio in seconds.
    pub duration_seconds: f64,
    /// BLAKE3 hash of the PCM payload.
    pub pcm_hash: String,
}

/// Generates an LTC WAVE file from a config.
///
/// Validates everything up front, synthesizes the signal, then writes the
/// file atomically: on any error no partial file is left behind.
pub fn generate(config: &LtcConfig) -> LtcResult<GenerateResult> {
    let (samples, frames_synthesized) = synthesize(config)?;
    let wav = WavResult::from_mono(&samples, config.sample_rate, config.bit_depth)?;
    wav::write_wav_file(&config.output_path, &wav.wav_data)?;

    Ok(GenerateResult {
        path: config.output_path.clone(),
        frames_synthesized,
        num_samples: wav.num_samples,
        duration_seconds: wav.duration_seconds(),
        pcm_hash: wav.pcm_hash,
    })
}

/// Synthesizes the float sample buffer for a config without touching the
/// filesystem. Returns the buffer and the number of codewords emitted.
pub fn synthesize(config: &LtcConfig) -> LtcResult<(Vec<f64>, usize)> {
    config.validate()?;

    let rate = config.frame_rate;
    let total_samples = config.total_samples()?;
    let samples_per_frame = rate.samples_per_frame(config.sample_rate);

    let mut timecode = config.effective_start();
    let mut encoder = BiphaseEncoder::new();
    let mut buffer = Vec::with_capacity(total_samples);
    let mut frames = 0usize;

    while buffer.len() < total_samples {
        let word = Codeword::assemble(timecode, rate);
        let frame = encoder.encode_frame(&word, samples_per_frame);
        let take = frame.len().min(total_samples - buffer.len());
        buffer.extend_from_slice(&frame[..take]);
        frames += 1;
        timecode.advance(rate);
    }

    Ok((buffer, frames))
}
