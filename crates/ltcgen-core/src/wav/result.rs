//! WAVE serialization result type.

use crate::error::LtcResult;

use super::format::{BitDepth, WavFormat};
use super::writer::{quantize, write_wav_to_vec};

/// A fully serialized mono WAVE file plus its audit fields.
#[derive(Debug)]
pub struct WavResult {
    /// Complete WAVE file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of the PCM payload only.
    pub pcm_hash: String,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample.
    pub bits_per_sample: u16,
    /// Number of samples.
    pub num_samples: usize,
}

impl WavResult {
    /// Quantizes mono float samples and serializes them.
    ///
    /// Fails with `InvalidBitDepth` when `bits` is neither 16 nor 24.
    pub fn from_mono(samples: &[f64], sample_rate: u32, bits: u16) -> LtcResult<Self> {
        let depth = BitDepth::from_bits(bits)?;
        let pcm = quantize(samples, depth);
        let pcm_hash = blake3::hash(&pcm).to_hex().to_string();
        let format = WavFormat::mono(sample_rate, depth);
        let wav_data = write_wav_to_vec(&format, &pcm);

        Ok(Self {
            wav_data,
            pcm_hash,
            sample_rate,
            bits_per_sample: depth.bits(),
            num_samples: samples.len(),
        })
    }

    /// Duration of the serialized audio in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_samples as f64 / f64::from(self.sample_rate)
    }
}
