//! WAVE format parameters.

use crate::error::{LtcError, LtcResult};

/// Sample encodings the serializer can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitDepth {
    /// Signed 16-bit little-endian.
    Pcm16,
    /// Signed 24-bit little-endian, packed in three bytes.
    Pcm24,
}

impl BitDepth {
    /// Maps a numeric depth onto an encoding.
    pub fn from_bits(bits: u16) -> LtcResult<Self> {
        match bits {
            16 => Ok(Self::Pcm16),
            24 => Ok(Self::Pcm24),
            _ => Err(LtcError::InvalidBitDepth { bits }),
        }
    }

    /// Bits per sample.
    pub const fn bits(&self) -> u16 {
        match self {
            Self::Pcm16 => 16,
            Self::Pcm24 => 24,
        }
    }
}

/// WAVE header parameters.
#[derive(Debug, Clone, Copy)]
pub struct WavFormat {
    /// Number of channels (always 1 here).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample.
    pub bits_per_sample: u16,
}

impl WavFormat {
    /// Creates a mono format at the given depth.
    pub fn mono(sample_rate: u32, depth: BitDepth) -> Self {
        Self {
            channels: 1,
            sample_rate,
            bits_per_sample: depth.bits(),
        }
    }

    /// Bytes per sample per channel.
    pub(crate) fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// Bytes per sample frame across channels.
    pub(crate) fn block_align(&self) -> u16 {
        self.channels * self.bytes_per_sample()
    }

    /// Bytes per second of audio.
    pub(crate) fn byte_rate(&self) -> u32 {
        self.sample_rate * u32::from(self.block_align())
    }
}
