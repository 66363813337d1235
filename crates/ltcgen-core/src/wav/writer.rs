//! PCM quantization and WAVE container emission.

use std::io::{self, Write};
use std::path::Path;

use crate::error::LtcResult;

use super::format::{BitDepth, WavFormat};

const PCM16_FULL_SCALE: f64 = 32767.0;
const PCM24_FULL_SCALE: f64 = 8_388_607.0;

/// Quantizes float samples in [-1, +1] to little-endian PCM bytes.
///
/// The float is scaled and rounded first, then the integer is clamped to
/// the signed range of the depth. For 24-bit output the low three bytes of
/// the 32-bit two's-complement value are taken; the sign bit of the 24-bit
/// field lives in the third byte, so the packing is exact for negative
/// values too.
pub fn quantize(samples: &[f64], depth: BitDepth) -> Vec<u8> {
    match depth {
        BitDepth::Pcm16 => {
            let mut pcm = Vec::with_capacity(samples.len() * 2);
            for &sample in samples {
                let scaled = (sample * PCM16_FULL_SCALE).round();
                let value = scaled.clamp(f64::from(i16::MIN), f64::from(i16::MAX)) as i16;
                pcm.extend_from_slice(&value.to_le_bytes());
            }
            pcm
        }
        BitDepth::Pcm24 => {
            let mut pcm = Vec::with_capacity(samples.len() * 3);
            for &sample in samples {
                let scaled = (sample * PCM24_FULL_SCALE).round();
                let value = scaled.clamp(-8_388_608.0, 8_388_607.0) as i32;
                pcm.extend_from_slice(&value.to_le_bytes()[..3]);
            }
            pcm
        }
    }
}

/// Writes a complete WAVE file to a writer.
///
/// Header layout is the canonical 44-byte RIFF/WAVE preamble: a 16-byte
/// PCM `fmt ` chunk followed by a single `data` chunk.
pub fn write_wav<W: Write>(writer: &mut W, format: &WavFormat, pcm_data: &[u8]) -> io::Result<()> {
    let data_size = pcm_data.len() as u32;
    let riff_size = 36 + data_size;

    writer.write_all(b"RIFF")?;
    writer.write_all(&riff_size.to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?; // PCM fmt chunk size
    writer.write_all(&1u16.to_le_bytes())?; // format tag: linear PCM
    writer.write_all(&format.channels.to_le_bytes())?;
    writer.write_all(&format.sample_rate.to_le_bytes())?;
    writer.write_all(&format.byte_rate().to_le_bytes())?;
    writer.write_all(&format.block_align().to_le_bytes())?;
    writer.write_all(&format.bits_per_sample.to_le_bytes())?;

    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;
    writer.write_all(pcm_data)?;

    Ok(())
}

/// Writes a WAVE file into a byte vector.
pub fn write_wav_to_vec(format: &WavFormat, pcm_data: &[u8]) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(44 + pcm_data.len());
    write_wav(&mut buffer, format, pcm_data).expect("writing to Vec should not fail");
    buffer
}

/// Writes WAVE bytes to `path` atomically.
///
/// The bytes land in a temporary file in the destination directory which
/// is persisted over `path` only after a complete write, so a failed run
/// leaves no partial file behind.
pub fn write_wav_file(path: &Path, wav_data: &[u8]) -> LtcResult<()> {
    let dir = match path.parent() {
        Some(parent) if parent != Path::new("") => parent,
        _ => Path::new("."),
    };
    let mut file = tempfile::NamedTempFile::new_in(dir)?;
    file.write_all(wav_data)?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}
