//! Deterministic WAVE file serialization.
//!
//! Writes canonical 44-byte-header RIFF/WAVE files: mono linear PCM at 16
//! or 24 bits, no metadata chunks, no timestamps. Identical sample buffers
//! always serialize to identical bytes, and the PCM payload hash travels
//! with the result for downstream verification.

mod format;
mod pcm;
mod result;
mod writer;


// Re-export public API
pub use format::{BitDepth, WavFormat};
pub use pcm::{compute_pcm_hash, extract_pcm_data};
pub use result::WavResult;
pub use writer::{quantize, write_wav, write_wav_file, write_wav_to_vec};
