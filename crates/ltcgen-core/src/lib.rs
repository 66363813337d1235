//! LTC Generation Core
//!
//! This crate synthesizes SMPTE 12M Linear Time Code (LTC) as audio and
//! serializes it to mono PCM WAVE files. LTC carries a running
//! `HH:MM:SS:FF` timecode as a bi-phase-mark-modulated square wave that
//! video and audio equipment decodes for frame-accurate sync.
//!
//! # Overview
//!
//! Generation is a single synchronous pass over five small pieces:
//!
//! - [`rate`] - the ten supported frame rates as a closed sum type
//! - [`timecode`] - the `(H,M,S,F)` counter with drop-frame skipping
//! - [`codeword`] - assembly of the 80-bit LTC word per frame
//! - [`biphase`] - the bi-phase-mark modulator (phase-coherent across
//!   frames)
//! - [`wav`] - 16/24-bit quantization and canonical RIFF/WAVE emission
//!
//! [`generate()`] drives them: one codeword per frame, one frame's worth
//! of samples per codeword, with the final frame truncated to the
//! requested duration. [`catalog`] exposes the supported-value listings a
//! host UI needs.
//!
//! # Determinism
//!
//! There are no clocks, no randomness, and no state between calls: two
//! runs over the same [`LtcConfig`] produce byte-identical files. Each
//! result carries a BLAKE3 hash of its PCM payload for verification.
//!
//! # Example
//!
//! ```no_run
//! use ltcgen_core::{generate, FrameRate, LtcConfig, Timecode};
//!
//! let config = LtcConfig {
//!     frame_rate: FrameRate::Fps29_97Drop,
//!     sample_rate: 48000,
//!     bit_depth: 16,
//!     start: Timecode::new(1, 0, 0, 0),
//!     duration_seconds: 600.0,
//!     preroll: false,
//!     output_path: "ltc.wav".into(),
//! };
//! let result = generate(&config)?;
//! println!("wrote {} ({} frames)", result.path.display(), result.frames_synthesized);
//! # Ok::<(), ltcgen_core::LtcError>(())
//! ```

pub mod biphase;
pub mod catalog;
pub mod codeword;
pub mod config;
pub mod error;
pub mod generate;
pub mod rate;
pub mod timecode;
pub mod wav;

// Re-export main types at crate root
pub use config::{LtcConfig, PREROLL_SECONDS, SUPPORTED_BIT_DEPTHS, SUPPORTED_SAMPLE_RATES};
pub use error::{LtcError, LtcResult};
pub use generate::{generate, synthesize, GenerateResult};
pub use rate::FrameRate;
pub use timecode::Timecode;
pub use wav::WavResult;

#[cfg(test)]
mod integration_tests {
    use super::*;
    use crate::codeword::{Codeword, SYNC_WORD};

    fn config(rate: FrameRate, duration: f64) -> LtcConfig {
        LtcConfig {
            frame_rate: rate,
            sample_rate: 48000,
            bit_depth: 16,
            start: Timecode::zero(),
            duration_seconds: duration,
            preroll: false,
            output_path: std::path::PathBuf::from("out.wav"),
        }
    }

    /// Reads the 80 data bits of one frame back out of the modulated
    /// buffer: a bit is 1 exactly when the level flips at its cell
    /// boundary. The level ahead of the very first sample is the
    /// encoder's initial +1.0.
    fn frame_bits(buffer: &[f64], samples_per_frame: usize, frame: usize) -> [bool; 80] {
        let cell = samples_per_frame / 80;
        let base = frame * samples_per_frame;
        let mut bits = [false; 80];
        for (i, bit) in bits.iter_mut().enumerate() {
            let start = base + i * cell;
            let prev = if start == 0 { 1.0 } else { buffer[start - 1] };
            *bit = buffer[start] != prev;
        }
        bits
    }

    fn bcd(bits: &[bool; 80], units_offset: usize, tens_offset: usize, tens_width: usize) -> u8 {
        let read = |offset: usize, width: usize| -> u8 {
            (0..width).fold(0, |acc, i| acc | u8::from(bits[offset + i]) << i)
        };
        read(tens_offset, tens_width) * 10 + read(units_offset, 4)
    }

    fn decode_frame(bits: &[bool; 80]) -> Timecode {
        Timecode::new(
            bcd(bits, 36, 44, 2),
            bcd(bits, 24, 32, 3),
            bcd(bits, 12, 20, 3),
            bcd(bits, 0, 8, 2),
        )
    }

    fn sync_of(bits: &[bool; 80]) -> u16 {
        (0..16).fold(0, |acc, i| acc | u16::from(bits[48 + i]) << i)
    }

    #[test]
    fn test_one_second_of_30fps_writes_canonical_file() {
        // 30 NDF, 48 kHz, 16-bit, 1 s: 30 codewords, 96044 bytes on disk.
        let dir = tempfile::tempdir().unwrap();
        let mut config = config(FrameRate::Fps30, 1.0);
        config.output_path = dir.path().join("s1.wav");

        let result = generate(&config).unwrap();
        assert_eq!(result.frames_synthesized, 30);
        assert_eq!(result.num_samples, 48000);
        assert_eq!(std::fs::metadata(&result.path).unwrap().len(), 96044);

        let (buffer, _) = synthesize(&config).unwrap();
        let bits = frame_bits(&buffer, 1600, 0);
        assert_eq!(sync_of(&bits), SYNC_WORD);
        assert_eq!(decode_frame(&bits), Timecode::zero());

        // The counter parks one past the last synthesized frame.
        let mut tc = config.start;
        for _ in 0..result.frames_synthesized {
            tc.advance(config.frame_rate);
        }
        assert_eq!(tc, Timecode::new(0, 0, 1, 0));
    }

    #[test]
    fn test_single_frame_transition_budget() {
        // 25 NDF, 48 kHz, 24-bit, 0.04 s: exactly one 1920-sample frame
        // whose transition count is the 80 clock ticks plus one per data-1
        // bit (the word for 10:30:15:00 carries 19 ones, none at bit 0).
        let dir = tempfile::tempdir().unwrap();
        let mut config = config(FrameRate::Fps25, 0.04);
        config.bit_depth = 24;
        config.start = Timecode::new(10, 30, 15, 0);
        config.output_path = dir.path().join("s2.wav");

        let word = Codeword::assemble(config.start, config.frame_rate);
        assert_eq!(word.count_ones(), 19);

        let (buffer, frames) = synthesize(&config).unwrap();
        assert_eq!(frames, 1);
        assert_eq!(buffer.len(), 1920);
        let transitions = buffer.windows(2).filter(|w| w[0] != w[1]).count();
        assert_eq!(transitions, 80 + 19);

        let result = generate(&config).unwrap();
        assert_eq!(std::fs::metadata(&result.path).unwrap().len(), 44 + 1920 * 3);
    }

    #[test]
    fn test_drop_frame_boundary_scenarios() {
        // Engaged: minute 1 drops frames 00/01.
        let mut tc = Timecode::new(0, 0, 59, 29);
        tc.advance(FrameRate::Fps29_97Drop);
        assert_eq!(tc, Timecode::new(0, 1, 0, 2));

        // Not engaged: minute 10 keeps them.
        let mut tc = Timecode::new(0, 9, 59, 29);
        tc.advance(FrameRate::Fps29_97Drop);
        assert_eq!(tc, Timecode::new(0, 10, 0, 0));

        // Midnight wrap at 23.976.
        let mut tc = Timecode::new(23, 59, 59, 23);
        tc.advance(FrameRate::Fps23_976);
        assert_eq!(tc, Timecode::zero());
    }

    #[test]
    fn test_preroll_leads_into_program_start() {
        // 30 NDF with preroll: code starts ten seconds early and the
        // program start appears exactly 10 * 48000 samples in.
        let mut config = config(FrameRate::Fps30, 2.0);
        config.start = Timecode::new(1, 0, 0, 0);
        config.preroll = true;

        let (buffer, _) = synthesize(&config).unwrap();
        assert_eq!(buffer.len(), 12 * 48000);

        let first = frame_bits(&buffer, 1600, 0);
        assert_eq!(decode_frame(&first), Timecode::new(0, 59, 50, 0));
        assert_eq!(sync_of(&first), SYNC_WORD);

        let at_program = frame_bits(&buffer, 1600, 10 * 48000 / 1600);
        assert_eq!(decode_frame(&at_program), Timecode::new(1, 0, 0, 0));
    }

    #[test]
    fn test_preroll_full_duration_arithmetic() {
        // The 600 s program with preroll serializes as 610 s of audio.
        let mut config = config(FrameRate::Fps30, 600.0);
        config.start = Timecode::new(1, 0, 0, 0);
        config.preroll = true;
        assert_eq!(config.total_samples().unwrap(), 610 * 48000);
    }

    #[test]
    fn test_every_frame_decodes_to_the_counter_sequence() {
        // Half a second of drop-frame code crossing a minute boundary:
        // each frame's BCD fields must replay the counter exactly.
        let mut config = config(FrameRate::Fps29_97Drop, 0.5);
        config.start = Timecode::new(0, 0, 59, 20);

        let (buffer, frames) = synthesize(&config).unwrap();
        let spf = config.frame_rate.samples_per_frame(config.sample_rate);

        let mut expected = config.start;
        for frame in 0..frames - 1 {
            // skip the truncated tail frame
            let bits = frame_bits(&buffer, spf, frame);
            assert_eq!(decode_frame(&bits), expected, "frame {frame}");
            assert_eq!(sync_of(&bits), SYNC_WORD, "frame {frame}");
            assert!(bits[10], "drop-frame flag, frame {frame}");
            expected.advance(config.frame_rate);
        }
    }

    #[test]
    fn test_phase_continuity_across_frame_boundaries() {
        // First sample of frame N+1 extends frame N's closing level,
        // flipped only by a data-1 in bit 0.
        let config = config(FrameRate::Fps30, 0.5);
        let (buffer, frames) = synthesize(&config).unwrap();

        let mut tc = config.start;
        for frame in 1..frames {
            tc.advance(config.frame_rate);
            let word = Codeword::assemble(tc, config.frame_rate);
            let boundary = frame * 1600;
            let flipped = buffer[boundary] != buffer[boundary - 1];
            assert_eq!(flipped, word.bit(0), "boundary into frame {frame}");
        }
    }

    #[test]
    fn test_whole_frames_are_dc_balanced() {
        let config = config(FrameRate::Fps30, 0.5);
        let (buffer, _) = synthesize(&config).unwrap();
        for (frame, chunk) in buffer.chunks_exact(1600).enumerate() {
            let sum: f64 = chunk.iter().sum();
            assert_eq!(sum, 0.0, "frame {frame}");
        }
    }

    #[test]
    fn test_generation_determinism_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config(FrameRate::Fps59_94Drop, 0.25);
        config.sample_rate = 96000;
        config.bit_depth = 24;

        config.output_path = dir.path().join("a.wav");
        let a = generate(&config).unwrap();
        config.output_path = dir.path().join("b.wav");
        let b = generate(&config).unwrap();

        assert_eq!(a.pcm_hash, b.pcm_hash);
        assert_eq!(
            std::fs::read(&a.path).unwrap(),
            std::fs::read(&b.path).unwrap()
        );
    }

    #[test]
    fn test_failed_validation_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config(FrameRate::Fps30, -1.0);
        config.output_path = dir.path().join("never.wav");
        assert!(generate(&config).is_err());
        assert!(!config.output_path.exists());
    }
}
