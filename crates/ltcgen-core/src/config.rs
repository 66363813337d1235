//! Generation configuration and boundary validation.
//!
//! Every check happens here, before any samples are synthesized: a
//! `generate` call either passes validation completely or fails without
//! touching the filesystem.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{LtcError, LtcResult};
use crate::rate::FrameRate;
use crate::timecode::Timecode;
use crate::wav::BitDepth;

/// Sample rates the serializer accepts, in Hz.
pub const SUPPORTED_SAMPLE_RATES: [u32; 4] = [44100, 48000, 96000, 192000];

/// Bit depths the serializer accepts.
pub const SUPPORTED_BIT_DEPTHS: [u16; 2] = [16, 24];

/// Wall-clock seconds prepended when preroll is requested.
pub const PREROLL_SECONDS: u32 = 10;

/// Configuration for one generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LtcConfig {
    /// Frame rate and counting mode.
    pub frame_rate: FrameRate,
    /// Output sample rate in Hz.
    pub sample_rate: u32,
    /// Output bit depth.
    pub bit_depth: u16,
    /// First timecode of the program (preroll, if any, runs before it).
    pub start: Timecode,
    /// Program duration in seconds.
    pub duration_seconds: f64,
    /// Prepend ten seconds of code leading into `start`.
    #[serde(default)]
    pub preroll: bool,
    /// Destination file path.
    pub output_path: PathBuf,
}

impl LtcConfig {
    /// Validates every field against the supported ranges.
    pub fn validate(&self) -> LtcResult<()> {
        if !SUPPORTED_SAMPLE_RATES.contains(&self.sample_rate) {
            return Err(LtcError::InvalidSampleRate {
                rate: self.sample_rate,
            });
        }
        BitDepth::from_bits(self.bit_depth)?;
        self.validate_start()?;
        self.total_samples()?;
        Ok(())
    }

    fn validate_start(&self) -> LtcResult<()> {
        let tc = self.start;
        if tc.hours >= 24 {
            return Err(LtcError::invalid_start(format!(
                "hours must be below 24, got {}",
                tc.hours
            )));
        }
        if tc.minutes >= 60 {
            return Err(LtcError::invalid_start(format!(
                "minutes must be below 60, got {}",
                tc.minutes
            )));
        }
        if tc.seconds >= 60 {
            return Err(LtcError::invalid_start(format!(
                "seconds must be below 60, got {}",
                tc.seconds
            )));
        }
        let nominal = self.frame_rate.nominal_fps();
        if tc.frames >= nominal {
            return Err(LtcError::invalid_start(format!(
                "frames must be below {} for {}, got {}",
                nominal,
                self.frame_rate.display_name(),
                tc.frames
            )));
        }
        if !tc.is_valid(self.frame_rate) {
            return Err(LtcError::invalid_start(format!(
                "{tc} is a skipped code in drop-frame counting"
            )));
        }
        Ok(())
    }

    /// The timecode generation actually begins from: `start`, or ten
    /// seconds before it when preroll is on.
    pub fn effective_start(&self) -> Timecode {
        if self.preroll {
            self.start
                .rewound_by_seconds(self.frame_rate, PREROLL_SECONDS)
        } else {
            self.start
        }
    }

    /// Requested duration plus the preroll lead-in.
    pub fn effective_duration(&self) -> f64 {
        if self.preroll {
            self.duration_seconds + f64::from(PREROLL_SECONDS)
        } else {
            self.duration_seconds
        }
    }

    /// Number of output samples: `round(duration * sample_rate)`.
    ///
    /// Fails with `InvalidDuration` when the duration is non-finite,
    /// non-positive, or large enough to overflow the RIFF size fields at
    /// this bit depth.
    pub fn total_samples(&self) -> LtcResult<usize> {
        let invalid = || LtcError::InvalidDuration {
            duration: self.duration_seconds,
        };
        if !self.duration_seconds.is_finite() || self.duration_seconds <= 0.0 {
            return Err(invalid());
        }
        let depth = BitDepth::from_bits(self.bit_depth)?;
        let samples = (self.effective_duration() * f64::from(self.sample_rate)).round();
        let max_samples = (u64::from(u32::MAX) - 36) / u64::from(depth.bits() / 8);
        if samples > max_samples as f64 {
            return Err(invalid());
        }
        Ok(samples as usize)
    }
}
