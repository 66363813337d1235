//! Frame-rate descriptors for the ten recognized SMPTE rates.
//!
//! A rate is an exact rational (`numerator / denominator`) plus a
//! drop-frame flag. The nominal integer rate used for counter rollover and
//! BCD encoding is derived from the ratio, never stored. Drop-frame exists
//! only for the two NTSC fractional rates, so the sum type simply has no
//! other drop variants.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LtcError;

/// One of the ten supported frame rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameRate {
    /// 23.976 fps (24000/1001), film pulled down for NTSC.
    Fps23_976,
    /// 24 fps, standard film rate.
    Fps24,
    /// 25 fps, PAL/SECAM.
    Fps25,
    /// 29.97 fps (30000/1001), NTSC color, non-drop counting.
    Fps29_97,
    /// 30 fps.
    Fps30,
    /// 50 fps.
    Fps50,
    /// 59.94 fps (60000/1001), non-drop counting.
    Fps59_94,
    /// 60 fps.
    Fps60,
    /// 29.97 fps with drop-frame counting.
    Fps29_97Drop,
    /// 59.94 fps with drop-frame counting.
    Fps59_94Drop,
}

impl FrameRate {
    /// Every supported rate, in catalog order.
    pub const ALL: [FrameRate; 10] = [
        FrameRate::Fps23_976,
        FrameRate::Fps24,
        FrameRate::Fps25,
        FrameRate::Fps29_97,
        FrameRate::Fps30,
        FrameRate::Fps50,
        FrameRate::Fps59_94,
        FrameRate::Fps60,
        FrameRate::Fps29_97Drop,
        FrameRate::Fps59_94Drop,
    ];

    /// Numerator of the exact rate ratio.
    pub const fn numerator(&self) -> u32 {
        match self {
            Self::Fps23_976 => 24000,
            Self::Fps24 => 24,
            Self::Fps25 => 25,
            Self::Fps29_97 | Self::Fps29_97Drop => 30000,
            Self::Fps30 => 30,
            Self::Fps50 => 50,
            Self::Fps59_94 | Self::Fps59_94Drop => 60000,
            Self::Fps60 => 60,
        }
    }

    /// Denominator of the exact rate ratio.
    pub const fn denominator(&self) -> u32 {
        match self {
            Self::Fps23_976
            | Self::Fps29_97
            | Self::Fps29_97Drop
            | Self::Fps59_94
            | Self::Fps59_94Drop => 1001,
            _ => 1,
        }
    }

    /// Whether this rate uses drop-frame counting.
    pub const fn is_drop_frame(&self) -> bool {
        matches!(self, Self::Fps29_97Drop | Self::Fps59_94Drop)
    }

    /// Integer frames-per-second used for counter rollover and BCD
    /// encoding: the ratio rounded up (29.97 counts 0..=29, 23.976
    /// counts 0..=23).
    pub const fn nominal_fps(&self) -> u8 {
        let num = self.numerator();
        let den = self.denominator();
        (num.div_ceil(den)) as u8
    }

    /// Exact frames per second as a float, for display and wall-clock
    /// arithmetic.
    pub fn fps(&self) -> f64 {
        f64::from(self.numerator()) / f64::from(self.denominator())
    }

    /// Audio samples spanned by one frame at `sample_rate`, i.e.
    /// `floor(sample_rate / fps)`. Computed in integer arithmetic so the
    /// fractional rates stay exact.
    pub fn samples_per_frame(&self, sample_rate: u32) -> usize {
        (u64::from(sample_rate) * u64::from(self.denominator()) / u64::from(self.numerator()))
            as usize
    }

    /// Short machine label, accepted back by [`FromStr`].
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Fps23_976 => "23.976",
            Self::Fps24 => "24",
            Self::Fps25 => "25",
            Self::Fps29_97 => "29.97",
            Self::Fps30 => "30",
            Self::Fps50 => "50",
            Self::Fps59_94 => "59.94",
            Self::Fps60 => "60",
            Self::Fps29_97Drop => "29.97df",
            Self::Fps59_94Drop => "59.94df",
        }
    }

    /// Human-readable name for UI listings.
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Fps23_976 => "23.976 fps NDF",
            Self::Fps24 => "24 fps NDF",
            Self::Fps25 => "25 fps NDF",
            Self::Fps29_97 => "29.97 fps NDF",
            Self::Fps30 => "30 fps NDF",
            Self::Fps50 => "50 fps NDF",
            Self::Fps59_94 => "59.94 fps NDF",
            Self::Fps60 => "60 fps NDF",
            Self::Fps29_97Drop => "29.97 fps DF",
            Self::Fps59_94Drop => "59.94 fps DF",
        }
    }
}

impl fmt::Display for FrameRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for FrameRate {
    type Err = LtcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let rate = match normalized.as_str() {
            "23.976" | "23.98" => Self::Fps23_976,
            "24" => Self::Fps24,
            "25" => Self::Fps25,
            "29.97" | "29.97ndf" => Self::Fps29_97,
            "30" => Self::Fps30,
            "50" => Self::Fps50,
            "59.94" | "59.94ndf" => Self::Fps59_94,
            "60" => Self::Fps60,
            "29.97df" => Self::Fps29_97Drop,
            "59.94df" => Self::Fps59_94Drop,
            _ => return Err(LtcError::invalid_rate(s)),
        };
        Ok(rate)
    }
}
