//! The running timecode counter.
//!
//! A [`Timecode`] is a plain `(hours, minutes, seconds, frames)` value.
//! The counter advances one frame at a time; drop-frame skipping is applied
//! *after* the rollover cascade, which is the ordering the canonical SMPTE
//! cadence depends on (frame codes 00 and 01 of each minute are skipped,
//! except every tenth minute).

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::LtcError;
use crate::rate::FrameRate;

const SECONDS_PER_DAY: u32 = 24 * 60 * 60;

/// `HH:MM:SS:FF`, with `;` also accepted before the frame field as the
/// conventional spelling for drop-frame code.
const TIMECODE_PATTERN: &str = r"^(\d{1,2}):(\d{2}):(\d{2})[:;](\d{1,2})$";

static TIMECODE_REGEX: OnceLock<Regex> = OnceLock::new();

fn timecode_regex() -> &'static Regex {
    TIMECODE_REGEX.get_or_init(|| Regex::new(TIMECODE_PATTERN).expect("invalid regex pattern"))
}

/// A SMPTE timecode value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Timecode {
    /// Hours, 0..24.
    pub hours: u8,
    /// Minutes, 0..60.
    pub minutes: u8,
    /// Seconds, 0..60.
    pub seconds: u8,
    /// Frames, 0..nominal fps.
    pub frames: u8,
}

impl Timecode {
    /// Creates a timecode from raw fields. Range checking happens at the
    /// generation boundary, not here.
    pub const fn new(hours: u8, minutes: u8, seconds: u8, frames: u8) -> Self {
        Self {
            hours,
            minutes,
            seconds,
            frames,
        }
    }

    /// Midnight, frame zero.
    pub const fn zero() -> Self {
        Self::new(0, 0, 0, 0)
    }

    /// Whether every field is in range for `rate`, including the
    /// drop-frame rule (at `S == 0`, frames 00/01 exist only in minutes
    /// divisible by ten).
    pub fn is_valid(&self, rate: FrameRate) -> bool {
        let in_range = self.hours < 24
            && self.minutes < 60
            && self.seconds < 60
            && self.frames < rate.nominal_fps();
        let dropped = rate.is_drop_frame()
            && self.seconds == 0
            && self.frames < 2
            && self.minutes % 10 != 0;
        in_range && !dropped
    }

    /// Advances by one frame.
    ///
    /// Increments the frame field, cascades through seconds, minutes and
    /// hours (wrapping at 24 h), then applies the drop-frame skip to the
    /// landed-on code.
    pub fn advance(&mut self, rate: FrameRate) {
        self.frames += 1;
        if self.frames >= rate.nominal_fps() {
            self.frames = 0;
            self.seconds += 1;
            if self.seconds >= 60 {
                self.seconds = 0;
                self.minutes += 1;
                if self.minutes >= 60 {
                    self.minutes = 0;
                    self.hours += 1;
                    if self.hours >= 24 {
                        self.hours = 0;
                    }
                }
            }
        }
        if rate.is_drop_frame() && self.seconds == 0 && self.frames < 2 && self.minutes % 10 != 0 {
            self.frames += 2;
        }
    }

    /// The timecode `seconds` wall-clock seconds earlier, wrapping through
    /// midnight. The frame field is unchanged, except that a rewind
    /// landing on a skipped drop-frame code is nudged forward by the same
    /// rule `advance` applies.
    pub fn rewound_by_seconds(&self, rate: FrameRate, seconds: u32) -> Self {
        let of_day = u32::from(self.hours) * 3600
            + u32::from(self.minutes) * 60
            + u32::from(self.seconds);
        let rewound = (of_day + SECONDS_PER_DAY - seconds % SECONDS_PER_DAY) % SECONDS_PER_DAY;
        let mut tc = Self {
            hours: (rewound / 3600) as u8,
            minutes: (rewound / 60 % 60) as u8,
            seconds: (rewound % 60) as u8,
            frames: self.frames,
        };
        if rate.is_drop_frame() && tc.seconds == 0 && tc.frames < 2 && tc.minutes % 10 != 0 {
            tc.frames += 2;
        }
        tc
    }
}

impl fmt::Display for Timecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds, self.frames
        )
    }
}

impl FromStr for Timecode {
    type Err = LtcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = timecode_regex()
            .captures(s.trim())
            .ok_or_else(|| LtcError::invalid_start(format!("expected HH:MM:SS:FF, got '{s}'")))?;
        // The pattern caps each field at two digits, so u8 cannot overflow.
        let field = |i: usize| caps[i].parse::<u8>().expect("digits fit in u8");
        let tc = Self::new(field(1), field(2), field(3), field(4));
        if tc.hours >= 24 || tc.minutes >= 60 || tc.seconds >= 60 {
            return Err(LtcError::invalid_start(format!("field out of range in '{s}'")));
        }
        Ok(tc)
    }
}
