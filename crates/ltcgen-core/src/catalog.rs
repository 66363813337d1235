//! Host-facing catalog queries.
//!
//! Pure, stateless helpers a UI or CLI can call to populate its controls
//! and propose output paths.

use std::env;
use std::path::PathBuf;

use crate::config::{LtcConfig, SUPPORTED_BIT_DEPTHS, SUPPORTED_SAMPLE_RATES};
use crate::rate::FrameRate;

const DEFAULT_FILENAME: &str = "ltc_timecode.wav";

/// The supported frame rates, in catalog order.
pub fn frame_rates() -> &'static [FrameRate] {
    &FrameRate::ALL
}

/// The supported sample rates in Hz.
pub fn sample_rates() -> &'static [u32] {
    &SUPPORTED_SAMPLE_RATES
}

/// The supported bit depths.
pub fn bit_depths() -> &'static [u16] {
    &SUPPORTED_BIT_DEPTHS
}

/// Default destination: `ltc_timecode.wav` on the user's desktop, or in
/// the current directory when no home can be resolved.
pub fn default_output_path() -> PathBuf {
    env::var_os("HOME")
        .or_else(|| env::var_os("USERPROFILE"))
        .map(|home| PathBuf::from(home).join("Desktop").join(DEFAULT_FILENAME))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_FILENAME))
}

/// A descriptive filename for a config, e.g.
/// `LTC_01-00-00-00_10m00s_29.97fpsdf_16bit_48khz_preroll.wav`.
pub fn suggest_filename(config: &LtcConfig) -> String {
    let tc = config.start;
    let time = format!(
        "{:02}-{:02}-{:02}-{:02}",
        tc.hours, tc.minutes, tc.seconds, tc.frames
    );

    let whole_seconds = config.duration_seconds.max(0.0) as u64;
    let duration = format!("{}m{:02}s", whole_seconds / 60, whole_seconds % 60);

    let rate = config
        .frame_rate
        .display_name()
        .replace(' ', "")
        .to_ascii_lowercase();

    let sample_rate = if config.sample_rate >= 1000 {
        format!("{}khz", config.sample_rate / 1000)
    } else {
        format!("{}hz", config.sample_rate)
    };

    let mut name = format!(
        "LTC_{time}_{duration}_{rate}_{}bit_{sample_rate}",
        config.bit_depth
    );
    if config.preroll {
        name.push_str("_preroll");
    }
    name.push_str(".wav");
    name
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timecode::Timecode;

    fn config() -> LtcConfig {
        LtcConfig {
            frame_rate: FrameRate::Fps29_97Drop,
            sample_rate: 48000,
            bit_depth: 16,
            start: Timecode::new(1, 0, 0, 0),
            duration_seconds: 600.0,
            preroll: false,
            output_path: PathBuf::new(),
        }
    }

    #[test]
    fn test_catalog_contents() {
        assert_eq!(frame_rates().len(), 10);
        assert_eq!(sample_rates(), &[44100, 48000, 96000, 192000]);
        assert_eq!(bit_depths(), &[16, 24]);
    }

    #[test]
    fn test_default_output_path_ends_with_canonical_name() {
        assert!(default_output_path().ends_with(DEFAULT_FILENAME));
    }

    #[test]
    fn test_suggest_filename_pattern() {
        assert_eq!(
            suggest_filename(&config()),
            "LTC_01-00-00-00_10m00s_29.97fpsdf_16bit_48khz.wav"
        );
    }

    #[test]
    fn test_suggest_filename_preroll_suffix() {
        let mut config = config();
        config.preroll = true;
        config.bit_depth = 24;
        config.duration_seconds = 90.5;
        assert_eq!(
            suggest_filename(&config),
            "LTC_01-00-00-00_1m30s_29.97fpsdf_24bit_48khz_preroll.wav"
        );
    }
}
