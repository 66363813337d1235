//! CLI argument definitions for the ltcgen command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined
//! here, keeping `main.rs` focused on dispatch logic.

use clap::{Parser, Subcommand};

/// ltcgen - SMPTE LTC Timecode Generator
#[derive(Parser)]
#[command(name = "ltcgen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Generate an LTC timecode WAVE file
    Generate {
        /// Frame rate (23.976, 24, 25, 29.97, 30, 50, 59.94, 60, 29.97df, 59.94df)
        #[arg(short, long)]
        rate: String,

        /// Start timecode as HH:MM:SS:FF
        #[arg(short, long, default_value = "00:00:00:00")]
        start: String,

        /// Duration in seconds (up to 2 hours)
        #[arg(short, long)]
        duration: f64,

        /// Sample rate in Hz (44100, 48000, 96000, 192000)
        #[arg(long, default_value_t = 48000)]
        sample_rate: u32,

        /// Bit depth (16 or 24)
        #[arg(long, default_value_t = 16)]
        bit_depth: u16,

        /// Prepend ten seconds of code leading into the start timecode
        #[arg(long)]
        preroll: bool,

        /// Output file path (default: descriptive filename in the current directory)
        #[arg(short, long)]
        output: Option<String>,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// List the supported frame rates
    Rates {
        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// List the supported sample rates and bit depths
    Formats {
        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },
}
