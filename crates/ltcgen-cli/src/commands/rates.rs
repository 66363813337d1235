//! Rates command implementation
//!
//! Lists the frame-rate catalog so hosts and shell completion can discover
//! the accepted `--rate` labels.

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;

use ltcgen_core::catalog;

use super::json_output::{RateEntry, RatesOutput};

/// Run the rates command
pub fn run(json_output: bool) -> Result<ExitCode> {
    let rates: Vec<RateEntry> = catalog::frame_rates()
        .iter()
        .map(|rate| RateEntry {
            label: rate.label(),
            display: rate.display_name(),
            fps: rate.fps(),
            drop_frame: rate.is_drop_frame(),
        })
        .collect();

    if json_output {
        println!(
            "{}",
            serde_json::to_string_pretty(&RatesOutput { rates })?
        );
        return Ok(ExitCode::SUCCESS);
    }

    println!("{}", "Supported frame rates:".cyan().bold());
    for rate in &rates {
        println!(
            "  {:<10} {} ({:.3} fps)",
            rate.label.bold(),
            rate.display,
            rate.fps
        );
    }
    Ok(ExitCode::SUCCESS)
}
