//! Formats command implementation
//!
//! Lists the supported sample rates and bit depths.

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;

use ltcgen_core::catalog;

use super::json_output::FormatsOutput;

/// Run the formats command
pub fn run(json_output: bool) -> Result<ExitCode> {
    let output = FormatsOutput {
        sample_rates: catalog::sample_rates(),
        bit_depths: catalog::bit_depths(),
    };

    if json_output {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{}", "Supported sample rates:".cyan().bold());
    for rate in output.sample_rates {
        println!("  {} Hz", rate);
    }
    println!("{}", "Supported bit depths:".cyan().bold());
    for bits in output.bit_depths {
        println!("  {} bit", bits);
    }
    Ok(ExitCode::SUCCESS)
}
