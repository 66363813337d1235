//! ltcgen - Command-line SMPTE LTC timecode generator
//!
//! This binary generates LTC audio as mono PCM WAVE files and lists the
//! supported frame rates and output formats.

mod cli_args;

use clap::Parser;
use std::process::ExitCode;

use cli_args::*;

// Use modules from the library crate
use ltcgen_cli::commands;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            rate,
            start,
            duration,
            sample_rate,
            bit_depth,
            preroll,
            output,
            json,
        } => commands::generate::run(
            &commands::generate::GenerateArgs {
                rate: &rate,
                start: &start,
                duration,
                sample_rate,
                bit_depth,
                preroll,
                output: output.as_deref(),
            },
            json,
        ),
        Commands::Rates { json } => commands::rates::run(json),
        Commands::Formats { json } => commands::formats::run(json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
