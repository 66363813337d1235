//! Generate command implementation
//!
//! Builds an [`LtcConfig`] from the command-line flags, drives the core
//! generator, and reports the written file. Validation beyond flag
//! parsing (ranges, drop-frame start codes, overflow) is the core's job;
//! this layer only adds the host policy that jobs stay under two hours.

use anyhow::Result;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use ltcgen_core::{catalog, generate, FrameRate, LtcConfig, Timecode};

use super::json_output::{error_codes, GenerateOutput, JsonError};

/// Longest job the CLI accepts, in seconds.
const MAX_DURATION_SECONDS: f64 = 7200.0;

/// Flag values for one `generate` invocation.
pub struct GenerateArgs<'a> {
    pub rate: &'a str,
    pub start: &'a str,
    pub duration: f64,
    pub sample_rate: u32,
    pub bit_depth: u16,
    pub preroll: bool,
    pub output: Option<&'a str>,
}

/// Run the generate command
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(args: &GenerateArgs<'_>, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(args)
    } else {
        run_human(args)
    }
}

/// Builds and host-validates the config from raw flag values.
fn build_config(args: &GenerateArgs<'_>) -> Result<LtcConfig> {
    let frame_rate: FrameRate = args.rate.parse()?;
    let start: Timecode = args.start.parse()?;

    if args.duration > MAX_DURATION_SECONDS {
        anyhow::bail!(
            "duration cannot exceed 2 hours ({} seconds), got {}",
            MAX_DURATION_SECONDS,
            args.duration
        );
    }

    let mut config = LtcConfig {
        frame_rate,
        sample_rate: args.sample_rate,
        bit_depth: args.bit_depth,
        start,
        duration_seconds: args.duration,
        preroll: args.preroll,
        output_path: PathBuf::new(),
    };
    config.output_path = match args.output {
        Some(path) => PathBuf::from(path),
        None => PathBuf::from(catalog::suggest_filename(&config)),
    };
    Ok(config)
}

/// Creates the destination directory if the path names one.
fn ensure_output_dir(config: &LtcConfig) -> Result<()> {
    if let Some(parent) = config.output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Run generate with human-readable (colored) output
fn run_human(args: &GenerateArgs<'_>) -> Result<ExitCode> {
    let config = build_config(args)?;

    println!("{}", "Generating LTC timecode:".cyan().bold());
    println!("  {} {}", "Rate:".dimmed(), config.frame_rate.display_name());
    println!("  {} {}", "Start:".dimmed(), config.start);
    println!("  {} {} s", "Duration:".dimmed(), config.duration_seconds);
    println!(
        "  {} {} Hz / {}-bit{}",
        "Format:".dimmed(),
        config.sample_rate,
        config.bit_depth,
        if config.preroll { " / 10 s preroll" } else { "" }
    );

    ensure_output_dir(&config)?;
    let result = generate(&config)?;

    println!(
        "\n{} {}",
        "Wrote".green().bold(),
        result.path.display().to_string().bold()
    );
    println!(
        "  {} {} frames, {} samples, {:.3} s",
        "Audio:".dimmed(),
        result.frames_synthesized,
        result.num_samples,
        result.duration_seconds
    );
    println!("  {} {}", "PCM hash:".dimmed(), &result.pcm_hash[..16]);

    Ok(ExitCode::SUCCESS)
}

/// Run generate with machine-readable JSON output
fn run_json(args: &GenerateArgs<'_>) -> Result<ExitCode> {
    let config = match build_config(args) {
        Ok(config) => config,
        Err(e) => {
            let error = JsonError::new(error_codes::INVALID_ARGUMENT, e.to_string());
            println!(
                "{}",
                serde_json::to_string_pretty(&GenerateOutput::failure(vec![error]))?
            );
            return Ok(ExitCode::from(1));
        }
    };

    let outcome = ensure_output_dir(&config)
        .and_then(|()| generate(&config).map_err(anyhow::Error::from));
    match outcome {
        Ok(result) => {
            println!(
                "{}",
                serde_json::to_string_pretty(&GenerateOutput::success(&result))?
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            let error = JsonError::new(error_codes::GENERATION_FAILED, e.to_string());
            println!(
                "{}",
                serde_json::to_string_pretty(&GenerateOutput::failure(vec![error]))?
            );
            Ok(ExitCode::from(1))
        }
    }
}
