//! Encode command implementation
//!
//! Wraps an arbitrary file in a PCM WAV container.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

use wavtext_codec::{EncodeReport, Encoder};

/// Run the encode command
///
/// # Arguments
/// * `input` - Path to the file to encode
/// * `output` - Path of the WAV file to write (overwritten if present)
/// * `bits` - Bits per sample (8, 16 or 32)
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(input: &str, output: &str, bits: u16) -> Result<ExitCode> {
    // Reject the depth before touching any file.
    let encoder = Encoder::with_bits(bits)?;

    let input_path = Path::new(input);
    if !input_path.is_file() {
        bail!("Input file does not exist: {}", input);
    }

    println!("{} {}", "Encoding:".cyan().bold(), input);

    let report = encoder
        .encode_file(input_path, Path::new(output))
        .with_context(|| format!("Failed to encode {} into {}", input, output))?;

    print_report(&report);

    Ok(ExitCode::SUCCESS)
}

fn print_report(report: &EncodeReport) {
    println!(
        "{} Converted {} to {}",
        "SUCCESS".green().bold(),
        report.input.display(),
        report.output.display()
    );
    println!(
        "  {} {} bytes",
        "Original file size:".dimmed(),
        report.payload_bytes
    );
    println!(
        "  {} {} bytes ({}, {} samples)",
        "Encoded WAV file size:".dimmed(),
        report.wav_bytes,
        report.bit_depth,
        report.sample_count
    );
}
