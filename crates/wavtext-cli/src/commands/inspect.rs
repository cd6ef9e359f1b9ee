//! Inspect command implementation
//!
//! Reports a WAV file's format and whether it carries an encoded payload,
//! without writing anything.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

use wavtext_codec::{inspect_file, Inspection, PayloadStatus};

use super::json_output::{InspectOutput, InspectResult, JsonError};

/// Run the inspect command
///
/// # Arguments
/// * `input` - Path to the WAV file
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 if the file could be read as WAV, 1 otherwise
pub fn run(input: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(input)
    } else {
        run_human(input)
    }
}

/// Run inspect with human-readable (colored) output
fn run_human(input: &str) -> Result<ExitCode> {
    let info = inspect_file(Path::new(input))
        .with_context(|| format!("Failed to inspect {}", input))?;

    println!("{} {}", "Inspecting:".cyan().bold(), input);
    print_inspection(&info);

    Ok(ExitCode::SUCCESS)
}

/// Run inspect with machine-readable JSON output
fn run_json(input: &str) -> Result<ExitCode> {
    let (output, code) = match inspect_file(Path::new(input)) {
        Ok(info) => (
            InspectOutput::success(InspectResult::new(input, &info)),
            ExitCode::SUCCESS,
        ),
        Err(e) => (
            InspectOutput::failure(vec![JsonError::from_codec(&e, input)]),
            ExitCode::from(1),
        ),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(code)
}

fn print_inspection(info: &Inspection) {
    println!(
        "  {} {} ch, {} Hz, {}-bit",
        "Format:".dimmed(),
        info.format.channels,
        info.format.sample_rate,
        info.format.bits_per_sample
    );
    println!("  {} {}", "Samples:".dimmed(), info.sample_count);
    if info.truncated {
        println!(
            "  {} data chunk is shorter than its header declares",
            "!".yellow()
        );
    }

    match &info.payload {
        PayloadStatus::Recovered(size) => println!(
            "  {} {} ({} bytes)",
            "Payload:".dimmed(),
            "encoded".green().bold(),
            size
        ),
        PayloadStatus::NotEncoded => println!(
            "  {} {}",
            "Payload:".dimmed(),
            "not encoded".yellow().bold()
        ),
        PayloadStatus::Corrupt(reason) => println!(
            "  {} {} ({})",
            "Payload:".dimmed(),
            "corrupt".red().bold(),
            reason
        ),
        PayloadStatus::Unsupported(reason) => println!(
            "  {} {} ({})",
            "Payload:".dimmed(),
            "unsupported".red().bold(),
            reason
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;
    use wavtext_codec::encode;

    #[test]
    fn test_run_human_on_encoded_wav() {
        let dir = TempDir::new().unwrap();
        let wav = dir.path().join("in.wav");
        fs::write(&wav, encode(b"Hello", 16).unwrap()).unwrap();

        assert_eq!(run(wav.to_str().unwrap(), false).unwrap(), ExitCode::SUCCESS);
    }

    #[test]
    fn test_run_json_on_garbage_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("garbage.wav");
        fs::write(&path, b"garbage").unwrap();

        assert_eq!(run(path.to_str().unwrap(), true).unwrap(), ExitCode::from(1));
    }

    #[test]
    fn test_run_human_on_garbage_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("garbage.wav");
        fs::write(&path, b"garbage").unwrap();

        assert!(run(path.to_str().unwrap(), false).is_err());
    }
}
