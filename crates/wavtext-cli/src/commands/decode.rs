//! Decode command implementation
//!
//! Recovers the original file from a WAV produced by `encode`.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

use wavtext_codec::{decode_file, CodecError};

/// Run the decode command
///
/// # Arguments
/// * `input` - Path to the WAV file
/// * `output` - Path of the recovered file (overwritten if present)
///
/// # Returns
/// Exit code: 0 success, 1 if the WAV carries no payload or decoding fails
pub fn run(input: &str, output: &str) -> Result<ExitCode> {
    let input_path = Path::new(input);
    if !input_path.is_file() {
        bail!("Input file does not exist: {}", input);
    }

    println!("{} {}", "Decoding:".cyan().bold(), input);

    let report = match decode_file(input_path, Path::new(output)) {
        Ok(report) => report,
        Err(CodecError::NotEncoded) => {
            println!(
                "{} This WAV file doesn't contain encoded data.",
                "NOT ENCODED".yellow().bold()
            );
            return Ok(ExitCode::from(1));
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to decode {} into {}", input, output))
        }
    };

    println!(
        "{} Converted {} to {}",
        "SUCCESS".green().bold(),
        report.input.display(),
        report.output.display()
    );
    println!(
        "  {} {} bytes (from {} {} samples)",
        "Recovered file size:".dimmed(),
        report.payload_bytes,
        report.sample_count,
        report.bit_depth
    );

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;
    use wavtext_codec::encode;

    #[test]
    fn test_run_decodes_file() {
        let dir = TempDir::new().unwrap();
        let wav = dir.path().join("in.wav");
        let output = dir.path().join("out.txt");
        fs::write(&wav, encode(b"Hello", 32).unwrap()).unwrap();

        let code = run(wav.to_str().unwrap(), output.to_str().unwrap()).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
        assert_eq!(fs::read(&output).unwrap(), b"Hello");
    }

    #[test]
    fn test_run_reports_not_encoded() {
        let dir = TempDir::new().unwrap();
        let wav = dir.path().join("in.wav");
        let output = dir.path().join("out.txt");
        // A valid 8-bit WAV holding silence.
        let mut bytes = encode(b"", 8).unwrap();
        let data_start = bytes.len() - wavtext_codec::MAGIC.len();
        bytes[data_start..].fill(128);
        fs::write(&wav, &bytes).unwrap();

        let code = run(wav.to_str().unwrap(), output.to_str().unwrap()).unwrap();
        assert_eq!(code, ExitCode::from(1));
        assert!(!output.exists());
    }

    #[test]
    fn test_run_corrupt_payload_is_error() {
        let dir = TempDir::new().unwrap();
        let wav = dir.path().join("in.wav");
        let output = dir.path().join("out.txt");
        let mut bytes = encode(b"Hello", 8).unwrap();
        bytes.truncate(bytes.len() - 1);
        fs::write(&wav, &bytes).unwrap();

        let err = run(wav.to_str().unwrap(), output.to_str().unwrap()).unwrap_err();
        assert!(format!("{:#}", err).contains("corrupt payload"));
        assert!(!output.exists());
    }

    #[test]
    fn test_run_missing_input() {
        let dir = TempDir::new().unwrap();
        let wav = dir.path().join("missing.wav");
        let output = dir.path().join("out.txt");

        let err = run(wav.to_str().unwrap(), output.to_str().unwrap()).unwrap_err();
        assert!(err.to_string().contains("Input file does not exist"));
        assert!(!output.exists());
    }
}
