//! wavtext CLI - encode arbitrary files as WAV audio and decode them back
//!
//! ```text
//! wavtext encode notes.txt notes.wav            # 16-bit by default
//! wavtext encode photo.jpg photo.wav --bits 32
//! wavtext decode notes.wav notes.txt
//! wavtext inspect notes.wav --json
//! ```

use clap::{ArgAction, Parser, Subcommand};
use std::process::ExitCode;

use wavtext_cli::{commands, logging};
use wavtext_codec::DEFAULT_BIT_DEPTH;

/// wavtext - store any file inside a PCM WAV container
#[derive(Parser)]
#[command(name = "wavtext")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase diagnostic output on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a file into a WAV file
    Encode {
        /// File to encode
        input: String,

        /// WAV file to write (overwritten if present)
        output: String,

        /// Bits per sample (8, 16 or 32)
        #[arg(short, long, default_value_t = DEFAULT_BIT_DEPTH)]
        bits: u16,
    },

    /// Decode a WAV file produced by `encode` back into the original file
    Decode {
        /// WAV file to decode
        input: String,

        /// File to write (overwritten if present)
        output: String,
    },

    /// Show a WAV file's format and whether it carries an encoded payload
    Inspect {
        /// WAV file to inspect
        input: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Encode {
            input,
            output,
            bits,
        } => commands::encode::run(&input, &output, bits),
        Commands::Decode { input, output } => commands::decode::run(&input, &output),
        Commands::Inspect { input, json } => commands::inspect::run(&input, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
