//! `url-base64` — encode or decode URL-safe base64 on the command line.
//!
//! Usage:
//!   url-base64 encode [--pad] [INPUT]
//!   url-base64 decode [INPUT]
//!
//! Without INPUT the data is read from stdin. Encoded text is written with a
//! trailing newline; decoded bytes are written as-is.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Read, Write};
use tracing::debug;
use url_base64::PaddingPolicy;

#[derive(Parser)]
#[command(name = "url-base64")]
#[command(about = "URL-safe base64 encoder and decoder")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode bytes to URL-safe base64
    Encode {
        /// Emit trailing `=` padding
        #[arg(short, long)]
        pad: bool,

        /// Text to encode (reads stdin if omitted)
        input: Option<String>,
    },

    /// Decode URL-safe base64 to bytes
    Decode {
        /// Encoded text (reads stdin if omitted)
        input: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "url_base64=debug"
    } else {
        "url_base64=warn"
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    if let Err(e) = run(cli.command, stdin, stdout) {
        eprintln!("{e:#}");
        std::process::exit(1);
    }
}

fn run<R: Read, W: Write>(command: Commands, stdin: R, mut stdout: W) -> Result<()> {
    match command {
        Commands::Encode { pad, input } => {
            let data = read_input(input, stdin)?;
            let padding = if pad {
                PaddingPolicy::Preserve
            } else {
                PaddingPolicy::Discard
            };
            let encoded = url_base64::encode_to_vec(&data, padding);
            debug!(input = data.len(), output = encoded.len(), ?padding, "encoded");
            stdout.write_all(&encoded)?;
            stdout.write_all(b"\n")?;
        }
        Commands::Decode { input } => {
            let data = read_input(input, stdin)?;
            let decoded = url_base64::decode_bytes(data.trim_ascii())
                .context("input is not valid URL-safe base64")?;
            debug!(input = data.len(), output = decoded.len(), "decoded");
            stdout.write_all(&decoded)?;
        }
    }
    stdout.flush()?;
    Ok(())
}

fn read_input<R: Read>(input: Option<String>, mut stdin: R) -> Result<Vec<u8>> {
    match input {
        Some(text) => Ok(text.into_bytes()),
        None => {
            let mut buf = Vec::new();
            stdin
                .read_to_end(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}
