//! # packrs Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the packrs CLI. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the compress or extract flow
//!
//! ## Examples
//!
//! ```bash
//! # Compress a directory with bzip2
//! packrs ./project project.bz2
//!
//! # Compress a single file with zstd and report the elapsed time
//! packrs notes.txt notes.zst --benchmark
//!
//! # Extract into ./restore with debug logging
//! packrs -vv --extract project.bz2 ./restore
//! ```
//!
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // The compress (pack) and extract (unpack) flows
mod common; // Shared utilities (archive formats, fs, ui)
mod core; // Core infrastructure (errors, config)

/// Defines the command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "packrs",
    about = "Bundle and compress a file or directory (.zst, .bz2), or extract it again",
    long_about = "Compresses SOURCE (a file, or a directory which is tar-bundled first) into TARGET.\n\
                  The extension of TARGET selects the codec: .zst (zstd) or .bz2 (bzip2).\n\
                  With --extract, SOURCE is a compressed file and TARGET the output directory.",
    version
)]
struct Cli {
    /// File or directory to compress, or compressed file to extract.
    source: PathBuf,

    /// Output file (.zst or .bz2), or output directory with --extract.
    target: PathBuf,

    /// Extract SOURCE into the TARGET directory instead of compressing.
    #[arg(short = 'x', long)]
    extract: bool,

    /// Print the elapsed time after the operation.
    #[arg(short, long)]
    benchmark: bool,

    /// Compression level (zstd: 1-22, default 3; bzip2: 1-9, default 9).
    #[arg(short, long, conflicts_with = "extract", allow_negative_numbers = true)]
    level: Option<i32>,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = if cli.extract {
        commands::unpack::handle_unpack(&cli.source, &cli.target, cli.benchmark)
    } else {
        commands::pack::handle_pack(&cli.source, &cli.target, cli.level, cli.benchmark)
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
