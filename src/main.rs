//! # Main — CLI Entry Point
//!
//! Parses arguments, initializes logging, and hands off to `cli::run`.
//! The binary is the input/output collaborator around the search core:
//! clap rejects non-integer input before the core ever runs, and the
//! rendering of results (numbered table or JSON) lives in `cli.rs`.
//!
//! ## Options
//!
//! - `--start`: where the search begins (any integer; values below 2
//!   are clamped to 2 — there are no primes to miss down there).
//! - `--count`: how many primes to return (must be positive).
//! - `--window` / `--growth`: window schedule tuning, overriding the
//!   config file and the built-in defaults.
//! - `--config`: TOML file with a `[search]` section.
//! - `--format`: `human` (numbered list) or `json` (array on stdout).

mod cli;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(
    name = "segreach",
    about = "Find the first t primes at or above a starting point via a segmented sieve"
)]
struct Cli {
    /// Start of the search (any integer; clamped up to 2)
    #[arg(long, allow_negative_numbers = true)]
    start: i64,

    /// Number of primes to find (must be positive)
    #[arg(long, allow_negative_numbers = true)]
    count: i64,

    /// Width of the first search window (overrides config file)
    #[arg(long)]
    window: Option<u64>,

    /// Window growth multiplier per iteration (overrides config file)
    #[arg(long)]
    growth: Option<u64>,

    /// Path to a TOML config file with a [search] section
    #[arg(long, env = "SEGREACH_CONFIG")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "human")]
    format: Format,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Numbered list with first/last markers
    Human,
    /// JSON array of primes on stdout
    Json,
}

fn main() -> Result<()> {
    // Initialize structured logging: LOG_FORMAT=json for machine consumers,
    // human-readable on stderr otherwise
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_default();
    if log_format == "json" {
        tracing_subscriber::fmt().json().with_target(false).init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }

    let cli = Cli::parse();
    cli::run(&cli)
}
