//! # CLI Execution
//!
//! Extracted from `main.rs` to keep the entry point slim. Resolves the
//! effective search configuration (defaults → config file → flags),
//! runs the search, and renders the result batch.

use anyhow::{Context, Result};
use segreach::search::{find_primes, SearchConfig};
use std::io::Write;
use tracing::info;

use super::{Cli, Format};

/// Run the search described by the parsed CLI and print the results.
pub fn run(cli: &Cli) -> Result<()> {
    let config = resolve_config(cli)?;
    info!(
        start = cli.start,
        count = cli.count,
        initial_window = config.initial_window,
        growth_factor = config.growth_factor,
        "segreach starting"
    );

    let started = std::time::Instant::now();
    let primes = find_primes(cli.start, cli.count, &config)?;
    info!(
        found = primes.len(),
        last = primes.last().copied(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "search complete"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        Format::Human => render_human(&mut out, &primes)?,
        Format::Json => {
            serde_json::to_writer(&mut out, &primes)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Layer the effective config: built-in defaults, then the TOML file if
/// given, then individual flag overrides.
fn resolve_config(cli: &Cli) -> Result<SearchConfig> {
    let mut config = match &cli.config {
        Some(path) => SearchConfig::from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => SearchConfig::default(),
    };
    if let Some(window) = cli.window {
        config.initial_window = window;
    }
    if let Some(growth) = cli.growth {
        config.growth_factor = growth;
    }
    Ok(config)
}

/// Numbered list, one prime per line, tagging the first and last finds.
fn render_human(out: &mut impl Write, primes: &[u64]) -> Result<()> {
    writeln!(out, "Found {} primes:", primes.len())?;
    for (i, p) in primes.iter().enumerate() {
        let tag = if i == 0 && primes.len() == 1 {
            " (first and last found)"
        } else if i == 0 {
            " (first found)"
        } else if i == primes.len() - 1 {
            " (last found)"
        } else {
            ""
        };
        writeln!(out, "{}. {}{}", i + 1, p, tag)?;
    }
    Ok(())
}
