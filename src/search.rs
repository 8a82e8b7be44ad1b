//! # Search — Growing-Window Prime Search
//!
//! Orchestrates the segmented sieve over windows of exponentially
//! increasing width until enough primes have accumulated. Each
//! iteration regenerates the small primes up to √hi from scratch —
//! redundant work, but it keeps per-window memory bounded by the
//! current window instead of the final answer's magnitude, and the
//! segment cost dominates once windows grow.
//!
//! Peak memory per iteration is O(window width + √hi); the accumulator
//! holds at most `t` plus one window's worth of primes before the final
//! truncation.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

use crate::segment::sieve_segment;
use crate::sieve::{generate_primes, isqrt};

/// Width of the first search window. A larger value amortizes setup
/// for searches starting at big numbers; a smaller one wastes less
/// work when only a few primes are wanted. Tuning, not correctness.
pub const DEFAULT_INITIAL_WINDOW: u64 = 1000;

/// Factor by which the window widens after each iteration. Any factor
/// above 1 bounds the number of iterations logarithmically in the
/// distance to the t-th prime.
pub const DEFAULT_GROWTH_FACTOR: u64 = 2;

/// Tuning knobs for the window schedule, loadable from the `[search]`
/// section of a TOML file and overridable per field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SearchConfig {
    /// Width of the first window (must be >= 1).
    pub initial_window: u64,
    /// Window growth multiplier per iteration (must be >= 2).
    pub growth_factor: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            initial_window: DEFAULT_INITIAL_WINDOW,
            growth_factor: DEFAULT_GROWTH_FACTOR,
        }
    }
}

/// Wrapper matching the `[search]` table of a config file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    search: SearchConfig,
}

impl SearchConfig {
    /// Load from a TOML file with a `[search]` section; missing fields
    /// fall back to defaults.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let file: ConfigFile = toml::from_str(&text)?;
        Ok(file.search)
    }

    fn validate(&self) -> Result<(), SearchError> {
        if self.initial_window == 0 {
            return Err(SearchError::InvalidConfig(
                "initial_window must be at least 1".into(),
            ));
        }
        if self.growth_factor < 2 {
            return Err(SearchError::InvalidConfig(
                "growth_factor must be at least 2".into(),
            ));
        }
        Ok(())
    }
}

/// Contract violations the search refuses to run under.
///
/// A start below 2 is *not* an error — there are no primes below 2, so
/// it is clamped. A non-positive count is: returning an empty vec for
/// `t = 0` would be indistinguishable from a successful empty search.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("count must be a positive integer, got {t}")]
    InvalidCount { t: i64 },
    #[error("invalid search configuration: {0}")]
    InvalidConfig(String),
}

/// Find the first `t` primes at or above `start`, ascending.
///
/// `start` may be any integer; values below 2 clamp to 2. Fails fast
/// with [`SearchError::InvalidCount`] when `t <= 0`.
///
/// Window schedule: the first window is `config.initial_window` wide
/// and each subsequent one is `growth_factor` times wider, so the loop
/// terminates after O(log distance-to-answer) iterations. Each window
/// `[cursor, hi]` is sieved with fresh small primes up to √hi, its
/// primes appended in order, and the cursor moved to `hi + 1` — windows
/// tile the number line with no gap and no overlap, which is what makes
/// the accumulator gap-free and duplicate-free.
pub fn find_primes(start: i64, t: i64, config: &SearchConfig) -> Result<Vec<u64>, SearchError> {
    if t <= 0 {
        return Err(SearchError::InvalidCount { t });
    }
    config.validate()?;
    let wanted = t as usize;

    let mut cursor: u64 = if start < 2 { 2 } else { start as u64 };
    let mut window = config.initial_window;
    let mut primes: Vec<u64> = Vec::with_capacity(wanted);

    while primes.len() < wanted {
        let hi = cursor + window;
        let small = generate_primes(isqrt(hi));
        let found = sieve_segment(cursor, hi, &small);
        debug!(
            lo = cursor,
            hi,
            found = found.len(),
            total = primes.len() + found.len(),
            "window sieved"
        );
        primes.extend(found);
        cursor = hi + 1;
        window *= config.growth_factor;
    }

    primes.truncate(wanted);
    Ok(primes)
}
