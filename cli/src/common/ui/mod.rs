//! # packrs UI Utilities Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//!
//! ## Overview
//!
//! Terminal output that is not logging: the `--benchmark` timer and the
//! human-readable byte counts used in command summaries. Log lines go through
//! `tracing` to stderr; everything here is printed to stdout.
//!
//! ```rust
//! use crate::common::ui::Stopwatch;
//!
//! let stopwatch = Stopwatch::start();
//! // ... run the operation ...
//! stopwatch.report("Compression time");
//! // prints "Compression time: 0.42 s"
//! ```
//!
use std::time::{Duration, Instant};

/// Wall-clock timer started before an operation and reported after it.
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    started: Instant,
}

impl Stopwatch {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Prints `<label>: N.NN s` to stdout.
    pub fn report(&self, label: &str) {
        println!("{}: {}", label, format_seconds(self.elapsed()));
    }
}

/// Formats a duration as seconds with two decimals, e.g. `1.50 s`.
pub fn format_seconds(duration: Duration) -> String {
    format!("{:.2} s", duration.as_secs_f64())
}

/// Formats a byte count with a binary unit, e.g. `1.5 KiB`.
pub fn format_bytes(bytes: usize) -> String {
    const UNITS: [&str; 4] = ["KiB", "MiB", "GiB", "TiB"];
    if bytes < 1024 {
        return format!("{bytes} B");
    }
    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", value, UNITS[unit])
}
