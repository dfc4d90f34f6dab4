// SPDX-License-Identifier: AGPL-3.0-only

//! Benchmark report types, formatting, and JSON serialization.
//!
//! The evaluation cost is dominated by the (2c+1)^d incomplete-gamma calls
//! per sum; the `bench_epstein` binary sweeps dimensions and writes one of
//! these reports so per-eval regressions are visible across commits.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Result from a single benchmark phase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhaseResult {
    /// Phase label, e.g. "zeta d=3"
    pub phase: String,
    /// Lattice dimension
    pub dim: usize,
    /// Evaluations performed
    pub n_evals: usize,
    /// Total wall time in seconds
    pub wall_time_s: f64,
    /// Microseconds per evaluation
    pub per_eval_us: f64,
}

/// Full benchmark report for one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchReport {
    /// Seconds since the Unix epoch at report creation
    pub unix_timestamp: u64,
    /// Hostname if the environment exposes one
    pub host: String,
    /// All phases
    pub phases: Vec<PhaseResult>,
}

impl BenchReport {
    /// Fresh report stamped with the current time.
    #[must_use]
    pub fn new() -> Self {
        let unix_timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        let host = std::env::var("HOSTNAME").unwrap_or_else(|_| String::from("unknown"));
        Self {
            unix_timestamp,
            host,
            phases: Vec::new(),
        }
    }

    /// Add a phase result.
    pub fn add_phase(&mut self, phase: PhaseResult) {
        self.phases.push(phase);
    }

    /// Save to a JSON file. Returns the path written.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the directory cannot be created, the path cannot be
    /// written, or JSON serialization fails.
    pub fn save_json(&self, dir: &str) -> std::io::Result<String> {
        std::fs::create_dir_all(dir)?;
        let path = format!("{dir}/bench_epstein_{}.json", self.unix_timestamp);
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(&path, json)?;
        Ok(path)
    }

    /// Print summary table to stdout.
    pub fn print_summary(&self) {
        println!();
        println!("═══ epstein zeta benchmark — {} ═══", self.host);
        println!("  {:<16} {:>4} {:>10} {:>12} {:>12}", "Phase", "d", "evals", "wall (s)", "per-eval");
        for p in &self.phases {
            println!(
                "  {:<16} {:>4} {:>10} {:>12.4} {:>9.1} µs",
                p.phase, p.dim, p.n_evals, p.wall_time_s, p.per_eval_us
            );
        }
    }
}

impl Default for BenchReport {
    fn default() -> Self {
        Self::new()
    }
}
