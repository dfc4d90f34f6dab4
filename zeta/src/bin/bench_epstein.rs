// SPDX-License-Identifier: AGPL-3.0-only

//! Timing sweep over lattice dimensions, reported as JSON.
//!
//! The per-eval cost is dominated by the (2c+1)^d summand evaluations; this
//! binary makes that scaling visible across commits. Writes a report under
//! `bench_results/`.

use coldspring_zeta::bench::{BenchReport, PhaseResult};
use coldspring_zeta::{epstein_zeta, epstein_zeta_reg};
use std::time::Instant;

fn identity(dim: usize) -> Vec<f64> {
    let mut m = vec![0.0; dim * dim];
    for i in 0..dim {
        m[i * dim + i] = 1.0;
    }
    m
}

fn main() {
    let mut report = BenchReport::new();
    // checksum defeats dead-code elimination
    let mut checksum = 0.0_f64;

    for dim in 1..=4 {
        let a = identity(dim);
        let x = vec![0.25; dim];
        let y = vec![0.125; dim];
        let n_evals = match dim {
            1 | 2 => 2000,
            3 => 400,
            _ => 50,
        };

        let start = Instant::now();
        for i in 0..n_evals {
            let nu = 0.5 + 0.002 * f64::from(i);
            checksum += epstein_zeta(nu, dim, &a, &x, &y).re;
        }
        let wall = start.elapsed().as_secs_f64();
        report.add_phase(PhaseResult {
            phase: format!("zeta d={dim}"),
            dim,
            n_evals: n_evals as usize,
            wall_time_s: wall,
            per_eval_us: wall / f64::from(n_evals) * 1e6,
        });

        let start = Instant::now();
        for i in 0..n_evals {
            let nu = 0.5 + 0.002 * f64::from(i);
            checksum += epstein_zeta_reg(nu, dim, &a, &x, &y).re;
        }
        let wall = start.elapsed().as_secs_f64();
        report.add_phase(PhaseResult {
            phase: format!("zeta_reg d={dim}"),
            dim,
            n_evals: n_evals as usize,
            wall_time_s: wall,
            per_eval_us: wall / f64::from(n_evals) * 1e6,
        });
    }

    report.print_summary();
    println!("  checksum: {checksum:.6e}");
    match report.save_json("bench_results") {
        Ok(path) => println!("  report written to {path}"),
        Err(e) => eprintln!("  could not write report: {e}"),
    }
}
