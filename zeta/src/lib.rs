// SPDX-License-Identifier: AGPL-3.0-only

// Clippy pedantic/nursery + numerics-specific allows are in [workspace.lints.clippy]
// in Cargo.toml. Library code must propagate errors, not panic:
#![deny(clippy::expect_used, clippy::unwrap_used)]
#![warn(missing_docs)]

//! coldSpring Lattice Sums — Epstein zeta core
//!
//! Evaluates the Epstein zeta function and its regularised variant over
//! arbitrary real lattices Λ = AZ^d in any dimension d ≥ 1 for a real
//! exponent ν, to near machine precision:
//!
//! ```text
//! Z_{Λ,ν}(x;y) = Σ'_{z∈Λ} e^{−2πi y·z} / |z − x|^ν ,   Re ν > d,
//! ```
//!
//! meromorphically continued to all ν through Crandall's symmetric
//! real-space/reciprocal-space decomposition. The regularised form removes
//! the y → 0 singularity of the Fourier self-term.
//!
//! # Architecture
//!
//! - **`epstein`** — evaluation driver: scaling, fundamental-cell projection,
//!   cutoff selection, compensated twin sums, regularisation assembly
//! - **`crandall`** — per-lattice-point summand `g` and its regularised
//!   variant, asymptotic cut-over bounds
//! - **`gamma`** — upper incomplete Γ(a,x) and twice-regularised γ*(a,x)
//!   via five-algorithm domain selection (Gautschi 1979)
//! - **`linalg`** — the six dense-matrix primitives the driver needs
//! - **`complex`** — plain `(re, im)` complex arithmetic
//! - **`kahan`** — compensated summation for the two lattice sums
//! - **`boxsum`** — odometer iteration over integer boxes in fixed order
//! - **`tolerances`** — centralized, justified validation thresholds
//! - **`validation`** — pass/fail harness for validation binaries (exit 0/1)
//! - **`provenance`** — literature origin of every hardcoded reference value
//! - **`bench`** — wall-clock benchmark reports (JSON)
//!
//! # Validation binaries
//!
//! All binaries follow the coldSpring pattern: hardcoded expected values
//! with provenance, explicit pass/fail against documented tolerances,
//! exit code 0 (pass) or 1 (fail).
//!
//! # License
//!
//! AGPL-3.0 — see LICENSE in repository root.

/// Wall-clock benchmark reports with JSON serialization.
pub mod bench;
/// Odometer iteration over integer lattice boxes (fixed summation order).
pub mod boxsum;
/// Complex f64 arithmetic as plain `(re, im)` pairs.
pub mod complex;
/// Crandall summand `g`, regularised `g_reg`, asymptotic cut-over bounds.
pub mod crandall;
/// Evaluation driver and the two public entry points.
pub mod epstein;
/// Upper incomplete and twice-regularised incomplete gamma functions.
pub mod gamma;
/// Compensated (Kahan) summation.
pub mod kahan;
/// Dense linear-algebra primitives for lattice bookkeeping.
pub mod linalg;
/// Literature provenance of hardcoded reference values.
pub mod provenance;
/// Centralized, justified numeric thresholds.
pub mod tolerances;
/// Pass/fail harness for validation binaries (exit 0/1).
pub mod validation;

pub use complex::Complex64;
pub use epstein::{epstein_zeta, epstein_zeta_reg};
