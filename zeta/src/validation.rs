// SPDX-License-Identifier: AGPL-3.0-only

//! Validation harness for coldSpring binaries.
//!
//! Every validation binary follows the coldSpring pattern:
//!   - Hardcoded expected values with provenance
//!   - Explicit pass/fail checks against documented tolerances
//!   - Exit code 0 (all checks pass) or 1 (any check fails)
//!   - Machine-readable summary on stdout
//!
//! This module provides the shared infrastructure. Complex-valued checks
//! use the min(absolute, relative) criterion of the reference data sets:
//! a value passes if either distance is below tolerance, which keeps
//! near-zero references meaningful.

use crate::complex::Complex64;
use std::process;

/// How a tolerance threshold is applied.
#[derive(Debug, Clone, Copy)]
pub enum ToleranceMode {
    /// |observed − expected| < tolerance
    Absolute,
    /// |observed − expected| / |expected| < tolerance
    Relative,
    /// min of absolute and relative distance < tolerance
    MinAbsRel,
    /// boolean predicate
    Predicate,
}

impl std::fmt::Display for ToleranceMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Absolute => write!(f, "abs"),
            Self::Relative => write!(f, "rel"),
            Self::MinAbsRel => write!(f, "min(abs,rel)"),
            Self::Predicate => write!(f, "bool"),
        }
    }
}

/// A single validation check with result tracking.
#[derive(Debug, Clone)]
pub struct Check {
    /// Human-readable label
    pub label: String,
    /// Whether this check passed
    pub passed: bool,
    /// Observed distance (or 0/1 for predicates)
    pub error: f64,
    /// Tolerance used
    pub tolerance: f64,
    /// How the tolerance was applied
    pub mode: ToleranceMode,
}

/// Distance between two complex values: min(absolute, relative).
#[must_use]
pub fn err_min_abs_rel(reference: Complex64, observed: Complex64) -> f64 {
    let abs = (reference - observed).abs();
    if reference.abs() > 0.0 {
        abs.min(abs / reference.abs())
    } else {
        abs
    }
}

/// Accumulates validation checks and produces a summary with exit code.
#[derive(Debug, Default)]
#[must_use]
pub struct ValidationHarness {
    /// Name of the validation binary
    pub name: String,
    /// All checks performed
    pub checks: Vec<Check>,
}

impl ValidationHarness {
    /// Create a new harness for a named validation binary.
    #[must_use = "validation harness must be used to run checks"]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            checks: Vec::new(),
        }
    }

    /// Absolute tolerance check: |observed − expected| < tolerance.
    pub fn check_abs(&mut self, label: &str, observed: f64, expected: f64, tolerance: f64) {
        let error = (observed - expected).abs();
        self.checks.push(Check {
            label: label.to_string(),
            passed: error < tolerance,
            error,
            tolerance,
            mode: ToleranceMode::Absolute,
        });
    }

    /// Relative tolerance check, falling back to absolute at expected = 0.
    pub fn check_rel(&mut self, label: &str, observed: f64, expected: f64, tolerance: f64) {
        let error = if expected.abs() > f64::EPSILON {
            ((observed - expected) / expected).abs()
        } else {
            observed.abs()
        };
        self.checks.push(Check {
            label: label.to_string(),
            passed: error < tolerance,
            error,
            tolerance,
            mode: ToleranceMode::Relative,
        });
    }

    /// Complex check with the min(abs, rel) criterion of the reference sets.
    pub fn check_complex(
        &mut self,
        label: &str,
        observed: Complex64,
        expected: Complex64,
        tolerance: f64,
    ) {
        let error = err_min_abs_rel(expected, observed);
        self.checks.push(Check {
            label: label.to_string(),
            passed: error < tolerance,
            error,
            tolerance,
            mode: ToleranceMode::MinAbsRel,
        });
    }

    /// Boolean pass/fail check.
    pub fn check_bool(&mut self, label: &str, passed: bool) {
        self.checks.push(Check {
            label: label.to_string(),
            passed,
            error: f64::from(u8::from(!passed)),
            tolerance: 0.5,
            mode: ToleranceMode::Predicate,
        });
    }

    /// Number of checks that passed.
    #[must_use]
    pub fn passed_count(&self) -> usize {
        self.checks.iter().filter(|c| c.passed).count()
    }

    /// Total number of checks.
    #[must_use]
    pub const fn total_count(&self) -> usize {
        self.checks.len()
    }

    /// Whether all checks passed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }

    /// Format the validation summary as a string.
    #[must_use]
    pub fn format_summary(&self) -> String {
        use std::fmt::Write;
        let mut s = String::new();
        let _ = writeln!(
            s,
            "═══ {} validation: {}/{} checks passed ═══",
            self.name,
            self.passed_count(),
            self.total_count()
        );
        for check in &self.checks {
            let icon = if check.passed { "✓" } else { "✗" };
            let _ = writeln!(
                s,
                "  {icon} {}: error={:.3e}, tol={:.2e} ({})",
                check.label, check.error, check.tolerance, check.mode
            );
        }
        s
    }

    /// Print summary and exit with appropriate code.
    ///
    /// Exit 0 if all checks pass, exit 1 if any fails.
    pub fn finish(&self) -> ! {
        println!();
        print!("{}", self.format_summary());
        if self.all_passed() {
            println!("ALL CHECKS PASSED");
            process::exit(0);
        }
        let failed: Vec<&str> = self
            .checks
            .iter()
            .filter(|c| !c.passed)
            .map(|c| c.label.as_str())
            .collect();
        println!("FAILED CHECKS: {}", failed.join(", "));
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn harness_tracks_pass_fail() {
        let mut h = ValidationHarness::new("test");
        h.check_abs("exact", 1.0, 1.0, 1e-10);
        h.check_abs("close", 1.0001, 1.0, 1e-3);
        h.check_abs("far", 2.0, 1.0, 1e-3);
        assert_eq!(h.passed_count(), 2);
        assert_eq!(h.total_count(), 3);
        assert!(!h.all_passed());
    }

    #[test]
    fn relative_check_handles_zero() {
        let mut h = ValidationHarness::new("test");
        h.check_rel("near_zero", 1e-15, 0.0, 1e-10);
        assert!(h.checks[0].passed);
        h.check_rel("large", 1e10 * 1.0001, 1e10, 1e-3);
        assert!(h.checks[1].passed);
    }

    #[test]
    fn complex_min_abs_rel() {
        // large reference: relative criterion carries
        let big = Complex64::new(1e12, 0.0);
        let close = Complex64::new(1e12 + 100.0, 0.0);
        assert!(err_min_abs_rel(big, close) < 1e-9);
        // zero reference: absolute criterion carries
        let zero = Complex64::ZERO;
        let tiny = Complex64::new(1e-15, -1e-15);
        assert!(err_min_abs_rel(zero, tiny) < 1e-14);
    }

    #[test]
    fn complex_check_detects_mismatch() {
        let mut h = ValidationHarness::new("test");
        h.check_complex(
            "off",
            Complex64::new(1.0, 0.0),
            Complex64::new(2.0, 0.0),
            1e-6,
        );
        assert!(!h.checks[0].passed);
    }

    #[test]
    fn check_bool_false_fails() {
        let mut h = ValidationHarness::new("test");
        h.check_bool("fail", false);
        assert!(!h.checks[0].passed);
        h.check_bool("pass", true);
        assert!(h.checks[1].passed);
    }

    #[test]
    fn format_summary_no_panic() {
        let mut h = ValidationHarness::new("my_validation");
        h.check_abs("a", 1.0, 1.0, 1e-10);
        h.check_abs("b", 2.0, 1.0, 0.1);
        let s = h.format_summary();
        assert!(s.contains("my_validation"));
        assert!(s.contains("1/2"));
        assert!(s.contains('✓'));
        assert!(s.contains('✗'));
    }

    #[test]
    fn harness_zero_checks_vacuous() {
        let h = ValidationHarness::new("empty");
        assert_eq!(h.total_count(), 0);
        assert!(h.all_passed());
    }
}
