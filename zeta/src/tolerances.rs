// SPDX-License-Identifier: AGPL-3.0-only

//! Centralized numeric thresholds with justification.
//!
//! Every cutoff, window, and validation tolerance used by the evaluation
//! engine and its validation binaries is defined here with documentation of
//! its origin and rationale. No ad-hoc magic numbers.
//!
//! # Threshold categories
//!
//! | Category | Basis | Example |
//! |----------|-------|---------|
//! | Algorithm windows | Branch-selection geometry | 2⁻³⁰ exponent window |
//! | Series convergence | IEEE 754 f64 mantissa | 2⁻⁵⁴ relative |
//! | Validation | Accuracy target of the engine | 1e-13 closed-form |

// ═══════════════════════════════════════════════════════════════════
// Algorithm windows and guards
// ═══════════════════════════════════════════════════════════════════

/// Window around distinguished exponent values, 2⁻³⁰.
///
/// Used to detect the trivial zeros (ν a non-positive even integer), the
/// exposed pole (ν = d with y in the zero cell), and the narrow asymptotic
/// windows around ν = 2 and ν = 4 in the cut-over bound.
pub const EXPONENT_WINDOW: f64 = 9.313_225_746_154_785e-10;

/// Componentwise vector-equality threshold, 2⁻³².
///
/// Two lattice vectors closer than this per component are the same point for
/// the purposes of fundamental-cell bookkeeping.
pub const VEC_EQ_EPS: f64 = 2.328_306_436_538_696_3e-10;

/// Relative series/continued-fraction convergence target, 2⁻⁵⁴.
///
/// Half an ulp below the f64 mantissa; iterating further cannot change the
/// rounded result. Doubles as the near-integer detection window for the
/// removable cases of γ*.
pub const GAMMA_EPS: f64 = 5.551_115_123_125_783e-17;

/// Squared-length cutoff below which a lattice argument is the origin, 1e-64.
///
/// Applied to r² = π·p²·|z|² in the summand (removable limit −2/ν) and to
/// |ỹ|² in the pole gate. Far below any representable lattice geometry yet
/// large enough that e.g. |y| = 1e-33 collapses to the y = 0 value exactly.
pub const NEGLIGIBLE_SQ: f64 = 1e-64;

/// Smallest acceptable LU pivot magnitude, 2⁻⁵².
///
/// A pivot below this means the generator matrix is numerically singular,
/// which is a caller-side contract breach; checked in debug builds only.
pub const PIVOT_MIN: f64 = f64::EPSILON;

// ═══════════════════════════════════════════════════════════════════
// Validation tolerances
// ═══════════════════════════════════════════════════════════════════

/// Closed-form end-to-end comparisons: relative (or absolute near zero).
///
/// The engine targets ≤ 1e-13 relative accuracy uniformly over
/// ν ∈ (−10, 10), d ≤ 10, away from the pole at ν = d.
pub const CLOSED_FORM_REL: f64 = 1e-13;

/// Closed-form comparisons near ν = d ± ε.
///
/// Cancellation between the real and reciprocal sums dominates the error
/// budget near the pole; two digits of headroom over the generic target.
pub const NEAR_RESONANCE_REL: f64 = 1e-11;

/// Self-consistency of the two entry points through the singular term.
///
/// zeta == e^{−2πi x·y}·(zeta_reg + ŝ(y)/|det A|) composes three evaluations
/// and an explicit Γ-ratio; one digit of headroom over the generic target.
pub const SELF_CONSISTENCY_REL: f64 = 1e-12;

/// Idempotence of the origin cutoff for tiny y, absolute.
///
/// |y| = 1e-33 falls below [`NEGLIGIBLE_SQ`] and must reproduce the y = 0
/// value except for the rounding of the phase factors themselves.
pub const CUTOFF_IDEMPOTENCE_ABS: f64 = 1e-15;

/// Agreement with direct (truncated) lattice summation at large ν.
///
/// The direct sum is truncated at radius 60, leaving a tail of order
/// R^{2−ν}; at ν = 9.5 in d = 2 that is ~5e-14, so 1e-12 has margin.
pub const DIRECT_SUM_REL: f64 = 1e-12;

/// Incomplete-gamma branch checks against exact identities.
///
/// Each algorithm region is compared against closed forms (erfc-based,
/// integer-a finite sums, recurrence); all are near machine precision.
pub const INCOMPLETE_GAMMA_REL: f64 = 1e-13;

/// Continuity of the summand across the asymptotic cut-over, absolute.
///
/// The cut-over bounds are chosen so the truncated asymptotic form is
/// accurate to better than 1e-18 at the scale of the full lattice sum
/// (the summand itself is ~e^{−r²} ≈ 1e-14 at the crossing). Two orders
/// of headroom over that design figure.
pub const ASYMPTOTIC_CUTOVER_ABS: f64 = 1e-16;

/// Continuity of the regularised summand across the resonance Taylor cutoff.
///
/// At r² ≈ 0.031 the 10-term series and the log form agree to the series
/// truncation error, ~(r²)¹⁰/10! ≪ 1e-15; one digit of slack for the log
/// form's cancellation.
pub const RESONANCE_TAYLOR_CONTINUITY_REL: f64 = 1e-12;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::assertions_on_constants)] // constants sanity check
    fn tolerance_ordering() {
        assert!(CLOSED_FORM_REL < SELF_CONSISTENCY_REL);
        assert!(SELF_CONSISTENCY_REL < NEAR_RESONANCE_REL);
        assert!(CUTOFF_IDEMPOTENCE_ABS < CLOSED_FORM_REL);
    }

    #[test]
    fn windows_are_exact_powers_of_two() {
        assert_eq!(EXPONENT_WINDOW, (2.0_f64).powi(-30));
        assert_eq!(VEC_EQ_EPS, (2.0_f64).powi(-32));
        assert_eq!(GAMMA_EPS, (2.0_f64).powi(-54));
        assert_eq!(PIVOT_MIN, (2.0_f64).powi(-52));
    }

    #[test]
    #[allow(clippy::assertions_on_constants)] // constants sanity check
    fn all_thresholds_positive() {
        let ts = [
            EXPONENT_WINDOW,
            VEC_EQ_EPS,
            GAMMA_EPS,
            NEGLIGIBLE_SQ,
            PIVOT_MIN,
            CLOSED_FORM_REL,
            NEAR_RESONANCE_REL,
            SELF_CONSISTENCY_REL,
            CUTOFF_IDEMPOTENCE_ABS,
            DIRECT_SUM_REL,
            INCOMPLETE_GAMMA_REL,
            ASYMPTOTIC_CUTOVER_ABS,
            RESONANCE_TAYLOR_CONTINUITY_REL,
        ];
        for (i, &t) in ts.iter().enumerate() {
            assert!(t > 0.0, "threshold index {i} must be positive, got {t}");
        }
    }

    #[test]
    #[allow(clippy::assertions_on_constants)] // constants sanity check
    fn negligible_cutoff_separates_test_magnitudes() {
        // |y| = 1e-33 must collapse to the origin, |y| = 1e-31 must not.
        assert!(1e-33_f64 * 1e-33 < NEGLIGIBLE_SQ);
        assert!(1e-31_f64 * 1e-31 > NEGLIGIBLE_SQ);
    }
}
