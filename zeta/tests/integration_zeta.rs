// SPDX-License-Identifier: AGPL-3.0-only

//! Integration tests: end-to-end evaluation against closed forms.
//!
//! Every reference value is either an exact expression in π, ln 2, Catalan's
//! constant, ζ(3), or a literature constant recorded in
//! `coldspring_zeta::provenance`. Exponents are chosen where the Dirichlet
//! series reductions hit exactly known values.

use coldspring_zeta::provenance::{APERY, BETA_HALF, CATALAN, MADELUNG_3D, ZETA_HALF};
use coldspring_zeta::tolerances::CLOSED_FORM_REL;
use coldspring_zeta::validation::err_min_abs_rel;
use coldspring_zeta::{epstein_zeta, epstein_zeta_reg, Complex64};
use std::f64::consts::PI;

fn identity(dim: usize) -> Vec<f64> {
    let mut m = vec![0.0; dim * dim];
    for i in 0..dim {
        m[i * dim + i] = 1.0;
    }
    m
}

fn assert_matches(observed: Complex64, expected: Complex64, tol: f64, label: &str) {
    let err = err_min_abs_rel(expected, observed);
    assert!(
        err < tol,
        "{label}: observed {observed}, expected {expected}, err {err:.3e}"
    );
}

#[test]
fn madelung_constant_3d() {
    let a = identity(3);
    let z = epstein_zeta(1.0, 3, &a, &[0.0; 3], &[0.5; 3]);
    assert_matches(
        z,
        Complex64::new(MADELUNG_3D.value, 0.0),
        CLOSED_FORM_REL,
        "Madelung 3D",
    );
}

#[test]
fn hurwitz_1d_nu2_is_pi_squared() {
    let z = epstein_zeta(2.0, 1, &[1.0], &[-0.5], &[0.0]);
    assert_matches(z, Complex64::new(PI * PI, 0.0), CLOSED_FORM_REL, "2ζ(2,1/2)");
}

#[test]
fn one_dimensional_log_sine_form() {
    // Σ_{n≠0} e^{−2πi y n}/|n| = −2·ln(2·sin(π y)) for y in the open cell
    let y = 0.25;
    let z = epstein_zeta(1.0, 1, &[1.0], &[0.0], &[y]);
    let expected = -2.0 * (2.0 * (PI * y).sin()).ln();
    assert_matches(
        z,
        Complex64::new(expected, 0.0),
        CLOSED_FORM_REL,
        "1D log-sine",
    );
}

#[test]
fn two_dimensional_alternating_nu1() {
    // −4·η(1/2)·β(1/2), η(1/2) = (1 − √2)·ζ(1/2)
    let a = identity(2);
    let eta_half = (1.0 - std::f64::consts::SQRT_2) * ZETA_HALF.value;
    let expected = -4.0 * eta_half * BETA_HALF.value;
    let z = epstein_zeta(1.0, 2, &a, &[0.0, 0.0], &[-0.5, -0.5]);
    assert_matches(
        z,
        Complex64::new(expected, 0.0),
        CLOSED_FORM_REL,
        "2D alternating ν=1",
    );
}

#[test]
fn two_dimensional_alternating_nu2_nu4() {
    let a = identity(2);
    // ν = 2: −4·η(1)·β(1) = −π·ln 2
    let z2 = epstein_zeta(2.0, 2, &a, &[0.0, 0.0], &[-0.5, -0.5]);
    assert_matches(
        z2,
        Complex64::new(-PI * std::f64::consts::LN_2, 0.0),
        CLOSED_FORM_REL,
        "2D alternating ν=2",
    );
    // ν = 4: −4·η(2)·β(2) = −(π²/3)·G
    let z4 = epstein_zeta(4.0, 2, &a, &[0.0, 0.0], &[-0.5, -0.5]);
    assert_matches(
        z4,
        Complex64::new(-PI * PI / 3.0 * CATALAN.value, 0.0),
        CLOSED_FORM_REL,
        "2D alternating ν=4",
    );
}

#[test]
fn four_dimensional_half_shift_nu6() {
    // 2^ν·(λ(3)λ(2) + β(3)β(2)) with λ(3) = (7/8)ζ(3), λ(2) = π²/8,
    // β(3) = π³/32, β(2) = G
    let a = identity(4);
    let expected = 64.0 * (0.875 * APERY.value * PI * PI / 8.0 + PI.powi(3) / 32.0 * CATALAN.value);
    let z = epstein_zeta(6.0, 4, &a, &[0.5, 0.0, 0.0, 0.0], &[0.0; 4]);
    assert_matches(
        z,
        Complex64::new(expected, 0.0),
        CLOSED_FORM_REL,
        "4D half-shift ν=6",
    );
}

#[test]
fn eight_dimensional_alternating_nu4() {
    // −16·η(−1)·ζ(2) = −16·(1/4)·(π²/6) = −2π²/3
    let a = identity(8);
    let z = epstein_zeta(4.0, 8, &a, &[0.0; 8], &[0.5; 8]);
    assert_matches(
        z,
        Complex64::new(-2.0 * PI * PI / 3.0, 0.0),
        CLOSED_FORM_REL,
        "8D alternating ν=4",
    );
}

#[test]
fn pole_and_regularised_value() {
    let a = identity(3);
    let zero = [0.0; 3];
    assert!(epstein_zeta(3.0, 3, &a, &zero, &zero).is_nan());
    assert!(epstein_zeta_reg(3.0, 3, &a, &zero, &zero).is_finite());
}

#[test]
fn regularised_resonance_1d_closed_form() {
    // zeta_reg at ν = d = 1 on the unit lattice: lim_{y→0} of
    // −2·ln(2·sin(πy)) + ln(πy²) = −ln(4π)
    let z = epstein_zeta_reg(1.0, 1, &[1.0], &[0.0], &[0.0]);
    assert_matches(
        z,
        Complex64::new(-(4.0 * PI).ln(), 0.0),
        CLOSED_FORM_REL,
        "reg 1D ν=1 at y=0",
    );
    // and away from y = 0 the finite combination itself
    let y = 0.2;
    let expected = -2.0 * (2.0 * (PI * y).sin()).ln() + (PI * y * y).ln();
    let zy = epstein_zeta_reg(1.0, 1, &[1.0], &[0.0], &[y]);
    assert_matches(
        zy,
        Complex64::new(expected, 0.0),
        CLOSED_FORM_REL,
        "reg 1D ν=1 at y=0.2",
    );
}

#[test]
fn regularised_resonance_scaled_lattice_closed_form() {
    // Λ = cZ at ν = 1: zeta_reg = −ln(4πc²)/c. Pins the covolume log
    // correction end to end, sign included.
    for &c in &[0.5, 2.0, 3.7] {
        let z = epstein_zeta_reg(1.0, 1, &[c], &[0.0], &[0.0]);
        let expected = -(4.0 * PI * c * c).ln() / c;
        assert_matches(
            z,
            Complex64::new(expected, 0.0),
            CLOSED_FORM_REL,
            "reg scaled 1D ν=1",
        );
    }
}

#[test]
fn trivial_zeros_both_variants() {
    let a = identity(2);
    let x = [0.3, 0.7];
    let y = [0.1, -0.6];
    for &nu in &[-2.0, -4.0, -8.0] {
        assert_eq!(epstein_zeta(nu, 2, &a, &x, &y), Complex64::ZERO);
        assert_eq!(epstein_zeta_reg(nu, 2, &a, &x, &y), Complex64::ZERO);
    }
}
