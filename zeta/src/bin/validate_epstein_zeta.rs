// SPDX-License-Identifier: AGPL-3.0-only

//! End-to-end validation of the Epstein zeta entry points against closed
//! forms from the literature, evaluated at exponents where the Dirichlet
//! series reduce to exactly known constants.
//!
//! Follows the coldSpring pattern: hardcoded expected values with
//! provenance (`coldspring_zeta::provenance`), explicit pass/fail against
//! documented tolerances, exit 0/1.

use coldspring_zeta::provenance::{APERY, BETA_HALF, CATALAN, MADELUNG_3D, ZETA_HALF};
use coldspring_zeta::tolerances::CLOSED_FORM_REL;
use coldspring_zeta::validation::ValidationHarness;
use coldspring_zeta::{epstein_zeta, epstein_zeta_reg, Complex64};
use rayon::prelude::*;
use std::f64::consts::PI;

fn identity(dim: usize) -> Vec<f64> {
    let mut m = vec![0.0; dim * dim];
    for i in 0..dim {
        m[i * dim + i] = 1.0;
    }
    m
}

fn main() {
    let mut h = ValidationHarness::new("epstein_zeta");

    // ── Madelung constant, rock salt ────────────────────────────────
    let a3 = identity(3);
    let madelung = epstein_zeta(1.0, 3, &a3, &[0.0; 3], &[0.5; 3]);
    h.check_complex(
        "Madelung 3D (nu=1)",
        madelung,
        Complex64::new(MADELUNG_3D.value, 0.0),
        CLOSED_FORM_REL,
    );

    // ── 1D Hurwitz: 2ζ(2,1/2) = π² ──────────────────────────────────
    let hurwitz = epstein_zeta(2.0, 1, &[1.0], &[-0.5], &[0.0]);
    h.check_complex(
        "1D Hurwitz (nu=2)",
        hurwitz,
        Complex64::new(PI * PI, 0.0),
        CLOSED_FORM_REL,
    );

    // ── 2D square alternating: −4·η(ν/2)·β(ν/2) ─────────────────────
    let a2 = identity(2);
    let x2 = [0.0, 0.0];
    let y2 = [-0.5, -0.5];
    // ν = 1: η(1/2) = (1 − √2)·ζ(1/2)
    let eta_half = (1.0 - std::f64::consts::SQRT_2) * ZETA_HALF.value;
    let expect_nu1 = -4.0 * eta_half * BETA_HALF.value;
    h.check_complex(
        "2D alternating (nu=1)",
        epstein_zeta(1.0, 2, &a2, &x2, &y2),
        Complex64::new(expect_nu1, 0.0),
        CLOSED_FORM_REL,
    );
    // ν = 2: −4·η(1)·β(1) = −π·ln 2
    h.check_complex(
        "2D alternating (nu=2)",
        epstein_zeta(2.0, 2, &a2, &x2, &y2),
        Complex64::new(-PI * std::f64::consts::LN_2, 0.0),
        CLOSED_FORM_REL,
    );
    // ν = 4: −4·η(2)·β(2) = −(π²/3)·G
    h.check_complex(
        "2D alternating (nu=4)",
        epstein_zeta(4.0, 2, &a2, &x2, &y2),
        Complex64::new(-PI * PI / 3.0 * CATALAN.value, 0.0),
        CLOSED_FORM_REL,
    );

    // ── 4D identity half-shift: 2^ν·(λλ + ββ) at ν = 6 ──────────────
    // λ(3) = (7/8)ζ(3), λ(2) = π²/8, β(3) = π³/32, β(2) = G
    let a4 = identity(4);
    let lambda3 = 0.875 * APERY.value;
    let lambda2 = PI * PI / 8.0;
    let beta3 = PI.powi(3) / 32.0;
    let expect_4d = 64.0 * (lambda3 * lambda2 + beta3 * CATALAN.value);
    h.check_complex(
        "4D half-shift (nu=6)",
        epstein_zeta(6.0, 4, &a4, &[0.5, 0.0, 0.0, 0.0], &[0.0; 4]),
        Complex64::new(expect_4d, 0.0),
        CLOSED_FORM_REL,
    );

    // ── 8D: −16·η(ν/2−3)·ζ(ν/2) at ν = 4 → −16·η(−1)·ζ(2) = −2π²/3 ──
    let a8 = identity(8);
    h.check_complex(
        "8D alternating (nu=4)",
        epstein_zeta(4.0, 8, &a8, &[0.0; 8], &[0.5; 8]),
        Complex64::new(-2.0 * PI * PI / 3.0, 0.0),
        CLOSED_FORM_REL,
    );

    // ── pole and trivial zeros ──────────────────────────────────────
    let pole = epstein_zeta(3.0, 3, &a3, &[0.0; 3], &[0.0; 3]);
    h.check_bool("pole nu=d returns NaN", pole.is_nan());
    let reg_at_pole = epstein_zeta_reg(3.0, 3, &a3, &[0.0; 3], &[0.0; 3]);
    h.check_bool("regularised finite at nu=d", reg_at_pole.is_finite());
    let zero = epstein_zeta(-2.0, 2, &a2, &[0.3, 0.1], &[0.2, 0.4]);
    h.check_complex("trivial zero nu=-2", zero, Complex64::ZERO, 1e-15);
    let minus_one = epstein_zeta(0.0, 2, &a2, &[0.0, 0.0], &[0.3, 0.4]);
    h.check_complex(
        "nu=0 at lattice point",
        minus_one,
        Complex64::new(-1.0, 0.0),
        1e-15,
    );

    // ── reentrancy: parallel sweep must match serial bit-for-bit ────
    let ax = [1.0, 0.3, -0.1, 1.2];
    let xs = [0.15, -0.2];
    let ys = [0.25, -0.15];
    let nus: Vec<f64> = (0..60).map(|i| -9.7 + f64::from(i) * 0.33).collect();
    let serial: Vec<Complex64> = nus
        .iter()
        .map(|&nu| epstein_zeta(nu, 2, &ax, &xs, &ys))
        .collect();
    let parallel: Vec<Complex64> = nus
        .par_iter()
        .map(|&nu| epstein_zeta(nu, 2, &ax, &xs, &ys))
        .collect();
    let bit_identical = serial
        .iter()
        .zip(&parallel)
        .all(|(s, p)| s.re.to_bits() == p.re.to_bits() && s.im.to_bits() == p.im.to_bits());
    h.check_bool("rayon sweep bit-identical to serial", bit_identical);

    h.finish();
}
