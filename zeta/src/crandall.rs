// SPDX-License-Identifier: AGPL-3.0-only

//! The per-lattice-point summand of Crandall's formula.
//!
//! For a lattice point z with scaling weight p, the real-space and
//! reciprocal-space sums both add terms of the shape
//! Γ(ν/2, r²) / (r²)^{ν/2} with r² = π·p²·|z|². This module evaluates that
//! summand, its asymptotic large-r² form, and the regularised variant that
//! replaces the zero summand of the reciprocal sum, including the
//! logarithmic branch at the resonances ν = d + 2k.
//!
//! The three branch points here (removable limit, asymptotic cut-over,
//! resonance Taylor window) carry the analytic structure that makes the
//! whole engine accurate; the constants are load-bearing.

use crate::gamma;
use crate::linalg::dot;
use crate::tolerances::{EXPONENT_WINDOW, NEGLIGIBLE_SQ};
use std::f64::consts::PI;

/// Lower bound on r² above which the asymptotic expansion of Γ(ν/2, r²)
/// keeps at least 18 digits, as a step function of ν.
///
/// The thresholds in √(r²/π) are 2.6 (ν within 2⁻³⁰ of 2 or 4), 2.99
/// (ν ∈ (1.6, 4.4)), 3.15 (ν ∈ (−3, 8)), 3.35 (ν ∈ (−70, 40)), 3.5
/// (ν ∈ (−600, 80)); outside those the asymptotic form is never used.
/// This switch decides how many summands each sum contributes before the
/// summand changes branches.
#[must_use]
pub fn arg_bound(nu: f64) -> f64 {
    let eps = EXPONENT_WINDOW;
    if (nu > 2.0 - eps && nu < 2.0 + eps) || (nu > 4.0 - eps && nu < 4.0 + eps) {
        return PI * 2.6 * 2.6;
    }
    if nu > 1.6 && nu < 4.4 {
        return PI * 2.99 * 2.99;
    }
    if nu > -3.0 && nu < 8.0 {
        return PI * 3.15 * 3.15;
    }
    if nu > -70.0 && nu < 40.0 {
        return PI * 3.35 * 3.35;
    }
    if nu > -600.0 && nu < 80.0 {
        return PI * 3.5 * 3.5;
    }
    1e16 // never use the expansion for exponents this large
}

/// Crandall summand g(ν, z; p) = Γ(ν/2, r²) / (r²)^{ν/2}, r² = π·p²·|z|².
///
/// Below [`NEGLIGIBLE_SQ`] the removable limit −2/ν applies; above
/// `z_arg_bound` the asymptotic form e^{−r²}(−2 + 2r² + ν)/(2r⁴) takes over.
/// The result is real; callers fold it into their phase factors.
#[must_use]
pub fn g(nu: f64, z: &[f64], prefactor: f64, z_arg_bound: f64) -> f64 {
    let mut z_argument = dot(z, z);
    z_argument *= PI * prefactor * prefactor;

    if z_argument < NEGLIGIBLE_SQ {
        return -2.0 / nu;
    }
    if z_argument > z_arg_bound {
        return (-z_argument).exp() * (-2.0 + 2.0 * z_argument + nu)
            / (2.0 * z_argument * z_argument);
    }
    gamma::ugamma(nu / 2.0, z_argument) / z_argument.powf(nu / 2.0)
}

/// Taylor window for the s = 0 resonance branch: r² < 0.1²·π ≈ 0.031.
const RESONANCE_TAYLOR_CUTOFF: f64 = 0.1 * 0.1 * PI;

/// Series for r^{0}·(Γ(0, r²) + ln r²) about r² = 0, 10 terms.
///
/// Avoids the cancellation between Γ(0, r²) and ln r², both of which blow
/// up logarithmically while their sum tends to −γ_E.
const RESONANCE_TAYLOR: [f64; 10] = [
    -0.57721566490153286555,
    1.0,
    -0.25,
    0.05555555555555555,
    -0.010416666666666666,
    0.0016666666666666668,
    -0.0002314814814814815,
    0.00002834467120181406,
    -3.1001984126984127e-6,
    3.0619243582206544e-7,
];

/// Regularised zero summand at the resonance s = −2k (i.e. ν = d + 2k):
/// r^{2k}·(Γ(−k, r²) + ((−1)^k/k!)·ln r²) − r^{2k}·ln p².
fn g_reg_resonance(s: f64, arg: f64, k: f64, prefactor: f64) -> f64 {
    let mut g_reg = 0.0;
    if s == 0.0 && arg < RESONANCE_TAYLOR_CUTOFF {
        let mut pow = 1.0;
        for c in RESONANCE_TAYLOR {
            g_reg += c * pow;
            pow *= arg;
        }
    } else if arg == 0.0 {
        g_reg = 1.0 / k;
    } else {
        let sign = if (k as i64) % 2 == 0 { 1.0 } else { -1.0 };
        g_reg = arg.powi(k as i32)
            * (gamma::ugamma(-k, arg) + (sign / libm::tgamma(k + 1.0)) * arg.ln());
    }
    // polynomial of order k from the free weight p
    g_reg -= arg.powi(k as i32) * (prefactor * prefactor).ln();
    g_reg
}

/// Regularised zero summand of the reciprocal sum, s = d − ν.
///
/// Generic s: −Γ(s/2)·γ*(s/2, r²). At s = −2k the gamma factor has a pole
/// and the logarithmic branch of [`g_reg_resonance`] applies instead.
#[must_use]
pub fn g_reg(s: f64, z: &[f64], prefactor: f64) -> f64 {
    let mut z_argument = dot(z, z);
    z_argument *= PI * prefactor * prefactor;
    let k = -(s / 2.0).round();
    if s < 1.0 && s == -2.0 * k {
        return g_reg_resonance(s, z_argument, k, prefactor);
    }
    -libm::tgamma(s / 2.0) * gamma::gamma_star(s / 2.0, z_argument)
}
