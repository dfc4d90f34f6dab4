// SPDX-License-Identifier: AGPL-3.0-only

//! Validation of the incomplete-gamma kernel, branch by branch.
//!
//! Each of the five algorithm regions is pinned with closed-form references
//! (exponential, erfc-based, integer-a finite sums) plus the upward
//! recurrence Γ(a+1,x) = a·Γ(a,x) + x^a·e^{−x} across region boundaries.

use coldspring_zeta::gamma::{domain, domain_star, gamma_star, ugamma, GammaRegion};
use coldspring_zeta::tolerances::INCOMPLETE_GAMMA_REL;
use coldspring_zeta::validation::ValidationHarness;
use std::f64::consts::PI;

/// Γ(n, x) for integer n ≥ 1: (n−1)!·e^{−x}·Σ_{k<n} x^k/k!.
fn ugamma_integer(n: u32, x: f64) -> f64 {
    let mut fact = 1.0;
    for k in 2..n {
        fact *= f64::from(k);
    }
    let mut sum = 0.0;
    let mut term = 1.0;
    for k in 0..n {
        if k > 0 {
            term *= x / f64::from(k);
        }
        sum += term;
    }
    fact * (-x).exp() * sum
}

fn main() {
    let mut h = ValidationHarness::new("gamma");

    // ── region geometry ─────────────────────────────────────────────
    h.check_bool("qt region", domain(0.5, 1.0) == GammaRegion::TaylorOrigin);
    h.check_bool("rek region", domain(-1.5, 0.7) == GammaRegion::Recurrence);
    h.check_bool(
        "cf region",
        domain(1.0, 2.0) == GammaRegion::ContinuedFraction,
    );
    h.check_bool(
        "ua region (a<=alpha)",
        domain(15.0, 20.0) == GammaRegion::UniformAsymptotic,
    );
    h.check_bool(
        "ua region (a>alpha)",
        domain(15.0, 5.0) == GammaRegion::UniformAsymptotic,
    );
    h.check_bool("pt region", domain(15.0, 4.0) == GammaRegion::PowerSeries);
    h.check_bool(
        "star selector widens pt",
        domain_star(0.5, 1.0) == GammaRegion::PowerSeries
            && domain_star(-0.6, 1e-5) == GammaRegion::PowerSeries
            && domain_star(-0.6, 0.7) == GammaRegion::Recurrence,
    );

    // ── qt: Γ(1,x) = e^{−x}, Γ(1/2,x) = √π·erfc(√x) ─────────────────
    for &x in &[0.1, 0.5, 1.0, 1.4] {
        h.check_rel(
            &format!("qt Gamma(1,{x})"),
            ugamma(1.0, x),
            (-x).exp(),
            INCOMPLETE_GAMMA_REL,
        );
    }
    for &x in &[0.01, 0.3, 1.0] {
        h.check_rel(
            &format!("qt Gamma(1/2,{x})"),
            ugamma(0.5, x),
            PI.sqrt() * libm::erfc(x.sqrt()),
            INCOMPLETE_GAMMA_REL,
        );
    }

    // ── cf and both ua branches: integer-a finite sums ──────────────
    for &(n, x) in &[(2_u32, 2.0), (5, 3.0), (15, 20.0), (15, 5.0), (15, 4.0)] {
        h.check_rel(
            &format!("Gamma({n},{x}) closed form"),
            ugamma(f64::from(n), x),
            ugamma_integer(n, x),
            INCOMPLETE_GAMMA_REL,
        );
    }

    // ── rek: recurrence down from the erfc form ─────────────────────
    let x: f64 = 0.7;
    let g_half = PI.sqrt() * libm::erfc(x.sqrt());
    let g_mhalf = (g_half - x.powf(-0.5) * (-x).exp()) / (-0.5);
    let g_m3half = (g_mhalf - x.powf(-1.5) * (-x).exp()) / (-1.5);
    let g_m5half = (g_m3half - x.powf(-2.5) * (-x).exp()) / (-2.5);
    h.check_rel("rek Gamma(-1/2,0.7)", ugamma(-0.5, x), g_mhalf, 1e-13);
    h.check_rel("rek Gamma(-3/2,0.7)", ugamma(-1.5, x), g_m3half, 1e-12);
    h.check_rel("rek Gamma(-5/2,0.7)", ugamma(-2.5, x), g_m5half, 1e-12);

    // ── γ*: removable limits and identities ─────────────────────────
    h.check_abs("gamma*(a,0) = 1/Gamma(a+1)", gamma_star(2.5, 0.0), 1.0 / libm::tgamma(3.5), 1e-14);
    h.check_abs("gamma*(0,0) = 0", gamma_star(0.0, 0.0), 0.0, 1e-300);
    h.check_abs("gamma*(-3,~0) = 0", gamma_star(-3.0, 1e-18), 0.0, 1e-300);
    for &x in &[0.5, 2.0, 7.0] {
        h.check_rel(
            &format!("gamma*(-2,{x}) = x^2"),
            gamma_star(-2.0, x),
            x * x,
            1e-13,
        );
    }
    for &x in &[0.2, 1.0, 3.0, 20.0] {
        h.check_rel(
            &format!("gamma*(1,{x})"),
            gamma_star(1.0, x),
            (1.0 - (-x).exp()) / x,
            1e-13,
        );
    }
    for &x in &[0.04, 0.25, 1.0, 4.0] {
        h.check_rel(
            &format!("gamma*(1/2,{x})"),
            gamma_star(0.5, x),
            libm::erf(x.sqrt()) / x.sqrt(),
            1e-13,
        );
    }

    // ── complementarity: Γ(a,x) + γ*(a,x)·Γ(a)·x^a = Γ(a) ───────────
    for &(a, x) in &[(0.75, 0.5), (2.5, 3.0), (1.25, 0.9), (4.0, 6.0), (-0.25, 1.1)] {
        let total = ugamma(a, x) + gamma_star(a, x) * libm::tgamma(a) * x.powf(a);
        h.check_rel(
            &format!("Gamma({a},{x}) complementarity"),
            total,
            libm::tgamma(a),
            1e-12,
        );
    }

    h.finish();
}
