// SPDX-License-Identifier: AGPL-3.0-only

//! Validation of the Crandall summand: branch structure, cut-over bounds,
//! and the resonance regularisation.
//!
//! The three branch points of the summand carry the analytic structure of
//! the whole engine; each is pinned here, including seamlessness of every
//! branch switch.

use coldspring_zeta::crandall::{arg_bound, g, g_reg};
use coldspring_zeta::gamma;
use coldspring_zeta::tolerances::{ASYMPTOTIC_CUTOVER_ABS, RESONANCE_TAYLOR_CONTINUITY_REL};
use coldspring_zeta::validation::ValidationHarness;
use std::f64::consts::PI;

fn main() {
    let mut h = ValidationHarness::new("crandall");

    // ── cut-over bound step function ────────────────────────────────
    h.check_abs("bound at nu=2", arg_bound(2.0), PI * 2.6 * 2.6, 1e-12);
    h.check_abs("bound at nu=4", arg_bound(4.0), PI * 2.6 * 2.6, 1e-12);
    h.check_abs("bound at nu=3", arg_bound(3.0), PI * 2.99 * 2.99, 1e-12);
    h.check_abs("bound at nu=1", arg_bound(1.0), PI * 3.15 * 3.15, 1e-12);
    h.check_abs("bound at nu=-5", arg_bound(-5.0), PI * 3.35 * 3.35, 1e-12);
    h.check_abs("bound at nu=60", arg_bound(60.0), PI * 3.5 * 3.5, 1e-12);
    h.check_abs("bound sentinel at nu=500", arg_bound(500.0), 1e16, 1.0);
    h.check_abs(
        "bound window edge nu=2+1e-6",
        arg_bound(2.0 + 1e-6),
        PI * 2.99 * 2.99,
        1e-12,
    );

    // ── removable limit ─────────────────────────────────────────────
    h.check_rel("g at origin = -2/nu", g(3.0, &[0.0; 3], 1.0, 1e16), -2.0 / 3.0, 1e-15);
    h.check_rel(
        "g below cutoff = -2/nu",
        g(3.0, &[1e-33, 0.0, 0.0], 1.0, 1e16),
        -2.0 / 3.0,
        1e-15,
    );

    // ── gamma branch identity at ν = 2: Γ(1,r²)/r² = e^{−r²}/r² ─────
    let z = [0.4, 0.3];
    let r2 = PI * (z[0] * z[0] + z[1] * z[1]);
    h.check_rel("g(2,z) exponential form", g(2.0, &z, 1.0, 1e16), (-r2).exp() / r2, 1e-13);

    // ── asymptotic cut-over seamlessness ────────────────────────────
    for &nu in &[1.0, 3.0, -2.5, 6.0] {
        let bound = arg_bound(nu);
        let r = ((bound * 1.000001) / PI).sqrt();
        let zb = [r, 0.0];
        h.check_abs(
            &format!("asymptotic cut-over nu={nu}"),
            g(nu, &zb, 1.0, bound),
            g(nu, &zb, 1.0, 1e16),
            ASYMPTOTIC_CUTOVER_ABS,
        );
    }

    // ── regularised summand, generic s ──────────────────────────────
    let s = 1.3;
    let expected = -libm::tgamma(s / 2.0) * gamma::gamma_star(s / 2.0, PI * 0.1);
    let z_gen = [(0.1_f64).sqrt(), 0.0];
    h.check_rel("g_reg generic", g_reg(s, &z_gen, 1.0), expected, 1e-14);

    // ── resonance branch ────────────────────────────────────────────
    h.check_rel(
        "g_reg(0, 0) = -euler_gamma",
        g_reg(0.0, &[0.0, 0.0], 1.0),
        -0.57721566490153286555,
        1e-15,
    );
    h.check_rel("g_reg(-2, 0) = 1", g_reg(-2.0, &[0.0, 0.0], 1.0), 1.0, 1e-15);
    h.check_rel("g_reg(-4, 0) = 1/2", g_reg(-4.0, &[0.0, 0.0], 1.0), 0.5, 1e-15);

    // Taylor window cut-over at r² = 0.01π: the tabulated series just below
    // the window must agree with the direct combination Γ(0,r²) + ln r²,
    // whose cancellation the series exists to avoid
    let cutoff = 0.1 * 0.1 * PI;
    let arg_below = cutoff * 0.999;
    let series = g_reg(0.0, &[(arg_below / PI).sqrt()], 1.0);
    let direct = gamma::ugamma(0.0, arg_below) + arg_below.ln();
    h.check_rel(
        "resonance Taylor cut-over",
        series,
        direct,
        RESONANCE_TAYLOR_CONTINUITY_REL,
    );

    // prefactor enters only through r² and the -r^{2k}·ln p² counterterm
    let z1 = [0.6, 0.2];
    let z2 = [1.2, 0.4];
    h.check_rel(
        "g prefactor folding",
        g(1.5, &z1, 2.0, 1e16),
        g(1.5, &z2, 1.0, 1e16),
        1e-15,
    );

    h.finish();
}
