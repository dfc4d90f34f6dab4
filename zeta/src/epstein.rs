// SPDX-License-Identifier: AGPL-3.0-only

//! Evaluation driver for the (regularised) Epstein zeta function.
//!
//! One evaluation normalises the lattice to unit covolume, projects both
//! shift vectors into their fundamental cells, picks per-axis truncation
//! radii, runs the two compensated lattice sums of Crandall's formula, and
//! reassembles the answer with the closing gamma factor, undoing the
//! normalisation at the end. Stateless and reentrant: all scratch lives in
//! the call frame.
//!
//! The special cases live in a single gate at the top of the driver:
//! trivial zeros at non-positive even ν, the exposed pole of the
//! non-regularised function at ν = d with y in the zero cell, and the
//! resonance log correction at ν = d + 2k for the regularised variant.

use crate::boxsum::LatticeBox;
use crate::complex::Complex64;
use crate::crandall;
use crate::kahan::KahanComplex;
use crate::linalg;
use crate::tolerances::{EXPONENT_WINDOW, NEGLIGIBLE_SQ};
use std::f64::consts::PI;

/// Smallest radius (in units of √(r²/π)) beyond which the summand is
/// negligible for ν < 10; the truncation boxes extend to G_BOUND + ½ in
/// lattice-scaled length.
const G_BOUND: f64 = 3.2;

/// Epstein zeta function Z_{Λ,ν}(x; y) for the lattice Λ = AZ^d.
///
/// `a` is the d×d generator in row-major order; `x`, `y` are length-d
/// shifts. Returns NaN+NaN·i at the exposed pole ν = d when y projects to
/// the origin of the reciprocal cell. The caller guarantees det A ≠ 0 and
/// d ≥ 1 (checked in debug builds).
#[must_use]
pub fn epstein_zeta(nu: f64, dim: usize, a: &[f64], x: &[f64], y: &[f64]) -> Complex64 {
    epstein_zeta_internal(nu, dim, a, x, y, 1.0, false)
}

/// Regularised Epstein zeta function: e^{2πi x·y}·Z_{Λ,ν}(x;y) with the
/// singular Fourier self-term ŝ(y)/|det A| removed.
///
/// Analytic in y around y = 0; finite at ν = d where the plain function has
/// its pole. Same contract as [`epstein_zeta`].
#[must_use]
pub fn epstein_zeta_reg(nu: f64, dim: usize, a: &[f64], x: &[f64], y: &[f64]) -> Complex64 {
    epstein_zeta_internal(nu, dim, a, x, y, 1.0, true)
}

/// Projection of v into the fundamental cell of the lattice generated by m.
///
/// `m_invt` is the transposed inverse of m. A vector whose lattice
/// coordinates already lie in [−½, ½] componentwise is returned unchanged
/// (bit-identically); otherwise the coordinates are reduced by IEEE
/// remainder and re-embedded.
fn cell_project(dim: usize, m: &[f64], m_invt: &[f64], v: &[f64]) -> Vec<f64> {
    let mut vt = vec![0.0; dim];
    for i in 0..dim {
        let mut acc = 0.0;
        for j in 0..dim {
            acc += m_invt[dim * j + i] * v[j];
        }
        vt[i] = acc;
    }
    if vt.iter().all(|&c| (-0.5..=0.5).contains(&c)) {
        return v.to_vec();
    }
    for c in &mut vt {
        *c = libm::remainder(*c, 1.0);
    }
    let mut out = vec![0.0; dim];
    for i in 0..dim {
        let mut acc = 0.0;
        for j in 0..dim {
            acc += m[dim * i + j] * vt[j];
        }
        out[i] = acc;
    }
    out
}

/// Real-space sum of Crandall's formula over the box |n_i| ≤ cutoffs[i].
///
/// Assumes x and y are already in their fundamental cells; the caller
/// applies the phase for any cell shift.
fn sum_real(
    nu: f64,
    dim: usize,
    lambda: f64,
    m: &[f64],
    x: &[f64],
    y: &[f64],
    cutoffs: &[i64],
    z_arg_bound: f64,
) -> Complex64 {
    let mut lv = vec![0.0; dim];
    let mut acc = KahanComplex::new();
    let mut it = LatticeBox::new(cutoffs);
    while it.advance() {
        linalg::matvec_int(dim, m, it.current(), &mut lv);
        let rot = Complex64::from_polar(-2.0 * PI * linalg::dot(&lv, y));
        for i in 0..dim {
            lv[i] = (lv[i] - x[i]) / lambda;
        }
        acc.add(rot.scale(crandall::g(nu, &lv, 1.0, z_arg_bound)));
    }
    acc.value()
}

/// Reciprocal-space sum of Crandall's formula, skipping the zero centre.
fn sum_fourier(
    nu: f64,
    dim: usize,
    lambda: f64,
    m: &[f64],
    x: &[f64],
    y: &[f64],
    cutoffs: &[i64],
    z_arg_bound: f64,
) -> Complex64 {
    let s = dim as f64 - nu;
    let mut lv = vec![0.0; dim];
    let mut acc = KahanComplex::new();
    let mut it = LatticeBox::new(cutoffs);
    while it.advance() {
        if it.at_origin() {
            continue;
        }
        linalg::matvec_int(dim, m, it.current(), &mut lv);
        for i in 0..dim {
            lv[i] += y[i];
        }
        let rot = Complex64::from_polar(-2.0 * PI * linalg::dot(&lv, x));
        acc.add(rot.scale(crandall::g(s, &lv, lambda, z_arg_bound)));
    }
    acc.value()
}

#[allow(clippy::too_many_lines)]
fn epstein_zeta_internal(
    nu: f64,
    dim: usize,
    a: &[f64],
    x: &[f64],
    y: &[f64],
    lambda: f64,
    reg: bool,
) -> Complex64 {
    debug_assert!(dim >= 1, "dimension must be at least 1");
    debug_assert_eq!(a.len(), dim * dim);
    debug_assert_eq!(x.len(), dim);
    debug_assert_eq!(y.len(), dim);
    let dim_f = dim as f64;

    // invert the generator, read |det| off the LU diagonal, transpose
    let mut m_copy = a.to_vec();
    let mut m_fourier = vec![0.0; dim * dim];
    let mut piv = vec![0usize; dim];
    linalg::invert(dim, &mut m_copy, &mut piv, &mut m_fourier);
    let mut vol = 1.0;
    for k in 0..dim {
        vol *= m_copy[k * dim + k];
    }
    vol = vol.abs();
    linalg::transpose_inplace(dim, &mut m_fourier);
    let is_diagonal = (0..dim).all(|i| (0..dim).all(|j| i == j || a[i * dim + j] == 0.0));

    // scale to unit covolume
    let ms = vol.powf(-1.0 / dim_f);
    let mut m_real = a.to_vec();
    for v in &mut m_real {
        *v *= ms;
    }
    for v in &mut m_fourier {
        *v /= ms;
    }
    let x1: Vec<f64> = x.iter().map(|&c| c * ms).collect();
    let y1: Vec<f64> = y.iter().map(|&c| c / ms).collect();

    // fundamental-cell projections
    let x2 = cell_project(dim, &m_real, &m_fourier, &x1);
    let y2 = cell_project(dim, &m_fourier, &m_real, &y1);

    // per-axis truncation radii
    let cutoff_id = G_BOUND + 0.5;
    let mut cutoffs_real = vec![0_i64; dim];
    let mut cutoffs_fourier = vec![0_i64; dim];
    if is_diagonal {
        for k in 0..dim {
            let diag = m_real[dim * k + k].abs();
            cutoffs_real[k] = (cutoff_id / diag).floor() as i64;
            cutoffs_fourier[k] = (cutoff_id * diag).floor() as i64;
        }
    } else {
        let norm_fourier = linalg::inf_norm(dim, &m_fourier);
        let norm_real = linalg::inf_norm(dim, &m_real);
        for k in 0..dim {
            cutoffs_real[k] = (cutoff_id * norm_fourier).floor() as i64;
            cutoffs_fourier[k] = (cutoff_id * norm_real).floor() as i64;
        }
    }

    // special-case gate, then the generic Crandall evaluation
    let res;
    if nu < 1.0 && (nu / 2.0 - (nu / 2.0).round()).abs() < EXPONENT_WINDOW {
        // trivial zero: non-positive even integer ν
        if linalg::dot(&x2, &x2) == 0.0 && nu == 0.0 {
            res = -Complex64::from_polar(-2.0 * PI * linalg::dot(&x1, &y2));
        } else {
            res = Complex64::ZERO;
        }
    } else if (nu - dim_f).abs() < EXPONENT_WINDOW
        && linalg::dot(&y2, &y2) < NEGLIGIBLE_SQ
        && !reg
    {
        // exposed pole of the plain function at ν = d
        res = Complex64::NAN;
    } else {
        let z_arg_bound = crandall::arg_bound(nu);
        let z_arg_bound_rec = crandall::arg_bound(dim_f - nu);
        let mut vx = vec![0.0; dim];
        for i in 0..dim {
            vx[i] = x1[i] - x2[i];
        }
        let mut xfactor = Complex64::from_polar(-2.0 * PI * linalg::dot(&vx, &y1));

        let s1;
        let mut s2;
        if reg {
            let nc = crandall::g_reg(dim_f - nu, &y1, lambda);
            let rot = Complex64::from_polar(2.0 * PI * linalg::dot(&x1, &y1));
            s2 = sum_fourier(
                nu,
                dim,
                lambda,
                &m_fourier,
                &x1,
                &y2,
                &cutoffs_fourier,
                z_arg_bound_rec,
            );
            // the zero summand of the Fourier sum belongs at y', not ỹ
            if !linalg::vec_eq(&y1, &y2) {
                let g2 = crandall::g(dim_f - nu, &y2, lambda, z_arg_bound_rec);
                let g1 = crandall::g(dim_f - nu, &y1, lambda, z_arg_bound_rec);
                s2 += Complex64::from_polar(-2.0 * PI * linalg::dot(&x1, &y2)).scale(g2)
                    - Complex64::from_polar(-2.0 * PI * linalg::dot(&x1, &y1)).scale(g1);
            }
            s2 = s2 * rot + Complex64::new(nc, 0.0);
            s1 = sum_real(
                nu,
                dim,
                lambda,
                &m_real,
                &x2,
                &y2,
                &cutoffs_real,
                z_arg_bound,
            ) * rot
                * xfactor;
            xfactor = Complex64::ONE;
        } else {
            let nc = Complex64::from_polar(-2.0 * PI * linalg::dot(&x2, &y2))
                .scale(crandall::g(dim_f - nu, &y2, lambda, z_arg_bound_rec));
            s1 = sum_real(
                nu,
                dim,
                lambda,
                &m_real,
                &x2,
                &y2,
                &cutoffs_real,
                z_arg_bound,
            );
            s2 = sum_fourier(
                nu,
                dim,
                lambda,
                &m_fourier,
                &x2,
                &y2,
                &cutoffs_fourier,
                z_arg_bound_rec,
            ) + nc;
        }

        let closing = (lambda * lambda / PI).powf(-nu / 2.0) / libm::tgamma(nu / 2.0);
        res = (xfactor * (s1 + s2.scale(lambda.powi(dim as i32)))).scale(closing);
    }

    // undo the covolume scaling; at the resonances ν = d + 2k the scaling
    // shifted the logarithm of the regularised self-term, which re-enters
    // through the caller's y and volume
    let mut out = res.scale(ms.powf(nu));
    if reg {
        let s = dim_f - nu;
        let k = -(s / 2.0).round();
        if s < 1.0 && s == -2.0 * k {
            let k_i = k as i32;
            let sign = if k_i % 2 == 0 { 1.0 } else { -1.0 };
            let y_sq = linalg::dot(y, y);
            out.re += sign / libm::tgamma(k + 1.0)
                * PI.powf(2.0 * k + dim_f / 2.0)
                * y_sq.powi(k_i)
                * (ms * ms).ln()
                / (libm::tgamma(k + dim_f / 2.0) * vol);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tolerances::CLOSED_FORM_REL;

    fn assert_close(observed: Complex64, expected: Complex64, tol: f64, label: &str) {
        let diff = observed - expected;
        let err_abs = diff.abs();
        let err = if expected.abs() > 0.0 {
            err_abs.min(err_abs / expected.abs())
        } else {
            err_abs
        };
        assert!(err < tol, "{label}: {observed} vs {expected}, err {err:.3e}");
    }

    #[test]
    fn trivial_zero_negative_even() {
        let a = [1.0, 0.0, 0.0, 1.0];
        let x = [0.3, 0.1];
        let y = [0.2, -0.4];
        for &nu in &[-2.0, -4.0, -6.0] {
            let z = epstein_zeta(nu, 2, &a, &x, &y);
            assert_eq!(z, Complex64::ZERO, "nu = {nu}");
            let zr = epstein_zeta_reg(nu, 2, &a, &x, &y);
            assert_eq!(zr, Complex64::ZERO, "reg nu = {nu}");
        }
    }

    #[test]
    fn trivial_zero_nu_zero_is_phase() {
        // ν = 0, x on the lattice: −e^{−2πi x'·ỹ}
        let a = [1.0, 0.0, 0.0, 1.0];
        let x = [0.0, 0.0];
        let y = [0.25, 0.125];
        let z = epstein_zeta(0.0, 2, &a, &x, &y);
        assert_close(z, -Complex64::ONE, 1e-15, "ν=0 at x=0");
    }

    #[test]
    fn pole_returns_nan() {
        let a = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0];
        let zero = [0.0; 3];
        let z = epstein_zeta(3.0, 3, &a, &zero, &zero);
        assert!(z.is_nan(), "ν = d with y = 0 must be the pole");
        // the regularised variant is finite there
        let zr = epstein_zeta_reg(3.0, 3, &a, &zero, &zero);
        assert!(zr.is_finite(), "regularised value at the pole: {zr}");
    }

    #[test]
    fn pole_respects_y_cutoff() {
        let a = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0];
        let zero = [0.0; 3];
        // |y|² = 1e-66 is inside the zero cell of the gate
        let y_tiny = [0.0, 0.0, 1e-33];
        assert!(epstein_zeta(3.0, 3, &a, &zero, &y_tiny).is_nan());
        // |y|² = 1e-62 is outside it
        let y_small = [0.0, 0.0, 1e-31];
        assert!(epstein_zeta(3.0, 3, &a, &zero, &y_small).is_finite());
    }

    #[test]
    fn hurwitz_one_dimensional() {
        // Σ_{n∈Z} |n + 1/2|^{−2} = 2·ζ(2, 1/2) = π²
        let a = [1.0];
        let x = [-0.5];
        let y = [0.0];
        let z = epstein_zeta(2.0, 1, &a, &x, &y);
        let expected = Complex64::new(PI * PI, 0.0);
        assert_close(z, expected, CLOSED_FORM_REL, "2ζ(2,1/2)");
    }

    #[test]
    fn reg_equals_plain_at_y_zero() {
        // with y = 0 the removed self-term vanishes for ν < d
        let a = [1.0, 0.25, 0.0, 1.1];
        let x = [0.2, -0.3];
        let y = [0.0, 0.0];
        for &nu in &[-1.5, 0.5, 1.5] {
            let plain = epstein_zeta(nu, 2, &a, &x, &y);
            let reg = epstein_zeta_reg(nu, 2, &a, &x, &y);
            assert_close(reg, plain, 1e-13, "reg vs plain at y=0");
        }
    }

    #[test]
    fn deterministic_across_calls() {
        // fixed summation order: repeated evaluation is bit-identical
        let a = [1.0, 0.3, -0.2, 0.9];
        let x = [0.15, 0.45];
        let y = [-0.35, 0.2];
        let z1 = epstein_zeta(2.5, 2, &a, &x, &y);
        let z2 = epstein_zeta(2.5, 2, &a, &x, &y);
        assert_eq!(z1.re.to_bits(), z2.re.to_bits());
        assert_eq!(z1.im.to_bits(), z2.im.to_bits());
    }

    #[test]
    fn cell_projection_fixes_interior_points() {
        let m = [1.0, 0.0, 0.0, 1.0];
        let m_invt = [1.0, 0.0, 0.0, 1.0];
        let v = [0.25, -0.5];
        let p = cell_project(2, &m, &m_invt, &v);
        assert_eq!(p, v.to_vec(), "interior vector returned unchanged");
        let w = [1.25, 0.0];
        let q = cell_project(2, &m, &m_invt, &w);
        assert!((q[0] - 0.25).abs() < 1e-15);
        assert!(q[1].abs() < 1e-15);
    }
}
