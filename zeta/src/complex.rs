// SPDX-License-Identifier: AGPL-3.0-only

//! Complex f64 arithmetic for lattice sums.
//!
//! The evaluation engine only needs phase factors e^{iθ}, products, scaling
//! by real summands, and accumulation, so complex numbers are plain
//! `(re, im)` pairs rather than a dependency on a full complex library.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// Complex number with f64 real and imaginary parts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Complex64 {
    /// Real part.
    pub re: f64,
    /// Imaginary part.
    pub im: f64,
}

impl Complex64 {
    /// Additive identity.
    pub const ZERO: Self = Self { re: 0.0, im: 0.0 };
    /// Multiplicative identity.
    pub const ONE: Self = Self { re: 1.0, im: 0.0 };
    /// Both components NaN; the pole return value of the non-regularised
    /// Epstein zeta at ν = d.
    pub const NAN: Self = Self {
        re: f64::NAN,
        im: f64::NAN,
    };

    #[inline]
    #[must_use]
    /// Construct from real and imaginary parts.
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Complex conjugate.
    #[inline]
    #[must_use]
    pub const fn conj(self) -> Self {
        Self {
            re: self.re,
            im: -self.im,
        }
    }

    /// |z|².
    #[inline]
    #[must_use]
    pub fn abs_sq(self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// |z|.
    #[inline]
    #[must_use]
    pub fn abs(self) -> f64 {
        self.abs_sq().sqrt()
    }

    /// e^{i theta}
    #[inline]
    #[must_use]
    pub fn from_polar(theta: f64) -> Self {
        Self {
            re: theta.cos(),
            im: theta.sin(),
        }
    }

    /// Multiply by a real scalar.
    #[inline]
    #[must_use]
    pub fn scale(self, s: f64) -> Self {
        Self {
            re: self.re * s,
            im: self.im * s,
        }
    }

    /// True if either component is NaN.
    #[inline]
    #[must_use]
    pub fn is_nan(self) -> bool {
        self.re.is_nan() || self.im.is_nan()
    }

    /// True if both components are finite.
    #[inline]
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }
}

impl Add for Complex64 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            re: self.re + rhs.re,
            im: self.im + rhs.im,
        }
    }
}

impl AddAssign for Complex64 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.re += rhs.re;
        self.im += rhs.im;
    }
}

impl Sub for Complex64 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self {
            re: self.re - rhs.re,
            im: self.im - rhs.im,
        }
    }
}

impl SubAssign for Complex64 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.re -= rhs.re;
        self.im -= rhs.im;
    }
}

impl Mul for Complex64 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self {
            re: self.re * rhs.re - self.im * rhs.im,
            im: self.re * rhs.im + self.im * rhs.re,
        }
    }
}

impl Neg for Complex64 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self {
            re: -self.re,
            im: -self.im,
        }
    }
}

impl fmt::Display for Complex64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im >= 0.0 {
            write!(f, "{:.6}+{:.6}i", self.re, self.im)
        } else {
            write!(f, "{:.6}{:.6}i", self.re, self.im)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complex_add_sub() {
        let a = Complex64::new(1.0, 2.0);
        let b = Complex64::new(3.0, -1.0);
        let c = a + b;
        assert!((c.re - 4.0).abs() < 1e-15);
        assert!((c.im - 1.0).abs() < 1e-15);
        let d = a - b;
        assert!((d.re - (-2.0)).abs() < 1e-15);
        assert!((d.im - 3.0).abs() < 1e-15);
    }

    #[test]
    fn complex_mul() {
        let a = Complex64::new(1.0, 2.0);
        let b = Complex64::new(3.0, 4.0);
        let c = a * b;
        assert!((c.re - (-5.0)).abs() < 1e-15);
        assert!((c.im - 10.0).abs() < 1e-15);
    }

    #[test]
    fn complex_from_polar_euler() {
        let z = Complex64::from_polar(std::f64::consts::PI);
        assert!((z.re - (-1.0)).abs() < 1e-14, "e^(iπ) = -1");
        assert!(z.im.abs() < 1e-14, "e^(iπ) imag = 0");
    }

    #[test]
    fn complex_from_polar_quarter() {
        let z = Complex64::from_polar(std::f64::consts::FRAC_PI_4);
        let s2 = std::f64::consts::FRAC_1_SQRT_2;
        assert!((z.re - s2).abs() < 1e-15);
        assert!((z.im - s2).abs() < 1e-15);
    }

    #[test]
    fn complex_mul_conj_gives_abs_sq() {
        let a = Complex64::new(3.0, 4.0);
        let p = a * a.conj();
        assert!((p.re - 25.0).abs() < 1e-14);
        assert!(p.im.abs() < 1e-14);
        assert!((a.abs() - 5.0).abs() < 1e-15);
    }

    #[test]
    fn complex_scale_and_neg() {
        let a = Complex64::new(1.5, -2.5);
        let s = a.scale(-2.0);
        assert!((s.re - (-3.0)).abs() < 1e-15);
        assert!((s.im - 5.0).abs() < 1e-15);
        assert_eq!(-a, Complex64::new(-1.5, 2.5));
    }

    #[test]
    fn nan_propagates_and_detects() {
        assert!(Complex64::NAN.is_nan());
        assert!(!Complex64::NAN.is_finite());
        let z = Complex64::NAN.scale(2.0) + Complex64::ONE;
        assert!(z.is_nan());
        assert!(Complex64::ONE.is_finite());
    }

    #[test]
    fn phase_factors_compose() {
        // e^{iθ1}·e^{iθ2} = e^{i(θ1+θ2)}
        let a = Complex64::from_polar(0.7);
        let b = Complex64::from_polar(-1.9);
        let c = a * b;
        let d = Complex64::from_polar(0.7 - 1.9);
        assert!((c.re - d.re).abs() < 1e-15);
        assert!((c.im - d.im).abs() < 1e-15);
    }
}
