// SPDX-License-Identifier: AGPL-3.0-only

//! Compensated (Kahan) summation.
//!
//! The real-space and reciprocal-space lattice sums cancel against each other
//! near ν ≈ d; plain accumulation loses the bits that cancellation needs.
//! Both sum loops share this one compensated primitive.

use crate::complex::Complex64;

/// Kahan compensated accumulator for f64.
#[derive(Debug, Clone, Copy, Default)]
pub struct KahanSum {
    sum: f64,
    compensation: f64,
}

impl KahanSum {
    /// Fresh accumulator at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sum: 0.0,
            compensation: 0.0,
        }
    }

    /// Add one term, carrying the rounding error into the compensation.
    #[inline]
    pub fn add(&mut self, x: f64) {
        let y = x - self.compensation;
        let t = self.sum + y;
        self.compensation = (t - self.sum) - y;
        self.sum = t;
    }

    /// The compensated total.
    #[inline]
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.sum
    }
}

/// Componentwise Kahan accumulator for complex terms.
#[derive(Debug, Clone, Copy, Default)]
pub struct KahanComplex {
    re: KahanSum,
    im: KahanSum,
}

impl KahanComplex {
    /// Fresh accumulator at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            re: KahanSum::new(),
            im: KahanSum::new(),
        }
    }

    /// Add one complex term.
    #[inline]
    pub fn add(&mut self, z: Complex64) {
        self.re.add(z.re);
        self.im.add(z.im);
    }

    /// The compensated total.
    #[inline]
    #[must_use]
    pub const fn value(&self) -> Complex64 {
        Complex64::new(self.re.value(), self.im.value())
    }
}
