// SPDX-License-Identifier: AGPL-3.0-only

//! Odometer iteration over integer lattice boxes.
//!
//! Both lattice sums iterate the box |n_i| ≤ c_i in a fixed order: axis 0
//! varies fastest, exactly the order of enumerating a flat index n and
//! decoding `(n / stride_i) % span_i − c_i`. Floating-point summation is
//! order-dependent, so this order is part of the engine's contract. The
//! iterator mutates its counting vector in place instead of redoing the
//! divisions per point.

/// Odometer over the integer box `|n_i| ≤ radii[i]`.
#[derive(Debug)]
pub struct LatticeBox {
    radii: Vec<i64>,
    n: Vec<i64>,
    fresh: bool,
    done: bool,
}

impl LatticeBox {
    /// Iterator positioned before the first point `(−c_0, …, −c_{d−1})`.
    #[must_use]
    pub fn new(radii: &[i64]) -> Self {
        debug_assert!(radii.iter().all(|&c| c >= 0));
        Self {
            radii: radii.to_vec(),
            n: radii.iter().map(|&c| -c).collect(),
            fresh: true,
            done: radii.is_empty(),
        }
    }

    /// Total number of points, Π (2·c_i + 1).
    #[must_use]
    pub fn len(&self) -> usize {
        self.radii.iter().map(|&c| 2 * c as usize + 1).product()
    }

    /// True only for the degenerate zero-dimensional box.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.radii.is_empty()
    }

    /// Step to the next point. Returns false once the box is exhausted.
    pub fn advance(&mut self) -> bool {
        if self.done {
            return false;
        }
        if self.fresh {
            self.fresh = false;
            return true;
        }
        for k in 0..self.n.len() {
            if self.n[k] < self.radii[k] {
                self.n[k] += 1;
                for j in 0..k {
                    self.n[j] = -self.radii[j];
                }
                return true;
            }
        }
        self.done = true;
        false
    }

    /// The current counting vector.
    #[must_use]
    pub fn current(&self) -> &[i64] {
        &self.n
    }

    /// True at the centre point n = 0.
    #[must_use]
    pub fn at_origin(&self) -> bool {
        self.n.iter().all(|&c| c == 0)
    }
}
