// SPDX-License-Identifier: AGPL-3.0-only

//! Provenance metadata for all hardcoded reference values.
//!
//! Every expected value in the validation binaries and integration tests
//! traces back to a closed form from the literature, evaluated at an
//! exponent where it reduces to exactly known constants. This module
//! centralizes that metadata so the binaries carry machine-readable
//! provenance.
//!
//! # Data sources
//!
//! | Constant / identity | Source |
//! |--------------------|--------|
//! | Madelung constant (NaCl) | Borwein, Borwein & Taylor, J. Math. Phys. 26, 2999 (1985) |
//! | Dirichlet η, β, λ reductions | Zucker, J. Phys. A 7, 1568 (1974) |
//! | Catalan constant G | OEIS A006752 |
//! | Apéry constant ζ(3) | OEIS A002117 |
//! | ζ(1/2) | OEIS A059750 |
//! | β(1/2) | OEIS A195103 |

/// A single provenance record tying a reference value to its origin.
#[derive(Debug, Clone)]
pub struct ReferenceProvenance {
    /// Human-readable label (e.g. "Madelung 3D")
    pub label: &'static str,
    /// Closed form the value comes from
    pub formula: &'static str,
    /// Literature source
    pub source: &'static str,
    /// The reference value itself
    pub value: f64,
    /// Lattice sum it validates (dimension, shifts, exponent)
    pub case: &'static str,
}

/// Madelung constant of the rock-salt structure.
///
/// Σ'_{z∈Z³} (−1)^{z₁+z₂+z₃}/|z| — the alternating sum realised by the
/// shift y = (½,½,½) at ν = 1.
pub const MADELUNG_3D: ReferenceProvenance = ReferenceProvenance {
    label: "Madelung 3D",
    formula: "sum_{z in Z^3}' (-1)^(z1+z2+z3)/|z|",
    source: "Borwein, Borwein & Taylor (1985), J. Math. Phys. 26, 2999",
    value: -1.7475645946331821906362120355443974,
    case: "d=3, A=I, x=0, y=(1/2,1/2,1/2), nu=1",
};

/// 1D half-shift at ν = 2: 2·ζ(2, 1/2) = π².
pub const HURWITZ_1D: ReferenceProvenance = ReferenceProvenance {
    label: "1D Hurwitz",
    formula: "2*zeta(2,1/2) = pi^2",
    source: "Hurwitz zeta special value, DLMF 25.11",
    value: 9.869604401089358618834490999876151135,
    case: "d=1, A=(1), x=(-1/2), y=0, nu=2",
};

/// Riemann zeta at 1/2, for the 2D alternating case at ν = 1.
pub const ZETA_HALF: ReferenceProvenance = ReferenceProvenance {
    label: "zeta(1/2)",
    formula: "Riemann zeta at s=1/2",
    source: "OEIS A059750",
    value: -1.46035450880958681288949915251529801,
    case: "enters -4*eta(1/2)*beta(1/2)",
};

/// Dirichlet beta at 1/2, for the 2D alternating case at ν = 1.
pub const BETA_HALF: ReferenceProvenance = ReferenceProvenance {
    label: "beta(1/2)",
    formula: "Dirichlet beta at s=1/2",
    source: "OEIS A195103",
    value: 0.6676914571896091766586909734347728,
    case: "enters -4*eta(1/2)*beta(1/2)",
};

/// Catalan constant G = β(2).
pub const CATALAN: ReferenceProvenance = ReferenceProvenance {
    label: "Catalan G",
    formula: "Dirichlet beta at s=2",
    source: "OEIS A006752",
    value: 0.915965594177219015054603514932384110774,
    case: "enters 2D nu=4 and 4D nu=6 closed forms",
};

/// Apéry constant ζ(3).
pub const APERY: ReferenceProvenance = ReferenceProvenance {
    label: "zeta(3)",
    formula: "Riemann zeta at s=3",
    source: "OEIS A002117",
    value: 1.202056903159594285399738161511449990765,
    case: "enters 4D nu=6 closed form",
};

/// All records, for sweep checks.
pub const ALL: &[&ReferenceProvenance] = &[
    &MADELUNG_3D,
    &HURWITZ_1D,
    &ZETA_HALF,
    &BETA_HALF,
    &CATALAN,
    &APERY,
];
