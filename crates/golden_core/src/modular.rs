//! Weight-2 A₅ modular forms evaluated at the golden point.
//!
//! At τ₀ = exp(2πi/5) the five components of the weight-2 multiplet Y⁽⁵⁾ are
//! real and proportional to (1, φ⁻¹, φ⁻², −φ⁻², −φ⁻¹) (Theorem 1). They are
//! evaluated here in closed form rather than through q-expansions, so the
//! output is exact to machine precision.

use std::fmt;
use std::ops::Index;

use num_complex::Complex;
use serde::{Deserialize, Serialize};

use crate::constants::{GOLDEN_ARG, PHI, PHI_INV, PHI_INV2};

/// Tolerance of the Z₅ stabilizer condition Y₄ + Y₅ = −1.
const STABILIZER_TOLERANCE: f64 = 1e-10;

/// A point in the upper half-plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModularPoint {
    pub tau: Complex<f64>,
}

impl ModularPoint {
    pub fn new(tau: Complex<f64>) -> Self {
        Self { tau }
    }

    /// τ₀ = exp(2πi/5).
    pub fn golden() -> Self {
        Self::new(Complex::from_polar(1.0, GOLDEN_ARG))
    }

    pub fn real(&self) -> f64 {
        self.tau.re
    }

    pub fn imag(&self) -> f64 {
        self.tau.im
    }

    pub fn in_upper_half_plane(&self) -> bool {
        self.tau.im > 0.0
    }
}

impl fmt::Display for ModularPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "τ = {:.6} + {:.6}i", self.real(), self.imag())
    }
}

/// The five Y-ratios Y₁..Y₅ at τ₀, stored zero-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YRatios(pub [f64; 5]);

impl YRatios {
    /// Theorem 1 values, normalised so that Y₁ = 1.
    pub const GOLDEN: YRatios = YRatios([1.0, PHI_INV, PHI_INV2, -PHI_INV2, -PHI_INV]);

    pub fn values(&self) -> [f64; 5] {
        self.0
    }

    /// Y₄ + Y₅, which Corollary 2 fixes to −1.
    pub fn corollary_sum(&self) -> f64 {
        self.0[3] + self.0[4]
    }

    pub fn scaled(&self, factor: f64) -> Self {
        YRatios(self.0.map(|y| y * factor))
    }
}

impl Index<usize> for YRatios {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

/// A₅ modular forms at the golden point (Section 2 of the paper).
#[derive(Debug, Clone, Copy)]
pub struct A5ModularForms {
    pub tau_0: ModularPoint,
}

impl Default for A5ModularForms {
    fn default() -> Self {
        Self::new()
    }
}

impl A5ModularForms {
    pub fn new() -> Self {
        Self {
            tau_0: ModularPoint::golden(),
        }
    }

    pub fn golden_point(&self) -> ModularPoint {
        self.tau_0
    }

    /// Y-ratios with Y₁ = 1.
    pub fn y_ratios(&self) -> YRatios {
        YRatios::GOLDEN
    }

    /// Y-ratios carrying the overall Dedekind-η normalisation.
    pub fn y_ratios_unnormalized(&self) -> YRatios {
        YRatios::GOLDEN.scaled(self.eta_normalization())
    }

    /// Overall normalisation from η(τ₀). Only ratios enter the predictions, so
    /// this stays at 1 until the q-expansion value is needed.
    pub fn eta_normalization(&self) -> f64 {
        1.0
    }

    /// Z₅ stabilizer condition at τ₀, checked through Corollary 2 (Y₄ + Y₅ = −1).
    pub fn satisfies_stabilizer(&self) -> bool {
        (self.y_ratios().corollary_sum() + 1.0).abs() < STABILIZER_TOLERANCE
    }

    pub fn weight_suppression(&self, weight: f64) -> f64 {
        weight_suppression(weight)
    }
}

/// Modular weight suppression F_w(τ₀)/F₂(τ₀)^{w/2} ∝ φ^{−(w−2)/2} (Equation 2.7).
///
/// Any real weight is accepted; weights below 2 enhance instead of suppress.
pub fn weight_suppression(weight: f64) -> f64 {
    PHI.powf(-(weight - 2.0) / 2.0)
}
