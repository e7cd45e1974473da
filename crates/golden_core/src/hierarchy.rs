//! Physical Yukawa couplings with modular weight suppression (Section 4).

use nalgebra::{Matrix3, SymmetricEigen};
use serde::{Deserialize, Serialize};

use crate::constants::{MASS_FLOOR, PHI};
use crate::error::{GoldenError, Result};
use crate::matrix::GoldenYukawaMatrix;
use crate::modular::weight_suppression;

/// Overall coupling g_F used by the paper's tables.
pub const DEFAULT_COUPLING: f64 = 1.0;

/// Modular weights (k₁, k₂, k₃) of the three generations.
///
/// Stored as reals: the closed form φ^{−k/2} is defined for any weight, even
/// though the paper only uses even integers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModularWeights(pub [f64; 3]);

impl Default for ModularWeights {
    fn default() -> Self {
        Self([6.0, 4.0, 0.0])
    }
}

impl From<[i32; 3]> for ModularWeights {
    fn from(k: [i32; 3]) -> Self {
        Self(k.map(f64::from))
    }
}

impl From<(i32, i32, i32)> for ModularWeights {
    fn from((k1, k2, k3): (i32, i32, i32)) -> Self {
        Self([k1, k2, k3].map(f64::from))
    }
}

impl std::fmt::Display for ModularWeights {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [k1, k2, k3] = self.0;
        write!(f, "({k1}, {k2}, {k3})")
    }
}

/// How the per-generation couplings are weighted beyond the suppression factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MassScaling {
    #[default]
    Uniform,
    /// Multiply generation i by |vᵢ| of M₀'s dominant eigenvector.
    DominantEigenvector,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HierarchicalYukawa {
    pub matrix: GoldenYukawaMatrix,
}

impl HierarchicalYukawa {
    pub fn new(matrix: GoldenYukawaMatrix) -> Self {
        Self { matrix }
    }

    /// `coupling × φ^{−(kᵢ−2)/2}` for each generation.
    pub fn suppressed_couplings(&self, weights: ModularWeights, coupling: f64) -> [f64; 3] {
        weights.0.map(|k| coupling * weight_suppression(k))
    }

    pub fn couplings(
        &self,
        weights: ModularWeights,
        coupling: f64,
        scaling: MassScaling,
    ) -> Result<[f64; 3]> {
        let base = self.suppressed_couplings(weights, coupling);
        match scaling {
            MassScaling::Uniform => Ok(base),
            MassScaling::DominantEigenvector => {
                let v = self.matrix.spectrum()?.dominant_eigenvector();
                Ok([base[0] * v[0].abs(), base[1] * v[1].abs(), base[2] * v[2].abs()])
            }
        }
    }

    /// Y^F_ij = g_F [M₀]_ij φ^{−(kᵢ+kⱼ)/2} (Equation 4.2).
    pub fn physical_yukawa(&self, weights: ModularWeights, coupling: f64) -> Matrix3<f64> {
        let m0 = self.matrix.construct_m0();
        let k = weights.0;
        Matrix3::from_fn(|i, j| coupling * m0[(i, j)] * PHI.powf(-(k[i] + k[j]) / 2.0))
    }

    /// Masses √|eig(Y Yᵀ)|, heaviest first.
    pub fn mass_hierarchy(&self, weights: ModularWeights, coupling: f64) -> Result<[f64; 3]> {
        let y = self.physical_yukawa(weights, coupling);
        let mass_matrix = y * y.transpose();
        if mass_matrix.iter().any(|v| !v.is_finite()) {
            return Err(GoldenError::NonFinite {
                what: "mass matrix",
            });
        }

        let eig = SymmetricEigen::new(mass_matrix);
        let mut masses = [0.0; 3];
        for (m, lambda) in masses.iter_mut().zip(eig.eigenvalues.iter()) {
            *m = lambda.abs().sqrt();
        }
        masses.sort_by(|a, b| b.total_cmp(a));
        Ok(masses)
    }

    /// Masses divided by the heaviest one.
    pub fn mass_ratios(&self, weights: ModularWeights, coupling: f64) -> Result<[f64; 3]> {
        let masses = self.mass_hierarchy(weights, coupling)?;
        if masses[0] <= 0.0 {
            return Err(GoldenError::NonFinite {
                what: "mass ratios",
            });
        }
        let ratios = masses.map(|m| m / masses[0]);
        if ratios.iter().any(|r| !r.is_finite()) {
            return Err(GoldenError::NonFinite {
                what: "mass ratios",
            });
        }
        Ok(ratios)
    }

    /// log₁₀(m_heaviest / m_lightest) in orders of magnitude. Masses below
    /// 1e-15 are dropped; fewer than two survivors give 0.
    pub fn hierarchy_span(&self, weights: ModularWeights) -> Result<f64> {
        let masses = self.mass_hierarchy(weights, DEFAULT_COUPLING)?;
        let kept: Vec<f64> = masses.into_iter().filter(|&m| m > MASS_FLOOR).collect();
        match (kept.first(), kept.last()) {
            (Some(heaviest), Some(lightest)) if kept.len() >= 2 => {
                Ok((heaviest / lightest).log10())
            }
            _ => Ok(0.0),
        }
    }
}
