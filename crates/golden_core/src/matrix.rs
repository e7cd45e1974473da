//! The universal golden matrix M₀ (Section 3) and its spectrum.

use nalgebra::{Matrix3, SymmetricEigen, Vector3};

use crate::clebsch_gordan::{ClebschGordanTable, EQUATION_3_2};
use crate::constants::{PHI_INV, PHI_INV2};
use crate::error::{GoldenError, Result};
use crate::modular::{A5ModularForms, YRatios};
use crate::numeric::relative_error;

/// Eigen-decomposition of M₀ ordered by descending |λ|.
/// Column `k` of `eigenvectors` belongs to `eigenvalues[k]`.
#[derive(Debug, Clone, PartialEq)]
pub struct GoldenSpectrum {
    pub eigenvalues: [f64; 3],
    pub eigenvectors: Matrix3<f64>,
}

impl GoldenSpectrum {
    /// |λᵢ| / |λ₁|.
    pub fn ratios(&self) -> [f64; 3] {
        let lead = self.eigenvalues[0].abs();
        self.eigenvalues.map(|l| l.abs() / lead)
    }

    pub fn eigenvector(&self, k: usize) -> [f64; 3] {
        let col = self.eigenvectors.column(k);
        [col[0], col[1], col[2]]
    }

    /// Eigenvector of the largest |λ|.
    pub fn dominant_eigenvector(&self) -> [f64; 3] {
        self.eigenvector(0)
    }
}

/// Builder for M₀ from the Y-ratios and a Clebsch-Gordan table.
#[derive(Debug, Clone, Copy)]
pub struct GoldenYukawaMatrix {
    pub forms: A5ModularForms,
    pub table: ClebschGordanTable,
}

impl Default for GoldenYukawaMatrix {
    fn default() -> Self {
        Self::new()
    }
}

impl GoldenYukawaMatrix {
    pub fn new() -> Self {
        Self::with_table(EQUATION_3_2)
    }

    pub fn with_table(table: ClebschGordanTable) -> Self {
        Self {
            forms: A5ModularForms::new(),
            table,
        }
    }

    /// M₀ with the Y-ratios at τ₀ substituted into Equation (3.1).
    pub fn construct_m0(&self) -> Matrix3<f64> {
        Self::from_ratios(&self.forms.y_ratios(), &self.table)
    }

    /// Fills the upper triangle from `table` and mirrors it, so the result is
    /// symmetric bit for bit.
    pub fn from_ratios(y: &YRatios, table: &ClebschGordanTable) -> Matrix3<f64> {
        let mut m = Matrix3::zeros();
        for entry in table.entries.iter() {
            let value = entry.coefficient() * y[entry.y_index];
            m[(entry.row, entry.col)] = value;
            m[(entry.col, entry.row)] = value;
        }
        m
    }

    pub fn spectrum(&self) -> Result<GoldenSpectrum> {
        sorted_spectrum(self.construct_m0())
    }

    /// |λ₁| : |λ₂| : |λ₃| normalised to the largest.
    pub fn hierarchy_ratios(&self) -> Result<[f64; 3]> {
        Ok(self.spectrum()?.ratios())
    }

    /// λ₁ : λ₂ : λ₃ ∼ 1 : φ⁻¹ : φ⁻² within relative `tolerance` (Section 3.3).
    pub fn satisfies_golden_hierarchy(&self, tolerance: f64) -> Result<bool> {
        let ratios = self.hierarchy_ratios()?;
        let expected = [1.0, PHI_INV, PHI_INV2];
        Ok(ratios
            .iter()
            .zip(expected)
            .all(|(&r, e)| relative_error(r, e) < tolerance))
    }
}

/// Symmetric eigen-decomposition sorted by descending |λ|.
pub fn sorted_spectrum(matrix: Matrix3<f64>) -> Result<GoldenSpectrum> {
    if matrix.iter().any(|v| !v.is_finite()) {
        return Err(GoldenError::NonFinite { what: "M₀" });
    }

    let eig = SymmetricEigen::new(matrix);
    if eig.eigenvalues.iter().any(|v| !v.is_finite())
        || eig.eigenvectors.iter().any(|v| !v.is_finite())
    {
        return Err(GoldenError::NonFinite {
            what: "eigen-decomposition",
        });
    }

    let mut order = [0usize, 1, 2];
    order.sort_by(|&a, &b| {
        eig.eigenvalues[b]
            .abs()
            .total_cmp(&eig.eigenvalues[a].abs())
    });

    let eigenvalues = order.map(|k| eig.eigenvalues[k]);
    let columns = order.map(|k| eig.eigenvectors.column(k).into_owned());
    let eigenvectors = Matrix3::from_columns(&columns);

    Ok(GoldenSpectrum {
        eigenvalues,
        eigenvectors,
    })
}

/// Frobenius norm of `m · v − λ · v`, used to sanity check eigenpairs.
pub fn eigen_residual(m: &Matrix3<f64>, lambda: f64, v: &[f64; 3]) -> f64 {
    let v = Vector3::new(v[0], v[1], v[2]);
    (m * v - v * lambda).norm()
}
