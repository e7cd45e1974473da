//! Literal values quoted by the paper, used as the expected side of every check.

use num_complex::Complex;
use serde::Serialize;

use crate::constants::{PHI, PHI_INV, PHI_INV2};
use crate::hierarchy::ModularWeights;
use crate::modular::{ModularPoint, YRatios};

/// One row of Table 2: weight assignment and Yukawa ratios y₁ : y₂ : y₃.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HierarchyPattern {
    pub weights: [i32; 3],
    pub ratios: [f64; 3],
}

impl HierarchyPattern {
    pub fn modular_weights(&self) -> ModularWeights {
        ModularWeights::from(self.weights)
    }
}

pub const TABLE_2: [HierarchyPattern; 4] = [
    HierarchyPattern {
        weights: [6, 4, 0],
        ratios: [1.000, 0.267, 0.191],
    },
    HierarchyPattern {
        weights: [8, 4, 0],
        ratios: [1.000, 0.161, 0.132],
    },
    HierarchyPattern {
        weights: [10, 6, 0],
        ratios: [1.000, 0.069, 0.058],
    },
    HierarchyPattern {
        weights: [4, 2, 0],
        ratios: [1.000, 0.518, 0.388],
    },
];

/// Eigenvalues of M₀ (Equation 6), largest magnitude first.
pub const M0_EIGENVALUES: [f64; 3] = [-1.56426517, 0.99327059, 0.57099458];

/// Triple quoted next to the hierarchy claim in Section 3.3. It does not match
/// the spectrum of Equation (3.2) and is not checked.
pub const STATED_M0_EIGENVALUES: [f64; 3] = [-1.4571, 0.3820, 0.2361];

/// One entry of Table 1: position (zero-based), label, closed-form value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatrixElement {
    pub row: usize,
    pub col: usize,
    pub label: &'static str,
    pub value: f64,
}

/// Table 1, upper triangle of M₀.
pub fn table_1() -> [MatrixElement; 6] {
    let s3 = 3.0_f64.sqrt();
    [
        MatrixElement {
            row: 0,
            col: 0,
            label: "M₁₁",
            value: -2.0 / s3,
        },
        MatrixElement {
            row: 0,
            col: 1,
            label: "M₁₂",
            value: -1.0 / s3,
        },
        MatrixElement {
            row: 0,
            col: 2,
            label: "M₁₃",
            value: -PHI_INV,
        },
        MatrixElement {
            row: 1,
            col: 1,
            label: "M₂₂",
            value: 2.0 * PHI_INV / s3,
        },
        MatrixElement {
            row: 1,
            col: 2,
            label: "M₂₃",
            value: -PHI_INV2,
        },
        MatrixElement {
            row: 2,
            col: 2,
            label: "M₃₃",
            value: 2.0 * PHI_INV2 / s3,
        },
    ]
}

#[derive(Debug, Clone, Serialize)]
pub struct PaperPredictions {
    pub y_ratios: YRatios,
    pub m0_eigenvalues: [f64; 3],
    pub golden_ratio: f64,
    pub tau_0: ModularPoint,
    pub hierarchy_patterns: [HierarchyPattern; 4],
}

pub fn paper_predictions() -> PaperPredictions {
    PaperPredictions {
        y_ratios: YRatios([1.0, PHI_INV, PHI_INV2, -PHI_INV2, -PHI_INV]),
        m0_eigenvalues: M0_EIGENVALUES,
        golden_ratio: PHI,
        tau_0: ModularPoint::new(Complex::new(
            (5.0_f64.sqrt() - 1.0) / 4.0,
            ((5.0 + 5.0_f64.sqrt()) / 8.0).sqrt(),
        )),
        hierarchy_patterns: TABLE_2,
    }
}
