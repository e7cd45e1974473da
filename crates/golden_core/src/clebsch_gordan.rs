//! Clebsch-Gordan coefficients for 3 ⊗ 3 → 5ₛ of A₅.
//!
//! The table is a fixed lookup of the multipliers appearing in Equation (3.2),
//! kept as data so the matrix can be audited entry by entry against the paper.
//! Each upper-triangle entry of M₀ is `numerator / (√3 if over_sqrt3) × Y[y_index]`.

use serde::Serialize;

/// One upper-triangle entry of M₀.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CgEntry {
    pub row: usize,
    pub col: usize,
    pub numerator: f64,
    pub over_sqrt3: bool,
    /// Zero-based index into the Y-ratio vector.
    pub y_index: usize,
}

impl CgEntry {
    const fn new(row: usize, col: usize, numerator: f64, over_sqrt3: bool, y_index: usize) -> Self {
        Self {
            row,
            col,
            numerator,
            over_sqrt3,
            y_index,
        }
    }

    pub fn coefficient(&self) -> f64 {
        if self.over_sqrt3 {
            self.numerator / 3.0_f64.sqrt()
        } else {
            self.numerator
        }
    }

    /// Label in the paper's one-based notation, e.g. `M₁₃`.
    pub fn label(&self) -> String {
        format!("M{}{}", subscript(self.row + 1), subscript(self.col + 1))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClebschGordanTable {
    pub version: &'static str,
    pub entries: [CgEntry; 6],
}

impl ClebschGordanTable {
    /// Copy of the table with the sign of entry `(row, col)` flipped. Used to
    /// confirm that the harness notices a corrupted coefficient.
    pub fn with_flipped_sign(mut self, row: usize, col: usize) -> Self {
        for entry in self.entries.iter_mut() {
            if (entry.row, entry.col) == (row, col) || (entry.row, entry.col) == (col, row) {
                entry.numerator = -entry.numerator;
            }
        }
        self.version = "modified";
        self
    }
}

/// Equation (3.2).
pub const EQUATION_3_2: ClebschGordanTable = ClebschGordanTable {
    version: "eq-3.2",
    entries: [
        CgEntry::new(0, 0, -2.0, true, 0),
        CgEntry::new(0, 1, -1.0, true, 0),
        CgEntry::new(0, 2, -1.0, false, 1),
        CgEntry::new(1, 1, 2.0, true, 1),
        CgEntry::new(1, 2, -1.0, false, 2),
        CgEntry::new(2, 2, 2.0, true, 2),
    ],
};

fn subscript(n: usize) -> char {
    const DIGITS: [char; 10] = ['₀', '₁', '₂', '₃', '₄', '₅', '₆', '₇', '₈', '₉'];
    DIGITS[n % 10]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_each_upper_triangle_entry_once() {
        let mut seen = [[0usize; 3]; 3];
        for entry in EQUATION_3_2.entries {
            assert!(entry.row <= entry.col);
            seen[entry.row][entry.col] += 1;
        }
        for i in 0..3 {
            for j in i..3 {
                assert_eq!(seen[i][j], 1, "entry ({i}, {j})");
            }
        }
    }

    #[test]
    fn coefficients_divide_by_sqrt3_only_when_flagged() {
        let m11 = EQUATION_3_2.entries[0];
        assert!((m11.coefficient() + 2.0 / 3.0_f64.sqrt()).abs() < 1e-15);
        let m13 = EQUATION_3_2.entries[2];
        assert_eq!(m13.coefficient(), -1.0);
    }

    #[test]
    fn labels_use_one_based_subscripts() {
        assert_eq!(EQUATION_3_2.entries[2].label(), "M₁₃");
        assert_eq!(EQUATION_3_2.entries[5].label(), "M₃₃");
    }

    #[test]
    fn flipping_a_sign_touches_only_that_entry() {
        let flipped = EQUATION_3_2.with_flipped_sign(2, 0);
        assert_eq!(flipped.version, "modified");
        for (orig, new) in EQUATION_3_2.entries.iter().zip(flipped.entries.iter()) {
            if (orig.row, orig.col) == (0, 2) {
                assert_eq!(new.numerator, -orig.numerator);
            } else {
                assert_eq!(new, orig);
            }
        }
    }

    #[test]
    fn table_serializes_with_its_version() {
        let value = serde_json::to_value(EQUATION_3_2).unwrap();
        assert_eq!(value["version"], "eq-3.2");
        assert_eq!(value["entries"][2]["y_index"], 1);
        assert_eq!(value["entries"][2]["over_sqrt3"], false);
    }
}
