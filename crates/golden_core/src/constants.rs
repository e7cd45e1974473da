//! Golden-ratio constants shared by every part of the model.
//!
//! φ⁻¹ and φ⁻² are written as `φ − 1` and `2 − φ` so that the defining
//! identities hold to the last bit wherever possible.

use std::f64::consts::PI;

/// φ = (1 + √5) / 2
pub const PHI: f64 = 1.618_033_988_749_894_8;

/// φ⁻¹ = φ − 1
pub const PHI_INV: f64 = PHI - 1.0;

/// φ⁻² = 1 − φ⁻¹ = 2 − φ
pub const PHI_INV2: f64 = 2.0 - PHI;

/// Argument of the golden point, 2π/5.
pub const GOLDEN_ARG: f64 = 2.0 * PI / 5.0;

/// Below this a mass eigenvalue counts as zero.
pub const MASS_FLOOR: f64 = 1e-15;
