//! The `golden_core` crate evaluates the A5 modular flavor model at the golden point
//! τ₀ = exp(2πi/5) and checks the results against the values published in the paper.
//!
//! Key components:
//! - **Model**: `A5ModularForms` (Y-ratios, τ₀, weight suppression), `GoldenYukawaMatrix`
//!   (M₀ and its spectrum), `HierarchicalYukawa` (weight-suppressed couplings and masses).
//! - **Clebsch-Gordan table**: the fixed coefficient set of Equation (3.2).
//! - **Verification**: `Verifier` runs tolerance checks and aggregates a `VerificationReport`.
pub mod clebsch_gordan;
pub mod constants;
pub mod error;
pub mod hierarchy;
pub mod matrix;
pub mod modular;
pub mod numeric;
pub mod predictions;
pub mod settings;
pub mod verify;

pub use clebsch_gordan::{ClebschGordanTable, EQUATION_3_2};
pub use error::GoldenError;
pub use hierarchy::{HierarchicalYukawa, MassScaling, ModularWeights};
pub use matrix::{GoldenSpectrum, GoldenYukawaMatrix};
pub use modular::{weight_suppression, A5ModularForms, ModularPoint, YRatios};
pub use settings::VerifySettings;
pub use verify::{CheckOutcome, Section, SectionReport, Selection, VerificationReport, Verifier};
