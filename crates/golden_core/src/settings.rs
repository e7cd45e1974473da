use serde::{Deserialize, Serialize};

use crate::error::{GoldenError, Result};

/// Tolerances and output level for the verification harness.
///
/// Absolute tolerances apply to the exact closed-form checks, relative ones to
/// comparisons against values the paper rounds to three decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerifySettings {
    /// τ₀ identities, Y-ratios, Corollary 2, weight suppression.
    pub exact_tolerance: f64,
    /// Table 1 entries and the reality check on M₀.
    pub matrix_tolerance: f64,
    /// Absolute agreement with the quoted eigenvalues.
    pub eigenvalue_tolerance: f64,
    /// Relative deviation of |λᵢ|/|λ₁| from 1 : φ⁻¹ : φ⁻².
    pub golden_hierarchy_tolerance: f64,
    /// Relative deviation from the Table 2 ratios.
    pub pattern_tolerance: f64,
    pub verbose: bool,
}

impl Default for VerifySettings {
    fn default() -> Self {
        Self {
            exact_tolerance: 1e-10,
            matrix_tolerance: 1e-10,
            eigenvalue_tolerance: 1e-3,
            golden_hierarchy_tolerance: 0.05,
            pattern_tolerance: 0.15,
            verbose: true,
        }
    }
}

impl VerifySettings {
    pub fn quiet(self) -> Self {
        Self {
            verbose: false,
            ..self
        }
    }

    pub fn validate(&self) -> Result<()> {
        let tolerances = [
            ("exact_tolerance", self.exact_tolerance),
            ("matrix_tolerance", self.matrix_tolerance),
            ("eigenvalue_tolerance", self.eigenvalue_tolerance),
            ("golden_hierarchy_tolerance", self.golden_hierarchy_tolerance),
            ("pattern_tolerance", self.pattern_tolerance),
        ];
        for (name, value) in tolerances {
            if !value.is_finite() || value <= 0.0 {
                return Err(GoldenError::InvalidSettings(format!(
                    "{name} must be positive and finite, got {value}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(VerifySettings::default().validate().is_ok());
    }

    #[test]
    fn quiet_only_touches_verbosity() {
        let settings = VerifySettings::default().quiet();
        assert!(!settings.verbose);
        assert_eq!(settings.pattern_tolerance, 0.15);
    }

    #[test]
    fn non_positive_tolerance_is_rejected() {
        let settings = VerifySettings {
            eigenvalue_tolerance: 0.0,
            ..VerifySettings::default()
        };
        let message = settings.validate().unwrap_err().to_string();
        assert!(message.contains("eigenvalue_tolerance"), "{message}");
    }

    #[test]
    fn nan_tolerance_is_rejected() {
        let settings = VerifySettings {
            exact_tolerance: f64::NAN,
            ..VerifySettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn partial_json_keeps_remaining_defaults() {
        let settings: VerifySettings =
            serde_json::from_str(r#"{ "pattern_tolerance": 0.2 }"#).unwrap();
        assert_eq!(settings.pattern_tolerance, 0.2);
        assert_eq!(settings.exact_tolerance, 1e-10);
        assert!(settings.verbose);
    }
}
