//! Verification harness: evaluates the model, compares against the paper's
//! literal values and records PASS/FAIL per check.
//!
//! A mismatch is never an error. Every selected section runs to completion and
//! the outcome is aggregated into a [`VerificationReport`].

use std::fmt;

use nalgebra::Matrix3;
use num_complex::Complex;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::constants::{GOLDEN_ARG, PHI};
use crate::error::Result;
use crate::hierarchy::{HierarchicalYukawa, DEFAULT_COUPLING};
use crate::matrix::GoldenYukawaMatrix;
use crate::modular::A5ModularForms;
use crate::numeric::{abs_error, max_abs_error, max_relative_error};
use crate::predictions::{table_1, M0_EIGENVALUES, TABLE_2};
use crate::settings::VerifySettings;

/// Which part of the suite to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selection {
    #[default]
    All,
    Theorem1,
    Matrix,
    Eigenvalues,
    Hierarchy,
}

impl Selection {
    pub fn sections(self) -> &'static [Section] {
        match self {
            Selection::All => &[
                Section::GoldenPoint,
                Section::Theorem1,
                Section::WeightSuppression,
                Section::Matrix,
                Section::Eigenvalues,
                Section::Hierarchy,
            ],
            Selection::Theorem1 => &[Section::Theorem1],
            Selection::Matrix => &[Section::Matrix],
            Selection::Eigenvalues => &[Section::Eigenvalues],
            Selection::Hierarchy => &[Section::Hierarchy],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    GoldenPoint,
    Theorem1,
    WeightSuppression,
    Matrix,
    Eigenvalues,
    Hierarchy,
}

impl Section {
    pub fn title(self) -> &'static str {
        match self {
            Section::GoldenPoint => "GOLDEN POINT τ₀ PROPERTIES (Section 2.1)",
            Section::Theorem1 => "THEOREM 1: Y Ratios at the Golden Point (Section 2.2)",
            Section::WeightSuppression => "MODULAR WEIGHT SUPPRESSION (Section 2.3)",
            Section::Matrix => "GOLDEN MATRIX M₀ (Section 3.2, Equation 3.2)",
            Section::Eigenvalues => "EIGENVALUE ANALYSIS (Section 3.3)",
            Section::Hierarchy => "HIERARCHICAL PATTERNS (Section 4, Table 2)",
        }
    }
}

/// Result of a single comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckOutcome {
    pub name: String,
    pub passed: bool,
    /// Largest observed deviation; `None` for yes/no conditions.
    pub max_error: Option<f64>,
    pub tolerance: Option<f64>,
    pub detail: Option<String>,
}

impl CheckOutcome {
    /// Passes when `max_error < tolerance`. NaN never passes.
    pub fn within(name: impl Into<String>, max_error: f64, tolerance: f64) -> Self {
        Self {
            name: name.into(),
            passed: max_error < tolerance,
            max_error: Some(max_error),
            tolerance: Some(tolerance),
            detail: None,
        }
    }

    /// Passes only when the deviation is exactly zero.
    pub fn exact(name: impl Into<String>, max_error: f64) -> Self {
        Self {
            name: name.into(),
            passed: max_error == 0.0,
            max_error: Some(max_error),
            tolerance: Some(0.0),
            detail: None,
        }
    }

    pub fn condition(name: impl Into<String>, passed: bool) -> Self {
        Self {
            name: name.into(),
            passed,
            max_error: None,
            tolerance: None,
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn status(&self) -> &'static str {
        if self.passed {
            "PASS"
        } else {
            "FAIL"
        }
    }
}

impl fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.status(), self.name)?;
        if let Some(err) = self.max_error {
            write!(f, " (max error: {err:.2e})")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionReport {
    pub section: Section,
    pub title: &'static str,
    /// Intermediate values; empty when the harness runs quietly.
    pub details: Vec<String>,
    pub checks: Vec<CheckOutcome>,
}

impl SectionReport {
    fn new(section: Section) -> Self {
        Self {
            section,
            title: section.title(),
            details: Vec::new(),
            checks: Vec::new(),
        }
    }

    pub fn passed(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct VerificationReport {
    pub selection: Selection,
    pub sections: Vec<SectionReport>,
}

impl VerificationReport {
    pub fn checks(&self) -> impl Iterator<Item = &CheckOutcome> {
        self.sections.iter().flat_map(|s| s.checks.iter())
    }

    pub fn total(&self) -> usize {
        self.checks().count()
    }

    pub fn passed(&self) -> usize {
        self.checks().filter(|c| c.passed).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.passed()
    }

    pub fn success(&self) -> bool {
        self.failed() == 0
    }

    /// Percentage of passing checks; 100 for an empty report.
    pub fn success_rate(&self) -> f64 {
        match self.total() {
            0 => 100.0,
            total => 100.0 * self.passed() as f64 / total as f64,
        }
    }

    /// Largest numeric error over all checks that report one.
    pub fn max_error(&self) -> f64 {
        self.checks()
            .filter_map(|c| c.max_error)
            .map(|e| if e.is_nan() { f64::INFINITY } else { e })
            .fold(0.0, f64::max)
    }

    pub fn exit_code(&self) -> i32 {
        if self.success() {
            0
        } else {
            1
        }
    }
}

/// Runs the checks against one model configuration.
#[derive(Debug, Clone)]
pub struct Verifier {
    forms: A5ModularForms,
    matrix: GoldenYukawaMatrix,
    hierarchical: HierarchicalYukawa,
    settings: VerifySettings,
}

impl Verifier {
    pub fn new(matrix: GoldenYukawaMatrix, settings: VerifySettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            forms: matrix.forms,
            matrix,
            hierarchical: HierarchicalYukawa::new(matrix),
            settings,
        })
    }

    pub fn run(&self, selection: Selection) -> VerificationReport {
        let sections = selection
            .sections()
            .iter()
            .map(|&section| self.run_section(section))
            .collect();
        VerificationReport {
            selection,
            sections,
        }
    }

    pub fn run_section(&self, section: Section) -> SectionReport {
        let mut report = SectionReport::new(section);
        match section {
            Section::GoldenPoint => self.verify_golden_point(&mut report),
            Section::Theorem1 => self.verify_theorem_1(&mut report),
            Section::WeightSuppression => self.verify_weight_suppression(&mut report),
            Section::Matrix => self.verify_m0_matrix(&mut report),
            Section::Eigenvalues => self.verify_eigenvalues(&mut report),
            Section::Hierarchy => self.verify_hierarchical_patterns(&mut report),
        }
        info!(
            section = ?section,
            checks = report.checks.len(),
            passed = report.passed(),
            "section verified"
        );
        report
    }

    fn note(&self, report: &mut SectionReport, line: impl Into<String>) {
        if self.settings.verbose {
            report.details.push(line.into());
        }
    }

    fn record(&self, report: &mut SectionReport, outcome: CheckOutcome) {
        debug!(
            check = %outcome.name,
            passed = outcome.passed,
            max_error = ?outcome.max_error,
            "check evaluated"
        );
        report.checks.push(outcome);
    }

    fn verify_golden_point(&self, report: &mut SectionReport) {
        let point = self.forms.golden_point();
        let tau = point.tau;
        let sqrt5 = 5.0_f64.sqrt();

        self.note(report, "τ₀ = exp(2πi/5)");
        self.note(report, format!("   = {:.10} + {:.10}i", tau.re, tau.im));
        self.note(report, format!("Real part = (√5-1)/4 = {:.10}", (sqrt5 - 1.0) / 4.0));
        self.note(
            report,
            format!("Imag part = √(5+√5)/8 = {:.10}", ((5.0 + sqrt5) / 8.0).sqrt()),
        );

        let zeta_sq = Complex::from_polar(1.0, 2.0 * GOLDEN_ARG);
        let error = (tau * tau - zeta_sq).norm();
        self.record(
            report,
            CheckOutcome::within("τ₀² = ζ₅²", error, self.settings.exact_tolerance),
        );
        self.record(
            report,
            CheckOutcome::condition("τ₀ in upper half-plane", point.in_upper_half_plane())
                .with_detail(format!("Im(τ₀) = {:.6} > 0", point.imag())),
        );
    }

    fn verify_theorem_1(&self, report: &mut SectionReport) {
        let y = self.forms.y_ratios();
        let expected = [
            1.0,
            1.0 / PHI,
            1.0 / (PHI * PHI),
            -1.0 / (PHI * PHI),
            -1.0 / PHI,
        ];

        self.note(report, format!("Golden ratio φ = {PHI:.15}"));
        self.note(report, format!("φ⁻¹ = {:.15}", expected[1]));
        self.note(report, format!("φ⁻² = {:.15}", expected[2]));
        for (i, (computed, e)) in y.values().iter().zip(expected).enumerate() {
            self.note(
                report,
                format!("Y_{} = {computed:12.9}  (expected: {e:12.9})", i + 1),
            );
        }

        let max_error = max_abs_error(&y.values(), &expected);
        self.record(
            report,
            CheckOutcome::within("Y ratio values", max_error, self.settings.exact_tolerance),
        );

        let sum = y.corollary_sum();
        self.record(
            report,
            CheckOutcome::within(
                "Corollary 2: Y₄ + Y₅ = -1",
                abs_error(sum, -1.0),
                self.settings.exact_tolerance,
            )
            .with_detail(format!("Y₄ + Y₅ = {sum:.10}")),
        );

        self.record(
            report,
            CheckOutcome::condition("Z₅ stabilizer condition", self.forms.satisfies_stabilizer())
                .with_detail("Y(τ₀) is fixed under the stabilizer group"),
        );
    }

    fn verify_weight_suppression(&self, report: &mut SectionReport) {
        self.note(report, "Suppression factors φ^{-(w-2)/2}:");
        let mut max_error: f64 = 0.0;
        for (n, w) in [2, 4, 6, 8, 10].into_iter().enumerate() {
            let computed = self.forms.weight_suppression(f64::from(w));
            let expected = PHI.powi(-(n as i32));
            max_error = max_error.max(abs_error(computed, expected));
            self.note(report, format!("  w = {w:2}  {computed:.6}  (φ^-{n})"));
        }
        self.record(
            report,
            CheckOutcome::within(
                "Weight suppression formula",
                max_error,
                self.settings.exact_tolerance,
            ),
        );
    }

    fn verify_m0_matrix(&self, report: &mut SectionReport) {
        let m0 = self.matrix.construct_m0();
        self.note(report, format!("M₀ ({} coefficients):", self.matrix.table.version));
        for line in format_matrix(&m0) {
            self.note(report, line);
        }

        let asymmetry = (m0 - m0.transpose()).amax();
        self.record(report, CheckOutcome::exact("M₀ is symmetric", asymmetry));

        let real = m0.iter().all(|v| v.is_finite());
        self.record(report, CheckOutcome::condition("M₀ is real", real));

        let elements = table_1();
        let computed: Vec<f64> = elements.iter().map(|e| m0[(e.row, e.col)]).collect();
        let expected: Vec<f64> = elements.iter().map(|e| e.value).collect();
        for (element, value) in elements.iter().zip(&computed) {
            self.note(
                report,
                format!("{} = {value:.6} (expected {:.6})", element.label, element.value),
            );
        }
        self.record(
            report,
            CheckOutcome::within(
                "M₀ elements match Table 1",
                max_abs_error(&computed, &expected),
                self.settings.matrix_tolerance,
            ),
        );
    }

    fn verify_eigenvalues(&self, report: &mut SectionReport) {
        let spectrum = match self.matrix.spectrum() {
            Ok(spectrum) => spectrum,
            Err(err) => {
                self.record(
                    report,
                    CheckOutcome::condition("Eigen-decomposition of M₀", false)
                        .with_detail(err.to_string()),
                );
                return;
            }
        };

        for (i, (computed, paper)) in spectrum.eigenvalues.iter().zip(M0_EIGENVALUES).enumerate()
        {
            self.note(
                report,
                format!("λ_{} = {computed:10.6}  (paper: {paper:10.6})", i + 1),
            );
        }

        self.record(
            report,
            CheckOutcome::within(
                "Eigenvalue magnitudes",
                max_abs_error(&spectrum.eigenvalues, &M0_EIGENVALUES),
                self.settings.eigenvalue_tolerance,
            ),
        );

        let [l1, l2, l3] = spectrum.eigenvalues.map(f64::abs);
        self.record(
            report,
            CheckOutcome::condition("|λ₁| > |λ₂| > |λ₃|", l1 > l2 && l2 > l3),
        );

        let ratios = spectrum.ratios();
        let expected = [1.0, 1.0 / PHI, 1.0 / (PHI * PHI)];
        self.note(
            report,
            format!("|λ₁| : |λ₂| : |λ₃| = 1 : {:.3} : {:.3}", ratios[1], ratios[2]),
        );
        self.note(
            report,
            format!("Expected:  1 : {:.3} : {:.3}  (1 : φ⁻¹ : φ⁻²)", expected[1], expected[2]),
        );
        self.record(
            report,
            CheckOutcome::within(
                "Golden hierarchy λ₁:λ₂:λ₃ ∼ 1:φ⁻¹:φ⁻²",
                max_relative_error(&ratios, &expected),
                self.settings.golden_hierarchy_tolerance,
            ),
        );
    }

    fn verify_hierarchical_patterns(&self, report: &mut SectionReport) {
        self.note(report, "(k₁, k₂, k₃)  →  y₁ : y₂ : y₃");
        for pattern in TABLE_2 {
            let weights = pattern.modular_weights();
            let name = format!("Table 2 pattern {weights}");
            let ratios = match self.hierarchical.mass_ratios(weights, DEFAULT_COUPLING) {
                Ok(ratios) => ratios,
                Err(err) => {
                    self.record(
                        report,
                        CheckOutcome::condition(name, false).with_detail(err.to_string()),
                    );
                    continue;
                }
            };
            let [e1, e2, e3] = pattern.ratios;
            self.note(
                report,
                format!(
                    "{weights} → {:.3} : {:.3} : {:.3}   (expected: {e1:.3} : {e2:.3} : {e3:.3})",
                    ratios[0], ratios[1], ratios[2]
                ),
            );
            self.record(
                report,
                CheckOutcome::within(
                    name,
                    max_relative_error(&ratios, &pattern.ratios),
                    self.settings.pattern_tolerance,
                ),
            );
        }
    }
}

fn format_matrix(m: &Matrix3<f64>) -> Vec<String> {
    m.row_iter()
        .map(|row| format!("  [{:11.8} {:11.8} {:11.8}]", row[0], row[1], row[2]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clebsch_gordan::EQUATION_3_2;

    fn verifier() -> Verifier {
        Verifier::new(GoldenYukawaMatrix::new(), VerifySettings::default()).unwrap()
    }

    #[test]
    fn full_suite_passes_on_unmodified_model() {
        let report = verifier().run(Selection::All);
        let failures: Vec<_> = report.checks().filter(|c| !c.passed).collect();
        assert!(failures.is_empty(), "{failures:?}");
        assert_eq!(report.exit_code(), 0);
        assert_eq!(report.sections.len(), 6);
    }

    #[test]
    fn single_selection_runs_one_section() {
        let v = verifier();
        for (selection, section) in [
            (Selection::Theorem1, Section::Theorem1),
            (Selection::Matrix, Section::Matrix),
            (Selection::Eigenvalues, Section::Eigenvalues),
            (Selection::Hierarchy, Section::Hierarchy),
        ] {
            let report = v.run(selection);
            assert_eq!(report.sections.len(), 1);
            assert_eq!(report.sections[0].section, section);
            assert!(report.success());
        }
    }

    #[test]
    fn flipped_sign_fails_matrix_check() {
        let table = EQUATION_3_2.with_flipped_sign(0, 2);
        let v = Verifier::new(GoldenYukawaMatrix::with_table(table), VerifySettings::default())
            .unwrap();
        let report = v.run(Selection::Matrix);
        assert!(!report.success());
        assert_eq!(report.exit_code(), 1);
        let failed: Vec<_> = report.checks().filter(|c| !c.passed).map(|c| &c.name).collect();
        assert_eq!(failed, ["M₀ elements match Table 1"]);
    }

    #[test]
    fn quiet_mode_drops_details_but_keeps_checks() {
        let loud = verifier().run(Selection::All);
        let quiet = Verifier::new(GoldenYukawaMatrix::new(), VerifySettings::default().quiet())
            .unwrap()
            .run(Selection::All);
        assert!(loud.sections.iter().any(|s| !s.details.is_empty()));
        assert!(quiet.sections.iter().all(|s| s.details.is_empty()));
        assert_eq!(loud.total(), quiet.total());
    }

    #[test]
    fn invalid_settings_are_refused() {
        let settings = VerifySettings {
            pattern_tolerance: -1.0,
            ..VerifySettings::default()
        };
        assert!(Verifier::new(GoldenYukawaMatrix::new(), settings).is_err());
    }

    #[test]
    fn check_outcome_treats_nan_as_failure() {
        let outcome = CheckOutcome::within("nan", f64::NAN, 1.0);
        assert!(!outcome.passed);
        assert_eq!(outcome.status(), "FAIL");
    }

    #[test]
    fn check_outcome_display_includes_error() {
        let outcome = CheckOutcome::within("Y ratio values", 1.5e-12, 1e-10);
        assert_eq!(outcome.to_string(), "[PASS] Y ratio values (max error: 1.50e-12)");
    }

    #[test]
    fn empty_report_counts_as_success() {
        let report = VerificationReport {
            selection: Selection::All,
            sections: Vec::new(),
        };
        assert_eq!(report.success_rate(), 100.0);
        assert_eq!(report.exit_code(), 0);
    }

    #[test]
    fn tight_pattern_tolerance_reports_failure_without_aborting() {
        let settings = VerifySettings {
            pattern_tolerance: 1e-6,
            ..VerifySettings::default()
        };
        let report = Verifier::new(GoldenYukawaMatrix::new(), settings)
            .unwrap()
            .run(Selection::All);
        assert_eq!(report.sections.len(), 6);
        assert_eq!(report.failed(), TABLE_2.len());
    }
}
