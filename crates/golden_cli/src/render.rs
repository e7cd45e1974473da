//! Console rendering of a [`VerificationReport`].

use std::io::{self, Write};

use golden_core::{CheckOutcome, Selection, VerificationReport};

const RULE_WIDTH: usize = 70;

pub fn write_text(out: &mut impl Write, report: &VerificationReport, verbose: bool) -> io::Result<()> {
    if report.selection == Selection::All {
        rule(out)?;
        writeln!(out, "  GOLDEN RATIO MODULAR FLAVOR SYMMETRY")?;
        writeln!(out, "  Complete Verification Suite")?;
        rule(out)?;
    }

    for section in &report.sections {
        if verbose {
            writeln!(out)?;
            rule(out)?;
            writeln!(out, "  {}", section.title)?;
            rule(out)?;
            if !section.details.is_empty() {
                writeln!(out)?;
                for line in &section.details {
                    writeln!(out, "{line}")?;
                }
            }
        }
        for check in &section.checks {
            write_check(out, check, verbose)?;
        }
    }

    write_summary(out, report)
}

fn write_check(out: &mut impl Write, check: &CheckOutcome, verbose: bool) -> io::Result<()> {
    if !verbose {
        return writeln!(out, "{check}");
    }
    let mark = if check.passed { "✓" } else { "✗" };
    writeln!(out)?;
    writeln!(out, "[{mark} {}] {}", check.status(), check.name)?;
    if let Some(detail) = &check.detail {
        writeln!(out, "  {detail}")?;
    }
    if let (Some(err), Some(tol)) = (check.max_error, check.tolerance) {
        writeln!(out, "  Max error: {err:.2e} (tolerance {tol:.0e})")?;
    }
    Ok(())
}

fn write_summary(out: &mut impl Write, report: &VerificationReport) -> io::Result<()> {
    writeln!(out)?;
    rule(out)?;
    writeln!(out, "  VERIFICATION SUMMARY")?;
    rule(out)?;
    writeln!(out, "Total checks: {}", report.total())?;
    writeln!(out, "Passed: {}", report.passed())?;
    writeln!(out, "Failed: {}", report.failed())?;
    writeln!(out, "Success rate: {:.1}%", report.success_rate())?;
    writeln!(out, "Max error: {:.2e}", report.max_error())?;
    if report.success() {
        writeln!(out, "\n✓ All verifications passed!")?;
    } else {
        writeln!(out, "\n✗ {} verification(s) failed", report.failed())?;
    }
    rule(out)
}

fn rule(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))
}

pub fn write_json(out: &mut impl Write, report: &VerificationReport) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)
}
