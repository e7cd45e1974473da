use std::path::PathBuf;
use std::process::{Command, Output};

/// Path to the golden-verify binary.
fn golden_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_golden-verify"))
}

fn run(args: &[&str]) -> Output {
    Command::new(golden_bin())
        .args(args)
        .env_remove("GOLDEN_VERIFY_SETTINGS")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run golden-verify")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn default_run_passes_everything() {
    let output = run(&[]);
    assert_eq!(output.status.code(), Some(0));
    let text = stdout(&output);
    assert!(text.contains("Complete Verification Suite"));
    assert!(text.contains("Failed: 0"));
}

#[test]
fn all_flag_matches_default() {
    let output = run(&["--all", "--quiet"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("✓ All verifications passed!"));
}

#[test]
fn each_selector_exits_zero() {
    for flag in ["--theorem1", "--matrix", "--eigenvalues", "--hierarchy"] {
        let output = run(&[flag]);
        assert_eq!(output.status.code(), Some(0), "{flag}");
    }
}

#[test]
fn quiet_suppresses_section_details() {
    let text = stdout(&run(&["--eigenvalues", "--quiet"]));
    assert!(!text.contains("λ_1 ="));
    assert!(text.contains("[PASS] Eigenvalue magnitudes"));
}

#[test]
fn verbose_eigenvalues_show_intermediate_values() {
    let text = stdout(&run(&["--eigenvalues"]));
    assert!(text.contains("EIGENVALUE ANALYSIS"));
    assert!(text.contains("λ_1 ="));
}

#[test]
fn conflicting_selectors_are_a_usage_error() {
    let output = run(&["--matrix", "--hierarchy"]);
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"), "{stderr}");
}

#[test]
fn unknown_flag_is_a_usage_error() {
    let output = run(&["--bogus"]);
    assert!(!output.status.success());
}

#[test]
fn json_report_is_machine_readable() {
    let output = run(&["--hierarchy", "--json"]);
    assert_eq!(output.status.code(), Some(0));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["selection"], "hierarchy");
    assert_eq!(value["sections"][0]["checks"].as_array().unwrap().len(), 4);
}

#[test]
fn strict_settings_file_turns_checks_into_failures() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("strict.json");
    std::fs::write(&path, r#"{ "pattern_tolerance": 1e-6 }"#).unwrap();
    let output = run(&["--hierarchy", "--quiet", "--settings", path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("Failed: 4"));
}

#[test]
fn invalid_settings_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, "{{not json").unwrap();
    let output = run(&["--settings", path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to parse settings file"), "{stderr}");
}

#[test]
fn non_positive_tolerance_in_settings_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("zero.json");
    std::fs::write(&path, r#"{ "exact_tolerance": 0.0 }"#).unwrap();
    let output = run(&["--settings", path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("exact_tolerance"), "{stderr}");
}
