use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::cargo_bin("codesweep").unwrap()
}

fn write_file(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
}

#[test]
fn test_help() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("codesweep"));
}

#[test]
fn test_version() {
    cmd().arg("--version").assert().success();
}

#[test]
fn test_scan_clean_project_passes() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "src/lib.rs", "pub fn add(a: u32, b: u32) -> u32 { a + b }\n");

    cmd()
        .arg("scan")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No security issues found."));
}

#[test]
fn test_scan_vulnerable_project_exits_one() {
    let dir = TempDir::new().unwrap();
    write_file(
        dir.path(),
        "src/config.js",
        "const api_key = \"sk_live_abcdefghijklmnopqrstuv\";\n",
    );

    cmd()
        .arg("scan")
        .arg(dir.path())
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("[CRITICAL]"))
        .stdout(predicate::str::contains("API Key"));
}

#[test]
fn test_scan_missing_root_exits_two() {
    cmd()
        .arg("scan")
        .arg("/no/such/project/root")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Project root does not exist"));
}

#[test]
fn test_json_format_emits_report_schema() {
    let dir = TempDir::new().unwrap();
    write_file(
        dir.path(),
        "src/view.js",
        "document.write('<div>' + msg + '</div>');\n",
    );

    let output = cmd()
        .arg("scan")
        .args(["--format", "json"])
        .arg(dir.path())
        .output()
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["summary"]["totalFindings"], 1);
    assert_eq!(parsed["summary"]["scannedFiles"], 1);
    assert_eq!(parsed["findings"]["high"][0]["file"], "src/view.js");
}

#[test]
fn test_detailed_writes_report_file() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "src/ok.py", "x = 1\n");

    cmd()
        .arg("scan")
        .arg("--detailed")
        .arg(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Report written to"));

    let report_path = dir.path().join("security-scan-report.json");
    assert!(report_path.is_file());
    let parsed: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(report_path).unwrap()).unwrap();
    assert_eq!(parsed["summary"]["totalFindings"], 0);
}

#[test]
fn test_detailed_with_explicit_output_path() {
    let dir = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write_file(dir.path(), "src/ok.py", "x = 1\n");
    let target = out.path().join("report.json");

    cmd()
        .arg("scan")
        .arg("--detailed")
        .arg("--output")
        .arg(&target)
        .arg(dir.path())
        .assert()
        .success();

    assert!(target.is_file());
}

#[test]
fn test_min_severity_hides_lower_buckets() {
    let dir = TempDir::new().unwrap();
    write_file(
        dir.path(),
        "src/app.js",
        "try { f(); } catch (e) {}\n",
    );

    cmd()
        .arg("scan")
        .args(["--min-severity", "high"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("[LOW]").not())
        .stdout(predicate::str::contains("Total: 1 finding(s)"));
}

#[test]
fn test_rules_command_lists_catalog() {
    cmd()
        .arg("rules")
        .assert()
        .success()
        .stdout(predicate::str::contains("SC-001"))
        .stdout(predicate::str::contains("VN-001"))
        .stdout(predicate::str::contains("CP-001"))
        .stdout(predicate::str::contains("secret"))
        .stdout(predicate::str::contains("compliance"));
}
