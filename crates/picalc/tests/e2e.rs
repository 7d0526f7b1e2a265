//! End-to-end CLI integration tests.

use assert_cmd::Command;
use predicates::prelude::*;

fn picalc() -> Command {
    Command::cargo_bin("picalc").expect("binary not found")
}

#[test]
fn help_flag() {
    picalc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("workload"))
        .stdout(predicate::str::contains("--workers"));
}

#[test]
fn version_flag() {
    picalc()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("picalc"));
}

#[test]
fn quiet_prints_only_markers() {
    picalc()
        .args(["-w", "4", "-n", "1001", "-q"])
        .assert()
        .success()
        .stdout("Start\nDone\n");
}

#[test]
fn start_precedes_done() {
    let output = picalc().args(["-w", "2", "-n", "101"]).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let start = stdout.find("Start").expect("no Start line");
    let done = stdout.find("Done").expect("no Done line");
    assert!(start < done);
}

#[test]
fn table_lists_every_worker() {
    picalc()
        .env("NO_COLOR", "1")
        .args(["-w", "3", "-n", "1001"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Workers ==="))
        .stdout(predicate::str::contains("3.140594649846"))
        .stdout(predicate::str::is_match(r"(?m)^\s+2\s").unwrap());
}

#[test]
fn zero_iterations_gives_four() {
    picalc()
        .args(["-w", "1", "-n", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4.000000000000"));
}

#[test]
fn details_mode() {
    picalc()
        .args(["-w", "2", "-n", "1_001", "-d"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Iterations per worker: 1,001"))
        .stdout(predicate::str::contains("Workers: 2"));
}

#[test]
fn verbose_mode() {
    picalc()
        .args(["-w", "2", "-n", "1001", "-v"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Spawning 2 workers"));
}

#[test]
fn json_report_on_stdout() {
    let output = picalc()
        .args(["-w", "4", "-n", "1001", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["worker_count"], 4);
    assert_eq!(report["iterations"], 1001);
    let results = report["results"].as_array().unwrap();
    assert_eq!(results.len(), 4);
    for (i, r) in results.iter().enumerate() {
        assert_eq!(r["worker"], i);
        assert_eq!(r["estimate"], results[0]["estimate"]);
    }
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Start"));
    assert!(stderr.contains("Done"));
}

#[test]
fn output_file() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("report.json");
    picalc()
        .args(["-w", "2", "-n", "101", "-q", "-o", path.to_str().unwrap()])
        .assert()
        .success();
    let content = std::fs::read_to_string(&path).unwrap();
    let report: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(report["results"].as_array().unwrap().len(), 2);
}

#[test]
fn output_file_in_missing_directory_fails() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("missing").join("report.json");
    picalc()
        .args(["-w", "1", "-n", "1", "-q", "-o", path.to_str().unwrap()])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to write report"));
}

#[test]
fn zero_workers_rejected() {
    picalc().args(["-w", "0", "-n", "10"]).assert().failure();
}

#[test]
fn too_many_workers_rejected() {
    picalc().args(["-w", "5000", "-n", "10"]).assert().failure();
}

#[test]
fn negative_iterations_rejected() {
    picalc().args(["-w", "1", "-n", "-5"]).assert().failure();
}

#[test]
fn pin_cores_flag() {
    picalc()
        .args(["-w", "2", "-n", "1001", "-q", "--pin-cores"])
        .assert()
        .success()
        .stdout("Start\nDone\n");
}

#[test]
fn strict_mode_passes_on_agreement() {
    picalc()
        .args(["-w", "4", "-n", "1001", "-q", "--strict"])
        .assert()
        .success();
}

#[test]
fn env_var_workers_and_iterations() {
    picalc()
        .env("PICALC_WORKERS", "3")
        .env("PICALC_ITERATIONS", "101")
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"worker_count\": 3"))
        .stdout(predicate::str::contains("\"iterations\": 101"));
}

#[test]
fn shell_completion_bash() {
    picalc()
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("picalc"));
}

#[test]
fn shell_completion_zsh() {
    picalc()
        .args(["--completion", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("picalc"));
}

#[test]
fn shell_completion_fish() {
    picalc()
        .args(["--completion", "fish"])
        .assert()
        .success()
        .stdout(predicate::str::contains("picalc"));
}
