//! End-to-end CLI integration tests.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fibalgo() -> Command {
    let mut cmd = Command::cargo_bin("fibalgo").expect("binary not found");
    cmd.env("NO_COLOR", "1").env_remove("FIBALGO_OUTPUT");
    cmd
}

fn read(dir: &TempDir, name: &str) -> String {
    std::fs::read_to_string(dir.path().join(name)).unwrap()
}

#[test]
fn help_flag() {
    fibalgo()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Fibonacci"));
}

#[test]
fn version_flag() {
    fibalgo()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("fibalgo"));
}

#[test]
fn default_output_file_in_working_directory() {
    let tmp = TempDir::new().unwrap();
    fibalgo()
        .current_dir(tmp.path())
        .args(["4", "50"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"Calculation time: \d+\.\d{6} seconds").unwrap())
        .stdout(predicate::str::is_match(r"Write time: \d+\.\d{6} seconds").unwrap());
    assert_eq!(read(&tmp, "out.txt"), "12586269025\n");
}

#[test]
fn legacy_dash_version() {
    let tmp = TempDir::new().unwrap();
    fibalgo()
        .current_dir(tmp.path())
        .args(["-4", "10"])
        .assert()
        .success();
    assert_eq!(read(&tmp, "out.txt"), "55\n");
}

#[test]
fn every_version_computes_f20() {
    for version in ["1", "2", "3", "4"] {
        let tmp = TempDir::new().unwrap();
        fibalgo()
            .current_dir(tmp.path())
            .args([version, "20", "-q"])
            .assert()
            .success()
            .stdout(predicate::str::is_empty());
        assert_eq!(read(&tmp, "out.txt"), "6765\n", "version {version}");
    }
}

#[test]
fn compute_f0_and_f1() {
    let tmp = TempDir::new().unwrap();
    fibalgo().current_dir(tmp.path()).args(["2", "0"]).assert().success();
    assert_eq!(read(&tmp, "out.txt"), "0\n");
    fibalgo().current_dir(tmp.path()).args(["2", "1"]).assert().success();
    assert_eq!(read(&tmp, "out.txt"), "1\n");
}

#[test]
fn compute_f1000_fast_doubling() {
    let tmp = TempDir::new().unwrap();
    fibalgo()
        .current_dir(tmp.path())
        .args(["4", "1000"])
        .assert()
        .success();
    let content = read(&tmp, "out.txt");
    assert!(content.starts_with("43466557686937456435688527675040625802564"));
    assert_eq!(content.trim_end().len(), 209);
}

#[test]
fn output_flag() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("result.txt");
    fibalgo()
        .args(["2", "100", "-o", path.to_str().unwrap()])
        .assert()
        .success();
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "354224848179261915075\n"
    );
}

#[test]
fn env_var_output() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("env.txt");
    fibalgo()
        .env("FIBALGO_OUTPUT", path.to_str().unwrap())
        .args(["4", "42"])
        .assert()
        .success();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "267914296\n");
}

#[test]
fn details_mode() {
    let tmp = TempDir::new().unwrap();
    fibalgo()
        .current_dir(tmp.path())
        .args(["4", "100", "-d"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Algorithm: FastDoubling"))
        .stdout(predicate::str::contains("F(100) = 354224848179261915075"));
}

#[test]
fn json_report() {
    let tmp = TempDir::new().unwrap();
    let output = fibalgo()
        .current_dir(tmp.path())
        .args(["2", "100", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["algorithm"], "Iterative");
    assert_eq!(json["n"], 100);
    assert_eq!(json["digits"], 21);
}

#[test]
fn invalid_algorithm_numbers() {
    for version in ["0", "5", "-9"] {
        let tmp = TempDir::new().unwrap();
        fibalgo()
            .current_dir(tmp.path())
            .args([version, "10"])
            .assert()
            .code(4)
            .stderr(predicate::str::contains("not a valid algorithm number"));
        assert!(!tmp.path().join("out.txt").exists());
    }
}

#[test]
fn non_numeric_algorithm() {
    let tmp = TempDir::new().unwrap();
    fibalgo()
        .current_dir(tmp.path())
        .args(["fast", "10"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("'fast'"));
}

#[test]
fn negative_n() {
    let tmp = TempDir::new().unwrap();
    fibalgo()
        .current_dir(tmp.path())
        .args(["4", "-5"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("non-negative"));
}

#[test]
fn non_numeric_n() {
    let tmp = TempDir::new().unwrap();
    fibalgo()
        .current_dir(tmp.path())
        .args(["4", "ten"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("'ten'"));
}

#[test]
fn missing_argument_is_usage_error() {
    fibalgo()
        .arg("4")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("required"))
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn extra_argument_is_usage_error() {
    fibalgo()
        .args(["4", "5", "6"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unexpected argument '6'"))
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn errors_are_reported_in_quiet_mode() {
    let tmp = TempDir::new().unwrap();
    fibalgo()
        .current_dir(tmp.path())
        .args(["5", "10", "-q"])
        .assert()
        .code(4)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("Error: "));
}

#[test]
fn unwritable_output() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("missing").join("out.txt");
    fibalgo()
        .args(["4", "10", "-o", path.to_str().unwrap()])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("output could not be written"));
}

#[test]
fn closed_form_overflow_reported() {
    let tmp = TempDir::new().unwrap();
    fibalgo()
        .current_dir(tmp.path())
        .args(["3", "2000"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("overflowed"));
}

#[test]
fn compare_all_algorithms() {
    let tmp = TempDir::new().unwrap();
    fibalgo()
        .current_dir(tmp.path())
        .args(["all", "80"])
        .assert()
        .success()
        .stdout(predicate::str::contains("FastDoubling"))
        .stdout(predicate::str::contains("[SKIPPED]"))
        .stdout(predicate::str::contains("[APPROX]"));
    assert_eq!(read(&tmp, "out.txt"), "23416728348467685\n");
}

#[test]
fn compare_with_recursive_limit() {
    let tmp = TempDir::new().unwrap();
    fibalgo()
        .current_dir(tmp.path())
        .args(["all", "20", "--recursive-limit", "25"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[SKIPPED]").not());
}

#[test]
fn shell_completion_bash() {
    fibalgo()
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fibalgo"));
}

#[test]
fn shell_completion_zsh() {
    fibalgo()
        .args(["--completion", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fibalgo"));
}
