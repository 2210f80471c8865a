//! Integration tests for the sparrowt binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn sparrowt(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("sparrowt").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("SPARROWT_VERBOSE")
        .env_remove("SPARROWT_CONFIG")
        .arg("--no-color");
    cmd
}

fn write_file(dir: &TempDir, name: &str, content: &str) {
    std::fs::write(dir.path().join(name), content).unwrap();
}

#[test]
fn test_tokens_text_output() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "main.sp", "let x = a?.b\n");

    sparrowt(&dir)
        .args(["tokens", "main.sp"])
        .assert()
        .success()
        .stdout(predicate::str::contains("let(\"let\")"))
        .stdout(predicate::str::contains("questionPostfix(\"?\")"))
        .stdout(predicate::str::contains("period(\".\")"));
}

#[test]
fn test_tokens_json_output() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "main.sp", "0x1p4");

    let output = sparrowt(&dir)
        .args(["tokens", "main.sp", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value[0]["file"], "main.sp");
    assert_eq!(value[0]["tokens"][0]["kind"], "floatingLiteral");
    assert_eq!(value[0]["tokens"][0]["end"], 5);
}

#[test]
fn test_tokens_multiple_files_have_headers() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "a.sp", "a");
    write_file(&dir, "b.sp", "b");

    sparrowt(&dir)
        .args(["tokens", "a.sp", "b.sp", "-j", "2"])
        .assert()
        .success()
        .stdout("==> a.sp <==\nidentifier(\"a\")\n==> b.sp <==\nidentifier(\"b\")\n");
}

#[test]
fn test_tokens_missing_file() {
    let dir = TempDir::new().unwrap();

    sparrowt(&dir)
        .args(["tokens", "nope.sp"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope.sp"));
}

#[test]
fn test_check_clean_file() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "ok.sp", "func f() -> Int { return 1 }\n");

    sparrowt(&dir)
        .args(["check", "ok.sp"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_check_reports_errors() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "bad.sp", "let n = 0b102\n");

    sparrowt(&dir)
        .args(["check", "bad.sp"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("bad.sp: error[L0002]"));
}

#[test]
fn test_check_allow_from_config_file() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "warn.sp", "let s = 'x'\n");
    write_file(&dir, "sparrowt.toml", "[check]\nallow = [\"L0013\"]\n");

    sparrowt(&dir)
        .args(["check", "warn.sp"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_explicit_config_missing() {
    let dir = TempDir::new().unwrap();

    sparrowt(&dir)
        .args(["--config", "missing.toml", "first-number"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_first_number_demo() {
    let dir = TempDir::new().unwrap();

    sparrowt(&dir)
        .arg("first-number")
        .assert()
        .success()
        .stdout(predicate::str::contains("FOUND: 12.34"))
        .stdout(predicate::str::contains("FOUND: 33"));
}

#[test]
fn test_first_number_arguments() {
    let dir = TempDir::new().unwrap();

    sparrowt(&dir)
        .args(["first-number", "pi is 3.14159"])
        .assert()
        .success()
        .stdout("IN:    pi is 3.14159\nFOUND: 3.14159\n");
}
