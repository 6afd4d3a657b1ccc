//! 测试 tispc 命令行

#![allow(deprecated)] // cargo_bin

use std::fs;
use std::process::Command;

use assert_cmd::assert::OutputAssertExt;
use assert_cmd::cargo::CommandCargoExt;
use predicates::prelude::*;

const TWO_BLOCKS: &str = "\
// generated from this file, stray lines are dropped
#begin_template
    export void add_$1($0 a, $0 b) {}
#end_template

#begin_template
$0 zero_$1();
#end_template
";

fn tispc() -> Command {
    Command::cargo_bin("tispc").unwrap()
}

#[test]
fn test_no_arguments() {
    let dir = tempfile::tempdir().unwrap();

    tispc()
        .current_dir(dir.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("Not enough arguments."));

    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_one_argument() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.ispc");
    fs::write(&input, TWO_BLOCKS).unwrap();

    tispc()
        .arg(&input)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Not enough arguments."));

    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn test_expand() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.ispc");
    let output = dir.path().join("out.ispc");
    fs::write(&input, TWO_BLOCKS).unwrap();

    tispc()
        .arg(&input)
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let text = fs::read_to_string(&output).unwrap();
    let parts: Vec<_> = text.split("\n\n").collect();

    assert_eq!(parts.len(), 20);
    assert_eq!(parts[0], "export void add_int8(int8_t a, int8_t b) {}");
    assert_eq!(parts[3], "export void add_unsigned int16(uint16_t a, uint16_t b) {}");
    assert_eq!(parts[9], "export void add_double(double a, double b) {}");
    assert_eq!(parts[10], "int8_t zero_int8();");
    assert_eq!(parts[19], "double zero_double();");
    assert!(!text.contains("stray"));
}

#[test]
fn test_extra_arguments_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.ispc");
    let output = dir.path().join("out.ispc");
    fs::write(&input, TWO_BLOCKS).unwrap();

    tispc()
        .arg(&input)
        .arg(&output)
        .arg("extra")
        .arg("more")
        .assert()
        .success();

    assert!(output.exists());
    assert!(!dir.path().join("extra").exists());
}

#[test]
fn test_overwrite_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.ispc");
    let output = dir.path().join("out.ispc");
    fs::write(&input, "no blocks here\n").unwrap();
    fs::write(&output, "previous run").unwrap();

    tispc().arg(&input).arg(&output).assert().success();

    assert_eq!(fs::read_to_string(&output).unwrap(), "");
}

#[test]
fn test_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.ispc");

    tispc()
        .arg(dir.path().join("missing.ispc"))
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read template"));

    assert!(!output.exists());
}

#[test]
fn test_verbose_logs_to_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.ispc");
    let output = dir.path().join("out.ispc");
    fs::write(&input, TWO_BLOCKS).unwrap();

    tispc()
        .env_remove("RUST_LOG")
        .arg("--verbose")
        .arg(&input)
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("template expanded"));
}

#[test]
fn test_trailing_options_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.ispc");
    let output = dir.path().join("out.ispc");
    fs::write(&input, TWO_BLOCKS).unwrap();

    tispc()
        .arg(&input)
        .arg(&output)
        .arg("--help")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let text = fs::read_to_string(&output).unwrap();
    assert_eq!(text.split("\n\n").count(), 20);
}

#[test]
fn test_hyphen_paths() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("-in.ispc"), TWO_BLOCKS).unwrap();

    tispc()
        .current_dir(dir.path())
        .arg("-in.ispc")
        .arg("-out.ispc")
        .assert()
        .success();

    let text = fs::read_to_string(dir.path().join("-out.ispc")).unwrap();
    assert!(text.starts_with("export void add_int8(int8_t a, int8_t b) {}"));
}

#[test]
fn test_rust_log_honoured() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.ispc");
    let output = dir.path().join("out.ispc");
    fs::write(&input, TWO_BLOCKS).unwrap();

    tispc()
        .env("RUST_LOG", "debug")
        .arg(&input)
        .arg(&output)
        .assert()
        .success()
        .stderr(predicate::str::contains("template expanded"));
}

#[test]
fn test_quiet_by_default() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.ispc");
    let output = dir.path().join("out.ispc");
    fs::write(&input, TWO_BLOCKS).unwrap();

    tispc()
        .env_remove("RUST_LOG")
        .arg(&input)
        .arg(&output)
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
