//! Integration tests for the sentsplit CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

const EXPECTED_SAMPLE: &str = "<doc id=\"1\">\n\
Mr. Smith went to Washington.\n\
He arrived at 5 p.m. on Friday.\n\
The U.S. Army met him.\n\
<P>\n\
\"Are you tired?\" she asked.\n\
He said no.\n\
</doc>\n";

#[test]
fn test_help_command() {
    let mut cmd = Command::cargo_bin("sentsplit").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Rule-based sentence boundary detection"));
}

#[test]
fn test_version_command() {
    let mut cmd = Command::cargo_bin("sentsplit").unwrap();
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("sentsplit"));
}

#[test]
fn test_list_languages() {
    let mut cmd = Command::cargo_bin("sentsplit").unwrap();
    cmd.arg("list").arg("languages");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Available languages:"))
        .stdout(predicate::str::contains("en  English"))
        .stdout(predicate::str::contains("ru  Russian"));
}

#[test]
fn test_split_to_stdout() {
    let mut cmd = Command::cargo_bin("sentsplit").unwrap();
    cmd.arg("split").arg(fixture("english-sample.txt"));
    cmd.assert().success().stdout(EXPECTED_SAMPLE);
}

#[test]
fn test_split_to_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("out.txt");

    let mut cmd = Command::cargo_bin("sentsplit").unwrap();
    cmd.arg("split")
        .arg("-l")
        .arg("en")
        .arg(fixture("english-sample.txt"))
        .arg(&output);
    cmd.assert().success().stdout("");

    assert_eq!(fs::read_to_string(&output).unwrap(), EXPECTED_SAMPLE);
}

#[test]
fn test_split_json_format() {
    let mut cmd = Command::cargo_bin("sentsplit").unwrap();
    cmd.arg("split")
        .arg("--format")
        .arg("json")
        .arg(fixture("english-sample.txt"));

    let output = cmd.assert().success().get_output().stdout.clone();
    let records: Vec<serde_json::Value> = serde_json::from_slice(&output).unwrap();
    assert_eq!(records.len(), 8);
    assert_eq!(records[0]["index"], 0);
    assert_eq!(records[0]["text"], "<doc id=\"1\">");
    assert_eq!(records[4]["text"], "<P>");
}

#[test]
fn test_config_file_sets_format() {
    let mut cmd = Command::cargo_bin("sentsplit").unwrap();
    cmd.arg("split")
        .arg("-c")
        .arg(fixture("config-json.toml"))
        .arg(fixture("english-sample.txt"));
    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("["))
        .stdout(predicate::str::contains("\"index\": 7"));
}

#[test]
fn test_flag_overrides_config_file() {
    let mut cmd = Command::cargo_bin("sentsplit").unwrap();
    cmd.arg("split")
        .arg("-c")
        .arg(fixture("config-json.toml"))
        .arg("-f")
        .arg("text")
        .arg(fixture("english-sample.txt"));
    cmd.assert().success().stdout(EXPECTED_SAMPLE);
}

#[test]
fn test_unknown_language_falls_back_with_warning() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("in.txt");
    fs::write(&input, "Mr. Smith left. He came back.").unwrap();

    let mut cmd = Command::cargo_bin("sentsplit").unwrap();
    cmd.env_remove("RUST_LOG")
        .arg("split")
        .arg("-l")
        .arg("xx")
        .arg(&input);
    cmd.assert()
        .success()
        .stdout("Mr. Smith left.\nHe came back.\n")
        .stderr(predicate::str::contains("falling back to English"));
}

#[test]
fn test_quiet_silences_fallback_warning() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("in.txt");
    fs::write(&input, "One. Two.").unwrap();

    let mut cmd = Command::cargo_bin("sentsplit").unwrap();
    cmd.arg("split").arg("-q").arg("-l").arg("xx").arg(&input);
    cmd.assert().success().stdout("One.\nTwo.\n").stderr("");
}

#[test]
fn test_prefix_dir_moses_list() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("nonbreaking_prefix.xx"),
        "# custom prefixes\nQx\nNum #NUMERIC_ONLY#\n",
    )
    .unwrap();
    let input = temp_dir.path().join("in.txt");
    fs::write(&input, "Ask Qx. Bond about Num. 4 today. Done.").unwrap();

    let mut cmd = Command::cargo_bin("sentsplit").unwrap();
    cmd.arg("split")
        .arg("-l")
        .arg("xx")
        .arg("--prefix-dir")
        .arg(temp_dir.path())
        .arg(&input);
    cmd.assert()
        .success()
        .stdout("Ask Qx. Bond about Num. 4 today.\nDone.\n");
}

#[test]
fn test_missing_input_file() {
    let mut cmd = Command::cargo_bin("sentsplit").unwrap();
    cmd.arg("split").arg("nonexistent-file.txt");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_missing_prefix_data_fails() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("in.txt");
    fs::write(&input, "Text.").unwrap();
    let output = temp_dir.path().join("out.txt");

    let mut cmd = Command::cargo_bin("sentsplit").unwrap();
    cmd.arg("split")
        .arg("--prefix-dir")
        .arg(temp_dir.path().join("empty"))
        .arg(&input)
        .arg(&output);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Prefix data error"));
    assert!(!output.exists());
}

#[test]
fn test_invalid_format_rejected() {
    let mut cmd = Command::cargo_bin("sentsplit").unwrap();
    cmd.arg("split")
        .arg("-f")
        .arg("xml")
        .arg(fixture("english-sample.txt"));
    cmd.assert().failure();
}
