use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::{PlayFile, SCENE};

fn word_tally() -> Command {
    Command::new(env!("CARGO_BIN_EXE_word_tally"))
}

#[test]
fn shows_help() {
    word_tally()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("word_tally"));
}

#[test]
fn prints_text_report_for_file() {
    let play = PlayFile::new("scene.txt", SCENE);
    word_tally()
        .arg(&play.path)
        .assert()
        .success()
        .stdout("1 horatio\n2 and\n2 hamlet\n1 god\nTotal word count = 8\n");
}

#[test]
fn reads_hamlet_txt_by_default() {
    let play = PlayFile::new("Hamlet.txt", SCENE);
    word_tally()
        .current_dir(play.dir())
        .assert()
        .success()
        .stdout(predicate::str::ends_with("Total word count = 8\n"));
}

#[test]
fn missing_default_file_fails_with_status_one() {
    let dir = tempfile::tempdir().unwrap();
    word_tally()
        .current_dir(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("could not open Hamlet.txt"));
}

#[test]
fn dash_reads_stdin() {
    word_tally()
        .args(["--sequential", "-"])
        .write_stdin("And HORATIO, and Horatio's sword\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("2 horatio\n2 and\n"))
        .stdout(predicate::str::contains("Total word count = 5"));
}

#[test]
fn json_output_is_machine_readable() {
    let play = PlayFile::new("scene.txt", SCENE);
    let output = word_tally()
        .args(["--format", "json", "-j", "2"])
        .arg(&play.path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["counts"]["hamlet"], 2);
    assert_eq!(value["counts"]["total"], 8);
    assert_eq!(value["lines"], 2);
    assert_eq!(value["workers"], 2);
}

#[test]
fn zero_jobs_is_rejected() {
    let play = PlayFile::new("scene.txt", SCENE);
    word_tally()
        .args(["-j", "0"])
        .arg(&play.path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("at least one worker"));
}

#[test]
fn verbose_logs_go_to_stderr_only() {
    let play = PlayFile::new("scene.txt", SCENE);
    word_tally()
        .args(["-v"])
        .arg(&play.path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("1 horatio\n"))
        .stderr(predicate::str::contains("tallying"));
}
