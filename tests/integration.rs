//! Integration tests for wordlist-forge

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;
use wordlist_forge::{
    produce, total, Alphabet, GenerationConfig, RunStatus, WordlistError, WordlistWriter,
};

fn read_lines(path: &std::path::Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_produce_binary_scenario() {
    assert_eq!(total("01", 3).unwrap(), 8);
    let all: Vec<_> = produce("01", 3).unwrap().collect();
    assert_eq!(
        all,
        vec!["000", "001", "010", "011", "100", "101", "110", "111"]
    );
}

#[test]
fn test_kth_combination_is_base_representation() {
    let gen = produce("0123456789", 6).unwrap();
    for (k, combination) in gen.step_by(7919).take(100).enumerate() {
        let rank = k * 7919;
        assert_eq!(combination, format!("{:06}", rank));
    }
}

#[test]
fn test_sample_writes_file() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("wordlist.txt");
    let config = GenerationConfig {
        output: output.clone(),
        sample: Some(5),
        ..Default::default()
    };

    let summary = WordlistWriter::new(config).unwrap().run(|_| {}).unwrap();

    assert_eq!(summary.status, RunStatus::Completed);
    assert_eq!(summary.output.as_deref(), Some(output.as_path()));
    assert_eq!(
        read_lines(&output),
        vec!["00000000", "00000001", "00000002", "00000003", "00000004"]
    );
    assert_eq!(
        std::fs::metadata(&output).unwrap().len(),
        summary.bytes_written
    );
}

#[test]
fn test_skip_and_take_window_file() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("window.txt");
    let config = GenerationConfig {
        output: output.clone(),
        start: 3,
        sample: Some(2),
        ..Default::default()
    };

    WordlistWriter::new(config).unwrap().run(|_| {}).unwrap();
    assert_eq!(read_lines(&output), vec!["00000003", "00000004"]);
}

#[test]
fn test_interrupted_run_keeps_complete_lines() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("partial.txt");
    let config = GenerationConfig {
        output: output.clone(),
        length: 5,
        progress_interval: 250,
        ..Default::default()
    };

    let writer = WordlistWriter::new(config).unwrap();
    let token = writer.cancel_token();
    let summary = writer
        .run(|p| {
            if p.current == 1000 {
                token.cancel();
            }
        })
        .unwrap();

    assert_eq!(summary.status, RunStatus::Interrupted);
    assert_eq!(summary.written, 1000);

    let content = std::fs::read_to_string(&output).unwrap();
    assert!(content.ends_with('\n'));
    let lines: Vec<_> = content.lines().collect();
    assert_eq!(lines.len(), 1000);
    assert!(lines.iter().all(|l| l.len() == 5));
    assert_eq!(lines[999], "00999");
}

#[test]
fn test_resume_continues_interrupted_run() {
    let dir = tempdir().unwrap();
    let first = dir.path().join("first.txt");
    let second = dir.path().join("second.txt");
    let alphabet = Alphabet::new("abc").unwrap();

    let config = GenerationConfig {
        alphabet: alphabet.clone(),
        length: 4,
        output: first.clone(),
        progress_interval: 10,
        ..Default::default()
    };
    let writer = WordlistWriter::new(config).unwrap();
    let token = writer.cancel_token();
    let summary = writer
        .run(|p| {
            if p.current == 30 {
                token.cancel();
            }
        })
        .unwrap();

    let resumed = GenerationConfig {
        alphabet: alphabet.clone(),
        length: 4,
        output: second.clone(),
        start: summary.next_start(),
        ..Default::default()
    };
    WordlistWriter::new(resumed).unwrap().run(|_| {}).unwrap();

    let mut joined = read_lines(&first);
    joined.extend(read_lines(&second));
    let expected: Vec<_> = alphabet.combinations(4).unwrap().collect();
    assert_eq!(joined, expected);
}

#[test]
fn test_unwritable_output_is_io_error() {
    let dir = tempdir().unwrap();
    let config = GenerationConfig {
        output: dir.path().join("missing").join("wordlist.txt"),
        sample: Some(1),
        ..Default::default()
    };

    let err = WordlistWriter::new(config).unwrap().run(|_| {}).unwrap_err();
    match err {
        WordlistError::Io { path, .. } => {
            assert!(path.unwrap().ends_with("wordlist.txt"));
        }
        other => panic!("expected IO error, got {:?}", other),
    }
}

#[test]
fn test_cli_sample() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("out.txt");

    Command::cargo_bin("wordlist-forge")
        .unwrap()
        .arg("--output")
        .arg(&output)
        .args(["--sample", "5", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully generated 5 combinations"));

    assert_eq!(
        read_lines(&output),
        vec!["00000000", "00000001", "00000002", "00000003", "00000004"]
    );
}

#[test]
fn test_cli_digits_alias_and_start() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("bin.txt");

    Command::cargo_bin("wordlist-forge")
        .unwrap()
        .arg("-o")
        .arg(&output)
        .args(["--digits", "01", "-l", "3", "--start", "5", "-q"])
        .assert()
        .success();

    assert_eq!(read_lines(&output), vec!["101", "110", "111"]);
}

#[test]
fn test_cli_json_summary() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("json.txt");

    let assert = Command::cargo_bin("wordlist-forge")
        .unwrap()
        .arg("-o")
        .arg(&output)
        .args(["-l", "4", "-s", "12", "--json"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let summary: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(summary["status"], "completed");
    assert_eq!(summary["written"], 12);
    assert_eq!(summary["total_combinations"], 10_000);
}

#[test]
fn test_cli_empty_alphabet_fails() {
    Command::cargo_bin("wordlist-forge")
        .unwrap()
        .args(["--alphabet", "", "-s", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid argument"));
}

#[test]
fn test_cli_oversized_length_rejected() {
    Command::cargo_bin("wordlist-forge")
        .unwrap()
        .args(["--alphabet", "a", "-l", "4000000000", "-s", "1", "-q"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid argument"));
}

#[test]
fn test_cli_unwritable_output_fails() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("nope").join("out.txt");

    Command::cargo_bin("wordlist-forge")
        .unwrap()
        .arg("-o")
        .arg(&output)
        .args(["-s", "1", "-q"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File error"));
}

#[cfg(unix)]
#[test]
fn test_cli_sigint_stops_cleanly() {
    use std::process::{Command as StdCommand, Stdio};
    use std::time::{Duration, Instant};

    let dir = tempdir().unwrap();
    let output = dir.path().join("sigint.txt");

    let child = StdCommand::new(assert_cmd::cargo::cargo_bin("wordlist-forge"))
        .arg("-o")
        .arg(&output)
        .args(["-l", "10", "-y", "-q"])
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    // The file only gains bytes once the writer is running, after the
    // Ctrl-C handler is installed.
    let deadline = Instant::now() + Duration::from_secs(30);
    while std::fs::metadata(&output).map(|m| m.len()).unwrap_or(0) == 0 {
        assert!(Instant::now() < deadline, "output file never filled");
        std::thread::sleep(Duration::from_millis(20));
    }

    let status = StdCommand::new("kill")
        .args(["-INT", &child.id().to_string()])
        .status()
        .unwrap();
    assert!(status.success());

    let result = child.wait_with_output().unwrap();
    assert!(result.status.success());
    let stdout = String::from_utf8(result.stdout).unwrap();
    assert!(stdout.contains("interrupted by user"), "stdout: {}", stdout);
    assert!(stdout.contains("Resume with --start"));

    let content = std::fs::read_to_string(&output).unwrap();
    assert!(content.ends_with('\n'));
    assert!(content.lines().all(|line| line.len() == 10));
}
