//! End-to-end tests for flag-driven `scramblepass` runs.

use std::process::{Command, Output};

fn scramblepass_bin() -> &'static str {
    env!("CARGO_BIN_EXE_scramblepass")
}

fn run(args: &[&str]) -> Output {
    Command::new(scramblepass_bin())
        .args(args)
        .env_remove("SCRAMBLEPASS_LOG")
        .output()
        .expect("Failed to execute command")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

const SYMBOLS: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

// ============================================================================
// Info Flags
// ============================================================================

#[test]
fn test_help_lists_options() {
    let output = run(&["--help"]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--no-symbols"));
    assert!(stdout.contains("--length"));
}

#[test]
fn test_version() {
    let output = run(&["-v"]);
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("scramblepass "));
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

// ============================================================================
// Generation
// ============================================================================

#[test]
fn test_length_and_alphabet_flags() {
    let output = run(&["-l", "12", "--no-symbols", "--plain", "-q"]);
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 1);
    let pass = &lines[0];
    assert_eq!(pass.chars().count(), 12);
    assert!(pass.chars().all(|c| c.is_ascii_alphanumeric()));
}

#[test]
fn test_letters_only() {
    let output = run(&["-l", "64", "--no-numbers", "--no-symbols", "-p", "-q"]);
    assert_eq!(output.status.code(), Some(0));
    let lines = stdout_lines(&output);
    assert!(lines[0].chars().all(|c| c.is_ascii_alphabetic()));
}

#[test]
fn test_default_length_and_alphabet() {
    let output = run(&["--plain", "-q"]);
    assert_eq!(output.status.code(), Some(0));
    let lines = stdout_lines(&output);
    assert_eq!(lines[0].chars().count(), 32);
    assert!(
        lines[0]
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || SYMBOLS.contains(c))
    );
}

#[test]
fn test_seed_is_deterministic() {
    let a = run(&["--seed", "7", "--plain", "-q"]);
    let b = run(&["--seed", "7", "--plain", "-q"]);
    assert_eq!(a.status.code(), Some(0));
    assert_eq!(a.stdout, b.stdout);

    let batch = run(&["--seed", "7", "-n", "2", "-q"]);
    assert_eq!(batch.status.code(), Some(0));
    let batch_lines = stdout_lines(&batch);
    assert_eq!(batch_lines.len(), 2);
    assert_eq!(batch_lines[0], stdout_lines(&a)[0]);
}

#[test]
fn test_batch_prints_one_per_line() {
    let output = run(&["-n", "3", "-l", "16", "-q"]);
    assert_eq!(output.status.code(), Some(0));
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 3);
    assert!(lines.iter().all(|l| l.chars().count() == 16));
}

#[test]
fn test_entropy_goes_to_stderr() {
    let output = run(&["-l", "8", "--no-numbers", "--no-symbols", "-p", "-e", "--seed", "1"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_lines(&output).len(), 1);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Entropy: 45.6 bits (Fair)"), "stderr: {stderr}");
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_zero_length_fails() {
    let output = run(&["-l", "0", "-p", "-q"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid password length: 0"));
}

#[test]
fn test_unknown_argument_fails() {
    let output = run(&["--hex"]);
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown argument: --hex"));
}

#[test]
fn test_missing_value_fails() {
    let output = run(&["-l"]);
    assert_eq!(output.status.code(), Some(2));
}
