//! Centralized warning and prompt messages for CLI output.

use std::io::Write;

use super::quiet;

// ANSI color codes
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Print an error message to stderr (red) - NOT suppressed (errors are always shown)
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

/// Informational line on stderr so stdout stays pipeable - suppressed in quiet mode
pub fn info(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{msg}");
    }
}

pub fn clipboard_copied(count: usize) {
    if quiet::enabled() {
        return;
    }
    if count == 1 {
        eprintln!("*** -COPIED TO CLIPBOARD- ***");
    } else {
        eprintln!("*** -{count} PASSWORDS COPIED TO CLIPBOARD- ***");
    }
}

/// Print clipboard error - NOT suppressed (errors are always shown)
pub fn clipboard_error(err: &str) {
    error(&format!("{err}. Please select and copy manually."));
}

/// Ask whether to print instead when the clipboard is unavailable.
/// Returns true to fall back to the terminal, false to abort.
/// In quiet/non-interactive mode, silently falls back to terminal.
pub fn clipboard_fallback_prompt() -> bool {
    if quiet::skip_prompt() {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_err() {
        return true;
    }
    let input = input.trim().to_lowercase();
    if input.is_empty() || input == "y" || input == "yes" {
        eprintln!();
        return true;
    }

    eprintln!("\nAborted.");
    false
}
