//! Quiet mode and TTY detection for CLI output.

use std::sync::atomic::{AtomicBool, Ordering};

/// Suppresses warnings, confirmations and the reveal animation
static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

pub fn enabled() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Check if stdin is a tty (interactive)
pub fn stdin_is_tty() -> bool {
    unsafe { libc::isatty(0) == 1 }
}

pub fn stdout_is_tty() -> bool {
    unsafe { libc::isatty(1) == 1 }
}

/// True when quiet mode is enabled OR stdin is not a tty.
pub fn skip_prompt() -> bool {
    enabled() || !stdin_is_tty()
}

/// The reveal animation needs a terminal on stdout and a non-quiet run.
pub fn can_animate() -> bool {
    !enabled() && stdout_is_tty()
}
