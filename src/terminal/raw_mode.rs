//! Full-screen RAII guard.

use std::io::{self, Write};

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};

use crate::exits;

/// Raw mode on the alternate screen with the cursor hidden. Everything is
/// restored on drop.
pub struct ScreenGuard {
    active: bool,
}

impl ScreenGuard {
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut out = io::stdout();
        if let Err(e) = execute!(out, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(e);
        }
        exits::set_alternate_screen(true);
        Ok(Self { active: true })
    }

    /// Restore the terminal early (also happens on drop).
    pub fn leave(&mut self) {
        if self.active {
            let mut out = io::stdout();
            let _ = execute!(out, Show, LeaveAlternateScreen);
            let _ = out.flush();
            let _ = disable_raw_mode();
            exits::set_alternate_screen(false);
            self.active = false;
        }
    }
}

impl Drop for ScreenGuard {
    fn drop(&mut self) {
        self.leave();
    }
}
