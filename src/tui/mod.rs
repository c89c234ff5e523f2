//! Interactive password widget.
//!
//! Full-screen loop: tick the session, draw a frame, wait for a key. While a
//! scramble runs the loop polls at the frame interval; otherwise it idles.

mod input;
mod view;

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal;
use rand::Rng;
use scramblepass::clipboard::SystemClipboard;
use scramblepass::fit::FitOptions;
use scramblepass::{Rand, Session, Settings};
use tracing::{debug, warn};

use crate::cli::prompts;
use crate::exits;
use crate::terminal::ScreenGuard;

use input::Action;
use view::Status;

/// Columns kept free on either side of the title.
const TITLE_MARGIN: f64 = 4.0;
/// Poll timeout while nothing animates; bounds how long a status lingers.
const IDLE_POLL: Duration = Duration::from_millis(250);
const MANUAL_COPY: &str = "Could not copy password. Please select and copy manually.";

pub fn run() {
    if let Err(e) = run_widget() {
        exits::reset_terminal();
        prompts::error(&format!("Interactive mode failed: {e}"));
        std::process::exit(1);
    }
}

/// Widget settings: the title is fitted in terminal columns, not pixels.
fn widget_settings() -> Settings {
    Settings {
        fit: FitOptions {
            horizontal_padding: TITLE_MARGIN,
            ..FitOptions::default()
        },
        ..Settings::default()
    }
}

fn run_widget() -> io::Result<()> {
    let settings = widget_settings();
    let frame_interval = settings.frame_interval;
    let mut session = Session::new(settings, Rand::from_entropy(), Rand::from_entropy())
        .map_err(io::Error::other)?;

    let mut clipboard: Option<SystemClipboard> = None;
    let mut status: Option<Status> = None;

    let mut guard = ScreenGuard::enter()?;
    let mut out = io::stdout();
    let (mut cols, mut rows) = terminal::size()?;

    loop {
        let now = Instant::now();
        session.tick(now);
        if status.as_ref().is_some_and(|s| now >= s.until) {
            status = None;
        }

        let lines = view::render(&mut session, status.as_ref(), cols);
        view::draw(&mut out, &lines, rows)?;

        let timeout = if session.is_scrambling() {
            frame_interval
        } else {
            IDLE_POLL
        };
        if !event::poll(timeout)? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let Some(action) = input::action_for(key) else {
                    continue;
                };
                if action == Action::Quit {
                    break;
                }
                if let Some(next) = apply(action, &mut session, &mut clipboard, now) {
                    status = Some(next);
                }
            }
            Event::Resize(c, r) => {
                debug!(cols = c, rows = r, "resized");
                cols = c;
                rows = r;
            }
            _ => {}
        }
    }

    guard.leave();
    Ok(())
}

/// Run one action against the session. Returns a status line to show, if any.
fn apply<R: Rng>(
    action: Action,
    session: &mut Session<R>,
    clipboard: &mut Option<SystemClipboard>,
    now: Instant,
) -> Option<Status> {
    let result = match action {
        Action::Step(step) => session.step_length(step).map(|_| ()),
        Action::Preset(index) => {
            let preset = session.settings().length_presets.get(index).copied();
            match preset {
                Some(length) => session.set_length(length).map(|_| ()),
                None => Ok(()),
            }
        }
        Action::ToggleNumbers => session.toggle_numbers().map(|_| ()),
        Action::ToggleSymbols => session.toggle_symbols().map(|_| ()),
        Action::Regenerate => session.regenerate().map(|_| ()),
        Action::Copy => return Some(copy(session, clipboard, now)),
        Action::Quit => return None,
    };
    result.err().map(|e| Status::error(e.to_string(), now))
}

/// Copy the committed password. The clipboard is opened on first use and
/// dropped after a failure so the next attempt reconnects.
fn copy<R: Rng>(
    session: &Session<R>,
    clipboard: &mut Option<SystemClipboard>,
    now: Instant,
) -> Status {
    if clipboard.is_none() {
        match SystemClipboard::new() {
            Ok(c) => *clipboard = Some(c),
            Err(e) => {
                warn!(%e, "clipboard unavailable");
                return Status::error(MANUAL_COPY, now);
            }
        }
    }
    let Some(clip) = clipboard.as_mut() else {
        return Status::error(MANUAL_COPY, now);
    };

    match session.copy(clip) {
        Ok(()) => Status::info("Password copied to clipboard!", now),
        Err(e) => {
            warn!(%e, "copy failed");
            *clipboard = None;
            Status::error(MANUAL_COPY, now)
        }
    }
}
