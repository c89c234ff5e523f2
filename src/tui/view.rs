//! Frame layout for the interactive widget.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};
use rand::Rng;
use scramblepass::fit::Monospace;
use scramblepass::{Session, Settings};

use crate::terminal::{BOLD, DIM, ORANGE, RED, RESET, box_bottom, box_line_center, box_top, center};

const STATUS_TTL: Duration = Duration::from_secs(2);

/// Transient message under the controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub text: String,
    pub error: bool,
    pub until: Instant,
}

impl Status {
    pub fn info(text: impl Into<String>, now: Instant) -> Self {
        Self {
            text: text.into(),
            error: false,
            until: now + STATUS_TTL,
        }
    }

    pub fn error(text: impl Into<String>, now: Instant) -> Self {
        Self {
            text: text.into(),
            error: true,
            until: now + STATUS_TTL,
        }
    }
}

/// Spread `text` across `width` columns, first glyph at the left edge and
/// last at the right. Text wider than `width` is cut.
pub fn track(text: &str, width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    let n = chars.len();
    if n == 0 || width == 0 {
        return String::new();
    }
    if width <= n {
        return chars[..width].iter().collect();
    }
    if n == 1 {
        return center(text, width);
    }

    let mut row = vec![' '; width];
    for (i, c) in chars.iter().enumerate() {
        row[i * (width - 1) / (n - 1)] = *c;
    }
    row.into_iter().collect()
}

/// Title tracked to the width the fit computed for this terminal.
fn title_line<R: Rng>(session: &mut Session<R>, cols: u16) -> String {
    let reference = session.settings().fit.reference_font_size;
    // one column per glyph at the reference size
    let face = Monospace::new(1.0 / reference);
    let size = session.title_font_size(f64::from(cols), &face);

    let title = &session.settings().title;
    let width = (title.chars().count() as f64 * size / reference).round() as usize;
    track(title, width)
}

fn presets_line(settings: &Settings) -> String {
    let mut line = String::from("Length ");
    for &len in &settings.length_presets {
        if len == settings.pass_length {
            line.push_str(&format!(" {ORANGE}[{len}]{RESET}"));
        } else {
            line.push_str(&format!("  {len} "));
        }
    }
    if settings.preset_index().is_none() {
        line.push_str(&format!("  {ORANGE}({}){RESET}", settings.pass_length));
    }
    line
}

fn checkbox(on: bool) -> String {
    if on {
        format!("{ORANGE}[x]{RESET}")
    } else {
        "[ ]".to_string()
    }
}

fn toggles_line(settings: &Settings) -> String {
    format!(
        "{} I want numbers in there!    {} Make it more secure",
        checkbox(settings.include_numbers),
        checkbox(settings.include_symbols)
    )
}

pub fn render<R: Rng>(session: &mut Session<R>, status: Option<&Status>, cols: u16) -> Vec<String> {
    let cols_us = usize::from(cols);
    let title = title_line(session, cols);

    let display = session.current_display_text();
    let box_width = (display.chars().count() + 8).max(40).min(cols_us.max(4));
    let label = if session.is_scrambling() {
        "Generating"
    } else {
        "Password"
    };

    let mut lines = vec![
        format!("{DIM}{title}{RESET}"),
        String::new(),
        box_top(label, box_width),
        box_line_center(&format!("{BOLD}{display}{RESET}"), box_width),
        box_bottom(box_width),
        String::new(),
        presets_line(session.settings()),
        toggles_line(session.settings()),
        String::new(),
        format!(
            "{DIM}Entropy {:.1} bits ({}) · {} chars · {}{RESET}",
            session.entropy_bits(),
            session.strength(),
            session.alphabet_len(),
            scramblepass::rng::entropy_source()
        ),
    ];

    lines.push(match status {
        Some(s) if s.error => format!("{RED}{}{RESET}", s.text),
        Some(s) => format!("{ORANGE}{}{RESET}", s.text),
        None => String::new(),
    });
    lines.push(format!(
        "{DIM}←/→ length · 1-5 preset · n numbers · s symbols · r new · c copy · q quit{RESET}"
    ));

    lines.into_iter().map(|l| center(&l, cols_us)).collect()
}

/// Write `lines` vertically centered, clearing every other row.
pub fn draw<W: Write>(out: &mut W, lines: &[String], rows: u16) -> io::Result<()> {
    let top = usize::from(rows).saturating_sub(lines.len()) / 2;
    for y in 0..rows {
        let line = usize::from(y)
            .checked_sub(top)
            .and_then(|i| lines.get(i))
            .map(String::as_str)
            .unwrap_or("");
        queue!(out, MoveTo(0, y), Clear(ClearType::CurrentLine), Print(line))?;
    }
    out.flush()
}
