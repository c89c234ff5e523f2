//! Terminal output utilities.
//!
//! Box drawing, centering and ANSI helpers. Everything returns a `String` so
//! the same helpers serve the raw-mode widget (which positions lines itself)
//! and the CLI (which prints them).

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const RED: &str = "\x1b[38;5;9m";
pub const ORANGE: &str = "\x1b[38;5;208m";

// ============================================================================
// Box Drawing
// ============================================================================

/// ┌─ Title ───────────────────────────┐
pub fn box_top(title: &str, width: usize) -> String {
    let inner = width.saturating_sub(2);
    if title.is_empty() {
        format!("┌{}┐", "─".repeat(inner))
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = inner.saturating_sub(console_width(&title_part));
        format!("┌{}{}┐", title_part, "─".repeat(remaining))
    }
}

/// │ content                            │
pub fn box_line(content: &str, width: usize) -> String {
    let inner_width = width.saturating_sub(4);
    let padding = inner_width.saturating_sub(console_width(content));
    format!("│ {}{} │", content, " ".repeat(padding))
}

/// │          content          │
pub fn box_line_center(content: &str, width: usize) -> String {
    let inner_width = width.saturating_sub(4);
    let total_padding = inner_width.saturating_sub(console_width(content));
    let left_pad = total_padding / 2;
    let right_pad = total_padding - left_pad;
    format!(
        "│ {}{}{} │",
        " ".repeat(left_pad),
        content,
        " ".repeat(right_pad)
    )
}

/// └───────────────────────────────────┘
pub fn box_bottom(width: usize) -> String {
    format!("└{}┘", "─".repeat(width.saturating_sub(2)))
}

/// Help option row with flag column and word-wrapped description.
pub fn box_opt(flag: &str, desc: &str, width: usize) -> Vec<String> {
    let inner_width = width.saturating_sub(4);
    let flag_col = 24;
    let desc_col = inner_width.saturating_sub(flag_col);

    let flag_padded = format!("{:<flag_col$}", flag);

    let mut lines: Vec<String> = Vec::new();
    let mut current_line = String::new();
    for word in desc.split_whitespace() {
        if current_line.is_empty() {
            current_line = word.to_string();
        } else if current_line.len() + 1 + word.len() <= desc_col {
            current_line.push(' ');
            current_line.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current_line));
            current_line = word.to_string();
        }
    }
    if !current_line.is_empty() {
        lines.push(current_line);
    }

    let indent = " ".repeat(flag_col);
    let mut rows = Vec::with_capacity(lines.len().max(1));
    let first = lines.first().map(String::as_str).unwrap_or("");
    rows.push(box_line(&format!("{}{}", flag_padded, first), width));
    for line in lines.iter().skip(1) {
        rows.push(box_line(&format!("{}{}", indent, line), width));
    }
    rows
}

// ============================================================================
// Layout
// ============================================================================

/// Display width ignoring ANSI escape sequences.
pub fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

/// Left-pad `text` so it sits in the middle of `cols` columns.
pub fn center(text: &str, cols: usize) -> String {
    let padding = cols.saturating_sub(console_width(text)) / 2;
    format!("{}{}", " ".repeat(padding), text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boxes_have_requested_width() {
        let width = 30;
        assert_eq!(console_width(&box_top("Password", width)), width);
        assert_eq!(console_width(&box_top("", width)), width);
        assert_eq!(console_width(&box_line("abc", width)), width);
        assert_eq!(console_width(&box_line_center("abc", width)), width);
        assert_eq!(console_width(&box_bottom(width)), width);
    }

    #[test]
    fn escapes_do_not_count() {
        let styled = format!("{ORANGE}[24]{RESET}");
        assert_eq!(console_width(&styled), 4);
        assert_eq!(center(&styled, 10), format!("   {styled}"));
    }

    #[test]
    fn options_wrap() {
        let rows = box_opt(
            "-l, --length <N>",
            "Characters per password, any positive number; the widget offers presets",
            60,
        );
        assert!(rows.len() > 1);
        assert!(rows.iter().all(|r| console_width(r) == 60));
    }
}
