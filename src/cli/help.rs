//! Help screen.

use scramblepass::settings::Settings;

use crate::terminal::{box_bottom, box_line, box_line_center, box_opt, box_top};

const WIDTH: usize = 74;

pub fn help_lines() -> Vec<String> {
    let defaults = Settings::default();
    let presets = defaults
        .length_presets
        .iter()
        .map(|l| l.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    let mut lines = vec![
        box_top("Scramblepass", WIDTH),
        box_line_center("Password generator with a scramble reveal", WIDTH),
        box_line("", WIDTH),
        box_line("MODES:", WIDTH),
        box_line("  1) Interactive: run without arguments. Pick a length, toggle", WIDTH),
        box_line("     numbers and symbols, copy with one key.", WIDTH),
        box_line("  2) Client: pass flags (e.g. -l 16 -n 5) to print passwords.", WIDTH),
        box_line("", WIDTH),
        box_line("USAGE:", WIDTH),
        box_line("  scramblepass [OPTIONS]", WIDTH),
        box_line("", WIDTH),
        box_line("OPTIONS:", WIDTH),
    ];

    let opts: [(&str, String); 11] = [
        (
            "  -l, --length <N>",
            format!(
                "Characters per password (default: {}; widget presets: {})",
                defaults.pass_length, presets
            ),
        ),
        ("  -n, --number <N>", "How many passwords to print (default: 1)".into()),
        ("      --no-numbers", "Leave digits out of the alphabet".into()),
        ("      --no-symbols", "Leave symbols out of the alphabet".into()),
        ("  -b, --board", "Copy to the clipboard instead of printing".into()),
        ("  -p, --plain", "Print without the reveal animation".into()),
        ("  -e, --entropy", "Report entropy bits and strength on stderr".into()),
        ("      --seed <N>", "Reproducible output from a fixed seed".into()),
        ("  -q, --quiet", "No animation, warnings or confirmations".into()),
        ("  -h, --help", "Show this help".into()),
        ("  -v, --version", "Show version".into()),
    ];
    for (flag, desc) in &opts {
        lines.extend(box_opt(flag, desc, WIDTH));
    }

    lines.push(box_line("", WIDTH));
    lines.push(box_line("NOTE: the generator is uniform but not cryptographically", WIDTH));
    lines.push(box_line("      secure.", WIDTH));
    lines.push(box_line("", WIDTH));
    lines.push(box_line("Diagnostics: SCRAMBLEPASS_LOG=debug (stderr)", WIDTH));
    lines.push(box_bottom(WIDTH));
    lines
}

pub fn print_help() {
    for line in help_lines() {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::console_width;

    #[test]
    fn every_line_fits_the_box() {
        let lines = help_lines();
        assert!(lines.iter().all(|l| console_width(l) == WIDTH));
        assert!(lines.iter().any(|l| l.contains("--no-symbols")));
    }
}
