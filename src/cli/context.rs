//! CLI context - bundles settings and flags, runs one invocation.

use std::io::{self, Write};
use std::thread;
use std::time::{Duration, Instant};

use scramblepass::clipboard::{Clipboard, ClipboardError, SystemClipboard};
use scramblepass::pass::{self, Password};
use scramblepass::{Rand, Session, Settings};
use tracing::debug;
use zeroize::Zeroize;

use super::help::print_help;
use super::{CliFlags, prompts, quiet};

/// Why a run stopped before (or instead of) completing normally.
pub enum Stop {
    /// Early exit, not an error.
    Done,
    /// Fatal for this invocation; the message is shown and the exit code is 2.
    Failed(String),
}

pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
}

impl Context {
    /// Returns Err with the error message if parsing fails.
    pub fn new(args: Vec<String>) -> Result<Self, String> {
        let flags = super::parse(&args).map_err(|e| e.to_string())?;
        Ok(Self {
            settings: Settings::default(),
            flags,
        })
    }

    pub fn run(&mut self) -> Result<(), Stop> {
        self.handle_info_flags()?;
        self.apply_flags();
        quiet::set(self.flags.quiet);

        let count = self.flags.count();
        debug!(count, length = self.settings.pass_length, "cli run");

        if count == 1 {
            self.single()
        } else {
            self.batch(count)
        }
    }

    fn handle_info_flags(&self) -> Result<(), Stop> {
        if self.flags.help {
            print_help();
            return Err(Stop::Done);
        }
        if self.flags.version {
            println!("scramblepass {}", env!("CARGO_PKG_VERSION"));
            return Err(Stop::Done);
        }
        Ok(())
    }

    /// Apply CLI flags to settings.
    fn apply_flags(&mut self) {
        if let Some(len) = self.flags.length {
            self.settings.pass_length = len;
        }
        if self.flags.no_numbers {
            self.settings.include_numbers = false;
        }
        if self.flags.no_symbols {
            self.settings.include_symbols = false;
        }
    }

    fn rngs(&self) -> (Rand, Rand) {
        match self.flags.seed {
            Some(seed) => (Rand::seeded(seed), Rand::seeded(seed.wrapping_add(1))),
            None => (Rand::from_entropy(), Rand::from_entropy()),
        }
    }

    fn single(&mut self) -> Result<(), Stop> {
        let (rng, glyphs) = self.rngs();
        let mut session = Session::new(self.settings.clone(), rng, glyphs)
            .map_err(|e| Stop::Failed(e.to_string()))?;

        if self.flags.clipboard {
            if self.copy(|clip| session.copy(clip), 1)? {
                self.report_entropy(session.entropy_bits());
                return Ok(());
            }
            session.stop_scramble();
        }

        if self.flags.plain || !quiet::can_animate() {
            session.stop_scramble();
            println!("{}", session.committed());
        } else {
            let stdout = io::stdout();
            print_revealed(&mut stdout.lock(), &mut session, self.settings.frame_interval)
                .map_err(|e| Stop::Failed(format!("Could not print password: {e}")))?;
        }

        self.report_entropy(session.entropy_bits());
        Ok(())
    }

    fn batch(&mut self, count: usize) -> Result<(), Stop> {
        let (mut rng, _) = self.rngs();
        let request = self.settings.request();
        let passwords = pass::generate_batch(&request, count, &mut rng)
            .map_err(|e| Stop::Failed(e.to_string()))?;

        if self.flags.clipboard {
            let copied = self.copy(
                |clip| {
                    let mut joined = join(&passwords);
                    let result = clip.set_text(&joined);
                    joined.zeroize();
                    result
                },
                count,
            )?;
            if copied {
                self.report_entropy(pass::entropy_bits(request.length, request.alphabet().len()));
                return Ok(());
            }
        }

        let stdout = io::stdout();
        let mut out = io::BufWriter::new(stdout.lock());
        for password in &passwords {
            let _ = writeln!(out, "{}", password);
        }
        let _ = out.flush();
        drop(out);

        self.report_entropy(pass::entropy_bits(request.length, request.alphabet().len()));
        Ok(())
    }

    /// Hand the committed password(s) to the system clipboard. Returns false
    /// when the caller should print instead.
    fn copy<F>(&self, write: F, count: usize) -> Result<bool, Stop>
    where
        F: FnOnce(&mut dyn Clipboard) -> Result<(), ClipboardError>,
    {
        let mut clipboard = match SystemClipboard::new() {
            Ok(c) => c,
            Err(e) => {
                debug!(%e, "no system clipboard");
                return if prompts::clipboard_fallback_prompt() {
                    Ok(false)
                } else {
                    Err(Stop::Done)
                };
            }
        };

        match write(&mut clipboard) {
            Ok(()) => {
                prompts::clipboard_copied(count);
                Ok(true)
            }
            Err(e) => {
                prompts::clipboard_error(&e.to_string());
                Ok(false)
            }
        }
    }

    fn report_entropy(&self, bits: f64) {
        if self.flags.entropy {
            let strength = pass::Strength::from_bits(bits);
            prompts::info(&format!(
                "Entropy: {:.1} bits ({}) - source: {}",
                bits,
                strength,
                if self.flags.seed.is_some() {
                    "seeded"
                } else {
                    scramblepass::rng::entropy_source()
                }
            ));
        }
    }
}

fn join(passwords: &[Password]) -> String {
    let mut joined = String::new();
    for (i, p) in passwords.iter().enumerate() {
        if i > 0 {
            joined.push('\n');
        }
        joined.push_str(p.as_str());
    }
    joined
}

/// Play the scramble on one terminal line until it settles on the committed
/// password.
fn reveal<W: Write>(out: &mut W, session: &mut Session<Rand>, interval: Duration) -> io::Result<()> {
    write!(out, "\x1b[?25l")?;

    loop {
        let frame = session.tick(Instant::now());
        write!(out, "\r{}", frame.text)?;
        out.flush()?;
        if !frame.running {
            break;
        }
        thread::sleep(interval);
    }

    write!(out, "\x1b[?25h\n")?;
    out.flush()
}

/// Reveal, or when the terminal fails mid-run, overwrite the line with the
/// committed password so no scrambled frame is left behind.
fn print_revealed<W: Write>(
    out: &mut W,
    session: &mut Session<Rand>,
    interval: Duration,
) -> io::Result<()> {
    if let Err(e) = reveal(out, session, interval) {
        debug!(%e, "reveal interrupted");
        session.stop_scramble();
        write!(out, "\r{}\x1b[?25h\n", session.committed())?;
        out.flush()?;
    }
    Ok(())
}
