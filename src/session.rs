//! Application state owned by the host shell.
//!
//! Holds the current settings, the committed password and the animator, and
//! exposes the operations a renderer needs: configuration changes, per-frame
//! ticks, the text to draw, title fitting and copying.

use std::time::Instant;

use rand::Rng;
use tracing::{debug, warn};

use crate::clipboard::{Clipboard, ClipboardError};
use crate::fit::{AutoFit, TextMeasure};
use crate::pass::{self, GenerateError, GenerationRequest, Password, Strength, charset};
use crate::scramble::{Frame, ScrambleAnimator};
use crate::settings::Settings;

/// Scramble trigger state. The trigger switches off a fixed time after the
/// first tick of a generation, not at commit. Hosts tick as soon as a
/// password is committed, so the two are the same instant in practice, and
/// a session that is never ticked never starts the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Trigger {
    Off,
    Armed,
    Until(Instant),
}

pub struct Session<R> {
    settings: Settings,
    rng: R,
    password: Password,
    animator: ScrambleAnimator<R>,
    fit: AutoFit,
    trigger: Trigger,
}

impl<R: Rng> Session<R> {
    /// Build the session and generate the initial password. `rng` draws
    /// passwords; `glyph_rng` only feeds the cosmetic scramble glyphs.
    pub fn new(settings: Settings, rng: R, glyph_rng: R) -> Result<Self, GenerateError> {
        let animator = ScrambleAnimator::new(glyph_rng).with_duration(settings.scramble_duration);
        let fit = AutoFit::new(settings.fit);
        let mut session = Self {
            settings,
            rng,
            password: Password::default(),
            animator,
            fit,
            trigger: Trigger::Off,
        };
        session.regenerate()?;
        Ok(session)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Apply a new configuration and commit a fresh password for it. On error
    /// the previous settings and password stay in place.
    pub fn on_config_change(
        &mut self,
        length: usize,
        include_numbers: bool,
        include_symbols: bool,
    ) -> Result<&Password, GenerateError> {
        let request = GenerationRequest::new(length, include_numbers, include_symbols);
        let password = match request.generate(&mut self.rng) {
            Ok(p) => p,
            Err(e) => {
                warn!(%e, "generation failed, keeping previous password");
                return Err(e);
            }
        };

        self.settings.pass_length = length;
        self.settings.include_numbers = include_numbers;
        self.settings.include_symbols = include_symbols;
        self.commit(password);
        Ok(&self.password)
    }

    /// Returns whether a new password was generated.
    pub fn set_length(&mut self, length: usize) -> Result<bool, GenerateError> {
        if length == self.settings.pass_length {
            return Ok(false);
        }
        let s = &self.settings;
        let (numbers, symbols) = (s.include_numbers, s.include_symbols);
        self.on_config_change(length, numbers, symbols)?;
        Ok(true)
    }

    pub fn step_length(&mut self, step: isize) -> Result<bool, GenerateError> {
        self.set_length(self.settings.step_preset(step))
    }

    pub fn toggle_numbers(&mut self) -> Result<&Password, GenerateError> {
        let s = &self.settings;
        let (length, numbers, symbols) = (s.pass_length, !s.include_numbers, s.include_symbols);
        self.on_config_change(length, numbers, symbols)
    }

    pub fn toggle_symbols(&mut self) -> Result<&Password, GenerateError> {
        let s = &self.settings;
        let (length, numbers, symbols) = (s.pass_length, s.include_numbers, !s.include_symbols);
        self.on_config_change(length, numbers, symbols)
    }

    /// New password for the current configuration.
    pub fn regenerate(&mut self) -> Result<&Password, GenerateError> {
        let request = self.settings.request();
        self.on_config_change(request.length, request.include_numbers, request.include_symbols)
    }

    fn commit(&mut self, password: Password) {
        self.password = password;
        let run = self.animator.start(self.password.as_str());
        self.trigger = Trigger::Armed;
        debug!(run, len = self.password.len(), "password committed");
    }

    /// Advance one render frame.
    pub fn tick(&mut self, now: Instant) -> Frame<'_> {
        match self.trigger {
            Trigger::Armed => self.trigger = Trigger::Until(now + self.settings.scramble_hold),
            Trigger::Until(deadline) if now >= deadline => {
                self.animator.cancel();
                self.trigger = Trigger::Off;
            }
            _ => {}
        }
        self.animator.tick(now)
    }

    /// Force the trigger off; the display shows the committed password.
    pub fn stop_scramble(&mut self) {
        self.animator.cancel();
        self.trigger = Trigger::Off;
    }

    pub fn current_display_text(&self) -> &str {
        self.animator.display()
    }

    pub fn is_scrambling(&self) -> bool {
        self.animator.is_running()
    }

    /// The password that gets copied, never the transient scramble frame.
    pub fn committed(&self) -> &Password {
        &self.password
    }

    pub fn request_fit<M: TextMeasure + ?Sized>(
        &mut self,
        text: &str,
        container_width: f64,
        measure: &M,
    ) -> f64 {
        self.fit.request(text, container_width, measure)
    }

    /// Fitted size for the configured title.
    pub fn title_font_size<M: TextMeasure + ?Sized>(
        &mut self,
        container_width: f64,
        measure: &M,
    ) -> f64 {
        self.fit.request(&self.settings.title, container_width, measure)
    }

    pub fn copy<C: Clipboard + ?Sized>(&self, clipboard: &mut C) -> Result<(), ClipboardError> {
        clipboard.set_text(self.password.as_str())?;
        debug!(len = self.password.len(), "password copied");
        Ok(())
    }

    pub fn alphabet_len(&self) -> usize {
        charset::size(self.settings.include_numbers, self.settings.include_symbols)
    }

    pub fn entropy_bits(&self) -> f64 {
        pass::entropy_bits(self.password.len(), self.alphabet_len())
    }

    pub fn strength(&self) -> Strength {
        Strength::from_bits(self.entropy_bits())
    }
}
