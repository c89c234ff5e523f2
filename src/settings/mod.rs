//! Generator settings.

use std::time::Duration;

use crate::fit::FitOptions;
use crate::pass::GenerationRequest;
use crate::scramble;

pub const LENGTH_PRESETS: [usize; 5] = [8, 12, 16, 24, 32];
pub const TITLE: &str = "Password Generator";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub pass_length: usize,
    pub include_numbers: bool,
    pub include_symbols: bool,
    pub length_presets: Vec<usize>,
    pub scramble_duration: Duration,
    /// How long the scramble trigger stays on after a generation.
    pub scramble_hold: Duration,
    pub frame_interval: Duration,
    pub title: String,
    pub fit: FitOptions,
}

impl Settings {
    pub fn request(&self) -> GenerationRequest {
        GenerationRequest::new(self.pass_length, self.include_numbers, self.include_symbols)
    }

    /// Index of the current length in the presets, if it is one of them.
    pub fn preset_index(&self) -> Option<usize> {
        self.length_presets.iter().position(|&l| l == self.pass_length)
    }

    /// Preset `step` places away from the current length, clamped to the ends.
    /// A length outside the presets steps from the nearest preset.
    pub fn step_preset(&self, step: isize) -> usize {
        if self.length_presets.is_empty() {
            return self.pass_length;
        }
        let current = self.preset_index().unwrap_or_else(|| {
            self.length_presets
                .iter()
                .enumerate()
                .min_by_key(|(_, l)| l.abs_diff(self.pass_length))
                .map(|(i, _)| i)
                .unwrap_or(0)
        });
        let last = self.length_presets.len() as isize - 1;
        let next = (current as isize + step).clamp(0, last) as usize;
        self.length_presets[next]
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pass_length: 32,
            include_numbers: true,
            include_symbols: true,
            length_presets: LENGTH_PRESETS.to_vec(),
            scramble_duration: scramble::DURATION,
            scramble_hold: Duration::from_millis(1000),
            frame_interval: Duration::from_millis(16),
            title: TITLE.to_string(),
            fit: FitOptions::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = Settings::default();
        assert_eq!(settings.pass_length, 32);
        assert!(settings.include_numbers && settings.include_symbols);
        assert_eq!(settings.scramble_duration, Duration::from_millis(600));
        assert_eq!(settings.request(), GenerationRequest::new(32, true, true));
        assert_eq!(settings.preset_index(), Some(4));
    }

    #[test]
    fn stepping_through_presets() {
        let mut settings = Settings {
            pass_length: 12,
            ..Default::default()
        };
        assert_eq!(settings.step_preset(1), 16);
        assert_eq!(settings.step_preset(-1), 8);
        assert_eq!(settings.step_preset(-5), 8);
        assert_eq!(settings.step_preset(9), 32);

        settings.pass_length = 20;
        assert_eq!(settings.preset_index(), None);
        // nearest preset is 16 (first of the two ties at distance 4)
        assert_eq!(settings.step_preset(1), 24);
    }
}
