//! Scramble reveal animation.
//!
//! A run starts when a new target is committed. The host render loop calls
//! [`ScrambleAnimator::tick`] once per frame; each tick reveals a growing
//! prefix of the target and re-rolls every pending position from [`GLYPHS`].
//! Once the fixed duration has elapsed the display is forced to the exact
//! target and the animator goes back to [`Phase::Idle`].
//!
//! There is no timer inside the animator. Starting a new run replaces the old
//! one synchronously, so a stale run can never write the display again.

mod reveal;

use std::time::{Duration, Instant};

use rand::Rng;
use tracing::{debug, trace};
use zeroize::Zeroizing;

pub use reveal::reveal_count;

/// Length of one run, independent of the target length.
pub const DURATION: Duration = Duration::from_millis(600);

/// Cosmetic glyphs shown in pending positions.
pub const GLYPHS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Display equals the committed target.
    Idle,
    /// `started` is stamped by the first tick after [`ScrambleAnimator::start`].
    Running { started: Option<Instant> },
}

/// Borrowed view of what the renderer should draw this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame<'a> {
    pub text: &'a str,
    pub revealed: usize,
    pub running: bool,
}

pub struct ScrambleAnimator<R> {
    rng: R,
    duration: Duration,
    target: Zeroizing<String>,
    target_len: usize,
    display: Zeroizing<String>,
    phase: Phase,
    revealed: usize,
    run_id: u64,
}

impl<R: Rng> ScrambleAnimator<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            duration: DURATION,
            target: Zeroizing::new(String::new()),
            target_len: 0,
            display: Zeroizing::new(String::new()),
            phase: Phase::Idle,
            revealed: 0,
            run_id: 0,
        }
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Commit `target` and begin a new run, abandoning any run in flight.
    /// Returns the id of the new run.
    pub fn start(&mut self, target: &str) -> u64 {
        if self.is_running() {
            debug!(run = self.run_id, revealed = self.revealed, "scramble run abandoned");
        }

        self.run_id += 1;
        self.target = Zeroizing::new(target.to_owned());
        self.target_len = target.chars().count();
        self.revealed = 0;

        if self.target_len == 0 {
            self.settle();
            return self.run_id;
        }

        self.phase = Phase::Running { started: None };
        self.scramble_from(0);
        debug!(run = self.run_id, len = self.target_len, "scramble run started");
        self.run_id
    }

    /// Advance the animation to `now` and return the frame to draw.
    pub fn tick(&mut self, now: Instant) -> Frame<'_> {
        let started = match self.phase {
            Phase::Idle => return self.frame(),
            Phase::Running { started: Some(started) } => started,
            Phase::Running { started: None } => {
                self.phase = Phase::Running { started: Some(now) };
                now
            }
        };

        let elapsed = now.saturating_duration_since(started);
        if elapsed >= self.duration {
            self.settle();
            debug!(run = self.run_id, "scramble run converged");
            return self.frame();
        }

        // Clamp against earlier ticks so a late timestamp cannot hide letters.
        let revealed = reveal_count(elapsed, self.duration, self.target_len).max(self.revealed);
        self.revealed = revealed;
        self.scramble_from(revealed);
        trace!(run = self.run_id, revealed, elapsed_ms = elapsed.as_millis() as u64, "tick");

        self.frame()
    }

    /// Switch the trigger off: show the exact target now.
    pub fn cancel(&mut self) {
        if self.is_running() {
            debug!(run = self.run_id, "scramble run cancelled");
        }
        self.settle();
    }

    pub fn frame(&self) -> Frame<'_> {
        Frame {
            text: &self.display,
            revealed: self.revealed,
            running: self.is_running(),
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn revealed(&self) -> usize {
        self.revealed
    }

    pub fn run_id(&self) -> u64 {
        self.run_id
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Running { .. })
    }

    fn settle(&mut self) {
        self.phase = Phase::Idle;
        self.revealed = self.target_len;
        self.display = Zeroizing::new(self.target.as_str().to_owned());
    }

    fn scramble_from(&mut self, revealed: usize) {
        let mut next = Zeroizing::new(String::with_capacity(self.target.len()));
        for (i, c) in self.target.chars().enumerate() {
            if i < revealed {
                next.push(c);
            } else {
                next.push(GLYPHS[self.rng.gen_range(0..GLYPHS.len())] as char);
            }
        }
        self.display = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::Rand;

    fn animator() -> ScrambleAnimator<Rand> {
        ScrambleAnimator::new(Rand::seeded(17))
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn is_glyph(c: char) -> bool {
        c.is_ascii() && GLYPHS.contains(&(c as u8))
    }

    #[test]
    fn starts_idle_and_empty() {
        let mut anim = animator();
        assert_eq!(anim.phase(), Phase::Idle);
        assert_eq!(anim.display(), "");
        let frame = anim.tick(Instant::now());
        assert_eq!(frame.text, "");
        assert!(!frame.running);
        assert_eq!(anim.run_id(), 0);
    }

    #[test]
    fn hello_at_half_time() {
        let mut anim = animator();
        let t0 = Instant::now();
        anim.start("HELLO");

        let first = anim.tick(t0);
        assert_eq!(first.revealed, 0);
        assert_eq!(first.text.chars().count(), 5);
        assert!(first.text.chars().all(is_glyph));

        let mid = anim.tick(t0 + ms(300));
        assert_eq!(mid.revealed, 2);
        assert!(mid.running);
        assert!(mid.text.starts_with("HE"));
        assert_eq!(mid.text.chars().count(), 5);
        assert!(mid.text.chars().skip(2).all(is_glyph));

        let done = anim.tick(t0 + ms(600));
        assert_eq!(done.text, "HELLO");
        assert_eq!(done.revealed, 5);
        assert!(!done.running);
        assert_eq!(anim.phase(), Phase::Idle);
    }

    #[test]
    fn clock_starts_at_first_tick() {
        let mut anim = animator();
        let t0 = Instant::now();
        anim.start("abcdef");
        assert_eq!(anim.phase(), Phase::Running { started: None });

        let late = t0 + Duration::from_secs(5);
        assert_eq!(anim.tick(late).revealed, 0);
        assert!(anim.is_running());
        assert_eq!(anim.tick(late + ms(599)).revealed, 5);
        assert_eq!(anim.tick(late + ms(600)).text, "abcdef");
    }

    #[test]
    fn display_is_scrambled_before_first_tick() {
        let mut anim = animator();
        anim.start("~~~~~~~~");
        assert_eq!(anim.display().chars().count(), 8);
        assert!(!anim.display().contains('~'));
    }

    #[test]
    fn reveal_is_monotonic_and_prefix_is_stable() {
        let target = "Tr0ub4dor&3-correct-horse";
        let mut anim = animator();
        let t0 = Instant::now();
        anim.start(target);

        let mut last = 0;
        for step in 0..=40u64 {
            let frame = anim.tick(t0 + ms(step * 16));
            assert!(frame.revealed >= last);
            let prefix: String = target.chars().take(frame.revealed).collect();
            assert!(frame.text.starts_with(&prefix));
            assert_eq!(frame.text.chars().count(), target.chars().count());
            last = frame.revealed;
        }
        assert_eq!(anim.display(), target);
    }

    #[test]
    fn stale_timestamp_does_not_hide_letters() {
        let mut anim = animator();
        let t0 = Instant::now();
        anim.start("0123456789");
        anim.tick(t0);
        assert_eq!(anim.tick(t0 + ms(480)).revealed, 8);
        assert_eq!(anim.tick(t0 + ms(120)).revealed, 8);
    }

    #[test]
    fn restart_abandons_previous_run() {
        let mut anim = animator();
        let t0 = Instant::now();
        let first = anim.start("~~~~~~~~~~~~");
        anim.tick(t0);
        anim.tick(t0 + ms(400));
        assert!(anim.display().starts_with("~~~~~~~~"));

        let second = anim.start("zzzzzzzzzzzz");
        assert_eq!(second, first + 1);
        assert!(!anim.display().contains('~'));

        let t1 = t0 + ms(410);
        for step in 0..=40u64 {
            let frame = anim.tick(t1 + ms(step * 16));
            assert!(!frame.text.contains('~'));
        }
        assert_eq!(anim.display(), "zzzzzzzzzzzz");
        assert_eq!(anim.target(), "zzzzzzzzzzzz");
    }

    #[test]
    fn new_run_restarts_clock() {
        let mut anim = animator();
        let t0 = Instant::now();
        anim.start("aaaaaa");
        anim.tick(t0);
        anim.tick(t0 + ms(500));

        anim.start("bbbbbb");
        // 100 ms after the old run would have finished, the new one is at zero.
        assert_eq!(anim.tick(t0 + ms(700)).revealed, 0);
        assert_eq!(anim.tick(t0 + ms(1000)).revealed, 3);
    }

    #[test]
    fn cancel_shows_exact_target() {
        let mut anim = animator();
        let t0 = Instant::now();
        anim.start("s3cr3t!");
        anim.tick(t0);
        anim.tick(t0 + ms(100));
        anim.cancel();
        assert_eq!(anim.display(), "s3cr3t!");
        assert_eq!(anim.phase(), Phase::Idle);
        assert_eq!(anim.tick(t0 + ms(200)).text, "s3cr3t!");
    }

    #[test]
    fn empty_target_is_immediately_terminal() {
        let mut anim = animator();
        anim.start("abc");
        anim.start("");
        assert_eq!(anim.phase(), Phase::Idle);
        assert_eq!(anim.display(), "");
        assert_eq!(anim.tick(Instant::now()).text, "");
    }

    #[test]
    fn duration_ignores_length() {
        let long: String = "x".repeat(1000);
        let mut anim = animator();
        let t0 = Instant::now();
        anim.start(&long);
        anim.tick(t0);
        assert!(anim.tick(t0 + ms(599)).running);
        assert_eq!(anim.tick(t0 + ms(600)).text, long);
    }

    #[test]
    fn zero_duration_converges_on_first_tick() {
        let mut anim = ScrambleAnimator::new(Rand::seeded(1)).with_duration(Duration::ZERO);
        anim.start("quick");
        assert_eq!(anim.tick(Instant::now()).text, "quick");
        assert_eq!(anim.duration(), Duration::ZERO);
    }
}
