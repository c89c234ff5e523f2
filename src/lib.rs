//! Password generator core.
//!
//! Builds the sampling alphabet, draws passwords from it, drives the scramble
//! reveal animation, and sizes a title string to fill its container. The
//! binary in `main.rs` is the presentational shell around these pieces.

pub mod clipboard;
pub mod fit;
pub mod pass;
pub mod rng;
pub mod scramble;
pub mod session;
pub mod settings;

pub use pass::{Alphabet, GenerateError, GenerationRequest, Password};
pub use rng::Rand;
pub use scramble::{Frame, Phase, ScrambleAnimator};
pub use session::Session;
pub use settings::Settings;
