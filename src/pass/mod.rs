//! Password generation.

pub mod charset;
mod generate;
mod password;
pub mod strength;

use std::fmt;

pub use charset::{Alphabet, CharacterClass};
pub use generate::{GenerationRequest, generate, generate_batch};
pub use password::Password;
pub use strength::{Strength, entropy_bits};

/// Why a password could not be produced. Both cases are recoverable: callers
/// keep the previous password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateError {
    InvalidLength(usize),
    EmptyAlphabet,
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::InvalidLength(n) => {
                write!(f, "Invalid password length: {} (must be at least 1)", n)
            }
            GenerateError::EmptyAlphabet => write!(f, "Character set is empty"),
        }
    }
}

impl std::error::Error for GenerateError {}
