//! Password generation.

use rand::Rng;
use tracing::debug;

use super::charset::{self, Alphabet};
use super::{GenerateError, Password};

/// Parameters for one generation. Built fresh on every configuration change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    pub length: usize,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl GenerationRequest {
    pub fn new(length: usize, include_numbers: bool, include_symbols: bool) -> Self {
        Self {
            length,
            include_numbers,
            include_symbols,
        }
    }

    pub fn alphabet(&self) -> Alphabet {
        charset::build(self.include_numbers, self.include_symbols)
    }

    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Password, GenerateError> {
        generate(self.length, &self.alphabet(), rng)
    }
}

/// Draw `length` characters uniformly, with replacement, from `alphabet`.
pub fn generate<R: Rng + ?Sized>(
    length: usize,
    alphabet: &Alphabet,
    rng: &mut R,
) -> Result<Password, GenerateError> {
    if length == 0 {
        return Err(GenerateError::InvalidLength(length));
    }
    if alphabet.is_empty() {
        return Err(GenerateError::EmptyAlphabet);
    }

    let chars = alphabet.chars();
    let pass: String = (0..length)
        .map(|_| chars[rng.gen_range(0..chars.len())])
        .collect();

    debug!(length, alphabet = alphabet.len(), "generated password");
    Ok(Password::from(pass))
}

/// Generate `count` independent passwords for the same request.
pub fn generate_batch<R: Rng + ?Sized>(
    request: &GenerationRequest,
    count: usize,
    rng: &mut R,
) -> Result<Vec<Password>, GenerateError> {
    let alphabet = request.alphabet();
    (0..count)
        .map(|_| generate(request.length, &alphabet, rng))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::charset::CharacterClass;
    use crate::rng::Rand;

    fn lowercase() -> Alphabet {
        Alphabet::from_classes(&[CharacterClass::Lowercase])
    }

    #[test]
    fn exact_length_and_membership() {
        let mut rng = Rand::seeded(7);
        for numbers in [false, true] {
            for symbols in [false, true] {
                for length in [1, 8, 12, 16, 24, 32, 100] {
                    let request = GenerationRequest::new(length, numbers, symbols);
                    let alphabet = request.alphabet();
                    let pass = request.generate(&mut rng).unwrap();
                    assert_eq!(pass.len(), length);
                    assert!(pass.as_str().chars().all(|c| alphabet.contains(c)));
                }
            }
        }
    }

    #[test]
    fn zero_length_is_rejected() {
        let mut rng = Rand::seeded(1);
        let err = generate(0, &lowercase(), &mut rng).unwrap_err();
        assert_eq!(err, GenerateError::InvalidLength(0));
    }

    #[test]
    fn empty_alphabet_is_rejected() {
        let mut rng = Rand::seeded(1);
        let empty = Alphabet::from_classes(&[]);
        let err = generate(4, &empty, &mut rng).unwrap_err();
        assert_eq!(err, GenerateError::EmptyAlphabet);
    }

    #[test]
    fn seeded_source_is_reproducible() {
        let request = GenerationRequest::new(24, true, true);
        let a = request.generate(&mut Rand::seeded(42)).unwrap();
        let b = request.generate(&mut Rand::seeded(42)).unwrap();
        let c = request.generate(&mut Rand::seeded(43)).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn two_symbol_alphabet_is_balanced() {
        let ab = Alphabet::custom("ab");
        let mut rng = Rand::seeded(2024);
        let (mut a, mut total) = (0usize, 0usize);
        for _ in 0..10_000 {
            let pass = generate(8, &ab, &mut rng).unwrap();
            assert!(pass.as_str().chars().all(|c| c == 'a' || c == 'b'));
            a += pass.as_str().chars().filter(|&c| c == 'a').count();
            total += pass.len();
        }
        let ratio = a as f64 / total as f64;
        assert!((ratio - 0.5).abs() < 0.02, "ratio {ratio}");
    }

    #[test]
    fn batch_yields_independent_passwords() {
        let request = GenerationRequest::new(16, true, false);
        let batch = generate_batch(&request, 5, &mut Rand::seeded(9)).unwrap();
        assert_eq!(batch.len(), 5);
        assert!(batch.iter().all(|p| p.len() == 16));
        assert_ne!(batch[0], batch[1]);
    }
}
