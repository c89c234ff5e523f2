//! Entropy estimate for a generated password.

use std::fmt;

/// Password entropy in bits for uniform sampling.
pub fn entropy_bits(length: usize, alphabet_len: usize) -> f64 {
    if alphabet_len == 0 {
        return 0.0;
    }
    length as f64 * (alphabet_len as f64).log2()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strength {
    Weak,
    Fair,
    Strong,
    VeryStrong,
}

impl Strength {
    pub fn from_bits(bits: f64) -> Self {
        match bits as u32 {
            0..=35 => Strength::Weak,
            36..=59 => Strength::Fair,
            60..=127 => Strength::Strong,
            _ => Strength::VeryStrong,
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Strength::Weak => "Weak",
            Strength::Fair => "Fair",
            Strength::Strong => "Strong",
            Strength::VeryStrong => "Very Strong",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bits_scale_with_length() {
        assert_eq!(entropy_bits(8, 0), 0.0);
        assert!((entropy_bits(1, 2) - 1.0).abs() < 1e-12);
        assert!((entropy_bits(10, 64) - 60.0).abs() < 1e-9);
    }

    #[test]
    fn labels() {
        assert_eq!(Strength::from_bits(12.0), Strength::Weak);
        assert_eq!(Strength::from_bits(47.6), Strength::Fair);
        assert_eq!(Strength::from_bits(95.0), Strength::Strong);
        // 32 chars over the full 94-char alphabet.
        assert_eq!(Strength::from_bits(entropy_bits(32, 94)), Strength::VeryStrong);
        assert_eq!(Strength::VeryStrong.to_string(), "Very Strong");
    }
}
