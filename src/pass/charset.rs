//! Character set building for password generation.

use std::fmt;

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
// Printable ASCII punctuation, code-point order.
const SYMBOLS: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// A fixed, ordered group of characters that can contribute to an alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Numbers,
    Symbols,
}

impl CharacterClass {
    /// All classes in alphabet order.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Numbers,
        CharacterClass::Symbols,
    ];

    pub fn chars(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Numbers => DIGITS,
            CharacterClass::Symbols => SYMBOLS,
        }
    }

    /// Letters are always part of the alphabet; only numbers and symbols are
    /// caller-controlled.
    pub fn is_toggleable(self) -> bool {
        matches!(self, CharacterClass::Numbers | CharacterClass::Symbols)
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CharacterClass::Lowercase => "lowercase",
            CharacterClass::Uppercase => "uppercase",
            CharacterClass::Numbers => "numbers",
            CharacterClass::Symbols => "symbols",
        };
        f.write_str(name)
    }
}

/// The pool of characters eligible for sampling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
    classes: Vec<CharacterClass>,
}

impl Alphabet {
    /// Concatenate the given classes in the order supplied.
    pub fn from_classes(classes: &[CharacterClass]) -> Self {
        let mut chars = Vec::new();
        for class in classes {
            chars.extend(class.chars().chars());
        }
        Self {
            chars,
            classes: classes.to_vec(),
        }
    }

    /// An alphabet outside the fixed classes (tests, custom pools).
    pub fn custom(chars: &str) -> Self {
        Self {
            chars: chars.chars().collect(),
            classes: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn classes(&self) -> &[CharacterClass] {
        &self.classes
    }

    pub fn as_string(&self) -> String {
        self.chars.iter().collect()
    }
}

/// Build the sampling alphabet. Letters are always present, so the result
/// holds at least 52 characters.
pub fn build(include_numbers: bool, include_symbols: bool) -> Alphabet {
    let classes: Vec<CharacterClass> = CharacterClass::ALL
        .into_iter()
        .filter(|class| match class {
            CharacterClass::Numbers => include_numbers,
            CharacterClass::Symbols => include_symbols,
            _ => true,
        })
        .collect();

    Alphabet::from_classes(&classes)
}

/// Alphabet size without building it (for entropy display).
pub fn size(include_numbers: bool, include_symbols: bool) -> usize {
    let mut size = LOWERCASE.len() + UPPERCASE.len();
    if include_numbers {
        size += DIGITS.len();
    }
    if include_symbols {
        size += SYMBOLS.len();
    }
    size
}
