//! Character set tables shared by the generator and the analyzer.

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Glyphs easily mistaken for one another (`1`/`l`/`I`, `0`/`O`).
pub const SIMILAR: &str = "iIlL1oO0";

/// Punctuation easily confused in print.
pub const AMBIGUOUS: &str = "{}[]()/\\'\"`~,;:.<>";

/// The four character categories a password is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Upper,
    Lower,
    Digit,
    Symbol,
}

impl CharClass {
    /// Fixed concatenation order used when building a generation pool.
    pub const ALL: [CharClass; 4] = [
        CharClass::Upper,
        CharClass::Lower,
        CharClass::Digit,
        CharClass::Symbol,
    ];

    pub fn alphabet(self) -> &'static str {
        match self {
            CharClass::Upper => UPPERCASE,
            CharClass::Lower => LOWERCASE,
            CharClass::Digit => DIGITS,
            CharClass::Symbol => SYMBOLS,
        }
    }

    /// Classifies a character with ASCII rules: anything that is not
    /// `[A-Za-z0-9]` counts as a symbol, including non-ASCII letters.
    pub fn classify(c: char) -> CharClass {
        if c.is_ascii_uppercase() {
            CharClass::Upper
        } else if c.is_ascii_lowercase() {
            CharClass::Lower
        } else if c.is_ascii_digit() {
            CharClass::Digit
        } else {
            CharClass::Symbol
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabets_are_disjoint() {
        for class in CharClass::ALL {
            for c in class.alphabet().chars() {
                assert_eq!(CharClass::classify(c), class, "{c:?} misclassified");
            }
        }
    }

    #[test]
    fn test_alphabets_are_ascii() {
        for class in CharClass::ALL {
            assert!(class.alphabet().is_ascii(), "{class:?} alphabet is not ASCII");
        }
    }

    #[test]
    fn test_classify_non_ascii_is_symbol() {
        assert_eq!(CharClass::classify('é'), CharClass::Symbol);
        assert_eq!(CharClass::classify(' '), CharClass::Symbol);
    }

    #[test]
    fn test_symbol_table_size() {
        assert_eq!(SYMBOLS.chars().count(), 26);
        assert_eq!(SIMILAR.chars().count(), 8);
        assert_eq!(AMBIGUOUS.chars().count(), 18);
    }
}
