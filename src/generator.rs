//! Password generator - pool-based and pattern-based generation.

use rand::Rng;
use secrecy::SecretString;

use crate::charset::{AMBIGUOUS, CharClass, SIMILAR};

pub const DEFAULT_LENGTH: usize = 12;

/// Options controlling a single generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOptions {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
    /// Strips `i I l L 1 o O 0` from the pool.
    pub exclude_similar: bool,
    /// Strips print-ambiguous punctuation from the pool.
    pub exclude_ambiguous: bool,
    /// Per-position template, honoured only for entitled callers.
    pub custom_pattern: Option<String>,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: true,
            exclude_similar: false,
            exclude_ambiguous: false,
            custom_pattern: None,
        }
    }
}

impl GenerationOptions {
    fn includes(&self, class: CharClass) -> bool {
        match class {
            CharClass::Upper => self.include_uppercase,
            CharClass::Lower => self.include_lowercase,
            CharClass::Digit => self.include_numbers,
            CharClass::Symbol => self.include_symbols,
        }
    }

    /// Returns the pattern if one is set and non-empty.
    fn pattern(&self) -> Option<&str> {
        self.custom_pattern.as_deref().filter(|p| !p.is_empty())
    }
}

/// A single position in a custom pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternToken {
    Class(CharClass),
    Literal(char),
}

impl PatternToken {
    pub fn from_char(c: char) -> Self {
        match c {
            'U' => PatternToken::Class(CharClass::Upper),
            'L' => PatternToken::Class(CharClass::Lower),
            'N' => PatternToken::Class(CharClass::Digit),
            'S' => PatternToken::Class(CharClass::Symbol),
            other => PatternToken::Literal(other),
        }
    }
}

/// Rating shown next to a requested generation length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LengthRating {
    Weak,
    Good,
    Strong,
    VeryStrong,
}

impl LengthRating {
    pub fn for_length(length: usize) -> Self {
        match length {
            0..10 => LengthRating::Weak,
            10..14 => LengthRating::Good,
            14..20 => LengthRating::Strong,
            _ => LengthRating::VeryStrong,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LengthRating::Weak => "Weak",
            LengthRating::Good => "Good",
            LengthRating::Strong => "Strong",
            LengthRating::VeryStrong => "Very Strong",
        }
    }
}

/// Builds the selection pool from the enabled categories, with the
/// similar/ambiguous filters applied.
pub fn build_pool(options: &GenerationOptions) -> Vec<char> {
    let mut pool: Vec<char> = CharClass::ALL
        .into_iter()
        .filter(|&class| options.includes(class))
        .flat_map(|class| class.alphabet().chars())
        .collect();

    if options.exclude_similar {
        pool.retain(|c| !SIMILAR.contains(*c));
    }
    if options.exclude_ambiguous {
        pool.retain(|c| !AMBIGUOUS.contains(*c));
    }
    pool
}

/// Generates a password using the thread-local CSPRNG.
///
/// Never fails: with every category disabled the result is empty.
pub fn generate(options: &GenerationOptions, entitled: bool) -> SecretString {
    generate_with_rng(options, entitled, &mut rand::rng())
}

/// Generates a password drawing from the supplied random source.
///
/// # Arguments
/// * `options` - Categories, filters, length and optional pattern
/// * `entitled` - Whether the caller may use custom patterns
/// * `rng` - Source of randomness
pub fn generate_with_rng<R: Rng>(
    options: &GenerationOptions,
    entitled: bool,
    rng: &mut R,
) -> SecretString {
    let pool = build_pool(options);

    // An empty pool short-circuits pattern mode too.
    if pool.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::debug!("generation skipped: character pool is empty");
        return SecretString::new(String::new().into());
    }

    let password = match options.pattern() {
        Some(pattern) if entitled => {
            #[cfg(feature = "tracing")]
            tracing::debug!("generating from pattern of {} tokens", pattern.chars().count());
            expand_pattern(pattern, rng)
        }
        _ => {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                "generating {} characters from pool of {}",
                options.length,
                pool.len()
            );
            (0..options.length).map(|_| pick(&pool, rng)).collect()
        }
    };

    SecretString::new(password.into())
}

/// Expands a pattern against the unfiltered category alphabets.
fn expand_pattern<R: Rng>(pattern: &str, rng: &mut R) -> String {
    pattern
        .chars()
        .map(|c| match PatternToken::from_char(c) {
            PatternToken::Class(class) => {
                let alphabet = class.alphabet().as_bytes();
                char::from(alphabet[rng.random_range(0..alphabet.len())])
            }
            PatternToken::Literal(literal) => literal,
        })
        .collect()
}

fn pick<R: Rng>(chars: &[char], rng: &mut R) -> char {
    chars[rng.random_range(0..chars.len())]
}
