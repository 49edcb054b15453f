//! Password generation and strength analysis library
//!
//! This library generates random passwords from configurable character
//! categories or per-position patterns, and scores arbitrary passwords
//! with feedback, entropy and crack-time estimates.
//!
//! # Features
//!
//! - `async` (default): Enables debounced async analysis with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_forge::{analyze, generate, GenerationOptions};
//! use secrecy::ExposeSecret;
//!
//! let options = GenerationOptions { length: 16, ..Default::default() };
//! let password = generate(&options, false);
//! assert_eq!(password.expose_secret().chars().count(), 16);
//!
//! let result = analyze(&password, true);
//! println!("Score: {}", result.score);
//! println!("Strength: {}", result.label().as_str());
//! println!("Crack time: {:?}", result.crack_time);
//! ```

// Internal modules
mod analyzer;
mod charset;
mod denylist;
mod entropy;
mod generator;
mod sections;

// Public API
pub use analyzer::{analyze, analyze_with, StrengthLabel, StrengthResult};
pub use charset::{CharClass, AMBIGUOUS, DIGITS, LOWERCASE, SIMILAR, SYMBOLS, UPPERCASE};
pub use denylist::{Denylist, DenylistError, COMMON_PATTERNS};
pub use entropy::{entropy_bits, CrackTime, GUESSES_PER_SECOND};
pub use generator::{
    build_pool, generate, generate_with_rng, GenerationOptions, LengthRating, PatternToken,
    DEFAULT_LENGTH,
};

#[cfg(feature = "async")]
pub use analyzer::{analyze_tx, ANALYSIS_DEBOUNCE};
