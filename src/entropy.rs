//! Entropy estimate and crack-time banding for extended analysis.

use std::collections::HashSet;
use std::fmt;

/// Guesses per second assumed by the crack-time model.
pub const GUESSES_PER_SECOND: f64 = 1_000_000.0;

const MINUTE: f64 = 60.0;
const HOUR: f64 = 3_600.0;
const DAY: f64 = 86_400.0;
const YEAR: f64 = 31_536_000.0;

/// Estimates entropy as `n * log2(k)` bits, where `n` is the password length
/// and `k` the number of distinct characters. Empty input yields `0.0`.
pub fn entropy_bits(password: &str) -> f64 {
    let distinct: HashSet<char> = password.chars().collect();
    if distinct.is_empty() {
        return 0.0;
    }
    let length = password.chars().count() as f64;
    length * (distinct.len() as f64).log2()
}

/// Time needed to exhaust the estimated search space, in coarse bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CrackTime {
    LessThanAMinute,
    LessThanAnHour,
    LessThanADay,
    LessThanAYear,
    Centuries,
}

impl CrackTime {
    /// Bands `2^bits / GUESSES_PER_SECOND` seconds. The first threshold the
    /// time falls strictly below wins.
    pub fn from_entropy(bits: f64) -> Self {
        let seconds = bits.exp2() / GUESSES_PER_SECOND;
        if seconds.is_nan() {
            return CrackTime::Centuries;
        }
        if seconds < MINUTE {
            CrackTime::LessThanAMinute
        } else if seconds < HOUR {
            CrackTime::LessThanAnHour
        } else if seconds < DAY {
            CrackTime::LessThanADay
        } else if seconds < YEAR {
            CrackTime::LessThanAYear
        } else {
            CrackTime::Centuries
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CrackTime::LessThanAMinute => "less than a minute",
            CrackTime::LessThanAnHour => "less than an hour",
            CrackTime::LessThanADay => "less than a day",
            CrackTime::LessThanAYear => "less than a year",
            CrackTime::Centuries => "centuries",
        }
    }
}

impl fmt::Display for CrackTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entropy_empty_is_zero() {
        assert_eq!(entropy_bits(""), 0.0);
    }

    #[test]
    fn test_entropy_single_repeated_char_is_zero() {
        assert_eq!(entropy_bits("aaaaaaaa"), 0.0);
    }

    #[test]
    fn test_entropy_formula() {
        // 8 chars, 4 distinct: 8 * log2(4)
        assert_eq!(entropy_bits("abcdabcd"), 16.0);
        // 12 chars, 4 distinct
        assert_eq!(entropy_bits("Ab3$Ab3$Ab3$"), 24.0);
    }

    #[test]
    fn test_entropy_permutation_invariant() {
        let a = entropy_bits("Passw0rd!");
        for permuted in ["!dr0wssaP", "sPs!a0wrd", "0!Pdrswas"] {
            assert_eq!(entropy_bits(permuted), a);
        }
    }

    #[test]
    fn test_entropy_large_input_is_finite() {
        let long: String = "abcdefghij".repeat(1_000);
        let bits = entropy_bits(&long);
        assert!(bits.is_finite());
        assert_eq!(CrackTime::from_entropy(bits), CrackTime::Centuries);
    }

    #[test]
    fn test_crack_time_bands() {
        assert_eq!(CrackTime::from_entropy(0.0), CrackTime::LessThanAMinute);
        assert_eq!(CrackTime::from_entropy(24.0), CrackTime::LessThanAMinute);
        assert_eq!(CrackTime::from_entropy(26.0), CrackTime::LessThanAnHour);
        assert_eq!(CrackTime::from_entropy(32.0), CrackTime::LessThanADay);
        assert_eq!(CrackTime::from_entropy(40.0), CrackTime::LessThanAYear);
        assert_eq!(CrackTime::from_entropy(45.0), CrackTime::Centuries);
        assert_eq!(CrackTime::from_entropy(f64::INFINITY), CrackTime::Centuries);
    }

    #[test]
    fn test_crack_time_monotonic() {
        let mut previous = CrackTime::LessThanAMinute;
        for tenth in 0..1_000 {
            let band = CrackTime::from_entropy(tenth as f64 / 10.0);
            assert!(band >= previous, "band regressed at {tenth}");
            previous = band;
        }
    }

    #[test]
    fn test_crack_time_labels() {
        assert_eq!(CrackTime::Centuries.to_string(), "centuries");
        assert_eq!(CrackTime::LessThanAnHour.label(), "less than an hour");
    }
}
