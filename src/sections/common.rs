//! Common pattern section - scans for denylisted substrings.

use secrecy::{ExposeSecret, SecretString};
use super::Finding;
use crate::denylist::Denylist;

pub const COMMON_PATTERNS_FINDING: Finding = Finding {
    feedback: "Contains common patterns",
    suggestion: "Avoid common words and patterns",
};

/// Returns every denylist entry found in the password, in list order.
/// An empty result means the section passed.
pub fn common_patterns_section(password: &SecretString, denylist: &Denylist) -> Vec<String> {
    denylist.find_matches(password.expose_secret())
}
