//! Length section - short-password feedback and long-password bonus.

use secrecy::{ExposeSecret, SecretString};
use super::{Finding, SectionReport};

const MIN_LENGTH: usize = 8;
const BONUS_LENGTH: usize = 12;

const TOO_SHORT: Finding = Finding {
    feedback: "Password is too short",
    suggestion: "Use at least 8 characters",
};

/// Checks the password length.
///
/// The bonus and the short-length finding are independent: lengths 8 to 11
/// earn nothing and raise nothing.
pub fn length_section(password: &SecretString) -> SectionReport {
    let len = password.expose_secret().chars().count();
    let mut report = SectionReport::default();

    if len < MIN_LENGTH {
        report.findings.push(TOO_SHORT);
    }
    if len >= BONUS_LENGTH {
        report.points += 1;
    }
    report
}
