//! Strength analysis sections
//!
//! Each section inspects one aspect of a password and reports the points it
//! earns together with any deficiencies found.

mod common;
mod length;
mod variety;

pub use common::{COMMON_PATTERNS_FINDING, common_patterns_section};
pub use length::length_section;
pub use variety::character_variety_section;

/// A deficiency paired with its remediation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Finding {
    pub feedback: &'static str,
    pub suggestion: &'static str,
}

/// Outcome of a scoring section.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SectionReport {
    pub points: u8,
    pub findings: Vec<Finding>,
}
