//! Character variety section - checks for uppercase, lowercase, numbers, special chars.

use secrecy::{ExposeSecret, SecretString};
use super::{Finding, SectionReport};
use crate::charset::CharClass;

fn missing(class: CharClass) -> Finding {
    match class {
        CharClass::Upper => Finding {
            feedback: "No uppercase letters",
            suggestion: "Add uppercase letters",
        },
        CharClass::Lower => Finding {
            feedback: "No lowercase letters",
            suggestion: "Add lowercase letters",
        },
        CharClass::Digit => Finding {
            feedback: "No numbers",
            suggestion: "Add numbers",
        },
        CharClass::Symbol => Finding {
            feedback: "No special characters",
            suggestion: "Add special characters",
        },
    }
}

/// Awards one point per character class present and one finding per class
/// absent, in the order uppercase, lowercase, numbers, special characters.
pub fn character_variety_section(password: &SecretString) -> SectionReport {
    let pwd = password.expose_secret();
    let mut report = SectionReport::default();

    for class in CharClass::ALL {
        if pwd.chars().any(|c| CharClass::classify(c) == class) {
            report.points += 1;
        } else {
            report.findings.push(missing(class));
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(pwd: &str) -> SectionReport {
        character_variety_section(&SecretString::new(pwd.to_string().into()))
    }

    fn feedback(report: &SectionReport) -> Vec<&'static str> {
        report.findings.iter().map(|f| f.feedback).collect()
    }

    #[test]
    fn test_variety_section_missing_uppercase() {
        let report = section("lowercase123!");
        assert_eq!(report.points, 3);
        assert_eq!(feedback(&report), vec!["No uppercase letters"]);
    }

    #[test]
    fn test_variety_section_missing_lowercase() {
        let report = section("UPPERCASE123!");
        assert_eq!(feedback(&report), vec!["No lowercase letters"]);
    }

    #[test]
    fn test_variety_section_missing_numbers() {
        let report = section("NoNumbers!");
        assert_eq!(feedback(&report), vec!["No numbers"]);
    }

    #[test]
    fn test_variety_section_missing_special() {
        let report = section("NoSpecial123");
        assert_eq!(feedback(&report), vec!["No special characters"]);
        assert_eq!(report.findings[0].suggestion, "Add special characters");
    }

    #[test]
    fn test_variety_section_all_categories() {
        let report = section("HasAll123!@#");
        assert_eq!(report.points, 4);
        assert!(report.findings.is_empty());
    }

    #[test]
    fn test_variety_section_empty() {
        let report = section("");
        assert_eq!(report.points, 0);
        assert_eq!(
            feedback(&report),
            vec![
                "No uppercase letters",
                "No lowercase letters",
                "No numbers",
                "No special characters",
            ]
        );
    }

    #[test]
    fn test_variety_section_accented_letter_is_special() {
        let report = section("Caf\u{e9}1");
        assert_eq!(report.points, 4);
    }
}
