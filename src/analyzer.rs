//! Password strength analyzer - main scoring logic.

use std::sync::LazyLock;

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::denylist::Denylist;
use crate::entropy::{CrackTime, entropy_bits};
use crate::sections::{
    COMMON_PATTERNS_FINDING, Finding, SectionReport, character_variety_section,
    common_patterns_section, length_section,
};

/// Delay before an async analysis runs, letting rapid edits supersede it.
#[cfg(feature = "async")]
pub const ANALYSIS_DEBOUNCE: Duration = Duration::from_millis(300);

static BUILTIN_DENYLIST: LazyLock<Denylist> = LazyLock::new(Denylist::default);

/// Outcome of a strength analysis.
///
/// `feedback` and `suggestions` have one entry per deficiency, in the same
/// order. The extended fields are `Some` only for entitled callers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StrengthResult {
    /// 0 to 5.
    pub score: u8,
    pub feedback: Vec<String>,
    pub suggestions: Vec<String>,
    /// Rounded entropy estimate in bits.
    pub entropy: Option<u32>,
    pub crack_time: Option<CrackTime>,
    pub matched_weak_patterns: Option<Vec<String>>,
}

impl StrengthResult {
    fn record(&mut self, finding: Finding) {
        self.feedback.push(finding.feedback.to_string());
        self.suggestions.push(finding.suggestion.to_string());
    }

    pub fn label(&self) -> StrengthLabel {
        StrengthLabel::from_score(self.score)
    }

    pub fn is_strong(&self) -> bool {
        self.score >= 4
    }
}

/// Human-readable strength of a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StrengthLabel {
    VeryWeak,
    Weak,
    Strong,
    VeryStrong,
}

impl StrengthLabel {
    pub fn from_score(score: u8) -> Self {
        match score {
            0 | 1 => StrengthLabel::VeryWeak,
            2 | 3 => StrengthLabel::Weak,
            4 => StrengthLabel::Strong,
            _ => StrengthLabel::VeryStrong,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StrengthLabel::VeryWeak => "Very Weak",
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Strong => "Strong",
            StrengthLabel::VeryStrong => "Very Strong",
        }
    }
}

/// Analyzes password strength against the built-in denylist.
///
/// # Arguments
/// * `password` - The password to analyze
/// * `entitled` - Whether to include entropy, crack time and matched patterns
pub fn analyze(password: &SecretString, entitled: bool) -> StrengthResult {
    analyze_with(password, entitled, &BUILTIN_DENYLIST)
}

/// Analyzes password strength against a caller-supplied denylist.
///
/// Never fails: the empty string scores 0 with every deficiency reported.
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
pub fn analyze_with(
    password: &SecretString,
    entitled: bool,
    denylist: &Denylist,
) -> StrengthResult {
    let mut result = StrengthResult::default();

    // Orchestrator: execute scoring sections in sequence
    let sections: [(&str, fn(&SecretString) -> SectionReport); 2] = [
        ("length", length_section),
        ("variety", character_variety_section),
    ];

    for (section_name, section_fn) in sections {
        let report = section_fn(password);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "section {}: +{} points, {} findings",
            section_name,
            report.points,
            report.findings.len()
        );

        result.score += report.points;
        for finding in report.findings {
            result.record(finding);
        }
    }

    let matches = common_patterns_section(password, denylist);
    if !matches.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::debug!("section common: {} denylist matches", matches.len());

        result.record(COMMON_PATTERNS_FINDING);
        result.score = result.score.saturating_sub(1);
    }

    if entitled {
        let bits = entropy_bits(password.expose_secret());
        result.entropy = Some(bits.round() as u32);
        result.crack_time = Some(CrackTime::from_entropy(bits));
        result.matched_weak_patterns = Some(matches);
    }

    result
}

/// Async version that sends the analysis result via channel.
///
/// Waits [`ANALYSIS_DEBOUNCE`] first; if `token` is cancelled by then the
/// analysis is skipped and nothing is sent.
#[cfg(feature = "async")]
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
pub async fn analyze_tx(
    password: &SecretString,
    entitled: bool,
    denylist: &Denylist,
    token: CancellationToken,
    tx: mpsc::Sender<StrengthResult>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("analysis is about to start...");

    tokio::time::sleep(ANALYSIS_DEBOUNCE).await;
    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("analysis superseded before it ran");
        return;
    }

    let result = analyze_with(password, entitled, denylist);

    if let Err(e) = tx.send(result).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send strength analysis result: {}", e);
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;

    fn secret(pwd: &str) -> SecretString {
        SecretString::new(pwd.to_string().into())
    }

    #[tokio::test(start_paused = true)]
    async fn test_analyze_tx_sends_result() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        analyze_tx(&secret("TestPass123!"), true, &Denylist::default(), token, tx).await;

        let result = rx.recv().await.expect("Should receive result");
        assert_eq!(result.score, 5);
        assert!(result.entropy.is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_analyze_tx_cancelled() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();

        analyze_tx(&secret("TestPass123!"), false, &Denylist::default(), token, tx).await;

        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_analyze_tx_receiver_dropped() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);

        // Must not panic
        analyze_tx(&secret("abc"), false, &Denylist::default(), CancellationToken::new(), tx).await;
    }
}
