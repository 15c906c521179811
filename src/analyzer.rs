use crate::config::KeywordConfig;
use crate::patterns::{self, TextPatterns};
use std::collections::HashSet;
use std::sync::Arc;

/// CAPS ratio above this triggers the shouting heuristic.
pub const CAPS_RATIO_THRESHOLD: f64 = 0.5;

/// Output of one analysis pass.
///
/// `flagged_terms` is deduplicated and keeps first-insertion order.
/// `reasons` keeps detector emission order; URL, symbol and CAPS detections
/// contribute reasons without a matching keyword entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuspicionReport {
    pub flagged_terms: Vec<String>,
    pub reasons: Vec<String>,
}

/// Rule-based scanner for suspicious keywords and patterns.
pub struct SuspicionAnalyzer {
    keywords: Arc<KeywordConfig>,
    patterns: Arc<TextPatterns>,
}

impl SuspicionAnalyzer {
    pub fn new(keywords: Arc<KeywordConfig>, patterns: Arc<TextPatterns>) -> Self {
        Self { keywords, patterns }
    }

    /// Scan a message against all detectors in fixed order. Deterministic
    /// and side-effect-free; never fails, whatever the input contains.
    pub fn analyze(&self, message: &str) -> SuspicionReport {
        let msg_lower = message.to_lowercase();
        let tokens: HashSet<&str> = self.patterns.tokenize(&msg_lower).into_iter().collect();

        let mut report = SuspicionReport::default();

        // Spam keywords match exact tokens; "lotteries" does not trigger
        // "lottery". List order determines flag order.
        for keyword in &self.keywords.spam_keywords {
            if tokens.contains(keyword.as_str()) && !report.flagged_terms.contains(keyword) {
                log::debug!("spam keyword matched: {keyword}");
                report.flagged_terms.push(keyword.clone());
                report
                    .reasons
                    .push(format!("Contains suspicious keyword: {keyword}"));
            }
        }

        // Urgency words match as substrings so phrases like "last chance"
        // work, at the cost of also matching inside longer words.
        for word in &self.keywords.urgency_words {
            if msg_lower.contains(word.as_str()) && !report.flagged_terms.contains(word) {
                log::debug!("urgency word matched: {word}");
                report.flagged_terms.push(word.clone());
                report.reasons.push(format!("Contains urgency word: {word}"));
            }
        }

        if self.patterns.contains_url(message) {
            report
                .reasons
                .push("Contains a URL - possible phishing link detected".to_string());
            // Synthetic markers so the caller can highlight link fragments
            for marker in ["http", "www"] {
                if !report.flagged_terms.iter().any(|t| t == marker) {
                    report.flagged_terms.push(marker.to_string());
                }
            }
        }

        if self.patterns.has_excessive_symbols(message) {
            report
                .reasons
                .push("Contains excessive symbols ($$, !!, ££) - common in spam".to_string());
        }

        if patterns::uppercase_ratio(message) > CAPS_RATIO_THRESHOLD {
            report
                .reasons
                .push("Message uses excessive CAPS - typical spam behavior".to_string());
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer() -> SuspicionAnalyzer {
        SuspicionAnalyzer::new(
            Arc::new(KeywordConfig::default()),
            Arc::new(TextPatterns::new().unwrap()),
        )
    }

    #[test]
    fn clean_message_yields_nothing() {
        let report = analyzer().analyze("See you at the park on Saturday");
        assert!(report.flagged_terms.is_empty());
        assert!(report.reasons.is_empty());
    }

    #[test]
    fn keyword_matches_are_token_exact() {
        let a = analyzer();
        let report = a.analyze("you could win the lottery");
        assert!(report.flagged_terms.contains(&"win".to_string()));
        assert!(report.flagged_terms.contains(&"lottery".to_string()));

        // A longer word does not trigger the keyword
        let report = a.analyze("several lotteries were winding down");
        assert!(!report.flagged_terms.contains(&"lottery".to_string()));
        assert!(!report.flagged_terms.contains(&"win".to_string()));
    }

    #[test]
    fn urgency_words_match_as_substrings() {
        let a = analyzer();
        let report = a.analyze("please respond urgently");
        assert!(report.flagged_terms.contains(&"urgent".to_string()));

        let report = a.analyze("this is your last chance to register");
        assert!(report.flagged_terms.contains(&"last chance".to_string()));
    }

    #[test]
    fn flagged_terms_are_deduplicated_in_first_seen_order() {
        // "urgent" is both a spam keyword and an urgency word; it must
        // appear once, flagged by the earlier detector
        let report = analyzer().analyze("urgent urgent free offer now");
        let urgent_count = report
            .flagged_terms
            .iter()
            .filter(|t| *t == "urgent")
            .count();
        assert_eq!(urgent_count, 1);

        let mut seen = HashSet::new();
        for term in &report.flagged_terms {
            assert!(seen.insert(term.clone()), "duplicate flagged term: {term}");
        }

        // spam keyword list order: free before urgent before now
        let pos = |t: &str| {
            report
                .flagged_terms
                .iter()
                .position(|x| x == t)
                .unwrap_or(usize::MAX)
        };
        assert!(pos("free") < pos("urgent"));
        assert!(pos("urgent") < pos("now"));
        assert_eq!(report.flagged_terms.len(), report.reasons.len());
    }

    #[test]
    fn url_detection_emits_reason_and_markers() {
        let report = analyzer().analyze("visit www.prize-claim.xyz");
        assert!(report.flagged_terms.contains(&"http".to_string()));
        assert!(report.flagged_terms.contains(&"www".to_string()));
        assert!(report.reasons.iter().any(|r| r.contains("URL")));
    }

    #[test]
    fn excessive_symbols_emit_reason_without_flagged_term() {
        let report = analyzer().analyze("hello!!! anyone there???");
        assert!(report.flagged_terms.is_empty());
        assert_eq!(report.reasons.len(), 1);
        assert!(report.reasons[0].contains("excessive symbols"));
    }

    #[test]
    fn caps_ratio_uses_letters_only() {
        let a = analyzer();
        let report = a.analyze("HELLO THERE 1234567890!!!!");
        assert!(report.reasons.iter().any(|r| r.contains("CAPS")));

        // Mostly lowercase letters, ratio under the threshold
        let report = a.analyze("Hello there friend");
        assert!(!report.reasons.iter().any(|r| r.contains("CAPS")));
    }

    #[test]
    fn handles_symbols_and_non_ascii_without_flagging() {
        let a = analyzer();
        let report = a.analyze("☃☃☃ ñandú über straße 你好");
        assert!(report.flagged_terms.is_empty());

        let report = a.analyze("!£$€@#%&*");
        assert!(report.flagged_terms.is_empty());
        assert!(report.reasons.iter().any(|r| r.contains("excessive symbols")));
    }

    #[test]
    fn analyze_is_idempotent() {
        let a = analyzer();
        let msg = "URGENT!! claim your free prize at www.scam.tk today";
        assert_eq!(a.analyze(msg), a.analyze(msg));
    }
}
