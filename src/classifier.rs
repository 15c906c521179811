use crate::analyzer::CAPS_RATIO_THRESHOLD;
use crate::config::KeywordConfig;
use crate::intent::Verdict;
use crate::patterns::{self, TextPatterns};
use std::collections::HashSet;
use std::sync::Arc;

/// Output of the classifier collaborator: the predicted label plus the
/// probability mass assigned to it, as a percentage rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub label: Verdict,
    pub confidence: f64,
}

/// Seam between the explanation engine and whatever produces verdicts.
/// The engine only depends on this shape, never on how the answer is
/// computed (statistical model, rule engine, or stub).
pub trait Classifier {
    fn classify(&self, message: &str) -> Prediction;
}

/// Round a probability in [0, 1] to a percentage with two decimals.
pub fn round_percent(probability: f64) -> f64 {
    (probability * 10000.0).round() / 100.0
}

/// Built-in stand-in classifier so the CLI works without an external model.
///
/// Counts the same rule signals the analyzer uses and squashes the raw
/// count into a probability. Three or more signals tip the verdict to spam.
pub struct HeuristicClassifier {
    keywords: Arc<KeywordConfig>,
    patterns: Arc<TextPatterns>,
}

impl HeuristicClassifier {
    pub fn new(keywords: Arc<KeywordConfig>, patterns: Arc<TextPatterns>) -> Self {
        Self { keywords, patterns }
    }

    fn signal_score(&self, message: &str) -> usize {
        let msg_lower = message.to_lowercase();
        let tokens: HashSet<&str> = self.patterns.tokenize(&msg_lower).into_iter().collect();

        let mut score = self
            .keywords
            .spam_keywords
            .iter()
            .filter(|k| tokens.contains(k.as_str()))
            .count();
        score += self
            .keywords
            .urgency_words
            .iter()
            .filter(|w| msg_lower.contains(w.as_str()))
            .count();
        if self.patterns.contains_url(message) {
            score += 2;
        }
        if self.patterns.has_excessive_symbols(message) {
            score += 1;
        }
        if patterns::uppercase_ratio(message) > CAPS_RATIO_THRESHOLD {
            score += 1;
        }
        score
    }
}

impl Classifier for HeuristicClassifier {
    fn classify(&self, message: &str) -> Prediction {
        let score = self.signal_score(message) as f64;
        // score / (score + 3) crosses 0.5 at three signals
        let spam_probability = score / (score + 3.0);
        log::debug!("heuristic score {score}, spam probability {spam_probability:.3}");

        if spam_probability >= 0.5 {
            Prediction {
                label: Verdict::Spam,
                confidence: round_percent(spam_probability),
            }
        } else {
            Prediction {
                label: Verdict::Ham,
                confidence: round_percent(1.0 - spam_probability),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> HeuristicClassifier {
        HeuristicClassifier::new(
            Arc::new(KeywordConfig::default()),
            Arc::new(TextPatterns::new().unwrap()),
        )
    }

    #[test]
    fn obvious_spam_is_labeled_spam() {
        let prediction = classifier().classify("WIN FREE CASH NOW!!! Click www.prize-claim.xyz");
        assert_eq!(prediction.label, Verdict::Spam);
        assert!(prediction.confidence > 50.0);
        assert!(prediction.confidence <= 100.0);
    }

    #[test]
    fn benign_text_is_labeled_ham() {
        let prediction = classifier().classify("Hi, are we still meeting for lunch today?");
        assert_eq!(prediction.label, Verdict::Ham);
        assert!(prediction.confidence > 50.0);
    }

    #[test]
    fn no_signals_means_confident_ham() {
        let prediction = classifier().classify("see you soon");
        assert_eq!(prediction.label, Verdict::Ham);
        assert_eq!(prediction.confidence, 100.0);
    }

    #[test]
    fn confidence_is_rounded_to_two_decimals() {
        assert_eq!(round_percent(0.123456), 12.35);
        assert_eq!(round_percent(1.0), 100.0);
        assert_eq!(round_percent(0.0), 0.0);
        // 1/3 as a probability rounds cleanly
        assert_eq!(round_percent(1.0 / 3.0), 33.33);
    }
}
