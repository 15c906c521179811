//! Explanation policy.
//!
//! Top-level reconciliation of the rule-based signals with the statistical
//! verdict supplied by the classifier collaborator. The engine never
//! second-guesses the verdict; it annotates disagreement instead.

use crate::analyzer::{SuspicionAnalyzer, SuspicionReport};
use crate::config::KeywordConfig;
use crate::intent::{IntentClassifier, IntentDescriptor, Verdict};
use crate::patterns::TextPatterns;
use serde::Serialize;
use std::sync::Arc;

/// Prepended when the model says ham but the rules found something.
pub const HAM_DISAGREEMENT_NOTE: &str =
    "Model predicts ham, but suspicious patterns were found:";

/// Appended when the model says spam but no rule fired.
pub const SPAM_FALLBACK_NOTE: &str =
    "Model detected spam patterns based on learned features";

/// Final response payload handed to the serving layer.
#[derive(Debug, Clone, Serialize)]
pub struct ExplanationResult {
    pub prediction: Verdict,
    pub confidence: f64,
    pub suspicious_words: Vec<String>,
    pub explanation: Vec<String>,
    pub scammer_intent: Vec<IntentDescriptor>,
}

pub struct ExplanationEngine {
    analyzer: SuspicionAnalyzer,
    intents: IntentClassifier,
}

impl ExplanationEngine {
    pub fn new(config: KeywordConfig) -> anyhow::Result<Self> {
        let keywords = Arc::new(config);
        let patterns = Arc::new(TextPatterns::new()?);
        Ok(Self::with_shared(keywords, patterns))
    }

    /// Build from already-shared keyword/pattern handles, e.g. when a
    /// classifier collaborator reuses the same data.
    pub fn with_shared(keywords: Arc<KeywordConfig>, patterns: Arc<TextPatterns>) -> Self {
        Self {
            analyzer: SuspicionAnalyzer::new(Arc::clone(&keywords), Arc::clone(&patterns)),
            intents: IntentClassifier::new(keywords, patterns),
        }
    }

    /// Produce the full explanation for an externally-classified message.
    /// Confidence passes through unchanged. Pure computation; cannot fail.
    pub fn explain(&self, message: &str, verdict: Verdict, confidence: f64) -> ExplanationResult {
        let SuspicionReport {
            flagged_terms,
            mut reasons,
        } = self.analyzer.analyze(message);
        let scammer_intent = self.intents.infer(message, verdict);

        // Rule A: surface rule/model disagreement instead of hiding it
        if verdict == Verdict::Ham && !flagged_terms.is_empty() {
            reasons.insert(0, HAM_DISAGREEMENT_NOTE.to_string());
        }

        // Rule B: a spam verdict never ships with zero explanation
        if verdict == Verdict::Spam && reasons.is_empty() {
            reasons.push(SPAM_FALLBACK_NOTE.to_string());
        }

        ExplanationResult {
            prediction: verdict,
            confidence,
            suspicious_words: flagged_terms,
            explanation: reasons,
            scammer_intent,
        }
    }
}
