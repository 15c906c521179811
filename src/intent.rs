//! Scammer intent inference.
//!
//! Works backwards from the message content to what the sender is trying to
//! achieve. Each category qualifies on a keyword-overlap threshold; malware
//! delivery additionally requires a link to click. Runs only on spam
//! verdicts.

use crate::config::KeywordConfig;
use crate::patterns::TextPatterns;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Label produced by the external classifier collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Spam,
    Ham,
}

impl FromStr for Verdict {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "spam" => Ok(Verdict::Spam),
            "ham" => Ok(Verdict::Ham),
            other => anyhow::bail!("unknown verdict '{other}', expected 'spam' or 'ham'"),
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Spam => write!(f, "spam"),
            Verdict::Ham => write!(f, "ham"),
        }
    }
}

/// One inferred attacker goal, shaped for direct display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IntentDescriptor {
    pub icon: &'static str,
    pub goal: &'static str,
    pub description: &'static str,
}

/// Fallback when spam carries no recognizable specific intent.
pub const DECEPTIVE_INTENT: IntentDescriptor = IntentDescriptor {
    icon: "🎯",
    goal: "Deceptive Intent",
    description: "Scammer is attempting to deceive or manipulate you",
};

/// Emission priority is fixed: money, data, panic, malware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IntentCategory {
    MoneyTheft,
    DataTheft,
    Panic,
    Malware,
}

impl IntentCategory {
    const ALL: [IntentCategory; 4] = [
        IntentCategory::MoneyTheft,
        IntentCategory::DataTheft,
        IntentCategory::Panic,
        IntentCategory::Malware,
    ];

    fn descriptor(self) -> IntentDescriptor {
        match self {
            IntentCategory::MoneyTheft => IntentDescriptor {
                icon: "💰",
                goal: "Steal Money",
                description: "Scammer wants you to send money or provide payment information",
            },
            IntentCategory::DataTheft => IntentDescriptor {
                icon: "🔐",
                goal: "Steal Personal Data",
                description:
                    "Scammer is trying to harvest your login credentials or personal information",
            },
            IntentCategory::Panic => IntentDescriptor {
                icon: "😱",
                goal: "Create Panic",
                description: "Scammer uses urgency and fear to make you act without thinking",
            },
            IntentCategory::Malware => IntentDescriptor {
                icon: "🦠",
                goal: "Install Malware",
                description: "Scammer wants you to click a link or download malicious software",
            },
        }
    }
}

pub struct IntentClassifier {
    keywords: Arc<KeywordConfig>,
    patterns: Arc<TextPatterns>,
}

impl IntentClassifier {
    pub fn new(keywords: Arc<KeywordConfig>, patterns: Arc<TextPatterns>) -> Self {
        Self { keywords, patterns }
    }

    /// Infer attacker goals for a spam message. Ham short-circuits to an
    /// empty list; spam always yields at least one descriptor.
    pub fn infer(&self, message: &str, verdict: Verdict) -> Vec<IntentDescriptor> {
        if verdict != Verdict::Spam {
            return Vec::new();
        }

        let msg_lower = message.to_lowercase();
        let threshold = self.keywords.intent_match_threshold;
        let mut intents = Vec::new();

        for category in IntentCategory::ALL {
            let hits = substring_hits(&msg_lower, self.keyword_set(category));
            let qualifies = match category {
                // Malware needs something to click on top of the keywords
                IntentCategory::Malware => {
                    hits >= threshold && self.patterns.contains_url(message)
                }
                _ => hits >= threshold,
            };
            if qualifies {
                log::debug!("intent qualified: {:?} ({hits} keyword hits)", category);
                intents.push(category.descriptor());
            }
        }

        if intents.is_empty() {
            intents.push(DECEPTIVE_INTENT);
        }
        intents
    }

    fn keyword_set(&self, category: IntentCategory) -> &[String] {
        match category {
            IntentCategory::MoneyTheft => &self.keywords.money_theft_keywords,
            IntentCategory::DataTheft => &self.keywords.data_theft_keywords,
            IntentCategory::Panic => &self.keywords.panic_keywords,
            IntentCategory::Malware => &self.keywords.malware_keywords,
        }
    }
}

/// Substring matching on purpose: category terms include multi-word phrases
/// like "social security" and "act now".
fn substring_hits(msg_lower: &str, keywords: &[String]) -> usize {
    keywords
        .iter()
        .filter(|word| msg_lower.contains(word.as_str()))
        .count()
}
