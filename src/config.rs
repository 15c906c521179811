use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Categorized keyword lists driving the rule-based analysis.
///
/// Loaded once at startup and never mutated afterwards, so the same config
/// can be shared across concurrent analysis calls without synchronization.
/// Every field has a built-in default, so a partial YAML file only overrides
/// the lists it names.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KeywordConfig {
    /// General spam indicators, checked as exact word tokens.
    pub spam_keywords: Vec<String>,
    /// Urgency words and phrases, checked as substrings of the lowercased
    /// message so multi-word entries like "last chance" can match.
    pub urgency_words: Vec<String>,
    pub money_theft_keywords: Vec<String>,
    pub data_theft_keywords: Vec<String>,
    pub panic_keywords: Vec<String>,
    pub malware_keywords: Vec<String>,
    /// Minimum keyword matches before an intent category qualifies.
    pub intent_match_threshold: usize,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            spam_keywords: to_owned_list(&[
                "free",
                "win",
                "winner",
                "click",
                "offer",
                "urgent",
                "lottery",
                "now",
                "prize",
                "cash",
                "reward",
                "claim",
                "selected",
                "congratulations",
                "exclusive",
                "limited",
                "guaranteed",
                "act",
                "earn",
                "money",
                "bonus",
                "upgrade",
                "membership",
                "discount",
                "cheap",
                "buy",
                "call",
                "text",
                "subscribe",
                "unsubscribe",
                "credit",
                "loan",
            ]),
            urgency_words: to_owned_list(&[
                "urgent",
                "immediately",
                "now",
                "today",
                "expires",
                "limited",
                "hurry",
                "act",
                "fast",
                "quick",
                "instant",
                "deadline",
                "last chance",
                "expiring",
            ]),
            money_theft_keywords: to_owned_list(&[
                "win",
                "winner",
                "prize",
                "cash",
                "money",
                "reward",
                "claim",
                "payment",
                "transfer",
                "deposit",
                "account",
                "loan",
                "credit",
                "debt",
                "fee",
                "pay",
                "bitcoin",
                "cryptocurrency",
                "investment",
                "profit",
                "earn",
            ]),
            data_theft_keywords: to_owned_list(&[
                "verify",
                "confirm",
                "update",
                "security",
                "password",
                "account",
                "login",
                "credentials",
                "personal",
                "information",
                "details",
                "ssn",
                "social security",
                "card number",
                "cvv",
                "pin",
                "identity",
                "verification",
            ]),
            panic_keywords: to_owned_list(&[
                "urgent",
                "immediately",
                "suspend",
                "suspended",
                "blocked",
                "locked",
                "compromised",
                "unauthorized",
                "fraud",
                "fraudulent",
                "alert",
                "warning",
                "expires",
                "expired",
                "deadline",
                "last chance",
                "act now",
                "emergency",
            ]),
            malware_keywords: to_owned_list(&[
                "click",
                "download",
                "install",
                "update",
                "software",
                "antivirus",
                "security update",
                "patch",
                "link",
                "attachment",
                "file",
            ]),
            intent_match_threshold: 2,
        }
    }
}

impl KeywordConfig {
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read keyword config: {}", path.display()))?;
        let config: KeywordConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse keyword config: {}", path.display()))?;
        log::info!(
            "Loaded keyword config from {} ({} spam keywords, {} urgency words)",
            path.display(),
            config.spam_keywords.len(),
            config.urgency_words.len()
        );
        Ok(config)
    }

    pub fn to_yaml(&self) -> anyhow::Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize keyword config")
    }
}

fn to_owned_list(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_lists_are_populated() {
        let config = KeywordConfig::default();
        assert!(!config.spam_keywords.is_empty());
        assert!(!config.urgency_words.is_empty());
        assert!(!config.money_theft_keywords.is_empty());
        assert!(!config.data_theft_keywords.is_empty());
        assert!(!config.panic_keywords.is_empty());
        assert!(!config.malware_keywords.is_empty());
        assert_eq!(config.intent_match_threshold, 2);
    }

    #[test]
    fn partial_yaml_keeps_defaults_for_missing_fields() {
        let yaml = r#"
spam_keywords:
  - "viagra"
  - "casino"
"#;
        let config: KeywordConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.spam_keywords, vec!["viagra", "casino"]);
        // Unlisted fields fall back to the built-in lists
        assert!(config.urgency_words.contains(&"last chance".to_string()));
        assert_eq!(config.intent_match_threshold, 2);
    }

    #[test]
    fn yaml_round_trip() {
        let config = KeywordConfig::default();
        let yaml = config.to_yaml().unwrap();
        let reparsed: KeywordConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(reparsed.spam_keywords, config.spam_keywords);
        assert_eq!(reparsed.panic_keywords, config.panic_keywords);
    }

    #[test]
    fn multi_word_phrases_survive_in_defaults() {
        let config = KeywordConfig::default();
        assert!(config
            .data_theft_keywords
            .contains(&"social security".to_string()));
        assert!(config.panic_keywords.contains(&"act now".to_string()));
    }
}
