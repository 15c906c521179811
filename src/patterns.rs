use regex::Regex;

/// Compiled-once text patterns shared by the analyzer and intent classifier.
///
/// All patterns are compiled at engine construction and held immutably, so
/// matching is reentrant across concurrent calls.
pub struct TextPatterns {
    url: Regex,
    excessive_symbols: Regex,
    word_token: Regex,
}

impl TextPatterns {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            // http(s) links, www links, or bare domains on TLDs commonly
            // seen in phishing campaigns
            url: Regex::new(
                r"(?i)(https?://\S+|www\.\S+|\b\w+\.(com|net|org|xyz|info|biz|ru|tk|click)\S*)",
            )?,
            excessive_symbols: Regex::new(r"[!£$€@#%&*]{2,}")?,
            word_token: Regex::new(r"\b\w+\b")?,
        })
    }

    /// Checked against the raw message, not the lowercased copy.
    pub fn contains_url(&self, text: &str) -> bool {
        self.url.is_match(text)
    }

    /// Two or more consecutive symbols like "$$" or "!!".
    pub fn has_excessive_symbols(&self, text: &str) -> bool {
        self.excessive_symbols.is_match(text)
    }

    pub fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.word_token.find_iter(text).map(|m| m.as_str()).collect()
    }
}

/// Ratio of uppercase letters among alphabetic characters only.
/// Digits, punctuation and whitespace count in neither numerator nor
/// denominator. Returns 0.0 for text with no letters.
pub fn uppercase_ratio(text: &str) -> f64 {
    let mut letters = 0usize;
    let mut upper = 0usize;
    for c in text.chars() {
        if c.is_ascii_alphabetic() {
            letters += 1;
            if c.is_ascii_uppercase() {
                upper += 1;
            }
        }
    }
    if letters == 0 {
        return 0.0;
    }
    upper as f64 / letters as f64
}
