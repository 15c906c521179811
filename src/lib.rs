pub mod analyzer;
pub mod classifier;
pub mod config;
pub mod explanation;
pub mod intent;
pub mod patterns;

pub use analyzer::{SuspicionAnalyzer, SuspicionReport};
pub use classifier::{Classifier, HeuristicClassifier, Prediction};
pub use config::KeywordConfig;
pub use explanation::{ExplanationEngine, ExplanationResult};
pub use intent::{IntentClassifier, IntentDescriptor, Verdict};
pub use patterns::TextPatterns;
