use spamsight::classifier::{Classifier, HeuristicClassifier};
use spamsight::config::KeywordConfig;
use spamsight::explanation::ExplanationEngine;
use spamsight::patterns::TextPatterns;
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("Testing the explanation engine against known samples...");

    let keywords = Arc::new(KeywordConfig::default());
    let patterns = Arc::new(TextPatterns::new()?);
    let engine = ExplanationEngine::with_shared(Arc::clone(&keywords), Arc::clone(&patterns));
    let classifier = HeuristicClassifier::new(keywords, patterns);

    // A classic prize scam
    let spam_message = "WIN FREE CASH NOW!!! Click www.prize-claim.xyz";
    println!("\n=== Analyzing prize scam sample ===");
    println!("Message: {spam_message}");

    let prediction = classifier.classify(spam_message);
    let result = engine.explain(spam_message, prediction.label, prediction.confidence);

    println!("Verdict: {} ({:.2}%)", result.prediction, result.confidence);
    println!("Flagged terms: {:?}", result.suspicious_words);
    for reason in &result.explanation {
        println!("  - {reason}");
    }
    for intent in &result.scammer_intent {
        println!("  {} {}: {}", intent.icon, intent.goal, intent.description);
    }

    match result.prediction {
        spamsight::Verdict::Spam => println!("\n✅ SUCCESS: This scam would be flagged as spam"),
        spamsight::Verdict::Ham => println!("\n❌ MISSED: This scam would be accepted"),
    }

    // A legitimate everyday message
    let ham_message = "Hi, are we still meeting for lunch today?";
    println!("\n\n=== Analyzing legitimate sample ===");
    println!("Message: {ham_message}");

    let prediction = classifier.classify(ham_message);
    let result = engine.explain(ham_message, prediction.label, prediction.confidence);

    println!("Verdict: {} ({:.2}%)", result.prediction, result.confidence);
    println!("Flagged terms: {:?}", result.suspicious_words);
    for reason in &result.explanation {
        println!("  - {reason}");
    }

    match result.prediction {
        spamsight::Verdict::Ham => println!("\n✅ GOOD: Legitimate message would be accepted"),
        spamsight::Verdict::Spam => println!("\n⚠️  WARNING: Legitimate message would be flagged"),
    }

    Ok(())
}
