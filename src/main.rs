use anyhow::Context;
use clap::{Arg, Command};
use log::LevelFilter;
use spamsight::classifier::{Classifier, HeuristicClassifier};
use spamsight::config::KeywordConfig;
use spamsight::explanation::ExplanationEngine;
use spamsight::intent::Verdict;
use spamsight::patterns::TextPatterns;
use std::io::{IsTerminal, Read};
use std::path::Path;
use std::process;
use std::sync::Arc;

fn main() {
    let matches = Command::new("spamsight")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Explainable spam and phishing analysis for short text messages")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Keyword configuration file (YAML)"),
        )
        .arg(
            Arg::new("generate-config")
                .long("generate-config")
                .value_name("FILE")
                .help("Write the default keyword configuration and exit")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("message")
                .short('m')
                .long("message")
                .value_name("TEXT")
                .help("Message to analyze (reads stdin when omitted)"),
        )
        .arg(
            Arg::new("verdict")
                .long("verdict")
                .value_name("spam|ham")
                .help("Use this verdict instead of the built-in heuristic classifier"),
        )
        .arg(
            Arg::new("confidence")
                .long("confidence")
                .value_name("PERCENT")
                .help("Confidence to report alongside --verdict (default 100.0)"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let log_level = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    if let Some(path) = matches.get_one::<String>("generate-config") {
        if let Err(e) = generate_default_config(path) {
            eprintln!("Error writing configuration: {e}");
            process::exit(1);
        }
        return;
    }

    if let Err(e) = run(&matches) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(matches: &clap::ArgMatches) -> anyhow::Result<()> {
    let config = match matches.get_one::<String>("config") {
        Some(path) => KeywordConfig::load_from_file(Path::new(path))?,
        None => KeywordConfig::default(),
    };

    let raw_message = read_message(matches)?;
    let message = raw_message.trim();
    if message.is_empty() {
        anyhow::bail!("message is empty");
    }

    let keywords = Arc::new(config);
    let patterns = Arc::new(TextPatterns::new()?);
    let engine = ExplanationEngine::with_shared(Arc::clone(&keywords), Arc::clone(&patterns));

    let (verdict, confidence) = match matches.get_one::<String>("verdict") {
        Some(raw) => {
            let verdict: Verdict = raw.parse()?;
            let confidence = match matches.get_one::<String>("confidence") {
                Some(raw) => raw
                    .parse::<f64>()
                    .with_context(|| format!("invalid confidence value '{raw}'"))?,
                None => 100.0,
            };
            (verdict, confidence)
        }
        None => {
            let prediction = HeuristicClassifier::new(keywords, patterns).classify(message);
            log::debug!(
                "heuristic classifier verdict: {} ({:.2}%)",
                prediction.label,
                prediction.confidence
            );
            (prediction.label, prediction.confidence)
        }
    };

    let result = engine.explain(message, verdict, confidence);
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

fn read_message(matches: &clap::ArgMatches) -> anyhow::Result<String> {
    if let Some(text) = matches.get_one::<String>("message") {
        return Ok(text.clone());
    }

    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        anyhow::bail!("no message provided");
    }

    let mut buffer = String::new();
    stdin
        .read_to_string(&mut buffer)
        .context("failed to read message from stdin")?;
    Ok(buffer)
}

fn generate_default_config(path: &str) -> anyhow::Result<()> {
    let yaml = KeywordConfig::default().to_yaml()?;
    std::fs::write(path, yaml)
        .with_context(|| format!("failed to write configuration to {path}"))?;
    println!("Default keyword configuration written to: {path}");
    println!("Edit the lists, then run with: spamsight -c {path} -m \"...\"");
    Ok(())
}
