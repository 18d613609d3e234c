//! Feedback Sentiment CLI
//!
//! Tags feedback comments with a sentiment label from the command line.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use feedback_sentiment::{load_config, AppConfig, ClassificationInput, SentimentClassifier};
use serde::Serialize;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "feedback-sentiment")]
#[command(about = "Rule-based sentiment tagging for customer feedback", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (json, toml or yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level, overrides the configuration
    #[arg(short, long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a single comment
    Classify {
        /// Comment text
        #[arg(short, long)]
        text: Option<String>,

        /// Satisfaction rating (1-5)
        #[arg(short, long, default_value = "3", allow_negative_numbers = true)]
        rating: i32,

        /// Skip the emoji stage
        #[arg(long)]
        plain: bool,

        /// Print the decision stage and matched words as JSON
        #[arg(long)]
        explain: bool,
    },

    /// Classify a JSON-lines file of {"text": ..., "rating": ...} objects
    Batch {
        /// Input file
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Print the effective lexicon
    Lexicon,
}

#[derive(Serialize)]
struct LabeledInput<'a> {
    #[serde(flatten)]
    input: &'a ClassificationInput,
    sentiment: feedback_sentiment::SentimentLabel,
}

fn init_logging(config: &AppConfig, override_level: Option<&str>) {
    let level = override_level.unwrap_or(config.logging.level.as_str());
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.logging.json_format {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn run_batch(classifier: &SentimentClassifier, input: &Path) -> Result<()> {
    let file = std::fs::File::open(input)
        .with_context(|| format!("Failed to open {}", input.display()))?;
    let reader = BufReader::new(file);
    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut count = 0usize;

    for (index, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read line {}", index + 1))?;
        if line.trim().is_empty() {
            continue;
        }
        let record: ClassificationInput = serde_json::from_str(&line)
            .with_context(|| format!("Malformed input on line {}", index + 1))?;

        let labeled = LabeledInput {
            sentiment: classifier.classify_input(&record),
            input: &record,
        };
        serde_json::to_writer(&mut out, &labeled)?;
        writeln!(out)?;
        count += 1;
    }

    out.flush()?;
    info!("Classified {} comments from {}", count, input.display());
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => AppConfig::default(),
    };
    init_logging(&config, cli.log_level.as_deref());

    let classifier = config.build_classifier()?;

    match cli.command {
        Commands::Classify {
            text,
            rating,
            plain,
            explain,
        } => {
            let classifier = if plain {
                classifier.with_emoji(false)
            } else {
                classifier
            };

            if explain {
                let result = classifier.explain(text.as_deref(), rating);
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{}", classifier.classify(text.as_deref(), rating));
            }
        }
        Commands::Batch { input } => run_batch(&classifier, &input)?,
        Commands::Lexicon => {
            println!("{}", serde_json::to_string_pretty(classifier.lexicon())?);
        }
    }

    Ok(())
}
