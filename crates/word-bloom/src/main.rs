//! # word-bloom
//!
//! Command-line front end for the word Bloom filter.
//!
//! Builds a filter, adds the `--add` sentences in order, then prints one
//! `true`/`false` line per `--check` sentence. Run without sentences it
//! replays the demonstration: add "aku mau makan" and "aku mau mandi",
//! then check "aku mau makan" and "aku mau".
//!
//! ```text
//! word-bloom --capacity 100 --error-rate 0.001 \
//!     --add "aku mau makan" --add "aku mau mandi" \
//!     --check "aku mau"
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use word_bloom::{BloomConfig, BloomFilter, Metrics};

const DEMO_ADDS: [&str; 2] = ["aku mau makan", "aku mau mandi"];
const DEMO_CHECKS: [&str; 2] = ["aku mau makan", "aku mau"];

#[derive(Parser, Debug)]
#[command(name = "word-bloom")]
#[command(about = "Approximate word-sequence membership with a Bloom filter")]
struct Args {
    /// Expected number of distinct words
    #[arg(short = 'n', long, default_value_t = 100)]
    capacity: usize,

    /// Target false positive rate, strictly between 0 and 1
    #[arg(short = 'e', long, default_value_t = 0.001)]
    error_rate: f64,

    /// JSON config file with `capacity` and `error_rate` (overrides the flags)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Sentence to add (repeatable)
    #[arg(short, long = "add")]
    adds: Vec<String>,

    /// Sentence to check (repeatable)
    #[arg(short = 'k', long = "check")]
    checks: Vec<String>,

    /// Log filter statistics when done
    #[arg(long)]
    stats: bool,
}

fn main() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => BloomConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => BloomConfig::new(args.capacity, args.error_rate)
            .context("Invalid filter parameters")?,
    };

    let metrics = Arc::new(Metrics::new());
    let mut filter = BloomFilter::with_metrics(config.capacity, config.error_rate, metrics.clone())
        .context("Failed to create bloom filter")?;

    info!(
        size_bits = filter.size_bits(),
        hash_count = filter.hash_count(),
        "Bloom filter ready"
    );

    let demo = args.adds.is_empty() && args.checks.is_empty();
    let (adds, checks): (Vec<&str>, Vec<&str>) = if demo {
        (DEMO_ADDS.to_vec(), DEMO_CHECKS.to_vec())
    } else {
        (
            args.adds.iter().map(String::as_str).collect(),
            args.checks.iter().map(String::as_str).collect(),
        )
    };

    for sentence in adds {
        filter.add(sentence);
    }
    for sentence in checks {
        println!("{}", filter.check(sentence));
    }

    if args.stats {
        let snapshot = metrics.snapshot();
        info!(
            bits_set = filter.bits_set(),
            fill_ratio = filter.fill_ratio(),
            estimated_fpr = filter.estimated_false_positive_rate(),
            sentences_added = snapshot.sentences_added,
            tokens_added = snapshot.tokens_added,
            checks_performed = snapshot.checks_performed,
            checks_positive = snapshot.checks_positive,
            "Filter statistics"
        );
    }

    Ok(())
}
