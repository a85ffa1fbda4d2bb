use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use quill_config::Config;

/// Settings shared by every subcommand
#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// JSON config file; environment variables apply when omitted
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Newline-delimited vocabulary file
    #[arg(long, global = true)]
    pub vocabulary: Option<String>,

    /// Unigram counts (word<TAB>count)
    #[arg(long, global = true)]
    pub unigrams: Option<String>,

    /// Bigram counts (first<TAB>second<TAB>count)
    #[arg(long, global = true)]
    pub bigrams: Option<String>,

    /// Bigram probability below which a known word is flagged
    #[arg(long, global = true)]
    pub threshold: Option<f64>,

    /// Maximum edit distance for suggestions
    #[arg(long, global = true)]
    pub max_distance: Option<usize>,
}

/// Read a config file written by hand or by `serde_json`
fn load_config_file(path: &Path) -> anyhow::Result<Config> {
    tracing::info!("Loading config from {}", path.display());
    let file =
        File::open(path).with_context(|| format!("failed to open config {}", path.display()))?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    Ok(config)
}

/// File or environment config, with command-line flags on top
pub fn resolve(args: &ConfigArgs) -> anyhow::Result<Config> {
    let mut config = match &args.config {
        Some(path) => load_config_file(path)?,
        None => Config::new(),
    };

    if let Some(path) = &args.vocabulary {
        config.corpus.vocabulary_path = path.clone();
    }
    if let Some(path) = &args.unigrams {
        config.corpus.unigram_path = path.clone();
    }
    if let Some(path) = &args.bigrams {
        config.corpus.bigram_path = path.clone();
    }
    if let Some(threshold) = args.threshold {
        config.correction.real_word_threshold = threshold;
    }
    if let Some(distance) = args.max_distance {
        config.correction.max_edit_distance = distance;
    }

    Ok(config)
}
