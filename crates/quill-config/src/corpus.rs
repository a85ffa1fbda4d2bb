use std::env;

use serde::{Deserialize, Serialize};

fn default_vocabulary_path() -> String {
    "data/vocabulary.txt".to_string()
}

fn default_unigram_path() -> String {
    "data/unigram_counts.tsv".to_string()
}

fn default_bigram_path() -> String {
    "data/bigram_counts.tsv".to_string()
}

/// Locations of the corpus artifacts produced by the offline pipeline
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CorpusConfig {
    /// Newline-delimited word list
    #[serde(default = "default_vocabulary_path")]
    pub vocabulary_path: String,
    /// `word\tcount` table
    #[serde(default = "default_unigram_path")]
    pub unigram_path: String,
    /// `first\tsecond\tcount` table
    #[serde(default = "default_bigram_path")]
    pub bigram_path: String,
}

impl CorpusConfig {
    pub fn new() -> Self {
        let vocabulary_path =
            env::var("QUILL_VOCABULARY").unwrap_or_else(|_| default_vocabulary_path());
        let unigram_path = env::var("QUILL_UNIGRAMS").unwrap_or_else(|_| default_unigram_path());
        let bigram_path = env::var("QUILL_BIGRAMS").unwrap_or_else(|_| default_bigram_path());

        Self {
            vocabulary_path,
            unigram_path,
            bigram_path,
        }
    }
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            vocabulary_path: default_vocabulary_path(),
            unigram_path: default_unigram_path(),
            bigram_path: default_bigram_path(),
        }
    }
}
