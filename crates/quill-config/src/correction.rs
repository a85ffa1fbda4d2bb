use std::env;

use serde::{Deserialize, Serialize};

fn default_real_word_threshold() -> f64 {
    1e-6
}

fn default_max_edit_distance() -> usize {
    2
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CorrectionConfig {
    /// Smoothed bigram probability below which a known word is flagged.
    /// Depends on corpus and vocabulary size, both of which move the
    /// Laplace denominator.
    #[serde(default = "default_real_word_threshold")]
    pub real_word_threshold: f64,
    /// Largest edit distance a suggestion may have
    #[serde(default = "default_max_edit_distance")]
    pub max_edit_distance: usize,
}

impl CorrectionConfig {
    pub fn new() -> Self {
        let real_word_threshold = env::var("QUILL_REAL_WORD_THRESHOLD")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_real_word_threshold);

        let max_edit_distance = env::var("QUILL_MAX_EDIT_DISTANCE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_max_edit_distance);

        Self {
            real_word_threshold,
            max_edit_distance,
        }
    }
}

impl Default for CorrectionConfig {
    fn default() -> Self {
        Self {
            real_word_threshold: default_real_word_threshold(),
            max_edit_distance: default_max_edit_distance(),
        }
    }
}
