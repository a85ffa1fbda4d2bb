use std::collections::BTreeSet;

use quill_core::corpus::Corpus;
use quill_core::distance::levenshtein_within;

/// Upper bound on suggestions returned for one flagged word
pub const MAX_SUGGESTIONS: usize = 5;

/// Generates correction candidates from the vocabulary and ranks them by
/// frequency and bigram context.
pub struct CandidateRanker<'a> {
    corpus: &'a Corpus,
    max_distance: usize,
}

impl<'a> CandidateRanker<'a> {
    pub fn new(corpus: &'a Corpus, max_distance: usize) -> Self {
        Self {
            corpus,
            max_distance,
        }
    }

    /// Every vocabulary word within `max_distance` edits of `word`.
    ///
    /// Scans the whole vocabulary; cost grows linearly with its size.
    pub fn generate(&self, word: &str) -> BTreeSet<String> {
        let word = word.to_lowercase();

        self.corpus
            .words()
            .filter(|candidate| levenshtein_within(&word, candidate, self.max_distance).is_some())
            .map(str::to_string)
            .collect()
    }

    /// Order candidates best first and keep the top [`MAX_SUGGESTIONS`].
    ///
    /// Equal scores fall back to alphabetical order.
    pub fn rank<I, S>(&self, candidates: I, previous: Option<&str>) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let context = previous
            .map(str::to_lowercase)
            .filter(|word| !self.corpus.is_function_word(word));

        let mut scored: Vec<(String, f64)> = candidates
            .into_iter()
            .map(|candidate| {
                let candidate = candidate.as_ref().to_string();
                let score = self.score(&candidate, context.as_deref());
                (candidate, score)
            })
            .collect();

        scored.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        scored.dedup_by(|a, b| a.0 == b.0);

        scored
            .into_iter()
            .take(MAX_SUGGESTIONS)
            .map(|(candidate, _)| candidate)
            .collect()
    }

    /// Generate and rank in one step
    pub fn suggest(&self, word: &str, previous: Option<&str>) -> Vec<String> {
        let candidates = self.generate(word);
        tracing::debug!("{} candidates for '{}'", candidates.len(), word);
        self.rank(&candidates, previous)
    }

    fn score(&self, candidate: &str, context: Option<&str>) -> f64 {
        let frequency = self.corpus.relative_frequency(candidate);
        match context {
            Some(previous) => frequency + self.corpus.bigram_probability(previous, candidate),
            None => frequency,
        }
    }
}
