use quill_config::correction::CorrectionConfig;
use quill_core::corpus::Corpus;
use quill_core::types::{ErrorKind, ErrorRecord, Token};

use crate::candidates::CandidateRanker;

/// Flags non-word and real-word errors in a lemmatized token stream
pub struct ErrorDetector<'a> {
    corpus: &'a Corpus,
    ranker: CandidateRanker<'a>,
    threshold: f64,
}

impl<'a> ErrorDetector<'a> {
    pub fn new(corpus: &'a Corpus, config: &CorrectionConfig) -> Self {
        Self {
            corpus,
            ranker: CandidateRanker::new(corpus, config.max_edit_distance),
            threshold: config.real_word_threshold,
        }
    }

    /// One record per flagged token, in token order
    pub fn detect(&self, tokens: &[Token]) -> Vec<ErrorRecord> {
        let mut errors = Vec::new();

        for (i, token) in tokens.iter().enumerate() {
            let lemma = token.lemma.to_lowercase();
            let previous = i
                .checked_sub(1)
                .and_then(|p| tokens.get(p))
                .map(|t| t.lemma.to_lowercase());

            if self.corpus.is_function_word(&lemma) {
                continue;
            }

            let kind = if !self.corpus.contains(&lemma) {
                ErrorKind::NonWord
            } else {
                match previous.as_deref() {
                    Some(prev) if !self.corpus.is_function_word(prev) => {
                        let probability = self.corpus.bigram_probability(prev, &lemma);
                        if probability >= self.threshold {
                            continue;
                        }
                        tracing::debug!(
                            "P({} | {}) = {:e} below threshold {:e}",
                            lemma,
                            prev,
                            probability,
                            self.threshold
                        );
                        ErrorKind::RealWord
                    }
                    _ => continue,
                }
            };

            let suggestions = self.ranker.suggest(&lemma, previous.as_deref());
            tracing::debug!(
                "Flagged '{}' as {} with {} suggestions",
                token.surface,
                kind.as_str(),
                suggestions.len()
            );

            errors.push(ErrorRecord {
                word: token.surface.clone(),
                lemma,
                position: token.position,
                kind,
                suggestions,
            });
        }

        errors
    }
}
