use std::sync::Arc;

use quill_config::correction::CorrectionConfig;
use quill_core::corpus::Corpus;

use crate::function_words::FUNCTION_WORDS;
use crate::processor::EnglishProcessor;


#[rustfmt::skip]
const COUNTS: &[(&str, u64)] = &[
    ("ai", 20), ("help", 30), ("many", 40), ("field", 12), ("bitcoin", 8),
    ("rise", 6), ("move", 6), ("year", 25), ("money", 30), ("man", 20),
    ("any", 5), ("go", 15), ("come", 10), ("price", 9), ("automatically", 2),
    ("am", 10), ("is", 50), ("are", 40), ("was", 30), ("were", 20),
    ("has", 30), ("have", 30), ("had", 20),
];

const BIGRAMS: &[(&str, &str, u64)] = &[
    ("ai", "help", 5),
    ("many", "field", 3),
    ("bitcoin", "is", 2),
    ("bitcoin", "has", 2),
    ("bitcoin", "price", 4),
];

/// Small in-memory corpus shared by the scenario tests
pub(crate) fn corpus() -> Arc<Corpus> {
    Arc::new(Corpus::new(
        COUNTS.iter().map(|(word, _)| word.to_string()),
        COUNTS.iter().map(|(word, count)| (word.to_string(), *count)),
        BIGRAMS
            .iter()
            .map(|(a, b, count)| ((a.to_string(), b.to_string()), *count)),
        FUNCTION_WORDS,
    ))
}

pub(crate) fn processor() -> EnglishProcessor {
    EnglishProcessor::new(corpus(), CorrectionConfig::default())
}

pub(crate) fn processor_with_threshold(real_word_threshold: f64) -> EnglishProcessor {
    let config = CorrectionConfig {
        real_word_threshold,
        ..CorrectionConfig::default()
    };
    EnglishProcessor::new(corpus(), config)
}
