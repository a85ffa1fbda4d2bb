pub mod candidates;
pub mod detector;
pub mod function_words;
pub mod grammar;
pub mod lemmatizer;
pub mod loader;
pub mod participles;
pub mod processor;
pub mod tagger;

#[cfg(test)]
mod tests;

pub use candidates::{CandidateRanker, MAX_SUGGESTIONS};
pub use detector::ErrorDetector;
pub use grammar::GrammarNormalizer;
pub use lemmatizer::EnglishLemmatizer;
pub use loader::CorpusLoader;
pub use processor::EnglishProcessor;
pub use tagger::EnglishTagger;
