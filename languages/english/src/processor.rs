use std::sync::Arc;

use quill_config::Config;
use quill_config::correction::CorrectionConfig;
use quill_core::corpus::{Corpus, LoadError};
use quill_core::language::{LanguageProcessor, Lemmatizer, PosTag, TagError, Tagger};
use quill_core::preprocess::{DefaultPreprocessor, Preprocessor};
use quill_core::types::{Analysis, DisplayTokens, ErrorRecord, Token};

use crate::detector::ErrorDetector;
use crate::function_words::is_auxiliary;
use crate::grammar::GrammarNormalizer;
use crate::lemmatizer::EnglishLemmatizer;
use crate::loader::CorpusLoader;
use crate::tagger::EnglishTagger;

/// English spelling and auxiliary-grammar checker
pub struct EnglishProcessor {
    corpus: Arc<Corpus>,
    tagger: Box<dyn Tagger>,
    lemmatizer: Box<dyn Lemmatizer>,
    preprocessor: DefaultPreprocessor,
    normalizer: GrammarNormalizer,
    config: CorrectionConfig,
}

impl EnglishProcessor {
    /// Processor with the bundled rule-based tagger and a corpus-validated lemmatizer
    pub fn new(corpus: Arc<Corpus>, config: CorrectionConfig) -> Self {
        let lemmatizer = EnglishLemmatizer::with_lexicon(Arc::clone(&corpus));
        Self::with_tagging(
            corpus,
            config,
            Box::new(EnglishTagger::new()),
            Box::new(lemmatizer),
        )
    }

    /// Processor with caller-supplied tagging and lemmatization
    pub fn with_tagging(
        corpus: Arc<Corpus>,
        config: CorrectionConfig,
        tagger: Box<dyn Tagger>,
        lemmatizer: Box<dyn Lemmatizer>,
    ) -> Self {
        Self {
            corpus,
            tagger,
            lemmatizer,
            preprocessor: DefaultPreprocessor,
            normalizer: GrammarNormalizer::new(),
            config,
        }
    }

    /// Load the corpus tables named in `config` and build a processor over them
    pub fn from_config(config: &Config) -> Result<Self, LoadError> {
        let corpus = CorpusLoader::load(&config.corpus)?;
        Ok(Self::new(Arc::new(corpus), config.correction.clone()))
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// Spelling and real-word errors, in token order
    pub fn detect_errors(&self, text: &str) -> Vec<ErrorRecord> {
        let tokens = self.tokenize(text);
        self.errors_for(&tokens)
    }

    /// Display tokens with auxiliary-grammar corrections applied
    pub fn display_tokens(&self, text: &str) -> DisplayTokens {
        let tokens = self.tokenize(text);
        self.display_for(&tokens)
    }

    /// Both operations over a single tokenization
    pub fn analyze(&self, text: &str) -> Analysis {
        let tokens = self.tokenize(text);
        let errors = self.errors_for(&tokens);
        let display = self.display_for(&tokens);
        let corrections = display.corrections.len();
        tracing::debug!(
            "Analyzed {} tokens: {} errors, {} grammar corrections",
            tokens.len(),
            errors.len(),
            corrections
        );
        Analysis {
            tokens,
            errors,
            display,
        }
    }

    fn errors_for(&self, tokens: &[Token]) -> Vec<ErrorRecord> {
        ErrorDetector::new(&self.corpus, &self.config).detect(tokens)
    }

    fn display_for(&self, tokens: &[Token]) -> DisplayTokens {
        let lemmas: Vec<&str> = tokens.iter().map(|t| t.lemma.as_str()).collect();
        self.normalizer.normalize(&lemmas)
    }

    /// Tag every word, or the reason the tagger could not
    fn tag(&self, words: &[String]) -> Result<Vec<(String, PosTag)>, TagError> {
        let tagged = self.tagger.tag(words).and_then(|tagged| {
            if tagged.len() == words.len() {
                Ok(tagged)
            } else {
                Err(TagError::LengthMismatch {
                    expected: words.len(),
                    actual: tagged.len(),
                })
            }
        });

        if let Err(err) = &tagged {
            tracing::warn!("Tagging failed, lemmatizing as nouns: {}", err);
        }
        tagged
    }

    fn lemmatize(&self, word: &str, tag: PosTag) -> String {
        if is_auxiliary(word) || tag.is_closed_class() {
            return word.to_string();
        }
        self.lemmatizer
            .lemmatize(word, tag.lemma_hint())
            .unwrap_or_else(|| word.to_string())
    }
}

impl LanguageProcessor for EnglishProcessor {
    fn language_code(&self) -> &str {
        "en"
    }

    fn normalize(&self, text: &str) -> String {
        self.preprocessor.process(text)
    }

    fn tokenize(&self, text: &str) -> Vec<Token> {
        let words = self.preprocessor.words(text);
        let tagged = self.tag(&words);

        words
            .into_iter()
            .enumerate()
            .map(|(position, surface)| {
                let (tag, lemma) = match &tagged {
                    Ok(tagged) => {
                        let tag = tagged[position].1;
                        (tag, self.lemmatize(&surface, tag))
                    }
                    // Only the token the tagger choked on keeps its surface
                    Err(TagError::Untaggable(token)) if *token == surface => {
                        (PosTag::Noun, surface.clone())
                    }
                    Err(_) => (PosTag::Noun, self.lemmatize(&surface, PosTag::Noun)),
                };
                Token {
                    position,
                    surface,
                    lemma,
                    tag,
                }
            })
            .collect()
    }
}
