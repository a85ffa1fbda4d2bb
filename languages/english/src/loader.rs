use std::path::Path;

use quill_config::corpus::CorpusConfig;
use quill_core::corpus::{Corpus, LoadError, parse_bigrams, parse_unigrams, parse_vocabulary};

use crate::function_words::FUNCTION_WORDS;

pub struct CorpusLoader;

impl CorpusLoader {
    /// Load all three tables from the configured paths
    pub fn load(config: &CorpusConfig) -> Result<Corpus, LoadError> {
        Self::load_from_files(
            Path::new(&config.vocabulary_path),
            Path::new(&config.unigram_path),
            Path::new(&config.bigram_path),
        )
    }

    pub fn load_from_files(
        vocabulary: &Path,
        unigrams: &Path,
        bigrams: &Path,
    ) -> Result<Corpus, LoadError> {
        tracing::info!("Loading vocabulary from file: {}", vocabulary.display());
        let words = parse_vocabulary(&read(vocabulary)?);

        tracing::info!("Loading unigram counts from file: {}", unigrams.display());
        let (unigram_entries, skipped) = parse_unigrams(&read(unigrams)?);
        if skipped > 0 {
            tracing::warn!("Skipped {} malformed lines in {}", skipped, unigrams.display());
        }

        tracing::info!("Loading bigram counts from file: {}", bigrams.display());
        let (bigram_entries, skipped) = parse_bigrams(&read(bigrams)?);
        if skipped > 0 {
            tracing::warn!("Skipped {} malformed lines in {}", skipped, bigrams.display());
        }

        let corpus = Corpus::new(words, unigram_entries, bigram_entries, FUNCTION_WORDS);
        tracing::info!(
            "Loaded corpus: {} vocabulary words, {} unigram tokens, {} bigram pairs",
            corpus.vocabulary_size(),
            corpus.total_unigrams(),
            corpus.bigram_entries()
        );

        Ok(corpus)
    }
}

fn read(path: &Path) -> Result<String, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound(path.display().to_string()));
    }
    let bytes = std::fs::read(path)?;
    String::from_utf8(bytes)
        .map_err(|_| LoadError::InvalidFormat(format!("{} is not valid UTF-8", path.display())))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn file_with(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_from_files() {
        let vocabulary = file_with("many\nfield\nhelp\n");
        let unigrams = file_with("many\t4\nfield\t6\nhelp\t10\n");
        let bigrams = file_with("many\tfield\t3\nbad line\n");

        let corpus =
            CorpusLoader::load_from_files(vocabulary.path(), unigrams.path(), bigrams.path())
                .unwrap();

        assert!(corpus.contains("many"));
        // Function words are always part of the vocabulary
        assert!(corpus.contains("the"));
        assert!(corpus.is_function_word("not"));
        assert_eq!(corpus.vocabulary_size(), 3 + FUNCTION_WORDS.len());
        assert_eq!(corpus.total_unigrams(), 20);
        assert_eq!(corpus.bigram_count("many", "field"), 3);
    }

    #[test]
    fn test_load_from_config() {
        let vocabulary = file_with("year\n");
        let unigrams = file_with("year\t2\n");
        let bigrams = file_with("");
        let config = CorpusConfig {
            vocabulary_path: vocabulary.path().display().to_string(),
            unigram_path: unigrams.path().display().to_string(),
            bigram_path: bigrams.path().display().to_string(),
        };

        let corpus = CorpusLoader::load(&config).unwrap();
        assert_eq!(corpus.frequency("year"), 2);
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let unigrams = file_with("");
        let bigrams = file_with("");
        let result = CorpusLoader::load_from_files(
            Path::new("/definitely/not/here/vocabulary.txt"),
            unigrams.path(),
            bigrams.path(),
        );
        assert!(matches!(result, Err(LoadError::FileNotFound(_))));
    }

    #[test]
    fn test_binary_file_is_rejected() {
        let mut vocabulary = NamedTempFile::new().unwrap();
        vocabulary.write_all(&[0xff, 0xfe, 0x00]).unwrap();
        let unigrams = file_with("");
        let bigrams = file_with("");
        let result =
            CorpusLoader::load_from_files(vocabulary.path(), unigrams.path(), bigrams.path());
        assert!(matches!(result, Err(LoadError::InvalidFormat(_))));
    }
}
