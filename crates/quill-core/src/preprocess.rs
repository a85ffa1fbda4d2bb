use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    // Default EN preprocessor
    fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        // Unicode normalization (NFKC) folds ligatures and full-width letters
        let text: String = text.nfkc().collect();

        text.to_lowercase()
    }

    /// Split processed text into words made only of `a-z`.
    ///
    /// Runs are cut at anything that is not a letter, digit or underscore, and
    /// a run touching a digit or non-ASCII letter ("covid19", "café") is
    /// dropped whole rather than split into fragments.
    fn words(&self, text: &str) -> Vec<String> {
        self.process(text)
            .split(|c: char| !(c.is_alphanumeric() || c == '_'))
            .filter(|w| !w.is_empty() && w.chars().all(|c| c.is_ascii_lowercase()))
            .map(str::to_string)
            .collect()
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_drop_digits_and_punctuation() {
        let words = DefaultPreprocessor.words("62% of Bitcoin has not moved, in 1 year!");
        assert_eq!(words, vec!["of", "bitcoin", "has", "not", "moved", "in", "year"]);
    }

    #[test]
    fn test_words_split_contractions() {
        let words = DefaultPreprocessor.words("Don't stop");
        assert_eq!(words, vec!["don", "t", "stop"]);
    }

    #[test]
    fn test_fullwidth_letters_are_folded() {
        let words = DefaultPreprocessor.words("ＡＩ helps");
        assert_eq!(words, vec!["ai", "helps"]);
    }

    #[test]
    fn test_mixed_and_accented_words_are_dropped_whole() {
        assert!(DefaultPreprocessor.words("naïve café covid19 h2o").is_empty());
        assert!(DefaultPreprocessor.words("snake_case x86").is_empty());
    }

    #[test]
    fn test_plain_words_survive_next_to_mixed_ones() {
        let words = DefaultPreprocessor.words("The café near gpt4 is rising.");
        assert_eq!(words, vec!["the", "near", "is", "rising"]);
    }

    #[test]
    fn test_blank_input_yields_nothing() {
        assert!(DefaultPreprocessor.words("   \n").is_empty());
    }
}
