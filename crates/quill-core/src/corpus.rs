use std::collections::{HashMap, HashSet};

/// Immutable language-model tables shared by detection and ranking.
///
/// Built once at startup and only read afterwards, so a single instance can be
/// shared across threads behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    vocabulary: HashSet<String>,
    function_words: HashSet<String>,
    unigrams: HashMap<String, u64>,
    bigrams: HashMap<String, HashMap<String, u64>>,
    total_unigrams: u64,
}

impl Corpus {
    /// Assemble the tables. Every key is lowercased and the function words are
    /// merged into the vocabulary.
    pub fn new<V, U, B>(vocabulary: V, unigrams: U, bigrams: B, function_words: &[&str]) -> Self
    where
        V: IntoIterator<Item = String>,
        U: IntoIterator<Item = (String, u64)>,
        B: IntoIterator<Item = ((String, String), u64)>,
    {
        let function_words: HashSet<String> =
            function_words.iter().map(|w| w.to_lowercase()).collect();

        let mut vocabulary: HashSet<String> =
            vocabulary.into_iter().map(|w| w.to_lowercase()).collect();
        vocabulary.extend(function_words.iter().cloned());

        let mut unigram_table: HashMap<String, u64> = HashMap::new();
        for (word, count) in unigrams {
            *unigram_table.entry(word.to_lowercase()).or_insert(0) += count;
        }
        let total_unigrams = unigram_table.values().sum();

        let mut bigram_table: HashMap<String, HashMap<String, u64>> = HashMap::new();
        for ((first, second), count) in bigrams {
            *bigram_table
                .entry(first.to_lowercase())
                .or_default()
                .entry(second.to_lowercase())
                .or_insert(0) += count;
        }

        Self {
            vocabulary,
            function_words,
            unigrams: unigram_table,
            bigrams: bigram_table,
            total_unigrams,
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.vocabulary.contains(word)
    }

    pub fn is_function_word(&self, word: &str) -> bool {
        self.function_words.contains(word)
    }

    /// Iterate the whole vocabulary in unspecified order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.vocabulary.iter().map(String::as_str)
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Unigram count, 0 for unseen words
    pub fn frequency(&self, word: &str) -> u64 {
        self.unigrams.get(word).copied().unwrap_or(0)
    }

    pub fn total_unigrams(&self) -> u64 {
        self.total_unigrams
    }

    /// Relative unigram frequency, 0.0 when the table is empty
    pub fn relative_frequency(&self, word: &str) -> f64 {
        if self.total_unigrams == 0 {
            return 0.0;
        }
        self.frequency(word) as f64 / self.total_unigrams as f64
    }

    pub fn bigram_count(&self, first: &str, second: &str) -> u64 {
        self.bigrams
            .get(first)
            .and_then(|followers| followers.get(second))
            .copied()
            .unwrap_or(0)
    }

    pub fn bigram_entries(&self) -> usize {
        self.bigrams.values().map(HashMap::len).sum()
    }

    /// P(second | first) with add-one smoothing:
    /// `(count(first, second) + 1) / (count(first) + |V|)`
    pub fn bigram_probability(&self, first: &str, second: &str) -> f64 {
        let first = first.to_lowercase();
        let second = second.to_lowercase();

        let numerator = self.bigram_count(&first, &second) + 1;
        let denominator = self.frequency(&first) + self.vocabulary_size() as u64;

        // Vocabulary is never empty once function words are merged in, but an
        // empty corpus still must not divide by zero
        numerator as f64 / denominator.max(1) as f64
    }
}

/// Parse a newline-delimited word list, skipping blank lines
pub fn parse_vocabulary(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Parse `word\tcount` lines. Returns the entries and the number of malformed
/// lines that were skipped.
pub fn parse_unigrams(content: &str) -> (Vec<(String, u64)>, usize) {
    let mut entries = Vec::new();
    let mut skipped = 0;

    for line in content.lines().filter(|l| !l.trim().is_empty()) {
        let parts: Vec<&str> = line.trim().split('\t').collect();
        match parts.as_slice() {
            [word, count] => match count.trim().parse::<u64>() {
                Ok(count) => entries.push((word.trim().to_lowercase(), count)),
                Err(_) => skipped += 1,
            },
            _ => skipped += 1,
        }
    }

    (entries, skipped)
}

/// Parse `first\tsecond\tcount` lines. Returns the entries and the number of
/// malformed lines that were skipped.
pub fn parse_bigrams(content: &str) -> (Vec<((String, String), u64)>, usize) {
    let mut entries = Vec::new();
    let mut skipped = 0;

    for line in content.lines().filter(|l| !l.trim().is_empty()) {
        let parts: Vec<&str> = line.trim().split('\t').collect();
        match parts.as_slice() {
            [first, second, count] => match count.trim().parse::<u64>() {
                Ok(count) => entries.push((
                    (first.trim().to_lowercase(), second.trim().to_lowercase()),
                    count,
                )),
                Err(_) => skipped += 1,
            },
            _ => skipped += 1,
        }
    }

    (entries, skipped)
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
