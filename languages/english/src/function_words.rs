/// Closed-class words that are never flagged and never rewritten
#[rustfmt::skip]
pub const FUNCTION_WORDS: &[&str] = &[
    "this", "that", "which", "who", "whom", "whose",
    "it", "they", "we", "he", "she",
    "a", "an", "the",
    "and", "or", "but",
    "of", "in", "on", "for", "to", "with", "by", "at",
    "not",
];

pub const BE_AUXILIARIES: &[&str] = &["am", "is", "are", "was", "were"];

pub const HAVE_AUXILIARIES: &[&str] = &["has", "have", "had"];

pub const NEGATOR: &str = "not";

pub fn is_function_word(word: &str) -> bool {
    FUNCTION_WORDS.contains(&word)
}

pub fn is_be_auxiliary(word: &str) -> bool {
    BE_AUXILIARIES.contains(&word)
}

pub fn is_have_auxiliary(word: &str) -> bool {
    HAVE_AUXILIARIES.contains(&word)
}

/// Auxiliary forms kept verbatim instead of being lemmatized
pub fn is_auxiliary(word: &str) -> bool {
    is_be_auxiliary(word) || is_have_auxiliary(word)
}
